use serde_json::{json, Value};
use std::sync::Arc;
use std::thread;

use wryte::memory::MemorySink;
use wryte::{ContextObject, FormatterKind, LogRecord, RecordFormatter, Severity, Wryte, WryteConfig, WryteError};

fn bare() -> Wryte {
    Wryte::new(WryteConfig {
        hostname: Some("h1".to_string()),
        color: false,
        ..WryteConfig::bare("svc")
    })
}

fn json_lines(sink: &MemorySink) -> Vec<Value> {
    sink.lines()
        .iter()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn json_handler_emits_enriched_record() {
    let log = bare();
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), Some("mem"), FormatterKind::Json, "debug").unwrap();

    log.info(
        "started",
        &[
            "env=prod".into(),
            r#"{"port": 8080}"#.into(),
            json!({"tags": ["a", "b"]}).into(),
            "oops".into(),
        ],
    );

    let records = json_lines(&sink);
    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record["name"], json!("svc"));
    assert_eq!(record["hostname"], json!("h1"));
    assert_eq!(record["pid"], json!(std::process::id()));
    assert_eq!(record["level"], json!("INFO"));
    assert_eq!(record["message"], json!("started"));
    assert_eq!(record["env"], json!("prod"));
    assert_eq!(record["port"], json!(8080));
    assert_eq!(record["tags"], json!(["a", "b"]));
    assert_eq!(record["_bad_object"], json!("oops"));
    assert!(record["timestamp"].is_string());
}

#[test]
fn per_level_methods_use_their_severity() {
    let log = bare();
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), None, FormatterKind::Json, "debug").unwrap();

    log.debug("d", &[]);
    log.info("i", &[]);
    log.warn("w", &[]);
    log.warning("w2", &[]);
    log.error("e", &[]);
    log.critical("c", &[]);

    let levels: Vec<Value> = json_lines(&sink).into_iter().map(|r| r["level"].clone()).collect();
    assert_eq!(
        levels,
        vec![json!("DEBUG"), json!("INFO"), json!("WARNING"), json!("WARNING"), json!("ERROR"), json!("CRITICAL")]
    );
    let severities: Vec<Severity> = sink.entries().into_iter().map(|(s, _)| s).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Warning,
            Severity::Error,
            Severity::Critical
        ]
    );
}

#[test]
fn each_handler_filters_independently() {
    let log = bare();
    let verbose = Arc::new(MemorySink::new());
    let quiet = Arc::new(MemorySink::new());
    log.add_handler(quiet.clone(), Some("quiet"), FormatterKind::Json, "error").unwrap();
    log.add_handler(verbose.clone(), Some("verbose"), FormatterKind::Console, "debug").unwrap();

    log.debug("a", &[]);
    log.info("b", &[]);
    log.error("c", &[]);

    assert_eq!(verbose.len(), 3);
    assert_eq!(quiet.len(), 1);
    assert_eq!(json_lines(&quiet)[0]["message"], json!("c"));
}

#[test]
fn invalid_level_is_a_configuration_error() {
    let log = bare();
    let err = log
        .add_handler(Arc::new(MemorySink::new()), Some("x"), FormatterKind::Json, "loud")
        .unwrap_err();
    assert!(matches!(err, WryteError::InvalidLevel(ref l) if l == "loud"));
    assert!(log.list_handlers().is_empty());

    assert!(matches!(log.log_named("nope", "m", &[]), Err(WryteError::InvalidLevel(_))));
    assert!(log.log_named("WARN", "m", &[]).is_ok());
}

#[test]
fn remove_handler_removes_all_bindings_with_that_name() {
    let log = bare();
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), Some("dup"), FormatterKind::Json, "info").unwrap();
    log.add_handler(sink.clone(), Some("dup"), FormatterKind::Console, "info").unwrap();
    log.add_handler(sink.clone(), Some("keep"), FormatterKind::Json, "info").unwrap();
    assert_eq!(log.list_handlers(), vec!["dup", "dup", "keep"]);

    log.remove_handler("dup");
    assert_eq!(log.list_handlers(), vec!["keep"]);

    log.remove_handler("missing");
    assert_eq!(log.list_handlers(), vec!["keep"]);

    log.info("m", &[]);
    assert_eq!(sink.len(), 1);
}

#[test]
fn default_handlers_by_mode() {
    let console = Wryte::new(WryteConfig { hostname: Some("h".into()), ..WryteConfig::new("svc") });
    assert_eq!(console.list_handlers(), vec!["_console"]);
    assert_eq!(console.identity().name, "svc");
    assert_eq!(console.identity().hostname, "h");
    assert_eq!(console.identity().pid, std::process::id());

    let json = Wryte::new(WryteConfig { jsonify: true, hostname: Some("h".into()), ..WryteConfig::new("svc") });
    assert_eq!(json.list_handlers(), vec!["_json"]);

    json.remove_handler("_json");
    assert!(json.list_handlers().is_empty());
}

#[test]
fn console_handler_writes_key_value_lines_by_default() {
    let log = bare();
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), None, FormatterKind::Console, "info").unwrap();

    log.info("started", &["env=prod".into()]);

    let line = &sink.lines()[0];
    assert!(line.ends_with(" - svc - INFO - started\n  env=prod"), "{line}");
    assert!(!line.contains("h1"));
}

#[test]
fn pretty_config_indents_json() {
    let log = Wryte::new(WryteConfig {
        pretty: Some(true),
        hostname: Some("h1".into()),
        ..WryteConfig::bare("svc")
    });
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), None, FormatterKind::Json, "info").unwrap();
    log.info("m", &[]);
    assert!(sink.lines()[0].contains("\n    \"hostname\": \"h1\""));
}

struct MessageOnly;

impl RecordFormatter for MessageOnly {
    fn format(&self, record: &LogRecord) -> String {
        record.get_display("message").unwrap_or_default()
    }
}

#[test]
fn custom_formatters_are_supported() {
    let log = bare();
    let sink = Arc::new(MemorySink::new());
    log.add_handler_with_formatter(sink.clone(), Some("plain"), Arc::new(MessageOnly), "info")
        .unwrap();
    log.info("just this", &["k=v".into()]);
    assert_eq!(sink.lines(), vec!["just this"]);
}

#[test]
fn concurrent_logging_and_registration() {
    let log = Arc::new(bare());
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), Some("main"), FormatterKind::Json, "info").unwrap();

    let workers: Vec<_> = (0..4)
        .map(|i| {
            let log = Arc::clone(&log);
            thread::spawn(move || {
                for n in 0..50 {
                    let objects: Vec<ContextObject> = vec![format!("worker={i}").into(), json!({"n": n}).into()];
                    log.info("tick", &objects);
                    let name = format!("tmp-{i}-{n}");
                    log.add_handler(Arc::new(MemorySink::new()), Some(&name), FormatterKind::Json, "critical")
                        .unwrap();
                    log.remove_handler(&name);
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(sink.len(), 200);
    assert_eq!(log.list_handlers(), vec!["main"]);
    for record in json_lines(&sink) {
        assert_eq!(record["message"], json!("tick"));
    }
}

#[test]
fn records_keep_field_order() {
    let log = bare();
    let sink = Arc::new(MemorySink::new());
    log.add_handler(sink.clone(), None, FormatterKind::Json, "info").unwrap();

    log.info("m", &["zeta=1".into(), "alpha=2".into(), "name=renamed".into()]);

    let line = &sink.lines()[0];
    let keys: Vec<String> = serde_json::from_str::<serde_json::Map<String, Value>>(line)
        .unwrap()
        .keys()
        .cloned()
        .collect();
    assert_eq!(keys, vec!["name", "hostname", "pid", "zeta", "alpha", "message", "level", "timestamp"]);
}
