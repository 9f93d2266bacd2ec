use clap::Parser;
use std::process::ExitCode;

use wryte::config::WRYTE_NAME_ENV;
use wryte::init::init_diagnostics;
use wryte::{ContextObject, Severity, Wryte, WryteConfig};

#[derive(Parser, Debug)]
#[command(name = "wryte")]
#[command(about = "Emit a single structured log record", long_about = None)]
struct Cli {
    /// Severity: debug, info, warning, warn, error or critical
    level: String,

    /// Human readable message
    message: String,

    /// Context objects: JSON objects or key=value pairs
    objects: Vec<String>,

    /// Indented JSON, or key=value lines on the console
    #[arg(short, long)]
    pretty: bool,

    /// Emit JSON instead of console text
    #[arg(short, long)]
    jsonify: bool,

    /// Logger name
    #[arg(short, long, env = WRYTE_NAME_ENV, default_value = "Wryte")]
    name: String,

    /// Disable ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn run(cli: Cli) -> wryte::Result<()> {
    let level: Severity = cli.level.parse()?;

    // Settings given on the command line take precedence, so a stale
    // environment value never aborts the call.
    let base = WryteConfig::from_env_lenient();
    let config = WryteConfig {
        name: cli.name,
        level,
        pretty: if cli.pretty { Some(true) } else { base.pretty },
        jsonify: cli.jsonify || base.jsonify,
        color: base.color && !cli.no_color,
        bare: false,
        ..base
    };

    let log = Wryte::new(config);
    let objects: Vec<ContextObject> = cli.objects.into_iter().map(ContextObject::from).collect();
    log.log(level, &cli.message, &objects);
    log.flush();
    Ok(())
}

fn main() -> ExitCode {
    init_diagnostics("warn");

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wryte: {}", e);
            ExitCode::FAILURE
        }
    }
}
