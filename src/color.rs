use std::sync::Arc;

use crate::level::Severity;

/// Colors used by the console formatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Cyan,
    Green,
    Yellow,
    Red,
    BrightRed,
    Magenta,
}

impl Color {
    /// Color of the level column for a given severity.
    pub fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Debug => Color::Cyan,
            Severity::Info => Color::Green,
            Severity::Warning => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Critical => Color::BrightRed,
        }
    }
}

/// Capability to wrap text in terminal color codes.
///
/// Chosen once when a formatter is built; [`NoColor`] stands in when colors
/// are disabled or the `color` feature is compiled out.
pub trait ColorProvider: Send + Sync {
    /// Return `text` wrapped in `color`, followed by a reset.
    fn paint(&self, text: &str, color: Color) -> String;

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Provider that leaves text untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoColor;

impl ColorProvider for NoColor {
    fn paint(&self, text: &str, _color: Color) -> String {
        text.to_string()
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// ANSI escape codes via the `colored` crate.
///
/// `colored` honours `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE` on its own.
#[cfg(feature = "color")]
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColors;

#[cfg(feature = "color")]
impl ColorProvider for AnsiColors {
    fn paint(&self, text: &str, color: Color) -> String {
        use colored::Colorize;

        let painted = match color {
            Color::Cyan => text.cyan(),
            Color::Green => text.green(),
            Color::Yellow => text.yellow(),
            Color::Red => text.red(),
            Color::BrightRed => text.red().bold(),
            Color::Magenta => text.magenta(),
        };
        painted.to_string()
    }
}

/// Pick a provider: ANSI colors when requested and compiled in, otherwise
/// [`NoColor`].
pub fn color_provider(enabled: bool) -> Arc<dyn ColorProvider> {
    #[cfg(feature = "color")]
    if enabled {
        return Arc::new(AnsiColors);
    }
    #[cfg(not(feature = "color"))]
    let _ = enabled;

    Arc::new(NoColor)
}
