use std::io::IsTerminal;

use crate::logger::{format::LoggerFormat, level::LoggerLevel};

/// How the `taskdesk` process writes its diagnostics.
///
/// All output goes to stderr so command results on stdout stay pipeable.
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Defaults to [`LoggerFormat::Text`].
    pub format: LoggerFormat,
    /// `EnvFilter` directive; `info` unless overridden (the CLI passes `warn`).
    pub level: LoggerLevel,
    /// Prefix each line with the emitting module, e.g. `taskdesk_api::http`.
    pub with_targets: bool,
    /// ANSI colors for the text format. On by default only when stderr is a terminal.
    /// Ignored by the JSON and journald outputs.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::Text,
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: std::io::stderr().is_terminal(),
        }
    }
}

impl LoggerConfig {
    pub fn with_format(mut self, format: LoggerFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_level(mut self, level: LoggerLevel) -> Self {
        self.level = level;
        self
    }
}
