use colored::*;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::{self, Write};

const TARGETS: [&str; 2] = ["doze", "delay"];

pub struct SimpleLogger {
    level: LevelFilter,
    use_colors: bool,
}

impl SimpleLogger {
    pub fn new(level: LevelFilter, use_colors: bool) -> Self {
        Self { level, use_colors }
    }

    fn level_tag(&self, level: Level) -> ColoredString {
        let tag = level.as_str();
        if !self.use_colors {
            return tag.normal();
        }
        match level {
            Level::Error => tag.red().bold(),
            Level::Warn => tag.yellow().bold(),
            Level::Info => tag.blue().bold(),
            Level::Debug => tag.cyan().bold(),
            Level::Trace => tag.green().bold(),
        }
    }
}

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
            && TARGETS.iter().any(|target| metadata.target().starts_with(target))
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let target = record.target();
        let output = if self.use_colors {
            format!("[{}] {}: {}", self.level_tag(record.level()), target.dimmed(), record.args())
        } else {
            format!("[{}] {}: {}", self.level_tag(record.level()), target, record.args())
        };

        // error/warn to stderr, the rest to stdout
        match record.level() {
            Level::Error | Level::Warn => {
                let _ = writeln!(io::stderr(), "{}", output);
            }
            _ => {
                let _ = writeln!(io::stdout(), "{}", output);
            }
        }
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

/// Values accepted by `--log-level` and `[runtime] log_level`.
pub const LEVEL_NAMES: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

static LOGGER: std::sync::OnceLock<SimpleLogger> = std::sync::OnceLock::new();

/// Installs the process-wide logger. Only the first call takes effect.
pub fn install(level: LevelFilter, use_colors: bool) -> Result<(), SetLoggerError> {
    log::set_logger(LOGGER.get_or_init(|| SimpleLogger::new(level, use_colors)))
        .map(|()| log::set_max_level(level))
}

/// Case-insensitive; anything outside [`LEVEL_NAMES`] is rejected.
pub fn level_from_str(level: &str) -> Option<LevelFilter> {
    level.parse().ok()
}
