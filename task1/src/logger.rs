use colored::{ColoredString, Colorize};
use std::fmt;
use std::io::{Result, Write};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Severity of a demo log line, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    pub fn name(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
            LogLevel::Critical => "CRITICAL",
        }
    }

    fn paint(self, text: &str) -> ColoredString {
        match self {
            LogLevel::Debug => text.white(),
            LogLevel::Info => text.green(),
            LogLevel::Warning => text.yellow(),
            LogLevel::Error => text.red(),
            LogLevel::Critical => text.red().bold(),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Colored `LEVEL: message` log sink handed to every vehicle.
///
/// There is no global logger: whoever runs the demo builds one and passes it
/// down. Lines below `min_level` are dropped.
pub struct Logger {
    out: Box<dyn Write>,
    color: bool,
    min_level: LogLevel,
}

impl Logger {
    pub fn new(out: Box<dyn Write>, color: bool) -> Self {
        Self {
            out,
            color,
            min_level: LogLevel::Info,
        }
    }

    pub fn stdout(color: bool) -> Self {
        Self::new(Box::new(std::io::stdout()), color)
    }

    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    pub fn log(&mut self, level: LogLevel, message: &str) -> Result<()> {
        if level < self.min_level {
            return Ok(());
        }
        if self.color {
            let line = format!("{}: {}", level.name(), message);
            writeln!(self.out, "{}", level.paint(&line))?;
        } else {
            writeln!(self.out, "{}: {}", level.name(), message)?;
        }
        self.out.flush()
    }

    pub fn debug(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn info(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn warning(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Warning, message)
    }

    pub fn error(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    pub fn critical(&mut self, message: &str) -> Result<()> {
        self.log(LogLevel::Critical, message)
    }
}

/// Install the diagnostic `tracing` subscriber for the binary (stderr only).
pub fn init_cli_logger(verbose: bool, color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("vehicle_factory=debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(color)
                .with_target(false)
                .without_time()
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io_adapters::MemWriter;

    #[test]
    fn test_plain_lines_carry_level_name() {
        let (mw, rc) = MemWriter::with_handle();
        let mut log = Logger::new(Box::new(mw), false);

        log.info("ready").unwrap();
        log.critical("on fire").unwrap();

        let s = String::from_utf8(rc.borrow().clone()).unwrap();
        assert_eq!(s, "INFO: ready\nCRITICAL: on fire\n");
    }

    #[test]
    fn test_lines_below_min_level_are_dropped() {
        let (mw, rc) = MemWriter::with_handle();
        let mut log = Logger::new(Box::new(mw), false).with_min_level(LogLevel::Warning);

        log.debug("noise").unwrap();
        log.info("noise").unwrap();
        log.warning("careful").unwrap();
        log.error("broken").unwrap();

        let s = String::from_utf8(rc.borrow().clone()).unwrap();
        assert_eq!(s, "WARNING: careful\nERROR: broken\n");
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error < LogLevel::Critical);
        assert_eq!(LogLevel::Warning.to_string(), "WARNING");
    }
}
