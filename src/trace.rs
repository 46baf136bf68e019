//! Console log sink: `INFO: ...`, `WARNING: ...` lines on stderr.

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;

pub struct TraceLogger {
    level: LevelFilter,
}

impl TraceLogger {
    pub const fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Install as the process logger.  Fails if one is already set.
    pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(level)))?;
        log::set_max_level(level);
        Ok(())
    }
}

pub fn prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "ERROR: ",
        Level::Warn  => "WARNING: ",
        Level::Info  => "INFO: ",
        Level::Debug | Level::Trace => "DEBUG: ",
    }
}

impl Log for TraceLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let mut err = std::io::stderr().lock();
        let _ = writeln!(err, "{}{}", prefix(record.level()), record.args());
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}
