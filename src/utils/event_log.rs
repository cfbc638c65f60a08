//! Timestamped session logging for diagnostics.
//!
//! The core rules modules stay pure; binaries and harnesses write their
//! progress here. Each line carries a level prefix and a local timestamp.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use chrono::Local;

/// Logging threshold, most severe first. A log owns a threshold and drops
/// every message above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Error,
    Log,
    Verbose,
}

pub struct EventLog<W: Write> {
    sink: W,
    verbosity: Verbosity,
}

impl EventLog<File> {
    /// Open (truncating) a session log file at `path`.
    pub fn open(path: &Path, verbosity: Verbosity) -> io::Result<Self> {
        Ok(EventLog {
            sink: File::create(path)?,
            verbosity,
        })
    }
}

impl<W: Write> EventLog<W> {
    pub fn new(sink: W, verbosity: Verbosity) -> Self {
        EventLog { sink, verbosity }
    }

    pub fn log(&mut self, level: Verbosity, message: &str) -> io::Result<()> {
        if level > self.verbosity {
            return Ok(());
        }

        let stamp = Local::now().format("%d.%m.%Y %H:%M:%S");
        writeln!(self.sink, "[{}] [{stamp}]: {message}", level_prefix(level))
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

fn level_prefix(level: Verbosity) -> &'static str {
    match level {
        Verbosity::Error => " error ",
        Verbosity::Log => "  log  ",
        Verbosity::Verbose => "verbose",
    }
}

#[cfg(test)]
mod tests {
    use super::{EventLog, Verbosity};

    #[test]
    fn messages_at_or_below_the_threshold_are_written() {
        let mut log = EventLog::new(Vec::new(), Verbosity::Verbose);
        log.log(Verbosity::Log, "starting session").expect("write should succeed");
        log.log(Verbosity::Verbose, "details").expect("write should succeed");

        let written = String::from_utf8(log.into_sink()).expect("log should be UTF-8");
        assert!(written.contains("[  log  ]"));
        assert!(written.contains("starting session"));
        assert!(written.contains("details"));
        assert_eq!(written.lines().count(), 2);
    }

    #[test]
    fn messages_above_the_threshold_are_dropped() {
        let mut log = EventLog::new(Vec::new(), Verbosity::Error);
        log.log(Verbosity::Verbose, "chatter").expect("write should succeed");
        log.log(Verbosity::Error, "boom").expect("write should succeed");

        let written = String::from_utf8(log.into_sink()).expect("log should be UTF-8");
        assert!(!written.contains("chatter"));
        assert!(written.contains("[ error ]"));
        assert!(written.contains("boom"));
    }
}
