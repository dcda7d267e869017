use std::fmt;
use std::sync::Arc;

use levels::ROOT;
use template::FormatError;

use crate::config::{Config, LogConfig, SharedConfig};
use crate::logger::{Log, Logger};
use crate::sink::{ConsoleSink, SharedSink};

/// Message announced through the `ROOT` logger when a manager is built.
const CONSTRUCTED_MESSAGE: &str = "LogManager is constructed!";

/// Builds loggers on demand from one configuration and one sink.
///
/// The manager holds its configuration and sink for its whole lifetime and
/// never caches the loggers it hands out: every [`logger`](Self::logger)
/// call resolves the level table again and returns a fresh [`Logger`].
pub struct LogManager {
    config: SharedConfig,
    sink: SharedSink,
}

impl LogManager {
    /// Creates a manager from the supplied configuration and sink.
    ///
    /// Construction announces itself: one WARN message goes through a
    /// logger named [`ROOT`], so a capturing sink sees
    /// `"ROOT Warn: LogManager is constructed!"` under the default
    /// configuration, while a `ROOT = Error` table suppresses the line.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the configured template is malformed;
    /// the startup message renders through it, so a bad template surfaces
    /// here instead of at the first log call.
    pub fn new(config: SharedConfig, sink: SharedSink) -> Result<Self, FormatError> {
        let manager = Self { config, sink };
        manager.logger(ROOT).warn(CONSTRUCTED_MESSAGE)?;
        Ok(manager)
    }

    /// Creates a manager with the default configuration and a [`ConsoleSink`].
    ///
    /// # Errors
    ///
    /// Shares the error surface of [`new`](Self::new); the default template
    /// renders cleanly, so this returns `Ok` in practice.
    pub fn with_defaults() -> Result<Self, FormatError> {
        Self::new(Arc::new(LogConfig::default()), Arc::new(ConsoleSink::new()))
    }

    /// Builds a fresh logger for `name`.
    ///
    /// The level is resolved through [`Config::resolve`] on every call;
    /// two calls with the same name return independent loggers.
    #[must_use]
    pub fn logger(&self, name: &str) -> Logger {
        Logger::new(
            name,
            self.config.template().clone(),
            self.config.resolve(name),
            Arc::clone(&self.sink),
        )
    }
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("template", self.config.template())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use levels::{LevelTable, Severity};
    use template::Template;

    #[test]
    fn construction_announces_itself_once() {
        let sink = Arc::new(MemorySink::new());
        let _manager =
            LogManager::new(Arc::new(LogConfig::default()), sink.clone()).unwrap();
        assert_eq!(
            sink.lines(),
            vec!["ROOT Warn: LogManager is constructed!".to_owned()]
        );
    }

    #[test]
    fn logger_levels_come_from_the_resolver() {
        let sink = Arc::new(MemorySink::new());
        let config = LogConfig::new(
            Template::default(),
            LevelTable::from_levels([("models.active", Severity::Debug)]),
        );
        let manager = LogManager::new(Arc::new(config), sink).unwrap();

        assert_eq!(manager.logger("models.active").level(), Severity::Debug);
        assert_eq!(manager.logger("models").level(), Severity::Info);
    }

    #[test]
    fn malformed_template_fails_construction() {
        let sink = Arc::new(MemorySink::new());
        let config = LogConfig::new(Template::new("<oops/>"), LevelTable::new());
        assert!(LogManager::new(Arc::new(config), sink).is_err());
    }
}
