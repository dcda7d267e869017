use std::fmt;

use levels::Severity;
use template::{FormatError, Template};

use crate::sink::SharedSink;

/// Capability set of a named logger.
///
/// The gates are provided methods over [`level`](Self::level), so every
/// implementation inherits the same comparison table. The directions differ
/// between methods: [`is_trace`](Self::is_trace) and
/// [`is_warn`](Self::is_warn) open when the configured level is at or below
/// the probed severity, while [`is_debug`](Self::is_debug),
/// [`is_info`](Self::is_info), and [`is_error`](Self::is_error) open when it
/// is at or above. Emit methods send a line exactly when their gate is open
/// and are silent no-ops otherwise.
pub trait Log {
    /// Name the logger was created under.
    fn name(&self) -> &str;

    /// Severity threshold resolved for this logger.
    fn level(&self) -> Severity;

    /// Template used to render this logger's lines.
    fn template(&self) -> &Template;

    /// Open when the configured level is at most [`Severity::Trace`].
    fn is_trace(&self) -> bool {
        self.level() <= Severity::Trace
    }

    /// Open when the configured level is at least [`Severity::Debug`].
    fn is_debug(&self) -> bool {
        self.level() >= Severity::Debug
    }

    /// Open when the configured level is at least [`Severity::Info`].
    fn is_info(&self) -> bool {
        self.level() >= Severity::Info
    }

    /// Open when the configured level is at most [`Severity::Warn`].
    fn is_warn(&self) -> bool {
        self.level() <= Severity::Warn
    }

    /// Open when the configured level is at least [`Severity::Error`].
    fn is_error(&self) -> bool {
        self.level() >= Severity::Error
    }

    /// Emits `message` at trace severity when its gate is open.
    fn trace(&self, message: &str) -> Result<(), FormatError>;

    /// Emits `message` at debug severity when its gate is open.
    fn debug(&self, message: &str) -> Result<(), FormatError>;

    /// Emits `message` at info severity when its gate is open.
    fn info(&self, message: &str) -> Result<(), FormatError>;

    /// Emits `message` at warn severity when its gate is open.
    fn warn(&self, message: &str) -> Result<(), FormatError>;

    /// Emits `message` at error severity when its gate is open.
    fn error(&self, message: &str) -> Result<(), FormatError>;
}

/// A named logger bound to a resolved level, a template, and a sink.
///
/// Constructed by [`LogManager::logger`](crate::LogManager::logger) per
/// request and immutable afterwards. Cloning shares the sink handle.
#[derive(Clone)]
pub struct Logger {
    name: String,
    template: Template,
    level: Severity,
    sink: SharedSink,
}

impl Logger {
    /// Creates a logger that writes rendered lines through `sink`.
    pub fn new(
        name: impl Into<String>,
        template: Template,
        level: Severity,
        sink: SharedSink,
    ) -> Self {
        Self {
            name: name.into(),
            template,
            level,
            sink,
        }
    }

    fn emit(&self, level: Severity, message: &str) -> Result<(), FormatError> {
        let line = self.template.render(&self.name, level, message)?;
        self.sink.write_line(&line);
        Ok(())
    }
}

impl Log for Logger {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> Severity {
        self.level
    }

    fn template(&self) -> &Template {
        &self.template
    }

    fn trace(&self, message: &str) -> Result<(), FormatError> {
        if self.is_trace() {
            self.emit(Severity::Trace, message)
        } else {
            Ok(())
        }
    }

    fn debug(&self, message: &str) -> Result<(), FormatError> {
        if self.is_debug() {
            self.emit(Severity::Debug, message)
        } else {
            Ok(())
        }
    }

    fn info(&self, message: &str) -> Result<(), FormatError> {
        if self.is_info() {
            self.emit(Severity::Info, message)
        } else {
            Ok(())
        }
    }

    fn warn(&self, message: &str) -> Result<(), FormatError> {
        if self.is_warn() {
            self.emit(Severity::Warn, message)
        } else {
            Ok(())
        }
    }

    fn error(&self, message: &str) -> Result<(), FormatError> {
        if self.is_error() {
            self.emit(Severity::Error, message)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level)
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}
