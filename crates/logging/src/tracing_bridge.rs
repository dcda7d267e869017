//! Bridge between the tracing ecosystem and hierarchical loggers.
//!
//! [`HierarchyLayer`] is a `tracing-subscriber` layer that routes tracing
//! events through the same configuration, template, and sink used by
//! directly constructed loggers. Event targets map to logger names
//! (`app::db` becomes `app.db`), event levels map to severities, and the
//! usual gates decide whether a line is emitted. This lets code written
//! against the standard tracing macros participate in hierarchical level
//! resolution without touching the macros themselves.

use std::fmt;
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

use levels::Severity;

use crate::config::{Config, SharedConfig};
use crate::logger::{Log, Logger};
use crate::sink::SharedSink;

/// Routes tracing events through hierarchical loggers.
pub struct HierarchyLayer {
    config: SharedConfig,
    sink: SharedSink,
}

impl HierarchyLayer {
    /// Creates a layer sharing the supplied configuration and sink.
    #[must_use]
    pub fn new(config: SharedConfig, sink: SharedSink) -> Self {
        Self { config, sink }
    }

    /// Maps a tracing level onto the severity it emits at.
    fn severity_for(level: &Level) -> Severity {
        if *level == Level::TRACE {
            Severity::Trace
        } else if *level == Level::DEBUG {
            Severity::Debug
        } else if *level == Level::INFO {
            Severity::Info
        } else if *level == Level::WARN {
            Severity::Warn
        } else {
            Severity::Error
        }
    }
}

impl<S> Layer<S> for HierarchyLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let name = metadata.target().replace("::", ".");
        let severity = Self::severity_for(metadata.level());

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let Some(message) = visitor.message else {
            return;
        };

        let level = self.config.resolve(&name);
        let logger = Logger::new(
            name,
            self.config.template().clone(),
            level,
            Arc::clone(&self.sink),
        );

        // A malformed template cannot be reported through a subscriber;
        // the event is dropped.
        let _ = match severity {
            Severity::Trace => logger.trace(&message),
            Severity::Debug => logger.debug(&message),
            Severity::Info => logger.info(&message),
            Severity::Warn => logger.warn(&message),
            Severity::Error => logger.error(&message),
        };
    }
}

/// Visitor extracting the `message` field from a tracing event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`HierarchyLayer`] as the global default subscriber.
///
/// Suitable for binaries that route all diagnostics through one
/// configuration; panics if a global subscriber is already installed.
pub fn init_tracing(config: SharedConfig, sink: SharedSink) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(HierarchyLayer::new(config, sink))
        .init();
}
