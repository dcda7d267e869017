#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is the facade over the workspace's two core pieces: the
//! hierarchical severity model from [`levels`] and the tag-substitution
//! renderer from [`template`]. It adds the thin wiring around them — the
//! [`Log`] capability trait with its gate and emit methods, the [`Logger`]
//! value type, the [`Config`] trait with the concrete [`LogConfig`], the
//! [`LogManager`] that constructs loggers on demand, and the [`Sink`]
//! output boundary with a console default. The full public surface is
//! re-exported here so downstream code needs a single dependency.
//!
//! # Design
//!
//! A manager owns exactly one configuration and one shared sink for its
//! lifetime. Every [`LogManager::logger`] call resolves the level table
//! again and returns a fresh [`Logger`]; nothing is cached or interned.
//! Loggers are immutable after construction and share the sink through an
//! [`Arc`](std::sync::Arc). Construction of a manager announces itself with
//! one WARN line through the [`ROOT`] logger — an observable, deliberate
//! side effect.
//!
//! # Errors
//!
//! The only error in the system is [`FormatError`]: a malformed template
//! fails manager construction (the startup line renders through it) and
//! every emit call that reaches the renderer. Level resolution is total and
//! sink failures stay inside the sink.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use logging::{LevelTable, LogConfig, LogManager, MemorySink, Severity, Template};
//!
//! let sink = Arc::new(MemorySink::new());
//! let config = LogConfig::new(
//!     Template::default(),
//!     LevelTable::from_levels([("models.active", Severity::Debug)]),
//! );
//! let manager = LogManager::new(Arc::new(config), sink.clone())?;
//!
//! use logging::Log;
//! let log = manager.logger("models.active");
//! log.debug("cache warmed")?;
//!
//! assert_eq!(
//!     sink.lines(),
//!     vec![
//!         "ROOT Warn: LogManager is constructed!".to_owned(),
//!         "models.active Debug: cache warmed".to_owned(),
//!     ],
//! );
//! # Ok::<(), logging::FormatError>(())
//! ```

mod config;
mod logger;
mod manager;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::{Config, LogConfig, SharedConfig};
pub use logger::{Log, Logger};
pub use manager::LogManager;
pub use sink::{ConsoleSink, MemorySink, SharedSink, Sink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{HierarchyLayer, init_tracing};

pub use levels::{LevelTable, ParseSeverityError, ROOT, Severity, resolve_level};
pub use template::{
    DEFAULT_FORMAT, FormatError, LEVEL_TAG, LOGNAME_TAG, MESSAGE_TAG, Template,
};
