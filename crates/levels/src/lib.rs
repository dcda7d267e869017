#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `levels` provides the severity model shared across the workspace together
//! with hierarchical threshold resolution over dot-segmented logger names.
//! A [`Severity`] is one of five totally ordered values from [`Severity::Trace`]
//! (most verbose) to [`Severity::Error`] (least verbose). A [`LevelTable`]
//! maps logger-name prefixes to severities and always carries an entry for
//! the reserved [`ROOT`] name.
//!
//! # Design
//!
//! The table stores exact strings only; no wildcard expansion happens at
//! insertion time. [`LevelTable::resolve`] walks the name hierarchy at lookup
//! time instead: the full name first, then progressively shorter dot-joined
//! prefixes, then [`ROOT`]. The walk itself is exposed as [`resolve_level`]
//! so configuration types in higher crates can resolve through their own
//! exact-lookup method without duplicating the algorithm.
//!
//! # Invariants
//!
//! - A [`LevelTable`] always contains a [`ROOT`] entry after construction;
//!   when the input lacks one, `ROOT` defaults to [`Severity::Info`].
//! - Construction copies the caller's entries; mutating the source
//!   collection afterwards cannot affect resolution.
//! - Resolution is total: it always returns a concrete [`Severity`].
//!
//! # Examples
//!
//! ```
//! use levels::{LevelTable, Severity};
//!
//! let table = LevelTable::from_levels([
//!     ("models.active", Severity::Debug),
//!     ("views.login.logging.insecure", Severity::Trace),
//! ]);
//!
//! assert_eq!(table.resolve("models.active"), Severity::Debug);
//! assert_eq!(table.resolve("models.active.cache"), Severity::Debug);
//! assert_eq!(table.resolve("views.login.logging"), Severity::Info);
//! ```

mod severity;
mod table;

pub use severity::{ParseSeverityError, Severity};
pub use table::{LevelTable, ROOT, resolve_level};
