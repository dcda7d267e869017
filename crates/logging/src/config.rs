use std::sync::Arc;

use levels::{LevelTable, Severity, resolve_level};
use template::Template;

/// Read-only configuration consulted when loggers are constructed.
///
/// [`LogManager`](crate::LogManager) depends on this trait rather than on a
/// concrete type, so tests and embedders can substitute their own lookup
/// source while keeping the resolution walk identical.
pub trait Config {
    /// Exact-match lookup of a configured severity threshold.
    fn level_for(&self, name: &str) -> Option<Severity>;

    /// Template shared by every logger built from this configuration.
    fn template(&self) -> &Template;

    /// Resolves the threshold for `name` hierarchically.
    ///
    /// Probes [`level_for`](Self::level_for) with the full name, then with
    /// progressively shorter dot-joined prefixes, then with
    /// [`ROOT`](levels::ROOT), defaulting to [`Severity::Info`].
    fn resolve(&self, name: &str) -> Severity {
        resolve_level(name, |prefix| self.level_for(prefix))
    }
}

/// Shared handle passing one configuration to a manager and its loggers.
pub type SharedConfig = Arc<dyn Config + Send + Sync>;

/// Standard configuration: one template plus one level table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogConfig {
    template: Template,
    levels: LevelTable,
}

impl LogConfig {
    /// Creates a configuration from a template and a level table.
    ///
    /// The table has already absorbed its entries by value, so later
    /// changes to whatever collection seeded it cannot reach this config.
    #[must_use]
    pub fn new(template: Template, levels: LevelTable) -> Self {
        Self { template, levels }
    }

    /// Level table backing [`Config::level_for`].
    #[must_use]
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }
}

impl Default for LogConfig {
    /// Default template with only the `ROOT = Info` entry.
    fn default() -> Self {
        Self::new(Template::default(), LevelTable::new())
    }
}

impl Config for LogConfig {
    fn level_for(&self, name: &str) -> Option<Severity> {
        self.levels.get(name)
    }

    fn template(&self) -> &Template {
        &self.template
    }
}
