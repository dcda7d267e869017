//! crates/levels/src/table.rs
//! Level table and hierarchical prefix resolution.

use rustc_hash::FxHashMap;

use crate::Severity;

/// Reserved name of the fallback entry every table carries.
pub const ROOT: &str = "ROOT";

/// Mapping from dot-segmented logger-name prefixes to severity thresholds.
///
/// Keys are compared by exact string match only; hierarchical lookup happens
/// in [`resolve`](Self::resolve) rather than at insertion time. The table is
/// immutable after construction and always contains a [`ROOT`] entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LevelTable {
    levels: FxHashMap<String, Severity>,
}

impl LevelTable {
    /// Creates a table containing only the `ROOT = Info` fallback entry.
    #[must_use]
    pub fn new() -> Self {
        Self::from_levels(std::iter::empty::<(String, Severity)>())
    }

    /// Builds a table from the supplied entries.
    ///
    /// The entries are copied into the table, so changing the caller's
    /// collection afterwards cannot affect resolution. When the input lacks
    /// a [`ROOT`] entry, `ROOT` is set to [`Severity::Info`].
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::{LevelTable, ROOT, Severity};
    ///
    /// let table = LevelTable::from_levels([("models.active", Severity::Debug)]);
    /// assert_eq!(table.get("models.active"), Some(Severity::Debug));
    /// assert_eq!(table.get(ROOT), Some(Severity::Info));
    /// ```
    pub fn from_levels<I, K>(levels: I) -> Self
    where
        I: IntoIterator<Item = (K, Severity)>,
        K: Into<String>,
    {
        let mut levels: FxHashMap<String, Severity> = levels
            .into_iter()
            .map(|(name, level)| (name.into(), level))
            .collect();
        levels.entry(ROOT.to_owned()).or_insert(Severity::Info);
        Self { levels }
    }

    /// Looks up the severity configured for `name` by exact match.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Severity> {
        self.levels.get(name).copied()
    }

    /// Returns the fallback severity stored under [`ROOT`].
    #[must_use]
    pub fn root(&self) -> Severity {
        self.get(ROOT).unwrap_or(Severity::Info)
    }

    /// Resolves the severity threshold for `name` hierarchically.
    ///
    /// See [`resolve_level`] for the walk order.
    ///
    /// # Examples
    ///
    /// ```
    /// use levels::{LevelTable, Severity};
    ///
    /// let table = LevelTable::from_levels([("models.active", Severity::Debug)]);
    /// assert_eq!(table.resolve("models.active.cache"), Severity::Debug);
    /// assert_eq!(table.resolve("models"), Severity::Info);
    /// ```
    #[must_use]
    pub fn resolve(&self, name: &str) -> Severity {
        resolve_level(name, |prefix| self.get(prefix))
    }
}

impl Default for LevelTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LevelTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.levels.len()))?;
        for (name, level) in &self.levels {
            map.serialize_entry(name, level)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LevelTable {
    /// Deserializes a name-to-severity map, re-establishing the [`ROOT`]
    /// invariant through [`LevelTable::from_levels`].
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let levels = std::collections::HashMap::<String, Severity>::deserialize(deserializer)?;
        Ok(Self::from_levels(levels))
    }
}

/// Hierarchical threshold lookup over any exact-match source.
///
/// Probes `lookup` with the full `name` first, then with progressively
/// shorter dot-joined prefixes (dropping the trailing segment each time),
/// then with [`ROOT`]. Longer prefixes therefore always win over shorter
/// ones. Falls back to [`Severity::Info`] when nothing at all is configured.
#[must_use]
pub fn resolve_level<F>(name: &str, lookup: F) -> Severity
where
    F: Fn(&str) -> Option<Severity>,
{
    if let Some(level) = lookup(name) {
        return level;
    }
    let segments: Vec<&str> = name.split('.').collect();
    for end in (1..segments.len()).rev() {
        let prefix = segments[..end].join(".");
        if let Some(level) = lookup(&prefix) {
            return level;
        }
    }
    lookup(ROOT).unwrap_or(Severity::Info)
}
