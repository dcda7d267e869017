//! Integration tests for hierarchical level resolution.
//!
//! These tests pin the resolution order: exact match first, then
//! progressively shorter dot-joined prefixes, then the reserved `ROOT`
//! entry, then `Info` as the ultimate default.

use std::sync::Arc;

use logging::{LevelTable, Log, LogConfig, LogManager, MemorySink, ROOT, Severity, Template};

fn fixture() -> LevelTable {
    LevelTable::from_levels([
        ("models.active", Severity::Debug),
        ("models.passive", Severity::Info),
        ("views.login.logging.insecure", Severity::Trace),
    ])
}

// ============================================================================
// Table Resolution
// ============================================================================

/// Verifies configured names resolve by exact match.
#[test]
fn exact_matches_win() {
    let table = fixture();
    assert_eq!(table.resolve("models.active"), Severity::Debug);
    assert_eq!(table.resolve("models.passive"), Severity::Info);
    assert_eq!(
        table.resolve("views.login.logging.insecure"),
        Severity::Trace
    );
}

/// Verifies unconfigured parents fall through to ROOT.
#[test]
fn unconfigured_parents_fall_to_root() {
    let table = fixture();
    assert_eq!(table.resolve("models"), Severity::Info);
    assert_eq!(table.resolve("views.login.logging"), Severity::Info);
}

/// Verifies children inherit the most specific configured prefix.
#[test]
fn children_inherit_the_longest_prefix() {
    let table = fixture();
    assert_eq!(table.resolve("models.active.cache"), Severity::Debug);
    assert_eq!(
        table.resolve("views.login.logging.insecure.cookie"),
        Severity::Trace
    );
}

/// Verifies an explicit ROOT entry replaces the Info default.
#[test]
fn explicit_root_controls_the_fallback() {
    let table = LevelTable::from_levels([(ROOT, Severity::Warn)]);
    assert_eq!(table.resolve("totally.unconfigured"), Severity::Warn);
}

// ============================================================================
// Resolution Through the Manager
// ============================================================================

/// Verifies loggers built by the manager carry resolved levels.
#[test]
fn manager_loggers_carry_resolved_levels() {
    let sink = Arc::new(MemorySink::new());
    let config = LogConfig::new(Template::default(), fixture());
    let manager = LogManager::new(Arc::new(config), sink).unwrap();

    assert_eq!(manager.logger("models.active").level(), Severity::Debug);
    assert_eq!(manager.logger("models.passive").level(), Severity::Info);
    assert_eq!(
        manager.logger("views.login.logging.insecure").level(),
        Severity::Trace
    );
    assert_eq!(manager.logger("models").level(), Severity::Info);
    assert_eq!(manager.logger("views.login.logging").level(), Severity::Info);
}

/// Verifies every manager call resolves afresh rather than caching.
#[test]
fn repeated_requests_resolve_consistently() {
    let sink = Arc::new(MemorySink::new());
    let config = LogConfig::new(Template::default(), fixture());
    let manager = LogManager::new(Arc::new(config), sink).unwrap();

    let first = manager.logger("models.active");
    let second = manager.logger("models.active");
    assert_eq!(first.level(), second.level());
    assert_eq!(first.name(), second.name());
}
