//! Integration tests for the severity gate truth table.
//!
//! The gate directions differ between methods: `is_trace` and `is_warn`
//! open when the configured level is at or below the probed severity, while
//! `is_debug`, `is_info`, and `is_error` open when it is at or above. The
//! emit methods must follow the gates exactly, so the table below is pinned
//! for all five configured levels.

use std::sync::Arc;

use logging::{Log, Logger, MemorySink, Severity, Template};

fn logger_at(level: Severity) -> Logger {
    Logger::new(
        "gates.check",
        Template::default(),
        level,
        Arc::new(MemorySink::new()),
    )
}

fn gates(level: Severity) -> [bool; 5] {
    let logger = logger_at(level);
    [
        logger.is_trace(),
        logger.is_debug(),
        logger.is_info(),
        logger.is_warn(),
        logger.is_error(),
    ]
}

// ============================================================================
// Gate Truth Table
// ============================================================================

/// Verifies the gates for a configured level of Trace.
#[test]
fn gates_at_trace() {
    assert_eq!(gates(Severity::Trace), [true, false, false, true, false]);
}

/// Verifies the gates for a configured level of Debug.
#[test]
fn gates_at_debug() {
    assert_eq!(gates(Severity::Debug), [false, true, false, true, false]);
}

/// Verifies the gates for a configured level of Info.
#[test]
fn gates_at_info() {
    assert_eq!(gates(Severity::Info), [false, true, true, true, false]);
}

/// Verifies the gates for a configured level of Warn.
#[test]
fn gates_at_warn() {
    assert_eq!(gates(Severity::Warn), [false, true, true, true, false]);
}

/// Verifies the gates for a configured level of Error.
#[test]
fn gates_at_error() {
    assert_eq!(gates(Severity::Error), [false, true, true, false, true]);
}

// ============================================================================
// Emit Methods Follow the Gates
// ============================================================================

/// Verifies emits at level Error: warn is suppressed while error and debug pass.
#[test]
fn emits_at_error_follow_the_gates() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new("gates.check", Template::default(), Severity::Error, sink.clone());

    logger.warn("suppressed").unwrap();
    logger.trace("suppressed").unwrap();
    logger.error("kept").unwrap();
    logger.debug("kept").unwrap();

    assert_eq!(
        sink.lines(),
        vec![
            "gates.check Error: kept".to_owned(),
            "gates.check Debug: kept".to_owned(),
        ]
    );
}

/// Verifies emits at level Trace: trace and warn pass while the rest are gated.
#[test]
fn emits_at_trace_follow_the_gates() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new("gates.check", Template::default(), Severity::Trace, sink.clone());

    logger.trace("kept").unwrap();
    logger.debug("suppressed").unwrap();
    logger.info("suppressed").unwrap();
    logger.warn("kept").unwrap();
    logger.error("suppressed").unwrap();

    assert_eq!(
        sink.lines(),
        vec![
            "gates.check Trace: kept".to_owned(),
            "gates.check Warn: kept".to_owned(),
        ]
    );
}

/// Verifies a closed gate performs no work at all.
#[test]
fn closed_gates_produce_no_side_effects() {
    let sink = Arc::new(MemorySink::new());
    let logger = Logger::new("gates.check", Template::default(), Severity::Info, sink.clone());

    logger.trace("suppressed").unwrap();
    assert!(sink.is_empty());
}
