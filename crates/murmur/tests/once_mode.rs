//! Integration tests for once-mode deduplication.

use murmur::{log_args, LogLevel, Murmur};
use murmur_sink::MemorySink;

fn facade() -> (Murmur, MemorySink) {
    let sink = MemorySink::new();
    (Murmur::new(sink.clone()), sink)
}

#[test]
fn identical_pairs_emit_exactly_once() {
    let (murmur, sink) = facade();
    let log = murmur.logger();

    for _ in 0..3 {
        log.warn_once("Physics", "solver fallback engaged", &[]).unwrap();
    }

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.records()[0].message, "solver fallback engaged");
}

#[test]
fn changing_system_or_message_emits_again() {
    let (murmur, sink) = facade();
    let log = murmur.logger();

    log.warn_once("Physics", "ready", &[]).unwrap();
    log.warn_once("Physics", "ready", &[]).unwrap();
    log.warn_once("AI", "ready", &[]).unwrap();
    log.warn_once("Physics", "stopped", &[]).unwrap();

    assert_eq!(sink.len(), 3);
}

#[test]
fn deduplication_applies_to_the_formatted_message() {
    let (murmur, sink) = facade();
    let log = murmur.logger();

    // Same format string, different arguments: distinct formatted messages,
    // so both emit.
    log.warn_once("Net", "peer {0} dropped", log_args![7]).unwrap();
    log.warn_once("Net", "peer {0} dropped", log_args![9]).unwrap();
    log.warn_once("Net", "peer {0} dropped", log_args![7]).unwrap();

    assert_eq!(sink.len(), 2);
}

#[test]
fn always_mode_is_never_deduplicated() {
    let (murmur, sink) = facade();
    let log = murmur.logger();

    log.warn("Physics", "tick", &[]).unwrap();
    log.warn("Physics", "tick", &[]).unwrap();

    assert_eq!(sink.len(), 2);
}

#[test]
fn suppressed_once_calls_do_not_consume_the_mark() {
    let (murmur, sink) = facade();
    let log = murmur.logger();

    // Debug is below the default threshold: the call is filtered before the
    // once gate, so the pair stays unmarked.
    log.debug_once("Physics", "detail", &[]).unwrap();
    assert!(sink.is_empty());

    murmur
        .with_settings(|settings| settings.set_system_level("Physics", LogLevel::Debug))
        .unwrap();
    log.debug_once("Physics", "detail", &[]).unwrap();
    assert_eq!(sink.len(), 1);
}

#[test]
fn clear_once_reopens_suppressed_pairs() {
    let (murmur, sink) = facade();
    let log = murmur.logger();

    log.error_once("Core", "boom", &[]).unwrap();
    log.error_once("Core", "boom", &[]).unwrap();
    assert_eq!(sink.len(), 1);

    murmur.clear_once();
    log.error_once("Core", "boom", &[]).unwrap();
    assert_eq!(sink.len(), 2);
}

#[test]
fn once_marks_are_shared_across_handles() {
    let (murmur, sink) = facade();

    let bound = murmur.system_logger("Physics").unwrap();
    bound.warn_once("ready", &[]).unwrap();

    // The unbound handle targets the same (system, message) pair.
    murmur.logger().warn_once("Physics", "ready", &[]).unwrap();

    assert_eq!(sink.len(), 1);
}
