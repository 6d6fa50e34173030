//! Tests for the debug events emitted on rejected input.
//!
//! Run with `--features tracing`.

#![cfg(all(feature = "sequence", feature = "tracing"))]

use std::fmt;
use std::sync::{Arc, Mutex};

use rstest::rstest;
use seqkit::sequence::{chunk, first, first_where, range_step, sorted_index_for_key};
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Level, Metadata, Subscriber};

// =============================================================================
// Recording subscriber
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordedEvent {
    level: Level,
    operation: Option<String>,
}

#[derive(Clone, Default)]
struct RecordingSubscriber {
    events: Arc<Mutex<Vec<RecordedEvent>>>,
}

impl RecordingSubscriber {
    fn events(&self) -> Vec<RecordedEvent> {
        self.events.lock().expect("event log poisoned").clone()
    }
}

struct OperationVisitor<'a>(&'a mut Option<String>);

impl Visit for OperationVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "operation" {
            *self.0 = Some(value.to_owned());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "operation" && self.0.is_none() {
            *self.0 = Some(format!("{value:?}"));
        }
    }
}

impl Subscriber for RecordingSubscriber {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, _attributes: &Attributes<'_>) -> Id {
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {}

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

    fn event(&self, event: &Event<'_>) {
        let mut operation = None;
        event.record(&mut OperationVisitor(&mut operation));
        self.events
            .lock()
            .expect("event log poisoned")
            .push(RecordedEvent {
                level: *event.metadata().level(),
                operation,
            });
    }

    fn enter(&self, _span: &Id) {}

    fn exit(&self, _span: &Id) {}
}

fn recorded<R>(action: impl FnOnce() -> R) -> (R, Vec<RecordedEvent>) {
    let subscriber = RecordingSubscriber::default();
    let result = tracing::subscriber::with_default(subscriber.clone(), action);
    (result, subscriber.events())
}

fn rejected(operation: &str) -> RecordedEvent {
    RecordedEvent {
        level: Level::DEBUG,
        operation: Some(operation.to_owned()),
    }
}

// =============================================================================
// Rejections are reported
// =============================================================================

#[rstest]
fn test_empty_first_emits_one_debug_event() {
    let empty: [i32; 0] = [];
    let (result, events) = recorded(|| first(&empty));
    assert!(result.is_err());
    assert_eq!(events, vec![rejected("first")]);
}

#[rstest]
fn test_unmatched_predicate_names_its_operation() {
    let (result, events) = recorded(|| first_where(&[1, 3, 5], |value| value % 2 == 0));
    assert!(result.is_err());
    assert_eq!(events, vec![rejected("first_where")]);
}

#[rstest]
fn test_zero_chunk_size_is_reported_as_chunk() {
    let (result, events) = recorded(|| chunk(&[1, 2, 3], 0));
    assert!(result.is_err());
    assert_eq!(events, vec![rejected("chunk")]);
}

#[rstest]
fn test_zero_step_is_reported_as_range() {
    let (result, events) = recorded(|| range_step(0, 10, 0));
    assert!(result.is_err());
    assert_eq!(events, vec![rejected("range")]);
}

#[rstest]
fn test_incomparable_key_is_reported() {
    let levels = [0.5, 1.5];
    let (result, events) = recorded(|| sorted_index_for_key(&levels, &f64::NAN, |level| *level));
    assert!(result.is_err());
    assert_eq!(events, vec![rejected("sorted_index_for_key")]);
}

// =============================================================================
// Successful calls stay silent
// =============================================================================

#[rstest]
fn test_successful_calls_emit_nothing() {
    let (result, events) = recorded(|| {
        (
            first(&[1, 2, 3]),
            chunk(&[1, 2, 3], 2).map(|groups| groups.len()),
            range_step(0, 10, 3).map(|values| values.len()),
        )
    });
    assert_eq!(result, (Ok(1), Ok(2), Ok(4)));
    assert!(events.is_empty());
}
