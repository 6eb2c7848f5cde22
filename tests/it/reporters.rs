use std::sync::Mutex;

use handmock::*;

use crate::example::{ExampleMethod, ExampleProtocol, MockExample};

#[test]
#[should_panic(
    expected = "Expected Simple to be called 2 time(s) but was actually called 1 time(s)."
)]
fn panic_reporter_panics_with_failure_text() {
    let mock = MockExample::default();
    mock.simple();

    assert_call_count(&PanicReporter, mock.method(ExampleMethod::Simple), 2);
}

#[test]
#[should_panic(expected = "2 assertion failure(s):")]
fn deferred_reporter_panics_on_drop() {
    let mock = MockExample::default();
    let reporter = DeferredReporter::new();

    mock.with_arg(42);
    assert_call_count(&reporter, mock.method(ExampleMethod::WithArg), 2);
    assert_argument_equals(&reporter, mock.method(ExampleMethod::WithArg), 1, 24);
}

#[test]
fn deferred_reporter_is_silent_without_failures() {
    let mock = MockExample::default();
    let reporter = DeferredReporter::new();

    mock.with_arg(42);
    assert_call_count(&reporter, mock.method(ExampleMethod::WithArg), 1);
    assert_argument_equals(&reporter, mock.method(ExampleMethod::WithArg), 1, 42);
}

#[test]
fn closure_reporter() {
    let mock = MockExample::default();
    let descriptions = Mutex::new(vec![]);
    let reporter = |failure: Failure| descriptions.lock().unwrap().push(failure.description());

    mock.with_optional_arg(Some(42));
    assert_argument_is_none(&reporter, mock.method(ExampleMethod::WithOptionalArg), 1);

    let expected = "Argument #1: expected None but got a value of type i32";
    assert_eq!(*descriptions.lock().unwrap(), vec![expected.to_string()]);
}

#[test]
fn recording_reporter_verify_clears_the_log() {
    let mock = MockExample::default();
    let recorder = RecordingReporter::new();

    assert_call_count(&recorder, mock.method(ExampleMethod::Simple), 1);
    assert_eq!(recorder.len(), 1);

    assert_eq!(recorder.verify().unwrap_err().len(), 1);
    assert!(recorder.is_empty());
    assert!(recorder.verify().is_ok());
}

#[test]
fn recording_reporter_failures_are_a_snapshot() {
    let mock = MockExample::default();
    let recorder = RecordingReporter::new();

    assert_call_count(&recorder, mock.method(ExampleMethod::Simple), 1);
    let snapshot = recorder.failures();
    assert_call_count(&recorder, mock.method(ExampleMethod::Simple), 2);

    assert_eq!(snapshot.len(), 1);
    assert_eq!(recorder.len(), 2);
    assert_eq!(snapshot[0].error(), recorder.failures()[0].error());
}
