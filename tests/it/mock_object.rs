use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use handmock::*;

use crate::example::{recording_callback, Callback, ExampleMethod, ExampleProtocol, MockExample};

#[test]
fn call_count_follows_dispatches() {
    let mock = MockExample::default();

    mock.simple();
    assert_call_count(&PanicReporter, mock.method(ExampleMethod::Simple), 1);

    mock.simple();
    assert_call_count(&PanicReporter, mock.method(ExampleMethod::Simple), 2);
}

#[test]
fn history_is_kept_in_call_order() {
    let mock = MockExample::default();

    for arg in 1..=10 {
        mock.with_arg(arg);
    }

    let handle = mock.method(ExampleMethod::WithArg);
    assert_call_count(&PanicReporter, handle, 10);
    for invocation in 1..=10 {
        assert_argument_equals_at(&PanicReporter, handle, 1, invocation, invocation as i32);
    }
}

#[test]
fn reset_resets_call_count_and_history() {
    let mock = MockExample::default();
    mock.simple();
    mock.with_arg(1);

    mock.mock.reset();

    assert_call_count(&PanicReporter, mock.method(ExampleMethod::Simple), 0);
    assert_call_count(&PanicReporter, mock.method(ExampleMethod::WithArg), 0);

    let recorder = RecordingReporter::new();
    let arg: Option<i32> =
        assert_and_get_argument(&recorder, mock.method(ExampleMethod::WithArg), 1);
    assert_eq!(arg, None);
    assert!(matches!(
        recorder.take()[0].error(),
        AssertionError::NotCalledEnoughTimes { .. }
    ));
}

#[test]
fn return_value_is_returned_until_reconfigured() {
    let mock = MockExample::default();
    assert!(mock.with_return());

    mock.method(ExampleMethod::WithReturn)
        .set_return_value(false);
    assert!(!mock.with_return());
    assert!(!mock.with_return());

    assert_call_count(&PanicReporter, mock.method(ExampleMethod::WithReturn), 3);
}

#[test]
fn reset_resets_return_value() {
    let mock = MockExample::default();
    mock.method(ExampleMethod::WithReturn)
        .set_return_value(false);

    mock.mock.reset();

    assert!(mock.with_return());
}

#[test]
fn return_none() {
    let mock = MockExample::default();
    assert_eq!(mock.with_optional_return(), None);

    mock.method(ExampleMethod::WithOptionalReturn)
        .set_return_value("returned".to_string());
    assert_eq!(mock.with_optional_return(), Some("returned".to_string()));

    mock.method(ExampleMethod::WithOptionalReturn)
        .set_return_none();
    assert_eq!(mock.with_optional_return(), None);
}

#[test]
fn optional_behavior_may_return_some_or_none() {
    let mock = MockExample::default();
    let calls = AtomicUsize::new(0);
    mock.method(ExampleMethod::WithOptionalReturn)
        .set_custom_optional_behavior(move |_| {
            if calls.fetch_add(1, Ordering::SeqCst) == 0 {
                Some("first".to_string())
            } else {
                None
            }
        });

    assert_eq!(mock.with_optional_return(), Some("first".to_string()));
    assert_eq!(mock.with_optional_return(), None);
}

#[test]
fn return_value_of_wrong_type_falls_back_to_default() {
    let mock = MockExample::default();
    mock.method(ExampleMethod::WithReturn)
        .set_return_value(0_u8);

    assert!(mock.with_return());
}

#[test]
fn custom_behavior_invokes_callback_argument() {
    let mock = MockExample::default();
    mock.method(ExampleMethod::WithReturnAndCallback)
        .set_custom_behavior(|args| {
            let callback = args.value::<Callback>(1).expect("missing callback");
            callback(1, "hello");
            false
        });

    let (callback, received) = recording_callback();

    let returned = mock.with_return_and_callback(callback);

    assert!(!returned);
    assert_eq!(*received.lock().unwrap(), vec![(1, "hello".to_string())]);
}

#[test]
fn reset_resets_custom_behavior() {
    let mock = MockExample::default();
    mock.method(ExampleMethod::WithReturnAndCallback)
        .set_custom_behavior(|args| {
            let callback = args.value::<Callback>(1).expect("missing callback");
            callback(1, "hello");
            false
        });

    mock.mock.reset();

    let (callback, received) = recording_callback();

    assert!(mock.with_return_and_callback(callback));
    assert!(received.lock().unwrap().is_empty());
}

#[test]
fn custom_void_behavior_invokes_callback_argument() {
    let mock = MockExample::default();
    mock.method(ExampleMethod::WithNameAndCallback)
        .set_custom_void_behavior(|args| {
            let callback = args.value::<Callback>(2).expect("missing callback");
            callback(1, "hello");
        });

    let (callback, received) = recording_callback();

    mock.with_name_and_callback("name", callback);

    assert_eq!(*received.lock().unwrap(), vec![(1, "hello".to_string())]);
}

#[test]
fn reset_resets_custom_void_behavior() {
    let mock = MockExample::default();
    mock.method(ExampleMethod::WithNameAndCallback)
        .set_custom_void_behavior(|args| {
            let callback = args.value::<Callback>(2).expect("missing callback");
            callback(1, "hello");
        });

    mock.mock.reset();

    let (callback, received) = recording_callback();
    mock.with_name_and_callback("name", callback);

    assert!(received.lock().unwrap().is_empty());
}

#[test]
fn void_behavior_replaces_value_behavior() {
    let mock = MockExample::default();
    let handle = mock.method(ExampleMethod::WithReturn);
    let void_calls = Arc::new(AtomicUsize::new(0));

    handle.set_return_value(false);
    handle.set_custom_void_behavior({
        let void_calls = void_calls.clone();
        move |_: &Args| {
            void_calls.fetch_add(1, Ordering::SeqCst);
        }
    });

    assert!(mock.with_return());
    assert_eq!(void_calls.load(Ordering::SeqCst), 1);

    handle.set_return_value(false);

    assert!(!mock.with_return());
    assert_eq!(void_calls.load(Ordering::SeqCst), 1);
}

#[test]
fn moved_mock_is_observed_through_clone() {
    fn use_dependency(dependency: Box<dyn ExampleProtocol>) {
        dependency.with_arg(42);
    }

    let mock = MockExample::default();
    use_dependency(Box::new(mock.clone()));

    assert_argument_equals(&PanicReporter, mock.method(ExampleMethod::WithArg), 1, 42);
}
