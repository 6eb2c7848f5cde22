//! Assertions on the recorded calls of a mocked method.
//!
//! Every function takes the [FailureReporter] to report to and the [MethodHandle] of the
//! method to inspect. Failures are reported, never raised, so a test can keep going
//! after one assertion fails.
//!
//! Indices are 1-based, both for arguments and for invocations. The functions without an
//! `_at` suffix inspect the most recent invocation, or invocation 1 if there were none.

use std::any::Any;
use std::fmt::Debug;
use std::panic::Location;

use crate::args::Arg;
use crate::error::{AssertionError, Failure};
use crate::handle::MethodHandle;
use crate::mismatch;
use crate::report::FailureReporter;
use crate::MethodKey;

/// Assert that the method was called exactly `expected` times.
#[track_caller]
pub fn assert_call_count<R, K>(reporter: &R, handle: MethodHandle<'_, K>, expected: usize)
where
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    let location = Location::caller();
    let actual = handle
        .mock()
        .with_record(handle.key(), |record| record.times_called());

    if actual != expected {
        report(
            reporter,
            AssertionError::CountMismatch {
                method: method_name(handle.key()),
                expected,
                actual,
            },
            location,
        );
    }
}

/// Assert that the most recent call had an argument at position `arg`, and return it.
///
/// Returns `None` without failing if the argument was recorded as absent. Returns `None`
/// and reports a failure if there is no such call or argument, or if the argument is
/// not a `T`.
///
/// ```rust
/// # use handmock::*;
/// # #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// # enum Method { WithArg }
/// let mock = MockObject::new();
/// mock.dispatch(Method::WithArg, args![42]);
///
/// let arg: i32 = assert_and_get_argument(&PanicReporter, mock.method(Method::WithArg), 1).unwrap();
/// assert_eq!(arg, 42);
/// ```
#[track_caller]
pub fn assert_and_get_argument<T, R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
) -> Option<T>
where
    T: Any + Clone,
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    get_argument(reporter, handle, arg, None, Location::caller())
}

/// Like [assert_and_get_argument], for the call with 1-based ordinal `invocation`.
#[track_caller]
pub fn assert_and_get_argument_at<T, R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: usize,
) -> Option<T>
where
    T: Any + Clone,
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    get_argument(reporter, handle, arg, Some(invocation), Location::caller())
}

/// Assert that argument `arg` of the most recent call equals `expected`.
#[track_caller]
pub fn assert_argument_equals<T, R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    expected: T,
) where
    T: Any + Clone + PartialEq + Debug,
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    argument_equals(reporter, handle, arg, None, expected, Location::caller())
}

/// Like [assert_argument_equals], for the call with 1-based ordinal `invocation`.
#[track_caller]
pub fn assert_argument_equals_at<T, R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: usize,
    expected: T,
) where
    T: Any + Clone + PartialEq + Debug,
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    argument_equals(
        reporter,
        handle,
        arg,
        Some(invocation),
        expected,
        Location::caller(),
    )
}

/// Assert that argument `arg` of the most recent call was recorded as absent.
///
/// Only [Arg::Absent] passes. An adapter that forwards an `Option` through `args!` records
/// it as a present `Option<T>` value, `None` included, and this assertion reports it as
/// having a value. Adapters record optional parameters with [crate::Args::optional_arg].
#[track_caller]
pub fn assert_argument_is_none<R, K>(reporter: &R, handle: MethodHandle<'_, K>, arg: usize)
where
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    argument_is_none(reporter, handle, arg, None, Location::caller())
}

/// Like [assert_argument_is_none], for the call with 1-based ordinal `invocation`.
#[track_caller]
pub fn assert_argument_is_none_at<R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: usize,
) where
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    argument_is_none(reporter, handle, arg, Some(invocation), Location::caller())
}

fn get_argument<T, R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: Option<usize>,
    location: &'static Location<'static>,
) -> Option<T>
where
    T: Any + Clone,
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    match retrieve(handle, arg, invocation) {
        Ok(value) => value,
        Err(error) => {
            report(reporter, error, location);
            None
        }
    }
}

fn argument_equals<T, R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: Option<usize>,
    expected: T,
    location: &'static Location<'static>,
) where
    T: Any + Clone + PartialEq + Debug,
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    let actual = match retrieve::<T, K>(handle, arg, invocation) {
        Ok(actual) => actual,
        Err(error) => return report(reporter, error, location),
    };

    if actual.as_ref() != Some(&expected) {
        let actual = match &actual {
            Some(actual) => mismatch::render(actual),
            None => "None".to_string(),
        };

        report(
            reporter,
            AssertionError::ValueMismatch {
                arg,
                expected: mismatch::render(&expected),
                actual,
            },
            location,
        );
    }
}

fn argument_is_none<R, K>(
    reporter: &R,
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: Option<usize>,
    location: &'static Location<'static>,
) where
    R: FailureReporter + ?Sized,
    K: MethodKey,
{
    let result = with_argument(handle, arg, invocation, |slot| match slot {
        Arg::Absent => Ok(()),
        Arg::Value(value) => Err(AssertionError::ExpectedNullMismatch {
            arg,
            actual: value.type_name(),
        }),
    });

    if let Err(error) = result {
        report(reporter, error, location);
    }
}

/// Fetch a clone of an argument. `Ok(None)` means the argument was recorded as absent.
fn retrieve<T, K>(
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: Option<usize>,
) -> Result<Option<T>, AssertionError>
where
    T: Any + Clone,
    K: MethodKey,
{
    with_argument(handle, arg, invocation, |slot| match slot {
        Arg::Absent => Ok(None),
        Arg::Value(value) => match value.downcast_ref::<T>() {
            Some(value) => Ok(Some(value.clone())),
            None => Err(AssertionError::TypeMismatch {
                arg,
                expected: std::any::type_name::<T>(),
                actual: value.type_name(),
            }),
        },
    })
}

/// Locate an argument slot, checking that the invocation and the argument exist.
fn with_argument<K, O>(
    handle: MethodHandle<'_, K>,
    arg: usize,
    invocation: Option<usize>,
    f: impl FnOnce(&Arg) -> Result<O, AssertionError>,
) -> Result<O, AssertionError>
where
    K: MethodKey,
{
    let key = handle.key();
    handle.mock().with_record(key, |record| {
        let invocation = invocation.unwrap_or_else(|| record.default_ordinal());

        let args = record
            .invocation(invocation)
            .ok_or_else(|| AssertionError::NotCalledEnoughTimes {
                method: method_name(key),
                invocation,
                actual: record.times_called(),
            })?
            .args();

        let slot = args
            .get(arg)
            .ok_or_else(|| AssertionError::NotEnoughArguments {
                method: method_name(key),
                arg,
            })?;

        f(slot)
    })
}

fn report<R: FailureReporter + ?Sized>(
    reporter: &R,
    error: AssertionError,
    location: &'static Location<'static>,
) {
    tracing::debug!(
        file = location.file(),
        line = location.line(),
        "assertion failed: {error}"
    );
    reporter.report_failure(Failure::new(error, location));
}

fn method_name<K: MethodKey>(key: K) -> String {
    format!("{key:?}")
}
