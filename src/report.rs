//! Failure reporters decide what an assertion failure means for the running test.

use spin::Mutex;

use crate::error::Failure;

/// The sink every assertion failure is reported to.
///
/// Assertion functions never stop the test themselves. A reporter may panic (failing a
/// plain `#[test]` immediately), collect failures for later, or anything else.
pub trait FailureReporter {
    fn report_failure(&self, failure: Failure);
}

impl<F> FailureReporter for F
where
    F: Fn(Failure),
{
    fn report_failure(&self, failure: Failure) {
        self(failure)
    }
}

/// Panics on the first failure.
#[derive(Clone, Copy, Default, Debug)]
pub struct PanicReporter;

impl FailureReporter for PanicReporter {
    fn report_failure(&self, failure: Failure) {
        panic!("{failure}");
    }
}

/// Keeps every reported failure, for later inspection.
///
/// Useful for testing assertions that are expected to fail, and for checking a batch of
/// independent assertions before deciding the outcome.
#[derive(Default, Debug)]
pub struct RecordingReporter {
    failures: Mutex<Vec<Failure>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of the failures reported so far.
    pub fn failures(&self) -> Vec<Failure> {
        self.failures.lock().clone()
    }

    /// Take the failures reported so far, leaving the log empty.
    pub fn take(&self) -> Vec<Failure> {
        std::mem::take(&mut *self.failures.lock())
    }

    pub fn len(&self) -> usize {
        self.failures.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.lock().is_empty()
    }

    /// Succeed if nothing was reported, otherwise return (and clear) the failures.
    pub fn verify(&self) -> Result<(), Vec<Failure>> {
        let failures = self.take();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}

impl FailureReporter for RecordingReporter {
    fn report_failure(&self, failure: Failure) {
        self.failures.lock().push(failure);
    }
}

/// Collects failures and panics with all of them when dropped.
///
/// Keep one alive for the duration of a test to see every independent assertion failure
/// at once rather than only the first.
#[derive(Default, Debug)]
pub struct DeferredReporter {
    recorder: RecordingReporter,
}

impl DeferredReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FailureReporter for DeferredReporter {
    fn report_failure(&self, failure: Failure) {
        self.recorder.report_failure(failure);
    }
}

impl Drop for DeferredReporter {
    fn drop(&mut self) {
        // A panicking test has already failed, don't turn it into an abort.
        if std::thread::panicking() {
            return;
        }

        if let Err(failures) = self.recorder.verify() {
            let mut msg = format!("{} assertion failure(s):", failures.len());
            for failure in failures {
                msg.push('\n');
                msg.push_str(&failure.to_string());
            }
            panic!("{msg}");
        }
    }
}
