use std::panic::Location;

use crate::mismatch::Diff;

/// The kinds of assertion failure.
///
/// None of these are fatal: they are handed to a [crate::FailureReporter], which decides
/// what a failure means for the running test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AssertionError {
    /// The method was called a different number of times than expected.
    CountMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },
    /// An argument was requested from an invocation that never happened.
    NotCalledEnoughTimes {
        method: String,
        invocation: usize,
        actual: usize,
    },
    /// The invocation has fewer arguments than the requested argument index.
    NotEnoughArguments { method: String, arg: usize },
    /// The recorded argument is not of the requested type.
    TypeMismatch {
        arg: usize,
        expected: &'static str,
        actual: &'static str,
    },
    /// The recorded argument is not equal to the expected value.
    ///
    /// Both values are kept in their pretty `Debug` rendering.
    ValueMismatch {
        arg: usize,
        expected: String,
        actual: String,
    },
    /// The recorded argument was expected to be absent, but had a value.
    ExpectedNullMismatch { arg: usize, actual: &'static str },
}

impl std::fmt::Display for AssertionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CountMismatch {
                method,
                expected,
                actual,
            } => write!(
                f,
                "Expected {method} to be called {expected} time(s) \
                 but was actually called {actual} time(s)."
            ),
            Self::NotCalledEnoughTimes {
                method,
                invocation,
                actual,
            } => write!(
                f,
                "{method} was not called {invocation} time(s) (was called {actual} time(s))."
            ),
            Self::NotEnoughArguments { method, arg } => {
                write!(f, "{method} was not called with at least {arg} arguments.")
            }
            Self::TypeMismatch {
                arg,
                expected,
                actual,
            } => write!(
                f,
                "Argument #{arg}: expected type {expected} but got type {actual}"
            ),
            Self::ValueMismatch {
                arg,
                expected,
                actual,
            } => {
                if expected.contains('\n') || actual.contains('\n') {
                    writeln!(f, "Argument #{arg} (actual / expected):")?;
                    std::fmt::Display::fmt(&Diff::new(actual, expected), f)
                } else {
                    write!(f, "Argument #{arg}: expected {expected} but got {actual}")
                }
            }
            Self::ExpectedNullMismatch { arg, actual } => write!(
                f,
                "Argument #{arg}: expected None but got a value of type {actual}"
            ),
        }
    }
}

/// One reported assertion failure: what went wrong, and the assertion call that found it.
#[derive(Clone, Debug)]
pub struct Failure {
    error: AssertionError,
    location: &'static Location<'static>,
}

impl Failure {
    pub(crate) fn new(error: AssertionError, location: &'static Location<'static>) -> Self {
        Self { error, location }
    }

    pub fn error(&self) -> &AssertionError {
        &self.error
    }

    /// The failure text, without location.
    pub fn description(&self) -> String {
        self.error.to_string()
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }
}

impl std::fmt::Display for Failure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.location.file(),
            self.location.line(),
            self.error
        )
    }
}
