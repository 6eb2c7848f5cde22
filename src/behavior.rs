//! Behaviors are the test-supplied logic that runs when a mocked method is dispatched.

use std::sync::Arc;

use crate::args::{Arg, Args};

pub(crate) type ReturnsFn = dyn Fn(&Args) -> Arg + Send + Sync + 'static;
pub(crate) type VoidFn = dyn Fn(&Args) + Send + Sync + 'static;

/// The behavior configured for one method.
///
/// A single variant is active at any time, so installing a value-returning
/// behavior replaces a void one and vice versa.
#[derive(Clone, Default)]
pub(crate) enum Behavior {
    #[default]
    None,
    Returns(Arc<ReturnsFn>),
    Void(Arc<VoidFn>),
}

impl Behavior {
    pub fn returns(f: impl Fn(&Args) -> Arg + Send + Sync + 'static) -> Self {
        Self::Returns(Arc::new(f))
    }

    pub fn void(f: impl Fn(&Args) + Send + Sync + 'static) -> Self {
        Self::Void(Arc::new(f))
    }

    pub fn kind(&self) -> BehaviorKind {
        match self {
            Self::None => BehaviorKind::None,
            Self::Returns(_) => BehaviorKind::Returns,
            Self::Void(_) => BehaviorKind::Void,
        }
    }

    /// Run the behavior against the arguments of one call.
    pub fn run(&self, args: &Args) -> Outcome {
        match self {
            Self::None => Outcome::Unconfigured,
            Self::Returns(f) => Outcome::Returned(f(args)),
            Self::Void(f) => {
                f(args);
                Outcome::Completed
            }
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub(crate) enum BehaviorKind {
    None,
    Returns,
    Void,
}

/// What came out of running a [Behavior].
pub(crate) enum Outcome {
    /// No behavior configured, the call site decides.
    Unconfigured,
    /// A value-returning behavior produced this.
    Returned(Arg),
    /// A void behavior ran.
    Completed,
}
