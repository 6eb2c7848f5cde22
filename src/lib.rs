//!
//! `handmock` is a small library for hand-written mock objects.
//!
//! A mock is a type you write yourself that implements the trait being replaced, and
//! forwards every method into a [MockObject]. The mock object records every call with its
//! arguments, and runs whatever behavior the test configured for that method:
//!
//! ```rust
//! use handmock::*;
//!
//! trait Cat {
//!     fn feed(&self, times: i32);
//!     fn give_toy(&self) -> bool;
//! }
//!
//! #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
//! enum CatMethod {
//!     Feed,
//!     GiveToy,
//! }
//!
//! #[derive(Clone, Default)]
//! struct MockCat(MockObject<CatMethod>);
//!
//! impl Cat for MockCat {
//!     fn feed(&self, times: i32) {
//!         self.0.dispatch(CatMethod::Feed, args![times]);
//!     }
//!
//!     fn give_toy(&self) -> bool {
//!         self.0.dispatch_returning(CatMethod::GiveToy, args![], true)
//!     }
//! }
//!
//! fn wake_up(cat: &impl Cat) -> bool {
//!     cat.feed(1);
//!     cat.feed(5);
//!     cat.give_toy()
//! }
//!
//! let cat = MockCat::default();
//! cat.0.method(CatMethod::GiveToy).set_return_value(false);
//!
//! assert!(!wake_up(&cat));
//!
//! assert_call_count(&PanicReporter, cat.0.method(CatMethod::Feed), 2);
//! assert_argument_equals(&PanicReporter, cat.0.method(CatMethod::Feed), 1, 5);
//! assert_argument_equals_at(&PanicReporter, cat.0.method(CatMethod::Feed), 1, 1, 1);
//! ```
//!
//! Assertions report their failures to a [FailureReporter] instead of panicking
//! themselves. [PanicReporter] fails the test on the first failure, [DeferredReporter]
//! fails it at the end with every failure listed, and [RecordingReporter] just keeps them.
//!
//! The library does not synchronize anything on behalf of behaviors. A behavior that
//! hands a callback argument to another thread or a timer must be waited for by the test
//! before asserting on its effects.

#![forbid(unsafe_code)]

mod args;
mod assert;
mod behavior;
mod error;
mod handle;
mod mismatch;
mod mock;
mod record;
mod report;

pub use args::{Arg, ArgValue, Args};
pub use assert::{
    assert_and_get_argument, assert_and_get_argument_at, assert_argument_equals,
    assert_argument_equals_at, assert_argument_is_none, assert_argument_is_none_at,
    assert_call_count,
};
pub use error::{AssertionError, Failure};
pub use handle::MethodHandle;
pub use mock::MockObject;
pub use report::{DeferredReporter, FailureReporter, PanicReporter, RecordingReporter};

use std::fmt::Debug;
use std::hash::Hash;

///
/// Identifies one method of a mocked trait.
///
/// Implemented for every small copyable identifier type, which in practice is a
/// field-less enum with one variant per trait method:
///
/// ```rust
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DependencyMethod {
///     WithOptionalArg,
///     WithReturn,
/// }
/// ```
///
/// The `Debug` representation names the method in failure reports.
pub trait MethodKey: Copy + Eq + Hash + Debug + Send + 'static {}

impl<K> MethodKey for K where K: Copy + Eq + Hash + Debug + Send + 'static {}
