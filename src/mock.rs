use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use spin::Mutex;

use crate::args::{Arg, Args};
use crate::behavior::{Behavior, Outcome};
use crate::handle::MethodHandle;
use crate::record::MethodRecord;
use crate::MethodKey;

/// Recording state for one test double.
///
/// A `MockObject` is meant to be embedded in a hand-written adapter type that implements
/// the trait being mocked. Each trait method forwards into one of the `dispatch` methods
/// with its [MethodKey] and its arguments:
///
/// ```rust
/// use handmock::*;
///
/// trait Dependency {
///     fn with_arg(&self, arg: i32);
///     fn with_return(&self) -> bool;
///     fn with_optional_return(&self) -> Option<String>;
/// }
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum DependencyMethod {
///     WithArg,
///     WithReturn,
///     WithOptionalReturn,
/// }
///
/// struct MockDependency(MockObject<DependencyMethod>);
///
/// impl Dependency for MockDependency {
///     fn with_arg(&self, arg: i32) {
///         self.0.dispatch(DependencyMethod::WithArg, args![arg]);
///     }
///
///     fn with_return(&self) -> bool {
///         self.0.dispatch_returning(DependencyMethod::WithReturn, args![], true)
///     }
///
///     fn with_optional_return(&self) -> Option<String> {
///         self.0.dispatch_optional(DependencyMethod::WithOptionalReturn, args![], None)
///     }
/// }
/// ```
///
/// Cloning a `MockObject` does not create a new mock: every clone records into, and
/// configures, the same state. This is how a test keeps access to a mock that has been
/// moved into the unit under test.
pub struct MockObject<K: MethodKey> {
    records: Arc<Mutex<HashMap<K, MethodRecord>>>,
}

impl<K: MethodKey> MockObject<K> {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Record a call to a method without a return value.
    ///
    /// A configured behavior is run. Any value it returns is dropped.
    pub fn dispatch(&self, key: K, args: Args) {
        let _ = self.invoke(key, args);
    }

    /// Record a call to a method returning `R`.
    ///
    /// Returns what the configured value-returning behavior produced, or `default` when
    /// there is no such behavior or when its result is not an `R`.
    ///
    /// An absent result (see [MethodHandle::set_return_none]) is not an `R` either, even
    /// when `R` is an `Option`. Methods returning `Option<T>` should go through
    /// [MockObject::dispatch_optional], which maps it to `None`.
    pub fn dispatch_returning<R: Any>(&self, key: K, args: Args, default: R) -> R {
        match self.invoke(key, args) {
            Outcome::Returned(Arg::Value(value)) => match value.downcast::<R>() {
                Ok(output) => output,
                Err(value) => {
                    tracing::trace!(
                        method = ?key,
                        returned = value.type_name(),
                        expected = std::any::type_name::<R>(),
                        "returned value does not fit call site, using default"
                    );
                    default
                }
            },
            Outcome::Returned(Arg::Absent) => {
                tracing::trace!(
                    method = ?key,
                    expected = std::any::type_name::<R>(),
                    "returned absent value, using default"
                );
                default
            }
            Outcome::Completed | Outcome::Unconfigured => default,
        }
    }

    /// Record a call to a method returning `Option<T>`.
    ///
    /// An absent result (see [MethodHandle::set_return_none]) yields `None`. A result of
    /// type `T` or `Option<T>` is returned as is, anything else yields `default`.
    pub fn dispatch_optional<T: Any>(&self, key: K, args: Args, default: Option<T>) -> Option<T> {
        match self.invoke(key, args) {
            Outcome::Returned(Arg::Absent) => None,
            Outcome::Returned(Arg::Value(value)) => match value.downcast::<T>() {
                Ok(output) => Some(output),
                Err(value) => match value.downcast::<Option<T>>() {
                    Ok(output) => output,
                    Err(value) => {
                        tracing::trace!(
                            method = ?key,
                            returned = value.type_name(),
                            expected = std::any::type_name::<Option<T>>(),
                            "returned value does not fit call site, using default"
                        );
                        default
                    }
                },
            },
            Outcome::Completed | Outcome::Unconfigured => default,
        }
    }

    /// Discard every recorded call and every configured behavior, for all methods at once.
    pub fn reset(&self) {
        let mut records = self.records.lock();
        tracing::trace!(methods = records.len(), "reset mock");
        records.clear();
    }

    /// Get a handle for configuring the behavior of one method.
    pub fn method(&self, key: K) -> MethodHandle<'_, K> {
        MethodHandle::new(self, key)
    }

    fn invoke(&self, key: K, args: Args) -> Outcome {
        let (behavior, args) = {
            let mut records = self.records.lock();
            records.entry(key).or_default().record(args)
        };

        tracing::trace!(
            method = ?key,
            args = args.len(),
            behavior = ?behavior.kind(),
            "dispatch"
        );

        // The lock is released here: behaviors may call back into this mock.
        behavior.run(&args)
    }

    pub(crate) fn configure(&self, key: K, behavior: Behavior) {
        tracing::trace!(method = ?key, behavior = ?behavior.kind(), "configure");
        let mut records = self.records.lock();
        records.entry(key).or_default().set_behavior(behavior);
    }

    pub(crate) fn with_record<T>(&self, key: K, f: impl FnOnce(&MethodRecord) -> T) -> T {
        let mut records = self.records.lock();
        f(records.entry(key).or_default())
    }
}

impl<K: MethodKey> Default for MockObject<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: MethodKey> Clone for MockObject<K> {
    fn clone(&self) -> Self {
        Self {
            records: self.records.clone(),
        }
    }
}

impl<K: MethodKey> std::fmt::Debug for MockObject<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let records = self.records.lock();
        let mut map = f.debug_map();
        for (key, record) in records.iter() {
            map.entry(key, &record.times_called());
        }
        map.finish()
    }
}
