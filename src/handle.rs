use std::any::Any;

use crate::args::{Arg, Args};
use crate::behavior::Behavior;
use crate::mock::MockObject;
use crate::MethodKey;

/// A reference to one method of a [MockObject], used for stubbing out its behavior.
///
/// Obtained through [MockObject::method]. The handle is also what the assertion
/// functions take to identify the method whose calls are inspected.
///
/// Configuring a behavior never counts as a call. Value-returning and void behaviors
/// are mutually exclusive: whichever was configured last is the one that runs.
pub struct MethodHandle<'m, K: MethodKey> {
    mock: &'m MockObject<K>,
    key: K,
}

impl<'m, K: MethodKey> MethodHandle<'m, K> {
    pub(crate) fn new(mock: &'m MockObject<K>, key: K) -> Self {
        Self { mock, key }
    }

    /// The method this handle refers to.
    pub fn key(&self) -> K {
        self.key
    }

    /// Make every subsequent call return a clone of `value`, regardless of arguments.
    pub fn set_return_value<R>(&self, value: R)
    where
        R: Clone + Send + Sync + 'static,
    {
        self.mock.configure(
            self.key,
            Behavior::returns(move |_| Arg::value(value.clone())),
        );
    }

    /// Make every subsequent call return an absent value.
    ///
    /// Call sites using [MockObject::dispatch_optional] observe `None`.
    pub fn set_return_none(&self) {
        self.mock
            .configure(self.key, Behavior::returns(|_| Arg::absent()));
    }

    /// Compute the return value of every subsequent call from its arguments.
    ///
    /// ```rust
    /// # use handmock::*;
    /// # #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    /// # enum Method { Add }
    /// let mock = MockObject::new();
    /// mock.method(Method::Add).set_custom_behavior(|args| {
    ///     args.value::<i32>(1).unwrap() + args.value::<i32>(2).unwrap()
    /// });
    ///
    /// assert_eq!(mock.dispatch_returning(Method::Add, args![40, 2], 0), 42);
    /// ```
    pub fn set_custom_behavior<R, F>(&self, behavior: F)
    where
        R: Any + Send + Sync,
        F: Fn(&Args) -> R + Send + Sync + 'static,
    {
        self.mock.configure(
            self.key,
            Behavior::returns(move |args| Arg::value(behavior(args))),
        );
    }

    /// Like [MethodHandle::set_custom_behavior], but the function may also produce an absent value.
    pub fn set_custom_optional_behavior<R, F>(&self, behavior: F)
    where
        R: Any + Send + Sync,
        F: Fn(&Args) -> Option<R> + Send + Sync + 'static,
    {
        self.mock.configure(
            self.key,
            Behavior::returns(move |args| Arg::optional(behavior(args))),
        );
    }

    /// Run `behavior` on every subsequent call, without producing a return value.
    pub fn set_custom_void_behavior<F>(&self, behavior: F)
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.mock.configure(self.key, Behavior::void(behavior));
    }

    pub(crate) fn mock(&self) -> &'m MockObject<K> {
        self.mock
    }
}

impl<'m, K: MethodKey> Clone for MethodHandle<'m, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'m, K: MethodKey> Copy for MethodHandle<'m, K> {}

impl<'m, K: MethodKey> std::fmt::Debug for MethodHandle<'m, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("MethodHandle").field(&self.key).finish()
    }
}
