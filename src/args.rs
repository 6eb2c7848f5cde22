//! Type-erased argument lists.
//!
//! Every dispatched call is recorded as an [Args] value: the arguments in parameter order,
//! each either [Arg::Absent] or a type-tagged [ArgValue].

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// One recorded argument.
///
/// `Absent` is a legitimate argument value (the adapter received `None`), which is
/// different from an argument index beyond the end of the recorded [Args].
pub enum Arg {
    /// An explicitly absent value.
    Absent,
    /// A present value, tagged with its type.
    Value(ArgValue),
}

impl Arg {
    /// Record a present value.
    pub fn value<T: Any + Send + Sync>(value: T) -> Self {
        Self::Value(ArgValue::new(value))
    }

    /// Record an absent value.
    pub fn absent() -> Self {
        Self::Absent
    }

    /// Record an optional value: `None` becomes [Arg::Absent], `Some(value)` a present value of type `T`.
    pub fn optional<T: Any + Send + Sync>(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::value(value),
            None => Self::Absent,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the value as `T`, if present and of that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Self::Absent => None,
            Self::Value(value) => value.downcast_ref(),
        }
    }

    /// Name of the stored type, or `"None"` for an absent value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Absent => "None",
            Self::Value(value) => value.type_name(),
        }
    }
}

impl Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Absent => write!(f, "Absent"),
            Self::Value(value) => write!(f, "Value(<{}>)", value.type_name()),
        }
    }
}

/// A present argument together with its type tag.
pub struct ArgValue {
    type_id: TypeId,
    type_name: &'static str,
    value: Box<dyn Any + Send + Sync>,
}

impl ArgValue {
    fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: std::any::type_name::<T>(),
            value: Box::new(value),
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Check the type tag against `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        if self.is::<T>() {
            self.value.downcast_ref()
        } else {
            None
        }
    }

    pub(crate) fn downcast<T: Any>(self) -> Result<T, Self> {
        if !self.is::<T>() {
            return Err(self);
        }

        let type_id = self.type_id;
        let type_name = self.type_name;
        self.value
            .downcast::<T>()
            .map(|boxed| *boxed)
            .map_err(|value| Self {
                type_id,
                type_name,
                value,
            })
    }
}

/// The ordered arguments of one call.
#[derive(Debug, Default)]
pub struct Args(Vec<Arg>);

impl Args {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append a present argument.
    pub fn arg<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.0.push(Arg::value(value));
        self
    }

    /// Append an optional argument, see [Arg::optional].
    pub fn optional_arg<T: Any + Send + Sync>(mut self, value: Option<T>) -> Self {
        self.0.push(Arg::optional(value));
        self
    }

    /// Append an already constructed [Arg], e.g. [Arg::absent].
    pub fn push(mut self, arg: Arg) -> Self {
        self.0.push(arg);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the argument at the 1-based `index`.
    pub fn get(&self, index: usize) -> Option<&Arg> {
        index.checked_sub(1).and_then(|index| self.0.get(index))
    }

    /// Borrow the argument at the 1-based `index` as `T`.
    ///
    /// Intended for custom behaviors that need to pick out an argument, e.g. a callback.
    pub fn value<T: Any>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(Arg::downcast_ref)
    }
}

/// Build [Args] from a list of present values.
///
/// ```rust
/// use handmock::*;
///
/// let args = args!["name", 42];
/// assert_eq!(args.len(), 2);
/// assert_eq!(args.value::<i32>(2), Some(&42));
/// ```
///
/// Every value is recorded as present. An `Option` passed here is stored as a value of
/// type `Option<T>`, even when it is `None`. Use [Args::optional_arg] for parameters that
/// may be absent.
#[macro_export]
macro_rules! args {
    ($($value:expr),* $(,)?) => {
        $crate::Args::new()$(.arg($value))*
    };
}
