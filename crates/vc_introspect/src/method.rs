//! Registered methods and their invocation.

use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::any::{Any, TypeId};
use core::fmt;

use thiserror::Error;

use crate::Value;

// -----------------------------------------------------------------------------
// Error

/// An error raised while a registered method runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvokeError {
    #[error("receiver is `{actual}`, expected `{expected}`")]
    ReceiverMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("argument is `{actual}`, expected `{expected}`")]
    ArgumentMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("expected {expected} argument(s), found {found}")]
    ArgumentCount { expected: usize, found: usize },

    /// The method body itself reported a failure.
    #[error("{0}")]
    Failed(String),
}

/// What a method call produces: a value, nothing, or an error.
pub type Outcome = Result<Option<Value>, InvokeError>;

// -----------------------------------------------------------------------------
// IntoOutcome

/// Conversion of a method body's return value into an [`Outcome`].
///
/// - `()` is absent, so plain setters need no conversion.
/// - `Value` and `Option<Value>` are returned as they are.
/// - `Result<R, E>` forwards `R` and turns `E` into [`InvokeError::Failed`].
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for () {
    #[inline]
    fn into_outcome(self) -> Outcome {
        Ok(None)
    }
}

impl IntoOutcome for Value {
    #[inline]
    fn into_outcome(self) -> Outcome {
        Ok(Some(self))
    }
}

impl IntoOutcome for Option<Value> {
    #[inline]
    fn into_outcome(self) -> Outcome {
        Ok(self)
    }
}

impl<R: IntoOutcome, E: fmt::Display> IntoOutcome for Result<R, E> {
    #[inline]
    fn into_outcome(self) -> Outcome {
        match self {
            Ok(ret) => ret.into_outcome(),
            Err(err) => Err(InvokeError::Failed(err.to_string())),
        }
    }
}

// -----------------------------------------------------------------------------
// Params

/// The parameter list a method is looked up by.
///
/// Arguments match by exact runtime type, there is no subtyping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Params {
    /// No argument.
    Nullary,
    /// One argument of the given type.
    Unary(TypeId),
}

impl Params {
    /// Returns the parameter list a call with `arg` resolves to.
    #[inline]
    pub fn of_arg(arg: Option<&Value>) -> Self {
        match arg {
            Some(value) => Self::Unary(value.type_id()),
            None => Self::Nullary,
        }
    }

    #[inline]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Nullary => 0,
            Self::Unary(_) => 1,
        }
    }
}

// -----------------------------------------------------------------------------
// Method

type MethodFn = dyn Fn(&Value, &[Value]) -> Outcome;

/// A named method registered on a type.
///
/// Built from a typed closure with [`Method::nullary`] or [`Method::unary`].
/// The receiver and the argument are downcast when the method is invoked.
///
/// # Examples
///
/// ```
/// use vc_introspect::{Method, Value};
///
/// let to_string = Method::nullary("toString", |n: &i32| Value::new(n.to_string()));
///
/// let out = to_string.invoke(&Value::new(42_i32), &[]).unwrap().unwrap();
/// assert_eq!(out.downcast_ref::<String>().unwrap(), "42");
/// ```
pub struct Method {
    name: Cow<'static, str>,
    receiver: TypeId,
    receiver_path: &'static str,
    params: Params,
    func: Box<MethodFn>,
}

impl Method {
    /// Creates a method taking no argument.
    pub fn nullary<T, R, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        T: Any,
        R: IntoOutcome,
        F: Fn(&T) -> R + 'static,
    {
        Self {
            name: name.into(),
            receiver: TypeId::of::<T>(),
            receiver_path: core::any::type_name::<T>(),
            params: Params::Nullary,
            func: Box::new(move |this: &Value, args: &[Value]| -> Outcome {
                check_arity(args, 0)?;
                f(receiver::<T>(this)?).into_outcome()
            }),
        }
    }

    /// Creates a method taking one argument of type `A`.
    ///
    /// The argument arrives as a shared `Rc<A>`, so a setter can link the
    /// very object it was given into the receiver.
    pub fn unary<T, A, R, F>(name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        T: Any,
        A: Any,
        R: IntoOutcome,
        F: Fn(&T, Rc<A>) -> R + 'static,
    {
        Self {
            name: name.into(),
            receiver: TypeId::of::<T>(),
            receiver_path: core::any::type_name::<T>(),
            params: Params::Unary(TypeId::of::<A>()),
            func: Box::new(move |this: &Value, args: &[Value]| -> Outcome {
                check_arity(args, 1)?;
                let arg = args[0]
                    .downcast::<A>()
                    .ok_or_else(|| InvokeError::ArgumentMismatch {
                        expected: core::any::type_name::<A>(),
                        actual: args[0].type_path(),
                    })?;
                f(receiver::<T>(this)?, arg).into_outcome()
            }),
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub const fn params(&self) -> Params {
        self.params
    }

    /// Returns the [`TypeId`] of the type this method is called on.
    #[inline]
    pub const fn receiver(&self) -> TypeId {
        self.receiver
    }

    /// Returns the full type path of the type this method is called on.
    #[inline]
    pub const fn receiver_path(&self) -> &'static str {
        self.receiver_path
    }

    /// Calls the method on `this`.
    #[inline]
    pub fn invoke(&self, this: &Value, args: &[Value]) -> Outcome {
        (self.func)(this, args)
    }
}

impl fmt::Debug for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Method")
            .field("name", &self.name)
            .field("receiver", &self.receiver_path)
            .field("params", &self.params)
            .finish()
    }
}

#[inline]
fn check_arity(args: &[Value], expected: usize) -> Result<(), InvokeError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(InvokeError::ArgumentCount {
            expected,
            found: args.len(),
        })
    }
}

#[inline]
fn receiver<T: Any>(this: &Value) -> Result<&T, InvokeError> {
    this.downcast_ref::<T>()
        .ok_or_else(|| InvokeError::ReceiverMismatch {
            expected: core::any::type_name::<T>(),
            actual: this.type_path(),
        })
}
