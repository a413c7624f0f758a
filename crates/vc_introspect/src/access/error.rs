use alloc::string::String;
use core::fmt;

use thiserror::Error;

use crate::InvokeError;

/// An error returned from a failed access.
///
/// The lenient operations of [`PathAccessor`](crate::access::PathAccessor)
/// log this and return `None`; the `try_` operations return it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AccessError {
    #[error("no target object was given")]
    NullTarget,

    #[error("no setter name was given")]
    NullSetter,

    #[error("no setter names or no values were given")]
    NullSequence,

    #[error("type `{0}` is not registered")]
    UnregisteredType(&'static str),

    #[error("`{type_name}` has no method `{method}` taking {}", Takes(.argument))]
    MethodNotFound {
        type_name: &'static str,
        method: String,
        /// Type of the single argument, `None` for a nullary lookup.
        argument: Option<&'static str>,
    },

    #[error("`{type_name}::{method}` failed: {source}")]
    Invocation {
        type_name: &'static str,
        method: String,
        source: InvokeError,
    },

    #[error("{names} setter name(s) but {values} value(s)")]
    LengthMismatch { names: usize, values: usize },
}

struct Takes<'a>(&'a Option<&'static str>);

impl fmt::Display for Takes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(ty) => write!(f, "`{ty}`"),
            None => f.write_str("no argument"),
        }
    }
}
