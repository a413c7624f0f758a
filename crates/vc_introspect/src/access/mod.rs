//! Provide name-based access to object graphs.
//!
//! - [`PathAccessor`]: walks a path of getters from a root object, calls a
//!   named setter, or links a chain of objects with a sequence of setters.
//! - [`AccessPath`]: anything that yields path segments. Implemented for
//!   `str`, `String` and [`ObjectPath`], a path split once for reuse.
//! - [`AccessError`]: why an access failed, for the `try_` operations.
//! - [`AccessorConfig`]: the delimiter and the level failures are logged at.
//!
//! # Syntax
//!
//! A path is a list of field names joined by [`PATH_DELIM`] (`.`), e.g.
//! `BarContainer.BazContainer.Name`. There is no escaping. Empty segments
//! are skipped, so an empty path has no segment and resolves to nothing.
//!
//! Each segment `Name` resolves to the nullary method `getName` of the
//! current object. Setters are named in full by the caller.

// -----------------------------------------------------------------------------
// Modules

mod config;
mod error;
mod path;
mod path_accessor;

// -----------------------------------------------------------------------------
// Exports

pub use config::AccessorConfig;
pub use error::AccessError;
pub use path::{AccessPath, ObjectPath, PATH_DELIM};
pub use path_accessor::PathAccessor;
