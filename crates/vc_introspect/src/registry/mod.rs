//! Per-type method tables.
//!
//! ## Menu
//!
//! - [`TypeMeta`]: the identity and method table of one type.
//! - [`GetTypeMeta`]: a trait providing the `TypeMeta` of a type.
//! - [`TypeRegistry`]: a container storing `TypeMeta`s by [`TypeId`].
//!
//! ## auto_register
//!
//! See [`TypeRegistry::auto_register`] and [`impl_auto_register!`].
//!
//! We use the [`inventory`] crate for static registration. Not every
//! platform supports it; where it is missing registration reports `false`
//! instead of failing.
//!
//! [`TypeId`]: core::any::TypeId
//! [`impl_auto_register!`]: crate::impl_auto_register
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod type_meta;
mod type_registry;

// -----------------------------------------------------------------------------
// Exports

pub use type_meta::{GETTER_PREFIX, GetTypeMeta, TypeMeta};
pub use type_registry::TypeRegistry;
