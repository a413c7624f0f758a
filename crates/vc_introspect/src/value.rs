use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

// -----------------------------------------------------------------------------
// Object

/// Object-safe view of any `'static` type that can live inside a [`Value`].
///
/// Implemented for every `T: Any`, there is nothing to implement by hand.
///
/// Be careful when calling these methods on a smart pointer: `Rc<dyn Object>`
/// is itself `Any`, so `rc.object_type_name()` names the `Rc`. Go through
/// [`Value`] or dereference first.
pub trait Object: Any {
    /// Returns the full type path, e.g. `alloc::string::String`.
    fn object_type_path(&self) -> &'static str;

    /// Returns the type path without its module prefix, e.g. `String`.
    fn object_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any>;
}

impl<T: Any> Object for T {
    #[inline]
    fn object_type_path(&self) -> &'static str {
        core::any::type_name::<T>()
    }

    #[inline]
    fn object_type_name(&self) -> &'static str {
        short_type_name(core::any::type_name::<T>())
    }

    #[inline(always)]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline(always)]
    fn into_any_rc(self: Rc<Self>) -> Rc<dyn Any> {
        self
    }
}

/// Strips the module prefix of a type path.
///
/// Only the leading path is stripped, generic arguments are kept as they
/// are: `alloc::vec::Vec<u8>` becomes `Vec<u8>`. Tuples, arrays, slices,
/// references and pointers do not start with a path and keep their full name.
pub(crate) fn short_type_name(path: &'static str) -> &'static str {
    let head = match path.find(['<', '(', '[', '&', '*', ' ', ';', ',']) {
        Some(end) => &path[..end],
        None => path,
    };
    match head.rfind("::") {
        Some(sep) => &path[sep + 2..],
        None => path,
    }
}

// -----------------------------------------------------------------------------
// Value

/// A shared handle to a node of an object graph.
///
/// Cloning a `Value` clones the handle, not the object. A setter that stores
/// a `Value` (or the `Rc` inside it) links the same object into its parent,
/// so mutations made later through either handle are visible through both.
///
/// # Examples
///
/// ```
/// use std::rc::Rc;
/// use vc_introspect::Value;
///
/// let name = Value::new(String::from("Beer"));
/// assert_eq!(name.type_name(), "String");
/// assert_eq!(name.downcast_ref::<String>().unwrap(), "Beer");
///
/// let shared: Rc<String> = name.downcast().unwrap();
/// assert!(name.ptr_eq(&Value::from(shared)));
/// ```
#[derive(Clone)]
pub struct Value(Rc<dyn Object>);

impl Value {
    /// Moves `value` into a new shared handle.
    ///
    /// Passing a `Value` here nests it; use [`Clone`] to share one instead.
    #[inline]
    pub fn new<T: Any>(value: T) -> Self {
        Self(Rc::new(value))
    }

    /// Wraps an existing shared object without copying it.
    #[inline]
    pub fn from_rc<T: Any>(value: Rc<T>) -> Self {
        Self(value)
    }

    #[inline]
    fn object(&self) -> &dyn Object {
        &*self.0
    }

    /// Returns the [`TypeId`] of the object behind the handle.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        Any::type_id(self.object().as_any())
    }

    /// Returns the full type path of the object behind the handle.
    #[inline]
    pub fn type_path(&self) -> &'static str {
        self.object().object_type_path()
    }

    /// Returns the short type name of the object behind the handle.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.object().object_type_name()
    }

    /// Returns `true` if the object is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    /// Borrows the object as a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.object().as_any().downcast_ref::<T>()
    }

    /// Returns a new shared handle to the object as a `T`.
    pub fn downcast<T: Any>(&self) -> Option<Rc<T>> {
        Object::into_any_rc(Rc::clone(&self.0)).downcast::<T>().ok()
    }

    /// Returns `true` if both handles point to the same object.
    #[inline]
    pub fn ptr_eq(&self, other: &Value) -> bool {
        core::ptr::addr_eq(Rc::as_ptr(&self.0), Rc::as_ptr(&other.0))
    }
}

impl<T: Any> From<Rc<T>> for Value {
    #[inline]
    fn from(value: Rc<T>) -> Self {
        Self::from_rc(value)
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Value<{}>", self.type_path())
    }
}
