use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::format;
use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

use vc_utils::TypeIdMap;
use vc_utils::hash::HashMap;

use crate::method::{IntoOutcome, Method, Params};
use crate::value::short_type_name;

/// Prefix prepended to a path segment to name its accessor.
pub const GETTER_PREFIX: &str = "get";

// -----------------------------------------------------------------------------
// Overloads

/// Every method sharing one name, keyed by parameter list.
#[derive(Default)]
struct Overloads {
    nullary: Option<Method>,
    unary: TypeIdMap<Method>,
}

impl Overloads {
    fn get(&self, params: Params) -> Option<&Method> {
        match params {
            Params::Nullary => self.nullary.as_ref(),
            Params::Unary(arg) => self.unary.get(&arg),
        }
    }

    fn insert(&mut self, method: Method) -> Option<Method> {
        match method.params() {
            Params::Nullary => self.nullary.replace(method),
            Params::Unary(arg) => self.unary.insert(arg, method),
        }
    }

    fn iter(&self) -> impl Iterator<Item = &Method> {
        self.nullary.iter().chain(self.unary.values())
    }
}

// -----------------------------------------------------------------------------
// TypeMeta

/// Runtime metadata of one type, registered into the
/// [`TypeRegistry`](crate::registry::TypeRegistry).
///
/// It holds the type's identity and its method table. Methods are looked up
/// by name and then by [`Params`], so a name may be overloaded on the type
/// of its single argument.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use vc_introspect::{Method, Params, Value};
/// use vc_introspect::registry::TypeMeta;
///
/// #[derive(Default)]
/// struct Counter(Cell<i32>);
///
/// let meta = TypeMeta::of::<Counter>()
///     .with_getter("Count", |c: &Counter| Value::new(c.0.get()))
///     .with_method(Method::unary("setCount", |c: &Counter, n: Rc<i32>| c.0.set(*n)));
///
/// assert_eq!(meta.type_name(), "Counter");
/// assert!(meta.get_method("getCount", Params::Nullary).is_some());
/// assert!(meta.contains_method("setCount"));
/// ```
pub struct TypeMeta {
    type_id: TypeId,
    type_path: &'static str,
    type_name: &'static str,
    methods: HashMap<Box<str>, Overloads>,
}

impl TypeMeta {
    /// Creates a [`TypeMeta`] for `T` with an empty method table.
    #[inline]
    pub fn of<T: Any>() -> Self {
        let type_path = core::any::type_name::<T>();
        Self {
            type_id: TypeId::of::<T>(),
            type_path,
            type_name: short_type_name(type_path),
            methods: HashMap::default(),
        }
    }

    #[inline(always)]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the full type path, e.g. `alloc::string::String`.
    #[inline(always)]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the type path without its module prefix, e.g. `String`.
    #[inline(always)]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Inserts a method, returning the one with the same name and
    /// parameters it replaced.
    ///
    /// # Panics
    ///
    /// Panics if the method was built for another receiver type.
    pub fn insert_method(&mut self, method: Method) -> Option<Method> {
        assert!(
            method.receiver() == self.type_id,
            "method `{}` is called on `{}` but was inserted into the meta of `{}`",
            method.name(),
            method.receiver_path(),
            self.type_path,
        );
        match self.methods.get_mut(method.name()) {
            Some(overloads) => overloads.insert(method),
            None => {
                let mut overloads = Overloads::default();
                let name = Box::from(method.name());
                overloads.insert(method);
                self.methods.insert(name, overloads);
                None
            }
        }
    }

    /// Builder form of [`insert_method`](Self::insert_method).
    #[inline]
    pub fn with_method(mut self, method: Method) -> Self {
        self.insert_method(method);
        self
    }

    /// Registers the accessor of `field`, named `get{field}`.
    pub fn with_getter<T, R, F>(self, field: &str, f: F) -> Self
    where
        T: Any,
        R: IntoOutcome,
        F: Fn(&T) -> R + 'static,
    {
        self.with_method(Method::nullary(format!("{GETTER_PREFIX}{field}"), f))
    }

    /// Registers a one-argument mutator under its literal `name`.
    pub fn with_setter<T, A, R, F>(self, name: impl Into<Cow<'static, str>>, f: F) -> Self
    where
        T: Any,
        A: Any,
        R: IntoOutcome,
        F: Fn(&T, Rc<A>) -> R + 'static,
    {
        self.with_method(Method::unary(name, f))
    }

    /// Returns the method with this name taking these parameters.
    #[inline]
    pub fn get_method(&self, name: &str, params: Params) -> Option<&Method> {
        self.methods.get(name)?.get(params)
    }

    /// Returns `true` if any method is registered under `name`.
    #[inline]
    pub fn contains_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Iterates over every registered method in arbitrary order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values().flat_map(Overloads::iter)
    }
}

impl fmt::Debug for TypeMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeMeta")
            .field("type_path", &self.type_path)
            .field("methods", &self.methods.keys())
            .finish()
    }
}

// -----------------------------------------------------------------------------
// GetTypeMeta

/// Provides the [`TypeMeta`] of a type so it can be registered with
/// [`TypeRegistry::register`](crate::registry::TypeRegistry::register).
pub trait GetTypeMeta: Any {
    fn get_type_meta() -> TypeMeta;
}
