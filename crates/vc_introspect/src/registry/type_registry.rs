use core::any::TypeId;

use vc_utils::TypeIdMap;
use vc_utils::hash::{HashMap, HashSet};

use crate::registry::{GetTypeMeta, TypeMeta};

// -----------------------------------------------------------------------------
// TypeRegistry

/// The table every lookup of the [`PathAccessor`] goes through.
///
/// A type takes part in path access once its [`TypeMeta`] is registered
/// here. Entries are keyed by [`TypeId`], with secondary indices by full
/// type path and by short type name. Short names shared by several types
/// are ambiguous and cannot be looked up by name.
///
/// # Example
///
/// ```
/// use vc_introspect::{Params, Value};
/// use vc_introspect::registry::TypeRegistry;
///
/// let registry = TypeRegistry::new();
///
/// let to_string = registry
///     .get_with_type_name("i32").unwrap()
///     .get_method("toString", Params::Nullary).unwrap();
///
/// let out = to_string.invoke(&Value::new(42_i32), &[]).unwrap().unwrap();
/// assert_eq!(out.downcast_ref::<String>().unwrap(), "42");
/// ```
///
/// [`PathAccessor`]: crate::access::PathAccessor
pub struct TypeRegistry {
    type_meta_table: TypeIdMap<TypeMeta>,
    type_path_to_id: HashMap<&'static str, TypeId>,
    type_name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
}

impl Default for TypeRegistry {
    /// See [`TypeRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl TypeRegistry {
    /// Creates a registry without any type.
    #[inline]
    pub fn empty() -> Self {
        Self {
            type_meta_table: TypeIdMap::new(),
            type_path_to_id: HashMap::default(),
            type_name_to_id: HashMap::default(),
            ambiguous_names: HashSet::default(),
        }
    }

    /// Creates a registry with the primitive types already registered.
    ///
    /// - `bool` `char`
    /// - `i8 - i128` `isize`
    /// - `u8 - u128` `usize`
    /// - `f32` `f64`
    /// - `String`
    ///
    /// See [`impls`](crate::impls) for the methods they carry.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        crate::impls::register_primitives(&mut registry);
        registry
    }

    // # Validity
    // The type must **not** already exist.
    fn add_new_type_indices(
        type_meta: &TypeMeta,
        type_path_to_id: &mut HashMap<&'static str, TypeId>,
        type_name_to_id: &mut HashMap<&'static str, TypeId>,
        ambiguous_names: &mut HashSet<&'static str>,
    ) {
        let type_name = type_meta.type_name();

        if !ambiguous_names.contains(type_name) {
            if type_name_to_id.contains_key(type_name) {
                type_name_to_id.remove(type_name);
                ambiguous_names.insert(type_name);
            } else {
                type_name_to_id.insert(type_name, type_meta.type_id());
            }
        }

        type_path_to_id.insert(type_meta.type_path(), type_meta.type_id());
    }

    /// Registers `T` unless it is already registered.
    ///
    /// Returns `true` if `T` was added. An existing entry is left untouched,
    /// use [`insert_type_meta`](Self::insert_type_meta) to overwrite it.
    pub fn register<T: GetTypeMeta>(&mut self) -> bool {
        self.type_meta_table.try_insert(TypeId::of::<T>(), || {
            let meta = T::get_type_meta();
            Self::add_new_type_indices(
                &meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            meta
        })
    }

    /// Adds `type_meta` unless its type is already registered.
    ///
    /// Returns `true` if it was added.
    pub fn try_insert_type_meta(&mut self, type_meta: TypeMeta) -> bool {
        self.type_meta_table.try_insert(type_meta.type_id(), || {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
            type_meta
        })
    }

    /// Adds `type_meta`, **overwriting** the method table of a type that is
    /// already registered.
    pub fn insert_type_meta(&mut self, type_meta: TypeMeta) {
        if !self.type_meta_table.contains(&type_meta.type_id()) {
            Self::add_new_type_indices(
                &type_meta,
                &mut self.type_path_to_id,
                &mut self.type_name_to_id,
                &mut self.ambiguous_names,
            );
        }
        self.type_meta_table.insert(type_meta.type_id(), type_meta);
    }

    /// Registers every type submitted with [`impl_auto_register!`].
    ///
    /// Returns `true` if static registration is supported on this platform.
    /// Types already present are skipped, so repeated calls are cheap.
    ///
    /// Without the `auto_register` feature this does nothing and returns `false`.
    ///
    /// [`impl_auto_register!`]: crate::impl_auto_register
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            crate::__macro_exports::auto_register::register_types(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.type_meta_table.contains(&type_id)
    }

    /// Returns the [`TypeMeta`] of the type with this [`TypeId`].
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&TypeMeta> {
        self.type_meta_table.get(&type_id)
    }

    /// Returns a mutable [`TypeMeta`], to add methods after registration.
    #[inline]
    pub fn get_mut(&mut self, type_id: TypeId) -> Option<&mut TypeMeta> {
        self.type_meta_table.get_mut(&type_id)
    }

    /// Returns the [`TypeMeta`] with this full type path.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&TypeMeta> {
        let id = self.type_path_to_id.get(type_path)?;
        self.get(*id)
    }

    /// Returns the [`TypeMeta`] with this short type name.
    ///
    /// Ambiguous names return `None`, see [`is_ambiguous`](Self::is_ambiguous).
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&TypeMeta> {
        let id = self.type_name_to_id.get(type_name)?;
        self.get(*id)
    }

    /// Returns `true` if several registered types share this short name.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.type_meta_table.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.type_meta_table.is_empty()
    }

    /// Iterates over the registered [`TypeMeta`]s in arbitrary order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &TypeMeta> {
        self.type_meta_table.values()
    }
}
