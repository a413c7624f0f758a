//! Items used by exported macros, not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    pub use inventory;

    use crate::registry::TypeRegistry;

    /// One entry submitted by [`impl_auto_register!`](crate::impl_auto_register).
    pub struct AutoRegistration {
        register: fn(&mut TypeRegistry),
    }

    impl AutoRegistration {
        #[inline]
        pub const fn new(register: fn(&mut TypeRegistry)) -> Self {
            Self { register }
        }
    }

    inventory::collect!(AutoRegistration);

    // Always present where static registration works, so an empty
    // iteration means the platform lacks support.
    inventory::submit! {
        AutoRegistration::new(|_| {})
    }

    pub fn register_types(registry: &mut TypeRegistry) -> bool {
        let mut supported = false;
        for entry in inventory::iter::<AutoRegistration> {
            supported = true;
            (entry.register)(registry);
        }
        supported
    }
}

/// Submits types for [`TypeRegistry::auto_register`].
///
/// Each type must implement [`GetTypeMeta`] and be non-generic.
/// Without the `auto_register` feature this expands to nothing.
///
/// # Examples
///
/// ```no_run
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use std::any::TypeId;
/// use vc_introspect::impl_auto_register;
/// use vc_introspect::registry::{GetTypeMeta, TypeMeta, TypeRegistry};
///
/// struct Volume(Cell<u8>);
///
/// impl GetTypeMeta for Volume {
///     fn get_type_meta() -> TypeMeta {
///         TypeMeta::of::<Self>()
///             .with_setter("setLevel", |v: &Volume, level: Rc<u8>| v.0.set(*level))
///     }
/// }
///
/// impl_auto_register!(Volume);
///
/// let mut registry = TypeRegistry::empty();
/// assert!(registry.auto_register());
/// assert!(registry.contains(TypeId::of::<Volume>()));
/// ```
///
/// [`TypeRegistry::auto_register`]: crate::registry::TypeRegistry::auto_register
/// [`GetTypeMeta`]: crate::registry::GetTypeMeta
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! impl_auto_register {
    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::__macro_exports::auto_register::inventory::submit! {
                $crate::__macro_exports::auto_register::AutoRegistration::new(
                    |registry| {
                        registry.register::<$ty>();
                    }
                )
            }
        )+
    };
}

/// Submits types for [`TypeRegistry::auto_register`].
///
/// The `auto_register` feature is disabled, so this expands to nothing.
///
/// [`TypeRegistry::auto_register`]: crate::registry::TypeRegistry::auto_register
#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! impl_auto_register {
    ($($ty:ty),+ $(,)?) => {};
}
