use alloc::rc::Rc;
use alloc::string::String;
use core::any::Any;

use crate::access::{AccessError, AccessPath, AccessorConfig};
use crate::registry::{GETTER_PREFIX, TypeRegistry};
use crate::{Method, Params, Value};

// -----------------------------------------------------------------------------
// PathAccessor

/// Gets and sets values in an object graph by name.
///
/// Every lookup goes through the borrowed [`TypeRegistry`]: a path segment
/// `Name` resolves to the nullary method `getName` of the current object's
/// type, and a setter resolves by its literal name plus the exact runtime
/// type of its argument.
///
/// Each operation comes in two forms:
///
/// - `get_value`, `set_value`, `set_values` return `None` on any failure,
///   after logging it at [`AccessorConfig::failure_level`] (debug by default).
///   A missing method, a failed call and a field holding nothing look the same.
/// - `try_get_value`, `try_set_value`, `try_set_values` return the
///   [`AccessError`] instead, so these cases can be told apart.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use vc_introspect::Value;
/// use vc_introspect::access::PathAccessor;
/// use vc_introspect::registry::{TypeMeta, TypeRegistry};
///
/// #[derive(Default)]
/// struct Inner(RefCell<Option<String>>);
/// #[derive(Default)]
/// struct Outer(RefCell<Option<Rc<Inner>>>);
///
/// let mut registry = TypeRegistry::new();
/// registry.insert_type_meta(
///     TypeMeta::of::<Outer>()
///         .with_getter("Inner", |o: &Outer| o.0.borrow().clone().map(Value::from))
///         .with_setter("setInner", |o: &Outer, i: Rc<Inner>| *o.0.borrow_mut() = Some(i)),
/// );
/// registry.insert_type_meta(
///     TypeMeta::of::<Inner>()
///         .with_getter("Name", |i: &Inner| i.0.borrow().clone().map(Value::new))
///         .with_setter("setName", |i: &Inner, n: Rc<String>| *i.0.borrow_mut() = Some((*n).clone())),
/// );
///
/// let accessor = PathAccessor::new(&registry);
/// let outer = Value::new(Outer::default());
///
/// let names = ["setInner", "setName"];
/// let values = [Value::new(Inner::default()), Value::new(String::from("Beer"))];
/// let root = accessor.set_values(&outer, Some(&names), Some(&values)).unwrap();
/// assert!(root.ptr_eq(&outer));
///
/// let name = accessor.get_value_as::<String>(&outer, "Inner.Name").unwrap();
/// assert_eq!(*name, "Beer");
/// assert!(accessor.get_value(&outer, "Inner.Missing").is_none());
/// ```
#[derive(Clone, Copy)]
pub struct PathAccessor<'r> {
    registry: &'r TypeRegistry,
    config: AccessorConfig,
}

impl<'r> PathAccessor<'r> {
    /// Creates an accessor with the default [`AccessorConfig`].
    #[inline]
    pub fn new(registry: &'r TypeRegistry) -> Self {
        Self::with_config(registry, AccessorConfig::default())
    }

    #[inline]
    pub const fn with_config(registry: &'r TypeRegistry, config: AccessorConfig) -> Self {
        Self { registry, config }
    }

    #[inline]
    pub const fn registry(&self) -> &'r TypeRegistry {
        self.registry
    }

    #[inline]
    pub const fn config(&self) -> &AccessorConfig {
        &self.config
    }

    fn find_method(
        &self,
        this: &Value,
        name: &str,
        arg: Option<&Value>,
    ) -> Result<&'r Method, AccessError> {
        let meta = self
            .registry
            .get(this.type_id())
            .ok_or(AccessError::UnregisteredType(this.type_path()))?;

        meta.get_method(name, Params::of_arg(arg))
            .ok_or_else(|| AccessError::MethodNotFound {
                type_name: meta.type_name(),
                method: String::from(name),
                argument: arg.map(Value::type_name),
            })
    }

    fn call(
        &self,
        this: &Value,
        name: &str,
        arg: Option<&Value>,
    ) -> Result<Option<Value>, AccessError> {
        let method = self.find_method(this, name, arg)?;
        let args: &[Value] = match arg {
            Some(arg) => core::slice::from_ref(arg),
            None => &[],
        };
        method
            .invoke(this, args)
            .map_err(|source| AccessError::Invocation {
                type_name: this.type_name(),
                method: String::from(name),
                source,
            })
    }

    // -------------------------------------------------------------------------
    // get

    /// Follows `path` from `start` and returns the value at its end.
    ///
    /// Returns `Ok(None)` if a getter on the way returns nothing, or if the
    /// path has no segment.
    pub fn try_get_value<'a>(
        &self,
        start: impl Into<Option<&'a Value>>,
        path: &(impl AccessPath + ?Sized),
    ) -> Result<Option<Value>, AccessError> {
        let start = start.into().ok_or(AccessError::NullTarget)?;

        let mut current = start.clone();
        let mut getter = String::new();
        let mut segments = path.segments(self.config.get_delimiter()).peekable();

        while let Some(segment) = segments.next() {
            getter.clear();
            getter.push_str(GETTER_PREFIX);
            getter.push_str(segment);

            match self.call(&current, &getter, None)? {
                Some(value) if segments.peek().is_some() => current = value,
                Some(value) => return Ok(Some(value)),
                None => return Ok(None),
            }
        }

        log::debug!("No path found in `{}` for path \"{path}\".", start.type_name());
        Ok(None)
    }

    /// Follows `path` from `start` and returns the value at its end.
    ///
    /// For example `get_value(&foo, "Bar.Baz")` calls `getBar` on `foo`,
    /// then `getBaz` on its result.
    ///
    /// Returns `None` if `start` is `None`, or on anything
    /// [`try_get_value`](Self::try_get_value) would not return a value for.
    pub fn get_value<'a>(
        &self,
        start: impl Into<Option<&'a Value>>,
        path: &(impl AccessPath + ?Sized),
    ) -> Option<Value> {
        let start = start.into()?;
        match self.try_get_value(start, path) {
            Ok(value) => value,
            Err(err) => {
                log::log!(
                    self.config.get_failure_level(),
                    "No value found in `{}` for path \"{path}\": {err}",
                    start.type_name(),
                );
                None
            }
        }
    }

    /// [`get_value`](Self::get_value) followed by a downcast to `T`.
    ///
    /// Returns `None` as well if the value is not a `T`.
    #[inline]
    pub fn get_value_as<'a, T: Any>(
        &self,
        start: impl Into<Option<&'a Value>>,
        path: &(impl AccessPath + ?Sized),
    ) -> Option<Rc<T>> {
        self.get_value(start, path)?.downcast::<T>()
    }

    // -------------------------------------------------------------------------
    // set

    /// Calls the method `setter` on `object` and returns what it returned.
    ///
    /// With a `value`, the method must take one argument of exactly the
    /// value's type. Without one, it must take no argument.
    pub fn try_set_value<'a, 's, 'v>(
        &self,
        object: impl Into<Option<&'a Value>>,
        setter: impl Into<Option<&'s str>>,
        value: impl Into<Option<&'v Value>>,
    ) -> Result<Option<Value>, AccessError> {
        let object = object.into().ok_or(AccessError::NullTarget)?;
        let setter = setter.into().ok_or(AccessError::NullSetter)?;
        self.call(object, setter, value.into())
    }

    /// Calls the method `setter` on `object` and returns what it returned.
    ///
    /// For example `set_value(&foo, "setName", &name)`. Returns `None` for
    /// methods returning nothing, and on any failure.
    pub fn set_value<'a, 's, 'v>(
        &self,
        object: impl Into<Option<&'a Value>>,
        setter: impl Into<Option<&'s str>>,
        value: impl Into<Option<&'v Value>>,
    ) -> Option<Value> {
        let object = object.into()?;
        let setter = setter.into()?;
        match self.try_set_value(object, setter, value) {
            Ok(ret) => ret,
            Err(err) => {
                log::log!(
                    self.config.get_failure_level(),
                    "Exception with type `{}`, setter={setter}: {err}",
                    object.type_name(),
                );
                None
            }
        }
    }

    /// Builds a chain of objects below `start`.
    ///
    /// Calls `setter_names[0]` on `start` with `values[0]`, then
    /// `setter_names[1]` on `values[0]` with `values[1]`, and so on.
    /// Returns `start` once every setter succeeded.
    ///
    /// The lengths are checked before any setter runs. A failing setter
    /// stops the chain; the setters already called stay applied.
    pub fn try_set_values<'a>(
        &self,
        start: impl Into<Option<&'a Value>>,
        setter_names: Option<&[&str]>,
        values: Option<&[Value]>,
    ) -> Result<Value, AccessError> {
        let start = start.into().ok_or(AccessError::NullTarget)?;
        let (Some(setter_names), Some(values)) = (setter_names, values) else {
            return Err(AccessError::NullSequence);
        };
        if setter_names.len() != values.len() {
            return Err(AccessError::LengthMismatch {
                names: setter_names.len(),
                values: values.len(),
            });
        }

        let mut parent = start;
        for (setter, value) in setter_names.iter().zip(values) {
            self.call(parent, setter, Some(value))?;
            parent = value;
        }
        Ok(start.clone())
    }

    /// Builds a chain of objects below `start`, see
    /// [`try_set_values`](Self::try_set_values).
    ///
    /// Returns `start` on success, `None` if any input is `None` or any
    /// setter fails.
    pub fn set_values<'a>(
        &self,
        start: impl Into<Option<&'a Value>>,
        setter_names: Option<&[&str]>,
        values: Option<&[Value]>,
    ) -> Option<Value> {
        let start = start.into()?;
        let (setter_names, values) = (setter_names?, values?);
        match self.try_set_values(start, Some(setter_names), Some(values)) {
            Ok(root) => Some(root),
            Err(err) => {
                log::log!(
                    self.config.get_failure_level(),
                    "Parent object `{}`, setters={setter_names:?}: {err}",
                    start.type_name(),
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::string::String;
    use core::cell::{Cell, RefCell};

    use crate::Value;
    use crate::access::{AccessError, AccessorConfig, ObjectPath, PathAccessor};
    use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

    // -------------------------------------------------------------------------
    // Fixtures: Foo -> Bar -> Baz

    #[derive(Default)]
    struct Foo {
        bar_container: RefCell<Option<Rc<Bar>>>,
    }

    #[derive(Default)]
    struct Bar {
        baz_container: RefCell<Option<Rc<Baz>>>,
    }

    #[derive(Default)]
    struct Baz {
        amount: Cell<i32>,
        name: RefCell<Option<String>>,
    }

    impl GetTypeMeta for Foo {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::of::<Self>()
                .with_getter("BarContainer", |foo: &Foo| {
                    foo.bar_container.borrow().clone().map(Value::from)
                })
                .with_setter("setBarContainer", |foo: &Foo, bar: Rc<Bar>| {
                    *foo.bar_container.borrow_mut() = Some(bar);
                })
        }
    }

    impl GetTypeMeta for Bar {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::of::<Self>()
                .with_getter("BazContainer", |bar: &Bar| {
                    bar.baz_container.borrow().clone().map(Value::from)
                })
                .with_setter("setBazContainer", |bar: &Bar, baz: Rc<Baz>| {
                    *bar.baz_container.borrow_mut() = Some(baz);
                })
        }
    }

    impl GetTypeMeta for Baz {
        fn get_type_meta() -> TypeMeta {
            TypeMeta::of::<Self>()
                .with_getter("Amount", |baz: &Baz| Value::new(baz.amount.get()))
                .with_setter("setAmount", |baz: &Baz, amount: Rc<i32>| baz.amount.set(*amount))
                .with_getter("Name", |baz: &Baz| baz.name.borrow().clone().map(Value::new))
                .with_setter("setName", |baz: &Baz, name: Rc<String>| {
                    *baz.name.borrow_mut() = Some((*name).clone());
                })
        }
    }

    fn registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register::<Foo>();
        registry.register::<Bar>();
        registry.register::<Baz>();
        registry
    }

    fn beer() -> Rc<Baz> {
        let baz = Baz::default();
        baz.amount.set(100);
        *baz.name.borrow_mut() = Some(String::from("Beer"));
        Rc::new(baz)
    }

    fn text(value: &str) -> Value {
        Value::new(String::from(value))
    }

    // -------------------------------------------------------------------------
    // get_value

    #[test]
    fn get_from_nothing_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);

        assert!(accessor.get_value(None, "Forrest.Gump").is_none());
        assert_eq!(accessor.try_get_value(None, "Forrest.Gump").unwrap_err(), AccessError::NullTarget);
    }

    #[test]
    fn empty_path_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let foo = Value::new(Foo::default());

        assert!(accessor.get_value(&foo, "").is_none());
        assert!(matches!(accessor.try_get_value(&foo, ""), Ok(None)));
        assert!(matches!(accessor.try_get_value(&foo, "..."), Ok(None)));
    }

    #[test]
    fn unknown_getter_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let foo = Value::new(Foo::default());

        assert!(accessor.get_value(&foo, "GetDown").is_none());
        assert!(accessor.get_value(&foo, "Hullabaloo").is_none());
        assert!(matches!(
            accessor.try_get_value(&foo, "Hullabaloo"),
            Err(AccessError::MethodNotFound { type_name: "Foo", ref method, argument: None })
                if method == "getHullabaloo"
        ));

        let unregistered = Value::new(Cell::new(0_u8));
        assert!(accessor.get_value(&unregistered, "GetDown").is_none());
        assert!(matches!(
            accessor.try_get_value(&unregistered, "GetDown"),
            Err(AccessError::UnregisteredType(_))
        ));
    }

    #[test]
    fn deep_values() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);

        let foo = Rc::new(Foo::default());
        let bar = Rc::new(Bar::default());
        *bar.baz_container.borrow_mut() = Some(beer());
        let root = Value::from(Rc::clone(&foo));

        // Bar is not linked yet.
        assert!(accessor.get_value(&root, "BarContainer.BazContainer.Name").is_none());
        assert!(matches!(accessor.try_get_value(&root, "BarContainer.BazContainer.Name"), Ok(None)));

        *foo.bar_container.borrow_mut() = Some(bar);

        let name = accessor.get_value_as::<String>(&root, "BarContainer.BazContainer.Name");
        assert_eq!(name.as_deref().map(String::as_str), Some("Beer"));

        let amount = accessor.get_value_as::<i32>(&root, "BarContainer.BazContainer.Amount");
        assert_eq!(amount.as_deref(), Some(&100));

        assert!(accessor.get_value(&root, "BarContainer.BazContainer.NonExistent").is_none());
        assert!(accessor.get_value_as::<i32>(&root, "BarContainer.BazContainer.Name").is_none());
    }

    #[test]
    fn empty_leaf_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let baz = Value::new(Baz::default());

        assert!(matches!(accessor.try_get_value(&baz, "Name"), Ok(None)));
        let amount = accessor.get_value_as::<i32>(&baz, "Amount");
        assert_eq!(amount.as_deref(), Some(&0));
    }

    #[test]
    fn reusable_and_custom_paths() {
        let registry = registry();
        let foo = Foo::default();
        let bar = Bar::default();
        *bar.baz_container.borrow_mut() = Some(beer());
        *foo.bar_container.borrow_mut() = Some(Rc::new(bar));
        let root = Value::new(foo);

        let accessor = PathAccessor::new(&registry);
        let path = ObjectPath::parse("BarContainer.BazContainer.Amount", '.');
        for _ in 0..2 {
            assert_eq!(accessor.get_value_as::<i32>(&root, &path).as_deref(), Some(&100));
        }

        let slashed = PathAccessor::with_config(&registry, AccessorConfig::default().delimiter('/'));
        assert_eq!(
            slashed.get_value_as::<i32>(&root, "/BarContainer/BazContainer/Amount").as_deref(),
            Some(&100),
        );
        assert!(slashed.get_value(&root, "BarContainer.BazContainer.Amount").is_none());
        assert_eq!(slashed.config().get_delimiter(), '/');
    }

    // -------------------------------------------------------------------------
    // set_value

    #[test]
    fn set_without_target_or_setter_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let my_int = Value::new(42_i32);

        assert!(accessor.set_value(None, None, None).is_none());
        assert!(accessor.set_value(&my_int, None, None).is_none());
        assert!(accessor.set_value(&my_int, "skanks", None).is_none());

        assert_eq!(accessor.try_set_value(None, "toString", None).unwrap_err(), AccessError::NullTarget);
        assert_eq!(accessor.try_set_value(&my_int, None, None).unwrap_err(), AccessError::NullSetter);
    }

    #[test]
    fn set_value_returns_the_method_result() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let my_int = Value::new(42_i32);

        let printed = accessor.set_value(&my_int, "toString", None).unwrap();
        assert_eq!(printed.downcast_ref::<String>().unwrap(), "42");

        let parsed = accessor.set_value(&my_int, "parseInt", &text("84")).unwrap();
        assert_eq!(parsed.downcast_ref::<i32>(), Some(&84));

        // The one-argument overload needs an argument of exactly its type.
        assert!(accessor.set_value(&my_int, "parseInt", &Value::new(84_i64)).is_none());
        assert!(accessor.set_value(&my_int, "toString", &text("84")).is_none());
    }

    #[test]
    fn failed_invocation_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let my_int = Value::new(42_i32);

        assert!(accessor.set_value(&my_int, "parseInt", &text("Beer")).is_none());
        assert!(matches!(
            accessor.try_set_value(&my_int, "parseInt", &text("Beer")),
            Err(AccessError::Invocation { type_name: "i32", .. })
        ));
    }

    #[test]
    fn setters_return_none_and_mutate() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let baz = Value::new(Baz::default());

        assert!(matches!(accessor.try_set_value(&baz, "setAmount", &Value::new(7_i32)), Ok(None)));
        assert_eq!(baz.downcast_ref::<Baz>().unwrap().amount.get(), 7);

        assert!(accessor.set_value(&baz, "setName", &text("Beer")).is_none());
        assert_eq!(accessor.get_value_as::<String>(&baz, "Name").as_deref().map(String::as_str), Some("Beer"));
    }

    // -------------------------------------------------------------------------
    // set_values

    #[test]
    fn set_values_without_inputs_is_none() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);
        let foo = Value::new(Foo::default());

        assert!(accessor.set_values(None, None, None).is_none());
        assert!(accessor.set_values(&foo, None, None).is_none());
        assert!(accessor.set_values(&foo, Some(&["hello"]), None).is_none());

        assert_eq!(accessor.try_set_values(&foo, Some(&["hello"]), None).unwrap_err(), AccessError::NullSequence);
    }

    #[test]
    fn set_values_links_the_chain() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);

        let foo = Value::new(Foo::default());
        let bar = Value::new(Bar::default());
        let baz = Value::new(Baz::default());

        let root = accessor
            .set_values(
                &foo,
                Some(&["setBarContainer", "setBazContainer"]),
                Some(&[bar.clone(), baz.clone()]),
            )
            .unwrap();
        assert!(root.ptr_eq(&foo));
        assert!(accessor.get_value(&foo, "BarContainer").unwrap().ptr_eq(&bar));
        assert!(accessor.get_value(&foo, "BarContainer.BazContainer").unwrap().ptr_eq(&baz));

        let root = accessor
            .set_values(
                &foo,
                Some(&["setBarContainer", "setBazContainer", "setName"]),
                Some(&[bar.clone(), baz.clone(), text("Beer")]),
            )
            .unwrap();
        assert!(root.ptr_eq(&foo));
        let name = accessor.get_value_as::<String>(&root, "BarContainer.BazContainer.Name");
        assert_eq!(name.as_deref().map(String::as_str), Some("Beer"));
    }

    #[test]
    fn failed_setter_keeps_earlier_links() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);

        let foo = Value::new(Foo::default());
        let bar = Value::new(Bar::default());
        let baz = Value::new(Baz::default());

        let names = ["setBarContainer", "setBazContainer", "NotAMethod"];
        let values = [bar.clone(), baz.clone(), text("Beer")];
        assert!(accessor.set_values(&foo, Some(&names), Some(&values)).is_none());
        assert!(matches!(
            accessor.try_set_values(&foo, Some(&names), Some(&values)),
            Err(AccessError::MethodNotFound { type_name: "Baz", argument: Some("String"), .. })
        ));

        // No rollback.
        assert!(accessor.get_value(&foo, "BarContainer").unwrap().ptr_eq(&bar));
        assert!(accessor.get_value(&foo, "BarContainer.BazContainer").unwrap().ptr_eq(&baz));
    }

    #[test]
    fn length_mismatch_applies_nothing() {
        let registry = registry();
        let accessor = PathAccessor::new(&registry);

        let foo = Value::new(Foo::default());
        let bar = Value::new(Bar::default());

        let names = ["setBarContainer", "setBazContainer"];
        assert_eq!(
            accessor.try_set_values(&foo, Some(&names), Some(&[bar.clone()])).unwrap_err(),
            AccessError::LengthMismatch { names: 2, values: 1 },
        );
        assert!(accessor.set_values(&foo, Some(&names[..1]), Some(&[])).is_none());
        assert!(accessor.get_value(&foo, "BarContainer").is_none());
    }

    #[cfg(feature = "std")]
    mod logging {
        use alloc::string::{String, ToString};
        use alloc::vec::Vec;
        use core::cell::RefCell;

        use log::{Level, LevelFilter, Log, Metadata, Record};

        use crate::Value;
        use crate::access::{AccessorConfig, PathAccessor};
        use crate::registry::TypeRegistry;

        struct Capture;

        std::thread_local! {
            static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
        }

        impl Log for Capture {
            fn enabled(&self, _: &Metadata<'_>) -> bool {
                true
            }

            fn log(&self, record: &Record<'_>) {
                let entry = (record.level(), record.args().to_string());
                RECORDS.with_borrow_mut(|records| records.push(entry));
            }

            fn flush(&self) {}
        }

        static CAPTURE: Capture = Capture;

        /// Installs the logger once per process and clears this thread's records.
        fn capture() {
            let _ = log::set_logger(&CAPTURE);
            log::set_max_level(LevelFilter::Trace);
            RECORDS.with_borrow_mut(Vec::clear);
        }

        fn records() -> Vec<(Level, String)> {
            RECORDS.with_borrow_mut(core::mem::take)
        }

        #[test]
        fn failures_are_logged_with_context() {
            capture();
            let registry = TypeRegistry::new();
            let accessor = PathAccessor::new(&registry);
            let my_int = Value::new(42_i32);

            assert!(accessor.get_value(&my_int, "Hullabaloo").is_none());
            assert!(accessor.set_value(&my_int, "skanks", None).is_none());
            assert!(accessor.set_values(&my_int, Some(&["x"]), Some(&[Value::new(1_u8)])).is_none());

            assert_eq!(
                records(),
                [
                    (
                        Level::Debug,
                        String::from(
                            "No value found in `i32` for path \"Hullabaloo\": \
                             `i32` has no method `getHullabaloo` taking no argument"
                        ),
                    ),
                    (
                        Level::Debug,
                        String::from(
                            "Exception with type `i32`, setter=skanks: \
                             `i32` has no method `skanks` taking no argument"
                        ),
                    ),
                    (
                        Level::Debug,
                        String::from(
                            "Parent object `i32`, setters=[\"x\"]: \
                             `i32` has no method `x` taking `u8`"
                        ),
                    ),
                ]
            );
        }

        #[test]
        fn empty_path_is_logged_at_debug() {
            capture();
            let registry = TypeRegistry::new();
            let config = AccessorConfig::default().failure_level(Level::Warn);
            let accessor = PathAccessor::with_config(&registry, config);

            assert!(accessor.get_value(&Value::new(42_i32), "").is_none());
            assert_eq!(
                records(),
                [(Level::Debug, String::from("No path found in `i32` for path \"\"."))]
            );
        }

        #[test]
        fn failure_level_is_configurable() {
            capture();
            let registry = TypeRegistry::new();
            let config = AccessorConfig::default().failure_level(Level::Warn);
            let accessor = PathAccessor::with_config(&registry, config);
            let my_int = Value::new(42_i32);

            assert!(accessor.get_value(&my_int, "Nope").is_none());
            let beer = Value::new(String::from("Beer"));
            assert!(accessor.set_value(&my_int, "parseInt", &beer).is_none());

            let records = records();
            assert_eq!(records.len(), 2);
            assert!(records.iter().all(|(level, _)| *level == Level::Warn));
            assert!(records[0].1.starts_with("No value found in `i32` for path \"Nope\": "));
            assert!(records[1].1.starts_with("Exception with type `i32`, setter=parseInt: "));
        }

        #[test]
        fn absent_inputs_are_not_logged() {
            capture();
            let registry = TypeRegistry::new();
            let accessor = PathAccessor::new(&registry);
            let my_int = Value::new(42_i32);

            assert!(accessor.get_value(None, "Name").is_none());
            assert!(accessor.set_value(&my_int, None, None).is_none());
            assert!(accessor.set_values(&my_int, None, None).is_none());
            assert!(records().is_empty());
        }
    }

    #[cfg(feature = "auto_register")]
    mod auto_register {
        use alloc::rc::Rc;
        use core::any::TypeId;
        use core::cell::Cell;

        use crate::Value;
        use crate::access::PathAccessor;
        use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

        struct Volume(Cell<u8>);

        impl GetTypeMeta for Volume {
            fn get_type_meta() -> TypeMeta {
                TypeMeta::of::<Self>()
                    .with_getter("Level", |v: &Volume| Value::new(v.0.get()))
                    .with_setter("setLevel", |v: &Volume, level: Rc<u8>| v.0.set(*level))
            }
        }

        crate::impl_auto_register!(Volume);

        #[test]
        fn submitted_types_are_registered() {
            let mut registry = TypeRegistry::empty();
            assert!(registry.auto_register());
            assert!(registry.contains(TypeId::of::<Volume>()));
            assert!(registry.auto_register());

            let accessor = PathAccessor::new(&registry);
            let volume = Value::new(Volume(Cell::new(3)));
            accessor.set_value(&volume, "setLevel", &Value::new(9_u8));
            assert_eq!(accessor.get_value_as::<u8>(&volume, "Level").as_deref(), Some(&9));
        }
    }
}
