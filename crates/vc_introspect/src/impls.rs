//! Method tables of the primitive types.
//!
//! Registered by [`TypeRegistry::new`](crate::registry::TypeRegistry::new).
//!
//! | Type | Methods |
//! |---|---|
//! | every number, `bool`, `char`, `String` | `toString()` |
//! | `i8` `i16` `i32` `i64` | `parseByte` `parseShort` `parseInt` `parseLong` |
//! | `i128` `isize` | `parseI128` `parseIsize` |
//! | `u8 - u128` `usize` | `parseU8` ... `parseU128` `parseUsize` |
//! | `f32` `f64` | `parseFloat` `parseDouble` |
//! | `bool` | `parseBoolean` |
//! | `String` | `length()` `isEmpty()` `trim()` `toUpperCase()` `toLowerCase()` |
//!
//! Every `parse*` method takes one `String` and ignores its receiver.
//! A string that does not parse fails the call.

use alloc::rc::Rc;
use alloc::string::{String, ToString};

use crate::{Method, Value};
use crate::registry::{GetTypeMeta, TypeMeta, TypeRegistry};

macro_rules! impl_parsable {
    ($($ty:ty => $parse:literal),+ $(,)?) => {
        $(
            impl GetTypeMeta for $ty {
                fn get_type_meta() -> TypeMeta {
                    TypeMeta::of::<$ty>()
                        .with_method(to_string::<$ty>())
                        .with_setter($parse, |_: &$ty, text: Rc<String>| {
                            text.parse::<$ty>().map(Value::new)
                        })
                }
            }
        )+

        pub(crate) fn register_primitives(registry: &mut TypeRegistry) {
            $( registry.register::<$ty>(); )+
            registry.register::<char>();
            registry.register::<String>();
        }
    };
}

impl_parsable! {
    i8 => "parseByte",
    i16 => "parseShort",
    i32 => "parseInt",
    i64 => "parseLong",
    i128 => "parseI128",
    isize => "parseIsize",
    u8 => "parseU8",
    u16 => "parseU16",
    u32 => "parseU32",
    u64 => "parseU64",
    u128 => "parseU128",
    usize => "parseUsize",
    f32 => "parseFloat",
    f64 => "parseDouble",
    bool => "parseBoolean",
}

fn to_string<T: ToString + 'static>() -> Method {
    Method::nullary("toString", |this: &T| Value::new(this.to_string()))
}

impl GetTypeMeta for char {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<char>().with_method(to_string::<char>())
    }
}

impl GetTypeMeta for String {
    fn get_type_meta() -> TypeMeta {
        TypeMeta::of::<String>()
            .with_method(to_string::<String>())
            // Counts UTF-16 code units.
            .with_method(Method::nullary("length", |s: &String| {
                i32::try_from(s.encode_utf16().count()).map(Value::new)
            }))
            .with_method(Method::nullary("isEmpty", |s: &String| Value::new(s.is_empty())))
            .with_method(Method::nullary("trim", |s: &String| {
                Value::new(String::from(s.trim()))
            }))
            .with_method(Method::nullary("toUpperCase", |s: &String| {
                Value::new(s.to_uppercase())
            }))
            .with_method(Method::nullary("toLowerCase", |s: &String| {
                Value::new(s.to_lowercase())
            }))
    }
}
