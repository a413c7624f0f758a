#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vc_introspect as introspect;
pub use vc_utils as utils;

pub use vc_introspect::access::PathAccessor;
pub use vc_introspect::registry::TypeRegistry;
pub use vc_introspect::{Value, impl_auto_register};
