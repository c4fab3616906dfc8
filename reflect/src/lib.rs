//! # Bluebell Reflect
//!
//! Method-level reflection for Bluebell editor tooling.
//!
//! ## Core Types
//!
//! - [`ArgValue`] / [`ArgKind`] — tagged values over the supported argument
//!   kinds (text, int, float, bool, object handle)
//! - [`ObjectId`] — opaque nullable handle to an engine object
//! - [`MethodInfo`] / [`ParamInfo`] — per-method reflection metadata
//! - [`ReflectMethods`] — trait exposing a type's method table and a
//!   type-checked dynamic dispatch entry point
//! - [`MethodCatalog`] — discovery, name/signature queries, and invocation
//!
//! Use `#[reflect_methods]` on an inherent `impl` block to generate the
//! [`ReflectMethods`] implementation.

pub mod catalog;
pub mod method;
pub mod value;

pub use catalog::MethodCatalog;
pub use method::{MethodInfo, ParamInfo, ReflectMethods};
pub use reflect_macro::reflect_methods;
pub use value::{ArgKind, ArgValue, ObjectId};
