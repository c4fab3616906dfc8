//! Method metadata and the reflection trait.
//!
//! The [`ReflectMethods`] trait provides method-level introspection for a
//! component type: a static table of [`MethodInfo`] descriptors plus a
//! type-checked dynamic dispatch entry point.
//!
//! Use `#[reflect_methods]` from [`reflect_macro`] on an inherent `impl`
//! block to auto-implement the trait.

use crate::value::{ArgKind, ArgValue};

/// Metadata for one parameter of a reflected method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamInfo {
    /// Parameter name as written in the signature.
    pub name: &'static str,
    /// Full Rust type name (`core::any::type_name` of the declared type).
    pub type_name: &'static str,
    /// Kind tag. [`ArgKind::Opaque`] for types outside the supported set.
    pub kind: ArgKind,
}

/// Metadata describing one invocable method.
///
/// Produced by the `#[reflect_methods]` macro; one table per annotated impl
/// block, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodInfo {
    /// Method name.
    pub name: &'static str,
    /// Ordered parameter list, excluding the receiver.
    pub params: Vec<ParamInfo>,
    /// Return kind when the return type is in the supported set; `None` for
    /// unit and unsupported return types (the call still happens, the value
    /// is discarded).
    pub ret: Option<ArgKind>,
    /// Full Rust name of the declared return type; `"()"` for unit.
    pub ret_type_name: &'static str,
    /// True for associated functions (no receiver).
    pub is_static: bool,
    /// True for `pub` methods.
    pub is_public: bool,
}

impl MethodInfo {
    pub fn has_params(&self) -> bool {
        !self.params.is_empty()
    }

    /// Kind tags of the parameters, in declaration order.
    pub fn param_kinds(&self) -> impl Iterator<Item = ArgKind> + '_ {
        self.params.iter().map(|p| p.kind)
    }

    /// True if any parameter type is outside the supported set.
    ///
    /// Such a method is listed by discovery but can never be resolved: an
    /// opaque tag does not identify a concrete type, so it matches no
    /// signature.
    pub fn has_opaque_params(&self) -> bool {
        self.params.iter().any(|p| p.kind == ArgKind::Opaque)
    }

    /// Exact, order-sensitive kind-sequence equality.
    pub fn signature_matches(&self, kinds: &[ArgKind]) -> bool {
        !self.has_opaque_params()
            && self.params.len() == kinds.len()
            && self.param_kinds().zip(kinds.iter().copied()).all(|(a, b)| a == b)
    }

    /// Human-readable signature, e.g. `heal(amount: i64) -> i64`.
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.type_name))
            .collect();
        if self.ret_type_name == "()" {
            format!("{}({})", self.name, params.join(", "))
        } else {
            format!("{}({}) -> {}", self.name, params.join(", "), self.ret_type_name)
        }
    }
}

/// Trait for types with reflectable methods.
///
/// The `#[reflect_methods]` attribute macro generates this from an inherent
/// `impl` block. Every non-generic, non-async `fn` in the block is listed,
/// public and private, instance and associated. This gives declared-only
/// semantics: only the annotated block contributes, nothing is inherited
/// from anywhere else.
///
/// # Example
///
/// ```ignore
/// #[reflect_methods]
/// impl Health {
///     pub fn heal(&mut self, amount: i64) -> i64 {
///         self.current = (self.current + amount).min(self.max);
///         self.current
///     }
/// }
/// ```
pub trait ReflectMethods {
    /// The type name as a static string (e.g. `"Health"`).
    fn type_name(&self) -> &'static str;

    /// The method table, in declaration order.
    fn methods(&self) -> &'static [MethodInfo];

    /// Invoke a method by name with exact kind matching.
    ///
    /// Returns the wrapped result for supported return types, `None` after
    /// a unit/unsupported-return call, and `None` without calling anything
    /// when the name or the argument kind sequence matches no method.
    fn call_method(&mut self, name: &str, args: &[ArgValue]) -> Option<ArgValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(kinds: &[ArgKind]) -> MethodInfo {
        MethodInfo {
            name: "m",
            params: kinds
                .iter()
                .map(|&kind| ParamInfo {
                    name: "p",
                    type_name: "t",
                    kind,
                })
                .collect(),
            ret: None,
            ret_type_name: "()",
            is_static: false,
            is_public: true,
        }
    }

    #[test]
    fn signature_match_is_exact_and_ordered() {
        let m = info(&[ArgKind::Int, ArgKind::Text]);
        assert!(m.signature_matches(&[ArgKind::Int, ArgKind::Text]));
        assert!(!m.signature_matches(&[ArgKind::Text, ArgKind::Int]));
        assert!(!m.signature_matches(&[ArgKind::Int]));
        assert!(!m.signature_matches(&[]));
    }

    #[test]
    fn opaque_params_match_nothing() {
        let m = info(&[ArgKind::Opaque]);
        assert!(m.has_opaque_params());
        assert!(!m.signature_matches(&[ArgKind::Opaque]));
    }

    #[test]
    fn signature_rendering() {
        let mut m = info(&[ArgKind::Int]);
        assert_eq!(m.signature(), "m(p: t)");
        m.ret_type_name = "i64";
        assert_eq!(m.signature(), "m(p: t) -> i64");
    }
}
