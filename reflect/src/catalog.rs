//! Method discovery and bounded, type-checked invocation.
//!
//! A [`MethodCatalog`] is rebuilt from the live target whenever the editor
//! selection changes and answers queries against the target's static method
//! table. All failure paths are soft: a missing target discovers nothing,
//! and an unresolvable invocation is a no-op returning `None` rather than a
//! propagating error.

use crate::method::{MethodInfo, ReflectMethods};
use crate::value::{ArgKind, ArgValue};

/// A queryable snapshot of a target's invocable methods.
///
/// Holds only the `'static` method table, so it stays cheap to rebuild on
/// every redraw and carries no borrow of the target itself.
#[derive(Debug, Clone, Copy)]
pub struct MethodCatalog {
    type_name: Option<&'static str>,
    methods: &'static [MethodInfo],
}

impl MethodCatalog {
    /// A catalog with no target.
    pub fn empty() -> Self {
        Self {
            type_name: None,
            methods: &[],
        }
    }

    /// Build a catalog from the current target, if any.
    ///
    /// A `None` target yields an empty catalog; the handle is never
    /// dereferenced in that case.
    pub fn discover(target: Option<&dyn ReflectMethods>) -> Self {
        match target {
            Some(target) => {
                let catalog = Self {
                    type_name: Some(target.type_name()),
                    methods: target.methods(),
                };
                log::debug!(
                    "discovered {} methods on {}",
                    catalog.methods.len(),
                    target.type_name()
                );
                catalog
            }
            None => Self::empty(),
        }
    }

    /// Type name of the inspected target, `None` when nothing is selected.
    pub fn type_name(&self) -> Option<&'static str> {
        self.type_name
    }

    /// All discovered methods, in declaration order.
    pub fn methods(&self) -> &'static [MethodInfo] {
        self.methods
    }

    /// Methods whose name contains `fragment` as a substring.
    ///
    /// Case-sensitive; an empty fragment returns everything.
    pub fn find_by_name(&self, fragment: &str) -> Vec<&'static MethodInfo> {
        self.methods
            .iter()
            .filter(|m| m.name.contains(fragment))
            .collect()
    }

    /// Methods whose parameter kind sequence equals `kinds` exactly,
    /// element-wise and in order.
    pub fn find_by_signature(&self, kinds: &[ArgKind]) -> Vec<&'static MethodInfo> {
        self.methods
            .iter()
            .filter(|m| m.signature_matches(kinds))
            .collect()
    }

    /// Resolve the unique method matching `name` and the exact kind
    /// sequence, or `None` when zero or several match.
    pub fn resolve(&self, name: &str, kinds: &[ArgKind]) -> Option<&'static MethodInfo> {
        let mut candidates = self
            .methods
            .iter()
            .filter(|m| m.name == name && m.signature_matches(kinds));
        let found = candidates.next()?;
        if candidates.next().is_some() {
            log::warn!("ambiguous invocation target {name:?}, skipping call");
            return None;
        }
        Some(found)
    }

    /// Invoke `name` on the target with the supplied arguments.
    ///
    /// The runtime kind of each argument is computed and the unique method
    /// with that exact name and kind sequence is called. When no method
    /// matches (wrong name, wrong arity, wrong kinds, or an ambiguity),
    /// nothing is called and `None` is returned.
    pub fn invoke(
        &self,
        target: &mut dyn ReflectMethods,
        name: &str,
        args: &[ArgValue],
    ) -> Option<ArgValue> {
        let kinds: Vec<ArgKind> = args.iter().map(ArgValue::kind).collect();
        let method = match self.resolve(name, &kinds) {
            Some(m) => m,
            None => {
                log::warn!(
                    "no method on {} matches {name}({kinds:?})",
                    target.type_name()
                );
                return None;
            }
        };
        log::debug!("invoking {}::{}", target.type_name(), method.name);
        target.call_method(name, args)
    }
}

impl Default for MethodCatalog {
    fn default() -> Self {
        Self::empty()
    }
}
