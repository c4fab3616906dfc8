//! Per-parameter argument cache.
//!
//! One map from parameter identity to its last-edited [`ArgValue`],
//! surviving redraws for as long as the same target is inspected. The cache
//! is bound to the method table it was populated against and clears itself
//! when that identity changes, so stale entries never alias onto the
//! parameters of an unrelated target.

use std::collections::HashMap;

use bluebell_reflect::ArgValue;

/// Stable identity of one parameter slot: method name + parameter position.
///
/// Method tables are `'static` and method names are unique within an impl
/// block, so this pair identifies a slot for the lifetime of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamKey {
    pub method: &'static str,
    pub index: usize,
}

impl ParamKey {
    pub fn new(method: &'static str, index: usize) -> Self {
        Self { method, index }
    }
}

/// Last-edited argument values, keyed by parameter identity.
#[derive(Debug, Default)]
pub struct ArgumentCache {
    values: HashMap<ParamKey, ArgValue>,
    /// Type name of the target the entries belong to.
    table: Option<&'static str>,
}

impl ArgumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebind the cache to the current target's method table.
    ///
    /// Clears all entries when the table identity differs from the one the
    /// cache was populated against (including deselection) and returns true
    /// in that case. A no-op when the target is unchanged.
    pub fn sync(&mut self, type_name: Option<&'static str>) -> bool {
        if self.table == type_name {
            return false;
        }
        if !self.values.is_empty() {
            log::debug!(
                "argument cache cleared ({} stale entries)",
                self.values.len()
            );
        }
        self.values.clear();
        self.table = type_name;
        true
    }

    /// Mutable access to a parameter slot, seeding it on first access.
    pub fn slot(&mut self, key: ParamKey, default: impl FnOnce() -> ArgValue) -> &mut ArgValue {
        self.values.entry(key).or_insert_with(default)
    }

    /// Read a slot without seeding it.
    pub fn get(&self, key: ParamKey) -> Option<&ArgValue> {
        self.values.get(&key)
    }

    /// Overwrite a slot.
    pub fn set(&mut self, key: ParamKey, value: ArgValue) {
        self.values.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_seeds_once() {
        let mut cache = ArgumentCache::new();
        let key = ParamKey::new("heal", 0);

        assert_eq!(*cache.slot(key, || ArgValue::Int(0)), ArgValue::Int(0));
        *cache.slot(key, || ArgValue::Int(0)) = ArgValue::Int(25);
        // Default is not re-applied once the slot exists.
        assert_eq!(*cache.slot(key, || ArgValue::Int(0)), ArgValue::Int(25));
    }

    #[test]
    fn reads_are_idempotent() {
        let mut cache = ArgumentCache::new();
        let key = ParamKey::new("rename", 0);
        cache.set(key, ArgValue::Text("hp".into()));

        assert_eq!(cache.get(key), Some(&ArgValue::Text("hp".into())));
        assert_eq!(cache.get(key), Some(&ArgValue::Text("hp".into())));
    }

    #[test]
    fn sync_clears_on_identity_change() {
        let mut cache = ArgumentCache::new();
        cache.sync(Some("Health"));
        cache.set(ParamKey::new("heal", 0), ArgValue::Int(25));

        // Same target: entries survive.
        cache.sync(Some("Health"));
        assert_eq!(cache.len(), 1);

        // Different target: entries cleared.
        cache.sync(Some("Mana"));
        assert!(cache.is_empty());
    }

    #[test]
    fn sync_clears_on_deselection() {
        let mut cache = ArgumentCache::new();
        cache.sync(Some("Health"));
        cache.set(ParamKey::new("heal", 0), ArgValue::Int(25));

        cache.sync(None);
        assert!(cache.is_empty());
    }

    #[test]
    fn keys_partition_by_method_and_position() {
        let mut cache = ArgumentCache::new();
        cache.set(ParamKey::new("m", 0), ArgValue::Int(1));
        cache.set(ParamKey::new("m", 1), ArgValue::Int(2));
        cache.set(ParamKey::new("n", 0), ArgValue::Int(3));

        assert_eq!(cache.get(ParamKey::new("m", 0)), Some(&ArgValue::Int(1)));
        assert_eq!(cache.get(ParamKey::new("m", 1)), Some(&ArgValue::Int(2)));
        assert_eq!(cache.get(ParamKey::new("n", 0)), Some(&ArgValue::Int(3)));
    }
}
