//! Per-kind widget strategies.
//!
//! A [`WidgetRegistry`] maps each argument kind to a default-value function
//! and an edit function rendering the egui control for that kind. The table
//! is built once and immutable afterwards. [`ArgKind::Opaque`] has no
//! entry; that absence is how unsupported parameter types surface in the
//! panel.

use std::collections::HashMap;

use bluebell_reflect::{ArgKind, ArgValue, ObjectId};

/// Produces the value a freshly-seen parameter slot starts at.
pub type DefaultFn = fn() -> ArgValue;

/// Renders a labeled edit control for a cached value.
///
/// Applied on every redraw; leaves the value untouched unless the user
/// interacted this frame.
pub type EditFn = fn(&mut ArgValue, &str, &mut egui::Ui);

/// Strategy for one argument kind.
#[derive(Clone, Copy)]
pub struct WidgetEntry {
    pub default: DefaultFn,
    pub edit: EditFn,
}

/// Kind-keyed widget strategy table.
pub struct WidgetRegistry {
    entries: HashMap<ArgKind, WidgetEntry>,
}

impl WidgetRegistry {
    /// The standard table covering every supported kind.
    pub fn standard() -> Self {
        let mut registry = Self {
            entries: HashMap::new(),
        };
        registry.register(
            ArgKind::Text,
            WidgetEntry {
                default: || ArgValue::Text(String::new()),
                edit: edit_text,
            },
        );
        registry.register(
            ArgKind::Int,
            WidgetEntry {
                default: || ArgValue::Int(0),
                edit: edit_int,
            },
        );
        registry.register(
            ArgKind::Float,
            WidgetEntry {
                default: || ArgValue::Float(0.0),
                edit: edit_float,
            },
        );
        registry.register(
            ArgKind::Bool,
            WidgetEntry {
                default: || ArgValue::Bool(false),
                edit: edit_bool,
            },
        );
        registry.register(
            ArgKind::Handle,
            WidgetEntry {
                default: || ArgValue::Handle(ObjectId::NULL),
                edit: edit_handle,
            },
        );
        registry
    }

    /// Register (or replace) the strategy for a kind. One strategy per kind.
    pub fn register(&mut self, kind: ArgKind, entry: WidgetEntry) {
        self.entries.insert(kind, entry);
    }

    pub fn get(&self, kind: ArgKind) -> Option<&WidgetEntry> {
        self.entries.get(&kind)
    }

    pub fn supports(&self, kind: ArgKind) -> bool {
        self.entries.contains_key(&kind)
    }
}

impl Default for WidgetRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

fn edit_text(value: &mut ArgValue, name: &str, ui: &mut egui::Ui) {
    if let ArgValue::Text(text) = value {
        ui.horizontal(|ui| {
            ui.label(name);
            ui.text_edit_singleline(text);
        });
    }
}

fn edit_int(value: &mut ArgValue, name: &str, ui: &mut egui::Ui) {
    if let ArgValue::Int(v) = value {
        ui.horizontal(|ui| {
            ui.label(name);
            ui.add(egui::DragValue::new(v));
        });
    }
}

fn edit_float(value: &mut ArgValue, name: &str, ui: &mut egui::Ui) {
    if let ArgValue::Float(v) = value {
        ui.horizontal(|ui| {
            ui.label(name);
            ui.add(egui::DragValue::new(v).speed(0.01));
        });
    }
}

fn edit_bool(value: &mut ArgValue, name: &str, ui: &mut egui::Ui) {
    if let ArgValue::Bool(v) = value {
        ui.horizontal(|ui| {
            ui.label(name);
            ui.checkbox(v, "");
        });
    }
}

fn edit_handle(value: &mut ArgValue, name: &str, ui: &mut egui::Ui) {
    if let ArgValue::Handle(id) = value {
        ui.horizontal(|ui| {
            ui.label(name);
            if id.is_null() {
                ui.weak("null");
                if ui.small_button("set").clicked() {
                    *id = ObjectId(0);
                }
            } else {
                let mut raw = id.0;
                if ui.add(egui::DragValue::new(&mut raw).prefix("id: ")).changed() {
                    id.0 = raw;
                }
                if ui.small_button("clear").clicked() {
                    *id = ObjectId::NULL;
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_covers_supported_kinds() {
        let registry = WidgetRegistry::standard();
        for kind in [
            ArgKind::Text,
            ArgKind::Int,
            ArgKind::Float,
            ArgKind::Bool,
            ArgKind::Handle,
        ] {
            assert!(registry.supports(kind), "missing strategy for {kind:?}");
        }
        assert!(!registry.supports(ArgKind::Opaque));
    }

    #[test]
    fn defaults_agree_with_kind_defaults() {
        let registry = WidgetRegistry::standard();
        for kind in [
            ArgKind::Text,
            ArgKind::Int,
            ArgKind::Float,
            ArgKind::Bool,
            ArgKind::Handle,
        ] {
            let entry = registry.get(kind).unwrap();
            assert_eq!(Some((entry.default)()), kind.default_value());
        }
    }
}
