//! The method invoker panel.
//!
//! Renders the discovered method list of the inspected component as a set
//! of collapsible entries with per-parameter edit widgets and an Invoke
//! button. All state that must survive redraws (the filter string, the
//! per-entry expand flags, the argument cache, and the last invocation
//! outcome) lives on [`InvokerPanel`]; the target itself is borrowed fresh
//! on every redraw.

use std::fmt;

use bluebell_reflect::{ArgKind, ArgValue, MethodCatalog, MethodInfo, ReflectMethods};

use crate::cache::{ArgumentCache, ParamKey};
use crate::config::PanelConfig;

use super::widgets::WidgetRegistry;

/// Reborrow a loop-local `&mut Option<&mut dyn ReflectMethods>` with a fresh
/// lifetime per call; needed because NLL can't shrink the borrow of
/// `as_deref_mut` to a single loop iteration on its own.
fn reborrow_target<'a>(
    target: &'a mut Option<&mut dyn ReflectMethods>,
) -> Option<&'a mut dyn ReflectMethods> {
    match target {
        Some(r) => Some(&mut **r),
        None => None,
    }
}

/// Outcome of the most recent invocation attempt, shown in the status line.
#[derive(Debug, Clone, PartialEq)]
pub enum InvokeOutcome {
    /// The call happened and produced a value.
    Returned {
        method: &'static str,
        value: ArgValue,
    },
    /// The call happened; the return value was unit or discarded.
    Completed { method: &'static str },
    /// No method matched the collected argument kinds; nothing was called.
    NoMatch { method: &'static str },
}

impl fmt::Display for InvokeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeOutcome::Returned { method, value } => write!(f, "{method} -> {value}"),
            InvokeOutcome::Completed { method } => write!(f, "{method} invoked"),
            InvokeOutcome::NoMatch { method } => write!(f, "no matching method for {method}"),
        }
    }
}

/// Inspector panel listing and invoking the reflectable methods of the
/// selected component.
pub struct InvokerPanel {
    filter: String,
    /// Expand flag per method entry, index-aligned with the catalog.
    expanded: Vec<bool>,
    cache: ArgumentCache,
    widgets: WidgetRegistry,
    config: PanelConfig,
    last_outcome: Option<InvokeOutcome>,
}

impl InvokerPanel {
    pub fn new() -> Self {
        Self::with_config(PanelConfig::default())
    }

    pub fn with_config(config: PanelConfig) -> Self {
        Self {
            filter: String::new(),
            expanded: Vec::new(),
            cache: ArgumentCache::new(),
            widgets: WidgetRegistry::standard(),
            config,
            last_outcome: None,
        }
    }

    pub fn cache(&self) -> &ArgumentCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut ArgumentCache {
        &mut self.cache
    }

    pub fn last_outcome(&self) -> Option<&InvokeOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    pub fn toggle_expanded(&mut self, index: usize) {
        if let Some(flag) = self.expanded.get_mut(index) {
            *flag = !*flag;
        }
    }

    /// Render the panel for the current target.
    ///
    /// The target is re-borrowed every redraw; passing `None` renders the
    /// empty-selection placeholder and clears the cached state.
    pub fn show(&mut self, ui: &mut egui::Ui, mut target: Option<&mut dyn ReflectMethods>) {
        let catalog = MethodCatalog::discover(target.as_deref());
        self.sync(&catalog);

        let Some(type_name) = catalog.type_name() else {
            ui.weak("No target selected");
            return;
        };

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(type_name).strong());
            ui.weak(format!("{} methods", catalog.methods().len()));
        });
        ui.horizontal(|ui| {
            ui.label("Filter:");
            ui.text_edit_singleline(&mut self.filter);
        });
        ui.separator();

        let target_ref = &mut target;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (index, method) in catalog.methods().iter().enumerate() {
                    // Case-sensitive substring filter, same contract as
                    // MethodCatalog::find_by_name.
                    if !method.name.contains(self.filter.as_str()) {
                        continue;
                    }
                    self.show_entry(ui, &catalog, reborrow_target(target_ref), index, method);
                }
            });

        self.show_status(ui);
    }

    /// Rebind redraw-spanning state to the current catalog.
    ///
    /// Expand flags are keyed by entry index, so they stay valid only while
    /// the method list keeps its identity and count.
    fn sync(&mut self, catalog: &MethodCatalog) {
        let retargeted = self.cache.sync(catalog.type_name());
        if retargeted || self.expanded.len() != catalog.methods().len() {
            self.expanded = vec![false; catalog.methods().len()];
        }
        if retargeted {
            self.last_outcome = None;
            if let Some(type_name) = catalog.type_name() {
                log::debug!(
                    "invoker panel bound to {type_name} ({} methods)",
                    catalog.methods().len()
                );
            }
        }
    }

    fn show_entry(
        &mut self,
        ui: &mut egui::Ui,
        catalog: &MethodCatalog,
        target: Option<&mut dyn ReflectMethods>,
        index: usize,
        method: &'static MethodInfo,
    ) {
        let expanded = self.is_expanded(index);
        ui.horizontal(|ui| {
            let toggle = if expanded { "v" } else { ">" };
            if ui.small_button(toggle).clicked() {
                self.toggle_expanded(index);
            }
            let header = if self.config.show_signatures {
                method.signature()
            } else {
                method.name.to_string()
            };
            ui.label(egui::RichText::new(header).strong());
            if method.is_static {
                ui.weak("static");
            }
            if !method.is_public {
                ui.weak("private");
            }
        });

        if !expanded {
            return;
        }

        ui.indent(egui::Id::new(("invoker_entry", index)), |ui| {
            let mut blocked = false;
            for (position, param) in method.params.iter().enumerate() {
                ui.weak(param.type_name);
                match self.widgets.get(param.kind) {
                    Some(entry) => {
                        let slot = self
                            .cache
                            .slot(ParamKey::new(method.name, position), entry.default);
                        (entry.edit)(slot, param.name, ui);
                    }
                    None => {
                        blocked = true;
                        ui.horizontal(|ui| {
                            ui.label(param.name);
                            ui.weak("(no widget for this type)");
                        });
                    }
                }
            }

            // A parameter without a widget can never satisfy the exact
            // signature match, so the call is blocked up front instead of
            // attempted with a truncated argument list.
            let can_invoke = !blocked && target.is_some();
            if ui
                .add_enabled(can_invoke, egui::Button::new("Invoke"))
                .clicked()
            {
                if let Some(target) = target {
                    self.invoke_with_cached(catalog, target, method);
                }
            }
        });
        ui.separator();
    }

    fn show_status(&self, ui: &mut egui::Ui) {
        let Some(outcome) = &self.last_outcome else {
            return;
        };
        ui.separator();
        match outcome {
            InvokeOutcome::Returned { method, value } => {
                if self.config.show_return_value {
                    ui.label(format!("{method} -> {value}"));
                } else {
                    ui.label(format!("{method} invoked"));
                }
            }
            InvokeOutcome::Completed { method } => {
                ui.label(format!("{method} invoked"));
            }
            InvokeOutcome::NoMatch { method } => {
                ui.weak(format!("no matching method for {method}"));
            }
        }
    }

    /// Collect the cached argument values for `method` in declaration
    /// order, seeding untouched slots with their kind defaults.
    ///
    /// `None` when any parameter has no registered widget strategy; such a
    /// method cannot be invoked from the panel.
    pub fn collect_args(&mut self, method: &MethodInfo) -> Option<Vec<ArgValue>> {
        let mut args = Vec::with_capacity(method.params.len());
        for (position, param) in method.params.iter().enumerate() {
            let entry = self.widgets.get(param.kind)?;
            let slot = self
                .cache
                .slot(ParamKey::new(method.name, position), entry.default);
            args.push(slot.clone());
        }
        Some(args)
    }

    /// Invoke `method` on `target` with the cached argument values and
    /// record the outcome for the status line.
    pub fn invoke_with_cached(
        &mut self,
        catalog: &MethodCatalog,
        target: &mut dyn ReflectMethods,
        method: &'static MethodInfo,
    ) {
        let outcome = match self.collect_args(method) {
            None => InvokeOutcome::NoMatch {
                method: method.name,
            },
            Some(args) => {
                let kinds: Vec<ArgKind> = args.iter().map(ArgValue::kind).collect();
                if catalog.resolve(method.name, &kinds).is_none() {
                    InvokeOutcome::NoMatch {
                        method: method.name,
                    }
                } else {
                    match catalog.invoke(target, method.name, &args) {
                        Some(value) => InvokeOutcome::Returned {
                            method: method.name,
                            value,
                        },
                        None => InvokeOutcome::Completed {
                            method: method.name,
                        },
                    }
                }
            }
        };
        if self.config.log_invocations {
            log::info!("{outcome}");
        }
        self.last_outcome = Some(outcome);
    }
}

impl Default for InvokerPanel {
    fn default() -> Self {
        Self::new()
    }
}
