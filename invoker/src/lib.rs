//! # Bluebell Invoker
//!
//! Editor panel that lists the reflectable methods of an inspected
//! component, renders per-parameter argument widgets, and invokes the
//! selected method immediately inside the editor process.
//!
//! ## Building blocks
//!
//! - [`InvokerPanel`] — the egui panel; owns all redraw-spanning state
//! - [`ArgumentCache`] — last-edited argument value per parameter slot
//! - [`WidgetRegistry`] — kind-keyed default/edit widget strategies
//! - [`InvokerBinding`] — inert persisted component remembering the last
//!   selection; no behavior
//! - [`PanelConfig`] — display options, loadable from `invoker.toml`
//!
//! The reflection substrate (`ReflectMethods`, `MethodCatalog`, tagged
//! argument values) lives in [`bluebell_reflect`].

mod binding;
mod cache;
mod config;
pub mod ui;

pub use binding::InvokerBinding;
pub use cache::{ArgumentCache, ParamKey};
pub use config::{ConfigError, PanelConfig, load_config};
pub use ui::{InvokeOutcome, InvokerPanel, WidgetEntry, WidgetRegistry};
