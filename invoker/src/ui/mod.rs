//! egui panel and widget strategies for the method invoker.

mod panel;
mod widgets;

pub use panel::{InvokeOutcome, InvokerPanel};
pub use widgets::{DefaultFn, EditFn, WidgetEntry, WidgetRegistry};
