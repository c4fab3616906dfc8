//! Persisted invoker binding component.

use serde::{Deserialize, Serialize};

/// Inert data holder attached to a scene object to remember which component
/// and method the invoker panel last targeted.
///
/// Carries no behavior; it is serialized with the scene and the panel is
/// its only consumer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvokerBinding {
    /// Name of the inspected component type.
    pub component: String,
    /// Name of the last selected method, empty when none was chosen.
    #[serde(default)]
    pub selected_method: String,
}
