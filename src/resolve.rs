//! Label and identifier resolution for UI nodes.
//!
//! Both operations are total: every node yields a string, possibly empty.

use crate::node::{NodeAttributes, UiNode};

/// Returns the human-readable label of a node.
///
/// Precedence, first match wins:
///
/// 1. Anchors use their own `title`.
/// 2. Images use the node's meta label.
/// 3. Inputs use their attribute `label` when it is non-empty.
/// 4. Everything else, including inputs without a label and unknown node
///    types, uses the node's meta label.
///
/// A missing meta label resolves to an empty string.
///
/// # Example
///
/// ```rust
/// use authflow_ui::prelude::*;
///
/// let node: UiNode = serde_json::from_str(r#"{
///     "type": "a",
///     "group": "default",
///     "attributes": {
///         "node_type": "a",
///         "id": "forgot",
///         "href": "/recovery",
///         "title": { "id": 1, "text": "Forgot password?", "type": "info" }
///     },
///     "meta": { "label": { "id": 2, "text": "ignored", "type": "info" } }
/// }"#)?;
///
/// assert_eq!(resolve_label(&node), "Forgot password?");
/// # Ok::<(), serde_json::Error>(())
/// ```
pub fn resolve_label(node: &UiNode) -> String {
    match &node.attributes {
        NodeAttributes::Anchor(anchor) => return anchor.title.text.clone(),
        NodeAttributes::Image(_) => return meta_label_or_empty(node),
        NodeAttributes::Input(input) => {
            if let Some(label) = input.label.as_ref().filter(|label| !label.is_empty()) {
                return label.text.clone();
            }
        }
        NodeAttributes::Text(_) | NodeAttributes::Script(_) | NodeAttributes::Unknown(_) => {}
    }
    meta_label_or_empty(node)
}

/// Returns the identifier of a node.
///
/// Inputs are identified by their submission `name`, every other element by
/// its rendering `id`. An unknown node type without an `id` yields an empty
/// string.
pub fn resolve_id(node: &UiNode) -> String {
    match &node.attributes {
        NodeAttributes::Input(input) => input.name.clone(),
        NodeAttributes::Anchor(anchor) => anchor.id.clone(),
        NodeAttributes::Image(image) => image.id.clone(),
        NodeAttributes::Text(text) => text.id.clone(),
        NodeAttributes::Script(script) => script.id.clone(),
        NodeAttributes::Unknown(unknown) => unknown.id.clone().unwrap_or_default(),
    }
}

fn meta_label_or_empty(node: &UiNode) -> String {
    node.meta_label().unwrap_or_default().to_string()
}
