use super::attributes::NodeAttributes;
use super::text::UiText;
use crate::error::NodeError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fs;
use std::ops::Deref;

/// Flow-supplied metadata of a node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiNodeMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<UiText>,
}

/// A single element of an authentication flow's UI description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiNode {
    /// Element kind as reported by the service, e.g. `"input"`.
    #[serde(default, rename = "type")]
    pub node_type: String,
    pub group: String,
    pub attributes: NodeAttributes,
    #[serde(default)]
    pub messages: Vec<UiText>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: UiNodeMeta,
}

// Some service versions send `"meta": null` instead of omitting the key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl UiNode {
    /// The generic label supplied by the flow, if any.
    pub fn meta_label(&self) -> Option<&str> {
        self.meta.label.as_ref().map(|label| label.text.as_str())
    }

    /// Human-readable label. See [`crate::resolve::resolve_label`].
    pub fn label(&self) -> String {
        crate::resolve::resolve_label(self)
    }

    /// Submission name for inputs, rendering id otherwise. See [`crate::resolve::resolve_id`].
    pub fn id(&self) -> String {
        crate::resolve::resolve_id(self)
    }
}

/// The `ui` object of a flow: the form target plus its nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiContainer {
    pub action: String,
    pub method: String,
    pub nodes: Vec<UiNode>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<UiText>,
}

/// An ordered collection of nodes loaded from a JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeCollection {
    nodes: Vec<UiNode>,
}

impl NodeCollection {
    pub fn new(nodes: Vec<UiNode>) -> Self {
        Self { nodes }
    }

    /// Parses a bare node array, a `ui` container or a whole flow object.
    pub fn from_json(json: &str) -> Result<Self, NodeError> {
        let parse_error = |e: serde_json::Error| NodeError::JsonParseError(e.to_string());

        // Pick the document shape first so decode errors point at the bad node.
        let document: Value = serde_json::from_str(json).map_err(parse_error)?;
        let nodes = match document {
            Value::Array(nodes) => {
                Vec::<UiNode>::deserialize(Value::Array(nodes)).map_err(parse_error)?
            }
            Value::Object(mut object) => match object.remove("ui") {
                Some(ui) => UiContainer::deserialize(ui).map_err(parse_error)?.nodes,
                None => {
                    UiContainer::deserialize(Value::Object(object))
                        .map_err(parse_error)?
                        .nodes
                }
            },
            other => UiContainer::deserialize(other).map_err(parse_error)?.nodes,
        };
        tracing::debug!(count = nodes.len(), "loaded ui nodes");
        Ok(Self { nodes })
    }

    /// Loads a node document from a file.
    pub fn from_file(path: &str) -> Result<Self, NodeError> {
        let content = fs::read_to_string(path).map_err(|e| NodeError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn nodes(&self) -> &[UiNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<UiNode> {
        self.nodes
    }
}

impl Deref for NodeCollection {
    type Target = [UiNode];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl From<Vec<UiNode>> for NodeCollection {
    fn from(nodes: Vec<UiNode>) -> Self {
        Self::new(nodes)
    }
}

impl From<UiContainer> for NodeCollection {
    fn from(container: UiContainer) -> Self {
        Self::new(container.nodes)
    }
}

impl IntoIterator for NodeCollection {
    type Item = UiNode;
    type IntoIter = std::vec::IntoIter<UiNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}
