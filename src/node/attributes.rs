use super::text::UiText;
use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The closed set of element kinds a node's attributes can describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    /// `<a>`
    Anchor,
    /// `<img>`
    Image,
    /// `<input>`
    Input,
    /// `<span>{text}</span>`
    Text,
    /// `<script>`
    Script,
}

impl NodeType {
    pub const ALL: [NodeType; 5] = [
        NodeType::Anchor,
        NodeType::Image,
        NodeType::Input,
        NodeType::Text,
        NodeType::Script,
    ];

    /// The `node_type` discriminator value used on the wire.
    pub fn as_tag(self) -> &'static str {
        match self {
            NodeType::Anchor => "a",
            NodeType::Image => "img",
            NodeType::Input => "input",
            NodeType::Text => "text",
            NodeType::Script => "script",
        }
    }

    /// Looks up a variant by its discriminator value. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_tag() == tag)
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnchorAttributes {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub href: String,
    pub title: UiText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAttributes {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputAttributes {
    /// Form field name, used as the key when the value is submitted.
    pub name: String,
    #[serde(default, rename = "type")]
    pub input_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default)]
    pub disabled: bool,
    /// Field-specific label that overrides the node's generic meta label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<UiText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onclick: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAttributes {
    #[serde(default)]
    pub id: String,
    pub text: UiText,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScriptAttributes {
    pub id: String,
    pub src: String,
    #[serde(rename = "async")]
    pub is_async: bool,
    pub referrerpolicy: String,
    pub crossorigin: String,
    pub integrity: String,
    #[serde(rename = "type")]
    pub script_type: String,
    pub nonce: String,
}

/// Attributes carrying a `node_type` outside the known set.
///
/// Kept instead of rejected so that documents from newer service versions
/// still load; such nodes resolve through the generic label and id path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownAttributes {
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A node's attribute payload, discriminated by its `node_type` tag.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeAttributes {
    Anchor(AnchorAttributes),
    Image(ImageAttributes),
    Input(InputAttributes),
    Text(TextAttributes),
    Script(ScriptAttributes),
    Unknown(UnknownAttributes),
}

impl NodeAttributes {
    /// Returns the variant, or `None` for an unrecognized tag.
    pub fn node_type(&self) -> Option<NodeType> {
        match self {
            NodeAttributes::Anchor(_) => Some(NodeType::Anchor),
            NodeAttributes::Image(_) => Some(NodeType::Image),
            NodeAttributes::Input(_) => Some(NodeType::Input),
            NodeAttributes::Text(_) => Some(NodeType::Text),
            NodeAttributes::Script(_) => Some(NodeType::Script),
            NodeAttributes::Unknown(_) => None,
        }
    }

    /// The raw discriminator value, including unrecognized ones.
    pub fn tag(&self) -> &str {
        match self {
            NodeAttributes::Unknown(unknown) => &unknown.node_type,
            known => known.node_type().map_or("", NodeType::as_tag),
        }
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self, NodeAttributes::Anchor(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, NodeAttributes::Image(_))
    }

    pub fn is_input(&self) -> bool {
        matches!(self, NodeAttributes::Input(_))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, NodeAttributes::Text(_))
    }

    pub fn is_script(&self) -> bool {
        matches!(self, NodeAttributes::Script(_))
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, NodeAttributes::Unknown(_))
    }

    pub fn as_anchor(&self) -> Option<&AnchorAttributes> {
        match self {
            NodeAttributes::Anchor(attrs) => Some(attrs),
            _ => None,
        }
    }

    pub fn as_input(&self) -> Option<&InputAttributes> {
        match self {
            NodeAttributes::Input(attrs) => Some(attrs),
            _ => None,
        }
    }
}

// Wire representations of the known variants. Unknown tags never reach these.
#[derive(Deserialize)]
#[serde(tag = "node_type")]
enum KnownAttributes {
    #[serde(rename = "a")]
    Anchor(AnchorAttributes),
    #[serde(rename = "img")]
    Image(ImageAttributes),
    #[serde(rename = "input")]
    Input(InputAttributes),
    #[serde(rename = "text")]
    Text(TextAttributes),
    #[serde(rename = "script")]
    Script(ScriptAttributes),
}

#[derive(Serialize)]
#[serde(tag = "node_type")]
enum KnownAttributesRef<'a> {
    #[serde(rename = "a")]
    Anchor(&'a AnchorAttributes),
    #[serde(rename = "img")]
    Image(&'a ImageAttributes),
    #[serde(rename = "input")]
    Input(&'a InputAttributes),
    #[serde(rename = "text")]
    Text(&'a TextAttributes),
    #[serde(rename = "script")]
    Script(&'a ScriptAttributes),
}

impl From<KnownAttributes> for NodeAttributes {
    fn from(known: KnownAttributes) -> Self {
        match known {
            KnownAttributes::Anchor(attrs) => NodeAttributes::Anchor(attrs),
            KnownAttributes::Image(attrs) => NodeAttributes::Image(attrs),
            KnownAttributes::Input(attrs) => NodeAttributes::Input(attrs),
            KnownAttributes::Text(attrs) => NodeAttributes::Text(attrs),
            KnownAttributes::Script(attrs) => NodeAttributes::Script(attrs),
        }
    }
}

impl<'de> Deserialize<'de> for NodeAttributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = Map::<String, Value>::deserialize(deserializer)?;
        let tag = match map.get("node_type") {
            Some(Value::String(tag)) => tag.clone(),
            Some(other) => {
                return Err(de::Error::custom(format!(
                    "node_type must be a string, found {}",
                    other
                )));
            }
            None => return Err(de::Error::missing_field("node_type")),
        };

        if NodeType::from_tag(&tag).is_some() {
            return KnownAttributes::deserialize(Value::Object(map))
                .map(NodeAttributes::from)
                .map_err(de::Error::custom);
        }

        tracing::trace!(node_type = %tag, "unrecognized node_type, keeping raw attributes");
        map.remove("node_type");
        let id = match map.remove("id") {
            Some(Value::String(id)) => Some(id),
            Some(other) => {
                map.insert("id".to_string(), other);
                None
            }
            None => None,
        };
        Ok(NodeAttributes::Unknown(UnknownAttributes {
            node_type: tag,
            id,
            extra: map,
        }))
    }
}

impl Serialize for NodeAttributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let known = match self {
            NodeAttributes::Anchor(attrs) => KnownAttributesRef::Anchor(attrs),
            NodeAttributes::Image(attrs) => KnownAttributesRef::Image(attrs),
            NodeAttributes::Input(attrs) => KnownAttributesRef::Input(attrs),
            NodeAttributes::Text(attrs) => KnownAttributesRef::Text(attrs),
            NodeAttributes::Script(attrs) => KnownAttributesRef::Script(attrs),
            NodeAttributes::Unknown(unknown) => return unknown.serialize(serializer),
        };
        known.serialize(serializer)
    }
}
