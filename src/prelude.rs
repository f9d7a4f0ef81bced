//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! authflow-ui crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use authflow_ui::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let nodes = NodeCollection::from_file("path/to/login_flow.json")?;
//!
//! for node in filter_by_groups(&nodes, "password", false) {
//!     println!("{} -> {}", resolve_id(node), resolve_label(node));
//! }
//! # Ok(())
//! # }
//! ```

// Resolution and filtering
pub use crate::filter::{GroupFilter, GroupFilterBuilder, Groups, filter_by_groups};
pub use crate::resolve::{resolve_id, resolve_label};

// Node model
pub use crate::node::{
    AnchorAttributes, ImageAttributes, InputAttributes, NodeAttributes, NodeCollection,
    NodeType, ScriptAttributes, TextAttributes, UiContainer, UiNode, UiNodeMeta, UiText,
    UiTextType, UnknownAttributes, group,
};

// Error types
pub use crate::error::NodeError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
