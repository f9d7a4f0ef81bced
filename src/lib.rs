//! # authflow-ui - Authentication Flow UI Node Resolution
//!
//! Identity services describe their login, registration, recovery and settings
//! forms as a flat list of UI nodes. Each node carries a group (the
//! authentication method it belongs to), a typed attribute payload and some
//! localized metadata. **authflow-ui** turns such a node list into what a
//! rendering layer needs: a label and an identifier per node, and the subset
//! of nodes belonging to the methods being shown.
//!
//! ## Core Workflow
//!
//! 1.  **Load the nodes**: Decode a flow's `ui` object, a whole flow, or a bare
//!     node array with serde or [`NodeCollection::from_json`](node::NodeCollection::from_json).
//! 2.  **Select groups**: Use [`filter_by_groups`](filter::filter_by_groups) or a
//!     reusable [`GroupFilter`](filter::GroupFilter) to pick the nodes of one or
//!     more methods. Default-group nodes are kept unless excluded.
//! 3.  **Resolve metadata**: Call [`resolve_label`](resolve::resolve_label) and
//!     [`resolve_id`](resolve::resolve_id) on each node while rendering.
//!
//! Attribute payloads are a closed tagged union ([`NodeAttributes`](node::NodeAttributes)).
//! Payloads with a `node_type` this crate does not know are kept as
//! `NodeAttributes::Unknown` and resolve through the generic label and id
//! rules instead of failing.
//!
//! ## Quick Start
//!
//! ```rust
//! use authflow_ui::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let json = r#"{
//!         "action": "https://auth.example.com/self-service/login?flow=1",
//!         "method": "POST",
//!         "nodes": [
//!             {
//!                 "type": "input",
//!                 "group": "default",
//!                 "attributes": { "node_type": "input", "name": "identifier", "type": "text" },
//!                 "messages": [],
//!                 "meta": { "label": { "id": 1070004, "text": "ID", "type": "info" } }
//!             },
//!             {
//!                 "type": "input",
//!                 "group": "password",
//!                 "attributes": { "node_type": "input", "name": "password", "type": "password" },
//!                 "messages": [],
//!                 "meta": { "label": { "id": 1070001, "text": "Password", "type": "info" } }
//!             },
//!             {
//!                 "type": "input",
//!                 "group": "oidc",
//!                 "attributes": { "node_type": "input", "name": "provider", "type": "submit", "value": "github" },
//!                 "messages": [],
//!                 "meta": { "label": { "id": 1010002, "text": "Sign in with github", "type": "info" } }
//!             }
//!         ]
//!     }"#;
//!
//!     let nodes = NodeCollection::from_json(json)?;
//!     let password_form = filter_by_groups(&nodes, "password", false);
//!
//!     let fields: Vec<(String, String)> = password_form
//!         .iter()
//!         .map(|node| (resolve_id(node), resolve_label(node)))
//!         .collect();
//!
//!     assert_eq!(
//!         fields,
//!         vec![
//!             ("identifier".to_string(), "ID".to_string()),
//!             ("password".to_string(), "Password".to_string()),
//!         ]
//!     );
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod node;
pub mod prelude;
pub mod resolve;
