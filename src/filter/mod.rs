//! Group-based filtering of node collections.
//!
//! Nodes carry a free-form `group` naming the authentication method they
//! belong to. A filter keeps the nodes of the selected groups and, unless told
//! otherwise, the nodes of the `default` group, which hold shared elements
//! such as the CSRF token and the identifier field.

mod builder;
mod groups;

pub use builder::GroupFilterBuilder;
pub use groups::Groups;

use crate::node::UiNode;
use ahash::AHashSet;

/// A reusable group filter. Create one with [`GroupFilter::builder`].
#[derive(Debug, Clone, Default)]
pub struct GroupFilter {
    // `None` passes every node through.
    search: Option<AHashSet<String>>,
}

impl GroupFilter {
    pub fn builder() -> GroupFilterBuilder {
        GroupFilterBuilder::new()
    }

    /// A filter for the given groups that also keeps default-group nodes.
    pub fn new(groups: impl Into<Groups>) -> Self {
        Self::builder().with_groups(groups).build()
    }

    /// True when no groups were selected and every node is kept.
    pub fn is_passthrough(&self) -> bool {
        self.search.is_none()
    }

    /// The effective search set, sorted. Empty for a pass-through filter.
    pub fn search_groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = self
            .search
            .iter()
            .flatten()
            .map(String::as_str)
            .collect();
        groups.sort_unstable();
        groups
    }

    pub fn matches(&self, node: &UiNode) -> bool {
        match &self.search {
            Some(search) => search.contains(node.group.as_str()),
            None => true,
        }
    }

    /// Returns the matching nodes in their original order.
    pub fn apply<'n>(&self, nodes: &'n [UiNode]) -> Vec<&'n UiNode> {
        let kept: Vec<&UiNode> = nodes.iter().filter(|node| self.matches(node)).collect();
        tracing::trace!(total = nodes.len(), kept = kept.len(), "filtered nodes by group");
        kept
    }

    /// Owned variant of [`GroupFilter::apply`].
    pub fn retain(&self, mut nodes: Vec<UiNode>) -> Vec<UiNode> {
        nodes.retain(|node| self.matches(node));
        nodes
    }
}

/// Filters nodes by their groups.
///
/// Without any groups (none, an empty list or an empty string) every node is
/// returned. A string is split on commas. Nodes of the `default` group are
/// kept as well unless `exclude_default_group` is set.
///
/// # Example
///
/// ```rust
/// use authflow_ui::prelude::*;
///
/// let nodes: Vec<UiNode> = Vec::new();
/// let password_only = filter_by_groups(&nodes, "password", true);
/// let everything = filter_by_groups(&nodes, Groups::none(), false);
/// assert_eq!(password_only.len(), everything.len());
/// ```
pub fn filter_by_groups<'n>(
    nodes: &'n [UiNode],
    groups: impl Into<Groups>,
    exclude_default_group: bool,
) -> Vec<&'n UiNode> {
    GroupFilter::builder()
        .with_groups(groups)
        .include_default_group(!exclude_default_group)
        .build()
        .apply(nodes)
}
