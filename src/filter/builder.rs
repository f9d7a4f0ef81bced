use super::GroupFilter;
use super::groups::Groups;
use crate::node::group;
use ahash::AHashSet;

/// A builder for configuring and creating a `GroupFilter`.
#[derive(Debug, Clone)]
pub struct GroupFilterBuilder {
    groups: Groups,
    include_default_group: bool,
}

impl Default for GroupFilterBuilder {
    fn default() -> Self {
        Self {
            groups: Groups::none(),
            include_default_group: true,
        }
    }
}

impl GroupFilterBuilder {
    /// Creates a builder with no groups that keeps default-group nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selected groups.
    ///
    /// Accepts a comma-separated string or a list of group names.
    pub fn with_groups(mut self, groups: impl Into<Groups>) -> Self {
        self.groups = groups.into();
        self
    }

    /// Adds a single group to the selection.
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.groups.push(group);
        self
    }

    /// Whether nodes of the `default` group are kept alongside the selection.
    ///
    /// Defaults to `true`. Has no effect when no groups are selected.
    pub fn include_default_group(mut self, include: bool) -> Self {
        self.include_default_group = include;
        self
    }

    /// Consumes the builder and returns a configured `GroupFilter`.
    pub fn build(self) -> GroupFilter {
        if self.groups.is_empty() {
            return GroupFilter { search: None };
        }

        let mut search: AHashSet<String> = self.groups.iter().map(str::to_string).collect();
        if self.include_default_group {
            search.insert(group::DEFAULT.to_string());
        }

        tracing::debug!(
            groups = %self.groups,
            include_default_group = self.include_default_group,
            "built group filter"
        );
        GroupFilter {
            search: Some(search),
        }
    }
}
