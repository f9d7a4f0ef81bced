use itertools::Itertools;
use std::fmt;

/// The groups a caller asks for, normalized to a list.
///
/// A single string is treated as a comma-separated list. Lists are copied on
/// conversion, so the caller's own list is never touched by filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups(Vec<String>);

impl Groups {
    /// No group selection; filtering with it is a no-op.
    ///
    /// Prefer this over passing `None` to [`crate::filter::filter_by_groups`].
    pub fn none() -> Self {
        Self::default()
    }

    /// Splits a comma-separated list. An empty string selects nothing.
    pub fn parse(groups: &str) -> Self {
        if groups.is_empty() {
            return Self::none();
        }
        Self(groups.split(',').map(str::to_string).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn push(&mut self, group: impl Into<String>) {
        self.0.push(group.into());
    }
}

impl fmt::Display for Groups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

impl From<&str> for Groups {
    fn from(groups: &str) -> Self {
        Self::parse(groups)
    }
}

impl From<String> for Groups {
    fn from(groups: String) -> Self {
        Self::parse(&groups)
    }
}

impl From<&String> for Groups {
    fn from(groups: &String) -> Self {
        Self::parse(groups)
    }
}

impl From<Vec<String>> for Groups {
    fn from(groups: Vec<String>) -> Self {
        Self(groups)
    }
}

impl From<&Vec<String>> for Groups {
    fn from(groups: &Vec<String>) -> Self {
        Self(groups.clone())
    }
}

impl From<&[String]> for Groups {
    fn from(groups: &[String]) -> Self {
        Self(groups.to_vec())
    }
}

impl From<&[&str]> for Groups {
    fn from(groups: &[&str]) -> Self {
        Self(groups.iter().map(|g| g.to_string()).collect())
    }
}

impl From<Vec<&str>> for Groups {
    fn from(groups: Vec<&str>) -> Self {
        Self(groups.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Groups {
    fn from(groups: [&str; N]) -> Self {
        Self(groups.iter().map(|g| g.to_string()).collect())
    }
}

/// `None` selects nothing. A bare `None` cannot infer `G`; write
/// `None::<&str>` or use [`Groups::none`] instead.
impl<G: Into<Groups>> From<Option<G>> for Groups {
    fn from(groups: Option<G>) -> Self {
        groups.map_or_else(Groups::none, Into::into)
    }
}

impl FromIterator<String> for Groups {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
