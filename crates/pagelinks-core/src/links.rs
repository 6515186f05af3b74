//! Navigation link roles and the link set handed back to callers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a navigation link plays relative to the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRole {
    /// The page that was requested.
    #[serde(rename = "self")]
    SelfLink,
    /// The page after the current one.
    Next,
    /// The page before the current one.
    Previous,
    /// The page at offset 0.
    First,
    /// The page holding the final records.
    Last,
}

impl LinkRole {
    /// All roles, in the order links are listed.
    pub const ALL: [LinkRole; 5] = [
        LinkRole::SelfLink,
        LinkRole::Next,
        LinkRole::Previous,
        LinkRole::First,
        LinkRole::Last,
    ];

    /// Key used for this role in serialized link objects.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SelfLink => "self",
            Self::Next => "next",
            Self::Previous => "previous",
            Self::First => "first",
            Self::Last => "last",
        }
    }
}

impl fmt::Display for LinkRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation links for one page of a collection.
///
/// `next` and `previous` are absent when there is no such page; they are
/// skipped on serialization rather than written as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSet {
    /// Link to the requested page.
    #[serde(rename = "self")]
    pub current: String,
    /// Link to the next page (if exists).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    /// Link to the previous page (if exists).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    /// Link to the first page.
    pub first: String,
    /// Link to the last page.
    pub last: String,
}

impl LinkSet {
    /// URL for `role`, if that link is present.
    pub fn get(&self, role: LinkRole) -> Option<&str> {
        match role {
            LinkRole::SelfLink => Some(&self.current),
            LinkRole::Next => self.next.as_deref(),
            LinkRole::Previous => self.previous.as_deref(),
            LinkRole::First => Some(&self.first),
            LinkRole::Last => Some(&self.last),
        }
    }

    /// Whether a link for `role` is present.
    pub fn contains(&self, role: LinkRole) -> bool {
        self.get(role).is_some()
    }

    /// Present links in `self, next, previous, first, last` order.
    pub fn iter(&self) -> impl Iterator<Item = (LinkRole, &str)> {
        LinkRole::ALL
            .into_iter()
            .filter_map(move |role| self.get(role).map(|href| (role, href)))
    }

    /// Roles of the present links.
    pub fn roles(&self) -> Vec<LinkRole> {
        self.iter().map(|(role, _)| role).collect()
    }

    /// Number of present links.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Always false: `self`, `first` and `last` are never absent.
    pub fn is_empty(&self) -> bool {
        false
    }
}
