//! The fixed catalogue of named resolvers.
//!
//! | name    | rule                                                            |
//! |---------|-----------------------------------------------------------------|
//! | add     | keep old; adopt new only where old is nullish                   |
//! | filter  | keep old where new is present; drop where new is nullish        |
//! | sync    | drop where new is nullish; adopt new where old is nullish       |
//! | diff    | emit new where it is present and differs from old; else drop    |
//! | combine | prefer new, fall back to old                                    |

use std::fmt;
use std::str::FromStr;

use locmerge_types::LocaleNode;
use serde::{Deserialize, Serialize};

use crate::error::ResolveError;
use crate::resolver::{present, Resolver};

/// One of the built-in resolver policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolverKind {
    Add,
    Filter,
    Sync,
    Diff,
    Combine,
}

impl ResolverKind {
    /// Every catalogue entry, in presentation order.
    pub const ALL: [ResolverKind; 5] = [
        ResolverKind::Add,
        ResolverKind::Filter,
        ResolverKind::Sync,
        ResolverKind::Diff,
        ResolverKind::Combine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Filter => "filter",
            Self::Sync => "sync",
            Self::Diff => "diff",
            Self::Combine => "combine",
        }
    }

    /// One-line description shown to users choosing a resolver.
    pub fn description(self) -> &'static str {
        match self {
            Self::Add => "Add new entries missing in source folder and apparent in target folder",
            Self::Filter => "Filter out entries that are deleted or null in target folder",
            Self::Sync => "Add missing entries and remove deleted and only deleted entries",
            Self::Diff => "Put out only differences between source and target",
            Self::Combine => {
                "Compare the reference locales of source and target and replace changed \
                 entries in every country with the target reference entry"
            }
        }
    }

    /// Apply this policy to one leaf.
    pub fn apply(self, old: Option<&LocaleNode>, new: Option<&LocaleNode>) -> Option<LocaleNode> {
        let old = present(old);
        let new = present(new);
        match self {
            Self::Add => old.or(new).cloned(),
            Self::Filter => new.and(old).cloned(),
            Self::Sync => new.map(|new| old.unwrap_or(new).clone()),
            Self::Diff => match new {
                Some(new) if old != Some(new) => Some(new.clone()),
                _ => None,
            },
            Self::Combine => new.or(old).cloned(),
        }
    }

    fn choices() -> String {
        Self::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Resolver for ResolverKind {
    fn name(&self) -> &str {
        ResolverKind::name(*self)
    }

    fn resolve(&self, old: Option<&LocaleNode>, new: Option<&LocaleNode>) -> Option<LocaleNode> {
        self.apply(old, new)
    }
}

impl fmt::Display for ResolverKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResolverKind {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ResolveError::UnknownResolver {
                name: s.to_string(),
                choices: Self::choices(),
            })
    }
}
