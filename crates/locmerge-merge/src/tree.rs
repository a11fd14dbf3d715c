//! Recursive merge of one old locale tree against one new tree.
//!
//! The old tree is structurally authoritative: its keys are walked in order
//! and each leaf is handed to the [`Resolver`] together with the value at
//! the same path in the new tree. Keys only the new tree has are offered to
//! the resolver as additions and, when accepted, taken over wholesale.
//!
//! A mapping whose counterpart is missing, or is a leaf, is returned
//! unchanged: only an explicitly nullish resolution deletes anything.

use std::collections::{BTreeSet, HashMap};

use locmerge_resolve::{present, Resolver};
use locmerge_types::{LocaleNode, Mapping};

use crate::siblings::needs_sibling_sort;

/// One leaf transition observed while merging a tree.
#[derive(Clone, Debug, PartialEq)]
pub struct LeafChange {
    /// Dot-separated key path from the document root.
    pub path: String,
    pub old: Option<LocaleNode>,
    pub new: Option<LocaleNode>,
    pub resolved: Option<LocaleNode>,
}

/// The outcome of merging one tree.
#[derive(Clone, Debug, PartialEq)]
pub struct TreeMerge {
    /// `None` when the root itself resolved to nothing.
    pub merged: Option<LocaleNode>,
    /// Leaf transitions, in walk order.
    pub changes: Vec<LeafChange>,
}

/// Merges trees with one resolver.
pub struct TreeMerger<'a> {
    resolver: &'a dyn Resolver,
    tracked_keys: Option<&'a BTreeSet<String>>,
}

impl<'a> TreeMerger<'a> {
    pub fn new(resolver: &'a dyn Resolver) -> Self {
        Self {
            resolver,
            tracked_keys: None,
        }
    }

    /// Report leaves with these keys even when their value is unchanged.
    pub fn with_tracked_keys(mut self, keys: &'a BTreeSet<String>) -> Self {
        self.tracked_keys = Some(keys);
        self
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver
    }

    /// Merge `old` against its counterpart `new`.
    pub fn merge(&self, old: &LocaleNode, new: Option<&LocaleNode>) -> TreeMerge {
        let mut changes = Vec::new();
        let merged = self.merge_node(old, new, "", "", &mut changes);
        TreeMerge { merged, changes }
    }

    /// Resolve a document that has no old content at all.
    ///
    /// The whole new document is one leaf from the resolver's point of view,
    /// reported at the empty path.
    pub fn merge_absent(&self, new: Option<&LocaleNode>) -> TreeMerge {
        let mut changes = Vec::new();
        let merged = self.resolve_leaf(None, new, "", "", &mut changes);
        TreeMerge { merged, changes }
    }

    fn merge_node(
        &self,
        old: &LocaleNode,
        new: Option<&LocaleNode>,
        key: &str,
        path: &str,
        changes: &mut Vec<LeafChange>,
    ) -> Option<LocaleNode> {
        match (old, new) {
            (LocaleNode::Node(old_map), Some(LocaleNode::Node(new_map))) => {
                let merged = self.merge_mapping(old_map, new_map, path, changes);
                Some(LocaleNode::Node(merged))
            }
            (LocaleNode::Node(_), _) => Some(old.clone()),
            (LocaleNode::Leaf(_), _) => self.resolve_leaf(Some(old), new, key, path, changes),
        }
    }

    fn merge_mapping(
        &self,
        old: &Mapping,
        new: &Mapping,
        path: &str,
        changes: &mut Vec<LeafChange>,
    ) -> Mapping {
        let new_index: HashMap<&str, &LocaleNode> = new.iter().collect();
        let mut merged = Mapping::empty_like(old);

        for (key, old_child) in old.iter() {
            let child_path = join_path(path, key);
            let counterpart = new_index.get(key).copied();
            let child = self.merge_node(old_child, counterpart, key, &child_path, changes);
            if let Some(child) = child.filter(|c| !c.is_null()) {
                merged.push(key, child);
            }
        }

        for (key, new_child) in new.iter() {
            if old.contains_key(key) {
                continue;
            }
            let child_path = join_path(path, key);
            let added = self.resolve_leaf(None, Some(new_child), key, &child_path, changes);
            if let Some(added) = added.filter(|a| !a.is_null()) {
                merged.push(key, added);
            }
        }

        if !merged.is_list() && needs_sibling_sort(merged.keys()) {
            merged.sort_by_key();
        }
        merged
    }

    fn resolve_leaf(
        &self,
        old: Option<&LocaleNode>,
        new: Option<&LocaleNode>,
        key: &str,
        path: &str,
        changes: &mut Vec<LeafChange>,
    ) -> Option<LocaleNode> {
        let resolved = self.resolver.resolve(old, new);
        let changed = present(old) != present(resolved.as_ref());
        if changed || self.is_tracked(key) {
            changes.push(LeafChange {
                path: path.to_string(),
                old: old.cloned(),
                new: new.cloned(),
                resolved: resolved.clone(),
            });
        }
        resolved
    }

    fn is_tracked(&self, key: &str) -> bool {
        self.tracked_keys.is_some_and(|keys| keys.contains(key))
    }
}

/// Merge `old` against `new` with `resolver`, without tracked keys.
pub fn merge_tree(
    old: &LocaleNode,
    new: Option<&LocaleNode>,
    resolver: &dyn Resolver,
) -> TreeMerge {
    TreeMerger::new(resolver).merge(old, new)
}

fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{parent}.{key}")
    }
}
