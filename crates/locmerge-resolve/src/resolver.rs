use locmerge_types::LocaleNode;

/// A per-leaf conflict-resolution policy.
///
/// `old` is the value at a path in the old tree and `new` the value at the
/// same path in the comparison tree. Either may be absent, `null`, a scalar,
/// or (on a shape mismatch) a whole mapping handed over as an opaque value.
/// Returning `None` deletes the leaf from the merged tree.
///
/// Implementations must be pure: the same inputs always produce the same
/// output and nothing is mutated. The trait is object-safe and `Send + Sync`
/// so a policy can be shared as `&dyn Resolver` across threads.
pub trait Resolver: Send + Sync {
    /// Name used in change reports and diagnostics.
    fn name(&self) -> &str;

    /// Resolve one leaf.
    fn resolve(&self, old: Option<&LocaleNode>, new: Option<&LocaleNode>) -> Option<LocaleNode>;
}

/// Collapse `null` into absence so policies only reason about one kind of
/// nothing.
pub fn present(value: Option<&LocaleNode>) -> Option<&LocaleNode> {
    value.filter(|node| !node.is_null())
}
