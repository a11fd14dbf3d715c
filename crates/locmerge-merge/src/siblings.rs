//! Sibling ordering for key families that are ordered in source data.
//!
//! Challenge tables and index-keyed maps are reviewed by humans in key
//! order. When any key at one level belongs to such a family, the whole
//! level is sorted lexicographically after merging.

use std::sync::LazyLock;

use regex::RegexSet;

/// Patterns are searched, not anchored, unless they anchor themselves.
/// Integer keys are ASCII digits only.
const SORTED_KEY_PATTERNS: [&str; 4] = [
    r"challenge_",
    r"dailyChallenge_",
    r"weeklyChallenge",
    r"^[0-9]+$",
];

static SORTED_KEYS: LazyLock<RegexSet> = LazyLock::new(|| {
    RegexSet::new(SORTED_KEY_PATTERNS).expect("sorted key patterns are valid")
});

/// Returns `true` if `key` belongs to a sorted key family.
pub fn is_sorted_family(key: &str) -> bool {
    SORTED_KEYS.is_match(key)
}

/// Returns `true` if any of `keys` belongs to a sorted key family.
pub fn needs_sibling_sort<'a>(mut keys: impl Iterator<Item = &'a str>) -> bool {
    keys.any(is_sorted_family)
}
