use std::collections::BTreeSet;

use locmerge_resolve::ResolverKind;
use serde::{Deserialize, Serialize};

use crate::error::{MergeError, MergeResult};

/// Country whose old/new diff drives `combine` when no master country is set.
pub const DEFAULT_REFERENCE_COUNTRY: &str = "us";

/// Behaviour switches for one merge run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeOptions {
    /// Policy applied at every leaf.
    pub resolver: ResolverKind,
    /// When set, every old country is compared against this new country
    /// instead of its namesake. Also the reference country for `combine`.
    pub master_country: Option<String>,
    /// Leaf keys that are always reported, changed or not.
    pub tracked_keys: BTreeSet<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            resolver: ResolverKind::Sync,
            master_country: None,
            tracked_keys: BTreeSet::new(),
        }
    }
}

impl MergeOptions {
    pub fn new(resolver: ResolverKind) -> Self {
        Self {
            resolver,
            ..Default::default()
        }
    }

    pub fn with_master_country(mut self, country: impl Into<String>) -> Self {
        self.master_country = Some(country.into());
        self
    }

    pub fn with_tracked_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tracked_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// The country whose diff `combine` propagates.
    pub fn reference_country(&self) -> &str {
        self.master_country
            .as_deref()
            .unwrap_or(DEFAULT_REFERENCE_COUNTRY)
    }

    /// Reject options that cannot drive a run.
    pub fn validate(&self) -> MergeResult<()> {
        if let Some(master) = &self.master_country {
            if master.trim().is_empty() {
                return Err(MergeError::Config("master country must not be empty".into()));
            }
        }
        if self.tracked_keys.iter().any(|k| k.is_empty()) {
            return Err(MergeError::Config("tracked keys must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = MergeOptions::default();
        assert_eq!(options.resolver, ResolverKind::Sync);
        assert!(options.master_country.is_none());
        assert!(options.tracked_keys.is_empty());
        assert_eq!(options.reference_country(), "us");
        assert!(options.validate().is_ok());
    }

    #[test]
    fn master_country_is_reference() {
        let options = MergeOptions::new(ResolverKind::Combine).with_master_country("gb");
        assert_eq!(options.reference_country(), "gb");
    }

    #[test]
    fn empty_master_country_rejected() {
        let options = MergeOptions::new(ResolverKind::Add).with_master_country(" ");
        assert!(matches!(options.validate(), Err(MergeError::Config(_))));
    }

    #[test]
    fn empty_tracked_key_rejected() {
        let options = MergeOptions::new(ResolverKind::Add).with_tracked_keys([""]);
        assert!(options.validate().is_err());
    }
}
