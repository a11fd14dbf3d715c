//! Run settings: defaults, an optional TOML file, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use locmerge_merge::MergeOptions;
use locmerge_resolve::ResolverKind;
use serde::Deserialize;

use crate::cli::MergeArgs;

pub const DEFAULT_SOURCE: &str = "locales";
pub const DEFAULT_TARGET: &str = "newLocales";
pub const DEFAULT_OUTPUT: &str = "resultLocales";
pub const DEFAULT_LOG_FILE: &str = "log.yaml";

/// Settings read from `--config <path>`. Every field is optional.
///
/// ```toml
/// resolver = "combine"
/// source = "locales"
/// master_country = "gb"
/// tracked_keys = ["title"]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub source: Option<PathBuf>,
    pub target: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub resolver: Option<ResolverKind>,
    pub master_country: Option<String>,
    pub tracked_keys: Vec<String>,
    pub log_file: Option<PathBuf>,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::parse(&text)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Fully resolved settings for one `merge` invocation.
#[derive(Clone, Debug)]
pub struct RunSettings {
    pub source: PathBuf,
    pub target: PathBuf,
    pub output: PathBuf,
    pub options: MergeOptions,
    /// `None` when the report file is disabled.
    pub log_file: Option<PathBuf>,
    pub dry_run: bool,
}

impl RunSettings {
    /// Layer `args` over `config` over the built-in defaults.
    ///
    /// Tracked keys given on the command line replace the configured list.
    /// The resulting options are validated before any file is touched.
    pub fn resolve(config: CliConfig, args: MergeArgs) -> anyhow::Result<Self> {
        let Some(resolver) = args.resolver.or(config.resolver) else {
            let choices = ResolverKind::ALL.map(|k| k.name()).join(", ");
            bail!(
                "no resolver given; pass --resolver or set `resolver` in the config file \
                 (expected one of: {choices})"
            );
        };

        let tracked_keys = if args.tracked_keys.is_empty() {
            config.tracked_keys
        } else {
            args.tracked_keys
        };

        let mut options = MergeOptions::new(resolver).with_tracked_keys(tracked_keys);
        if let Some(master) = args.master_country.or(config.master_country) {
            options = options.with_master_country(master);
        }
        options.validate().context("invalid merge settings")?;

        let log_file = if args.no_log_file {
            None
        } else {
            Some(
                args.log_file
                    .or(config.log_file)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            )
        };

        Ok(Self {
            source: args.source.or(config.source).unwrap_or_else(|| DEFAULT_SOURCE.into()),
            target: args.target.or(config.target).unwrap_or_else(|| DEFAULT_TARGET.into()),
            output: args.output.or(config.output).unwrap_or_else(|| DEFAULT_OUTPUT.into()),
            options,
            log_file,
            dry_run: args.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(resolver: Option<ResolverKind>) -> MergeArgs {
        MergeArgs {
            resolver,
            ..MergeArgs::default()
        }
    }

    #[test]
    fn empty_config_parses_to_defaults() {
        assert_eq!(CliConfig::parse("").unwrap(), CliConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let config = CliConfig::parse(
            r#"
            source = "old"
            target = "new"
            output = "out"
            resolver = "combine"
            master_country = "gb"
            tracked_keys = ["title", "body"]
            log_file = "reports/changes.log"
            "#,
        )
        .unwrap();
        assert_eq!(config.resolver, Some(ResolverKind::Combine));
        assert_eq!(config.source, Some(PathBuf::from("old")));
        assert_eq!(config.tracked_keys, vec!["title", "body"]);
        assert_eq!(config.log_file, Some(PathBuf::from("reports/changes.log")));
    }

    #[test]
    fn unknown_fields_and_resolvers_are_rejected() {
        assert!(CliConfig::parse("resolvr = \"sync\"").is_err());
        assert!(CliConfig::parse("resolver = \"merge\"").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = CliConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locmerge.toml");
        fs::write(&path, "resolver = \"add\"\n").unwrap();
        assert_eq!(CliConfig::load(&path).unwrap().resolver, Some(ResolverKind::Add));
    }

    #[test]
    fn defaults_apply_without_config() {
        let settings =
            RunSettings::resolve(CliConfig::default(), args(Some(ResolverKind::Sync))).unwrap();
        assert_eq!(settings.source, PathBuf::from("locales"));
        assert_eq!(settings.target, PathBuf::from("newLocales"));
        assert_eq!(settings.output, PathBuf::from("resultLocales"));
        assert_eq!(settings.log_file, Some(PathBuf::from("log.yaml")));
        assert_eq!(settings.options.resolver, ResolverKind::Sync);
        assert_eq!(settings.options.master_country, None);
        assert!(!settings.dry_run);
    }

    #[test]
    fn flags_override_config() {
        let config = CliConfig {
            source: Some("cfg-src".into()),
            output: Some("cfg-out".into()),
            resolver: Some(ResolverKind::Add),
            master_country: Some("us".into()),
            tracked_keys: vec!["title".into()],
            ..CliConfig::default()
        };
        let flags = MergeArgs {
            resolver: Some(ResolverKind::Filter),
            output: Some("flag-out".into()),
            tracked_keys: vec!["body".into()],
            ..MergeArgs::default()
        };
        let settings = RunSettings::resolve(config, flags).unwrap();
        assert_eq!(settings.source, PathBuf::from("cfg-src"));
        assert_eq!(settings.output, PathBuf::from("flag-out"));
        assert_eq!(settings.options.resolver, ResolverKind::Filter);
        assert_eq!(settings.options.master_country.as_deref(), Some("us"));
        assert_eq!(
            settings.options.tracked_keys.iter().collect::<Vec<_>>(),
            vec!["body"]
        );
    }

    #[test]
    fn resolver_is_required_somewhere() {
        let err = RunSettings::resolve(CliConfig::default(), args(None)).unwrap_err();
        assert!(err.to_string().contains("no resolver given"));

        let config = CliConfig {
            resolver: Some(ResolverKind::Diff),
            ..CliConfig::default()
        };
        let settings = RunSettings::resolve(config, args(None)).unwrap();
        assert_eq!(settings.options.resolver, ResolverKind::Diff);
    }

    #[test]
    fn no_log_file_disables_report_file() {
        let config = CliConfig {
            log_file: Some("cfg.log".into()),
            ..CliConfig::default()
        };
        let flags = MergeArgs {
            resolver: Some(ResolverKind::Add),
            no_log_file: true,
            ..MergeArgs::default()
        };
        assert_eq!(RunSettings::resolve(config, flags).unwrap().log_file, None);
    }

    #[test]
    fn empty_master_country_is_rejected() {
        let flags = MergeArgs {
            resolver: Some(ResolverKind::Add),
            master_country: Some(String::new()),
            ..MergeArgs::default()
        };
        let err = RunSettings::resolve(CliConfig::default(), flags).unwrap_err();
        assert!(err.to_string().contains("invalid merge settings"));
    }
}
