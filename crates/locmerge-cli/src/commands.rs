use anyhow::Context;
use colored::Colorize;
use locmerge_fs::{load, save, write_report};
use locmerge_merge::{merge_locales, ChangeLog};
use locmerge_resolve::ResolverKind;
use serde::Serialize;
use tracing::debug;

use crate::cli::*;
use crate::config::{CliConfig, RunSettings};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Merge(args) => {
            let config = match &cli.config {
                Some(path) => {
                    debug!(path = %path.display(), "loading config file");
                    CliConfig::load(path)?
                }
                None => CliConfig::default(),
            };
            cmd_merge(&RunSettings::resolve(config, args)?, cli.format)
        }
        Command::Resolvers => cmd_resolvers(cli.format),
    }
}

fn cmd_merge(settings: &RunSettings, format: OutputFormat) -> anyhow::Result<()> {
    let loaded = load(&settings.source, &settings.target).with_context(|| {
        format!(
            "failed to load locales from {} and {}",
            settings.source.display(),
            settings.target.display()
        )
    })?;
    debug!(
        old_countries = loaded.old.len(),
        new_countries = loaded.new.len(),
        "locales loaded"
    );
    let outcome = merge_locales(&loaded.old, &loaded.new, &settings.options)?;

    print_report(&outcome.log, format)?;
    if let Some(path) = &settings.log_file {
        write_report(&outcome.log, path)
            .with_context(|| format!("failed to write change report: {}", path.display()))?;
    }

    let text = format == OutputFormat::Text;
    if settings.dry_run {
        if text {
            println!(
                "{} Dry run: {} countries merged with {}, nothing written.",
                "✓".green().bold(),
                outcome.result.len(),
                settings.options.resolver.to_string().cyan()
            );
        }
        return Ok(());
    }

    let summary = save(&outcome.result, &settings.output).with_context(|| {
        format!(
            "failed to write merged locales to {}",
            settings.output.display()
        )
    })?;
    if text {
        println!(
            "{} Merged {} countries ({} files) with {} into {}",
            "✓".green().bold(),
            summary.countries,
            summary.files_written,
            settings.options.resolver.to_string().cyan(),
            settings.output.display().to_string().bold()
        );
        if summary.files_skipped > 0 {
            println!(
                "  {} {} files without content skipped",
                "!".yellow(),
                summary.files_skipped
            );
        }
        println!("  Changes: {}", outcome.log.len().to_string().yellow());
    }
    Ok(())
}

fn print_report(log: &ChangeLog, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{log}"),
        OutputFormat::Json => println!("{}", log.to_json_pretty()?),
    }
    Ok(())
}

#[derive(Serialize)]
struct ResolverInfo {
    name: &'static str,
    description: &'static str,
}

fn resolver_catalogue() -> Vec<ResolverInfo> {
    ResolverKind::ALL
        .into_iter()
        .map(|kind| ResolverInfo {
            name: kind.name(),
            description: kind.description(),
        })
        .collect()
}

fn cmd_resolvers(format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for info in resolver_catalogue() {
                let name = format!("{:<8}", info.name);
                println!("  {} {}", name.bold(), info.description);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&resolver_catalogue())?)
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locmerge_merge::MergeOptions;
    use std::fs;
    use std::path::Path;

    fn write(root: &Path, rel: &str, contents: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    fn settings(root: &Path, resolver: ResolverKind, dry_run: bool) -> RunSettings {
        RunSettings {
            source: root.join("locales"),
            target: root.join("newLocales"),
            output: root.join("resultLocales"),
            options: MergeOptions::new(resolver),
            log_file: Some(root.join("log.yaml")),
            dry_run,
        }
    }

    #[test]
    fn catalogue_lists_every_resolver() {
        let names: Vec<_> = resolver_catalogue().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["add", "filter", "sync", "diff", "combine"]);
    }

    #[test]
    fn merge_writes_output_and_report() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "locales/de/a.json", r#"{"k": "alt"}"#);
        write(dir.path(), "newLocales/de/a.json", r#"{"k": "neu", "n": "N"}"#);

        let run = settings(dir.path(), ResolverKind::Add, false);
        cmd_merge(&run, OutputFormat::Json).unwrap();

        let merged = fs::read_to_string(dir.path().join("resultLocales/de/a.json")).unwrap();
        assert_eq!(merged, "{\n\t\"k\": \"alt\",\n\t\"n\": \"N\"\n}\n");
        let report = fs::read_to_string(dir.path().join("log.yaml")).unwrap();
        assert_eq!(report, "de\n\ta.json\n\t\tn: (none) | N => N\n");
    }

    #[test]
    fn dry_run_writes_no_output_tree() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "locales/de/a.json", r#"{"k": "alt"}"#);
        write(dir.path(), "newLocales/de/a.json", r#"{"k": "neu"}"#);

        let run = settings(dir.path(), ResolverKind::Sync, true);
        cmd_merge(&run, OutputFormat::Text).unwrap();
        assert!(!dir.path().join("resultLocales").exists());
        assert!(dir.path().join("log.yaml").exists());
    }

    #[test]
    fn combine_without_reference_country_fails() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "locales/de/a.json", "{}");
        write(dir.path(), "newLocales/de/a.json", "{}");
        let run = settings(dir.path(), ResolverKind::Combine, false);
        let err = cmd_merge(&run, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("no country found: 'us'"));
        assert!(!dir.path().join("resultLocales").exists());
    }

    #[test]
    fn missing_source_root_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let run = settings(dir.path(), ResolverKind::Sync, false);
        let err = cmd_merge(&run, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("failed to load locales"));
    }
}
