use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use locmerge_resolve::ResolverKind;

#[derive(Parser)]
#[command(
    name = "locmerge",
    about = "Merge localization JSON trees across countries",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// TOML file with default merge settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge an old locale tree against a new one
    Merge(MergeArgs),
    /// List the available resolvers
    Resolvers,
}

#[derive(Args, Default)]
pub struct MergeArgs {
    /// Resolver applied to every leaf (add, filter, sync, diff, combine)
    #[arg(short, long)]
    pub resolver: Option<ResolverKind>,
    /// Old locale root [default: locales]
    #[arg(short, long)]
    pub source: Option<PathBuf>,
    /// New locale root [default: newLocales]
    #[arg(short, long)]
    pub target: Option<PathBuf>,
    /// Where the merged tree is written [default: resultLocales]
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Compare every country against this one
    #[arg(short = 'c', long)]
    pub master_country: Option<String>,
    /// Report this key even when its value is unchanged
    #[arg(long = "track", value_name = "KEY")]
    pub tracked_keys: Vec<String>,
    /// Change report path [default: log.yaml]
    #[arg(long, conflicts_with = "no_log_file")]
    pub log_file: Option<PathBuf>,
    #[arg(long)]
    pub no_log_file: bool,
    /// Print the report without writing the merged tree
    #[arg(long)]
    pub dry_run: bool,
}
