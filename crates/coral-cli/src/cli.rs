//! CLI argument definitions for the coral catalog browser.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "coral",
    version,
    about = "Browse a coral catalog export",
    long_about = "Browse a coral catalog exported from the content store.\n\n\
                  Filter the collection by category and tags, sort it, and\n\
                  look up individual corals by slug."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog export (JSON). Falls back to $CORAL_CATALOG, then ./catalog.json.
    #[arg(long = "catalog", value_name = "PATH", global = true)]
    pub catalog: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the collection with category, tag and sort controls.
    List(ListArgs),

    /// Show the filter tags offered under a category.
    Tags(TagsArgs),

    /// Show the detail view for one coral.
    Show(ShowArgs),

    /// List the shop tabs with in-stock counts.
    Categories,
}

#[derive(Args)]
pub struct ListArgs {
    /// Category code (sps, lps, soft, misc) or "All".
    #[arg(long = "category", default_value = "All")]
    pub category: String,

    /// Filter tag; repeat for more. Entries need at least one of them.
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    /// Sort order: featured, price-asc, price-desc, name-asc, name-desc.
    ///
    /// Unrecognized values keep the catalog order.
    #[arg(long = "sort", default_value = "featured")]
    pub sort: String,

    /// Include sold-out corals in the base list.
    #[arg(long = "include-sold-out")]
    pub include_sold_out: bool,

    /// Print the visible entries as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct TagsArgs {
    /// Category code (sps, lps, soft, misc) or "All".
    #[arg(long = "category", default_value = "All")]
    pub category: String,

    /// Include sold-out corals when collecting tags.
    #[arg(long = "include-sold-out")]
    pub include_sold_out: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// URL slug of the coral.
    #[arg(value_name = "SLUG")]
    pub slug: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
