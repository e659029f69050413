//! Coral catalog browser CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use coral_cli::commands::{ListRequest, run_categories, run_list, run_show, run_tags};
use coral_cli::logging::{LogConfig, LogFormat, init_logging};
use coral_cli::render::{
    render_categories, render_detail, render_listing, render_listing_json, render_tags,
};
use coral_store::{Catalog, StoreError, catalog_path};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(output) => {
            print!("{output}");
            0
        }
        Err(error) => {
            report_error(&error);
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<String> {
    let path = catalog_path(cli.catalog.as_deref());
    let catalog = Catalog::load(&path).with_context(|| format!("load {}", path.display()))?;
    match &cli.command {
        Command::List(args) => {
            let request = ListRequest {
                category: args.category.clone(),
                tags: args.tags.clone(),
                sort: args.sort.clone(),
                include_sold_out: args.include_sold_out,
            };
            let result = run_list(&catalog, &request);
            if args.json {
                let mut json = render_listing_json(&result).context("serialize listing")?;
                json.push('\n');
                Ok(json)
            } else {
                Ok(render_listing(&result))
            }
        }
        Command::Tags(args) => Ok(render_tags(&run_tags(
            &catalog,
            &args.category,
            args.include_sold_out,
        ))),
        Command::Show(args) => run_show(&catalog, &args.slug).map(render_detail),
        Command::Categories => Ok(render_categories(&run_categories(&catalog))),
    }
}

fn report_error(error: &anyhow::Error) {
    eprintln!("error: {error:#}");
    if let Some(store_error) = error.downcast_ref::<StoreError>() {
        eprintln!("{}", store_error.user_message());
        if let Some(suggestion) = store_error.suggestion() {
            eprintln!("hint: {suggestion}");
        }
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let level_filter = match cli.log_level {
        Some(LogLevelArg::Error) => LevelFilter::ERROR,
        Some(LogLevelArg::Warn) => LevelFilter::WARN,
        Some(LogLevelArg::Info) => LevelFilter::INFO,
        Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
        Some(LogLevelArg::Trace) => LevelFilter::TRACE,
        None => cli.verbosity.tracing_level_filter(),
    };
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    LogConfig::default()
        .with_level(level_filter)
        .with_env_filter(!(cli.verbosity.is_present() || cli.log_level.is_some()))
        .with_format(format)
        .with_ansi(with_ansi)
        .with_log_file(cli.log_file.clone())
}
