//! navtree - author and inspect a static site's navigation tree.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use navtree::cli::{self, Cli, Commands, common::load_config};
use navtree::logger;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        // init runs before any config exists
        Commands::Init { name, dry } => cli::init::new_config(name.as_deref(), *dry),
        Commands::Check => cli::check::check_config(&load_config(&cli)?),
        Commands::Show { args } => cli::show::show_config(&load_config(&cli)?.config, args),
        Commands::Tree => {
            cli::tree::print_tree(&load_config(&cli)?.config.theme);
            Ok(())
        }
        Commands::Links { internal } => {
            cli::links::print_links(&load_config(&cli)?.config.theme, *internal);
            Ok(())
        }
        Commands::Validate { args } => cli::validate::validate_links(&load_config(&cli)?.config, args),
        Commands::Watch => cli::watch::watch_config(load_config(&cli)?, cli.load_options()),
    }
}
