//! Command-line interface definitions.

use crate::config::LoadOptions;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// navtree: author and inspect a static site's navigation tree
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "navtree.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat unknown config keys as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented template config file
    #[command(visible_alias = "i")]
    Init {
        /// Directory to create the config in (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load the config and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print the loaded tree as JSON
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Print nav, sidebar and social links as an indented tree
    #[command(visible_alias = "t")]
    Tree,

    /// List every link with its origin
    #[command(visible_alias = "l")]
    Links {
        /// Only list internal (site) links
        #[arg(short, long)]
        internal: bool,
    },

    /// Check that internal links resolve to markdown files under `src_dir`
    #[command(visible_alias = "v")]
    Validate {
        #[command(flatten)]
        args: ValidateArgs,
    },

    /// Watch the config file and reload it on change
    #[command(visible_alias = "w")]
    Watch,
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Validate command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Treat unresolved links as warnings instead of errors
    #[arg(long, short = 'w')]
    pub warn_only: bool,
}

impl Cli {
    /// Load options derived from global flags.
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.strict,
        }
    }
}
