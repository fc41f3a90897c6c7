//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Markdown static site generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy static assets and generate a page for every markdown file
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Print the HTML body of a markdown file
    #[command(visible_alias = "r")]
    Render {
        /// Markdown file to convert (default: stdin)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Print the title (first `# ` heading) of a markdown file
    #[command(visible_alias = "t")]
    Title {
        /// Markdown file to read (default: stdin)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: Option<PathBuf>,
    },
}

/// Build arguments; each one overrides the matching config file value
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Config file path (default: sitegen.toml, optional)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Content directory with markdown pages
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Static asset directory
    #[arg(short = 's', long = "static", value_hint = clap::ValueHint::DirPath)]
    pub static_dir: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub template: Option<PathBuf>,

    /// URL prefix for root-relative links, e.g. /my-repo/
    #[arg(short, long)]
    pub base_path: Option<String>,
}
