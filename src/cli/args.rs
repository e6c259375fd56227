//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quire build configuration resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: quire.toml)
    #[arg(short = 'C', long, default_value = "quire.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site URL.
    ///
    /// Useful for CI/CD deployments where the production URL differs from the
    /// one in quire.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override base path (must start with '/')
    #[arg(short = 'B', long)]
    pub base: Option<String>,

    /// Override output directory (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Abort on unknown config fields instead of ignoring them
    #[arg(long)]
    pub strict: bool,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Create quire.toml from the default template
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template instead of writing files
        #[arg(long)]
        dry: bool,
    },

    /// Validate quire.toml and compose the build descriptor
    #[command(visible_alias = "c")]
    Check,

    /// Print the composed build descriptor
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: OutputArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Print the build plan produced by the configured plugins
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        args: OutputArgs,
    },
}

/// Where and how to write command output.
#[derive(clap::Args, Debug, Clone)]
pub struct OutputArgs {
    /// Pretty-print output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short = 'w', long = "write", value_hint = clap::ValueHint::FilePath)]
    pub write: Option<PathBuf>,
}

/// Descriptor output format.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Toml,
}
