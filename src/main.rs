//! Quire - build configuration resolver for static blogs.

#![allow(dead_code)]

mod cli;
mod compose;
mod config;
mod logger;
mod plugin;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use plugin::PluginRegistry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let registry = PluginRegistry::with_builtins();
    let load = || cli::check::load_site(&cli, &registry);

    match &cli.command {
        Commands::Init { name, dry } => cli::init::new_project(&cli, name.as_ref(), *dry),
        Commands::Check => cli::check::check_project(&load()?),
        Commands::Show { args, format } => cli::show::show_descriptor(&load()?, *format, args),
        Commands::Plan { args } => cli::show::show_plan(&load()?, args),
    }
}
