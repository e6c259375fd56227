//! Project initialization module.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::{cli::Cli, config::SiteSection, log};
use anyhow::{Context, Result};
use std::{fs, path::PathBuf};

pub use validate::InitMode;

/// Create quire.toml and ignore files.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create the directory when a name is given
/// 3. Write configuration files
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_project(cli: &Cli, name: Option<&PathBuf>, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let (root, mode) = match name {
        Some(name) => (cwd.join(name), InitMode::NewDir),
        None => (cwd, InitMode::CurrentDir),
    };

    validate::validate_target(&root, &cli.config, mode)?;

    if mode == InitMode::NewDir {
        fs::create_dir_all(&root)
            .with_context(|| format!("Failed to create '{}'", root.display()))?;
    }

    config::write_config(&root, &cli.config)?;
    let output_dir = cli
        .output
        .clone()
        .unwrap_or_else(|| SiteSection::default().out_dir);
    config::write_ignore_files(&root, &output_dir)?;

    log!("init"; "wrote {}, set [site] url before building", root.join(&cli.config).display());
    Ok(())
}
