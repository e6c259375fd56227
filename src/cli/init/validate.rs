//! Pre-initialization validation.
//!
//! A project is only initialized where no `quire.toml` would be clobbered.

use anyhow::{Result, bail};
use std::path::Path;

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// `quire init` - add quire.toml to the current directory
    CurrentDir,
    /// `quire init <name>` - create a new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: existing sources are fine, an existing config is not
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            let config = root.join(config_name);
            if config.exists() {
                bail!(
                    "'{}' already exists.\n\
                     Edit it directly or remove it before running `quire init`.",
                    config.display()
                );
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or run `quire init` inside it.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}
