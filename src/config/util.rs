//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from the current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/blog/src/content/posts/  ← cwd
/// /home/user/blog/quire.toml          ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Walk up from `start` until a directory contains `config_name`.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("src/content/posts");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("quire.toml"), "").unwrap();

        let found = find_config_file_from(&nested, Path::new("quire.toml")).unwrap();
        assert_eq!(found, temp.path().join("quire.toml"));
    }

    #[test]
    fn test_absolute_path() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("custom.toml");
        assert!(find_config_file_from(temp.path(), &config).is_none());

        fs::write(&config, "").unwrap();
        assert_eq!(find_config_file_from(Path::new("/"), &config), Some(config));
    }

    #[test]
    fn test_not_found() {
        let temp = TempDir::new().unwrap();
        let name = Path::new("quire-test-config-that-does-not-exist.toml");
        assert!(find_config_file_from(temp.path(), name).is_none());
    }
}
