//! Path utilities for godot-mcp
//!
//! XDG Base Directory locations for state and logs.

use std::path::{Path, PathBuf};
use directories::ProjectDirs;

/// Application identifier for XDG directories
const APP_NAME: &str = "godot-mcp";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
}

/// Get the state directory
///
/// Location: `$XDG_STATE_HOME/godot-mcp` or `~/.local/state/godot-mcp`
pub fn state_dir() -> PathBuf {
    project_dirs()
        .and_then(|p| p.state_dir().map(|d| d.to_path_buf()))
        .unwrap_or_else(fallback_state_dir)
}

/// Get the log directory
///
/// Location: `$XDG_STATE_HOME/godot-mcp/log`
pub fn log_dir() -> PathBuf {
    state_dir().join("log")
}

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

fn home_dir() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/tmp"))
}

fn fallback_state_dir() -> PathBuf {
    home_dir().join(".local").join("state").join(APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_dir_contains_app_name() {
        let path = state_dir();
        assert!(path.to_string_lossy().contains("godot-mcp"));
    }

    #[test]
    fn test_log_dir_is_under_state() {
        assert!(log_dir().starts_with(state_dir()));
        assert_eq!(log_dir().file_name().unwrap().to_str().unwrap(), "log");
    }

    #[test]
    fn test_fallback_state_dir() {
        let path = fallback_state_dir();
        assert!(path.to_string_lossy().contains(".local/state"));
        assert!(path.ends_with("godot-mcp"));
    }

    #[test]
    fn test_ensure_dir_nested() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let test_dir = temp_dir.path().join("nested").join("deep");

        assert!(ensure_dir(&test_dir).is_ok());
        assert!(test_dir.is_dir());
    }

    #[test]
    fn test_ensure_dir_already_exists() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        assert!(ensure_dir(temp_dir.path()).is_ok());
    }
}
