use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const HOME_ENV: &str = "PRIORITY_MATRIX_HOME";

/// `$PRIORITY_MATRIX_HOME`, else `~/.priority-matrix`.
pub fn matrix_home() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(HOME_ENV) {
        if !dir.trim().is_empty() {
            return Ok(PathBuf::from(dir));
        }
    }
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".priority-matrix"))
}

pub fn ensure_dir(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir.to_path_buf())
}

/// Resolve the data directory: explicit `--home` first, then the default.
pub fn resolve_home(explicit: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match explicit {
        Some(p) => p,
        None => matrix_home()?,
    };
    ensure_dir(&dir)
}

pub fn config_path(home: &Path) -> PathBuf {
    home.join("config.toml")
}
