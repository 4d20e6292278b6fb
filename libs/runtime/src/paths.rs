use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// Resolve the server home directory to an absolute path.
///
/// - `Some(path)`: a leading `~` expands to the user home; relative paths are
///   resolved against the current working directory.
/// - `None`: `<user home>/<default_subdir>` (the roaming data dir on Windows).
///
/// With `create` set the directory is created if missing.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let path = match configured {
        Some(raw) => expand_tilde(raw.trim())?,
        None => user_home()?.join(default_subdir),
    };

    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()
            .context("current_dir unavailable")?
            .join(path)
    };

    if create {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create home_dir {}", path.display()))?;
    }
    Ok(path)
}

fn expand_tilde(raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return user_home();
    }
    match raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        Some(rest) => Ok(user_home()?.join(rest)),
        None => Ok(PathBuf::from(raw)),
    }
}

/// Per-user base directory: the roaming data dir on Windows, home elsewhere.
fn user_home() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    let dir = dirs::data_dir();
    #[cfg(not(target_os = "windows"))]
    let dir = dirs::home_dir();

    dir.ok_or_else(|| anyhow!("cannot resolve the user home directory"))
}
