//! Home directory resolution.

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

/// Base directory for the default home: the per-user config dir on Windows
/// (`%APPDATA%`), the user's home elsewhere. `dirs` falls back to the passwd
/// entry when `HOME` is unset.
fn platform_home() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    let base = dirs::config_dir();
    #[cfg(not(target_os = "windows"))]
    let base = dirs::home_dir();

    base.ok_or_else(|| anyhow!("Cannot resolve the user's home directory"))
}

/// Resolve the application home directory into an absolute path.
///
/// - `None` resolves to `<platform home>/<default_subdir>`.
/// - A leading `~` is expanded to the platform home.
/// - Relative paths are anchored at the current working directory.
///
/// With `create` set, the directory is created if missing.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let path = match configured {
        None => platform_home()?.join(default_subdir),
        Some(raw) => {
            if raw == "~" {
                platform_home()?
            } else if let Some(rest) = raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
                platform_home()?.join(rest)
            } else {
                let p = PathBuf::from(raw);
                if p.is_absolute() {
                    p
                } else {
                    std::env::current_dir()
                        .context("Failed to read current directory")?
                        .join(p)
                }
            }
        }
    };

    if create {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create home dir {}", path.display()))?;
    }

    Ok(path)
}
