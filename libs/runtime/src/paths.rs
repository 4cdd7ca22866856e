use anyhow::{anyhow, Context, Result};
use std::path::{Path, PathBuf};

/// Resolve the server home directory.
///
/// - `None` (or empty) resolves to `<platform home>/<default_subdir>`.
/// - A leading `~` is expanded to the platform home directory.
/// - Relative paths are made absolute against the current working directory.
///
/// When `create` is set the directory is created if missing.
pub fn resolve_home_dir(
    configured: Option<String>,
    default_subdir: &str,
    create: bool,
) -> Result<PathBuf> {
    let home = platform_home()?;

    let path = match configured.as_deref().map(str::trim) {
        None | Some("") => home.join(default_subdir),
        Some(raw) => expand_tilde(raw, &home),
    };

    let path = if path.is_relative() {
        std::env::current_dir()
            .context("cannot read current directory")?
            .join(path)
    } else {
        path
    };

    if create {
        std::fs::create_dir_all(&path)
            .with_context(|| format!("cannot create home_dir {}", path.display()))?;
    }

    Ok(path)
}

/// Resolve `file` against `base_dir` unless it is already absolute.
pub fn resolve_under(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

fn platform_home() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Ok(PathBuf::from(appdata));
        }
    }
    dirs::home_dir().ok_or_else(|| anyhow!("cannot determine the user home directory"))
}

fn expand_tilde(raw: &str, home: &Path) -> PathBuf {
    if raw == "~" {
        return home.to_path_buf();
    }
    match raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")) {
        Some(rest) => home.join(rest),
        None => PathBuf::from(raw),
    }
}
