//! Path normalization utilities.

use std::path::{Component, Path, PathBuf};

/// Normalize a file system path to absolute form.
///
/// Tries `canonicalize()` first (resolves symlinks, `.`, `..`).
/// Falls back to:
/// - Return as-is if already absolute
/// - Join with current directory if relative
///
/// Output directories usually don't exist yet, so the fallback is the common case.
#[inline]
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir().map_or_else(|_| path.to_path_buf(), |cwd| cwd.join(path))
        }
    })
}

/// Whether `path` is a non-empty relative path that stays inside the
/// directory it is joined onto, written in canonical `a/b/c` form.
///
/// Rejects roots, prefixes, `.` and `..` segments, empty segments and
/// trailing slashes, so two accepted names that differ as strings never
/// name the same file, and the name can be appended to a URL as-is.
pub fn is_safe_relative(path: &Path) -> bool {
    let Some(raw) = path.to_str() else {
        return false;
    };

    let mut names = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => match name.to_str() {
                Some(name) => names.push(name),
                None => return false,
            },
            _ => return false,
        }
    }

    !names.is_empty() && names.join("/") == raw
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/pages/  ← cwd
/// /home/user/site/dealmap.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}
