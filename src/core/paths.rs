//! Pub cache path resolution
//!
//! The pub cache layout is `<root>/hosted/pub.dev/<package>-<version>/`.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::patch::error::PatchError;

/// Suffix appended to the gradle file name for its pristine copy
pub const BACKUP_SUFFIX: &str = ".backup";

/// Resolve the pub cache root.
///
/// An explicit root (from `--pub-cache` or `PUB_CACHE`) wins. Otherwise
/// Windows uses `%LOCALAPPDATA%\Pub\Cache` and everything else
/// `$HOME/.pub-cache`.
pub fn pub_cache_root(explicit: Option<&Path>) -> Result<PathBuf, PatchError> {
    resolve_pub_cache_root(explicit, cfg!(windows), |var| std::env::var_os(var))
}

pub(crate) fn resolve_pub_cache_root<F>(
    explicit: Option<&Path>,
    windows: bool,
    env: F,
) -> Result<PathBuf, PatchError>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(root) = explicit {
        return Ok(root.to_path_buf());
    }

    let (var, tail): (&str, &[&str]) = if windows {
        ("LOCALAPPDATA", &["Pub", "Cache"])
    } else {
        ("HOME", &[".pub-cache"])
    };

    let base = env(var)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| PatchError::NoCacheRoot {
            var: var.to_string(),
        })?;

    let mut root = PathBuf::from(base);
    root.extend(tail);
    Ok(root)
}

/// Location of a hosted package's Android build file
pub fn package_gradle_path(root: &Path, package: &str, version: &str) -> PathBuf {
    root.join("hosted")
        .join("pub.dev")
        .join(format!("{}-{}", package, version))
        .join("android")
        .join("build.gradle")
}

/// Sibling backup path: the full file name plus `.backup`
pub fn backup_path(target: &Path) -> PathBuf {
    let mut name = target.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Display form of a path for reports and status lines
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().to_string()
}
