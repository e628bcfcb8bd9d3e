//! Path normalization and reference resolution.
//!
//! All paths entering the resolver are normalized to absolute form before
//! they are compared or recorded in a resolution context, so relative
//! references reached from different base directories that name the same
//! file compare equal. Normalization is purely lexical: tilde expansion,
//! absolutization against the current working directory, and `.`/`..`
//! resolution. Symlinks are not followed, so paths need not exist yet.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand `~` or `~/path` to the home directory.
///
/// The `~user` form is not supported.
fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::PathResolution {
        path: path.to_path_buf(),
        reason: "path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::PathResolution {
        path: path.to_path_buf(),
        reason: "cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::PathResolution {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components in an absolute path.
fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;

    for component in path.components() {
        match component {
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::Normal(c) => {
                result.push(c);
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    return Err(Error::PathResolution {
                        path: path.to_path_buf(),
                        reason: "path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                }
            }
        }
    }

    if has_root && result.as_os_str().is_empty() {
        result.push(Component::RootDir);
    }

    Ok(result)
}

/// Normalize a path to absolute form.
///
/// Expands a leading tilde, joins relative paths onto the current working
/// directory, and resolves `.`/`..` components lexically.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if tilde expansion fails, the current
/// directory cannot be determined, or the path escapes the root.
///
/// # Examples
///
/// ```
/// use fusectx::path::normalize;
/// use std::path::Path;
///
/// let normalized = normalize(Path::new("/a/./b/../c")).unwrap();
/// assert_eq!(normalized, Path::new("/a/c"));
///
/// let normalized = normalize(Path::new("relative.md")).unwrap();
/// assert!(normalized.is_absolute());
/// ```
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| Error::PathResolution {
            path: path.to_path_buf(),
            reason: format!("cannot get current directory: {e}"),
        })?;
        cwd.join(expanded)
    };

    resolve_components(&absolute)
}

/// Resolve a frontmatter reference against the directory of the file that
/// declared it.
///
/// Absolute references are used as-is; relative references are joined onto
/// `base_dir`. The result is normalized to absolute form.
///
/// # Errors
///
/// Returns [`Error::PathResolution`] if normalization fails.
///
/// # Examples
///
/// ```
/// use fusectx::path::resolve_reference;
/// use std::path::Path;
///
/// let resolved = resolve_reference("base.md", Path::new("/project/docs")).unwrap();
/// assert_eq!(resolved, Path::new("/project/docs/base.md"));
///
/// let resolved = resolve_reference("../shared.md", Path::new("/project/docs")).unwrap();
/// assert_eq!(resolved, Path::new("/project/shared.md"));
///
/// let resolved = resolve_reference("/abs/other.md", Path::new("/project")).unwrap();
/// assert_eq!(resolved, Path::new("/abs/other.md"));
/// ```
pub fn resolve_reference(reference: &str, base_dir: &Path) -> Result<PathBuf> {
    let reference = Path::new(reference);
    if reference.is_absolute() {
        normalize(reference)
    } else {
        normalize(&base_dir.join(reference))
    }
}
