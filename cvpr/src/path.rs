//! Config file path handling.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "./cv-pull-request.yaml";

/// Expand a leading tilde (`~`) to the home directory.
///
/// Handles `~` and `~/path`. Anything else, including `~user/...` and a
/// file whose name merely starts with `~`, is returned unchanged so the
/// loader can try it as given. Relative paths stay relative.
///
/// # Errors
///
/// Returns an error if the path is `~` or `~/path` and the home directory
/// cannot be determined.
///
/// # Examples
///
/// ```
/// use cvpr::path::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/releases.yaml")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("releases.yaml"));
///
/// let relative = expand_tilde(Path::new("./cv-pull-request.yaml")).unwrap();
/// assert_eq!(relative, Path::new("./cv-pull-request.yaml"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    let rest = if path_str == "~" {
        None
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Some(rest)
    } else {
        if path_str.starts_with('~') {
            log::debug!("{path_str} not expanded, only ~ and ~/path are supported");
        }
        return Ok(path.to_path_buf());
    };

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    Ok(match rest {
        Some(rest) => home.join(rest),
        None => home,
    })
}
