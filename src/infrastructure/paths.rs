//! Path utilities for user-supplied locations.
//!
//! Config values such as `content.file` and `log_file` are written by hand and
//! often start with `~`. This module expands them against the user's home and
//! provides the default data directory for log files.

use std::path::{Path, PathBuf};

/// Returns the data directory for tour-carousel files.
///
/// Resolves to `$XDG_DATA_HOME/tour-carousel`, falling back to
/// `$HOME/.local/share/tour-carousel`, and finally to a relative
/// `.tour-carousel` when neither variable is set.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg).join("tour-carousel");
    }
    match home_dir() {
        Some(home) => home.join(".local").join("share").join("tour-carousel"),
        None => PathBuf::from(".tour-carousel"),
    }
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when `HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use tour_carousel::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde(Path::new("/srv/tours.json")), Path::new("/srv/tours.json"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match home_dir() {
        Some(home) if rest.as_os_str().is_empty() => home,
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_expands_against_home() {
        let Some(home) = home_dir() else { return };
        assert_eq!(expand_tilde(Path::new("~/tours.json")), home.join("tours.json"));
        assert_eq!(expand_tilde(Path::new("~")), home);
    }

    #[test]
    fn tilde_inside_a_name_is_left_alone() {
        assert_eq!(expand_tilde(Path::new("~tours/a.json")), Path::new("~tours/a.json"));
        assert_eq!(expand_tilde(Path::new("data/~/x")), Path::new("data/~/x"));
    }

    #[test]
    fn data_dir_ends_with_crate_name() {
        assert!(get_data_dir().ends_with("tour-carousel") || get_data_dir().ends_with(".tour-carousel"));
    }
}
