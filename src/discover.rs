//! Layered lookup over an explicit, caller-ordered list of candidate
//! locations.
//!
//! The core [`load`](crate::SectionList::load) takes exactly one resolved
//! path. Applications usually want the conventional cascade instead —
//! system-wide file, then a home dotfile, then a project-local override —
//! with later files winning key-by-key. This module supplies the
//! mechanism for that as a plain loop of load + merge over a caller-built
//! [`SearchPath`] list; the *choice* of locations stays with the caller.
//!
//! ```no_run
//! use flatini::{SearchPath, load_layered};
//!
//! let config = load_layered(
//!     &[
//!         SearchPath::Path("/etc/myapp".into()),
//!         SearchPath::Home(".myapp"),
//!         SearchPath::Platform("myapp"),
//!         SearchPath::Cwd,
//!     ],
//!     "myapp.ini",
//! )?;
//! # Ok::<(), flatini::IniError>(())
//! ```
//!
//! Missing files are silently skipped — listing a location is a
//! suggestion, not a requirement. Any other I/O failure propagates.

use std::path::PathBuf;

use log::debug;

use crate::error::IniError;
use crate::store::SectionList;

/// One candidate location for a config file, resolved to a concrete
/// directory at lookup time. List entries are priority-ascending: later
/// entries override earlier ones key-by-key.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPath {
    /// The platform config directory for the named application (XDG on
    /// Linux, `~/Library/Application Support` on macOS).
    Platform(&'static str),
    /// A subdirectory under the user's home directory, e.g. `Home(".myapp")`.
    Home(&'static str),
    /// The current working directory.
    Cwd,
    /// An explicit directory.
    Path(PathBuf),
}

/// Resolve a [`SearchPath`] to a concrete directory.
///
/// Returns `None` when the location cannot be determined on this system
/// (e.g. no home directory).
pub fn resolve_search_path(sp: &SearchPath) -> Option<PathBuf> {
    match sp {
        SearchPath::Platform(app_name) => {
            let proj = directories::ProjectDirs::from("", "", app_name)?;
            Some(proj.config_dir().to_path_buf())
        }
        SearchPath::Home(subdir) => {
            let user = directories::UserDirs::new()?;
            Some(user.home_dir().join(subdir))
        }
        SearchPath::Cwd => std::env::current_dir().ok(),
        SearchPath::Path(p) => Some(p.clone()),
    }
}

/// Expand the search-path list into concrete candidate files, in the same
/// priority-ascending order. Unresolvable locations are skipped.
pub fn candidate_files(search_paths: &[SearchPath], file_name: &str) -> Vec<PathBuf> {
    search_paths
        .iter()
        .filter_map(resolve_search_path)
        .map(|dir| dir.join(file_name))
        .collect()
}

/// Load every candidate that exists and fold them into one store:
/// the first file found is the base, each later one is merged over it so
/// its values win. Returns an empty store when no candidate exists.
///
/// A missing file is skipped; any other I/O error is propagated.
pub fn load_layered(search_paths: &[SearchPath], file_name: &str) -> Result<SectionList, IniError> {
    let mut merged = SectionList::new();

    for candidate in candidate_files(search_paths, file_name) {
        match SectionList::load(&candidate) {
            Ok(layer) => {
                debug!("merging config layer {}", candidate.display());
                merged.merge(&layer);
                merged.set_file_name(&candidate);
            }
            Err(IniError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                continue;
            }
            Err(e) => return Err(e),
        }
    }

    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn resolve_explicit_path() {
        let p = PathBuf::from("/tmp/myapp");
        assert_eq!(resolve_search_path(&SearchPath::Path(p.clone())), Some(p));
    }

    #[test]
    fn candidate_files_join_file_name() {
        let dir = TempDir::new().unwrap();
        let candidates = candidate_files(
            &[SearchPath::Path(dir.path().to_path_buf())],
            "app.ini",
        );
        assert_eq!(candidates, [dir.path().join("app.ini")]);
    }

    #[test]
    fn load_layered_with_no_files_is_empty() {
        let dir = TempDir::new().unwrap();
        let merged = load_layered(
            &[SearchPath::Path(dir.path().to_path_buf())],
            "nonexistent.ini",
        )
        .unwrap();
        assert!(merged.is_empty());
    }

    #[test]
    fn load_layered_later_files_win() {
        let low = TempDir::new().unwrap();
        let high = TempDir::new().unwrap();
        fs::write(
            low.path().join("app.ini"),
            "[server]\nhost = global\nport = 80\n",
        )
        .unwrap();
        fs::write(high.path().join("app.ini"), "[server]\nhost = local\n").unwrap();

        let merged = load_layered(
            &[
                SearchPath::Path(low.path().to_path_buf()),
                SearchPath::Path(high.path().to_path_buf()),
            ],
            "app.ini",
        )
        .unwrap();

        assert_eq!(merged.as_str("server", "host"), Some("local"));
        assert_eq!(merged.as_str("server", "port"), Some("80"));
    }

    #[test]
    fn load_layered_skips_missing_layers() {
        let present = TempDir::new().unwrap();
        let absent = TempDir::new().unwrap();
        fs::write(present.path().join("app.ini"), "[s]\nk = v\n").unwrap();

        let merged = load_layered(
            &[
                SearchPath::Path(absent.path().to_path_buf()),
                SearchPath::Path(present.path().to_path_buf()),
            ],
            "app.ini",
        )
        .unwrap();

        assert_eq!(merged.as_str("s", "k"), Some("v"));
    }

    #[test]
    fn load_layered_remembers_last_loaded_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.ini");
        fs::write(&path, "[s]\nk = v\n").unwrap();

        let merged =
            load_layered(&[SearchPath::Path(dir.path().to_path_buf())], "app.ini").unwrap();
        assert_eq!(merged.file_name(), Some(path.as_path()));
    }

    #[cfg(unix)]
    #[test]
    fn load_layered_propagates_real_io_errors() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.ini");
        fs::write(&path, "[s]\nk = v\n").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o000)).unwrap();

        let result = load_layered(&[SearchPath::Path(dir.path().to_path_buf())], "app.ini");
        assert!(result.is_err());

        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();
    }
}
