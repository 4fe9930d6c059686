//! Filesystem lookup primitives.
//!
//! `locate` finds a file on an ordered search path; `resolve_link` follows
//! one level of symbolic link. Neither returns an error: anything that
//! cannot be found or read comes back as `None`.

use std::path::{Path, PathBuf};

use super::path_set::PathSet;

/// Find `filename` in the first directory of `search_paths` that has it.
///
/// A filename that already contains a `/` is returned in absolute form
/// without touching the filesystem, unless `allow_subdir_search` is set, in
/// which case it is treated as a relative path under each search directory.
pub fn locate(filename: &str, search_paths: &PathSet, allow_subdir_search: bool) -> Option<PathBuf> {
    if filename.is_empty() {
        return None;
    }

    if filename.contains('/') && !allow_subdir_search {
        let path = Path::new(filename);
        return Some(std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf()));
    }

    for dir in search_paths.iter() {
        let candidate = Path::new(dir).join(filename);
        if candidate.exists() {
            tracing::debug!("located {} at {}", filename, candidate.display());
            return Some(candidate);
        }
    }

    tracing::debug!("{} not found in {}", filename, search_paths);
    None
}

/// Resolve a command name against a command search path.
pub fn locate_command(command: &str, command_path: &PathSet) -> Option<PathBuf> {
    locate(command, command_path, false)
}

/// Follow one level of symbolic link.
///
/// - symlink: the immediate target as stored in the link (possibly relative)
/// - other existing entry: the path itself, if readable
/// - anything else: `None`
pub fn resolve_link(path: &Path) -> Option<PathBuf> {
    if path.as_os_str().is_empty() {
        return None;
    }

    let meta = std::fs::symlink_metadata(path).ok()?;
    if meta.file_type().is_symlink() {
        return std::fs::read_link(path).ok();
    }

    if is_readable(path) {
        Some(path.to_path_buf())
    } else {
        None
    }
}

/// Check read permission for the current user.
#[cfg(unix)]
pub fn is_readable(path: &Path) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(c_path) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // SAFETY: c_path is a valid NUL-terminated string for the duration of the call
    unsafe { libc::access(c_path.as_ptr(), libc::R_OK) == 0 }
}

#[cfg(not(unix))]
pub fn is_readable(path: &Path) -> bool {
    std::fs::File::open(path).is_ok()
}
