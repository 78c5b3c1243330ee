use ::std::path::{Path, PathBuf};

/// Expands a leading `~` in `path` to the user's home directory.
///
/// Paths that are not valid UTF-8 or have no tilde are returned unchanged.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match path.to_str() {
        Some(path_str) => PathBuf::from(shellexpand::tilde(path_str).into_owned()),
        None => path.to_path_buf(),
    }
}
