use ::std::fs;
use ::std::path::Path;

use ::log::{debug, warn};

use crate::error::{NameError, NameSorterError};
use crate::name::Name;
use crate::path_utils::resolve_path;

/// Reads and parses every name in the file at `path`.
///
/// Blank lines are skipped silently and single-token lines are skipped with
/// a warning. Invalid UTF-8 is replaced with `U+FFFD` rather than failing
/// the whole file. An unreadable file is reported as [`NameSorterError::Read`].
pub fn read_names<P: AsRef<Path>>(path: P) -> Result<Vec<Name>, NameSorterError> {
    let path = resolve_path(path);
    debug!("Reading names from {path:?}");

    let bytes =
        fs::read(&path).map_err(|source| NameSorterError::Read { path, source })?;

    Ok(parse_names(&String::from_utf8_lossy(&bytes)))
}

pub fn parse_names(content: &str) -> Vec<Name> {
    content
        .lines()
        .enumerate()
        .filter_map(|(index, line)| process_line(index + 1, line))
        .collect()
}

fn process_line(line_number: usize, line: &str) -> Option<Name> {
    match Name::parse(line) {
        Ok(name) => Some(name),
        Err(NameError::Empty) => None,
        Err(exception) => {
            warn!("Skipping line {line_number}: {exception}");
            None
        },
    }
}
