use ::std::io;
use ::std::path::PathBuf;

use ::thiserror::Error;

/// Reasons a [`Name`](crate::Name) cannot be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name is empty")]
    Empty,

    #[error("Name has no given name: {0:?}")]
    MissingGivenName(String),

    #[error("Surname must not be empty")]
    EmptySurname,

    #[error("Invalid name token: {0:?}")]
    InvalidToken(String),
}

#[derive(Error, Debug)]
pub enum NameSorterError {
    #[error("An error occurred while reading the file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("An error occurred while writing to the file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
