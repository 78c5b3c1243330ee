use ::std::path::PathBuf;

use ::clap::Parser;
use ::clap::error::{Error, ErrorKind};

/// Written to the current working directory.
pub const OUTPUT_FILE: &str = "sorted-names-list.txt";

pub const USAGE: &str = "Usage: name-sorter <file-path>";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "name-sorter",
    version,
    about,
    long_about = "Reads a list of names from a text file, one per line, and sorts them by last name and then by given names. The sorted list is printed to the console and written to a new file."
)]
pub struct Args {
    /// Path to the file containing the unsorted names
    #[arg(required = true)]
    pub input: PathBuf,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also append log records to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Result<Self, Error> {
        Self::try_parse()
    }
}

/// Whether a parse failure should be answered with the short usage line
/// rather than clap's own output (help and version requests).
pub fn is_usage_error(error: &Error) -> bool {
    !matches!(
        error.kind(),
        ErrorKind::DisplayHelp
            | ErrorKind::DisplayVersion
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    )
}
