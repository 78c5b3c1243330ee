use ::std::io::{self, Write};
use ::std::path::Path;

use ::log::{error, info};

pub mod cli;
pub mod error;
pub mod logging;
pub mod name;
mod path_utils;
pub mod reader;
pub mod sorter;
pub mod writer;

pub use cli::{Args, OUTPUT_FILE, USAGE};
pub use error::{NameError, NameSorterError};
pub use name::Name;
pub use reader::{parse_names, read_names};
pub use sorter::{compare_names, sort_names};
pub use writer::{render_names, write_names};

/// How a run ended, once the console listing has been produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The input held no usable names; nothing was written.
    NoNames,
    /// The input could not be read; nothing was written.
    ReadFailed,
    /// The sorted names were written to the output file.
    Written(usize),
    /// The names were listed but the output file could not be written.
    WriteFailed(usize),
}

impl Outcome {
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::NoNames | Outcome::Written(_) => 0,
            Outcome::ReadFailed | Outcome::WriteFailed(_) => 1,
        }
    }
}

/// Reads the names in `input`, lists them sorted on `stdout` and writes
/// them to `output`.
///
/// I/O failures on the input or output file are logged and folded into the
/// returned [`Outcome`]. Only failures writing to `stdout` are returned as
/// errors.
pub fn run<W: Write>(input: &Path, output: &Path, stdout: &mut W) -> io::Result<Outcome> {
    let names = match read_names(input) {
        Ok(names) => names,
        Err(exception) => {
            error!("{exception}");
            writeln!(stdout, "No names found in the file.")?;
            return Ok(Outcome::ReadFailed);
        },
    };

    if names.is_empty() {
        writeln!(stdout, "No names found in the file.")?;
        return Ok(Outcome::NoNames);
    }
    info!("Read {} names from {input:?}", names.len());

    let sorted = sort_names(&names);

    writeln!(stdout, "Sorted Names:")?;
    render_names(&sorted, stdout)?;

    if let Err(exception) = write_names(&sorted, output) {
        error!("{exception}");
        return Ok(Outcome::WriteFailed(sorted.len()));
    }
    info!("Wrote {} names to {output:?}", sorted.len());

    writeln!(stdout, "Sorted names written to '{}' file.", output.display())?;
    Ok(Outcome::Written(sorted.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_run_lists_and_writes_sorted_names() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("unsorted-names-list.txt");
        let output = dir.path().join(OUTPUT_FILE);
        fs::write(&input, "Janet Parsons\nVaughn Lewis\nAdonis Julius Archer\n")
            .unwrap();
        let mut stdout = Vec::new();

        let outcome = run(&input, &output, &mut stdout).unwrap();

        assert_eq!(outcome, Outcome::Written(3));
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            format!(
                "Sorted Names:\nAdonis Julius Archer\nVaughn Lewis\nJanet Parsons\n\
                 Sorted names written to '{}' file.\n",
                output.display()
            )
        );
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Adonis Julius Archer\nVaughn Lewis\nJanet Parsons\n"
        );
    }

    #[test]
    fn test_run_with_missing_input_fails_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join(OUTPUT_FILE);
        let mut stdout = Vec::new();

        let outcome =
            run(&dir.path().join("missing.txt"), &output, &mut stdout).unwrap();

        assert_eq!(outcome, Outcome::ReadFailed);
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(String::from_utf8(stdout).unwrap(), "No names found in the file.\n");
        assert!(!output.exists());
    }

    #[test]
    fn test_run_with_only_malformed_lines_finds_no_names() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("names.txt");
        let output = dir.path().join(OUTPUT_FILE);
        fs::write(&input, "\nCher\n  \nMadonna\n").unwrap();
        let mut stdout = Vec::new();

        let outcome = run(&input, &output, &mut stdout).unwrap();

        assert_eq!(outcome, Outcome::NoNames);
        assert_eq!(outcome.exit_code(), 0);
        assert!(!output.exists());
    }

    #[test]
    fn test_run_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("names.txt");
        fs::write(&input, "Janet Parsons\nVaughn Lewis\n").unwrap();
        let output = dir.path().join(OUTPUT_FILE);
        fs::create_dir(&output).unwrap();
        let mut stdout = Vec::new();

        let outcome = run(&input, &output, &mut stdout).unwrap();

        assert_eq!(outcome, Outcome::WriteFailed(2));
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(
            String::from_utf8(stdout).unwrap(),
            "Sorted Names:\nVaughn Lewis\nJanet Parsons\n"
        );
    }
}
