use ::std::io;
use ::std::path::Path;
use ::std::process::ExitCode;

use ::anyhow::Context;
use ::log::{error, info};

use ::name_sorter::cli::is_usage_error;
use ::name_sorter::{Args, OUTPUT_FILE, USAGE, logging};

fn main() -> ExitCode {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(exception) if is_usage_error(&exception) => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        },
        Err(exception) => exception.exit(),
    };

    if let Err(exception) = logging::init(args.verbose, args.log_file.as_deref()) {
        eprintln!("Problem setting up logging: {exception:#}");
        return ExitCode::FAILURE;
    }

    info!("Starting name sorter (v{})", env!("CARGO_PKG_VERSION"));

    let output = Path::new(OUTPUT_FILE);
    let result = name_sorter::run(&args.input, output, &mut io::stdout().lock())
        .context("Failed to write to standard output");

    match result {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(exception) => {
            error!("Application Error: {exception:#}");
            ExitCode::FAILURE
        },
    }
}
