//! Binary entry point for the `tpcfix` command-line tool.
//!
//! 1. [`parse_args`] reads the two paths and the flags.
//! 2. [`init_logging`] sets up `env_logger` from the verbosity flags.
//! 3. [`run`] converts the file and the process exits with the status.
//!
//! Files are closed by drop before the process exits, whichever stage failed.

use tpcfix::cli::args::{parse_args, CliArgs, ParseOutcome};
use tpcfix::cli::logging::init_logging;
use tpcfix::config::{EXIT_ABORT, EXIT_SUCCESS};
use tpcfix::{convert_filename, Error, PROGRAM_NAME};

fn run(args: &CliArgs) -> anyhow::Result<()> {
    let prefs = args.prefs();
    log::debug!(
        "{} v{}: `{}` -> `{}` ({:?})",
        PROGRAM_NAME,
        tpcfix::version_string(),
        args.input.display(),
        args.output.display(),
        prefs
    );
    convert_filename(&args.input, &args.output, &prefs)?;
    Ok(())
}

fn main() {
    let args = match parse_args() {
        Ok(ParseOutcome::Run(args)) => args,
        Ok(ParseOutcome::Info(text)) => {
            print!("{}", text);
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprint!("{}", e);
            std::process::exit(e.exit_code());
        }
    };

    init_logging(args.verbose, args.quiet);

    let exit_code = match run(&args) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => {
            eprintln!("{}: {:#}", PROGRAM_NAME, err);
            err.downcast_ref::<Error>()
                .map_or(EXIT_ABORT, Error::exit_code)
        }
    };
    std::process::exit(exit_code);
}
