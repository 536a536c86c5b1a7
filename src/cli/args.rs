//! Command-line argument parsing.
//!
//! Exactly two positional paths plus a few flags. Anything else is a usage
//! error and aborts the run.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, Parser, ValueEnum};

use crate::error::{Error, Result};
use crate::io::Prefs;
use crate::tape::VarFraming;

/// Output record layout as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FramingArg {
    /// 2-byte little-endian length followed by the payload
    #[default]
    Counted,
    /// Like `counted`, with odd-length payloads padded to an even size
    WordAligned,
}

impl From<FramingArg> for VarFraming {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::Counted => VarFraming::Counted,
            FramingArg::WordAligned => VarFraming::WordAligned,
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tpcfix",
    version,
    about = "Convert a TPC file from 512b fixed record size to variable record size"
)]
pub struct CliArgs {
    /// Input TPC file of fixed 512-byte records
    #[arg(value_name = "INPUT.TPC")]
    pub input: PathBuf,

    /// Output TPC file to create; must not exist
    #[arg(value_name = "OUTPUT.TPC")]
    pub output: PathBuf,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress markers and all logging below errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Layout of the variable-length output records
    #[arg(long, value_enum, default_value_t = FramingArg::Counted)]
    pub framing: FramingArg,

    /// Re-read the output after converting and compare it with the input
    #[arg(long)]
    pub verify: bool,
}

impl CliArgs {
    pub fn prefs(&self) -> Prefs {
        Prefs::default()
            .with_framing(self.framing.into())
            .with_verify(self.verify)
            .with_progress(!self.quiet)
    }
}

/// Result of a successful parse.
#[derive(Debug)]
pub enum ParseOutcome {
    /// Run a conversion.
    Run(CliArgs),
    /// `--help` or `--version` was requested; print the text and exit
    /// successfully.
    Info(String),
}

/// Parse `argv` (including the program name).
///
/// Missing, extra or malformed arguments return [`Error::Usage`] carrying the
/// rendered usage text.
pub fn parse_args_from<I, T>(argv: I) -> Result<ParseOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliArgs::try_parse_from(argv) {
        Ok(args) => Ok(ParseOutcome::Run(args)),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            Ok(ParseOutcome::Info(e.render().to_string()))
        }
        Err(e) => Err(Error::Usage {
            message: e.render().to_string(),
        }),
    }
}

/// Parse the process arguments.
pub fn parse_args() -> Result<ParseOutcome> {
    parse_args_from(std::env::args_os())
}
