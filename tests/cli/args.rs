// Integration tests for src/cli: argument parsing and log levels

use std::path::PathBuf;

use log::LevelFilter;
use tpcfix::cli::args::{parse_args_from, FramingArg, ParseOutcome};
use tpcfix::cli::logging::level_filter;
use tpcfix::tape::VarFraming;
use tpcfix::Error;

fn parse(argv: &[&str]) -> ParseOutcome {
    parse_args_from(argv).unwrap()
}

#[test]
fn positional_paths_in_order() {
    match parse(&["tpcfix", "/tmp/a.tpc", "/tmp/b.tpc"]) {
        ParseOutcome::Run(args) => {
            assert_eq!(args.input, PathBuf::from("/tmp/a.tpc"));
            assert_eq!(args.output, PathBuf::from("/tmp/b.tpc"));
            assert_eq!(args.framing, FramingArg::Counted);
            assert_eq!(args.verbose, 0);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn verbosity_is_counted() {
    match parse(&["tpcfix", "-vv", "a", "b"]) {
        ParseOutcome::Run(args) => {
            assert_eq!(level_filter(args.verbose, args.quiet), LevelFilter::Debug)
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn quiet_and_verbose_conflict() {
    assert!(matches!(
        parse_args_from(["tpcfix", "-q", "-v", "a", "b"]),
        Err(Error::Usage { .. })
    ));
}

#[test]
fn unknown_framing_is_usage_error() {
    assert!(matches!(
        parse_args_from(["tpcfix", "--framing", "fixed", "a", "b"]),
        Err(Error::Usage { .. })
    ));
}

#[test]
fn framing_arg_converts() {
    assert_eq!(VarFraming::from(FramingArg::WordAligned), VarFraming::WordAligned);
    assert_eq!(VarFraming::from(FramingArg::Counted), VarFraming::Counted);
}

#[test]
fn version_is_info() {
    match parse(&["tpcfix", "--version"]) {
        ParseOutcome::Info(text) => assert!(text.contains(tpcfix::TPCFIX_VERSION_STRING)),
        other => panic!("unexpected {other:?}"),
    }
}
