// Shared helpers for the e2e suites: locate the binary, build inputs.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tpcfix::tape::ContainerBuilder;

/// Locate the `tpcfix` binary produced by Cargo.
pub fn tpcfix_bin() -> PathBuf {
    if let Ok(p) = std::env::var("CARGO_BIN_EXE_tpcfix") {
        return PathBuf::from(p);
    }
    let mut p = std::env::current_exe().unwrap();
    p.pop();
    if p.ends_with("deps") {
        p.pop();
    }
    p.push("tpcfix");
    p
}

pub fn run<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(tpcfix_bin())
        .args(args)
        .env_remove("TPCFIX_LOG")
        .output()
        .expect("failed to run tpcfix")
}

pub fn write_container(dir: &Path, name: &str, builder: ContainerBuilder) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, builder.into_blocks()).unwrap();
    path
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
