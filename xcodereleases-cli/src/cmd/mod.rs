//! Implementing the logic for the different CLI commands.

mod list;
mod show;
mod fmt;
mod verify;

use std::process::ExitCode;
use std::io::{self, Read};
use std::path::Path;
use std::fs;

use xcodereleases::{DecodeError, Xcode, XcodeReleases};

use crate::parse::{CliArgs, CliCmd, CliOutput};
use crate::output::{Output, LogLevel};


pub fn main(args: &CliArgs) -> ExitCode {

    // Create the adequate output handle depending on the output and verbose options.
    let out = match args.output {
        CliOutput::Human => Output::human(match args.verbose {
            0 => LogLevel::Pending,
            1.. => LogLevel::Info,
        }),
        CliOutput::Machine => Output::tab_separated(),
    };

    let mut cli = Cli {
        out,
    };

    match &args.cmd {
        CliCmd::List(list_args) => list::list(&mut cli, list_args),
        CliCmd::Show(show_args) => show::show(&mut cli, show_args),
        CliCmd::Fmt(fmt_args) => fmt::fmt(&mut cli, fmt_args),
        CliCmd::Verify(verify_args) => verify::verify(&mut cli, verify_args),
    }

}

/// Shared CLI data.
#[derive(Debug)]
pub struct Cli {
    pub out: Output,
}

/// Error while loading the input document.
#[derive(thiserror::Error, Debug)]
pub enum LoadError {
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("decode: {0}")]
    Decode(#[from] DecodeError),
}

/// Read the whole input, a '-' path reads the standard input.
pub fn read_input(input: &Path) -> io::Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        io::stdin().lock().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        fs::read(input)
    }
}

/// Read and decode the all-releases document at the given input.
pub fn load_releases(input: &Path) -> Result<XcodeReleases, LoadError> {
    let bytes = read_input(input)?;
    Ok(XcodeReleases::from_slice(&bytes)?)
}

/// Load the releases document, logging any error, the error has already been logged
/// if this returns none.
pub fn load_releases_or_log(cli: &mut Cli, input: &Path) -> Option<XcodeReleases> {
    match load_releases(input) {
        Ok(releases) => {
            cli.out.log("loaded_releases")
                .arg(input.display())
                .arg(releases.len())
                .info(format_args!("Loaded {} releases from {}", releases.len(), input.display()));
            Some(releases)
        }
        Err(e) => {
            log_load_error(cli, input, &e);
            None
        }
    }
}

/// Find the first release matching the given version number or build, logging an error
/// if not found.
pub fn find_release<'a>(cli: &mut Cli, releases: &'a XcodeReleases, version: &str) -> Option<&'a Xcode> {
    let xcode = releases.iter().find(|xcode| xcode.version.matches(version));
    if xcode.is_none() {
        cli.out.log("error_release_not_found")
            .arg(version)
            .error(format_args!("Release {version} not found"))
            .additional("The version must be equal to the version number or to the build");
    }
    xcode
}

/// Log an error that happened while loading the document.
pub fn log_load_error(cli: &mut Cli, input: &Path, error: &LoadError) {
    match error {
        LoadError::Io(error) => log_io_error(cli, input, error),
        LoadError::Decode(error) => log_decode_error(cli, input, error),
    }
}

/// Log an I/O error about the given file.
pub fn log_io_error(cli: &mut Cli, file: &Path, error: &io::Error) {

    let mut log = cli.out.log("error_io");

    if let Some(error_kind_code) = io_error_kind_code(error) {
        log.arg(error_kind_code);
    } else {
        log.arg(format_args!("unknown:{error}"));
    }

    log.arg(file.display())
        .error(format_args!("I/O error: {error}"))
        .additional(format_args!("At {}", file.display()));

}

/// Log a decode error of the document.
pub fn log_decode_error(cli: &mut Cli, input: &Path, error: &DecodeError) {

    let index = error.index();
    let index_arg = index.map(|index| index.to_string()).unwrap_or_default();
    let mut log = cli.out.log("error_decode");

    match error.root_cause() {
        DecodeError::TypeMismatch { path, expected } => {
            log.arg("type_mismatch")
                .arg(&index_arg)
                .arg(path)
                .arg(expected);
        }
        DecodeError::MissingField { path } => {
            log.arg("missing_field")
                .arg(&index_arg)
                .arg(path);
        }
        DecodeError::MalformedDocument { reason, source } => {
            log.arg("malformed_document")
                .arg(reason);
            if let Some(source) = source {
                log.arg(format_args!("{}:{}", source.line(), source.column()));
            }
        }
        DecodeError::IndexedElement { .. } => unreachable!("root cause is never indexed"),
    }

    log.error(format_args!("Invalid releases document: {}", input.display()));

    if let Some(index) = index {
        log.additional(format_args!("Release #{index}"));
    }

    match error.root_cause() {
        DecodeError::TypeMismatch { path, expected } => {
            log.additional(format_args!("Type mismatch at {path}, expected {expected}"));
        }
        DecodeError::MissingField { path } => {
            log.additional(format_args!("Missing field {path}"));
        }
        DecodeError::MalformedDocument { reason, .. } => {
            log.additional(format_args!("Malformed document: {reason}"));
        }
        DecodeError::IndexedElement { .. } => {}
    }

}

fn io_error_kind_code(error: &io::Error) -> Option<&'static str> {
    use io::ErrorKind;
    Some(match error.kind() {
        ErrorKind::NotFound => "not_found",
        ErrorKind::PermissionDenied => "permission_denied",
        ErrorKind::AlreadyExists => "already_exists",
        ErrorKind::BrokenPipe => "broken_pipe",
        ErrorKind::InvalidInput => "invalid_input",
        ErrorKind::InvalidData => "invalid_data",
        ErrorKind::Interrupted => "interrupted",
        ErrorKind::Unsupported => "unsupported",
        ErrorKind::UnexpectedEof => "unexpected_eof",
        ErrorKind::OutOfMemory => "out_of_memory",
        ErrorKind::IsADirectory => "is_a_directory",
        _ => return None,
    })
}
