//! Implementation of the 'fmt' command.

use std::process::ExitCode;
use std::io::{self, Write};
use std::path::Path;

use xcodereleases::{encode, encode_pretty};

use crate::parse::FmtArgs;

use super::{Cli, load_releases, log_load_error, log_io_error};


pub fn fmt(cli: &mut Cli, args: &FmtArgs) -> ExitCode {

    // Not logging on success, the document is the only thing written to stdout.
    let mut releases = match load_releases(&args.input.input) {
        Ok(releases) => releases,
        Err(e) => {
            log_load_error(cli, &args.input.input, &e);
            return ExitCode::FAILURE;
        }
    };

    if args.released {
        releases = releases.released();
    }

    let mut bytes = if args.pretty {
        encode_pretty(&releases)
    } else {
        encode(&releases)
    };

    bytes.push(b'\n');

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(&bytes).and_then(|()| stdout.flush()) {
        drop(stdout);
        log_io_error(cli, Path::new("-"), &e);
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS

}
