//! Implementation of the 'verify' command.

use std::process::ExitCode;
use std::fs::File;
use std::io::BufReader;

use xcodereleases::{Checksum, LinkKindName};

use crate::parse::VerifyArgs;
use crate::format::SizeFmt;

use super::{Cli, find_release, load_releases_or_log, log_io_error};


pub fn verify(cli: &mut Cli, args: &VerifyArgs) -> ExitCode {

    let Some(releases) = load_releases_or_log(cli, &args.input.input) else {
        return ExitCode::FAILURE;
    };

    let Some(xcode) = find_release(cli, &releases, &args.version) else {
        return ExitCode::FAILURE;
    };

    let Some(link) = xcode.link(&LinkKindName::XCODE) else {
        cli.out.log("error_link_not_found")
            .arg(&args.version)
            .error(format_args!("Release {} has no Xcode download link", xcode.version));
        return ExitCode::FAILURE;
    };

    if link.size_in_bytes.is_none() && link.checksum(&Checksum::SHA1).is_none() {
        cli.out.log("warn_nothing_to_verify")
            .arg(&link.url)
            .warning("The Xcode link has neither a size nor a SHA-1 checksum, only the file's properties are shown");
    }

    cli.out.log("verifying")
        .arg(args.file.display())
        .pending(format_args!("Verifying {}", args.file.display()));

    let check = match File::open(&args.file).and_then(|file| link.check(BufReader::new(file))) {
        Ok(check) => check,
        Err(e) => {
            log_io_error(cli, &args.file, &e);
            return ExitCode::FAILURE;
        }
    };

    cli.out.log("file_size")
        .arg(check.size)
        .info(format_args!("Size: {} ({} bytes)", SizeFmt(check.size), check.size));
    cli.out.log("file_sha1")
        .arg(&check.sha1)
        .info(format_args!("SHA-1: {}", check.sha1));

    if check.size_valid == Some(false) {
        let expected = link.size_in_bytes.unwrap_or_default();
        cli.out.log("error_invalid_size")
            .arg(check.size)
            .arg(expected)
            .error(format_args!("Invalid size, expected {expected} bytes but got {}", check.size));
    }

    if check.sha1_valid == Some(false) {
        let expected = link.checksum(&Checksum::SHA1).unwrap_or_default();
        cli.out.log("error_invalid_sha1")
            .arg(&check.sha1)
            .arg(expected)
            .error("Invalid SHA-1")
            .additional(format_args!("Expected: {expected}"))
            .additional(format_args!("Actual:   {}", check.sha1));
    }

    if !check.is_valid() {
        return ExitCode::FAILURE;
    }

    cli.out.log("verified")
        .arg(args.file.display())
        .success(format_args!("Verified {} for Xcode {}", args.file.display(), xcode.version));

    ExitCode::SUCCESS

}
