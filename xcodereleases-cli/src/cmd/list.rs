//! Implementation of the 'list' command.

use std::process::ExitCode;

use chrono::Local;

use xcodereleases::Xcode;

use crate::parse::ListArgs;
use crate::format::{DATE_FORMAT, TimeDeltaFmt};

use super::{Cli, load_releases_or_log};


pub fn list(cli: &mut Cli, args: &ListArgs) -> ExitCode {

    let Some(releases) = load_releases_or_log(cli, &args.input.input) else {
        return ExitCode::FAILURE;
    };

    let today = Local::now().date_naive();

    let mut table = cli.out.table(6);

    table.cell("name").format("Name");
    table.cell("version").format("Version");
    table.cell("build").format("Build");
    table.cell("kind").format("Kind");
    table.cell("release_date").format("Release date");
    table.cell("current").format("Current");
    table.sep();

    for xcode in releases.iter() {

        if !keep(xcode, args) {
            continue;
        }

        table.cell(&xcode.name);
        table.cell(xcode.version.number().unwrap_or_default());
        table.cell(xcode.version.build().unwrap_or_default());
        table.cell(&xcode.release_kind.name)
            .format(&xcode.release_kind);

        let release_date = xcode.release_date;
        let mut cell = table.cell(release_date);
        if let Some(date) = release_date.to_naive_date() {
            cell.format(format_args!("{} ({})", date.format(DATE_FORMAT), TimeDeltaFmt(today - date)));
        }

        if xcode.is_current {
            table.cell("current").format("*");
        } else {
            table.cell("");
        }

    }

    ExitCode::SUCCESS

}

/// Return true if the release is kept by the arguments' filters.
fn keep(xcode: &Xcode, args: &ListArgs) -> bool {

    if args.released && !xcode.release_kind.is_released() {
        return false;
    }

    if !args.filter.is_empty() {
        let number = xcode.version.number().unwrap_or_default();
        let build = xcode.version.build().unwrap_or_default();
        if !args.filter.iter().any(|s| number.contains(s.as_str()) || build.contains(s.as_str())) {
            return false;
        }
    }

    true

}
