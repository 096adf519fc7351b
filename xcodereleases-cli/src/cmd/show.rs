//! Implementation of the 'show' command.

use std::process::ExitCode;

use chrono::Local;

use xcodereleases::Xcode;

use crate::parse::ShowArgs;
use crate::format::{DATE_FORMAT, SizeFmt, TimeDeltaFmt};

use super::{Cli, find_release, load_releases_or_log};


pub fn show(cli: &mut Cli, args: &ShowArgs) -> ExitCode {

    let Some(releases) = load_releases_or_log(cli, &args.input.input) else {
        return ExitCode::FAILURE;
    };

    let Some(xcode) = find_release(cli, &releases, &args.version) else {
        return ExitCode::FAILURE;
    };

    show_xcode(cli, xcode);
    ExitCode::SUCCESS

}

fn show_xcode(cli: &mut Cli, xcode: &Xcode) {

    let mut table = cli.out.table(2);

    table.cell("name").format("Name");
    table.cell(&xcode.name);

    table.cell("version").format("Version");
    table.cell(xcode.version.number().unwrap_or_default());

    table.cell("build").format("Build");
    table.cell(xcode.version.build().unwrap_or_default());

    table.cell("kind").format("Kind");
    table.cell(&xcode.release_kind.name)
        .format(&xcode.release_kind);

    if let Some(number) = xcode.release_kind.number {
        table.cell("kind_number").format("Kind number");
        table.cell(number);
    }

    table.cell("release_date").format("Release date");
    let mut cell = table.cell(xcode.release_date);
    if let Some(date) = xcode.release_date.to_naive_date() {
        let today = Local::now().date_naive();
        cell.format(format_args!("{} ({})", date.format(DATE_FORMAT), TimeDeltaFmt(today - date)));
    }

    table.cell("current").format("Current");
    table.cell(xcode.is_current)
        .format(if xcode.is_current { "yes" } else { "no" });

    table.cell("supported_os_range").format("Supported macOS");
    table.cell(&xcode.supported_os_range);

    for sdk in xcode.sdks.iter().flatten() {
        table.cell(format_args!("sdk:{}", sdk.platform)).format(format_args!("{} SDK", sdk.platform));
        match sdk.deployment_range {
            Some(ref range) => {
                table.cell(format_args!("{} ({range})", sdk.version))
                    .format(format_args!("{} (deploys to {range})", sdk.version));
            }
            None => {
                table.cell(&sdk.version);
            }
        }
    }

    for compiler in xcode.compilers.iter().flatten() {
        table.cell(format_args!("compiler:{}", compiler.name)).format(format_args!("Compiler {}", compiler.name));
        table.cell(&compiler.version);
    }

    for link in xcode.links.iter().flatten() {

        let mut title = link.kind.name.to_string();
        if let Some(platform) = &link.kind.simulator_runtime_platform {
            title.push_str(" (");
            title.push_str(platform.as_str());
            title.push(')');
        }

        table.cell(format_args!("link:{}", link.kind.name)).format(&title);
        table.cell(&link.url);

        if let Some(size) = link.size_in_bytes {
            table.cell("link_size").format("  Size");
            table.cell(size).format(SizeFmt(size));
        }

        for (algorithm, digest) in link.checksums.iter().flatten() {
            table.cell(format_args!("link_checksum:{algorithm}")).format(format_args!("  {}", algorithm.as_str().to_uppercase()));
            table.cell(digest);
        }

    }

}
