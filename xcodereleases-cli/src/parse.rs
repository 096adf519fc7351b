//! Implementation of the command line parser, using clap struct derivation.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};


// ================= //
//    MAIN COMMAND   //
// ================= //

/// Command line utility for inspecting, normalizing and verifying documents of the
/// Xcode releases feed.
///
/// This utility never fetches anything, the document is read from a local file or
/// from the standard input, it can be downloaded from
/// 'https://xcodereleases.com/api/all.json' for example.
#[derive(Debug, Parser)]
#[command(name = "xcodereleases", version, author, disable_help_subcommand = true, max_term_width = 140)]
pub struct CliArgs {
    #[command(subcommand)]
    pub cmd: CliCmd,
    /// Enable verbose output, the more -v argument you put, the more verbose the
    /// utility will be.
    #[arg(short, env = "XCR_VERBOSE", action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Change the default output format of the utility.
    #[arg(long, env = "XCR_OUTPUT", default_value = "human")]
    pub output: CliOutput,
}

#[derive(Debug, Subcommand)]
pub enum CliCmd {
    List(ListArgs),
    Show(ShowArgs),
    Fmt(FmtArgs),
    Verify(VerifyArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutput {
    /// Human readable output, it depends on the actual command being used and is not
    /// guaranteed to be stable across releases, for that you should prefer using
    /// 'machine' output. With this format, the verbosity is used to show more
    /// informative data.
    Human,
    /// Machine output mode to allow parsing by other programs, using tab ('\t', 0x09)
    /// separated values where the first value defines which kind of data to follow on
    /// the line, a line return ('\n', 0x0A) is used to split every line. If any line
    /// return or tab is encoded into a value within the line, it is escaped with the
    /// two characters '\n' (for line return) or '\t' (for tab), these are the only two
    /// escapes used. This mode is always verbose, and verbosity will not have any effect
    /// on it. If the utility exit with a failure code, you should expect finding a log
    /// message prefixed with `error_`, describing the error(s) causing the exit.
    Machine,
}

/// Common argument for the document to read.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Path to an all-releases JSON document, or '-' to read it from standard input.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

// ================= //
//    LIST COMMAND   //
// ================= //

/// List the releases of a document.
///
/// The releases are listed in the document's order, which is by convention the most
/// recent first.
#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Only keep publicly released versions, excluding betas and release candidates.
    #[arg(long)]
    pub released: bool,
    /// Only keep releases whose version number or build contains one of the given
    /// strings.
    #[arg(short, long)]
    pub filter: Vec<String>,
}

// ================= //
//    SHOW COMMAND   //
// ================= //

/// Show all details of a release.
///
/// This includes the SDKs and their deployment ranges, the compilers and the links
/// associated to the release with their size and checksums when known.
#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// The version number or build of the release, the first matching release of the
    /// document is shown.
    pub version: String,
}

// ================= //
//    FMT COMMAND    //
// ================= //

/// Decode and encode again a document to the standard output in its canonical form.
///
/// Absent optional fields are omitted, so as the current release marker when it is
/// false. Unknown fields are dropped.
#[derive(Debug, Args)]
pub struct FmtArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Indent the output document.
    #[arg(long)]
    pub pretty: bool,
    /// Only keep publicly released versions, producing the released-only document.
    #[arg(long)]
    pub released: bool,
}

// ================= //
//   VERIFY COMMAND  //
// ================= //

/// Verify a downloaded Xcode installer against the size and SHA-1 checksum of the
/// release's Xcode link.
#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// The version number or build of the release, the first matching release of the
    /// document is used.
    pub version: String,
    /// Path to the downloaded file to check.
    pub file: PathBuf,
}
