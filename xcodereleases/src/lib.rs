//! Data model and JSON codec for the Xcode releases feed.
//!
//! The feed is a bare JSON array of release records, each describing one shipped
//! build of Xcode: its version, release kind and date, the macOS versions able to
//! run it, the SDKs and compilers it ships and links to associated resources. This
//! crate doesn't fetch anything, it decodes the bytes given by the caller and
//! encodes records back to bytes, see the [`codec`] module.

pub mod tag;
pub mod version;
pub mod release;
pub mod toolchain;
pub mod link;
pub mod xcode;
pub mod codec;

pub use tag::{Tag, TagKind, Architecture, Checksum, Platform, CompilerName, LinkKindName, ReleaseKindName};
pub use version::{Version, VersionRange};
pub use release::{ReleaseDate, ReleaseKind};
pub use toolchain::{Compiler, Sdk};
pub use link::{Link, LinkKind, LinkCheck, Checksums};
pub use xcode::{Xcode, XcodeReleases};
pub use codec::{DecodeError, Record, decode, decode_str, decode_value, encode, encode_pretty, encode_string, encode_value};


/// Conventional location of the document listing all known Xcode releases.
pub const ALL_RELEASES_URL: &str = "https://xcodereleases.com/api/all.json";

/// Conventional location of the document listing publicly released Xcode versions.
pub const RELEASED_RELEASES_URL: &str = "https://xcodereleases.com/api/released.json";


/// Internal module used for sealing traits.
mod sealed {

    /// Internal sealed trait that be extended from by traits to be sealed.
    pub trait Sealed {  }

}
