//! Links to resources associated with an Xcode release.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::io::{self, Read};

use sha1::{Digest, Sha1};

use crate::tag::{Checksum, LinkKindName, Platform};


/// Digests of a linked resource, keyed by algorithm. On the wire this is a flat JSON
/// object such as `{"sha1": "..."}`.
pub type Checksums = BTreeMap<Checksum, String>;

/// A description of the kind of resource pointed to by a [`Link`].
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkKind {
    pub name: LinkKindName,
    /// The platform supported by the simulator runtime, only relevant when the name is
    /// [`LinkKindName::SIMULATOR_RUNTIME`]. It is encoded as-is whenever present.
    #[serde(rename = "platform")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulator_runtime_platform: Option<Platform>,
}

impl LinkKind {

    /// Direct download of an Xcode installer.
    pub const XCODE: Self = Self { name: LinkKindName::XCODE, simulator_runtime_platform: None };

    /// The release notes of an Xcode version.
    pub const RELEASE_NOTES: Self = Self { name: LinkKindName::RELEASE_NOTES, simulator_runtime_platform: None };

    pub fn new(name: LinkKindName) -> Self {
        Self { name, simulator_runtime_platform: None }
    }

    /// Direct download of a simulator runtime for the given platform.
    pub fn simulator_runtime(platform: Platform) -> Self {
        Self { name: LinkKindName::SIMULATOR_RUNTIME, simulator_runtime_platform: Some(platform) }
    }

}

/// A link associated with an Xcode release.
///
/// Not all links point to something downloadable, they can for example point to the
/// release notes of a version.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Location of the resource, stored verbatim.
    pub url: String,
    /// Size of the resource in bytes, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_in_bytes: Option<u64>,
    /// Checksums of the resource, used to guarantee the integrity of downloads.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksums: Option<Checksums>,
    pub kind: LinkKind,
}

impl Link {

    pub fn new(url: impl Into<String>, kind: LinkKind) -> Self {
        Self { url: url.into(), size_in_bytes: None, checksums: None, kind }
    }

    /// Return this link with the given size.
    pub fn with_size(mut self, size_in_bytes: u64) -> Self {
        self.size_in_bytes = Some(size_in_bytes);
        self
    }

    /// Return this link with the given checksum added, replacing any previous digest
    /// for the same algorithm.
    pub fn with_checksum(mut self, algorithm: Checksum, digest: impl Into<String>) -> Self {
        self.checksums.get_or_insert_with(Checksums::new).insert(algorithm, digest.into());
        self
    }

    /// Get the digest for the given algorithm, if any.
    pub fn checksum(&self, algorithm: &Checksum) -> Option<&str> {
        self.checksums.as_ref()?.get(algorithm).map(String::as_str)
    }

    /// Read the whole resource from the given reader and check it against the size and
    /// the SHA-1 checksum of this link.
    pub fn check<R: Read>(&self, mut reader: R) -> io::Result<LinkCheck> {

        let mut digest = Sha1::new();
        let size = io::copy(&mut reader, &mut digest)?;

        let mut sha1 = String::with_capacity(40);
        for b in digest.finalize().iter() {
            write!(sha1, "{b:02x}").unwrap();
        }

        Ok(LinkCheck {
            size_valid: self.size_in_bytes.map(|expected| expected == size),
            sha1_valid: self.checksum(&Checksum::SHA1).map(|expected| expected.eq_ignore_ascii_case(&sha1)),
            size,
            sha1,
        })

    }

}

/// Result of [`Link::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkCheck {
    /// Actual size of the resource.
    pub size: u64,
    /// Actual SHA-1 of the resource, lower case hexadecimal.
    pub sha1: String,
    /// Whether the size matches, none if the link has no size.
    pub size_valid: Option<bool>,
    /// Whether the SHA-1 matches, none if the link has no SHA-1 checksum.
    pub sha1_valid: Option<bool>,
}

impl LinkCheck {

    /// Return true if no known property of the link is mismatching.
    pub fn is_valid(&self) -> bool {
        self.size_valid != Some(false) && self.sha1_valid != Some(false)
    }

}
