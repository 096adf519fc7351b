//! Xcode release records and the collection of all releases.

use std::slice;
use std::vec;

use crate::codec::{self, DecodeError};
use crate::link::Link;
use crate::release::{ReleaseDate, ReleaseKind};
use crate::tag::{CompilerName, LinkKindName, Platform};
use crate::toolchain::{Compiler, Sdk};
use crate::version::{Version, VersionRange};


/// A released Xcode.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Xcode {
    /// The name of the release, "Xcode" for almost all of them but the 1.x versions
    /// were called "Xcode Tools".
    pub name: String,
    pub version: Version,
    pub release_kind: ReleaseKind,
    pub release_date: ReleaseDate,
    /// The range of macOS versions that can run this Xcode.
    #[serde(rename = "supportedOSRange")]
    pub supported_os_range: VersionRange,
    /// The SDKs included in this Xcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sdks: Option<Vec<Sdk>>,
    /// The compilers included in this Xcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compilers: Option<Vec<Compiler>>,
    /// Links associated with this Xcode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    /// Whether this is the current release. This field has been added to the schema
    /// after the others, so it is false when absent and only encoded when true.
    #[serde(default)]
    #[serde(skip_serializing_if = "codec::is_default")]
    pub is_current: bool,
}

impl Xcode {

    /// Create a new release with no SDK, compiler nor link, not current.
    pub fn new(
        name: impl Into<String>,
        version: Version,
        release_kind: ReleaseKind,
        release_date: ReleaseDate,
        supported_os_range: VersionRange,
    ) -> Self {
        Self {
            name: name.into(),
            version,
            release_kind,
            release_date,
            supported_os_range,
            sdks: None,
            compilers: None,
            links: None,
            is_current: false,
        }
    }

    /// Find the first SDK for the given platform.
    pub fn sdk(&self, platform: &Platform) -> Option<&Sdk> {
        self.sdks.as_deref()?.iter().find(|sdk| &sdk.platform == platform)
    }

    /// Find the first compiler with the given name.
    pub fn compiler(&self, name: &CompilerName) -> Option<&Compiler> {
        self.compilers.as_deref()?.iter().find(|compiler| &compiler.name == name)
    }

    /// Find the first link of the given kind.
    pub fn link(&self, name: &LinkKindName) -> Option<&Link> {
        self.links.as_deref()?.iter().find(|link| &link.kind.name == name)
    }

}

/// An ordered list of [`Xcode`] releases, encoded as a bare JSON array.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct XcodeReleases {
    pub xcodes: Vec<Xcode>,
}

impl XcodeReleases {

    pub fn new(xcodes: Vec<Xcode>) -> Self {
        Self { xcodes }
    }

    /// Decode an all-releases document, see [`codec::decode`].
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> codec::Result<Self> {
        codec::decode(bytes)
    }

    /// Encode this collection to a JSON document.
    #[inline]
    pub fn to_vec(&self) -> Vec<u8> {
        codec::encode(self)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Xcode> {
        self.xcodes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.xcodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xcodes.is_empty()
    }

    /// Return the publicly released subset of this collection, in order.
    pub fn released(&self) -> Self {
        self.iter()
            .filter(|xcode| xcode.release_kind.is_released())
            .cloned()
            .collect()
    }

    /// Decode each element of the given array, stopping at the first error.
    pub(crate) fn from_elements(elements: &[serde_json::Value]) -> codec::Result<Self> {
        elements.iter()
            .enumerate()
            .map(|(index, element)| {
                codec::decode_value::<Xcode>(element)
                    .map_err(|cause| DecodeError::IndexedElement { index, cause: Box::new(cause) })
            })
            .collect()
    }

}

impl FromIterator<Xcode> for XcodeReleases {
    fn from_iter<T: IntoIterator<Item = Xcode>>(iter: T) -> Self {
        Self { xcodes: iter.into_iter().collect() }
    }
}

impl IntoIterator for XcodeReleases {
    type Item = Xcode;
    type IntoIter = vec::IntoIter<Xcode>;
    fn into_iter(self) -> Self::IntoIter {
        self.xcodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a XcodeReleases {
    type Item = &'a Xcode;
    type IntoIter = slice::Iter<'a, Xcode>;
    fn into_iter(self) -> Self::IntoIter {
        self.xcodes.iter()
    }
}
