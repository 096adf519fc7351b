//! Open vocabularies of names, such as platforms or checksum algorithms.
//!
//! All of them share the same representation: a [`Tag`] holding the raw string as it
//! appears in the JSON document. Well-known values are provided as constants but any
//! other string is a valid tag, decoding never rejects an unknown name and the raw
//! value is always encoded back unchanged.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::borrow::Cow;
use std::{fmt, hash};

use crate::sealed::Sealed;


/// A vocabulary of tags, implemented by the marker types of this module.
pub trait TagKind: Sealed + Sized {

    /// Human-readable name of the vocabulary, used by debug formatting.
    const NAME: &'static str;

    /// The raw values of the well-known constants of the vocabulary.
    const KNOWN: &'static [&'static str];

}

/// A raw string name belonging to the vocabulary `K`. Two tags are equal if their raw
/// values are equal, byte per byte, no case folding is applied.
pub struct Tag<K: TagKind> {
    /// The raw value, borrowed for constants.
    raw: Cow<'static, str>,
    kind: PhantomData<fn() -> K>,
}

impl<K: TagKind> Tag<K> {

    /// Create a new tag from its raw value, any string is accepted.
    #[inline]
    pub fn new(raw: impl Into<Cow<'static, str>>) -> Self {
        Self { raw: raw.into(), kind: PhantomData }
    }

    /// Create a new tag from a static string, usable in constant context.
    #[inline]
    pub const fn from_static(raw: &'static str) -> Self {
        Self { raw: Cow::Borrowed(raw), kind: PhantomData }
    }

    /// The raw value of this tag.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.raw.into_owned()
    }

    /// Return true if this tag is equal to one of the well-known constants of its
    /// vocabulary.
    pub fn is_known(&self) -> bool {
        K::KNOWN.contains(&self.as_str())
    }

}

impl<K: TagKind> Clone for Tag<K> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone(), kind: PhantomData }
    }
}

impl<K: TagKind> PartialEq for Tag<K> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<K: TagKind> Eq for Tag<K> { }

impl<K: TagKind> PartialOrd for Tag<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: TagKind> Ord for Tag<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl<K: TagKind> hash::Hash for Tag<K> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl<K: TagKind> fmt::Display for Tag<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<K: TagKind> fmt::Debug for Tag<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.as_str()).finish()
    }
}

impl<K: TagKind> From<&'static str> for Tag<K> {
    fn from(value: &'static str) -> Self {
        Self::from_static(value)
    }
}

impl<K: TagKind> From<String> for Tag<K> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<K: TagKind> serde::Serialize for Tag<K> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, K: TagKind> serde::Deserialize<'de> for Tag<K> {

    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {

        struct Visitor<K>(PhantomData<fn() -> K>);
        impl<'de, K: TagKind> serde::de::Visitor<'de> for Visitor<K> {

            type Value = Tag<K>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a string ({})", K::NAME)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Tag::new(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(Tag::new(v.to_string()))
            }

        }

        deserializer.deserialize_string(Visitor(PhantomData))

    }

}

/// Declare the marker type of a vocabulary, its alias and its well-known constants.
macro_rules! tag_kind {
    (
        $( #[ $meta:meta ] )*
        $alias:ident, $kind:ident, $name:literal {
            $(
                $( #[ $const_meta:meta ] )*
                $const:ident = $raw:literal
            ),* $(,)?
        }
    ) => {

        #[doc = concat!("Marker of the [`", stringify!($alias), "`] vocabulary.")]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $kind {}

        impl Sealed for $kind { }

        impl TagKind for $kind {
            const NAME: &'static str = $name;
            const KNOWN: &'static [&'static str] = &[ $( $raw ),* ];
        }

        $( #[ $meta ] )*
        pub type $alias = Tag<$kind>;

        impl Tag<$kind> {
            $(
                $( #[ $const_meta ] )*
                pub const $const: Self = Self::from_static($raw);
            )*
        }

    };
}

tag_kind! {
    /// The name of a CPU architecture.
    Architecture, ArchitectureKind, "Architecture" {
        /// Apple Silicon.
        ARM64 = "arm64",
        /// 64-bit Intel.
        X86_64 = "x86_64",
        /// 32-bit Intel.
        I386 = "i386",
        /// PowerPC.
        POWERPC = "ppc",
    }
}

tag_kind! {
    /// The name of a checksum algorithm, used as key of [`Checksums`](crate::Checksums).
    Checksum, ChecksumKind, "Checksum" {
        SHA1 = "sha1",
    }
}

tag_kind! {
    /// The name of an Apple platform.
    Platform, PlatformKind, "Platform" {
        MACOS = "macOS",
        IOS = "iOS",
        WATCHOS = "watchOS",
        TVOS = "tvOS",
        VISIONOS = "visionOS",
    }
}

tag_kind! {
    /// The name of a [`Compiler`](crate::Compiler).
    CompilerName, CompilerNameKind, "CompilerName" {
        GCC = "gcc",
        LLVM_GCC = "llvm_gcc",
        LLVM = "llvm",
        CLANG = "clang",
        SWIFT = "swift",
    }
}

tag_kind! {
    /// The name of a [`LinkKind`](crate::LinkKind).
    LinkKindName, LinkKindNameKind, "LinkKindName" {
        /// Direct download of the Xcode installer.
        XCODE = "Xcode",
        /// Release notes of the Xcode version.
        RELEASE_NOTES = "Release Notes",
        /// Direct download of a simulator runtime.
        SIMULATOR_RUNTIME = "Simulator Runtime",
    }
}

tag_kind! {
    /// The name of a [`ReleaseKind`](crate::ReleaseKind).
    ReleaseKindName, ReleaseKindNameKind, "ReleaseKindName" {
        /// Publicly released version.
        RELEASE = "release",
        /// Publicly released version, the name used before Xcode 12.1.1.
        GM = "gm",
        /// Almost-final version.
        RELEASE_CANDIDATE = "rc",
        /// Almost-final version, the name used before Xcode 12.1.1.
        GM_SEED = "gmSeed",
        /// Pre-release version.
        BETA = "beta",
        /// Pre-release version, the name used before Xcode 6.0.
        DEVELOPER_PREVIEW = "dp",
    }
}

impl ReleaseKindName {

    /// Whether the name is a publicly-released kind, `release` or `gm`.
    pub fn is_released(&self) -> bool {
        *self == Self::RELEASE || *self == Self::GM
    }

    /// Whether the name is any kind of non-released version, this includes unknown
    /// names.
    #[inline]
    pub fn is_prerelease(&self) -> bool {
        !self.is_released()
    }

    /// Whether the name is an about-to-be-released kind, `rc` or `gmSeed`.
    pub fn is_release_candidate(&self) -> bool {
        *self == Self::RELEASE_CANDIDATE || *self == Self::GM_SEED
    }

    /// Whether the name is a beta kind, `beta` or `dp`.
    pub fn is_beta(&self) -> bool {
        *self == Self::BETA || *self == Self::DEVELOPER_PREVIEW
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        !self.is_known()
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn raw_value_preserved() {
        let platform = Platform::new("iOS ");
        assert_eq!(platform.as_str(), "iOS ");
        assert_ne!(platform, Platform::IOS);
        assert_ne!(Platform::new("ios"), Platform::IOS);
        assert_eq!(Platform::new(String::from("iOS")), Platform::IOS);
    }

    #[test]
    fn known_values() {
        assert!(Platform::VISIONOS.is_known());
        assert!(Checksum::new("sha1").is_known());
        assert!(!Checksum::new("sha256").is_known());
        assert!(Architecture::from("ppc").is_known());
        assert!(!CompilerName::new("rustc").is_known());
    }

    #[test]
    fn release_kind_name_predicates() {

        for name in [ReleaseKindName::RELEASE, ReleaseKindName::GM] {
            assert!(name.is_released());
            assert!(!name.is_prerelease());
            assert!(!name.is_release_candidate());
            assert!(!name.is_beta());
            assert!(!name.is_unknown());
        }

        for name in [ReleaseKindName::RELEASE_CANDIDATE, ReleaseKindName::GM_SEED] {
            assert!(!name.is_released());
            assert!(name.is_prerelease());
            assert!(name.is_release_candidate());
            assert!(!name.is_beta());
            assert!(!name.is_unknown());
        }

        for name in [ReleaseKindName::BETA, ReleaseKindName::DEVELOPER_PREVIEW] {
            assert!(name.is_prerelease());
            assert!(name.is_beta());
            assert!(!name.is_unknown());
        }

        let name = ReleaseKindName::new("alpha");
        assert!(name.is_unknown());
        assert!(name.is_prerelease());
        assert!(!name.is_beta());
        assert!(!name.is_release_candidate());

        // Raw values are case sensitive.
        assert!(ReleaseKindName::new("RC").is_unknown());

    }

    #[test]
    fn ordering_by_raw_value() {
        let mut checksums = vec![Checksum::new("sha256"), Checksum::SHA1, Checksum::new("md5")];
        checksums.sort();
        assert_eq!(checksums, [Checksum::new("md5"), Checksum::SHA1, Checksum::new("sha256")]);
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", Platform::MACOS), r#"Platform("macOS")"#);
        assert_eq!(format!("{}", LinkKindName::RELEASE_NOTES), "Release Notes");
    }

}
