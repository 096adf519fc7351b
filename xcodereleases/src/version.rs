//! Version numbers and ranges of versions.

use std::fmt;


/// A version, associated with [`Xcode`](crate::Xcode), [`Sdk`](crate::Sdk) and
/// [`Compiler`](crate::Compiler) values. It has a human-readable number, such as
/// "12.5.1", "5.9" or "14.0.0", a machine-readable build, such as "12E507",
/// "5.9.0.114.6" or "1400.0.29.202", or both.
///
/// The constructors guarantee that at least one of them is present, decoding keeps
/// whatever the document contains.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version {
    #[serde(skip_serializing_if = "Option::is_none")]
    number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    build: Option<String>,
}

impl Version {

    /// Create a version with both a number and a build.
    pub fn new(number: impl Into<String>, build: impl Into<String>) -> Self {
        Self { number: Some(number.into()), build: Some(build.into()) }
    }

    /// Create a version that only has a human-readable number.
    pub fn from_number(number: impl Into<String>) -> Self {
        Self { number: Some(number.into()), build: None }
    }

    /// Create a version that only has a machine-readable build.
    pub fn from_build(build: impl Into<String>) -> Self {
        Self { number: None, build: Some(build.into()) }
    }

    /// Create a version from optional parts, returning none if both are absent.
    pub fn from_parts(number: Option<String>, build: Option<String>) -> Option<Self> {
        if number.is_none() && build.is_none() {
            None
        } else {
            Some(Self { number, build })
        }
    }

    #[inline]
    pub fn number(&self) -> Option<&str> {
        self.number.as_deref()
    }

    #[inline]
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    /// Return true if the given string is equal to either the number or the build.
    pub fn matches(&self, s: &str) -> bool {
        self.number() == Some(s) || self.build() == Some(s)
    }

}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.number(), self.build()) {
            (Some(number), Some(build)) => write!(f, "{number} ({build})"),
            (Some(number), None) => f.write_str(number),
            (None, Some(build)) => f.write_str(build),
            (None, None) => f.write_str("?"),
        }
    }
}

/// A range of supported versions.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange {
    /// The minimum version included in this range.
    pub minimum: Version,
    /// The maximum version included in this range. When absent it should be read as
    /// "still current" or as "not known to be supported".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<Version>,
}

impl VersionRange {

    pub fn new(minimum: Version, maximum: Option<Version>) -> Self {
        Self { minimum, maximum }
    }

    /// Create a range with no known upper bound.
    pub fn from_minimum(minimum: Version) -> Self {
        Self { minimum, maximum: None }
    }

    #[inline]
    pub fn is_open_ended(&self) -> bool {
        self.maximum.is_none()
    }

}

impl fmt::Display for VersionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.maximum {
            Some(maximum) => write!(f, "{} - {}", self.minimum, maximum),
            None => write!(f, "{}+", self.minimum),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::{Version, VersionRange};

    #[test]
    fn from_parts_requires_one() {
        assert_eq!(Version::from_parts(None, None), None);
        assert_eq!(Version::from_parts(Some("15.0".to_string()), None), Some(Version::from_number("15.0")));
        assert_eq!(Version::from_parts(None, Some("15A240d".to_string())), Some(Version::from_build("15A240d")));
        assert_eq!(Version::from_parts(Some("15.0".to_string()), Some("15A240d".to_string())), Some(Version::new("15.0", "15A240d")));
    }

    #[test]
    fn matches_number_or_build() {
        let version = Version::new("15.0", "15A240d");
        assert!(version.matches("15.0"));
        assert!(version.matches("15A240d"));
        assert!(!version.matches("15"));
        assert!(!Version::from_build("7A1").matches("7.0"));
    }

    #[test]
    fn display() {
        assert_eq!(Version::new("15.0", "15A240d").to_string(), "15.0 (15A240d)");
        assert_eq!(Version::from_number("5.9").to_string(), "5.9");
        assert_eq!(Version::from_build("1400.0.29.202").to_string(), "1400.0.29.202");
        assert_eq!(VersionRange::from_minimum(Version::from_number("13.5")).to_string(), "13.5+");
        assert_eq!(VersionRange::new(Version::from_number("10.14"), Some(Version::from_number("11.0"))).to_string(), "10.14 - 11.0");
    }

}
