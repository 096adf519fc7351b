//! Release date and kind of an Xcode release.

use std::fmt;

use chrono::NaiveDate;

use crate::tag::ReleaseKindName;


/// A Gregorian date.
///
/// The date should be interpreted with the Gregorian calendar in the
/// `America/Los_Angeles` timezone, when a time of the day is needed use 10:00 AM local
/// time. The values are not checked for calendrical correctness.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseDate {
    pub year: i32,
    /// Month of the year, 1 to 12 by convention.
    pub month: u32,
    /// Day of the month, 1 to 31 by convention.
    pub day: u32,
}

impl ReleaseDate {

    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    /// Convert this date to a calendar date, returning none if it doesn't exist.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// The kind of an Xcode release.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseKind {
    pub name: ReleaseKindName,
    /// The number of the release, only relevant for pre-release kinds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
}

impl ReleaseKind {

    /// A publicly-released kind.
    pub const RELEASE: Self = Self { name: ReleaseKindName::RELEASE, number: None };

    /// A publicly-released kind, the name used before Xcode 12.1.1.
    pub const GM: Self = Self { name: ReleaseKindName::GM, number: None };

    pub fn new(name: ReleaseKindName, number: Option<u32>) -> Self {
        Self { name, number }
    }

    /// An almost-final kind with the given number.
    pub fn release_candidate(number: u32) -> Self {
        Self::new(ReleaseKindName::RELEASE_CANDIDATE, Some(number))
    }

    /// An almost-final kind with the given number, the name used before Xcode 12.1.1.
    pub fn gm_seed(number: u32) -> Self {
        Self::new(ReleaseKindName::GM_SEED, Some(number))
    }

    pub fn beta(number: u32) -> Self {
        Self::new(ReleaseKindName::BETA, Some(number))
    }

    /// A beta kind with the given number, the name used before Xcode 6.0.
    pub fn developer_preview(number: u32) -> Self {
        Self::new(ReleaseKindName::DEVELOPER_PREVIEW, Some(number))
    }

    /// See [`ReleaseKindName::is_released`].
    #[inline]
    pub fn is_released(&self) -> bool {
        self.name.is_released()
    }

    /// See [`ReleaseKindName::is_prerelease`].
    #[inline]
    pub fn is_prerelease(&self) -> bool {
        self.name.is_prerelease()
    }

    /// See [`ReleaseKindName::is_release_candidate`].
    #[inline]
    pub fn is_release_candidate(&self) -> bool {
        self.name.is_release_candidate()
    }

    /// See [`ReleaseKindName::is_beta`].
    #[inline]
    pub fn is_beta(&self) -> bool {
        self.name.is_beta()
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        self.name.is_unknown()
    }

}

impl fmt::Display for ReleaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {

        let label = match self.name.as_str() {
            "release" => "Release",
            "gm" => "GM",
            "rc" => "RC",
            "gmSeed" => "GM Seed",
            "beta" => "Beta",
            "dp" => "DP",
            raw => raw,
        };

        // Released kinds have no meaningful number.
        match self.number {
            Some(number) if self.is_prerelease() => write!(f, "{label} {number}"),
            _ => f.write_str(label),
        }

    }
}
