//! SDKs and compilers shipped as part of an Xcode release.

use crate::tag::{CompilerName, Platform};
use crate::version::{Version, VersionRange};


/// A compiler shipped as part of an Xcode release.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Compiler {
    pub name: CompilerName,
    pub version: Version,
}

impl Compiler {

    pub fn new(name: CompilerName, version: Version) -> Self {
        Self { name, version }
    }

    pub fn gcc(version: Version) -> Self {
        Self::new(CompilerName::GCC, version)
    }

    pub fn llvm_gcc(version: Version) -> Self {
        Self::new(CompilerName::LLVM_GCC, version)
    }

    pub fn llvm(version: Version) -> Self {
        Self::new(CompilerName::LLVM, version)
    }

    pub fn clang(version: Version) -> Self {
        Self::new(CompilerName::CLANG, version)
    }

    pub fn swift(version: Version) -> Self {
        Self::new(CompilerName::SWIFT, version)
    }

}

/// A development SDK shipped as part of an Xcode release.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Sdk {
    /// The platform targeted by this SDK.
    pub platform: Platform,
    /// The platform's OS version.
    pub version: Version,
    /// The range of OS versions the SDK can deploy to, absent if unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment_range: Option<VersionRange>,
}

impl Sdk {

    pub fn new(platform: Platform, version: Version) -> Self {
        Self { platform, version, deployment_range: None }
    }

    pub fn macos(version: Version) -> Self {
        Self::new(Platform::MACOS, version)
    }

    pub fn ios(version: Version) -> Self {
        Self::new(Platform::IOS, version)
    }

    pub fn watchos(version: Version) -> Self {
        Self::new(Platform::WATCHOS, version)
    }

    pub fn tvos(version: Version) -> Self {
        Self::new(Platform::TVOS, version)
    }

    pub fn visionos(version: Version) -> Self {
        Self::new(Platform::VISIONOS, version)
    }

    /// Return this SDK with the given deployment range.
    pub fn with_deployment_range(mut self, range: VersionRange) -> Self {
        self.deployment_range = Some(range);
        self
    }

}
