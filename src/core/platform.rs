//! Target architectures and platform-specific ABI naming.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A supported target CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arch {
    /// 64-bit ARM
    #[serde(alias = "aarch64")]
    Arm64,

    /// 32-bit ARM
    #[serde(alias = "arm")]
    Armv7,

    /// 64-bit x86
    #[serde(rename = "x86_64", alias = "amd64")]
    X86_64,

    /// 32-bit x86
    #[serde(alias = "i686")]
    X86,
}

impl Arch {
    /// Get the canonical name for this architecture.
    pub fn as_str(&self) -> &'static str {
        match self {
            Arch::Arm64 => "arm64",
            Arch::Armv7 => "armv7",
            Arch::X86_64 => "x86_64",
            Arch::X86 => "x86",
        }
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Android ABI directory names, keyed by architecture.
///
/// Kept as a lookup table rather than an exhaustive match so that
/// architectures without an Android ABI resolve to the empty string
/// instead of forcing every caller to handle a missing mapping.
static ANDROID_ABI_MAP: &[(Arch, &str)] = &[
    (Arch::Arm64, "arm64-v8a"),
    (Arch::Armv7, "armeabi-v7a"),
    (Arch::X86_64, "x86_64"),
    (Arch::X86, "x86"),
];

/// Resolve the Android ABI directory name for an architecture.
///
/// Returns the empty string for architectures with no Android ABI mapping.
pub fn android_abi_name(arch: Arch) -> &'static str {
    ANDROID_ABI_MAP
        .iter()
        .find(|(a, _)| *a == arch)
        .map(|(_, name)| *name)
        .unwrap_or("")
}
