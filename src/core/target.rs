//! Build target definition.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::platform::Arch;

/// A build target: one library for one architecture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Target name (usually the library name)
    pub name: String,

    /// Target CPU architecture
    pub arch: Arch,
}

impl Target {
    /// Create a new target.
    pub fn new(name: impl Into<String>, arch: Arch) -> Self {
        Target {
            name: name.into(),
            arch,
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.arch)
    }
}
