//! Core data structures for Stevedore.
//!
//! This module contains the foundational types shared by all builder
//! strategies:
//! - Target architectures and platform naming
//! - Build targets
//! - Declarative per-target build options

pub mod options;
pub mod platform;
pub mod target;

pub use options::{BuildOptions, OptionValue};
pub use platform::{android_abi_name, Arch};
pub use target::Target;
