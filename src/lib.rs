//! Stevedore - builder strategies for pre-built native libraries.
//!
//! This crate provides the builder layer of a multi-builder build system:
//! a three-phase contract (`configure`, `build`, `install`) implemented by
//! pluggable strategies, together with the build context and options the
//! orchestrating system passes into them.

pub mod builder;
pub mod core;
pub mod util;

pub use crate::core::{
    options::{BuildOptions, OptionValue},
    platform::{android_abi_name, Arch},
    target::Target,
};

pub use builder::{
    BuildContext, BuildEvent, Builder, BuilderKind, BuilderRegistry, ImportedSharedBuilder,
    ProgressSink,
};
