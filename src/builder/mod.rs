//! Builder strategies.
//!
//! A builder is one strategy for obtaining a library: compiling it from
//! source, importing pre-built binaries, and so on. Every strategy
//! implements the same three-phase contract, invoked in fixed order by the
//! orchestrating build system:
//!
//! 1. `configure` - prepare the build (generators, caches, ...)
//! 2. `build` - produce artifacts
//! 3. `install` - materialize the normalized install layout
//!
//! Each phase either completes normally or returns an error that aborts
//! the pipeline for that target. Strategies are selected at construction
//! time from build configuration via [`BuilderRegistry`], never by runtime
//! type inspection.

pub mod context;
pub mod errors;
pub mod events;
pub mod imported_shared;
pub mod registry;

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

pub use context::BuildContext;
pub use errors::BuildError;
pub use events::{BuildEvent, ProgressSink};
pub use imported_shared::ImportedSharedBuilder;
pub use registry::BuilderRegistry;

/// Identifies a builder strategy in build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BuilderKind {
    /// Pre-built shared libraries installed as-is
    ImportedShared,
}

impl BuilderKind {
    /// Get the configuration name for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuilderKind::ImportedShared => "imported-shared",
        }
    }
}

impl fmt::Display for BuilderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder trait - the three-phase contract all strategies implement.
///
/// Builders hold no per-invocation state; every operation is a function of
/// the [`BuildContext`] at call time, so a single builder instance may be
/// invoked concurrently for different contexts.
pub trait Builder: Send + Sync {
    /// Get the strategy this builder implements.
    fn kind(&self) -> BuilderKind;

    /// Configure the build.
    fn configure(&self, ctx: &BuildContext) -> Result<()>;

    /// Execute the build.
    fn build(&self, ctx: &BuildContext) -> Result<()>;

    /// Install artifacts into the context's install directory.
    fn install(&self, ctx: &BuildContext) -> Result<()>;
}
