//! Builder error types.

use std::path::PathBuf;

use thiserror::Error;

/// Error during a builder phase.
///
/// All variants are fatal for the current target: the orchestrator stops
/// that target's pipeline and reports the error. Partial install state is
/// left on disk; callers needing atomicity handle it above this layer.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The resolved library source directory does not exist.
    #[error(
        "library directory not found: {}\n  source_dir: {}\n  lib_subdir: {lib_subdir}",
        .path.display(),
        .source_dir.display()
    )]
    LibDirNotFound {
        /// Resolved directory that was expected to exist
        path: PathBuf,
        /// Source directory the subdir was joined with
        source_dir: PathBuf,
        /// Subdirectory value after placeholder substitution
        lib_subdir: String,
    },

    /// A file named in `lib_files` does not exist.
    #[error("library file not found: {}", .path.display())]
    LibFileNotFound {
        /// The missing file
        path: PathBuf,
    },
}
