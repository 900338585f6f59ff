//! Build context - per-invocation source, destination, and target bundle.

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::builder::events::ProgressSink;
use crate::core::options::BuildOptions;
use crate::core::target::Target;

/// Build context passed into every builder phase.
///
/// Constructed once per build invocation by the orchestrator and passed by
/// shared reference through `configure`, `build`, and `install` in order.
/// Builders only read it.
#[derive(Clone)]
pub struct BuildContext {
    /// Source directory (externally supplied, must exist)
    pub source_dir: PathBuf,

    /// Install directory (created if absent)
    pub install_dir: PathBuf,

    /// Target being built
    pub target: Target,

    /// Declared build options for this target
    pub options: BuildOptions,

    /// Progress sink, if the orchestrator reports progress itself.
    ///
    /// When present, builders emit no textual output of their own and
    /// defer all reporting to the orchestrator.
    pub progress: Option<Arc<dyn ProgressSink>>,
}

impl fmt::Debug for BuildContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildContext")
            .field("source_dir", &self.source_dir)
            .field("install_dir", &self.install_dir)
            .field("target", &self.target)
            .field("options", &self.options)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl BuildContext {
    /// Create a new build context.
    pub fn new(source_dir: PathBuf, install_dir: PathBuf, target: Target) -> Self {
        BuildContext {
            source_dir,
            install_dir,
            target,
            options: BuildOptions::default(),
            progress: None,
        }
    }

    /// Set build options.
    pub fn with_options(mut self, options: BuildOptions) -> Self {
        self.options = options;
        self
    }

    /// Attach a progress sink.
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = Some(progress);
        self
    }
}
