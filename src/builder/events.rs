//! Build progress events.
//!
//! Orchestrators that render their own progress attach a [`ProgressSink`]
//! to the build context. The events form a stable JSON schema: each event
//! serializes as a single object tagged by `reason`. New fields may be
//! added, but existing fields should not be removed or renamed.

use serde::Serialize;

/// A progress event emitted during a build.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "reason")]
pub enum BuildEvent {
    /// A builder phase started.
    #[serde(rename = "phase-started")]
    PhaseStarted {
        /// Phase name ("configure", "build", "install")
        phase: String,
        /// Target being built
        target: String,
    },

    /// A builder phase finished.
    #[serde(rename = "phase-finished")]
    PhaseFinished {
        /// Phase name
        phase: String,
        /// Target being built
        target: String,
        /// Whether the phase succeeded
        success: bool,
    },

    /// Pre-built libraries were installed.
    #[serde(rename = "libraries-installed")]
    LibrariesInstalled {
        /// Target being built
        target: String,
        /// Resolved library subdirectory the files came from
        lib_subdir: String,
        /// Number of files installed
        count: u64,
    },
}

impl BuildEvent {
    /// Create a phase-started event.
    pub fn phase_started(phase: impl Into<String>, target: impl Into<String>) -> Self {
        BuildEvent::PhaseStarted {
            phase: phase.into(),
            target: target.into(),
        }
    }

    /// Create a phase-finished event.
    pub fn phase_finished(phase: impl Into<String>, target: impl Into<String>, success: bool) -> Self {
        BuildEvent::PhaseFinished {
            phase: phase.into(),
            target: target.into(),
            success,
        }
    }

    /// Create a libraries-installed event.
    pub fn libraries_installed(
        target: impl Into<String>,
        lib_subdir: impl Into<String>,
        count: u64,
    ) -> Self {
        BuildEvent::LibrariesInstalled {
            target: target.into(),
            lib_subdir: lib_subdir.into(),
            count,
        }
    }

    /// Serialize this event to a JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Sink for build progress events.
///
/// Owned by the orchestrator. Its presence on a [`crate::BuildContext`]
/// signals that the orchestrator handles all user-visible reporting, so
/// builders suppress their default textual output.
pub trait ProgressSink: Send + Sync {
    /// Deliver one event.
    fn emit(&self, event: &BuildEvent);
}
