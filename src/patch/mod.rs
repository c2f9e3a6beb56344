//! Patchers which move a single resource from one version to the next.

/// CStorPoolInstance patcher.
pub mod cspi;
/// Events emitted while patching.
pub mod events;

pub use cspi::{CspiPatcher, PatcherConfig};
pub use events::{PatchEvent, PatchEvents, TracingEvents};

/// Result of a successful patch call.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PatchOutcome {
    /// The merge patch was sent to the cluster.
    Patched,
    /// The resource was already at the target version, nothing was sent.
    AlreadyAtVersion,
    /// The version label is at neither version, nothing was sent.
    NotEligible {
        /// The label value found on the resource.
        version: String,
    },
}
