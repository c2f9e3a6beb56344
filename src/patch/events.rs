use tracing::{info, warn};

/// Something worth reporting while patching a resource.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum PatchEvent {
    /// A patch is being attempted on the named resource.
    Patching { name: String },
    AlreadyAtVersion { name: String, version: String },
    /// The merge patch was accepted by the cluster.
    Patched { name: String },
    /// The version label matched neither version so the patch was skipped.
    NotEligible { name: String, version: String },
}

/// Receives the events of a patcher.
pub trait PatchEvents: Send + Sync {
    fn emit(&self, event: PatchEvent);
}

/// Forwards events to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEvents;

impl PatchEvents for TracingEvents {
    fn emit(&self, event: PatchEvent) {
        match event {
            PatchEvent::Patching { name } => info!(cspi.name = %name, "Patching cspi"),
            PatchEvent::AlreadyAtVersion { name, version } => {
                info!(cspi.name = %name, %version, "cspi already in {version} version")
            }
            PatchEvent::Patched { name } => info!(cspi.name = %name, "cspi {name} patched"),
            PatchEvent::NotEligible { name, version } => warn!(
                cspi.name = %name,
                %version,
                "cspi version is neither the source nor the target version, skipping patch"
            ),
        }
    }
}

impl<T: PatchEvents + ?Sized> PatchEvents for std::sync::Arc<T> {
    fn emit(&self, event: PatchEvent) {
        (**self).emit(event)
    }
}
