use super::{
    events::{PatchEvent, PatchEvents, TracingEvents},
    PatchOutcome,
};
use crate::{
    cspi::{base_version, CStorPoolInstance, CspiClient},
    error::Error,
};
use kube::ResourceExt;
use serde_json::Value;
use std::{future::Future, time::Duration};

/// Everything a [`CspiPatcher`] needs, there are no hidden defaults.
pub struct PatcherConfig<C> {
    /// Client used to reach the cluster.
    pub client: C,
    /// Json merge patch document applied when the resource is at the source version.
    pub patch: Vec<u8>,
    /// Upper bound for each request to the cluster, unbounded when `None`.
    pub request_timeout: Option<Duration>,
}

impl<C> PatcherConfig<C> {
    /// Create a new config from the client and the merge patch document.
    pub fn new(client: C, patch: Vec<u8>) -> Self {
        Self {
            client,
            patch,
            request_timeout: None,
        }
    }
    /// Bound every request to the cluster by the given timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// Upgrades a single CStorPoolInstance.
///
/// The resource must be loaded with [`CspiPatcher::get`] before it can be checked or patched.
/// The local copy is never modified once loaded, the cluster remains the source of truth.
pub struct CspiPatcher<C, E = TracingEvents> {
    object: Option<CStorPoolInstance>,
    data: Vec<u8>,
    client: C,
    request_timeout: Option<Duration>,
    events: E,
}

impl<C: CspiClient> CspiPatcher<C> {
    /// Create a new patcher which reports through `tracing`.
    pub fn new(config: PatcherConfig<C>) -> Self {
        Self {
            object: None,
            data: config.patch,
            client: config.client,
            request_timeout: config.request_timeout,
            events: TracingEvents,
        }
    }
}

impl<C: CspiClient, E: PatchEvents> CspiPatcher<C, E> {
    /// Report the patch events to `events` instead.
    pub fn with_events<O: PatchEvents>(self, events: O) -> CspiPatcher<C, O> {
        CspiPatcher {
            object: self.object,
            data: self.data,
            client: self.client,
            request_timeout: self.request_timeout,
            events,
        }
    }

    /// The loaded resource, if any.
    pub fn object(&self) -> Option<&CStorPoolInstance> {
        self.object.as_ref()
    }

    /// Load the named resource from the cluster.
    /// On failure any previously loaded resource is kept.
    pub async fn get(&mut self, name: &str, namespace: &str) -> Result<(), Error> {
        let cspi = bounded(
            self.request_timeout,
            "get",
            name,
            self.client.get(name, namespace),
        )
        .await?
        .map_err(|source| Error::Get {
            name: name.to_string(),
            namespace: namespace.to_string(),
            source,
        })?;
        self.object = Some(cspi);
        Ok(())
    }

    /// Check that the resource is at either the `from` or the `to` version.
    /// Any `-` suffix is ignored on all three versions.
    pub fn pre_checks(&self, from: &str, to: &str) -> Result<(), Error> {
        let object = self.object.as_ref().ok_or(Error::NilObject {})?;
        let version = base_version(object.version());
        if version != base_version(from) && version != base_version(to) {
            return Err(Error::VersionMismatch {
                version: object.version().to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }
        Ok(())
    }

    /// Move the resource from the `from` version to the `to` version.
    ///
    /// The merge patch is only sent when the version label is exactly `from`. A resource
    /// exactly at `to` is left alone, as is one at neither version (eg: `to` with a build
    /// suffix), which [`PatchOutcome::NotEligible`] reports.
    pub async fn patch(&self, from: &str, to: &str) -> Result<PatchOutcome, Error> {
        let object = self.object.as_ref().ok_or(Error::NilObject {})?;
        let name = object.name_any();
        self.events.emit(PatchEvent::Patching { name: name.clone() });

        let version = object.version();
        if version == to {
            self.events.emit(PatchEvent::AlreadyAtVersion {
                name,
                version: to.to_string(),
            });
            return Ok(PatchOutcome::AlreadyAtVersion);
        }
        if version != from {
            self.events.emit(PatchEvent::NotEligible {
                name,
                version: version.to_string(),
            });
            return Ok(PatchOutcome::NotEligible {
                version: version.to_string(),
            });
        }

        let document: Value =
            serde_json::from_slice(&self.data).map_err(|source| Error::PatchDocument {
                name: name.clone(),
                source,
            })?;
        let namespace = object.namespace().unwrap_or_default();
        bounded(
            self.request_timeout,
            "patch",
            &name,
            self.client.merge_patch(&name, &namespace, &document),
        )
        .await?
        .map_err(|source| Error::Patch {
            name: name.clone(),
            source,
        })?;

        self.events.emit(PatchEvent::Patched { name });
        Ok(PatchOutcome::Patched)
    }
}

/// Run the request, giving up after `timeout` if one is set.
async fn bounded<T, F>(
    timeout: Option<Duration>,
    operation: &'static str,
    name: &str,
    request: F,
) -> Result<Result<T, kube::Error>, Error>
where
    F: Future<Output = Result<T, kube::Error>>,
{
    match timeout {
        Some(timeout) => tokio::time::timeout(timeout, request)
            .await
            .map_err(|_| Error::Timeout {
                operation,
                name: name.to_string(),
                timeout,
            }),
        None => Ok(request.await),
    }
}
