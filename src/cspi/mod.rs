//! This module has the definitions and the client specific operations for the
//! CStorPoolInstance CRs.

/// CStorPoolInstance client operations.
pub mod client;
/// The CStorPoolInstance custom resource definition.
pub mod v1;

pub use client::CspiClient;
pub use v1::{CStorPoolInstance, CStorPoolInstanceSpec, CStorPoolInstanceStatus};

/// Label recording the version the resource was last upgraded to.
pub const VERSION_LABEL: &str = "openebs.io/version";

/// The version without any `-` suffix, eg: `3.0.0-RC1` becomes `3.0.0`.
pub fn base_version(version: &str) -> &str {
    version
        .split_once('-')
        .map_or(version, |(version, _suffix)| version)
}
