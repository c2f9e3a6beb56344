//! Upgrade patching for cStor pool instances.
//!
//! A [`patch::cspi::CspiPatcher`] fetches one `CStorPoolInstance`, checks that its
//! `openebs.io/version` label is at one of the expected versions and, when it is still at
//! the old version, applies a merge patch that moves it to the new one.

/// The CStorPoolInstance custom resource and the cluster client used to reach it.
pub mod cspi;
/// Errors returned by the patchers.
pub mod error;
/// Version patchers.
pub mod patch;

pub use error::Error;
