use snafu::Snafu;
use std::time::Duration;

/// Errors generated while fetching, checking or patching a resource.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("nil cspi object"))]
    /// The resource was used before it was fetched.
    NilObject {},
    #[snafu(display("cspi version {} is neither {} nor {}", version, from, to))]
    /// The version label is at neither of the expected versions.
    VersionMismatch {
        version: String,
        from: String,
        to: String,
    },
    #[snafu(display("failed to get cspi {} in {} namespace: {}", name, namespace, source))]
    Get {
        name: String,
        namespace: String,
        source: kube::Error,
    },
    #[snafu(display("failed to patch cspi {}: {}", name, source))]
    Patch { name: String, source: kube::Error },
    #[snafu(display("invalid merge patch document for cspi {}: {}", name, source))]
    PatchDocument {
        name: String,
        source: serde_json::Error,
    },
    #[snafu(display(
        "timed out after {} waiting to {} cspi {}",
        humantime::format_duration(*timeout),
        operation,
        name
    ))]
    /// The cluster did not answer within the configured request timeout.
    Timeout {
        operation: &'static str,
        name: String,
        timeout: Duration,
    },
}
