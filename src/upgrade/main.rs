//! Upgrades a single CStorPoolInstance from one version to the next by applying the given
//! json merge patch, provided the resource is still at the source version.

use anyhow::Context;
use clap::{Arg, ArgMatches};
use cspi_upgrade::patch::{CspiPatcher, PatchOutcome, PatcherConfig};
use kube::Client;
use std::path::PathBuf;
use tracing::{info, warn};

const WHO_AM_I: &str = "cspi-upgrade";

async fn upgrade(matches: ArgMatches) -> anyhow::Result<()> {
    // presence is enforced by clap through required args and defaults
    let name = matches.get_one::<String>("name").unwrap();
    let namespace = matches.get_one::<String>("namespace").unwrap();
    let from = matches.get_one::<String>("from-version").unwrap();
    let to = matches.get_one::<String>("to-version").unwrap();
    let patch_file = matches.get_one::<PathBuf>("patch-file").unwrap();
    let request_timeout = *matches
        .get_one::<humantime::Duration>("request-timeout")
        .unwrap();

    let patch = tokio::fs::read(patch_file)
        .await
        .with_context(|| format!("failed to read patch file {}", patch_file.display()))?;
    let k8s = Client::try_default().await?;

    let config = PatcherConfig::new(k8s, patch).with_request_timeout(request_timeout.into());
    let mut patcher = CspiPatcher::new(config);
    patcher.get(name, namespace).await?;
    patcher.pre_checks(from, to)?;
    match patcher.patch(from, to).await? {
        PatchOutcome::Patched => info!(cspi.name = %name, "Upgraded cspi from {from} to {to}"),
        PatchOutcome::AlreadyAtVersion => info!(cspi.name = %name, "Nothing to upgrade"),
        PatchOutcome::NotEligible { version } => {
            warn!(cspi.name = %name, %version, "cspi was not upgraded")
        }
    }
    Ok(())
}

/// The command line of the upgrade job.
fn command() -> clap::Command {
    clap::Command::new(WHO_AM_I)
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::new("name")
                .long("name")
                .env("CSPI_NAME")
                .required(true)
                .help("the name of the CStorPoolInstance to upgrade"),
        )
        .arg(
            Arg::new("namespace")
                .long("namespace")
                .short('n')
                .env("NAMESPACE")
                .default_value("openebs")
                .help("the namespace of the CStorPoolInstance"),
        )
        .arg(
            Arg::new("from-version")
                .long("from-version")
                .env("FROM_VERSION")
                .required(true)
                .help("the version the CStorPoolInstance is upgraded from"),
        )
        .arg(
            Arg::new("to-version")
                .long("to-version")
                .env("TO_VERSION")
                .required(true)
                .help("the version the CStorPoolInstance is upgraded to"),
        )
        .arg(
            Arg::new("patch-file")
                .long("patch-file")
                .short('p')
                .env("PATCH_FILE")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("path to the json merge patch moving the resource to the new version"),
        )
        .arg(
            Arg::new("request-timeout")
                .short('t')
                .long("request-timeout")
                .env("REQUEST_TIMEOUT")
                .default_value("30s")
                .value_parser(clap::value_parser!(humantime::Duration))
                .help("the timeout for requests to the kubernetes api"),
        )
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let matches = command().get_matches();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    upgrade(matches).await
}
