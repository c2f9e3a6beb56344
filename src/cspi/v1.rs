use super::VERSION_LABEL;
use kube::{CustomResource, ResourceExt};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(CustomResource, Serialize, Deserialize, Default, Debug, PartialEq, Clone, JsonSchema)]
#[kube(
group = "cstor.openebs.io",
version = "v1",
kind = "CStorPoolInstance",
plural = "cstorpoolinstances",
// The name of the struct that gets created that represents a resource
namespaced,
status = "CStorPoolInstanceStatus",
derive = "PartialEq",
shortname = "cspi",
printcolumn = r#"{ "name":"host", "type":"string", "description":"host the pool instance is on", "jsonPath":".spec.hostName"}"#,
printcolumn = r#"{ "name":"status", "type":"string", "description":"pool instance phase", "jsonPath":".status.phase"}"#,
printcolumn = r#"{ "name":"version", "type":"string", "description":"upgraded version", "jsonPath":".metadata.labels.openebs\\.io/version"}"#
)]
#[serde(rename_all = "camelCase")]
/// The pool instance spec which describes the pool created on a single node.
pub struct CStorPoolInstanceSpec {
    /// The host the pool instance is placed on.
    #[serde(default)]
    pub host_name: String,
    /// Selects the node the pool instance is scheduled on.
    #[serde(default)]
    pub node_selector: BTreeMap<String, String>,
    #[serde(default)]
    pub pool_config: PoolConfig,
    /// Raid groups holding the pool data.
    #[serde(default)]
    pub data_raid_groups: Vec<RaidGroup>,
    /// Raid groups used as write cache.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub write_cache_raid_groups: Vec<RaidGroup>,
}

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
/// Pool level settings.
pub struct PoolConfig {
    /// Raid type of the data raid groups, eg: stripe, mirror, raidz.
    #[serde(default)]
    pub data_raid_group_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_cache_group_type: Option<String>,
    #[serde(default)]
    pub thick_provision: bool,
    /// Compression algorithm used for the pool, eg: off, lz.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority_class_name: Option<String>,
    /// Capacity percentage after which the pool is set read only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ro_threshold_limit: Option<u32>,
}

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
/// A group of block devices in the same raid layout.
pub struct RaidGroup {
    #[serde(default)]
    pub block_devices: Vec<BlockDevice>,
}

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlockDevice {
    pub block_device_name: String,
    /// Capacity in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_link: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, JsonSchema)]
#[serde(rename_all = "camelCase")]
/// Status of the pool instance as reported by the pool manager.
pub struct CStorPoolInstanceStatus {
    /// Phase, eg: ONLINE, DEGRADED, OFFLINE.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<PoolCapacity>,
    #[serde(default)]
    pub read_only: bool,
    #[serde(default)]
    pub provisioned_replicas: i32,
    #[serde(default)]
    pub healthy_replicas: i32,
}

#[derive(Serialize, Deserialize, Default, Debug, Eq, PartialEq, Clone, JsonSchema)]
/// Pool capacity as resource quantities, eg: `9.6G`.
pub struct PoolCapacity {
    #[serde(default)]
    pub total: String,
    #[serde(default)]
    pub free: String,
    #[serde(default)]
    pub used: String,
}

impl CStorPoolInstance {
    /// The raw value of the version label, empty when the label is not set.
    pub fn version(&self) -> &str {
        self.labels()
            .get(VERSION_LABEL)
            .map(String::as_str)
            .unwrap_or_default()
    }
}
