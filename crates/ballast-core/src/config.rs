//! Store configuration parsing.
//!
//! `StoreConfig` carries the operator-facing knobs that shape a target
//! node's device layout. Keys use the storage engine's option names
//! verbatim, so a `storeConfig` block can be lifted out of a cluster
//! spec and parsed here unchanged.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default LMDB page size when the cluster spec does not set one.
pub const DEFAULT_LMDB_PAGE_SIZE: u32 = 4096;

/// Default metadata mask suffix for offloaded metadata devices.
pub const DEFAULT_METADATA_MASK: &str = "0xff";

/// Declarative store configuration for a target node.
///
/// All fields are optional in the source document; absent keys take the
/// engine defaults below. A zero `rtPLevelOverride` or `maxSize` means
/// "unset".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Force the all-solid-state policy; rotational disks are ignored.
    #[serde(rename = "useAllSSD")]
    pub use_all_ssd: bool,
    /// Offload journal and metadata to solid-state devices (hybrid
    /// policy). Meaningless when `useAllSSD` is set.
    pub use_metadata_offload: bool,
    /// Enable the block-level cache layer on hybrid data devices.
    #[serde(rename = "useBCache")]
    pub use_bcache: bool,
    /// Run the block cache write-back instead of write-around.
    #[serde(rename = "useBCacheWB")]
    pub use_bcache_wb: bool,
    /// LMDB page size passed through to every device record.
    pub lmdb_page_size: u32,
    /// Verify content hash identifiers on read.
    pub rt_verify_chid: bool,
    /// Synchronous durability for writes.
    pub sync: bool,
    /// Per-device partition-level override; 0 means engine default.
    #[serde(rename = "rtPLevelOverride")]
    pub rt_plevel_override: u32,
    /// Capacity cap for directory-backed devices; 0 means unbounded.
    pub max_size: u64,
    /// Suffix appended to metadata device identifiers.
    pub use_metadata_mask: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            use_all_ssd: false,
            use_metadata_offload: false,
            use_bcache: false,
            use_bcache_wb: false,
            lmdb_page_size: DEFAULT_LMDB_PAGE_SIZE,
            rt_verify_chid: false,
            sync: false,
            rt_plevel_override: 0,
            max_size: 0,
            use_metadata_mask: DEFAULT_METADATA_MASK.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: StoreConfig = toml::from_str(content)?;
        Ok(config)
    }
}
