//! Layout planner — decides device roles for a target node.
//!
//! Given the disks discovered on a host and a store configuration, the
//! planner produces one device assignment per participating disk under
//! one of three policies:
//! 1. All-solid-state: every eligible flash device carries data
//! 2. All-rotational: every eligible spinning device carries data
//! 3. Hybrid: spinning devices carry data, flash devices carry the
//!    paired journals and offloaded metadata

use tracing::{debug, warn};

use ballast_core::{LocalDisk, RtDevice, StoreConfig};

use crate::classifier::{ClassifiedDisks, classify_disks, short_devlink_name};
use crate::error::{LayoutError, LayoutResult};
use crate::partition::partition_into_balanced_groups;

/// Which allocation policy the store configuration selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutPolicy {
    /// Every eligible flash device is a data device.
    AllSolidState,
    /// Every eligible spinning device is a data device.
    AllRotational,
    /// Spinning data devices with journal/metadata offloaded to flash.
    Hybrid,
}

impl LayoutPolicy {
    pub fn from_config(config: &StoreConfig) -> Self {
        if config.use_all_ssd {
            Self::AllSolidState
        } else if config.use_metadata_offload {
            Self::Hybrid
        } else {
            Self::AllRotational
        }
    }
}

/// Plan the physical device layout for a target node.
///
/// Assignments come back in discovery order; under the hybrid policy they
/// are grouped by solid-state owner, then by rotational member. An empty
/// disk list is not an error — the node may carry directory-backed
/// devices only — and returns an empty plan before any policy
/// precondition is checked.
pub fn plan_rt_devices(disks: &[LocalDisk], config: &StoreConfig) -> LayoutResult<Vec<RtDevice>> {
    if disks.is_empty() {
        return Ok(Vec::new());
    }

    let classified = classify_disks(disks);

    match LayoutPolicy::from_config(config) {
        LayoutPolicy::AllSolidState => plan_all_solid_state(&classified, config),
        LayoutPolicy::AllRotational => plan_all_rotational(&classified, config),
        LayoutPolicy::Hybrid => plan_hybrid(&classified, config),
    }
}

/// Shared data-device construction: identity plus the pass-through
/// configuration every policy stamps on its assignments. A zero
/// `rtPLevelOverride` stays zero and is dropped at serialization,
/// leaving the engine default in force.
fn data_device(disk: &LocalDisk, config: &StoreConfig) -> RtDevice {
    RtDevice {
        name: short_devlink_name(&disk.dev_links),
        device: format!("/dev/{}", disk.name),
        psize: config.lmdb_page_size,
        verify_chid: config.rt_verify_chid,
        sync: config.sync,
        plevel_override: config.rt_plevel_override,
        ..RtDevice::default()
    }
}

fn plan_all_solid_state(
    classified: &ClassifiedDisks<'_>,
    config: &StoreConfig,
) -> LayoutResult<Vec<RtDevice>> {
    if classified.solid_state.is_empty() {
        return Err(LayoutError::NoSolidStateMedia);
    }
    if config.use_metadata_offload {
        warn!("useMetadataOffload is ignored when useAllSSD is set");
    }

    let devices: Vec<RtDevice> = classified
        .solid_state
        .iter()
        .map(|disk| {
            let dev = data_device(disk, config);
            debug!(device = %dev.device, "assigned solid-state data device");
            dev
        })
        .collect();

    Ok(devices)
}

fn plan_all_rotational(
    classified: &ClassifiedDisks<'_>,
    config: &StoreConfig,
) -> LayoutResult<Vec<RtDevice>> {
    if classified.rotational.is_empty() {
        return Err(LayoutError::NoRotationalMedia);
    }

    let devices: Vec<RtDevice> = classified
        .rotational
        .iter()
        .map(|disk| {
            let dev = data_device(disk, config);
            debug!(device = %dev.device, "assigned rotational data device");
            dev
        })
        .collect();

    Ok(devices)
}

fn plan_hybrid(
    classified: &ClassifiedDisks<'_>,
    config: &StoreConfig,
) -> LayoutResult<Vec<RtDevice>> {
    let hdds = &classified.rotational;
    let ssds = &classified.solid_state;

    if hdds.is_empty() {
        return Err(LayoutError::NoRotationalMedia);
    }
    if ssds.is_empty() || hdds.len() < ssds.len() {
        return Err(LayoutError::OffloadRatio {
            hdds: hdds.len(),
            ssds: ssds.len(),
        });
    }

    let bcache: u8 = if config.use_bcache { 1 } else { 0 };
    // Write-around stays on unless write-back caching was explicitly
    // requested on top of an enabled cache.
    let bcache_writearound: u8 = if config.use_bcache && config.use_bcache_wb { 0 } else { 1 };

    let groups = partition_into_balanced_groups(hdds, ssds.len());

    let mut devices = Vec::with_capacity(hdds.len());
    for (ssd, group) in ssds.iter().zip(&groups) {
        let ssd_name = short_devlink_name(&ssd.dev_links);
        for hdd in *group {
            let mut dev = data_device(hdd, config);
            dev.journal = ssd_name.clone();
            dev.metadata = format!("{ssd_name},{}", config.use_metadata_mask);
            dev.bcache = bcache;
            dev.bcache_writearound = bcache_writearound;
            debug!(
                device = %dev.device,
                journal = %dev.journal,
                "paired rotational data device with solid-state sibling"
            );
            devices.push(dev);
        }
    }

    Ok(devices)
}
