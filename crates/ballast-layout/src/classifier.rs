//! Device classification for layout planning.
//!
//! Partitions the host's discovered disks into eligible candidates and
//! buckets them by media type. A disk that already holds a filesystem or
//! partitions is silently skipped: it was provisioned by someone else and
//! the planner must leave it alone.

use ballast_core::LocalDisk;

/// The `/dev/disk/by-id/` alias directory prefix on dev links.
const BY_ID_PREFIX: &str = "/dev/disk/by-id/";

/// Eligible disks bucketed by media type, borrowed from the discovery
/// slice in its original order.
#[derive(Debug, Clone)]
pub struct ClassifiedDisks<'a> {
    /// Eligible flash devices.
    pub solid_state: Vec<&'a LocalDisk>,
    /// Eligible spinning devices.
    pub rotational: Vec<&'a LocalDisk>,
    /// All eligible devices in discovery order.
    pub eligible: Vec<&'a LocalDisk>,
}

/// Bucket the discovered disks into eligible solid-state and rotational
/// sets, preserving discovery order. Empty input yields empty buckets.
pub fn classify_disks(disks: &[LocalDisk]) -> ClassifiedDisks<'_> {
    let mut solid_state = Vec::new();
    let mut rotational = Vec::new();
    let mut eligible = Vec::new();

    for disk in disks {
        if !disk.is_eligible() {
            continue;
        }
        if disk.rotational {
            rotational.push(disk);
        } else {
            solid_state.push(disk);
        }
        eligible.push(disk);
    }

    ClassifiedDisks {
        solid_state,
        rotational,
        eligible,
    }
}

/// Pick a short display name out of a disk's dev-link list.
///
/// Kernel by-id links mix stable short aliases with verbose WWN entries
/// and nested-path aliases. The first candidate that is neither a path
/// nor a WWN identifier wins; operators read these names, and hybrid
/// pairing uses them as journal/metadata identifiers. Returns an empty
/// string when no candidate qualifies.
pub fn short_devlink_name(dev_links: &str) -> String {
    for candidate in dev_links.split_whitespace() {
        let name = candidate.replacen(BY_ID_PREFIX, "", 1);
        if name.contains('/') || name.contains("wwn-") {
            continue;
        }
        return name;
    }
    String::new()
}
