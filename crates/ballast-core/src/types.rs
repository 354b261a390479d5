//! Domain types shared across Ballast crates.
//!
//! These types sit on the two boundaries of the layout core: `LocalDisk`
//! and `Directory` arrive from host discovery and the node spec, while
//! `RtDevice` and `RtlfsDevice` are rendered into the target's deployment
//! manifest. Output field names are part of the wire contract with the
//! storage engine's own config parser and must not change.

use serde::{Deserialize, Serialize};

/// Zero-valued fields are left out of the rendered manifest, matching the
/// engine parser's treatment of absent keys as "use engine default".
fn is_default<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

// ── Discovery input ────────────────────────────────────────────────

/// A block device reported by host-level disk enumeration.
///
/// The layout core trusts `empty`, `partitions`, and `rotational`
/// verbatim; it never probes the device itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LocalDisk {
    /// Kernel device name (e.g. `sdb`), without the `/dev/` prefix.
    pub name: String,
    /// Whitespace-separated alternate link names for the device
    /// (`/dev/disk/by-id/...` style aliases). May be empty.
    pub dev_links: String,
    /// Spinning magnetic media, as opposed to flash.
    pub rotational: bool,
    /// Whether the device holds no filesystem or partition table.
    /// Defaults to false: a disk discovery said nothing about stays
    /// untouched.
    pub empty: bool,
    /// Number of partitions present on the device.
    pub partitions: u32,
}

impl LocalDisk {
    /// A disk already holding data or partitions is left alone.
    pub fn is_eligible(&self) -> bool {
        self.empty && self.partitions == 0
    }
}

/// A filesystem directory backing an emulated store device.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Directory {
    pub path: String,
}

// ── Manifest output ────────────────────────────────────────────────

/// A physical device assignment in the target's store manifest.
///
/// One record per participating raw device. Under the hybrid policy the
/// `journal` and `metadata` fields point at the paired solid-state
/// device; `metadata` carries the literal `"<ssd-name>,<mask>"` form the
/// engine parser expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RtDevice {
    /// Display name, normalized from the device's by-id links.
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    /// Device path, `/dev/<kernel-name>`.
    #[serde(skip_serializing_if = "is_default")]
    pub device: String,
    /// LMDB page size for this device.
    #[serde(skip_serializing_if = "is_default")]
    pub psize: u32,
    /// Verify content hash identifiers on read.
    #[serde(skip_serializing_if = "is_default")]
    pub verify_chid: bool,
    /// Paired journal device identifier (hybrid policy only).
    #[serde(skip_serializing_if = "is_default")]
    pub journal: String,
    /// Paired metadata device identifier, `"<ssd-name>,<mask>"`
    /// (hybrid policy only).
    #[serde(skip_serializing_if = "is_default")]
    pub metadata: String,
    /// Block-level cache enabled (1) or disabled (0).
    #[serde(skip_serializing_if = "is_default")]
    pub bcache: u8,
    /// Cache runs write-around (1) rather than write-back (0).
    #[serde(skip_serializing_if = "is_default")]
    pub bcache_writearound: u8,
    /// Placement-group sharding override; absent means engine default.
    #[serde(skip_serializing_if = "is_default")]
    pub plevel_override: u32,
    /// Synchronous durability for writes.
    #[serde(skip_serializing_if = "is_default")]
    pub sync: bool,
}

/// A directory-backed (filesystem-emulated) device assignment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RtlfsDevice {
    /// Display name, the directory's final path component.
    #[serde(skip_serializing_if = "is_default")]
    pub name: String,
    /// Backing directory path.
    #[serde(skip_serializing_if = "is_default")]
    pub path: String,
    /// Whether the engine should require the path to be a mountpoint.
    /// Always 0 for planned directories.
    #[serde(skip_serializing_if = "is_default")]
    pub check_mountpoint: u8,
    /// LMDB page size for this device.
    #[serde(skip_serializing_if = "is_default")]
    pub psize: u32,
    /// Verify content hash identifiers on read.
    #[serde(skip_serializing_if = "is_default")]
    pub verify_chid: bool,
    /// Synchronous durability for writes.
    #[serde(skip_serializing_if = "is_default")]
    pub sync: bool,
    /// Placement-group sharding override; absent means engine default.
    #[serde(skip_serializing_if = "is_default")]
    pub plevel_override: u32,
    /// Capacity cap in bytes; absent means unbounded.
    #[serde(skip_serializing_if = "is_default")]
    pub maxsize: u64,
}
