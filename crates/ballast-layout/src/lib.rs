//! Ballast target device layout — classification, policy planning, metadata offload.
//!
//! This crate decides the physical-device layout for a Ballast target
//! node. Given the disks discovered on a host and a store configuration,
//! it produces the ordered device assignments the manifest renderer
//! feeds to the storage engine. It performs no device I/O itself — disk
//! discovery and manifest rendering are the orchestrator's job.
//!
//! # Components
//!
//! - **`classifier`** — Eligibility filtering and media-type bucketing
//! - **`planner`** — Policy selection and physical device planning
//! - **`partition`** — Balanced contiguous grouping for hybrid pairing
//! - **`rtlfs`** — Directory-backed (filesystem-emulated) device planning

pub mod classifier;
pub mod error;
pub mod partition;
pub mod planner;
pub mod rtlfs;

pub use classifier::{ClassifiedDisks, classify_disks, short_devlink_name};
pub use error::{LayoutError, LayoutResult};
pub use partition::partition_into_balanced_groups;
pub use planner::{LayoutPolicy, plan_rt_devices};
pub use rtlfs::plan_rtlfs_devices;
