//! Directory-backed (filesystem-emulated) device planning.
//!
//! Nodes without raw devices can still carry the store on plain
//! directories. There is no eligibility filtering here and no policy:
//! every listed directory becomes one device, in order.

use std::path::Path;

use tracing::debug;

use ballast_core::{Directory, RtlfsDevice, StoreConfig};

/// Plan one filesystem-emulated device per configured directory.
///
/// The display name is the directory's final path component; a path with
/// no final component yields an empty name, which the engine tolerates.
pub fn plan_rtlfs_devices(directories: &[Directory], config: &StoreConfig) -> Vec<RtlfsDevice> {
    directories
        .iter()
        .map(|dir| {
            let dev = RtlfsDevice {
                name: base_name(&dir.path),
                path: dir.path.clone(),
                check_mountpoint: 0,
                psize: config.lmdb_page_size,
                verify_chid: config.rt_verify_chid,
                sync: config.sync,
                plevel_override: config.rt_plevel_override,
                maxsize: config.max_size,
            };
            debug!(path = %dev.path, "assigned directory-backed device");
            dev
        })
        .collect()
}

fn base_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
