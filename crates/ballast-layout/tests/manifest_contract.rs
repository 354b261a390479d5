//! Manifest wire-contract tests.
//!
//! The storage engine's own config parser consumes the device lists this
//! crate plans, so the serialized field names, the `/dev/<name>` device
//! path convention, and the `"<ssd-name>,<mask>"` metadata format are a
//! contract. These tests plan a realistic node end-to-end and pin the
//! rendered JSON.

use ballast_core::{Directory, LocalDisk, StoreConfig};
use ballast_layout::{plan_rt_devices, plan_rtlfs_devices};

fn disk(name: &str, dev_links: &str, rotational: bool) -> LocalDisk {
    LocalDisk {
        name: name.to_string(),
        dev_links: dev_links.to_string(),
        rotational,
        empty: true,
        partitions: 0,
    }
}

#[test]
fn hybrid_node_manifest() {
    let disks = vec![
        disk(
            "sda",
            "/dev/disk/by-id/wwn-0x5000c500a1b2c3d4 /dev/disk/by-id/ata-WDC_WD40EZRZ-1",
            true,
        ),
        disk("sdb", "/dev/disk/by-id/ata-WDC_WD40EZRZ-2", true),
        disk(
            "nvme0n1",
            "/dev/disk/by-id/nvme-Samsung_SSD_970_1 /dev/disk/by-id/nvme-eui.002538",
            false,
        ),
    ];
    let config = StoreConfig {
        use_metadata_offload: true,
        use_bcache: true,
        rt_verify_chid: true,
        ..StoreConfig::default()
    };

    let devices = plan_rt_devices(&disks, &config).unwrap();
    let rendered = serde_json::to_value(&devices).unwrap();

    assert_eq!(
        rendered,
        serde_json::json!([
            {
                "name": "ata-WDC_WD40EZRZ-1",
                "device": "/dev/sda",
                "psize": 4096,
                "verify_chid": true,
                "journal": "nvme-Samsung_SSD_970_1",
                "metadata": "nvme-Samsung_SSD_970_1,0xff",
                "bcache": 1,
                "bcache_writearound": 1
            },
            {
                "name": "ata-WDC_WD40EZRZ-2",
                "device": "/dev/sdb",
                "psize": 4096,
                "verify_chid": true,
                "journal": "nvme-Samsung_SSD_970_1",
                "metadata": "nvme-Samsung_SSD_970_1,0xff",
                "bcache": 1,
                "bcache_writearound": 1
            }
        ])
    );
}

#[test]
fn all_ssd_node_manifest_omits_pairing_fields() {
    let disks = vec![
        disk("nvme0n1", "/dev/disk/by-id/nvme-Samsung_SSD_970_1", false),
        disk("sda", "/dev/disk/by-id/ata-WDC_WD40EZRZ-1", true),
    ];
    let config = StoreConfig {
        use_all_ssd: true,
        sync: true,
        ..StoreConfig::default()
    };

    let devices = plan_rt_devices(&disks, &config).unwrap();
    let rendered = serde_json::to_value(&devices).unwrap();

    assert_eq!(
        rendered,
        serde_json::json!([
            {
                "name": "nvme-Samsung_SSD_970_1",
                "device": "/dev/nvme0n1",
                "psize": 4096,
                "sync": true
            }
        ])
    );
}

#[test]
fn directory_node_manifest() {
    let directories = vec![
        Directory { path: "/var/lib/ballast/data0".to_string() },
        Directory { path: "/var/lib/ballast/data1".to_string() },
    ];
    let config = StoreConfig {
        max_size: 1073741824,
        ..StoreConfig::default()
    };

    let devices = plan_rtlfs_devices(&directories, &config);
    let rendered = serde_json::to_value(&devices).unwrap();

    assert_eq!(
        rendered,
        serde_json::json!([
            {
                "name": "data0",
                "path": "/var/lib/ballast/data0",
                "psize": 4096,
                "maxsize": 1073741824
            },
            {
                "name": "data1",
                "path": "/var/lib/ballast/data1",
                "psize": 4096,
                "maxsize": 1073741824
            }
        ])
    );
}

#[test]
fn wwn_only_disk_degrades_to_empty_name() {
    let disks = vec![disk("sda", "/dev/disk/by-id/wwn-0x5000c500a1b2c3d4", true)];

    let devices = plan_rt_devices(&disks, &StoreConfig::default()).unwrap();
    let rendered = serde_json::to_value(&devices).unwrap();

    // No qualifying alias: the name field is absent, the device path is
    // still authoritative.
    assert_eq!(
        rendered,
        serde_json::json!([
            {
                "device": "/dev/sda",
                "psize": 4096
            }
        ])
    );
}
