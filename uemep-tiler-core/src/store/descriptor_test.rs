//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::{parse_config, ApplicationCfg};
use crate::core::Config;
use crate::store::descriptor::DescriptorWriter;
use crate::store::filestore::Filestore;
use crate::store::store::TileStore;
use crate::Error;
use std::cell::RefCell;
use std::io;
use tile_grid::{Extent, Tile};

/// Store collecting written files in memory, failing after `capacity` writes
struct MemoryStore {
    files: RefCell<Vec<(String, String)>>,
    capacity: usize,
}

impl MemoryStore {
    fn new(capacity: usize) -> MemoryStore {
        MemoryStore {
            files: RefCell::new(Vec::new()),
            capacity,
        }
    }
}

impl TileStore for MemoryStore {
    fn info(&self) -> String {
        "Memory store".to_string()
    }
    fn prepare(&self) -> Result<(), Error> {
        Ok(())
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), Error> {
        let mut files = self.files.borrow_mut();
        if files.len() >= self.capacity {
            return Err(Error::Io {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::Other, "store full"),
            });
        }
        files.push((path.to_string(), String::from_utf8_lossy(obj).to_string()));
        Ok(())
    }
    fn exists(&self, path: &str) -> bool {
        self.files.borrow().iter().any(|(p, _)| p == path)
    }
}

fn tile(index: u32, minx: f64, miny: f64, delta: f64) -> Tile {
    Tile {
        index,
        extent: Extent {
            minx,
            miny,
            maxx: minx + delta,
            maxy: miny + delta,
        },
    }
}

#[test]
fn test_filename() {
    let writer = DescriptorWriter::new(MemoryStore::new(10), "oslo", 250.0);
    assert_eq!(writer.filename(&tile(1, 0.0, 0.0, 1.0)), "1_oslo_250.txt");
    assert_eq!(writer.filename(&tile(12345, 0.0, 0.0, 1.0)), "12345_oslo_250.txt");

    // subgrid size is truncated, not rounded
    let writer = DescriptorWriter::new(MemoryStore::new(10), "oslo", 99.9);
    assert_eq!(writer.filename(&tile(7, 0.0, 0.0, 1.0)), "7_oslo_99.txt");

    let writer = DescriptorWriter::new(MemoryStore::new(10), "", 25.0);
    assert_eq!(writer.filename(&tile(3, 0.0, 0.0, 1.0)), "3__25.txt");
}

#[test]
fn test_descriptor() {
    let writer = DescriptorWriter::new(MemoryStore::new(10), "oslo", 250.0);
    let descriptor = writer.descriptor(&tile(2, 4321000.0, 3210000.0, 10000.0));
    assert_eq!(
        descriptor,
        "tile_tag = 00002
subgrid_delta(x_dim_index) = 250.00
subgrid_delta(y_dim_index) = 250.00
subgrid_min(x_dim_index) = 4321000.00
subgrid_min(y_dim_index) = 3210000.00
subgrid_max(x_dim_index) = 4331000.00
subgrid_max(y_dim_index) = 3220000.00
"
    );

    let writer = DescriptorWriter::new(MemoryStore::new(10), "rd", 12.3456);
    let descriptor = writer.descriptor(&tile(123456, -1234.567, 0.1, 100.0));
    let lines = descriptor.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "tile_tag = 123456");
    assert_eq!(lines[1], "subgrid_delta(x_dim_index) = 12.35");
    assert_eq!(lines[3], "subgrid_min(x_dim_index) = -1234.57");
    assert_eq!(lines[4], "subgrid_min(y_dim_index) = 0.10");
}

#[test]
fn test_write() {
    let writer = DescriptorWriter::new(MemoryStore::new(10), "oslo", 250.0);
    writer.prepare().unwrap();
    let name = writer.write(&tile(1, 0.0, 0.0, 10000.0)).unwrap();
    assert_eq!(name, "1_oslo_250.txt");
    writer.write(&tile(2, 0.0, 10000.0, 10000.0)).unwrap();

    let files = writer.store.files.borrow();
    assert_eq!(files.len(), 2);
    assert_eq!(files[1].0, "2_oslo_250.txt");
    assert!(files[1].1.contains("subgrid_min(y_dim_index) = 10000.00"));
}

#[test]
fn test_write_error() {
    let writer = DescriptorWriter::new(MemoryStore::new(1), "oslo", 250.0);
    writer.write(&tile(1, 0.0, 0.0, 10000.0)).unwrap();
    match writer.write(&tile(2, 0.0, 10000.0, 10000.0)) {
        Err(Error::Io { path, .. }) => assert_eq!(path, "2_oslo_250.txt"),
        other => panic!("unexpected result {:?}", other),
    }
}

#[test]
fn test_writer_from_config() {
    let json = r#"{"config": {
        "delta": 10000, "tile_delta": 100.5, "output_dir": "/tmp/tiles", "tile_name": "nl",
        "projection": "RD", "projection_attributes": [], "country": "Netherlands"
    }}"#;
    let config: ApplicationCfg = parse_config(json.to_string(), "").unwrap();
    let writer: DescriptorWriter<Filestore> = DescriptorWriter::from_config(&config.config).unwrap();
    assert_eq!(writer.store.basepath, "/tmp/tiles");
    assert_eq!(writer.tile_name, "nl");
    assert_eq!(writer.filename(&tile(4, 0.0, 0.0, 1.0)), "4_nl_100.txt");
}
