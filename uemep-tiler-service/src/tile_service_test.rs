//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::tile_service::{TileService, TilingSummary};
use serde_json::json;
use std::env;
use std::fs;
use std::path::Path;
use tile_grid::GridError;
use uemep_tiler_core::core::{parse_config, ApplicationCfg, Config, TilingCfg};
use uemep_tiler_core::Error;

fn output_dir(name: &str) -> String {
    let mut dir = env::temp_dir();
    dir.push("uemep_tiler_test");
    dir.push(name);
    let basepath = format!("{}", &dir.display());
    let _ = fs::remove_dir_all(&basepath);
    basepath
}

fn tiling_cfg(outdir: &str, projection: &str, bounds: [f64; 4]) -> TilingCfg {
    let json = json!({"config": {
        "x_min": bounds[0],
        "y_min": bounds[1],
        "x_max": bounds[2],
        "y_max": bounds[3],
        "delta": 50000,
        "tile_delta": 250,
        "output_dir": outdir,
        "tile_name": "test",
        "projection": projection,
        "projection_attributes": [0, 0, 0, 0, 6370997]
    }})
    .to_string();
    let config: ApplicationCfg = parse_config(json, "").unwrap();
    config.config
}

fn txt_files(dir: &str) -> Vec<String> {
    let mut names = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".txt"))
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[test]
fn test_generate() {
    let outdir = output_dir("generate");
    let cfg = tiling_cfg(&outdir, "LAEA", [-2.0, -1.0, 2.0, 1.0]);
    let service = TileService::from_config(&cfg).unwrap();
    assert_eq!(service.grid.dims(), (8, 4));
    assert!(!Path::new(&outdir).exists());

    let summary = service.generate(false).unwrap();
    assert_eq!(
        summary,
        TilingSummary {
            tiles: 32,
            delta: 50000.0
        }
    );

    let files = txt_files(&outdir);
    assert_eq!(files.len(), 32);
    assert!(files.contains(&"1_test_250.txt".to_string()));
    assert!(files.contains(&"32_test_250.txt".to_string()));
    assert!(!files.contains(&"33_test_250.txt".to_string()));

    // Tile 2 is above tile 1
    let ext = &service.grid.extent;
    let content = fs::read_to_string(format!("{}/2_test_250.txt", outdir)).unwrap();
    let lines = content.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "tile_tag = 00002");
    assert_eq!(lines[1], "subgrid_delta(x_dim_index) = 250.00");
    assert_eq!(lines[2], "subgrid_delta(y_dim_index) = 250.00");
    assert_eq!(lines[3], format!("subgrid_min(x_dim_index) = {:.2}", ext.minx));
    assert_eq!(
        lines[4],
        format!("subgrid_min(y_dim_index) = {:.2}", ext.miny + 50000.0)
    );
    assert_eq!(
        lines[5],
        format!("subgrid_max(x_dim_index) = {:.2}", ext.minx + 50000.0)
    );

    // Rerun overwrites
    assert_eq!(service.generate(false).unwrap().tiles, 32);
    assert_eq!(txt_files(&outdir).len(), 32);
}

#[test]
fn test_tiles() {
    let outdir = output_dir("tiles");
    let cfg = tiling_cfg(&outdir, "LAEA", [-2.0, -1.0, 2.0, 1.0]);
    let service = TileService::from_config(&cfg).unwrap();
    let tiles = service.tiles();
    assert_eq!(tiles.len(), 32);
    assert_eq!(tiles[0].index, 1);
    assert_eq!(tiles[31].index, 32);
    // column-major: tile 5 starts the second column
    assert_eq!(tiles[4].extent.minx, tiles[0].extent.maxx);
    assert_eq!(tiles[4].extent.miny, tiles[0].extent.miny);
}

#[test]
fn test_unsupported_projection() {
    let outdir = output_dir("mercator");
    let cfg = tiling_cfg(&outdir, "MERCATOR", [-2.0, -1.0, 2.0, 1.0]);
    match TileService::from_config(&cfg) {
        Err(Error::Grid(GridError::UnsupportedProjection(name))) => assert_eq!(name, "MERCATOR"),
        other => panic!("unexpected result {:?}", other.map(|s| s.grid)),
    }
    assert!(!Path::new(&outdir).exists());
}

#[test]
fn test_no_tiles() {
    let outdir = output_dir("no_tiles");
    let cfg = tiling_cfg(&outdir, "LAEA", [0.0, 0.0, 0.1, 0.1]);
    let service = TileService::from_config(&cfg).unwrap();
    let summary = service.generate(false).unwrap();
    assert_eq!(summary.tiles, 0);
    assert!(txt_files(&outdir).is_empty());
    assert!(service.render_map().is_err());
}

#[test]
fn test_write_error() {
    let outdir = output_dir("write_error");
    fs::create_dir_all(Path::new(&outdir).parent().unwrap()).unwrap();
    fs::write(&outdir, "").unwrap();
    let cfg = tiling_cfg(&format!("{}/tiles", outdir), "LAEA", [-2.0, -1.0, 2.0, 1.0]);
    let service = TileService::from_config(&cfg).unwrap();
    match service.generate(false) {
        Err(Error::Io { .. }) => {}
        other => panic!("unexpected result {:?}", other),
    }
    fs::remove_file(&outdir).unwrap();
}

#[test]
fn test_summary() {
    let summary = TilingSummary {
        tiles: 2,
        delta: 10000.0,
    };
    assert_eq!(
        format!("{}", summary),
        "Number of tiles = 2\nSize of each tile = 10 x 10 km"
    );
    let summary = TilingSummary {
        tiles: 12,
        delta: 2500.0,
    };
    assert_eq!(
        format!("{}", summary),
        "Number of tiles = 12\nSize of each tile = 2.5 x 2.5 km"
    );
}

#[test]
fn test_map_path() {
    let outdir = output_dir("map_path");
    let mut cfg = tiling_cfg(&outdir, "LAEA", [-2.0, -1.0, 2.0, 1.0]);
    cfg.tile_delta = 99.9;
    let service = TileService::from_config(&cfg).unwrap();
    assert_eq!(
        service.map_path(),
        Path::new(&outdir).join("map_test_99.png")
    );
}
