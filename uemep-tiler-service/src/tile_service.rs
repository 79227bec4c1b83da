//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::map::TileMap;
use pbr::ProgressBar;
use std::error::Error as StdError;
use std::fmt;
use std::io::Stdout;
use std::path::PathBuf;
use std::time::Instant;
use tile_grid::{Projection, Tile, TileGrid};
use uemep_tiler_core::core::{Config, TilingCfg};
use uemep_tiler_core::store::{DescriptorWriter, Filestore};
use uemep_tiler_core::Error;

/// Tile generation for one configuration
#[derive(Clone, Debug)]
pub struct TileService {
    pub cfg: TilingCfg,
    pub projection: Projection,
    pub grid: TileGrid,
    pub writer: DescriptorWriter<Filestore>,
}

/// Result of a generation run
#[derive(PartialEq, Clone, Debug)]
pub struct TilingSummary {
    pub tiles: u64,
    /// Tile edge length in meters
    pub delta: f64,
}

impl fmt::Display for TilingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let km = self.delta / 1000.0;
        writeln!(f, "Number of tiles = {}", self.tiles)?;
        write!(f, "Size of each tile = {} x {} km", km, km)
    }
}

impl<'a> Config<'a, TilingCfg> for TileService {
    /// Expects country bounds to be resolved already
    fn from_config(cfg: &TilingCfg) -> Result<Self, Error> {
        let projection = Projection::from_config(cfg)?;
        let grid = TileGrid::from_config(cfg)?;
        let writer = DescriptorWriter::from_config(cfg)?;
        Ok(TileService {
            cfg: cfg.clone(),
            projection,
            grid,
            writer,
        })
    }
}

impl TileService {
    fn progress_bar(&self, tiles: u64) -> ProgressBar<Stdout> {
        let mut pb = ProgressBar::new(tiles);
        pb.message("Tile ");
        pb.show_speed = false;
        pb.show_percent = false;
        pb.show_time_left = false;
        pb
    }
    /// Tiles in enumeration order
    pub fn tiles(&self) -> Vec<Tile> {
        self.grid.tiles().collect()
    }
    /// Write one descriptor file per tile. The first write error aborts.
    pub fn generate(&self, progress: bool) -> Result<TilingSummary, Error> {
        let (i_dim, j_dim) = self.grid.dims();
        info!(
            "Grid of {} x {} tiles over {:?}",
            i_dim, j_dim, self.grid.extent
        );
        if i_dim == 0 || j_dim == 0 {
            warn!(
                "Bounding box is smaller than one tile of {} m, no tiles generated",
                self.grid.delta
            );
        }
        self.writer.prepare()?;

        let started = Instant::now();
        let mut pb = if progress {
            Some(self.progress_bar(self.grid.tile_count()))
        } else {
            None
        };
        let mut tileno: u64 = 0;
        for tile in self.grid.tiles() {
            let filename = self.writer.write(&tile)?;
            debug!("Tile {} written to {}", tile.index, filename);
            tileno += 1;
            if let Some(ref mut pb) = pb {
                pb.inc();
            }
        }
        if let Some(ref mut pb) = pb {
            pb.finish();
        }
        info!(
            "{} tiles written in {:.1}s",
            tileno,
            started.elapsed().as_secs_f64()
        );
        Ok(TilingSummary {
            tiles: tileno,
            delta: self.grid.delta,
        })
    }
    /// Map file path `map_{tile_name}_{tile_delta}.png` in the output directory
    pub fn map_path(&self) -> PathBuf {
        self.writer.store.fullpath(&format!(
            "map_{}_{}.png",
            self.cfg.tile_name,
            self.cfg.tile_delta.trunc() as i64
        ))
    }
    /// Draw tiles over a graticule in the grid projection
    pub fn render_map(&self) -> Result<PathBuf, Box<dyn StdError>> {
        let path = self.map_path();
        let map = TileMap::new(path.clone(), self.projection.clone());
        map.render(&self.tiles())?;
        Ok(path)
    }
}
