//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! uEMEP tile descriptor files

use crate::core::config::TilingCfg;
use crate::core::Config;
use crate::store::filestore::Filestore;
use crate::store::store::TileStore;
use crate::Error;
use tile_grid::Tile;

/// Serializes tiles into descriptor files of a [`TileStore`]
#[derive(Clone, Debug)]
pub struct DescriptorWriter<S: TileStore> {
    pub store: S,
    /// File name prefix
    pub tile_name: String,
    /// Subgrid cell size in meters
    pub tile_delta: f64,
}

impl<S: TileStore> DescriptorWriter<S> {
    pub fn new(store: S, tile_name: &str, tile_delta: f64) -> DescriptorWriter<S> {
        DescriptorWriter {
            store,
            tile_name: tile_name.to_string(),
            tile_delta,
        }
    }
    /// `{index}_{tile_name}_{tile_delta}.txt` with the subgrid size truncated to whole meters
    pub fn filename(&self, tile: &Tile) -> String {
        format!(
            "{}_{}_{}.txt",
            tile.index,
            self.tile_name,
            self.tile_delta.trunc() as i64
        )
    }
    pub fn descriptor(&self, tile: &Tile) -> String {
        let ext = &tile.extent;
        format!(
            "tile_tag = {:05}
subgrid_delta(x_dim_index) = {:.2}
subgrid_delta(y_dim_index) = {:.2}
subgrid_min(x_dim_index) = {:.2}
subgrid_min(y_dim_index) = {:.2}
subgrid_max(x_dim_index) = {:.2}
subgrid_max(y_dim_index) = {:.2}
",
            tile.index,
            self.tile_delta,
            self.tile_delta,
            ext.minx,
            ext.miny,
            ext.maxx,
            ext.maxy
        )
    }
    pub fn prepare(&self) -> Result<(), Error> {
        info!("{}", self.store.info());
        self.store.prepare()
    }
    /// Write descriptor of `tile` and return its file name
    pub fn write(&self, tile: &Tile) -> Result<String, Error> {
        let filename = self.filename(tile);
        if self.store.exists(&filename) {
            debug!("Overwriting {}", filename);
        }
        self.store
            .write(&filename, self.descriptor(tile).as_bytes())?;
        Ok(filename)
    }
}

impl<'a> Config<'a, TilingCfg> for DescriptorWriter<Filestore> {
    fn from_config(cfg: &TilingCfg) -> Result<Self, Error> {
        cfg.validate()?;
        Ok(DescriptorWriter::new(
            Filestore::new(&cfg.output_dir),
            &cfg.tile_name,
            cfg.tile_delta,
        ))
    }
}
