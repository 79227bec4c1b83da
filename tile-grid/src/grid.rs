//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//!Tile grids

use crate::error::GridError;
use crate::grid_iterator::GridIterator;

/// Planar or geographic extent
#[derive(PartialEq, Clone, Debug)]
pub struct Extent {
    pub minx: f64,
    pub miny: f64,
    pub maxx: f64,
    pub maxy: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.maxx - self.minx
    }
    pub fn height(&self) -> f64 {
        self.maxy - self.miny
    }
    /// Reject non-finite coordinates and inverted axes.
    /// Degenerate extents (min == max) are valid.
    pub fn validate(&self) -> Result<(), GridError> {
        let coords = [self.minx, self.miny, self.maxx, self.maxy];
        if coords.iter().any(|c| !c.is_finite()) {
            return Err(GridError::InvalidBounds(format!(
                "non-finite coordinate in {:?}",
                self
            )));
        }
        if self.maxx < self.minx {
            return Err(GridError::InvalidBounds(format!(
                "x_max ({}) is smaller than x_min ({})",
                self.maxx, self.minx
            )));
        }
        if self.maxy < self.miny {
            return Err(GridError::InvalidBounds(format!(
                "y_max ({}) is smaller than y_min ({})",
                self.maxy, self.miny
            )));
        }
        Ok(())
    }
    /// Check that the extent describes lon/lat degrees
    pub fn validate_lonlat(&self) -> Result<(), GridError> {
        self.validate()?;
        if self.minx < -180.0 || self.maxx > 180.0 {
            return Err(GridError::InvalidBounds(format!(
                "longitudes must be within [-180, 180], got [{}, {}]",
                self.minx, self.maxx
            )));
        }
        if self.miny < -90.0 || self.maxy > 90.0 {
            return Err(GridError::InvalidBounds(format!(
                "latitudes must be within [-90, 90], got [{}, {}]",
                self.miny, self.maxy
            )));
        }
        Ok(())
    }
}

/// Min and max grid cell numbers
#[derive(PartialEq, Clone, Debug)]
pub struct ExtentInt {
    pub minx: u32,
    pub miny: u32,
    pub maxx: u32,
    pub maxy: u32,
}

/// A generated grid cell
#[derive(PartialEq, Clone, Debug)]
pub struct Tile {
    /// 1-based sequence number in enumeration order
    pub index: u32,
    pub extent: Extent,
}

impl Tile {
    pub fn area(&self) -> f64 {
        self.extent.width() * self.extent.height()
    }
}

/// Regular grid of square cells over a projected extent
#[derive(Clone, Debug)]
pub struct TileGrid {
    /// The projected extent to cover, in meters.
    /// The (minx,miny) point is the origin of the grid: the lower left corner of the
    /// first tile is always placed on it. Whole cells are laid out towards (maxx,maxy);
    /// a leftover strip narrower than one cell is not covered.
    pub extent: Extent,
    /// Cell edge length in meters
    pub delta: f64,
}

impl TileGrid {
    pub fn new(extent: Extent, delta: f64) -> Result<TileGrid, GridError> {
        extent.validate()?;
        if !(delta.is_finite() && delta > 0.0) {
            return Err(GridError::InvalidBounds(format!(
                "cell size must be a positive number, got {}",
                delta
            )));
        }
        Ok(TileGrid { extent, delta })
    }
    /// Number of whole cells along x and y
    pub fn dims(&self) -> (u32, u32) {
        let i_dim = (self.extent.width() / self.delta).floor() as u32;
        let j_dim = (self.extent.height() / self.delta).floor() as u32;
        (i_dim, j_dim)
    }
    pub fn tile_count(&self) -> u64 {
        let (i_dim, j_dim) = self.dims();
        i_dim as u64 * j_dim as u64
    }
    /// Cell index limits of the grid
    pub fn limits(&self) -> ExtentInt {
        let (maxx, maxy) = self.dims();
        ExtentInt {
            minx: 0,
            miny: 0,
            maxx,
            maxy,
        }
    }
    /// Extent of the cell at column `i` and row `j` (zero-based)
    pub fn tile_extent(&self, i: u32, j: u32) -> Extent {
        let minx = self.extent.minx + i as f64 * self.delta;
        let miny = self.extent.miny + j as f64 * self.delta;
        Extent {
            minx,
            miny,
            maxx: minx + self.delta,
            maxy: miny + self.delta,
        }
    }
    pub fn tile_area(&self) -> f64 {
        self.delta * self.delta
    }
    /// Tiles numbered from 1, walking all rows of a column before the next column
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        GridIterator::new(self.limits())
            .enumerate()
            .map(move |(k, (i, j))| Tile {
                index: k as u32 + 1,
                extent: self.tile_extent(i, j),
            })
    }
    /// Union of all tile extents. `None` for an empty grid.
    pub fn covered_extent(&self) -> Option<Extent> {
        let (i_dim, j_dim) = self.dims();
        if i_dim == 0 || j_dim == 0 {
            return None;
        }
        Some(Extent {
            minx: self.extent.minx,
            miny: self.extent.miny,
            maxx: self.extent.minx + i_dim as f64 * self.delta,
            maxy: self.extent.miny + j_dim as f64 * self.delta,
        })
    }
}
