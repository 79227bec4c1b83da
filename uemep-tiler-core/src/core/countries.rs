//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Country bounding box lookup table

use crate::Error;
use std::collections::BTreeMap;
use std::fs;
use tile_grid::Extent;

pub const DEFAULT_COUNTRY_TABLE: &str = "data/europe_bounding_boxes.json";

/// Geographic bounds of a table entry
#[derive(Deserialize, Clone, Debug)]
pub struct BoundsCfg {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl From<&BoundsCfg> for Extent {
    fn from(cfg: &BoundsCfg) -> Extent {
        Extent {
            minx: cfg.x_min,
            miny: cfg.y_min,
            maxx: cfg.x_max,
            maxy: cfg.y_max,
        }
    }
}

/// Read-only mapping of country name to geographic bounds
#[derive(Clone, Debug, Default)]
pub struct BoundingBoxTable {
    entries: BTreeMap<String, BoundsCfg>,
}

impl BoundingBoxTable {
    pub fn from_file(path: &str) -> Result<BoundingBoxTable, Error> {
        debug!("Reading country bounding boxes from '{}'", path);
        let json = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Could not read country bounding box table '{}': {}",
                path, e
            ))
        })?;
        BoundingBoxTable::parse(&json, path)
    }
    pub fn parse(json: &str, path: &str) -> Result<BoundingBoxTable, Error> {
        let entries: BTreeMap<String, BoundsCfg> = serde_json::from_str(json)
            .map_err(|err| Error::Config(format!("{} - {}", path, err)))?;
        Ok(BoundingBoxTable { entries })
    }
    pub fn lookup(&self, country: &str) -> Result<Extent, Error> {
        self.entries
            .get(country)
            .map(Extent::from)
            .ok_or_else(|| Error::UnknownCountry(country.to_string()))
    }
    pub fn countries(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
