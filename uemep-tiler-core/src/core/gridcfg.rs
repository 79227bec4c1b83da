//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::config::TilingCfg;
use crate::core::Config;
use crate::Error;
use serde_json::Value;
use tile_grid::{GridError, Projection, ProjectionParam, TileGrid};

fn projection_param(pos: usize, value: &Value) -> Result<ProjectionParam, Error> {
    match value {
        Value::Number(n) => n.as_f64().map(ProjectionParam::Number).ok_or_else(|| {
            GridError::InvalidProjectionParameters(format!(
                "attribute {} is out of range: {}",
                pos, n
            ))
            .into()
        }),
        Value::String(s) => Ok(ProjectionParam::Name(s.clone())),
        _ => Err(GridError::InvalidProjectionParameters(format!(
            "attribute {} must be a number or an ellipsoid name, got {}",
            pos, value
        ))
        .into()),
    }
}

impl<'a> Config<'a, TilingCfg> for Projection {
    fn from_config(cfg: &TilingCfg) -> Result<Self, Error> {
        if cfg.projection_attributes.len() > 5 {
            warn!(
                "Ignoring projection attributes after the fifth: {:?}",
                &cfg.projection_attributes[5..]
            );
        }
        let params = cfg
            .projection_attributes
            .iter()
            .enumerate()
            .map(|(pos, value)| projection_param(pos, value))
            .collect::<Result<Vec<_>, _>>()?;
        let projection = Projection::from_params(&cfg.projection, &params)?;
        debug!("Projection: {:?}", projection);
        Ok(projection)
    }
}

impl<'a> Config<'a, TilingCfg> for TileGrid {
    /// Grid over the projected bounding box of the configuration
    fn from_config(cfg: &TilingCfg) -> Result<Self, Error> {
        let projection = Projection::from_config(cfg)?;
        cfg.validate()?;
        let bounds = cfg.bounds()?;
        bounds.validate_lonlat()?;
        let extent = projection.project_extent(&bounds)?;
        debug!("Projected extent: {:?}", extent);
        let grid = TileGrid::new(extent, cfg.delta)?;
        Ok(grid)
    }
}
