//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::countries::BoundingBoxTable;
use crate::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::env;
use std::error::Error as StdError;
use std::fs::{self, File};
use std::io::prelude::*;
use tera::{Context, Tera};
use tile_grid::Extent;

pub trait Config<'a, C: Deserialize<'a>>
where
    Self: std::marker::Sized,
{
    /// Read configuration
    fn from_config(config: &C) -> Result<Self, Error>;
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationCfg {
    pub config: TilingCfg,
}

#[derive(Deserialize, Clone, Debug)]
pub struct TilingCfg {
    /// Geographic bounds in degrees (x: longitude, y: latitude).
    /// May be omitted when `country` is set.
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
    /// Tile size in meters
    pub delta: f64,
    /// Subgrid size in meters, written into each tile descriptor
    pub tile_delta: f64,
    pub output_dir: String,
    /// Tile file name prefix
    pub tile_name: String,
    pub projection: String,
    /// `[lon_0, lat_0, false_easting, false_northing, earth_radius_or_ellipsoid]`
    pub projection_attributes: Vec<Value>,
    /// Replaces the bounds with the entry of the bounding box table
    pub country: Option<String>,
}

impl TilingCfg {
    /// Country name, if set and not empty
    pub fn country_name(&self) -> Option<&str> {
        self.country
            .as_ref()
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
    }
    /// Copy of this configuration with bounds taken from the country table
    pub fn with_country_bounds(&self, table: &BoundingBoxTable) -> Result<TilingCfg, Error> {
        let mut cfg = self.clone();
        if let Some(country) = self.country_name() {
            let bbox = table.lookup(country)?;
            info!("Using bounding box of '{}': {:?}", country, bbox);
            cfg.x_min = Some(bbox.minx);
            cfg.x_max = Some(bbox.maxx);
            cfg.y_min = Some(bbox.miny);
            cfg.y_max = Some(bbox.maxy);
        }
        Ok(cfg)
    }
    /// Geographic bounding box
    pub fn bounds(&self) -> Result<Extent, Error> {
        let field = |value: Option<f64>, name: &str| {
            value.ok_or_else(|| Error::Config(format!("Missing configuration entry '{}'", name)))
        };
        Ok(Extent {
            minx: field(self.x_min, "x_min")?,
            miny: field(self.y_min, "y_min")?,
            maxx: field(self.x_max, "x_max")?,
            maxy: field(self.y_max, "y_max")?,
        })
    }
    /// Check cell sizes and output naming
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.delta.is_finite() && self.delta > 0.0) {
            return Err(Error::Config(format!(
                "'delta' must be a positive number of meters, got {}",
                self.delta
            )));
        }
        if !(self.tile_delta.is_finite() && self.tile_delta > 0.0) {
            return Err(Error::Config(format!(
                "'tile_delta' must be a positive number of meters, got {}",
                self.tile_delta
            )));
        }
        if self.output_dir.is_empty() {
            return Err(Error::Config("'output_dir' must not be empty".to_string()));
        }
        Ok(())
    }
}

#[derive(Serialize, Debug)]
struct TemplateCfg {
    x_min: i32,
    x_max: i32,
    y_min: i32,
    y_max: i32,
    delta: i32,
    tile_delta: i32,
    output_dir: &'static str,
    tile_name: &'static str,
    projection: &'static str,
    projection_attributes: [i32; 5],
    country: &'static str,
}

#[derive(Serialize, Debug)]
struct TemplateAnnotations {
    x_min: &'static str,
    x_max: &'static str,
    y_min: &'static str,
    y_max: &'static str,
    delta: &'static str,
    tile_delta: &'static str,
    output_dir: &'static str,
    tile_name: &'static str,
    projection: &'static str,
    projection_attributes: &'static str,
    country: &'static str,
}

#[derive(Serialize, Debug)]
struct ConfigTemplate {
    config: TemplateCfg,
    annotations: TemplateAnnotations,
}

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Generate configuration template with a description of each entry
pub fn gen_config() -> Result<String, Error> {
    let template = ConfigTemplate {
        config: TemplateCfg {
            x_min: 0,
            x_max: 0,
            y_min: 0,
            y_max: 0,
            delta: 0,
            tile_delta: 0,
            output_dir: "./",
            tile_name: "",
            projection: "",
            projection_attributes: [0; 5],
            country: "",
        },
        annotations: TemplateAnnotations {
            x_min: "Minimum longitude (degrees)",
            x_max: "Maximum longitude (degrees)",
            y_min: "Minimum latitude (degrees)",
            y_max: "Maximum latitude (degrees)",
            delta: "Tile size in meters",
            tile_delta: "Subgrid size in meters",
            output_dir: "Output directory for tiles",
            tile_name: "Tile name prefix",
            projection: "Projection name (LAEA or RD)",
            projection_attributes:
                "[lon_0, lat_0, false_easting, false_northing, earth_radius (LAEA) or ellipsoid (RD)]",
            country: "Optional country name overriding the bounds (see country table)",
        },
    };
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    template
        .serialize(&mut ser)
        .map_err(|e| Error::Config(format!("Template error: {}", e)))?;
    String::from_utf8(buf).map_err(|e| Error::Config(format!("Template error: {}", e)))
}

/// Write the configuration template to `path`
pub fn write_config_template(path: &str) -> Result<(), Error> {
    let mut json = gen_config()?;
    json.push('\n');
    fs::write(path, json).map_err(|e| Error::io(path, e))
}

/// Load and parse the config file into an config struct.
pub fn read_config<T>(path: &str) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(_) => {
            return Err(Error::Config(format!(
                "Could not find config file '{}'",
                path
            )));
        }
    };
    let mut config_json = String::new();
    if let Err(err) = file.read_to_string(&mut config_json) {
        return Err(Error::Config(format!(
            "Error while reading config: [{}]",
            err
        )));
    };

    parse_config(config_json, path)
}

/// Parse the configuration into an config struct.
pub fn parse_config<T>(config_json: String, path: &str) -> Result<T, Error>
where
    T: for<'de> Deserialize<'de>,
{
    // Check for shell style ${var} expressions
    let re = Regex::new(r"\$\{([[:alnum:]_]+)\}").map_err(|e| Error::Config(e.to_string()))?;
    if re.is_match(&config_json) {
        return Err(Error::Config(
            "Replace environment variable syntax ${VARNAME} with `{{env.VARNAME}}`".to_string(),
        ));
    }

    // Parse template
    let mut tera = Tera::default();
    tera.add_raw_template(path, &config_json)
        .map_err(|e| Error::Config(format!("Template error: {}", e)))?;
    let mut context = Context::new();
    let mut env = HashMap::new();
    for (key, value) in env::vars() {
        env.insert(key, value);
    }
    context.insert("env", &env);
    let json = tera.render(path, &context).map_err(|e| {
        let cause = e.source().map(|s| s.to_string()).unwrap_or_else(|| e.to_string());
        Error::Config(format!("Template error: {}", cause))
    })?;

    serde_json::from_str::<T>(&json).map_err(|err| Error::Config(format!("{} - {}", path, err)))
}

/// Read the configuration and resolve an optional country against the
/// bounding box table at `country_table`.
pub fn load_config(path: &str, country_table: &str) -> Result<TilingCfg, Error> {
    info!("Reading configuration from '{}'", path);
    let config: ApplicationCfg = read_config(path)?;
    let cfg = config.config;
    if cfg.country_name().is_some() {
        let table = BoundingBoxTable::from_file(country_table)?;
        cfg.with_country_bounds(&table)
    } else {
        Ok(cfg)
    }
}
