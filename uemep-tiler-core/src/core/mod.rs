//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod config;
pub mod countries;
pub mod gridcfg;

pub use self::config::{
    gen_config, load_config, parse_config, read_config, write_config_template, ApplicationCfg,
    Config, TilingCfg,
};
pub use self::countries::BoundingBoxTable;

#[cfg(test)]
mod countries_test;
