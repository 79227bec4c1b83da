//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use std::io;
use thiserror::Error;
use tile_grid::GridError;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing or malformed configuration
    #[error("{0}")]
    Config(String),
    /// Projection or bounds rejected by the grid library
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("Country '{0}' not found in bounding box table")]
    UnknownCountry(String),
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: &str, source: io::Error) -> Error {
        Error::Io {
            path: path.to_string(),
            source,
        }
    }
}
