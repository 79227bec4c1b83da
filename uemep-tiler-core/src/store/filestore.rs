//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::store::store::TileStore;
use crate::Error;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes descriptor files into a directory
#[derive(Clone, Debug)]
pub struct Filestore {
    pub basepath: String,
}

impl Filestore {
    pub fn new(basepath: &str) -> Filestore {
        Filestore {
            basepath: basepath.to_string(),
        }
    }
    pub fn fullpath(&self, path: &str) -> PathBuf {
        Path::new(&self.basepath).join(path)
    }
}

impl TileStore for Filestore {
    fn info(&self) -> String {
        format!("Tile directory: {}", self.basepath)
    }
    fn prepare(&self) -> Result<(), Error> {
        if !Path::new(&self.basepath).is_dir() {
            info!("Creating output directory '{}'", self.basepath);
        }
        fs::create_dir_all(&self.basepath).map_err(|e| Error::io(&self.basepath, e))
    }
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), Error> {
        let fullpath = self.fullpath(path);
        let display = fullpath.display().to_string();
        debug!("Filestore.write {}", display);
        let mut f = File::create(&fullpath).map_err(|e| Error::io(&display, e))?;
        f.write_all(obj).map_err(|e| Error::io(&display, e))
    }
    fn exists(&self, path: &str) -> bool {
        self.fullpath(path).exists()
    }
}
