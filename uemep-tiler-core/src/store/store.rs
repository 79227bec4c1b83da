//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::Error;

/// Destination of tile descriptor files
pub trait TileStore {
    fn info(&self) -> String;
    /// Create the destination if missing. Called once before the first write.
    fn prepare(&self) -> Result<(), Error>;
    fn write(&self, path: &str, obj: &[u8]) -> Result<(), Error>;
    fn exists(&self, path: &str) -> bool;
}
