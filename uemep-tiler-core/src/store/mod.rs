//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

pub mod descriptor;
pub mod filestore;
pub mod store;

#[cfg(test)]
mod descriptor_test;

pub use self::descriptor::DescriptorWriter;
pub use self::filestore::Filestore;
pub use self::store::TileStore;
