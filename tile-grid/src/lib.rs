//! A library for partitioning a projected bounding box into a regular tile grid
//!
//! ## Partitioning
//!
//! ```rust
//! use tile_grid::{Extent, TileGrid};
//!
//! let grid = TileGrid::new(
//!     Extent {
//!         minx: 0.0,
//!         miny: 0.0,
//!         maxx: 20000.0,
//!         maxy: 10000.0,
//!     },
//!     10000.0,
//! )
//! .unwrap();
//! let tiles = grid.tiles().collect::<Vec<_>>();
//! assert_eq!(tiles.len(), 2);
//! assert_eq!(
//!     tiles[1].extent,
//!     Extent {
//!         minx: 10000.0,
//!         miny: 0.0,
//!         maxx: 20000.0,
//!         maxy: 10000.0,
//!     }
//! );
//! ```
//!
//! ## Projections
//!
//! ```rust
//! use tile_grid::{Extent, Projection, ProjectionParam, TileGrid};
//!
//! let params = [10.0, 52.0, 4321000.0, 3210000.0, 6378137.0]
//!     .iter()
//!     .map(|v| ProjectionParam::Number(*v))
//!     .collect::<Vec<_>>();
//! let proj = Projection::from_params("LAEA", &params).unwrap();
//! let bbox = Extent {
//!     minx: 4.5,
//!     miny: 57.9,
//!     maxx: 31.2,
//!     maxy: 71.2,
//! };
//! let grid = TileGrid::new(proj.project_extent(&bbox).unwrap(), 100000.0).unwrap();
//! for tile in grid.tiles() {
//!     println!("Tile {}: {:?}", tile.index, tile.extent);
//! }
//! ```

mod error;
mod grid;
mod grid_iterator;
mod projection;

pub use error::GridError;
pub use grid::{Extent, ExtentInt, Tile, TileGrid};
pub use grid_iterator::GridIterator;
pub use projection::{Ellipsoid, Laea, Projection, ProjectionKind, ProjectionParam, Sterea};
