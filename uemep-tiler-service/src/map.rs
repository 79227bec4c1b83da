//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Overview map of generated tiles

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::error::Error;
use std::path::PathBuf;
use tile_grid::{Extent, Projection, Tile};

/// Image width in pixels
pub const MAP_WIDTH: u32 = 1000;
/// Graticule spacing in degrees
pub const GRATICULE_STEP: i32 = 5;
const MARGIN: f64 = 0.05;
const GRATICULE_COLOR: RGBColor = RGBColor(190, 190, 190);

pub struct TileMap {
    pub path: PathBuf,
    pub projection: Projection,
}

/// Extent of `tiles` padded by 5% of the larger span
pub fn map_view(tiles: &[Tile]) -> Option<Extent> {
    let first = tiles.first()?;
    let mut ext = first.extent.clone();
    for tile in &tiles[1..] {
        ext.minx = ext.minx.min(tile.extent.minx);
        ext.miny = ext.miny.min(tile.extent.miny);
        ext.maxx = ext.maxx.max(tile.extent.maxx);
        ext.maxy = ext.maxy.max(tile.extent.maxy);
    }
    let pad = ext.width().max(ext.height()) * MARGIN;
    Some(Extent {
        minx: ext.minx - pad,
        miny: ext.miny - pad,
        maxx: ext.maxx + pad,
        maxy: ext.maxy + pad,
    })
}

/// Image size keeping the aspect ratio of `view`
pub fn image_size(view: &Extent) -> (u32, u32) {
    let ratio = view.height() / view.width();
    let height = (MAP_WIDTH as f64 * ratio).round().max(100.0).min(4000.0);
    (MAP_WIDTH, height as u32)
}

fn inside(view: &Extent, pt: (f64, f64)) -> bool {
    pt.0 >= view.minx && pt.0 <= view.maxx && pt.1 >= view.miny && pt.1 <= view.maxy
}

/// Split a projected polyline into the runs visible in `view`
fn visible_runs<I>(view: &Extent, points: I) -> Vec<Vec<(f64, f64)>>
where
    I: Iterator<Item = Option<(f64, f64)>>,
{
    let mut runs = Vec::new();
    let mut run = Vec::new();
    for pt in points {
        match pt {
            Some(pt) if inside(view, pt) => run.push(pt),
            _ => {
                if run.len() > 1 {
                    runs.push(run);
                }
                run = Vec::new();
            }
        }
    }
    if run.len() > 1 {
        runs.push(run);
    }
    runs
}

/// Meridians and parallels every [`GRATICULE_STEP`] degrees, clipped to `view`
pub fn graticule(projection: &Projection, view: &Extent) -> Vec<Vec<(f64, f64)>> {
    let mut lines = Vec::new();
    for lon in (-180..=180).step_by(GRATICULE_STEP as usize) {
        let points = (-89..=89).map(|lat| projection.project(lon as f64, lat as f64).ok());
        lines.extend(visible_runs(view, points));
    }
    for lat in (-85..=85).step_by(GRATICULE_STEP as usize) {
        let points = (-180..=180).map(|lon| projection.project(lon as f64, lat as f64).ok());
        lines.extend(visible_runs(view, points));
    }
    lines
}

impl TileMap {
    pub fn new(path: PathBuf, projection: Projection) -> TileMap {
        TileMap { path, projection }
    }

    pub fn render(&self, tiles: &[Tile]) -> Result<(), Box<dyn Error>> {
        let view = map_view(tiles).ok_or("No tiles to draw")?;
        let size = image_size(&view);
        debug!("Rendering {} tiles into {:?}", tiles.len(), size);

        let root = BitMapBackend::new(&self.path, size).into_drawing_area();
        root.fill(&WHITE)?;
        let mut chart = ChartBuilder::on(&root)
            .build_cartesian_2d(view.minx..view.maxx, view.miny..view.maxy)?;

        chart.draw_series(
            graticule(&self.projection, &view)
                .into_iter()
                .map(|line| PathElement::new(line, GRATICULE_COLOR.stroke_width(1))),
        )?;
        chart.draw_series(tiles.iter().map(|tile| {
            let ext = &tile.extent;
            Rectangle::new(
                [(ext.minx, ext.miny), (ext.maxx, ext.maxy)],
                BLUE.stroke_width(1),
            )
        }))?;

        // Labels only when they fit into the tiles
        let tile_px = tiles[0].extent.width() / view.width() * size.0 as f64;
        if tile_px >= 24.0 {
            let font_size = (tile_px / 4.0).min(20.0);
            let style = ("sans-serif", font_size)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Center));
            chart.draw_series(tiles.iter().map(|tile| {
                let ext = &tile.extent;
                let centre = ((ext.minx + ext.maxx) / 2.0, (ext.miny + ext.maxy) / 2.0);
                Text::new(tile.index.to_string(), centre, style.clone())
            }))?;
        }

        root.present()?;
        info!("Tile map written to {}", self.path.display());
        Ok(())
    }
}
