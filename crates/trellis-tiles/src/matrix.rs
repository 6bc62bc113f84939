//! Tile occupancy matrix.

use indexmap::IndexMap;
use trellis_core::{GridData, Placeable};

/// A sparse occupancy map over positioned tiles.
///
/// `x`/`y` are the smallest occupied coordinates and `width`/`height` the
/// extent of the occupied region, clamped to the requested minimums so an
/// empty or sparse tile grid still reports a usable size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMatrix {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    cells: IndexMap<(i32, i32), usize>,
}

impl TileMatrix {
    /// The tile index occupying the given cell, if any.
    pub fn tile_at(&self, x: i32, y: i32) -> Option<usize> {
        self.cells.get(&(x, y)).copied()
    }

    /// Number of occupied cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }
}

/// Build the occupancy matrix for a slice of tiles.
///
/// A tile's position comes from its declared hints when those are explicit,
/// otherwise from the resolved data of the last layout pass; tiles that are
/// unplaced on both counts are left out. Later tiles win when footprints
/// overlap, matching their stacking order.
pub fn build_matrix<I>(tiles: &[I], min_width: i32, min_height: i32) -> TileMatrix
where
    I: Placeable,
{
    let mut cells = IndexMap::new();
    let mut min_x = i32::MAX;
    let mut min_y = i32::MAX;
    let mut max_x = i32::MIN;
    let mut max_y = i32::MIN;

    for (index, tile) in tiles.iter().enumerate() {
        let Some(data) = tile_position(tile) else {
            continue;
        };
        min_x = min_x.min(data.x);
        min_y = min_y.min(data.y);
        max_x = max_x.max(data.x + data.w - 1);
        max_y = max_y.max(data.y + data.h - 1);
        for x in data.x..data.x + data.w {
            for y in data.y..data.y + data.h {
                cells.insert((x, y), index);
            }
        }
    }

    if cells.is_empty() {
        return TileMatrix {
            x: 0,
            y: 0,
            width: min_width.max(0),
            height: min_height.max(0),
            cells,
        };
    }

    TileMatrix {
        x: min_x,
        y: min_y,
        width: (max_x - min_x + 1).max(min_width),
        height: (max_y - min_y + 1).max(min_height),
        cells,
    }
}

/// The effective position of a tile: explicit hints win over resolved data.
pub(crate) fn tile_position<I: Placeable>(tile: &I) -> Option<GridData> {
    let hints = tile.grid_hints().normalized();
    if hints.is_explicit() {
        return Some(hints);
    }
    let data = tile.grid_data().normalized();
    data.is_explicit().then_some(data)
}
