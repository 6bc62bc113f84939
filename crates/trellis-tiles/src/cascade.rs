//! Resize push-down cascade.

use std::collections::HashMap;

use indexmap::IndexMap;
use tracing::debug;
use trellis_core::{GridData, Placeable};

use crate::matrix::tile_position;

/// Per-column state the cascade maintains while walking tiles top to bottom.
///
/// `blocking` is the resized tile's new footprint in this column; it only
/// displaces tiles whose range actually intersects it. `moved_line` is the
/// bottom edge of the lowest tile that has already been pushed in this
/// column; everything whose top edge sits above it moves below it, keeping
/// the vertical order of the pushed tiles intact.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnBottom {
    blocking: Option<(i32, i32)>,
    moved_line: Option<i32>,
}

/// Push tiles out of the way of a resized or moved tile.
///
/// `new_grid_data` is the footprint the tile at `resized` is about to take;
/// the caller applies it to that tile itself. Every other tile whose cells
/// now collide is pushed straight down, transitively, and all moves are
/// committed through [`Placeable::set_grid_hints`] only after the full
/// cascade has been computed. Tiles without an explicit position are left to
/// the auto-flow grid and never touched; `ignore` exempts further tiles,
/// placeholders typically.
pub fn move_other_tiles_down<I>(
    tiles: &mut [I],
    resized: usize,
    new_grid_data: GridData,
    ignore: Option<&dyn Fn(&I) -> bool>,
) where
    I: Placeable,
{
    let new_data = new_grid_data.normalized();
    if !new_data.is_explicit() {
        return;
    }

    let mut bottoms: HashMap<i32, ColumnBottom> = HashMap::new();
    for column in new_data.x..new_data.x + new_data.w {
        bottoms.insert(
            column,
            ColumnBottom {
                blocking: Some((new_data.y, new_data.h)),
                moved_line: None,
            },
        );
    }

    let mut order: Vec<(usize, GridData)> = tiles
        .iter()
        .enumerate()
        .filter(|(index, tile)| {
            *index != resized && !ignore.is_some_and(|exempt| exempt(tile))
        })
        .filter_map(|(index, tile)| tile_position(tile).map(|data| (index, data)))
        .collect();
    order.sort_by_key(|(_, data)| (data.y, data.x));

    let mut moves: IndexMap<usize, GridData> = IndexMap::new();
    for (index, mut data) in order {
        let target = push_target(&bottoms, &data);
        if target > data.y {
            data.y = target;
            moves.insert(index, data);
            for column in data.x..data.x + data.w {
                let bottom = bottoms.entry(column).or_default();
                let line = data.y + data.h;
                bottom.moved_line = Some(bottom.moved_line.map_or(line, |l| l.max(line)));
            }
        }
    }

    if moves.is_empty() {
        return;
    }
    debug!(moved = moves.len(), "tiles pushed down after resize");
    for (index, data) in moves {
        tiles[index].set_grid_hints(data);
    }
}

/// The row the tile must move to, or its own row if it is clear.
///
/// Every moved line sits below the footprint's bottom edge, so the maximum
/// over the covered columns is already the final position; a pushed tile can
/// never land back inside the footprint.
fn push_target(bottoms: &HashMap<i32, ColumnBottom>, data: &GridData) -> i32 {
    let mut target = data.y;
    for column in data.x..data.x + data.w {
        let Some(bottom) = bottoms.get(&column) else {
            continue;
        };
        if let Some((block_y, block_h)) = bottom.blocking {
            if data.y < block_y + block_h && data.y + data.h > block_y {
                target = target.max(block_y + block_h);
            }
        }
        if let Some(line) = bottom.moved_line {
            if data.y < line {
                target = target.max(line);
            }
        }
    }
    target
}
