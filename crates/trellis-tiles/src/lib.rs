//! Tile grid placement.
//!
//! Tile grids reuse the logical grid's [`GridData`](trellis_core::GridData)
//! hints but add two behaviours of their own: an occupancy matrix over the
//! tiles' resolved positions, and a push-down cascade that makes room when a
//! tile is resized interactively.

mod cascade;
mod matrix;

pub use cascade::move_other_tiles_down;
pub use matrix::{build_matrix, TileMatrix};
