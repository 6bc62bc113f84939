//! Logical grid layout for form-like containers.
//!
//! Items declare [`GridData`](trellis_core::GridData) hints; the engine turns
//! them into concrete pixel bounds in three passes:
//!
//! 1. **Matrix building**: assigns grid coordinates to auto-placed items
//! 2. **Weight resolution**: fills in auto growth weights from siblings
//! 3. **Pixel resolution**: combines the matrix, measured preferred sizes,
//!    and the available container size into per-item bounds
//!
//! The matrix and weights are derived state, rebuilt on every pass and
//! discarded after pixel resolution.
//!
//! # Example
//!
//! ```
//! use trellis_core::{GridCell, GridData, LogicalGridConfig, Size};
//! use trellis_grid::compute_layout;
//!
//! let cells = vec![
//!     GridCell::new(GridData::new(), Size::new(60.0, 20.0)),
//!     GridCell::new(GridData::new(), Size::new(80.0, 20.0)),
//! ];
//! let layout = compute_layout(
//!     &cells,
//!     &LogicalGridConfig::default(),
//!     2,
//!     Size::new(300.0, 20.0),
//! )
//! .unwrap();
//! assert_eq!(layout.bounds.len(), 2);
//! ```

mod compute;
mod matrix;
mod pixel;
mod weights;

pub use compute::{compute_layout, preferred_layout_size, GridLayout};
pub use matrix::GridMatrix;
pub use pixel::{resolve, PixelLayout};
pub use weights::resolve_weights;
