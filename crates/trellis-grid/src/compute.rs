//! The full layout pass: matrix, weights, pixels.

use tracing::{debug, trace};

use trellis_core::{
    Bounds, GridData, LayoutError, LogicalGridConfig, Measurable, Placeable, Size, SizeHint,
};

use crate::matrix::GridMatrix;
use crate::pixel;
use crate::weights::resolve_weights;

/// The result of one layout pass.
///
/// `grid_data` holds the fully resolved hints per item (no auto values left);
/// callers that cache resolved data between passes store these back through
/// [`Placeable::set_grid_hints`] at their own discretion.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Resolved grid data per item, in input order
    pub grid_data: Vec<GridData>,
    /// Pixel bounds per item, in input order
    pub bounds: Vec<Bounds>,
    pub row_count: usize,
    pub column_count: usize,
    pub column_widths: Vec<f64>,
    pub row_heights: Vec<f64>,
}

/// Lay out `items` into a grid with `column_count` columns inside
/// `available` pixels.
///
/// Items are read through their [`Placeable`] and [`Measurable`] capabilities
/// and never mutated; the resolved placement comes back in the returned
/// [`GridLayout`].
pub fn compute_layout<I>(
    items: &[I],
    config: &LogicalGridConfig,
    column_count: usize,
    available: Size,
) -> Result<GridLayout, LayoutError>
where
    I: Placeable + Measurable,
{
    let hints: Vec<GridData> = items.iter().map(Placeable::grid_hints).collect();
    let matrix = GridMatrix::build(&hints, column_count);
    let row_count = matrix.row_count();
    let column_count = matrix.column_count();
    debug!(
        items = items.len(),
        columns = column_count,
        rows = row_count,
        "grid matrix built"
    );

    let mut placements = matrix.into_placements();
    resolve_weights(&mut placements);

    let preferred: Vec<Size> = items
        .iter()
        .map(|item| item.preferred_size(SizeHint::none()))
        .collect();

    let resolved = pixel::resolve(
        &placements,
        &preferred,
        row_count,
        column_count,
        config,
        available,
    )?;
    trace!(
        width = resolved.size.width,
        height = resolved.size.height,
        "pixel layout resolved"
    );

    Ok(GridLayout {
        grid_data: placements,
        bounds: resolved.bounds,
        row_count,
        column_count,
        column_widths: resolved.column_widths,
        row_heights: resolved.row_heights,
    })
}

/// The size the grid wants before any surplus or deficit distribution.
///
/// Runs the matrix pass and sums the base track sizes plus gaps; weights play
/// no role here.
pub fn preferred_layout_size<I>(
    items: &[I],
    config: &LogicalGridConfig,
    column_count: usize,
) -> Size
where
    I: Placeable + Measurable,
{
    let hints: Vec<GridData> = items.iter().map(Placeable::grid_hints).collect();
    let matrix = GridMatrix::build(&hints, column_count);
    let preferred: Vec<Size> = items
        .iter()
        .map(|item| item.preferred_size(SizeHint::none()))
        .collect();

    pixel::base_size(
        matrix.placements(),
        &preferred,
        matrix.row_count(),
        matrix.column_count(),
        &config.normalized(),
    )
}
