//! Pixel layout resolution.
//!
//! Converts the abstract matrix (positions, spans, resolved weights) plus
//! measured preferred sizes and the available container size into concrete
//! per-item pixel bounds. All distribution arithmetic is floating point; the
//! rounding remainder goes to the last weighted track so tracks plus gaps sum
//! to exactly the available extent.

use smallvec::SmallVec;

use trellis_core::{Bounds, GridData, HAlign, LayoutError, LogicalGridConfig, Size, VAlign};

/// Resolved pixel geometry for one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelLayout {
    /// Final bounds per item, in input order
    pub bounds: Vec<Bounds>,
    pub column_widths: Vec<f64>,
    pub row_heights: Vec<f64>,
    /// Total grid extent including gaps
    pub size: Size,
}

/// One item's contribution to a track axis.
struct TrackCell {
    start: usize,
    span: usize,
    preferred: f64,
    weight: f64,
}

/// Resolve pixel bounds for positioned grid data.
///
/// `placements` must carry resolved coordinates (see
/// [`GridMatrix`](crate::GridMatrix)); auto weights that were never resolved
/// are treated as 0. `preferred` holds the measured size per item, parallel
/// to `placements`.
pub fn resolve(
    placements: &[GridData],
    preferred: &[Size],
    row_count: usize,
    column_count: usize,
    config: &LogicalGridConfig,
    available: Size,
) -> Result<PixelLayout, LayoutError> {
    if preferred.len() != placements.len() {
        return Err(LayoutError::ItemCountMismatch {
            expected: placements.len(),
            got: preferred.len(),
        });
    }

    let config = config.normalized();
    let column_count = column_count
        .max(1)
        .max(extent(placements, |d| (d.x, d.w)));
    let row_count = row_count.max(1).max(extent(placements, |d| (d.y, d.h)));

    let column_cells: Vec<TrackCell> = placements
        .iter()
        .zip(preferred)
        .map(|(data, size)| TrackCell {
            start: data.x.max(0) as usize,
            span: data.w as usize,
            preferred: effective_width(data, size.width, &config),
            weight: data.weight_x.max(0.0),
        })
        .collect();
    let row_cells: Vec<TrackCell> = placements
        .iter()
        .zip(preferred)
        .map(|(data, size)| TrackCell {
            start: data.y.max(0) as usize,
            span: data.h as usize,
            preferred: effective_height(data, size.height, &config),
            weight: data.weight_y.max(0.0),
        })
        .collect();

    let column_widths = track_sizes(
        column_count,
        &column_cells,
        config.hgap,
        available.width,
        config.min_column_width,
    );
    let row_heights = track_sizes(
        row_count,
        &row_cells,
        config.vgap,
        available.height,
        config.min_row_height,
    );

    let column_offsets = track_offsets(&column_widths, config.hgap);
    let row_offsets = track_offsets(&row_heights, config.vgap);

    let bounds = placements
        .iter()
        .zip(&column_cells)
        .zip(&row_cells)
        .map(|((data, col), row)| {
            let cell_x = column_offsets[col.start];
            let cell_y = row_offsets[row.start];
            let cell_w = span_extent(&column_widths, col.start, col.span, config.hgap);
            let cell_h = span_extent(&row_heights, row.start, row.span, config.vgap);

            let width = if data.fill_horizontal {
                cell_w
            } else {
                col.preferred.min(cell_w)
            };
            let height = if data.fill_vertical {
                cell_h
            } else {
                row.preferred.min(cell_h)
            };

            let x = cell_x
                + match data.horizontal_alignment {
                    HAlign::Left => 0.0,
                    HAlign::Center => (cell_w - width) / 2.0,
                    HAlign::Right => cell_w - width,
                };
            let y = cell_y
                + match data.vertical_alignment {
                    VAlign::Top => 0.0,
                    VAlign::Middle => (cell_h - height) / 2.0,
                    VAlign::Bottom => cell_h - height,
                };

            Bounds::new(x, y, width, height)
        })
        .collect();

    let size = Size::new(
        column_widths.iter().sum::<f64>() + config.hgap * (column_count - 1) as f64,
        row_heights.iter().sum::<f64>() + config.vgap * (row_count - 1) as f64,
    );

    Ok(PixelLayout {
        bounds,
        column_widths,
        row_heights,
        size,
    })
}

/// Base track sizes without any surplus/deficit distribution.
pub(crate) fn base_size(
    placements: &[GridData],
    preferred: &[Size],
    row_count: usize,
    column_count: usize,
    config: &LogicalGridConfig,
) -> Size {
    let column_count = column_count
        .max(1)
        .max(extent(placements, |d| (d.x, d.w)));
    let row_count = row_count.max(1).max(extent(placements, |d| (d.y, d.h)));

    let mut widths = vec![0.0_f64; column_count];
    let mut heights = vec![0.0_f64; row_count];
    for (data, size) in placements.iter().zip(preferred) {
        let column_cell = TrackCell {
            start: data.x.max(0) as usize,
            span: data.w as usize,
            preferred: effective_width(data, size.width, config),
            weight: 0.0,
        };
        let row_cell = TrackCell {
            start: data.y.max(0) as usize,
            span: data.h as usize,
            preferred: effective_height(data, size.height, config),
            weight: 0.0,
        };
        apply_base(&mut widths, &column_cell, config.hgap);
        apply_base(&mut heights, &row_cell, config.vgap);
    }

    Size::new(
        widths.iter().sum::<f64>() + config.hgap * (column_count - 1) as f64,
        heights.iter().sum::<f64>() + config.vgap * (row_count - 1) as f64,
    )
}

fn extent(placements: &[GridData], f: impl Fn(&GridData) -> (i32, i32)) -> usize {
    placements
        .iter()
        .map(|d| {
            let (start, span) = f(d);
            (start.max(0) + span.max(1)) as usize
        })
        .max()
        .unwrap_or(0)
}

/// The effective preferred width of an item: an explicit pixel override wins,
/// then the configured logical width (unless the item opted into its UI
/// width), then the measured size.
fn effective_width(data: &GridData, measured: f64, config: &LogicalGridConfig) -> f64 {
    if data.width_in_pixel > 0.0 {
        data.width_in_pixel
    } else if !data.use_ui_width && config.column_width > 0.0 {
        config.column_width * data.w as f64 + config.hgap * (data.w - 1) as f64
    } else {
        measured.max(0.0)
    }
}

fn effective_height(data: &GridData, measured: f64, config: &LogicalGridConfig) -> f64 {
    if data.height_in_pixel > 0.0 {
        data.height_in_pixel
    } else if !data.use_ui_height && config.row_height > 0.0 {
        config.row_height * data.h as f64 + config.vgap * (data.h - 1) as f64
    } else {
        measured.max(0.0)
    }
}

/// Resolve one axis: base sizes from preferred sizes, then surplus/deficit
/// distribution by aggregate weight.
fn track_sizes(count: usize, cells: &[TrackCell], gap: f64, available: f64, min: f64) -> Vec<f64> {
    let mut sizes = vec![0.0_f64; count];

    // Single-span items set the base; spanned items only raise the columns
    // they cover when the combined base falls short.
    for cell in cells.iter().filter(|c| c.span == 1) {
        apply_base(&mut sizes, cell, gap);
    }
    for cell in cells.iter().filter(|c| c.span > 1) {
        apply_base(&mut sizes, cell, gap);
    }

    // Aggregate weight per track: a spanned item spreads its weight evenly.
    let mut weights = vec![0.0_f64; count];
    for cell in cells {
        let end = (cell.start + cell.span).min(count);
        if end <= cell.start {
            continue;
        }
        let per_track = cell.weight / cell.span as f64;
        for weight in &mut weights[cell.start..end] {
            *weight = weight.max(per_track);
        }
    }
    let total_weight: f64 = weights.iter().sum();

    let gaps = gap * count.saturating_sub(1) as f64;
    let delta = available - (sizes.iter().sum::<f64>() + gaps);

    if total_weight > 0.0 {
        if delta > 0.0 {
            for (size, weight) in sizes.iter_mut().zip(&weights) {
                *size += delta * weight / total_weight;
            }
        } else if delta < 0.0 {
            shrink(&mut sizes, &weights, -delta, min);
        }

        // Rounding remainder goes to the last weighted track.
        let used: f64 = sizes.iter().sum::<f64>() + gaps;
        let remainder = available - used;
        if remainder != 0.0 {
            if let Some(last) = (0..count).rev().find(|&t| weights[t] > 0.0) {
                if sizes[last] + remainder >= min {
                    sizes[last] += remainder;
                }
            }
        }
    }

    sizes
}

fn apply_base(sizes: &mut [f64], cell: &TrackCell, gap: f64) {
    let end = (cell.start + cell.span).min(sizes.len());
    if end <= cell.start {
        return;
    }
    if cell.span == 1 {
        sizes[cell.start] = sizes[cell.start].max(cell.preferred);
        return;
    }

    let covered = &mut sizes[cell.start..end];
    let span_gaps = gap * (covered.len() - 1) as f64;
    let current: f64 = covered.iter().sum::<f64>() + span_gaps;
    let deficit = cell.preferred - current;
    if deficit <= 0.0 {
        return;
    }

    // Distribute the shortfall pro rata by current base, evenly when the
    // covered tracks are all still empty.
    let base_total: f64 = covered.iter().sum();
    if base_total > 0.0 {
        let shares: SmallVec<[f64; 8]> = covered.iter().map(|s| s / base_total).collect();
        for (size, share) in covered.iter_mut().zip(shares) {
            *size += deficit * share;
        }
    } else {
        let share = deficit / covered.len() as f64;
        for size in covered.iter_mut() {
            *size += share;
        }
    }
}

/// Shrink weighted tracks toward the floor until the deficit is absorbed.
fn shrink(sizes: &mut [f64], weights: &[f64], mut deficit: f64, min: f64) {
    for _ in 0..sizes.len() {
        if deficit <= f64::EPSILON {
            break;
        }
        let shrinkable: f64 = sizes
            .iter()
            .zip(weights)
            .filter(|(size, weight)| **weight > 0.0 && **size > min)
            .map(|(_, weight)| *weight)
            .sum();
        if shrinkable <= 0.0 {
            break;
        }

        let mut cut_total = 0.0;
        for (size, weight) in sizes.iter_mut().zip(weights) {
            if *weight <= 0.0 || *size <= min {
                continue;
            }
            let cut = (deficit * weight / shrinkable).min(*size - min);
            *size -= cut;
            cut_total += cut;
        }
        if cut_total <= 0.0 {
            break;
        }
        deficit -= cut_total;
    }
}

fn span_extent(sizes: &[f64], start: usize, span: usize, gap: f64) -> f64 {
    let end = (start + span).min(sizes.len());
    if end <= start {
        return 0.0;
    }
    sizes[start..end].iter().sum::<f64>() + gap * (end - start - 1) as f64
}

fn track_offsets(sizes: &[f64], gap: f64) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(sizes.len());
    let mut current = 0.0;
    for &size in sizes {
        offsets.push(current);
        current += size + gap;
    }
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(values: &[(f64, f64)]) -> Vec<Size> {
        values.iter().map(|&(w, h)| Size::new(w, h)).collect()
    }

    #[test]
    fn test_sole_weighted_item_fills_available_width() {
        let placements = vec![GridData::at(0, 0).with_weight_x(1.0)];
        let preferred = sizes(&[(100.0, 20.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            3,
            &LogicalGridConfig::default(),
            Size::new(300.0, 20.0),
        )
        .unwrap();

        assert!((layout.bounds[0].width - 300.0).abs() < 0.001);
        let total: f64 = layout.column_widths.iter().sum();
        assert!((total - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_zero_weight_keeps_preferred_width() {
        let placements = vec![GridData::at(0, 0).with_weight_x(0.0)];
        let preferred = sizes(&[(100.0, 20.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(300.0, 20.0),
        )
        .unwrap();

        assert!((layout.bounds[0].width - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_surplus_split_by_weight() {
        let placements = vec![
            GridData::at(0, 0).with_weight_x(0.25),
            GridData::at(1, 0).with_weight_x(0.75),
        ];
        let preferred = sizes(&[(50.0, 20.0), (50.0, 20.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            2,
            &LogicalGridConfig::default(),
            Size::new(300.0, 20.0),
        )
        .unwrap();

        // Surplus 200 split 1:3.
        assert!((layout.column_widths[0] - 100.0).abs() < 0.001);
        assert!((layout.column_widths[1] - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_columns_sum_exactly_with_remainder_fixup() {
        let placements = vec![
            GridData::at(0, 0).with_weight_x(1.0 / 3.0),
            GridData::at(1, 0).with_weight_x(1.0 / 3.0),
            GridData::at(2, 0).with_weight_x(1.0 / 3.0),
        ];
        let preferred = sizes(&[(0.0, 10.0), (0.0, 10.0), (0.0, 10.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            3,
            &LogicalGridConfig::default(),
            Size::new(100.0, 10.0),
        )
        .unwrap();

        let total: f64 = layout.column_widths.iter().sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_overflow_shrinks_weighted_columns_to_floor() {
        let placements = vec![
            GridData::at(0, 0).with_weight_x(1.0),
            GridData::at(1, 0).with_weight_x(1.0),
        ];
        let preferred = sizes(&[(100.0, 10.0), (100.0, 10.0)]);
        let config = LogicalGridConfig::default().with_minimums(80.0, 0.0);
        let layout = resolve(&placements, &preferred, 1, 2, &config, Size::new(100.0, 10.0)).unwrap();

        // Both columns stop at the floor even though the deficit is larger.
        assert!((layout.column_widths[0] - 80.0).abs() < 0.001);
        assert!((layout.column_widths[1] - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_unweighted_overflow_is_left_alone() {
        let placements = vec![GridData::at(0, 0).with_weight_x(0.0)];
        let preferred = sizes(&[(200.0, 10.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(100.0, 10.0),
        )
        .unwrap();

        assert!((layout.column_widths[0] - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_spanned_item_deficit_distributed() {
        // Two narrow columns from single-span items, one wide spanning item.
        let placements = vec![
            GridData::at(0, 0).with_weight_x(0.0),
            GridData::at(1, 0).with_weight_x(0.0),
            GridData::at(0, 1).with_span(2, 1).with_weight_x(0.0),
        ];
        let preferred = sizes(&[(30.0, 10.0), (10.0, 10.0), (80.0, 10.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            2,
            2,
            &LogicalGridConfig::default(),
            Size::new(80.0, 20.0),
        )
        .unwrap();

        // Deficit of 40 split pro rata 3:1 over bases 30 and 10.
        assert!((layout.column_widths[0] - 60.0).abs() < 0.001);
        assert!((layout.column_widths[1] - 20.0).abs() < 0.001);
    }

    #[test]
    fn test_no_fill_applies_alignment() {
        let placements = vec![GridData::at(0, 0)
            .with_weight_x(1.0)
            .with_fill(false, false)
            .with_alignment(HAlign::Right, VAlign::Bottom)];
        let preferred = sizes(&[(50.0, 10.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(200.0, 40.0),
        )
        .unwrap();

        let bounds = layout.bounds[0];
        assert!((bounds.width - 50.0).abs() < 0.001);
        assert!((bounds.x - 150.0).abs() < 0.001);
        assert!((bounds.height - 10.0).abs() < 0.001);
        // Row height stays at the preferred 10 (weight_y defaults to auto,
        // treated as 0 here), so bottom alignment has no room; centre the
        // check on the horizontal axis.
        assert!(bounds.y >= 0.0);
    }

    #[test]
    fn test_no_fill_centers_content() {
        let placements = vec![GridData::at(0, 0)
            .with_weight_x(1.0)
            .with_weight_y(1.0)
            .with_fill(false, false)
            .with_alignment(HAlign::Center, VAlign::Middle)];
        let preferred = sizes(&[(50.0, 10.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(200.0, 40.0),
        )
        .unwrap();

        let bounds = layout.bounds[0];
        assert!((bounds.x - 75.0).abs() < 0.001);
        assert!((bounds.y - 15.0).abs() < 0.001);
    }

    #[test]
    fn test_pixel_override_wins_over_measurement() {
        let placements = vec![GridData::at(0, 0)
            .with_weight_x(0.0)
            .with_pixel_size(120.0, 0.0)];
        let preferred = sizes(&[(60.0, 10.0)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(300.0, 10.0),
        )
        .unwrap();

        assert!((layout.column_widths[0] - 120.0).abs() < 0.001);
    }

    #[test]
    fn test_logical_column_width_unless_ui_width() {
        let config = LogicalGridConfig::default().with_cell_size(100.0, 0.0);
        let placements = vec![
            GridData::at(0, 0).with_weight_x(0.0),
            GridData::at(1, 0).with_weight_x(0.0),
        ];
        let mut ui = placements.clone();
        ui[1].use_ui_width = true;

        let preferred = sizes(&[(40.0, 10.0), (40.0, 10.0)]);
        let logical = resolve(&placements, &preferred, 1, 2, &config, Size::new(0.0, 10.0)).unwrap();
        let measured = resolve(&ui, &preferred, 1, 2, &config, Size::new(0.0, 10.0)).unwrap();

        assert!((logical.column_widths[1] - 100.0).abs() < 0.001);
        assert!((measured.column_widths[1] - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_gaps_offset_cells() {
        let config = LogicalGridConfig::with_gaps(10.0, 4.0);
        let placements = vec![
            GridData::at(0, 0).with_weight_x(0.0),
            GridData::at(1, 0).with_weight_x(0.0),
        ];
        let preferred = sizes(&[(50.0, 20.0), (50.0, 20.0)]);
        let layout = resolve(&placements, &preferred, 1, 2, &config, Size::new(110.0, 20.0)).unwrap();

        assert!((layout.bounds[1].x - 60.0).abs() < 0.001);
        assert!((layout.size.width - 110.0).abs() < 0.001);
    }

    #[test]
    fn test_missing_measurement_is_zero() {
        let placements = vec![GridData::at(0, 0).with_weight_x(0.0)];
        let preferred = sizes(&[(f64::NAN, f64::NAN)]);
        let layout = resolve(
            &placements,
            &preferred,
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(100.0, 100.0),
        )
        .unwrap();

        assert_eq!(layout.bounds[0].width, 0.0);
    }

    #[test]
    fn test_mismatched_slices_error() {
        let placements = vec![GridData::at(0, 0)];
        let result = resolve(
            &placements,
            &[],
            1,
            1,
            &LogicalGridConfig::default(),
            Size::new(100.0, 100.0),
        );
        assert!(matches!(
            result,
            Err(LayoutError::ItemCountMismatch { expected: 1, got: 0 })
        ));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let placements = vec![
            GridData::at(0, 0).with_weight_x(0.3),
            GridData::at(1, 0).with_weight_x(0.7),
            GridData::at(0, 1).with_span(2, 1).with_weight_x(1.0),
        ];
        let preferred = sizes(&[(37.0, 13.0), (53.0, 19.0), (91.0, 23.0)]);
        let config = LogicalGridConfig::with_gaps(3.0, 5.0);
        let available = Size::new(257.0, 131.0);

        let first = resolve(&placements, &preferred, 2, 2, &config, available).unwrap();
        let second = resolve(&placements, &preferred, 2, 2, &config, available).unwrap();
        assert_eq!(first, second);
        for (a, b) in first.bounds.iter().zip(&second.bounds) {
            assert_eq!(a.x.to_bits(), b.x.to_bits());
            assert_eq!(a.width.to_bits(), b.width.to_bits());
        }
    }
}
