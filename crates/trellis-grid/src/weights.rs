//! Growth weight resolution.
//!
//! Fills in auto weights from sibling distribution so declarers never have to
//! compute exact proportions. The common form pattern falls out of the rules:
//! a fixed label column next to an elastic input column needs no explicit
//! weights at all.

use std::collections::HashMap;

use trellis_core::GridData;

/// Resolve auto growth weights in place.
///
/// Expects positioned grid data (coordinates already assigned by the matrix
/// builder). Rules:
///
/// - An auto `weight_x` becomes an even share of 1.0 among the auto-weighted
///   items of its origin row; a sole auto item gets the full share.
/// - An auto `weight_y` of a single-row item becomes 0 (forms grow rows only
///   when a field spans them on purpose).
/// - An auto `weight_y` of a multi-row item becomes an even share of 1.0
///   among the auto-weighted multi-row items of its origin column.
/// - Explicit weights are left untouched.
///
/// Every resolved value lands in [0, 1].
pub fn resolve_weights(placements: &mut [GridData]) {
    let mut auto_x_per_row: HashMap<i32, u32> = HashMap::new();
    let mut auto_y_per_column: HashMap<i32, u32> = HashMap::new();

    for data in placements.iter() {
        if data.is_weight_x_auto() {
            *auto_x_per_row.entry(data.y).or_insert(0) += 1;
        }
        if data.is_weight_y_auto() && data.h > 1 {
            *auto_y_per_column.entry(data.x).or_insert(0) += 1;
        }
    }

    for data in placements.iter_mut() {
        if data.is_weight_x_auto() {
            let siblings = auto_x_per_row.get(&data.y).copied().unwrap_or(1).max(1);
            data.weight_x = 1.0 / siblings as f64;
        }
        if data.is_weight_y_auto() {
            if data.h > 1 {
                let siblings = auto_y_per_column.get(&data.x).copied().unwrap_or(1).max(1);
                data.weight_y = 1.0 / siblings as f64;
            } else {
                data.weight_y = 0.0;
            }
        }
    }
}
