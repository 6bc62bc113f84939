//! Grid matrix building.
//!
//! Assigns grid coordinates to an ordered sequence of items: explicitly
//! positioned items keep their cell (spans clipped to the column count),
//! everything else is packed in input order, left-to-right then
//! top-to-bottom, into the first row with enough contiguous free cells.

use trellis_core::GridData;

/// Occupancy matrix plus positioned grid data for one layout pass.
///
/// Built fresh on every pass and discarded after pixel resolution. Multiple
/// cells reference the same item when it spans more than one column or row.
#[derive(Debug, Clone)]
pub struct GridMatrix {
    column_count: usize,
    rows: Vec<Vec<Option<usize>>>,
    placements: Vec<GridData>,
}

impl GridMatrix {
    /// Build the matrix for the given hints and column count.
    ///
    /// Hints are normalized first, so malformed spans or coordinates degrade
    /// the layout instead of failing it. A column count of 0 is treated as 1.
    pub fn build(hints: &[GridData], column_count: usize) -> Self {
        let column_count = column_count.max(1);
        let columns = column_count as i32;

        let mut placements: Vec<GridData> = hints.iter().map(|h| h.normalized()).collect();
        for data in &mut placements {
            data.w = data.w.min(columns);
            if data.is_explicit() {
                // Clip the footprint into [0, column_count).
                data.x = data.x.min(columns - 1);
                data.w = data.w.min(columns - data.x);
            }
        }

        let mut matrix = Self {
            column_count,
            rows: Vec::new(),
            placements: Vec::new(),
        };

        // Explicit items claim their cells first so auto items flow around
        // them. Overlapping explicit hints are a caller error and simply
        // share cells.
        for (index, data) in placements.iter().enumerate() {
            if data.is_explicit() {
                matrix.occupy(index, data);
            }
        }

        for (index, data) in placements.iter_mut().enumerate() {
            if data.is_explicit() {
                continue;
            }
            let (x, y) = matrix.first_free(data.w as usize, data.h as usize);
            data.x = x as i32;
            data.y = y as i32;
            matrix.occupy(index, data);
        }

        matrix.placements = placements;
        matrix
    }

    /// Number of columns the matrix was built for.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Number of rows the placed items occupy.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The item index occupying a cell, if any.
    pub fn cell(&self, x: usize, y: usize) -> Option<usize> {
        self.rows.get(y).and_then(|row| row.get(x).copied()).flatten()
    }

    /// Positioned grid data per item, in input order. Coordinates are
    /// resolved; weights are still as declared.
    pub fn placements(&self) -> &[GridData] {
        &self.placements
    }

    /// Consume the matrix, keeping only the positioned grid data.
    pub fn into_placements(self) -> Vec<GridData> {
        self.placements
    }

    /// Find the topmost, then leftmost, free w×h region.
    ///
    /// Rows beyond the current extent count as free, so a fit always exists
    /// for w <= column_count.
    fn first_free(&self, w: usize, h: usize) -> (usize, usize) {
        for y in 0..=self.rows.len() {
            for x in 0..=(self.column_count - w) {
                if self.region_free(x, y, w, h) {
                    return (x, y);
                }
            }
        }
        (0, self.rows.len())
    }

    fn region_free(&self, x: usize, y: usize, w: usize, h: usize) -> bool {
        for row in y..y + h {
            for col in x..x + w {
                if self.cell(col, row).is_some() {
                    return false;
                }
            }
        }
        true
    }

    fn occupy(&mut self, index: usize, data: &GridData) {
        let (x, y) = (data.x as usize, data.y as usize);
        let (w, h) = (data.w as usize, data.h as usize);
        while self.rows.len() < y + h {
            self.rows.push(vec![None; self.column_count]);
        }
        for row in y..y + h {
            for col in x..x + w {
                self.rows[row][col] = Some(index);
            }
        }
    }
}
