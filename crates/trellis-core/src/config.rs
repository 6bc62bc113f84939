//! Engine configuration.
//!
//! All tunables are carried in an explicit struct handed to the layout engine
//! at construction; there is no static or global configuration.

/// Configuration for a logical grid layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalGridConfig {
    /// Horizontal gap between columns, in pixels
    pub hgap: f64,
    /// Vertical gap between rows, in pixels
    pub vgap: f64,
    /// Logical column width used for items that do not opt into
    /// `use_ui_width`; 0 = always use the measured preferred width
    pub column_width: f64,
    /// Logical row height used for items that do not opt into
    /// `use_ui_height`; 0 = always use the measured preferred height
    pub row_height: f64,
    /// Floor for column shrinking when the container overflows
    pub min_column_width: f64,
    /// Floor for row shrinking when the container overflows
    pub min_row_height: f64,
}

impl Default for LogicalGridConfig {
    fn default() -> Self {
        Self {
            hgap: 0.0,
            vgap: 0.0,
            column_width: 0.0,
            row_height: 0.0,
            min_column_width: 0.0,
            min_row_height: 0.0,
        }
    }
}

impl LogicalGridConfig {
    /// Create a configuration with the given gaps.
    pub fn with_gaps(hgap: f64, vgap: f64) -> Self {
        Self {
            hgap,
            vgap,
            ..Default::default()
        }
    }

    /// Set the logical cell size.
    pub fn with_cell_size(mut self, column_width: f64, row_height: f64) -> Self {
        self.column_width = column_width;
        self.row_height = row_height;
        self
    }

    /// Set the shrink floors.
    pub fn with_minimums(mut self, min_column_width: f64, min_row_height: f64) -> Self {
        self.min_column_width = min_column_width;
        self.min_row_height = min_row_height;
        self
    }

    /// Clamp negative or NaN tunables to zero.
    pub fn normalized(mut self) -> Self {
        for value in [
            &mut self.hgap,
            &mut self.vgap,
            &mut self.column_width,
            &mut self.row_height,
            &mut self.min_column_width,
            &mut self.min_row_height,
        ] {
            if value.is_nan() || *value < 0.0 {
                *value = 0.0;
            }
        }
        self
    }
}
