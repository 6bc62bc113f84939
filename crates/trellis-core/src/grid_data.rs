//! Grid placement and sizing hints.
//!
//! [`GridData`] is declared on every layout item, possibly with "auto" values,
//! and recomputed into a fully resolved copy on each layout pass. It is a plain
//! value object: the engines copy it on entry and never hand references back.

/// Auto-assign marker for grid coordinates.
pub const AUTO: i32 = -1;

/// Auto marker for growth weights.
pub const AUTO_WEIGHT: f64 = -1.0;

/// Horizontal alignment of content inside a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical alignment of content inside a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Per-item grid placement and sizing hints.
///
/// Declared hints may use [`AUTO`] for coordinates and [`AUTO_WEIGHT`] for
/// weights; the resolved copy produced by a layout pass has no auto values
/// left.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridData {
    /// Grid column, [`AUTO`] to assign during layout
    pub x: i32,
    /// Grid row, [`AUTO`] to assign during layout
    pub y: i32,
    /// Column span, at least 1
    pub w: i32,
    /// Row span, at least 1
    pub h: i32,
    /// Horizontal growth share in [0, 1], 0 = fixed, [`AUTO_WEIGHT`] = computed
    pub weight_x: f64,
    /// Vertical growth share in [0, 1], 0 = fixed, [`AUTO_WEIGHT`] = computed
    pub weight_y: f64,
    /// Size the column to the measured content instead of the logical width
    pub use_ui_width: bool,
    /// Size the row to the measured content instead of the logical height
    pub use_ui_height: bool,
    pub horizontal_alignment: HAlign,
    pub vertical_alignment: VAlign,
    /// Stretch content to the full cell width (default true)
    pub fill_horizontal: bool,
    /// Stretch content to the full cell height (default true)
    pub fill_vertical: bool,
    /// Explicit pixel width, 0 = unset
    pub width_in_pixel: f64,
    /// Explicit pixel height, 0 = unset
    pub height_in_pixel: f64,
}

impl Default for GridData {
    fn default() -> Self {
        Self {
            x: AUTO,
            y: AUTO,
            w: 1,
            h: 1,
            weight_x: AUTO_WEIGHT,
            weight_y: AUTO_WEIGHT,
            use_ui_width: false,
            use_ui_height: false,
            horizontal_alignment: HAlign::default(),
            vertical_alignment: VAlign::default(),
            fill_horizontal: true,
            fill_vertical: true,
            width_in_pixel: 0.0,
            height_in_pixel: 0.0,
        }
    }
}

impl GridData {
    /// Hints for an auto-placed single cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hints for an explicit cell position.
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    /// Set the column/row span.
    pub fn with_span(mut self, w: i32, h: i32) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    /// Set the horizontal growth weight.
    pub fn with_weight_x(mut self, weight: f64) -> Self {
        self.weight_x = weight;
        self
    }

    /// Set the vertical growth weight.
    pub fn with_weight_y(mut self, weight: f64) -> Self {
        self.weight_y = weight;
        self
    }

    /// Set the fill flags.
    pub fn with_fill(mut self, horizontal: bool, vertical: bool) -> Self {
        self.fill_horizontal = horizontal;
        self.fill_vertical = vertical;
        self
    }

    /// Set the alignment used when a fill flag is off.
    pub fn with_alignment(mut self, horizontal: HAlign, vertical: VAlign) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Set an explicit pixel size (0 = unset).
    pub fn with_pixel_size(mut self, width: f64, height: f64) -> Self {
        self.width_in_pixel = width;
        self.height_in_pixel = height;
        self
    }

    /// Whether the column coordinate is auto-assigned.
    pub fn is_x_auto(&self) -> bool {
        self.x < 0
    }

    /// Whether the row coordinate is auto-assigned.
    pub fn is_y_auto(&self) -> bool {
        self.y < 0
    }

    /// Whether both coordinates are explicit.
    pub fn is_explicit(&self) -> bool {
        self.x >= 0 && self.y >= 0
    }

    /// Whether the horizontal weight is left for the engine to compute.
    pub fn is_weight_x_auto(&self) -> bool {
        self.weight_x < 0.0 || self.weight_x.is_nan()
    }

    /// Whether the vertical weight is left for the engine to compute.
    pub fn is_weight_y_auto(&self) -> bool {
        self.weight_y < 0.0 || self.weight_y.is_nan()
    }

    /// Clamp every malformed field to its safe default.
    ///
    /// Layout hints are presentation data; a bad hint degrades the layout but
    /// must never fail the pass. Spans below 1 become 1, NaN or negative
    /// weights become auto, weights above 1 are clamped, coordinates below -1
    /// become auto, and negative or NaN pixel overrides become unset.
    pub fn normalized(mut self) -> Self {
        if self.x < AUTO {
            self.x = AUTO;
        }
        if self.y < AUTO {
            self.y = AUTO;
        }
        self.w = self.w.max(1);
        self.h = self.h.max(1);
        self.weight_x = normalize_weight(self.weight_x);
        self.weight_y = normalize_weight(self.weight_y);
        self.width_in_pixel = normalize_pixel(self.width_in_pixel);
        self.height_in_pixel = normalize_pixel(self.height_in_pixel);
        self
    }
}

fn normalize_weight(weight: f64) -> f64 {
    if weight.is_nan() || weight < 0.0 {
        AUTO_WEIGHT
    } else {
        weight.min(1.0)
    }
}

fn normalize_pixel(value: f64) -> f64 {
    if value.is_nan() || value < 0.0 {
        0.0
    } else {
        value
    }
}
