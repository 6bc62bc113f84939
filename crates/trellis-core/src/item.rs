//! Capability traits the layout engines depend on.
//!
//! Widgets are not a type hierarchy here: the engines see only the two
//! capabilities they need, and concrete widget types implement them per kind.

use crate::grid_data::GridData;
use crate::types::Size;

/// Optional width/height constraints passed to a measurement call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SizeHint {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl SizeHint {
    /// No constraint on either axis.
    pub fn none() -> Self {
        Self::default()
    }

    /// Constrain the width only.
    pub fn width(width: f64) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }
}

/// An item that can report its preferred pixel size.
///
/// The measurement itself comes from an external collaborator (the DOM in the
/// original system); items not yet attached report [`Size::ZERO`] and the
/// layout proceeds, to be corrected on the next pass.
pub trait Measurable {
    fn preferred_size(&self, hint: SizeHint) -> Size;
}

/// An item that carries grid placement hints and resolved grid data.
pub trait Placeable {
    /// The declared hints, possibly with auto values.
    fn grid_hints(&self) -> GridData;

    /// The resolved data from the last layout pass, defaulting to the hints
    /// when no pass has run yet.
    fn grid_data(&self) -> GridData {
        self.grid_hints()
    }

    /// Replace the declared hints. Used by the tile cascade to commit a
    /// computed set of moves; the grid engine itself never mutates items.
    fn set_grid_hints(&mut self, hints: GridData);
}

/// A plain layout item: hints plus a fixed measured size.
///
/// Concrete widgets implement [`Measurable`] and [`Placeable`] themselves;
/// this struct covers tests and callers that already know their sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridCell {
    pub hints: GridData,
    pub preferred: Size,
}

impl GridCell {
    /// Create a cell from hints and a measured preferred size.
    pub fn new(hints: GridData, preferred: Size) -> Self {
        Self { hints, preferred }
    }
}

impl Measurable for GridCell {
    fn preferred_size(&self, _hint: SizeHint) -> Size {
        self.preferred
    }
}

impl Placeable for GridCell {
    fn grid_hints(&self) -> GridData {
        self.hints
    }

    fn set_grid_hints(&mut self, hints: GridData) {
        self.hints = hints;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_cell_capabilities() {
        let mut cell = GridCell::new(GridData::at(1, 0), Size::new(80.0, 24.0));
        assert_eq!(cell.grid_hints().x, 1);
        assert_eq!(cell.preferred_size(SizeHint::none()), Size::new(80.0, 24.0));

        cell.set_grid_hints(GridData::at(0, 2));
        assert_eq!(cell.grid_hints().y, 2);
    }

    // Text-like item that trades width for height when constrained.
    struct WrappingLabel {
        natural_width: f64,
        line_height: f64,
    }

    impl Measurable for WrappingLabel {
        fn preferred_size(&self, hint: SizeHint) -> Size {
            match hint.width {
                Some(max) if max < self.natural_width => {
                    let lines = (self.natural_width / max).ceil();
                    Size::new(max, lines * self.line_height)
                }
                _ => Size::new(self.natural_width, self.line_height),
            }
        }
    }

    #[test]
    fn test_width_hint_constrains_measurement() {
        let label = WrappingLabel {
            natural_width: 80.0,
            line_height: 16.0,
        };

        let unconstrained = label.preferred_size(SizeHint::none());
        assert_eq!(unconstrained, Size::new(80.0, 16.0));

        let wrapped = label.preferred_size(SizeHint::width(40.0));
        assert_eq!(wrapped, Size::new(40.0, 32.0));
    }

    #[test]
    fn test_grid_data_defaults_to_hints() {
        let cell = GridCell::new(GridData::at(3, 4), Size::ZERO);
        assert_eq!(cell.grid_data(), cell.grid_hints());
    }
}
