use crate::OrientationKind;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Configuration that defines a grid. Two grids built from the same config
/// always have the same cells at the same pixel positions.
///
/// The two `draw_*` toggles have no bearing on geometry at all. The grid just
/// holds onto them so whatever renders the grid can read them from one place.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of a tile to any of its vertices, in pixels.
    /// Must be finite.
    #[validate(range(min = 0.001), custom = "validate_finite")]
    pub size: f64,

    /// Whether tiles are flat-topped or pointy-topped
    pub orientation: OrientationKind,

    /// Number of columns in the grid. Must be at least 2, so that range
    /// queries always have some neighbors to work with.
    #[validate(range(min = 2))]
    pub cols: u16,

    /// Number of rows in the grid. Must be at least 2, same as `cols`.
    #[validate(range(min = 2))]
    pub rows: u16,

    /// Should tile outlines be drawn?
    pub draw_grid: bool,

    /// Should each tile's offset coordinates be drawn as a label?
    pub draw_coordinates: bool,

    /// If set, selecting a tile also highlights every tile within this many
    /// steps of it. Highlighting is independent of the per-tile selected
    /// flag. See [HexGrid::highlighted](crate::HexGrid::highlighted).
    pub highlight_radius: Option<u16>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            size: 50.0,
            orientation: OrientationKind::Flat,
            cols: 10,
            rows: 10,
            draw_grid: true,
            draw_coordinates: true,
            highlight_radius: None,
        }
    }
}

/// Reject NaN and infinities, which `range` can't catch
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite"))
    }
}
