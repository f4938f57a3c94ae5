use thiserror::Error;
use validator::ValidationErrors;

/// Every way the geometry core can reject its input. These are all caller
/// errors: nothing here is transient, so retrying with the same input will
/// always fail the same way.
///
/// Note that "nothing there" outcomes, like selecting a pixel outside the
/// grid, are **not** errors. See [Selection::Miss](crate::Selection::Miss).
#[derive(Debug, Error)]
pub enum HexError {
    /// Cube coordinates must always fall on the plane `q + r + s = 0`
    #[error("Invalid hex ({q}, {r}, {s}); sum of q, r and s must be zero")]
    InvalidHex { q: f64, r: f64, s: f64 },

    /// Direction and diagonal indexes must be in `0..6`
    #[error("Invalid direction index {0}; must be in 0..6")]
    InvalidDirection(usize),

    /// An orientation tag that isn't one of the supported families
    #[error("{0} is unsupported")]
    UnsupportedOrientation(String),

    /// A grid config that failed validation, e.g. fewer than 2 columns
    #[error("Invalid grid config")]
    GridRange(#[source] ValidationErrors),
}
