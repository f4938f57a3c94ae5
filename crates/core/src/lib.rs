//! Hexgrid is the geometry core for hexagonal tile maps. It covers cube
//! coordinates and their arithmetic, the 2D addressing schemes that map onto
//! them, conversion between hex space and pixel space, and a rectangular grid
//! container with pixel selection and range queries. Rendering is left to
//! whoever holds the grid.
//!
//! ```
//! use hexgrid::{GridConfig, HexGrid, Selection};
//!
//! let mut grid = HexGrid::new(GridConfig::default()).unwrap();
//! println!("{}", grid.cells().len());
//! if let Selection::Hit { offset, .. } = grid.on_select_hex(50.0, 43.0) {
//!     println!("Selected {}", offset);
//! }
//! ```
//!
//! See [GridConfig] for details on how a grid can be customized.

mod error;
mod grid;
mod hex;
mod layout;
mod util;

pub use crate::{
    error::HexError,
    grid::{Cell, GridConfig, HexGrid, Selection},
    hex::{
        CoordDoubled, CoordOffset, FractionalHex, Heading, Hex, HexDiagonal,
        HexDirection, HexLine, Parity,
    },
    layout::{Layout, Orientation, OrientationKind, Point2},
    util::range_len,
};
