//! This module holds the value types of the hex coordinate system.
//!
//! ## Coordinate Systems
//!
//! ### Cube Coordinates
//!
//! Every hex is addressed by three components (`q`, `r`, and `s`) using the
//! [cube coordinate system defined by Amit Patel](https://www.redblobgames.com/grids/hexagons/#coordinates-cube).
//! **For any tile, all three components are integers and `q + r + s = 0`.**
//! Using three components for a two-dimensional grid makes distance,
//! rotation and rounding math much simpler than any 2D scheme.
//!
//! There are two cube types:
//!
//! - [Hex]: an integer address, i.e. the center of a single tile. This is what
//!   grids store and what every query returns.
//! - [FractionalHex]: a float point anywhere in hex space. These only exist as
//!   intermediate values, e.g. the result of projecting a pixel into hex space
//!   or interpolating between two tiles. Call [FractionalHex::round] to get the
//!   tile that contains the point.
//!
//! ### 2D Coordinates
//!
//! Rectangular maps are much easier to reason about (and to store) with two
//! components. There are two lossless mappings to and from cube coordinates:
//!
//! - [CoordOffset]: every other column (or row) is shoved by half a tile. The
//!   [Parity] picks which ones get shoved.
//! - [CoordDoubled]: one axis steps by 2 instead of 1, which avoids the parity
//!   branching entirely.
//!
//! Conversions are only defined for integer [Hex]es. The type system enforces
//! this: round a [FractionalHex] before converting it.

mod coord;
mod unit;

pub use self::{coord::*, unit::*};
