//! Projection between hex space and pixel space.
//!
//! A [Layout] binds together three things: an orientation family (flat-topped
//! or pointy-topped tiles), the size of a tile in pixels, and the pixel
//! position of the origin tile's center. From there it can convert any hex to
//! a pixel and back. See
//! https://www.redblobgames.com/grids/hexagons/#hex-to-pixel for the math.

mod unit;

pub use self::unit::*;

use crate::{FractionalHex, HexError};
use nalgebra::{Matrix2, Vector2};
use serde::{Deserialize, Serialize};
use std::{f64, str::FromStr};
use strum::{EnumIter, EnumString};

pub(crate) const SQRT_3: f64 = 1.7320508075688772;

/// The constants that define an orientation family: a forward matrix
/// (`f0..f3`, axial to pixel), its inverse (`b0..b3`, pixel to axial) and the
/// angle of the first corner, in sixths of a full turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Orientation {
    pub f0: f64,
    pub f1: f64,
    pub f2: f64,
    pub f3: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub start_angle: f64,
}

impl Orientation {
    pub const POINTY: Self = Self {
        f0: SQRT_3,
        f1: SQRT_3 / 2.0,
        f2: 0.0,
        f3: 3.0 / 2.0,
        b0: SQRT_3 / 3.0,
        b1: -1.0 / 3.0,
        b2: 0.0,
        b3: 2.0 / 3.0,
        start_angle: 0.5,
    };

    pub const FLAT: Self = Self {
        f0: 3.0 / 2.0,
        f1: 0.0,
        f2: SQRT_3 / 2.0,
        f3: SQRT_3,
        b0: 2.0 / 3.0,
        b1: 0.0,
        b2: -1.0 / 3.0,
        b3: SQRT_3 / 3.0,
        start_angle: 0.0,
    };

    /// Matrix that takes an axial `(q, r)` vector to a unit-size pixel offset
    pub fn forward(&self) -> Matrix2<f64> {
        Matrix2::new(self.f0, self.f1, self.f2, self.f3)
    }

    /// Inverse of [Self::forward]
    pub fn backward(&self) -> Matrix2<f64> {
        Matrix2::new(self.b0, self.b1, self.b2, self.b3)
    }
}

/// The two supported orientation families. Each one carries its constant
/// [Orientation].
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OrientationKind {
    /// Flat-topped tiles: columns line up vertically, every other column is
    /// shifted down by half a tile
    Flat,
    /// Pointy-topped tiles: rows line up horizontally, every other row is
    /// shifted right by half a tile
    Pointy,
}

impl OrientationKind {
    /// Parse an orientation tag (`"flat"` or `"pointy"`). Any other tag is
    /// rejected.
    pub fn parse(tag: &str) -> Result<Self, HexError> {
        Self::from_str(tag)
            .map_err(|_| HexError::UnsupportedOrientation(tag.to_owned()))
    }

    pub fn orientation(self) -> &'static Orientation {
        match self {
            Self::Flat => &Orientation::FLAT,
            Self::Pointy => &Orientation::POINTY,
        }
    }

    /// Width of a single tile's bounding box, for a tile with the given
    /// center-to-vertex radius
    pub fn hex_width(self, size: f64) -> f64 {
        match self {
            Self::Flat => 2.0 * size,
            Self::Pointy => SQRT_3 * size,
        }
    }

    /// Height of a single tile's bounding box, for a tile with the given
    /// center-to-vertex radius
    pub fn hex_height(self, size: f64) -> f64 {
        match self {
            Self::Flat => SQRT_3 * size,
            Self::Pointy => 2.0 * size,
        }
    }
}

/// Converts between hex space and pixel space. All three fields are fixed for
/// the lifetime of the layout; layouts are cheap, so make a new one if you
/// need different parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    orientation: OrientationKind,
    /// Center-to-vertex radius of a tile, per axis. Unequal axes stretch the
    /// grid.
    size: Point2,
    /// Pixel position of the center of [Hex::ORIGIN](crate::Hex::ORIGIN)
    origin: Point2,
}

impl Layout {
    pub fn new(
        orientation: OrientationKind,
        size: Point2,
        origin: Point2,
    ) -> Self {
        Self {
            orientation,
            size,
            origin,
        }
    }

    pub fn orientation(&self) -> OrientationKind {
        self.orientation
    }

    pub fn size(&self) -> Point2 {
        self.size
    }

    pub fn origin(&self) -> Point2 {
        self.origin
    }

    /// Get the pixel position of a hex's center. Accepts both [Hex]es and
    /// [FractionalHex]es.
    ///
    /// [Hex]: crate::Hex
    pub fn hex_to_pixel(&self, hex: impl Into<FractionalHex>) -> Point2 {
        let hex = hex.into();
        let forward = self.orientation.orientation().forward();
        let offset = forward * Vector2::new(hex.q(), hex.r());
        let size: Vector2<f64> = self.size.into();
        let origin: Vector2<f64> = self.origin.into();
        (offset.component_mul(&size) + origin).into()
    }

    /// Get the point in hex space that lies under a pixel. The output is
    /// fractional; call [FractionalHex::round] to get the tile that contains
    /// the pixel.
    pub fn pixel_to_hex(&self, point: Point2) -> FractionalHex {
        let point: Vector2<f64> = point.into();
        let size: Vector2<f64> = self.size.into();
        let origin: Vector2<f64> = self.origin.into();
        let normalized = (point - origin).component_div(&size);
        let axial = self.orientation.orientation().backward() * normalized;
        FractionalHex::new_qr(axial.x, axial.y)
    }

    /// Get the offset from a tile's center to one of its corners. Corners
    /// are numbered from the orientation's start angle, and corner `i + 6` is
    /// the same as corner `i`.
    pub fn corner_offset(&self, corner: usize) -> Point2 {
        let start_angle = self.orientation.orientation().start_angle;
        let angle = 2.0 * f64::consts::PI * (start_angle - corner as f64) / 6.0;
        Point2::new(self.size.x * angle.cos(), self.size.y * angle.sin())
    }

    /// Get the 6 corners of a tile in pixel space, in corner order. Joining
    /// them in order (and back to the first) outlines the tile.
    pub fn polygon_corners(
        &self,
        hex: impl Into<FractionalHex>,
    ) -> [Point2; 6] {
        let center = self.hex_to_pixel(hex);
        let mut corners = [center; 6];
        for (i, corner) in corners.iter_mut().enumerate() {
            *corner += self.corner_offset(i);
        }
        corners
    }
}
