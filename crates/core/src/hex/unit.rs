//! This sub-module contains the basic value types that make up the cube
//! coordinate system. See the parent module documentation for more info on
//! the coordinate system.

use crate::HexError;
use derive_more::{Add, Display, Mul, Neg, Sub};
use serde::{Deserialize, Serialize};
use std::{cmp, iter::FusedIterator};
use strum::{EnumIter, IntoEnumIterator};

/// A point in the hex coordinate system that refers to a whole tile (via its
/// center point). See module-level documentation for a description of the
/// coordinate system.
///
/// ## Implementation
///
/// Since `q + r + s = 0` for all tiles, this struct only stores `q` and `r`
/// and derives `s` as needed. That also means a `Hex` can never hold invalid
/// coordinates once it exists: [Hex::new] is the only place where all three
/// components come in, and it validates them.
///
/// All arithmetic returns a new value. Adding, subtracting, negating and
/// scaling (`hex * k`) tiles always lands on another tile, so those operators
/// don't need validation.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Add,
    Sub,
    Neg,
    Mul,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {}, {})", "self.q()", "self.r()", "self.s()")]
pub struct Hex {
    q: i32,
    r: i32,
}

impl Hex {
    pub const ORIGIN: Self = Self::new_qr(0, 0);

    /// Unit vectors to each of the 6 tiles that share a side with the origin,
    /// in the same order as [HexDirection].
    pub const DIRECTIONS: [Self; 6] = [
        Self::new_qr(1, 0),
        Self::new_qr(1, -1),
        Self::new_qr(0, -1),
        Self::new_qr(-1, 0),
        Self::new_qr(-1, 1),
        Self::new_qr(0, 1),
    ];

    /// Vectors to each of the 6 tiles that touch the origin only at a vertex,
    /// in the same order as [HexDiagonal].
    pub const DIAGONALS: [Self; 6] = [
        Self::new_qr(2, -1),
        Self::new_qr(1, -2),
        Self::new_qr(-1, -1),
        Self::new_qr(-2, 1),
        Self::new_qr(-1, 2),
        Self::new_qr(1, 1),
    ];

    /// Construct a new hex from all three cube components. Returns an error
    /// if the components don't sum to zero.
    pub fn new(q: i32, r: i32, s: i32) -> Result<Self, HexError> {
        let sum = q.checked_add(r).and_then(|qr| qr.checked_add(s));
        if sum != Some(0) {
            Err(HexError::InvalidHex {
                q: q.into(),
                r: r.into(),
                s: s.into(),
            })
        } else {
            Ok(Self::new_qr(q, r))
        }
    }

    /// Construct a new hex with the given q and r. Since q+r+s=0 for all
    /// tiles, we can derive s from q & r.
    pub const fn new_qr(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    pub fn q(&self) -> i32 {
        self.q
    }

    pub fn r(&self) -> i32 {
        self.r
    }

    pub fn s(&self) -> i32 {
        -(self.q + self.r)
    }

    /// Number of steps from the origin to this tile
    pub fn length(self) -> u32 {
        self.distance(Self::ORIGIN)
    }

    /// Calculate the path distance between two tiles, meaning the number of
    /// hops it takes to get from one to the other. 0 if the tiles are equal,
    /// 1 if they are adjacent, 2 if there is 1 tile between them, etc.
    /// Saturates at `u32::MAX` for tiles at opposite ends of the `i32` range.
    pub fn distance(self, other: Hex) -> u32 {
        // https://www.redblobgames.com/grids/hexagons/#distances
        // Two adjacent tile centers are always separated by two cube edges,
        // hence the halving
        let dq = i64::from(self.q) - i64::from(other.q);
        let dr = i64::from(self.r) - i64::from(other.r);
        let ds = -dq - dr;
        let steps = (dq.abs() + dr.abs() + ds.abs()) / 2;
        u32::try_from(steps).unwrap_or(u32::MAX)
    }

    /// Add two tiles, or `None` if any component (including the derived `s`)
    /// would overflow
    pub fn checked_add(self, other: Hex) -> Option<Self> {
        let q = self.q.checked_add(other.q)?;
        let r = self.r.checked_add(other.r)?;
        q.checked_add(r)?.checked_neg()?;
        Some(Self::new_qr(q, r))
    }

    /// Rotate this hex 60° counter-clockwise around the origin
    pub fn rotate_left(self) -> Self {
        Self::new_qr(-self.s(), -self.q)
    }

    /// Rotate this hex 60° clockwise around the origin
    pub fn rotate_right(self) -> Self {
        Self::new_qr(-self.r, -self.s())
    }

    /// Get the tile adjacent to this one in the given direction
    pub fn adjacent(self, direction: HexDirection) -> Self {
        self + direction.to_vector()
    }

    /// Get an iterator of all the tiles directly adjacent to this one. The
    /// iterator will always contain exactly 6 values.
    pub fn adjacents(self) -> impl Iterator<Item = Hex> {
        HexDirection::iter().map(move |dir| self.adjacent(dir))
    }

    /// Get the neighbor in the direction with the given index. See
    /// [HexDirection] for the ordering. Fails for any index outside `0..6`.
    pub fn neighbor(self, direction: usize) -> Result<Self, HexError> {
        HexDirection::from_index(direction).map(|dir| self.adjacent(dir))
    }

    /// Get the tile that touches this one at a vertex, in the given direction
    pub fn diagonal(self, diagonal: HexDiagonal) -> Self {
        self + diagonal.to_vector()
    }

    /// Get the diagonal neighbor with the given index. See [HexDiagonal] for
    /// the ordering. Fails for any index outside `0..6`.
    pub fn diagonal_neighbor(self, direction: usize) -> Result<Self, HexError> {
        HexDiagonal::from_index(direction).map(|dir| self.diagonal(dir))
    }

    /// Linearly interpolate between two tiles. `t = 0` gives this tile and
    /// `t = 1` gives the other; anything in between is some point on the
    /// line between the two centers.
    pub fn lerp(self, other: Hex, t: f64) -> FractionalHex {
        FractionalHex::from(self).lerp(other.into(), t)
    }

    /// Get every tile that the straight line between the centers of these two
    /// tiles passes through, including both ends. See [HexLine].
    pub fn line_to(self, other: Hex) -> HexLine {
        HexLine::new(self, other)
    }

    /// Get every tile that is at most `radius` steps from this one. There
    /// will always be `3r²+3r+1` tiles, ordered by `q` offset, then `r`
    /// offset. This is a closed-form walk, so it doesn't do any searching.
    ///
    /// Tiles that can't be represented (past the edge of the `i32` range)
    /// are skipped, so centers out at the extremes yield fewer tiles.
    pub fn within(self, radius: u32) -> impl Iterator<Item = Hex> + Clone {
        let r = i32::try_from(radius).unwrap_or(i32::MAX);
        (-r..=r).flat_map(move |dq| {
            // If we just do [-r,r] for dr as well, then we end up with a
            // diamond pattern instead of a hexagon
            // https://www.redblobgames.com/grids/hexagons/#range
            let dr_min = cmp::max(-r, dq.saturating_add(r).saturating_neg());
            let dr_max = cmp::min(r, r.saturating_sub(dq));
            (dr_min..=dr_max)
                .filter_map(move |dr| self.checked_add(Hex::new_qr(dq, dr)))
        })
    }
}

/// Any point in the hex coordinate system, with float components. These come
/// out of projections and interpolations, and are generally converted right
/// back into a [Hex] with [FractionalHex::round].
///
/// Unlike [Hex], all three components are stored. Float error means
/// `q + r + s` is only _approximately_ zero, so [FractionalHex::new] accepts
/// anything that rounds to zero.
///
/// Scaling by a real factor lives here rather than on [Hex], since it
/// generally lands between tiles: `FractionalHex::from(hex) * 0.5`.
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Display, Add, Sub, Mul, Serialize,
)]
#[display(fmt = "({}, {}, {})", "self.q", "self.r", "self.s")]
pub struct FractionalHex {
    q: f64,
    r: f64,
    s: f64,
}

impl FractionalHex {
    /// Construct a new fractional hex. Returns an error if the components
    /// don't sum to (approximately) zero.
    pub fn new(q: f64, r: f64, s: f64) -> Result<Self, HexError> {
        if (q + r + s).round() != 0.0 {
            Err(HexError::InvalidHex { q, r, s })
        } else {
            Ok(Self::new_unchecked(q, r, s))
        }
    }

    /// Construct from q and r, deriving s. This can't fail.
    pub fn new_qr(q: f64, r: f64) -> Self {
        Self::new_unchecked(q, r, -q - r)
    }

    const fn new_unchecked(q: f64, r: f64, s: f64) -> Self {
        Self { q, r, s }
    }

    pub fn q(&self) -> f64 {
        self.q
    }

    pub fn r(&self) -> f64 {
        self.r
    }

    pub fn s(&self) -> f64 {
        self.s
    }

    /// Elementwise linear interpolation. The output isn't re-validated; it's
    /// a transient value, typically headed straight to [Self::round].
    pub fn lerp(self, other: FractionalHex, t: f64) -> Self {
        Self::new_unchecked(
            self.q * (1.0 - t) + other.q * t,
            self.r * (1.0 - t) + other.r * t,
            self.s * (1.0 - t) + other.s * t,
        )
    }

    /// Are all three components finite?
    pub fn is_finite(&self) -> bool {
        self.q.is_finite() && self.r.is_finite() && self.s.is_finite()
    }

    /// Like [Self::round], but `None` for a point that doesn't fall on any
    /// representable tile: NaN or infinite components, or components too
    /// large to fit in an `i32` once rounded.
    pub fn try_round(self) -> Option<Hex> {
        // Half the range, so re-deriving a component from the other two
        // can't overflow either
        const LIMIT: f64 = (i32::MAX / 2) as f64;
        let in_range = |c: f64| c.abs() <= LIMIT;
        if self.is_finite()
            && in_range(self.q)
            && in_range(self.r)
            && in_range(self.s)
        {
            Some(self.round())
        } else {
            None
        }
    }

    /// Get the tile that contains this point. Each component is rounded on
    /// its own, which can break `q + r + s = 0`, so the component that moved
    /// the most gets thrown out and recomputed from the other two.
    ///
    /// Ties go to `s`, then `r`: `q` is only recomputed when its delta beats
    /// both others, `r` only when it beats `s`. Line drawing depends on this
    /// ordering.
    ///
    /// Components are expected to be finite and well inside the `i32` range.
    /// Use [Self::try_round] for points that come from untrusted input.
    pub fn round(self) -> Hex {
        let qi = self.q.round();
        let ri = self.r.round();
        let si = self.s.round();

        let qd = (qi - self.q).abs();
        let rd = (ri - self.r).abs();
        let sd = (si - self.s).abs();

        if qd > rd && qd > sd {
            Hex::new_qr((-ri - si) as i32, ri as i32)
        } else if rd > sd {
            Hex::new_qr(qi as i32, (-qi - si) as i32)
        } else {
            // s is derived, so recomputing it is free
            Hex::new_qr(qi as i32, ri as i32)
        }
    }
}

impl From<Hex> for FractionalHex {
    fn from(other: Hex) -> Self {
        Self::new_unchecked(other.q().into(), other.r().into(), other.s().into())
    }
}

/// Both ends of a line get shifted by this tiny amount before interpolating.
/// Without it, a line that runs exactly along a tile edge would hit rounding
/// ties, and which side wins would be at the mercy of float error. The sign
/// pattern has to be the same for both ends so every sample leans the same
/// way.
const LINE_NUDGE: FractionalHex =
    FractionalHex::new_unchecked(0.000001, 0.000001, -0.000002);

/// An iterator over the tiles along a straight line between two tile centers.
/// For two tiles `n` steps apart, this always yields exactly `n + 1` tiles,
/// starting at the first tile and ending at the second, each adjacent to the
/// last.
///
/// Clone the iterator to walk the same line again.
#[derive(Copy, Clone, Debug)]
pub struct HexLine {
    start: FractionalHex,
    end: FractionalHex,
    steps: u32,
    next: u32,
}

impl HexLine {
    fn new(from: Hex, to: Hex) -> Self {
        Self {
            start: FractionalHex::from(from) + LINE_NUDGE,
            end: FractionalHex::from(to) + LINE_NUDGE,
            steps: from.distance(to),
            next: 0,
        }
    }
}

impl Iterator for HexLine {
    type Item = Hex;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.steps {
            return None;
        }
        let step = 1.0 / cmp::max(self.steps, 1) as f64;
        let t = step * self.next as f64;
        self.next += 1;
        Some(self.start.lerp(self.end, t).round())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.steps + 1).saturating_sub(self.next) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HexLine {}

impl FusedIterator for HexLine {}

/// A class of fixed headings around a tile. Each implementation has exactly
/// 6 members with a stable index ordering, and every member's opposite is in
/// the same class.
pub trait Heading: 'static + Copy + Eq + Sized {
    /// Every heading in this class, in index order
    const ALL: &'static [Self];

    /// Position of this heading in [Self::ALL]
    fn index(self) -> usize;

    /// Convert this heading into a vector in cube space
    fn to_vector(self) -> Hex;

    /// Look up a heading by its index. Fails for any index outside `0..6`.
    fn from_index(index: usize) -> Result<Self, HexError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(HexError::InvalidDirection(index))
    }

    /// Get the heading that points directly away from this one
    fn opposite(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len / 2) % len]
    }
}

/// The 6 directions in which tiles line up side-to-side. Names describe how
/// each direction appears on a flat-topped layout in screen space (y pointing
/// down). Indexes go counter-clockwise, starting from south-east.
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum HexDirection {
    /// South-east, `(1, 0, -1)`
    SE,
    /// North-east, `(1, -1, 0)`
    NE,
    /// North, `(0, -1, 1)`
    N,
    /// North-west, `(-1, 0, 1)`
    NW,
    /// South-west, `(-1, 1, 0)`
    SW,
    /// South, `(0, 1, -1)`
    S,
}

impl Heading for HexDirection {
    const ALL: &'static [Self] =
        &[Self::SE, Self::NE, Self::N, Self::NW, Self::SW, Self::S];

    fn index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> Hex {
        Hex::DIRECTIONS[self.index()]
    }
}

/// The 6 directions to tiles that only share a vertex with a tile, i.e. two
/// steps away but "in between" two [HexDirection]s. Names follow the same
/// flat-topped convention as [HexDirection].
#[derive(
    Copy, Clone, Debug, EnumIter, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub enum HexDiagonal {
    /// East, `(2, -1, -1)`
    E,
    /// North-northeast, `(1, -2, 1)`
    NNE,
    /// North-northwest, `(-1, -1, 2)`
    NNW,
    /// West, `(-2, 1, 1)`
    W,
    /// South-southwest, `(-1, 2, -1)`
    SSW,
    /// South-southeast, `(1, 1, -2)`
    SSE,
}

impl Heading for HexDiagonal {
    const ALL: &'static [Self] =
        &[Self::E, Self::NNE, Self::NNW, Self::W, Self::SSW, Self::SSE];

    fn index(self) -> usize {
        self as usize
    }

    fn to_vector(self) -> Hex {
        Hex::DIAGONALS[self.index()]
    }
}
