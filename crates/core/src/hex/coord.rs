//! 2D addressing schemes that map losslessly to and from cube coordinates.
//! See https://www.redblobgames.com/grids/hexagons/#conversions for pictures.

use crate::hex::Hex;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Which set of columns (or rows) gets shoved out by half a tile in offset
/// coordinates. This isn't stored on [CoordOffset], it's passed to each
/// conversion, so the same grid can be read either way.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    /// Even columns/rows are shoved
    Even,
    /// Odd columns/rows are shoved
    Odd,
}

impl Parity {
    /// The signed factor used in the conversion formulas
    pub const fn offset(self) -> i32 {
        match self {
            Self::Even => 1,
            Self::Odd => -1,
        }
    }
}

/// A `(col, row)` address in "offset" coordinates. Use the `q_` conversions
/// for grids where columns are shoved (flat-topped tiles), and the `r_`
/// conversions where rows are shoved (pointy-topped tiles).
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct CoordOffset {
    col: i32,
    row: i32,
}

impl CoordOffset {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn q_offset_from_cube(parity: Parity, hex: Hex) -> Self {
        let col = hex.q();
        // `x & 1` is 1 for any odd x, including negatives (two's complement),
        // and the numerator is always even so the division is exact
        let row = hex.r() + (hex.q() + parity.offset() * (hex.q() & 1)) / 2;
        Self::new(col, row)
    }

    pub fn q_offset_to_cube(parity: Parity, coord: CoordOffset) -> Hex {
        let q = coord.col;
        let r = coord.row - (coord.col + parity.offset() * (coord.col & 1)) / 2;
        Hex::new_qr(q, r)
    }

    pub fn r_offset_from_cube(parity: Parity, hex: Hex) -> Self {
        let col = hex.q() + (hex.r() + parity.offset() * (hex.r() & 1)) / 2;
        let row = hex.r();
        Self::new(col, row)
    }

    pub fn r_offset_to_cube(parity: Parity, coord: CoordOffset) -> Hex {
        let q = coord.col - (coord.row + parity.offset() * (coord.row & 1)) / 2;
        let r = coord.row;
        Hex::new_qr(q, r)
    }
}

/// A `(col, row)` address in "doubled" coordinates. One axis counts in steps
/// of 2, so `col + row` is always even for a valid address.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
#[display(fmt = "[{}, {}]", col, row)]
pub struct CoordDoubled {
    col: i32,
    row: i32,
}

impl CoordDoubled {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> i32 {
        self.col
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn q_doubled_from_cube(hex: Hex) -> Self {
        Self::new(hex.q(), 2 * hex.r() + hex.q())
    }

    pub fn q_doubled_to_cube(coord: CoordDoubled) -> Hex {
        debug_assert!(
            (coord.col + coord.row) % 2 == 0,
            "Invalid doubled coordinate {}",
            coord
        );
        Hex::new_qr(coord.col, (coord.row - coord.col) / 2)
    }

    pub fn r_doubled_from_cube(hex: Hex) -> Self {
        Self::new(2 * hex.q() + hex.r(), hex.r())
    }

    pub fn r_doubled_to_cube(coord: CoordDoubled) -> Hex {
        debug_assert!(
            (coord.col + coord.row) % 2 == 0,
            "Invalid doubled coordinate {}",
            coord
        );
        Hex::new_qr((coord.col - coord.row) / 2, coord.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A spread of tiles covering every sign and parity combination
    fn sample_hexes() -> impl Iterator<Item = Hex> {
        Hex::ORIGIN.within(4)
    }

    fn sample_coords() -> impl Iterator<Item = (i32, i32)> {
        (-5..=5).flat_map(|col| (-5..=5).map(move |row| (col, row)))
    }

    #[test]
    fn test_q_offset() {
        let h = Hex::new(3, 4, -7).unwrap();
        assert_eq!(
            CoordOffset::q_offset_from_cube(Parity::Even, h),
            CoordOffset::new(3, 6)
        );
        assert_eq!(
            CoordOffset::q_offset_from_cube(Parity::Odd, h),
            CoordOffset::new(3, 5)
        );
        assert_eq!(
            CoordOffset::q_offset_to_cube(Parity::Even, CoordOffset::new(3, 6)),
            h
        );
        assert_eq!(
            CoordOffset::q_offset_to_cube(Parity::Odd, CoordOffset::new(3, 5)),
            h
        );
    }

    #[test]
    fn test_r_offset() {
        let h = Hex::new(3, 4, -7).unwrap();
        assert_eq!(
            CoordOffset::r_offset_from_cube(Parity::Even, h),
            CoordOffset::new(5, 4)
        );
        assert_eq!(
            CoordOffset::r_offset_from_cube(Parity::Odd, h),
            CoordOffset::new(5, 4)
        );
        assert_eq!(
            CoordOffset::r_offset_to_cube(Parity::Even, CoordOffset::new(5, 4)),
            h
        );
        assert_eq!(
            CoordOffset::r_offset_to_cube(Parity::Odd, CoordOffset::new(5, 4)),
            h
        );
    }

    #[test]
    fn test_offset_round_trip() {
        for parity in [Parity::Even, Parity::Odd] {
            for h in sample_hexes() {
                let q = CoordOffset::q_offset_from_cube(parity, h);
                assert_eq!(CoordOffset::q_offset_to_cube(parity, q), h);
                let r = CoordOffset::r_offset_from_cube(parity, h);
                assert_eq!(CoordOffset::r_offset_to_cube(parity, r), h);
            }

            for (col, row) in sample_coords() {
                let coord = CoordOffset::new(col, row);
                let q = CoordOffset::q_offset_to_cube(parity, coord);
                assert_eq!(CoordOffset::q_offset_from_cube(parity, q), coord);
                let r = CoordOffset::r_offset_to_cube(parity, coord);
                assert_eq!(CoordOffset::r_offset_from_cube(parity, r), coord);
            }
        }
    }

    #[test]
    fn test_doubled() {
        let h = Hex::new(3, 4, -7).unwrap();
        assert_eq!(CoordDoubled::q_doubled_from_cube(h), CoordDoubled::new(3, 11));
        assert_eq!(CoordDoubled::r_doubled_from_cube(h), CoordDoubled::new(10, 4));
        assert_eq!(CoordDoubled::q_doubled_to_cube(CoordDoubled::new(3, 11)), h);
        assert_eq!(CoordDoubled::r_doubled_to_cube(CoordDoubled::new(10, 4)), h);
    }

    #[test]
    fn test_doubled_round_trip() {
        for h in sample_hexes() {
            let q = CoordDoubled::q_doubled_from_cube(h);
            assert_eq!(CoordDoubled::q_doubled_to_cube(q), h);
            let r = CoordDoubled::r_doubled_from_cube(h);
            assert_eq!(CoordDoubled::r_doubled_to_cube(r), h);
        }

        // Only addresses with an even col+row are valid doubled coordinates
        for (col, row) in sample_coords().filter(|(c, r)| (c + r) % 2 == 0) {
            let coord = CoordDoubled::new(col, row);
            let q = CoordDoubled::q_doubled_to_cube(coord);
            assert_eq!(CoordDoubled::q_doubled_from_cube(q), coord);
            let r = CoordDoubled::r_doubled_to_cube(coord);
            assert_eq!(CoordDoubled::r_doubled_from_cube(r), coord);
        }
    }
}
