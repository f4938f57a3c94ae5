mod config;

pub use self::config::*;

use crate::{
    layout::SQRT_3, timed, util, CoordOffset, Hex, HexError, Layout,
    OrientationKind, Parity, Point2,
};
use fnv::FnvBuildHasher;
use indexmap::IndexSet;
use log::{debug, info, trace};
use serde::Serialize;
use std::cmp;
use validator::Validate;

/// Which columns (flat) or rows (pointy) get shoved out by half a tile.
/// Odd ones, so that cell `[0, 0]` sits flush in the top-left corner.
const CELL_PARITY: Parity = Parity::Odd;

/// No cell in any grid has a `q` or `r` component bigger than this (in
/// magnitude), since grids are at most `u16::MAX` cells on a side
const MAX_CELL_COMPONENT: u32 = 2 * u16::MAX as u32;

/// A single tile in a [HexGrid]. Cells are created when the grid is built and
/// never move; the only thing that changes is the selected flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Cell {
    position: Hex,
    offset: CoordOffset,
    selected: bool,
}

impl Cell {
    pub fn position(&self) -> Hex {
        self.position
    }

    pub fn offset(&self) -> CoordOffset {
        self.offset
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }
}

/// The outcome of a pixel selection. Clicking outside of every cell is a
/// normal thing to do, so a miss is a value here rather than an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Selection {
    Miss,
    Hit {
        /// Index of the cell in [HexGrid::cells]
        index: usize,
        hex: Hex,
        offset: CoordOffset,
        /// Selected flag of the cell *after* the toggle
        selected: bool,
        changed: bool,
    },
}

impl Selection {
    /// Did this selection change any cell's state?
    pub fn changed(&self) -> bool {
        match self {
            Self::Miss => false,
            Self::Hit { changed, .. } => *changed,
        }
    }

    /// The hit cell's index, or `None` for a miss
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Miss => None,
            Self::Hit { index, .. } => Some(*index),
        }
    }
}

/// A rectangular grid of hexagonal cells, `cols` wide and `rows` tall. Cells
/// are stored row-major, so the cell at offset `[col, row]` lives at index
/// `row * cols + col`. The grid's pixel bounding box starts at `(0, 0)`, with
/// cell `[0, 0]`'s bounding box in the top-left corner.
///
/// The grid owns all cell state. Renderers get read-only views of it, and the
/// only mutations are [HexGrid::on_select_hex], [HexGrid::clear_selection] and
/// the draw toggles.
#[derive(Clone, Debug)]
pub struct HexGrid {
    config: GridConfig,
    layout: Layout,
    cells: Vec<Cell>,
    /// Indexes of highlighted cells, in the order they were highlighted
    highlighted: IndexSet<usize, FnvBuildHasher>,
}

impl HexGrid {
    /// Build a new grid from a config. The config is validated first, and
    /// an invalid one is rejected with [HexError::GridRange].
    pub fn new(config: GridConfig) -> Result<Self, HexError> {
        config.validate().map_err(HexError::GridRange)?;
        info!(
            "Building {}x{} {} grid with tile size {}",
            config.cols, config.rows, config.orientation, config.size
        );

        let orientation = config.orientation;
        let size = Point2::new(config.size, config.size);
        // Put the center of cell [0, 0] in the middle of its bounding box, so
        // the whole box lands at (0, 0)
        let origin = Point2::new(
            orientation.hex_width(config.size) / 2.0,
            orientation.hex_height(config.size) / 2.0,
        );
        let layout = Layout::new(orientation, size, origin);

        let cells = timed!("Cell allocation", Self::allocate_cells(&config));
        debug_assert_eq!(
            cells.len(),
            config.cols as usize * config.rows as usize,
            "Incorrect number of cells allocated"
        );

        Ok(Self {
            config,
            layout,
            cells,
            highlighted: IndexSet::default(),
        })
    }

    fn allocate_cells(config: &GridConfig) -> Vec<Cell> {
        let mut cells =
            Vec::with_capacity(config.cols as usize * config.rows as usize);
        for row in 0..config.rows {
            for col in 0..config.cols {
                let offset = CoordOffset::new(col.into(), row.into());
                cells.push(Cell {
                    position: offset_to_cube(config.orientation, offset),
                    offset,
                    selected: false,
                });
            }
        }
        cells
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn orientation(&self) -> OrientationKind {
        self.config.orientation
    }

    pub fn size(&self) -> f64 {
        self.config.size
    }

    pub fn columns(&self) -> u16 {
        self.config.cols
    }

    pub fn rows(&self) -> u16 {
        self.config.rows
    }

    /// Width of a single cell's bounding box
    pub fn hex_width(&self) -> f64 {
        self.orientation().hex_width(self.size())
    }

    /// Height of a single cell's bounding box
    pub fn hex_height(&self) -> f64 {
        self.orientation().hex_height(self.size())
    }

    /// How far a corner pokes past its neighbors along the tiling axis
    fn corner_offset(&self) -> f64 {
        (2.0 * self.size()) / 4.0
    }

    /// Half the distance between two opposite sides of a cell
    fn edge_offset(&self) -> f64 {
        (SQRT_3 * self.size()) / 2.0
    }

    /// Width of the bounding box around the entire grid
    pub fn grid_width(&self) -> f64 {
        let cols = f64::from(self.config.cols);
        match self.orientation() {
            OrientationKind::Flat => {
                cols * (self.hex_width() - self.corner_offset())
                    + self.corner_offset()
            }
            OrientationKind::Pointy => {
                cols * self.hex_width() + self.edge_offset()
            }
        }
    }

    /// Height of the bounding box around the entire grid
    pub fn grid_height(&self) -> f64 {
        let rows = f64::from(self.config.rows);
        match self.orientation() {
            OrientationKind::Flat => {
                rows * self.hex_height() + self.edge_offset()
            }
            OrientationKind::Pointy => {
                rows * (self.hex_height() - self.corner_offset())
                    + self.corner_offset()
            }
        }
    }

    pub fn draw_grid(&self) -> bool {
        self.config.draw_grid
    }

    pub fn set_draw_grid(&mut self, draw_grid: bool) {
        self.config.draw_grid = draw_grid;
    }

    pub fn draw_coordinates(&self) -> bool {
        self.config.draw_coordinates
    }

    pub fn set_draw_coordinates(&mut self, draw_coordinates: bool) {
        self.config.draw_coordinates = draw_coordinates;
    }

    /// All cells, in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Get the index of the cell at the given position, or `None` if the
    /// position falls outside the grid.
    pub fn index_of(&self, hex: Hex) -> Option<usize> {
        if hex.q().unsigned_abs() > MAX_CELL_COMPONENT
            || hex.r().unsigned_abs() > MAX_CELL_COMPONENT
        {
            return None;
        }
        let offset = cube_to_offset(self.orientation(), hex);
        let cols = i32::from(self.config.cols);
        let rows = i32::from(self.config.rows);
        if (0..cols).contains(&offset.col()) && (0..rows).contains(&offset.row())
        {
            Some(offset.row() as usize * cols as usize + offset.col() as usize)
        } else {
            None
        }
    }

    pub fn cell_at(&self, hex: Hex) -> Option<&Cell> {
        self.index_of(hex).map(|index| &self.cells[index])
    }

    /// Is there a cell at this position, and is it selected?
    pub fn is_selected(&self, hex: Hex) -> bool {
        self.cell_at(hex).map_or(false, Cell::is_selected)
    }

    /// Every selected cell, in row-major order
    pub fn selected(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.selected)
    }

    /// Every highlighted cell. Always empty unless the config has a
    /// `highlight_radius`.
    pub fn highlighted(&self) -> impl Iterator<Item = &Cell> {
        self.highlighted.iter().map(move |&index| &self.cells[index])
    }

    pub fn is_highlighted(&self, hex: Hex) -> bool {
        self.index_of(hex)
            .map_or(false, |index| self.highlighted.contains(&index))
    }

    fn index_at_pixel(&self, x: f64, y: f64) -> Option<usize> {
        let hex = match self.layout.pixel_to_hex(Point2::new(x, y)).try_round()
        {
            Some(hex) => hex,
            None => {
                debug!("px({}, {}) is nowhere near the grid", x, y);
                return None;
            }
        };
        match self.index_of(hex) {
            Some(index) => {
                debug!(
                    "Converted px({}, {}) to hex {} at {}",
                    x, y, hex, self.cells[index].offset
                );
                Some(index)
            }
            None => {
                debug!("Hex {} not found at px({}, {})", hex, x, y);
                None
            }
        }
    }

    /// Get the cell that contains a pixel, without touching any state
    pub fn cell_at_pixel(&self, x: f64, y: f64) -> Option<&Cell> {
        self.index_at_pixel(x, y).map(|index| &self.cells[index])
    }

    /// Handle a selection at a pixel. If the pixel is over a cell, that
    /// cell's selected flag is flipped. If the config has a highlight radius,
    /// the highlighted set is replaced with the range around the hit cell (or
    /// cleared on a miss).
    pub fn on_select_hex(&mut self, x: f64, y: f64) -> Selection {
        let index = match self.index_at_pixel(x, y) {
            Some(index) => index,
            None => {
                if self.config.highlight_radius.is_some() {
                    self.highlighted.clear();
                }
                return Selection::Miss;
            }
        };

        let cell = &mut self.cells[index];
        cell.selected = !cell.selected;
        let cell = *cell;
        debug!(
            "Cell {} at {} is now {}",
            cell.position,
            cell.offset,
            if cell.selected { "selected" } else { "unselected" }
        );

        if let Some(radius) = self.config.highlight_radius {
            self.highlighted =
                self.range_indexes(cell.position, radius.into()).collect();
        }

        Selection::Hit {
            index,
            hex: cell.position,
            offset: cell.offset,
            selected: cell.selected,
            changed: true,
        }
    }

    fn range_indexes(
        &self,
        center: Hex,
        radius: u32,
    ) -> impl Iterator<Item = usize> + '_ {
        center
            .within(radius)
            .filter_map(move |hex| self.index_of(hex))
    }

    /// Get every cell within `radius` steps of `center`, including the center
    /// itself. Positions that fall outside the grid are skipped, so near the
    /// edges this returns fewer than the full `3r^2+3r+1` cells.
    pub fn range(&self, center: Hex, radius: u32) -> Vec<&Cell> {
        let capacity = cmp::min(util::range_len(radius), self.cells.len());
        let mut cells = Vec::with_capacity(capacity);
        cells.extend(
            self.range_indexes(center, radius)
                .map(|index| &self.cells[index]),
        );
        trace!(
            "Range of {} around {} has {} cells",
            radius,
            center,
            cells.len()
        );
        cells
    }

    /// Unselect every cell and clear all highlights
    pub fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
        self.highlighted.clear();
    }
}

fn offset_to_cube(orientation: OrientationKind, offset: CoordOffset) -> Hex {
    match orientation {
        OrientationKind::Flat => {
            CoordOffset::q_offset_to_cube(CELL_PARITY, offset)
        }
        OrientationKind::Pointy => {
            CoordOffset::r_offset_to_cube(CELL_PARITY, offset)
        }
    }
}

fn cube_to_offset(orientation: OrientationKind, hex: Hex) -> CoordOffset {
    match orientation {
        OrientationKind::Flat => {
            CoordOffset::q_offset_from_cube(CELL_PARITY, hex)
        }
        OrientationKind::Pointy => {
            CoordOffset::r_offset_from_cube(CELL_PARITY, hex)
        }
    }
}
