use hexgrid::{
    CoordOffset, GridConfig, Hex, HexGrid, OrientationKind, Selection,
};

/// The grid used by most of these tests: 5x5 flat tiles with radius 10
fn flat_grid() -> HexGrid {
    HexGrid::new(GridConfig {
        size: 10.0,
        orientation: OrientationKind::Flat,
        cols: 5,
        rows: 5,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn test_select_top_left() {
    let mut grid = flat_grid();
    match grid.on_select_hex(8.0, 11.0) {
        Selection::Hit {
            index,
            hex,
            offset,
            selected,
            changed,
        } => {
            assert_eq!(index, 0);
            assert_eq!(hex, Hex::ORIGIN);
            assert_eq!(offset, CoordOffset::new(0, 0));
            assert!(selected);
            assert!(changed);
        }
        Selection::Miss => panic!("expected a hit at px(8, 11)"),
    }
}

#[test]
fn test_select_outside() {
    let mut grid = flat_grid();
    assert_eq!(grid.on_select_hex(0.0, 0.0), Selection::Miss);
    assert_eq!(grid.cell_at_pixel(0.0, 0.0), None);
    assert_eq!(grid.on_select_hex(-100.0, 30.0), Selection::Miss);
    assert_eq!(grid.on_select_hex(1000.0, 1000.0), Selection::Miss);
    assert_eq!(grid.selected().count(), 0);
}

#[test]
fn test_select_and_range() {
    let mut grid = flat_grid();
    let selection = grid.on_select_hex(43.0, 43.0);
    let hex = Hex::new(2, 1, -3).unwrap();
    assert_eq!(
        selection,
        Selection::Hit {
            index: 12,
            hex,
            offset: CoordOffset::new(2, 2),
            selected: true,
            changed: true,
        }
    );

    let range = grid.range(hex, 2);
    assert_eq!(range.len(), 19);
    assert!(range.iter().all(|cell| cell.position().distance(hex) <= 2));
    // Only the center was selected
    assert_eq!(range.iter().filter(|cell| cell.is_selected()).count(), 1);
}

#[test]
fn test_select_non_finite() {
    let mut grid = flat_grid();
    let pixels = [
        (f64::NAN, f64::NAN),
        (f64::NAN, 11.0),
        (8.0, f64::NAN),
        (f64::INFINITY, 11.0),
        (f64::NEG_INFINITY, f64::INFINITY),
    ];
    for (x, y) in pixels {
        let selection = grid.on_select_hex(x, y);
        assert_eq!(selection, Selection::Miss, "px({}, {})", x, y);
        assert_eq!(grid.cell_at_pixel(x, y), None);
    }
    assert_eq!(grid.selected().count(), 0);
}

#[test]
fn test_select_far_away() {
    let mut grid = flat_grid();
    let pixels = [(1e11, 1e11), (-1e11, 1e11), (1e9, -1e9), (f64::MAX, 0.0)];
    for (x, y) in pixels {
        let selection = grid.on_select_hex(x, y);
        assert_eq!(selection, Selection::Miss, "px({}, {})", x, y);
    }
    assert_eq!(grid.selected().count(), 0);
}

#[test]
fn test_range_far_away() {
    let grid = flat_grid();
    for center in [
        Hex::new_qr(i32::MAX, 0),
        Hex::new_qr(i32::MAX, -i32::MAX),
        Hex::new_qr(-i32::MAX, i32::MAX),
        Hex::new_qr(0, i32::MIN + 1),
    ] {
        let range = grid.range(center, 2);
        assert!(range.is_empty(), "range around {:?}", center);
    }
}

#[test]
fn test_toggle_twice() {
    let mut grid = flat_grid();
    let hex = Hex::new(2, 1, -3).unwrap();
    assert!(!grid.is_selected(hex));
    grid.on_select_hex(43.0, 43.0);
    assert!(grid.is_selected(hex));
    grid.on_select_hex(43.0, 43.0);
    assert!(!grid.is_selected(hex));
}

#[test]
fn test_cell_at_pixel_is_read_only() {
    let grid = flat_grid();
    let cell = grid.cell_at_pixel(43.0, 43.0).unwrap();
    assert_eq!(cell.offset(), CoordOffset::new(2, 2));
    assert!(!cell.is_selected());
    assert_eq!(grid.cell(12), Some(cell));
}

#[test]
fn test_range_clipped_at_corner() {
    let grid = flat_grid();
    // Top-left corner only has part of its neighborhood inside the grid
    let range = grid.range(Hex::ORIGIN, 2);
    assert!(!range.is_empty());
    assert!(range.len() < 19);
    assert!(range
        .iter()
        .all(|cell| cell.position().distance(Hex::ORIGIN) <= 2));
}

#[test]
fn test_dimensions() {
    let config = GridConfig {
        size: 1.0,
        cols: 2,
        rows: 2,
        ..Default::default()
    };
    let flat = HexGrid::new(config).unwrap();
    let pointy = HexGrid::new(GridConfig {
        orientation: OrientationKind::Pointy,
        ..config
    })
    .unwrap();

    assert_eq!(flat.hex_width(), 2.0);
    assert_eq!(pointy.hex_height(), 2.0);
    assert!((flat.grid_width() - 3.5).abs() < 1e-9);
    assert!((flat.grid_height() - 4.330127018922193).abs() < 1e-9);
    assert!((pointy.grid_width() - 4.330127018922193).abs() < 1e-9);
    assert!((pointy.grid_height() - 3.5).abs() < 1e-9);
}

#[test]
fn test_selection_json() {
    let mut grid = flat_grid();
    let json = serde_json::to_value(grid.on_select_hex(8.0, 11.0)).unwrap();
    assert_eq!(json["outcome"], "hit");
    assert_eq!(json["index"], 0);
    assert_eq!(json["selected"], true);
    let json = serde_json::to_value(grid.on_select_hex(0.0, 0.0)).unwrap();
    assert_eq!(json, serde_json::json!({"outcome": "miss"}));
}
