use anyhow::{anyhow, bail, Context};
use config::{Config, File};
use hexgrid::{
    timed, CoordOffset, GridConfig, Hex, HexGrid, Point2, Selection,
};
use log::{info, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
    str::FromStr,
};
use structopt::StructOpt;

/// CLI for running geometry queries against a hex grid. Builds a grid, applies
/// the given selections in order, then prints the resulting grid state as a
/// single JSON document.
#[derive(Debug, StructOpt)]
#[structopt(name = "hexgrid")]
struct Opt {
    /// Path to a config file that defines the grid. Supported formats: JSON,
    /// TOML. Any field left out falls back to its default. If no file is
    /// given, the default grid is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Pixel to select, as `X,Y`. Can be given multiple times; selections are
    /// applied in order, so selecting the same cell twice unselects it.
    #[structopt(short, long, number_of_values = 1)]
    select: Vec<PixelArg>,

    /// Range query to run after all selections, as `Q,R,S:RADIUS`. Can be
    /// given multiple times.
    #[structopt(short, long, number_of_values = 1)]
    range: Vec<RangeArg>,

    /// Include the corner points of each cell in the output
    #[structopt(long)]
    polygons: bool,

    /// The logging level to use. Log output goes to stdout along with the
    /// report, so anything more verbose than `warn` will mix the two. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,
}

/// A pixel position from the command line
#[derive(Copy, Clone, Debug)]
struct PixelArg(Point2);

impl FromStr for PixelArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| anyhow!("expected X,Y but got {:?}", s))?;
        let x = x.trim().parse().context("invalid x")?;
        let y = y.trim().parse().context("invalid y")?;
        Ok(Self(Point2::new(x, y)))
    }
}

/// A range query from the command line
#[derive(Copy, Clone, Debug)]
struct RangeArg {
    center: Hex,
    radius: u32,
}

impl FromStr for RangeArg {
    type Err = anyhow::Error;

    fn from_str(arg: &str) -> Result<Self, Self::Err> {
        let (center, radius) = arg
            .split_once(':')
            .ok_or_else(|| anyhow!("expected Q,R,S:RADIUS but got {:?}", arg))?;
        let coords = center
            .split(',')
            .map(|coord| coord.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("invalid center {:?}", center))?;
        let center = match coords.as_slice() {
            &[q, r, s] => Hex::new(q, r, s)?,
            _ => bail!("expected 3 coordinates in center {:?}", center),
        };
        let radius = radius.trim().parse().context("invalid radius")?;
        Ok(Self { center, radius })
    }
}

/// Everything we print. Cells are listed in row-major order.
#[derive(Debug, Serialize)]
struct Report<'a> {
    config: &'a GridConfig,
    hex_width: f64,
    hex_height: f64,
    grid_width: f64,
    grid_height: f64,
    selections: Vec<Selection>,
    ranges: Vec<RangeReport>,
    cells: Vec<CellReport>,
}

#[derive(Debug, Serialize)]
struct RangeReport {
    center: Hex,
    radius: u32,
    cells: Vec<CoordOffset>,
}

#[derive(Debug, Serialize)]
struct CellReport {
    position: Hex,
    offset: CoordOffset,
    selected: bool,
    highlighted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    polygon: Option<[Point2; 6]>,
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

fn build_report<'a>(
    grid: &'a HexGrid,
    selections: Vec<Selection>,
    ranges: &[RangeArg],
    polygons: bool,
) -> Report<'a> {
    let ranges = ranges
        .iter()
        .map(|&RangeArg { center, radius }| RangeReport {
            center,
            radius,
            cells: grid
                .range(center, radius)
                .into_iter()
                .map(|cell| cell.offset())
                .collect(),
        })
        .collect();
    let cells = grid
        .cells()
        .iter()
        .map(|cell| CellReport {
            position: cell.position(),
            offset: cell.offset(),
            selected: cell.is_selected(),
            highlighted: grid.is_highlighted(cell.position()),
            polygon: if polygons {
                Some(grid.layout().polygon_corners(cell.position()))
            } else {
                None
            },
        })
        .collect();

    Report {
        config: grid.config(),
        hex_width: grid.hex_width(),
        hex_height: grid.hex_height(),
        grid_width: grid.grid_width(),
        grid_height: grid.grid_height(),
        selections,
        ranges,
        cells,
    }
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => GridConfig::default(),
    };
    let mut grid = HexGrid::new(config).context("error building grid")?;

    let selections = opt
        .select
        .iter()
        .map(|PixelArg(point)| grid.on_select_hex(point.x, point.y))
        .collect();

    let report = timed!("Building report", log::Level::Info, {
        build_report(&grid, selections, &opt.range, opt.polygons)
    });
    let json = serde_json::to_string_pretty(&report)
        .context("error serializing report")?;
    info!("Report has {} cells", report.cells.len());
    println!("{}", json);

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pixel() {
        let PixelArg(point) = "43,43.5".parse().unwrap();
        assert_eq!(point, Point2::new(43.0, 43.5));
        assert!("43".parse::<PixelArg>().is_err());
        assert!("a,1".parse::<PixelArg>().is_err());
    }

    #[test]
    fn test_parse_range() {
        let range: RangeArg = "2,1,-3:2".parse().unwrap();
        assert_eq!(range.center, Hex::new(2, 1, -3).unwrap());
        assert_eq!(range.radius, 2);
        // Off the q+r+s=0 plane
        assert!("1,2,3:1".parse::<RangeArg>().is_err());
        assert!("1,2:1".parse::<RangeArg>().is_err());
        assert!("0,0,0".parse::<RangeArg>().is_err());
        assert!("0,0,0:-1".parse::<RangeArg>().is_err());
    }

    #[test]
    fn test_build_report() {
        let mut grid = HexGrid::new(GridConfig {
            size: 10.0,
            cols: 5,
            rows: 5,
            ..Default::default()
        })
        .unwrap();
        let selections = vec![grid.on_select_hex(43.0, 43.0)];
        let ranges = [RangeArg {
            center: Hex::new(2, 1, -3).unwrap(),
            radius: 2,
        }];
        let report = build_report(&grid, selections, &ranges, true);
        assert_eq!(report.cells.len(), 25);
        assert_eq!(report.ranges[0].cells.len(), 19);
        assert!(report.cells[12].selected);
        assert!(report.cells.iter().all(|cell| cell.polygon.is_some()));
    }
}
