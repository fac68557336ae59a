use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::grid::GridBounds;
use crate::palette::ColorMode;
use crate::store::DEFAULT_SAVE_PATH;

/// Ticks per second of the normal preset.
pub const NORMAL_SPEED: u32 = 10;
/// Ticks per second of the fast preset.
pub const FAST_SPEED: u32 = 16;
pub const MAX_SPEED: u32 = 60;
pub const MIN_GRID: i32 = 5;
pub const MAX_GRID: i32 = 200;
pub const DEFAULT_GRID: i32 = 20;
pub const DEFAULT_CELL_SIZE: f32 = 15.0;

/// Where the on-screen control pad sits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum ControlSide {
    Left,
    #[default]
    Right,
    Hidden,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid {width}x{height} is outside {min}..={max} cells per side", min = MIN_GRID, max = MAX_GRID)]
    GridSize { width: i32, height: i32 },
    #[error("cell size must be a positive number of pixels, got {0}")]
    CellSize(f32),
    #[error("speed must be within 1..={max} ticks per second, got {0}", max = MAX_SPEED)]
    Speed(u32),
}

/// Everything a session needs to know up front.
#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub grid: GridBounds,
    /// Nominal pixel size of one cell; the window is sized from it.
    pub cell_size: f32,
    pub speed: u32,
    pub color_mode: ColorMode,
    pub controls: ControlSide,
    pub save_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridBounds::new(DEFAULT_GRID, DEFAULT_GRID),
            cell_size: DEFAULT_CELL_SIZE,
            speed: NORMAL_SPEED,
            color_mode: ColorMode::Normal,
            controls: ControlSide::Right,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
        }
    }
}

impl GameConfig {
    pub fn validate(self) -> Result<Self, ConfigError> {
        let GridBounds { width, height } = self.grid;
        let side = MIN_GRID..=MAX_GRID;
        if !side.contains(&width) || !side.contains(&height) {
            return Err(ConfigError::GridSize { width, height });
        }
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(1..=MAX_SPEED).contains(&self.speed) {
            return Err(ConfigError::Speed(self.speed));
        }
        Ok(self)
    }
}

/// Grid snake on a scalable board.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// Board dimensions in cells, as WIDTHxHEIGHT (for example 24x16).
    #[arg(short = 's', long = "size", value_name = "WIDTHxHEIGHT")]
    pub size: Option<GridSizeArg>,
    /// Nominal pixel size of a cell.
    #[arg(long = "cell-size", value_name = "PIXELS", default_value_t = DEFAULT_CELL_SIZE)]
    pub cell_size: f32,
    /// Ticks per second. 10 is normal, 16 is fast.
    #[arg(long, value_name = "TICKS", default_value_t = NORMAL_SPEED)]
    pub speed: u32,
    /// Start with the high contrast palette.
    #[arg(long)]
    pub colorblind: bool,
    /// Placement of the on-screen buttons.
    #[arg(long, value_enum, default_value_t = ControlSide::Right)]
    pub controls: ControlSide,
    /// File holding the best score.
    #[arg(long = "save-file", value_name = "PATH", default_value = DEFAULT_SAVE_PATH)]
    pub save_file: PathBuf,
    /// Log destination.
    #[arg(long = "log-file", value_name = "PATH", default_value = "snake.log")]
    pub log_file: PathBuf,
    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliArgs {
    pub fn to_config(&self) -> Result<GameConfig, ConfigError> {
        let grid = self
            .size
            .map(|size| GridBounds::new(size.columns, size.rows))
            .unwrap_or(GridBounds::new(DEFAULT_GRID, DEFAULT_GRID));
        let color_mode = if self.colorblind { ColorMode::Colorblind } else { ColorMode::Normal };
        GameConfig {
            grid,
            cell_size: self.cell_size,
            speed: self.speed,
            color_mode,
            controls: self.controls,
            save_path: self.save_file.clone(),
        }
        .validate()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSizeArg {
    pub columns: i32,
    pub rows: i32,
}

impl FromStr for GridSizeArg {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (columns, rows) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| "expected format WIDTHxHEIGHT".to_string())?;
        let columns = columns
            .trim()
            .parse::<i32>()
            .map_err(|error| format!("invalid width: {error}"))?;
        let rows = rows
            .trim()
            .parse::<i32>()
            .map_err(|error| format!("invalid height: {error}"))?;
        Ok(Self { columns, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default().validate().unwrap();
        assert_eq!(config.grid, GridBounds::new(20, 20));
        assert_eq!(config.speed, NORMAL_SPEED);
    }

    #[test]
    fn rejects_tiny_grid_and_bad_speed() {
        let small = GameConfig { grid: GridBounds::new(4, 10), ..GameConfig::default() };
        assert_eq!(small.validate(), Err(ConfigError::GridSize { width: 4, height: 10 }));
        let still = GameConfig { speed: 0, ..GameConfig::default() };
        assert_eq!(still.validate(), Err(ConfigError::Speed(0)));
        let flat = GameConfig { cell_size: 0.0, ..GameConfig::default() };
        assert_eq!(flat.validate(), Err(ConfigError::CellSize(0.0)));
    }

    #[test]
    fn parses_command_line() {
        let args = CliArgs::try_parse_from([
            "snake_canvas",
            "--size",
            "24x16",
            "--speed",
            "16",
            "--colorblind",
            "--controls",
            "left",
        ])
        .unwrap();
        let config = args.to_config().unwrap();
        assert_eq!(config.grid, GridBounds::new(24, 16));
        assert_eq!(config.speed, FAST_SPEED);
        assert_eq!(config.color_mode, ColorMode::Colorblind);
        assert_eq!(config.controls, ControlSide::Left);
    }

    #[test]
    fn grid_size_needs_separator() {
        assert!("24".parse::<GridSizeArg>().is_err());
        assert_eq!("8X9".parse::<GridSizeArg>(), Ok(GridSizeArg { columns: 8, rows: 9 }));
    }
}
