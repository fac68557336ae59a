//! Single-player grid snake.
//!
//! The game logic (`grid`, `food`, `snake`, `session`) is independent of the
//! window; `input` and `render` adapt it to macroquad.

pub mod config;
pub mod food;
pub mod grid;
pub mod input;
pub mod layout;
pub mod palette;
pub mod render;
pub mod session;
pub mod snake;
pub mod store;
pub mod timer;

pub use config::{CliArgs, ConfigError, ControlSide, GameConfig};
pub use food::{Food, SpawnError};
pub use grid::{Cell, Direction, GridBounds};
pub use input::Intent;
pub use palette::{ColorMode, Palette};
pub use render::{FrameView, Renderer, Status};
pub use session::{Flow, GameSession};
pub use snake::{Collision, MoveOutcome, Snake};
pub use store::{HighScoreStore, JsonFileStore, MemoryStore, StoreError};
