//! Screen geometry: HUD strip on top, the board, then the button strip.

use macroquad::math::{Rect, Vec2};

use crate::config::{ControlSide, GameConfig};
use crate::grid::{Cell, Direction, GridBounds};

pub const HUD_HEIGHT: f32 = 28.0;
pub const PAD_HEIGHT: f32 = 120.0;
const PAD_MARGIN: f32 = 6.0;

/// A clickable on-screen control.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PadButton {
    Steer(Direction),
    Start,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PadLayout {
    pub up: Rect,
    pub down: Rect,
    pub left: Rect,
    pub right: Rect,
    pub start: Rect,
}

impl PadLayout {
    fn new(screen_w: f32, top: f32, side: ControlSide) -> Self {
        let button = (PAD_HEIGHT - 2.0 * PAD_MARGIN) / 3.0;
        let dpad_w = 3.0 * button;
        let start_w = 2.5 * button;
        let (dpad_x, start_x) = match side {
            ControlSide::Left => (PAD_MARGIN, screen_w - PAD_MARGIN - start_w),
            _ => (screen_w - PAD_MARGIN - dpad_w, PAD_MARGIN),
        };
        let y = top + PAD_MARGIN;
        let at = |col: f32, row: f32| Rect::new(dpad_x + col * button, y + row * button, button, button);
        Self {
            up: at(1.0, 0.0),
            left: at(0.0, 1.0),
            right: at(2.0, 1.0),
            down: at(1.0, 2.0),
            start: Rect::new(start_x, y + button, start_w, button),
        }
    }

    pub fn buttons(&self) -> [(PadButton, Rect); 5] {
        [
            (PadButton::Steer(Direction::Up), self.up),
            (PadButton::Steer(Direction::Down), self.down),
            (PadButton::Steer(Direction::Left), self.left),
            (PadButton::Steer(Direction::Right), self.right),
            (PadButton::Start, self.start),
        ]
    }

    pub fn hit(&self, point: Vec2) -> Option<PadButton> {
        self.buttons()
            .into_iter()
            .find(|(_, rect)| rect.contains(point))
            .map(|(button, _)| button)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layout {
    pub bounds: GridBounds,
    pub hud: Rect,
    pub board: Rect,
    /// Edge length of one cell in pixels.
    pub tile: f32,
    pub pad: Option<PadLayout>,
}

impl Layout {
    pub fn compute(screen_w: f32, screen_h: f32, bounds: GridBounds, controls: ControlSide) -> Self {
        let pad_h = if controls == ControlSide::Hidden { 0.0 } else { PAD_HEIGHT };
        let avail_h = (screen_h - HUD_HEIGHT - pad_h).max(1.0);
        // Square cells, whole pixels
        let tile = (screen_w / bounds.width as f32)
            .min(avail_h / bounds.height as f32)
            .floor()
            .max(1.0);
        let board_w = tile * bounds.width as f32;
        let board_h = tile * bounds.height as f32;
        let board = Rect::new(
            ((screen_w - board_w) * 0.5).max(0.0),
            HUD_HEIGHT + ((avail_h - board_h) * 0.5).max(0.0),
            board_w,
            board_h,
        );
        let pad = (controls != ControlSide::Hidden)
            .then(|| PadLayout::new(screen_w, board.y + board.h, controls));
        Self { bounds, hud: Rect::new(0.0, 0.0, screen_w, HUD_HEIGHT), board, tile, pad }
    }

    /// Window size that fits the board at the configured cell size.
    pub fn window_size(config: &GameConfig) -> (i32, i32) {
        let pad_h = if config.controls == ControlSide::Hidden { 0.0 } else { PAD_HEIGHT };
        let w = config.cell_size * config.grid.width as f32;
        let h = HUD_HEIGHT + config.cell_size * config.grid.height as f32 + pad_h;
        (w.ceil() as i32, h.ceil() as i32)
    }

    /// Screen rectangle of a cell. Row 0 is the bottom row.
    pub fn cell_rect(&self, cell: Cell) -> Rect {
        let row_from_top = (self.bounds.height - 1 - cell.y) as f32;
        Rect::new(
            self.board.x + cell.x as f32 * self.tile,
            self.board.y + row_from_top * self.tile,
            self.tile,
            self.tile,
        )
    }

    pub fn hit(&self, point: Vec2) -> Option<PadButton> {
        self.pad.as_ref().and_then(|pad| pad.hit(point))
    }
}
