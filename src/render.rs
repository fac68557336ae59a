use macroquad::prelude::*;

use crate::config::ControlSide;
use crate::grid::{Cell, Direction, GridBounds};
use crate::layout::{Layout, PadButton};
use crate::palette::Palette;

/// What the player should be told about the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// `fresh` until the first tick after a (re)start.
    Paused { fresh: bool },
    Running,
    Over { won: bool },
}

/// Read-only snapshot handed to a [`Renderer`] every frame.
#[derive(Copy, Clone, Debug)]
pub struct FrameView<'a> {
    pub bounds: GridBounds,
    /// Head first.
    pub body: &'a [Cell],
    pub food: Cell,
    pub score: u32,
    pub high_score: u32,
    pub palette: &'a Palette,
    pub status: Status,
    pub speed: u32,
}

pub trait Renderer {
    fn render(&mut self, frame: &FrameView<'_>);
}

const OPTIONS_HINT: &str = "C: colors   1/2: speed   Esc: quit";

/// Overlay title and hint, or nothing while running.
pub fn overlay_lines(status: Status) -> Option<(&'static str, &'static str)> {
    match status {
        Status::Running => None,
        Status::Paused { fresh: true } => Some(("SNAKE", "Space or START to play")),
        Status::Paused { fresh: false } => Some(("PAUSED", "Space to resume")),
        Status::Over { won: false } => Some(("GAME OVER", "Space to play again")),
        Status::Over { won: true } => Some(("BOARD CLEARED", "Space to play again")),
    }
}

pub fn start_label(status: Status) -> &'static str {
    match status {
        Status::Running => "PAUSE",
        Status::Paused { .. } => "START",
        Status::Over { .. } => "AGAIN",
    }
}

/// Draws onto the macroquad window.
pub struct MacroquadRenderer {
    controls: ControlSide,
}

impl MacroquadRenderer {
    pub fn new(controls: ControlSide) -> Self {
        Self { controls }
    }

    /// Geometry for the current window size.
    pub fn layout(&self, bounds: GridBounds) -> Layout {
        Layout::compute(screen_width(), screen_height(), bounds, self.controls)
    }

    fn draw_cell(&self, layout: &Layout, cell: Cell, fill: Color, border: Color) {
        let r = layout.cell_rect(cell);
        draw_rectangle(r.x, r.y, r.w, r.h, fill);
        draw_rectangle_lines(r.x, r.y, r.w, r.h, 1.0, border);
    }

    fn draw_hud(&self, layout: &Layout, frame: &FrameView<'_>) {
        let color = frame.palette.head;
        let baseline = layout.hud.y + layout.hud.h - 8.0;
        draw_text(&format!("Score: {}", frame.score), 8.0, baseline, 22.0, color);
        let best = format!("Best: {}  Speed: {}", frame.high_score, frame.speed);
        let m = measure_text(&best, None, 22, 1.0);
        draw_text(&best, layout.hud.w - m.width - 8.0, baseline, 22.0, color);
    }

    fn draw_overlay(&self, layout: &Layout, frame: &FrameView<'_>) {
        let Some((title, hint)) = overlay_lines(frame.status) else {
            return;
        };
        let board = layout.board;
        draw_rectangle(board.x, board.y, board.w, board.h, Color::new(0.0, 0.0, 0.0, 0.4));

        let cx = board.x + board.w * 0.5;
        let mut y = board.y + board.h * 0.4;
        for (text, size, color) in [(title, 32, WHITE), (hint, 18, WHITE), (OPTIONS_HINT, 14, LIGHTGRAY)] {
            let m = measure_text(text, None, size, 1.0);
            draw_text(text, cx - m.width * 0.5, y, size as f32, color);
            y += size as f32 + 10.0;
        }
    }

    fn draw_pad(&self, layout: &Layout, frame: &FrameView<'_>) {
        let Some(pad) = layout.pad else {
            return;
        };
        let palette = frame.palette;
        for (button, r) in pad.buttons() {
            draw_rectangle(r.x, r.y, r.w, r.h, palette.body);
            draw_rectangle_lines(r.x, r.y, r.w, r.h, 2.0, palette.border);
            let label = match button {
                PadButton::Steer(Direction::Up) => "^",
                PadButton::Steer(Direction::Down) => "v",
                PadButton::Steer(Direction::Left) => "<",
                PadButton::Steer(Direction::Right) => ">",
                PadButton::Start => start_label(frame.status),
            };
            let m = measure_text(label, None, 20, 1.0);
            let center = r.center();
            draw_text(label, center.x - m.width * 0.5, center.y + m.height * 0.5, 20.0, palette.head);
        }
    }
}

impl Renderer for MacroquadRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        let layout = self.layout(frame.bounds);
        let palette = frame.palette;

        clear_background(palette.background);
        draw_rectangle_lines(layout.board.x, layout.board.y, layout.board.w, layout.board.h, 2.0, palette.border);

        for (i, cell) in frame.body.iter().enumerate() {
            let fill = if i == 0 { palette.head } else { palette.body };
            self.draw_cell(&layout, *cell, fill, palette.border);
        }
        self.draw_cell(&layout, frame.food, palette.food, palette.border);

        self.draw_hud(&layout, frame);
        self.draw_pad(&layout, frame);
        self.draw_overlay(&layout, frame);
    }
}
