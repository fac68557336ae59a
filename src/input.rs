use macroquad::input::{
    KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, mouse_position,
};
use macroquad::math::Vec2;

use crate::config::{FAST_SPEED, NORMAL_SPEED};
use crate::grid::Direction;
use crate::layout::{Layout, PadButton};

/// Something the player asked for this frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Steer(Direction),
    StartPause,
    ToggleColor,
    SetSpeed(u32),
    Quit,
}

const KEY_BINDINGS: [(KeyCode, Intent); 14] = [
    (KeyCode::Up, Intent::Steer(Direction::Up)),
    (KeyCode::W, Intent::Steer(Direction::Up)),
    (KeyCode::Down, Intent::Steer(Direction::Down)),
    (KeyCode::S, Intent::Steer(Direction::Down)),
    (KeyCode::Left, Intent::Steer(Direction::Left)),
    (KeyCode::A, Intent::Steer(Direction::Left)),
    (KeyCode::Right, Intent::Steer(Direction::Right)),
    (KeyCode::D, Intent::Steer(Direction::Right)),
    (KeyCode::Space, Intent::StartPause),
    (KeyCode::C, Intent::ToggleColor),
    (KeyCode::Key1, Intent::SetSpeed(NORMAL_SPEED)),
    (KeyCode::Key2, Intent::SetSpeed(FAST_SPEED)),
    (KeyCode::Escape, Intent::Quit),
    (KeyCode::Q, Intent::Quit),
];

pub fn key_intent(key: KeyCode) -> Option<Intent> {
    KEY_BINDINGS
        .iter()
        .find(|(bound, _)| *bound == key)
        .map(|(_, intent)| *intent)
}

pub fn button_intent(button: PadButton) -> Intent {
    match button {
        PadButton::Steer(direction) => Intent::Steer(direction),
        PadButton::Start => Intent::StartPause,
    }
}

/// Intents from keys pressed this frame, then from a click on the pad.
pub fn poll_intents(layout: &Layout) -> Vec<Intent> {
    let mut intents: Vec<Intent> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, intent)| *intent)
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        let (x, y) = mouse_position();
        if let Some(button) = layout.hit(Vec2::new(x, y)) {
            intents.push(button_intent(button));
        }
    }
    intents
}
