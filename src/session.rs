//! The game session: owns the snake, the food and the tick timer, applies
//! player intents and persists the best score at game over.

use log::{debug, info, warn};
use rand::Rng;

use crate::config::{ConfigError, GameConfig};
use crate::food::Food;
use crate::grid::{Cell, Direction, GridBounds};
use crate::input::Intent;
use crate::palette::ColorMode;
use crate::render::{FrameView, Renderer, Status};
use crate::snake::{MoveOutcome, Snake};
use crate::store::HighScoreStore;
use crate::timer::TickTimer;

/// Whether the driver loop should keep going.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct GameSession<S, R> {
    bounds: GridBounds,
    snake: Snake,
    food: Food,
    timer: TickTimer,
    speed: u32,
    color_mode: ColorMode,
    paused: bool,
    over: bool,
    won: bool,
    /// Nothing has moved since the last (re)start.
    fresh: bool,
    high_score: u32,
    stored_high_score: u32,
    store: S,
    rng: R,
}

impl<S: HighScoreStore, R: Rng> GameSession<S, R> {
    /// A paused session with a new snake and food, ready for the first start.
    pub fn new(config: &GameConfig, store: S, rng: R) -> Result<Self, ConfigError> {
        let config = config.clone().validate()?;
        let stored = match store.load() {
            Ok(score) => score,
            Err(err) => {
                warn!("could not read high score, starting from 0: {err}");
                0
            }
        };
        let bounds = config.grid;
        let mut session = Self {
            bounds,
            snake: Snake::spawn(bounds),
            food: Food::at(Cell::new(0, 0)),
            timer: TickTimer::from_speed(config.speed),
            speed: config.speed,
            color_mode: config.color_mode,
            paused: true,
            over: false,
            won: false,
            fresh: true,
            high_score: stored,
            stored_high_score: stored,
            store,
            rng,
        };
        session.init();
        Ok(session)
    }

    fn init(&mut self) {
        self.snake = Snake::spawn(self.bounds);
        self.over = false;
        self.won = false;
        self.fresh = true;
        if let Err(err) = self.food.spawn(self.bounds, self.snake.body(), &mut self.rng) {
            warn!("no room for food on a fresh board: {err}");
            self.over = true;
        }
    }

    /// One tick: move, then either end the game or schedule the next tick.
    pub fn update(&mut self, now: f64) -> MoveOutcome {
        let outcome = self.snake.move_step(self.bounds, &mut self.food, &mut self.rng);
        self.fresh = false;
        self.high_score = self.high_score.max(self.snake.score());
        debug!("tick: {outcome:?}, score {}", self.snake.score());

        match outcome {
            MoveOutcome::Crashed(_) => self.game_over(false),
            MoveOutcome::BoardFilled => self.game_over(true),
            MoveOutcome::Moved | MoveOutcome::Ate => self.timer.schedule_next(now),
        }
        outcome
    }

    /// Runs a tick if one is due.
    pub fn advance(&mut self, now: f64) -> Option<MoveOutcome> {
        if self.paused || self.over || !self.timer.fire(now) {
            return None;
        }
        Some(self.update(now))
    }

    /// Start or pause. Does nothing once the game is over.
    pub fn toggle_game(&mut self, now: f64) {
        if self.over {
            return;
        }
        if self.paused {
            self.paused = false;
            self.timer.start(now);
            info!("game running");
        } else {
            self.paused = true;
            self.timer.cancel();
            info!("game paused");
        }
    }

    /// Fresh snake and food, running straight away.
    pub fn restart_game(&mut self, now: f64) {
        self.timer.cancel();
        self.paused = false;
        self.init();
        if !self.over {
            self.timer.start(now);
        }
        info!("game restarted");
    }

    /// The combined start button: restart after game over, otherwise start/pause.
    pub fn on_start_pressed(&mut self, now: f64) {
        if self.over {
            self.restart_game(now);
        } else {
            self.toggle_game(now);
        }
    }

    /// Steers the snake unless paused, over, or `direction` lies on the
    /// current heading's axis. Returns whether the input was accepted.
    pub fn on_direction_input(&mut self, direction: Direction) -> bool {
        if self.paused || self.over || direction.same_axis(self.snake.direction()) {
            return false;
        }
        self.snake.change_direction(direction);
        true
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.color_mode = mode;
    }

    pub fn toggle_color_mode(&mut self) {
        self.color_mode = self.color_mode.toggled();
    }

    /// New ticks per second, used from the next scheduled tick.
    pub fn set_speed(&mut self, speed: u32) {
        self.speed = speed.max(1);
        self.timer.set_speed(self.speed);
        debug!("speed {} ticks/s, interval {:.3}s", self.speed, self.timer.interval());
    }

    pub fn apply(&mut self, intent: Intent, now: f64) -> Flow {
        match intent {
            Intent::Steer(direction) => {
                self.on_direction_input(direction);
            }
            Intent::StartPause => self.on_start_pressed(now),
            Intent::ToggleColor => self.toggle_color_mode(),
            Intent::SetSpeed(speed) => self.set_speed(speed),
            Intent::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn game_over(&mut self, won: bool) {
        self.over = true;
        self.won = won;
        self.timer.cancel();
        let score = self.snake.score();
        match self.snake.death() {
            Some(cause) => info!("game over (hit {cause:?}), score {score}"),
            None => info!("game over ({}), score {score}", if won { "board filled" } else { "stopped" }),
        }

        if score > self.stored_high_score {
            match self.store.save(score) {
                Ok(()) => {
                    self.stored_high_score = score;
                    info!("new high score {score} saved");
                }
                Err(err) => warn!("could not save high score {score}: {err}"),
            }
        }
    }

    pub fn status(&self) -> Status {
        if self.over {
            Status::Over { won: self.won }
        } else if self.paused {
            Status::Paused { fresh: self.fresh }
        } else {
            Status::Running
        }
    }

    pub fn frame(&self) -> FrameView<'_> {
        FrameView {
            bounds: self.bounds,
            body: self.snake.body(),
            food: self.food.cell(),
            score: self.snake.score(),
            high_score: self.high_score,
            palette: self.color_mode.palette(),
            status: self.status(),
            speed: self.speed,
        }
    }

    pub fn render<T: Renderer + ?Sized>(&self, renderer: &mut T) {
        renderer.render(&self.frame());
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    pub fn is_ticking(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
