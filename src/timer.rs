//! Repeating game tick driven by a caller-supplied clock (seconds, as returned
//! by `macroquad::time::get_time`).

/// A one-shot deadline that the session re-arms after every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct TickTimer {
    interval: f64,
    due: Option<f64>,
}

impl TickTimer {
    /// Timer firing `speed` times per second.
    pub fn from_speed(speed: u32) -> Self {
        Self { interval: interval_for(speed), due: None }
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Takes effect from the next `schedule_next`.
    pub fn set_speed(&mut self, speed: u32) {
        self.interval = interval_for(speed);
    }

    /// Arms the timer to fire on the next poll.
    pub fn start(&mut self, now: f64) {
        self.due = Some(now);
    }

    pub fn schedule_next(&mut self, now: f64) {
        self.due = Some(now + self.interval);
    }

    /// Returns whether a pending tick was dropped.
    pub fn cancel(&mut self) -> bool {
        self.due.take().is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.due.is_some()
    }

    /// Consumes the deadline if it has passed.
    pub fn fire(&mut self, now: f64) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}

fn interval_for(speed: u32) -> f64 {
    1.0 / f64::from(speed.max(1))
}
