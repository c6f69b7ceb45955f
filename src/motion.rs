//! Frame-driven motion helpers shared by the animated components.

pub const SPRING_STIFFNESS: f64 = 100.0;
pub const SPRING_DAMPING: f64 = 30.0;
pub const SPRING_MASS: f64 = 1.0;
pub const SPRING_REST_DELTA: f64 = 0.001;
pub const SPRING_REST_SPEED: f64 = 0.01;

/// Longest frame gap (seconds) integrated in one call; longer gaps are
/// treated as this long, e.g. after a backgrounded tab resumes.
const MAX_FRAME: f64 = 0.1;
/// Integration sub-step (seconds).
const SUB_STEP: f64 = 1.0 / 120.0;

/// Damped spring chasing a moving target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f64,
    velocity: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
    rest_delta: f64,
    rest_speed: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SPRING_STIFFNESS, SPRING_DAMPING)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            stiffness,
            damping,
            mass: SPRING_MASS,
            rest_delta: SPRING_REST_DELTA,
            rest_speed: SPRING_REST_SPEED,
        }
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_resting_at(&self, target: f64) -> bool {
        self.position == target && self.velocity == 0.0
    }

    /// Advances the spring by `dt` seconds toward `target` and returns the
    /// new position. Snaps onto the target once within the rest thresholds.
    pub fn step(&mut self, target: f64, dt: f64) -> f64 {
        let mut remaining = dt.clamp(0.0, MAX_FRAME);
        while remaining > 0.0 {
            let h = remaining.min(SUB_STEP);
            let force = self.stiffness * (target - self.position) - self.damping * self.velocity;
            self.velocity += force / self.mass * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        if (target - self.position).abs() < self.rest_delta && self.velocity.abs() < self.rest_speed
        {
            self.position = target;
            self.velocity = 0.0;
        }
        self.position
    }
}

/// X/Y tilt (radians) of the hero's wobbling title at `elapsed` seconds.
pub fn wobble(elapsed: f64) -> (f64, f64) {
    let tilt = elapsed.sin() * 0.2;
    (tilt, tilt)
}

/// Entrance delay (seconds) for the `index`-th item of a staggered list.
pub fn stagger(index: usize, step: f64) -> f64 {
    index as f64 * step
}
