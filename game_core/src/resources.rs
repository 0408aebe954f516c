use serde::Serialize;

use crate::surface::VisualHandle;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step, ms
    pub now: f32, // Running time of the current session, ms
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 16.0, now: 0.0 }
    }
}

/// Player score, never below zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a signed delta; the floor applies to the running total
    pub fn apply(&mut self, delta: i64) -> u32 {
        self.value = (i64::from(self.value) + delta).max(0) as u32;
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }

    /// Uniform index into a non-empty collection
    pub fn index(&mut self, len: usize) -> usize {
        use rand::Rng;
        self.0.gen_range(0..len)
    }

    /// Uniform in `[min, max)`; returns `min` for an empty range
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        use rand::Rng;
        if max <= min {
            return min;
        }
        self.0.gen_range(min..max)
    }

    pub fn chance(&mut self, p: f64) -> bool {
        use rand::Rng;
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Something the host UI should react to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    StateChanged {
        state: &'static str,
    },
    ScoreChanged {
        score: u32,
    },
    TargetChanged {
        fruit: &'static str,
        instruction: String,
    },
    TargetEmphasis {
        on: bool,
    },
    Hit {
        fruit: &'static str,
        correct: bool,
        points: i64,
        x: f32,
        y: f32,
    },
    WitchFlight {
        start_y_pct: f32,
        mid_y_pct: f32,
        duration_s: f32,
    },
    WitchHidden,
}

/// Events waiting for the host to drain them
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub queue: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.queue)
    }
}

/// Countdown timer in ms. Repeating timers re-arm themselves after firing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timer {
    pub period: f32,
    pub remaining: f32,
    pub repeating: bool,
}

impl Timer {
    pub fn repeating(period: f32) -> Self {
        Self {
            period,
            remaining: period,
            repeating: true,
        }
    }

    pub fn once(delay: f32) -> Self {
        Self {
            period: delay,
            remaining: delay,
            repeating: false,
        }
    }

    /// Advance by `dt` and return how many times the timer fired
    pub fn tick(&mut self, dt: f32) -> u32 {
        if self.is_done() {
            return 0;
        }
        self.remaining -= dt;
        let mut fired = 0;
        while self.remaining <= 0.0 {
            fired += 1;
            if !self.repeating || self.period <= 0.0 {
                break;
            }
            self.remaining += self.period;
        }
        fired
    }

    pub fn is_done(&self) -> bool {
        !self.repeating && self.remaining <= 0.0
    }
}

/// Every timer a session owns. `None` means not armed (or cancelled).
#[derive(Debug, Clone, Default)]
pub struct Timers {
    pub target: Option<Timer>,
    pub emphasis: Option<Timer>,
    pub spawn: Option<Timer>,
    pub witch: Option<Timer>,
    pub witch_hide: Option<Timer>,
    pub lightning: Option<Timer>,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_all(&mut self) {
        *self = Self::default();
    }

    pub fn active_count(&self) -> usize {
        [
            &self.target,
            &self.emphasis,
            &self.spawn,
            &self.witch,
            &self.witch_hide,
            &self.lightning,
        ]
        .iter()
        .filter(|t| t.is_some())
        .count()
    }
}

/// Tick an optional timer. One-shot timers disarm themselves after firing.
pub fn tick_timer(slot: &mut Option<Timer>, dt: f32) -> u32 {
    let Some(timer) = slot.as_mut() else {
        return 0;
    };
    let fired = timer.tick(dt);
    if timer.is_done() {
        *slot = None;
    }
    fired
}

/// Storm lightning overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lightning {
    pub visual: VisualHandle,
    pub lit: bool,
}

/// Decorative visuals owned by the session (not entities)
#[derive(Debug, Clone, Default)]
pub struct Scenery {
    pub anchors: Vec<VisualHandle>,
    pub weather: Vec<VisualHandle>,
    pub lightning: Option<Lightning>,
    pub witch: Option<VisualHandle>,
}

impl Scenery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weather overlays including the lightning visual
    pub fn weather_count(&self) -> usize {
        self.weather.len() + usize::from(self.lightning.is_some())
    }
}
