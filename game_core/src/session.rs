//! Session controller
//!
//! Owns every piece of run-time state and drives the systems. The host calls
//! [`Session::step`] once per display frame and forwards taps in between;
//! each call runs to completion, so nothing here needs locking.

use glam::Vec2;
use hecs::World;
use tracing::info;

use crate::components::{Fruit, Lifetime};
use crate::config::{Config, Difficulty, FruitKind, GameOptions, Weather};
use crate::params::Params;
use crate::resources::*;
use crate::surface::{Haptics, RenderSurface};
use crate::systems::*;

/// Which screen the game is on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Start screen; nothing scheduled
    Idle,
    /// A run is in progress
    Running,
    /// Options screen; the run was torn down
    Options,
}

impl SessionState {
    pub fn name(self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Options => "options",
        }
    }
}

/// Navigation requests from the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Start,
    ShowOptions,
    SaveOptions,
    Home,
}

/// Touch-screen buttons that stand in for taps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualButton {
    Left,
    Right,
}

impl VirtualButton {
    /// Where the synthetic tap lands on a surface of `size`
    pub fn tap_point(self, size: Vec2) -> Vec2 {
        let x = match self {
            VirtualButton::Left => Params::VIRTUAL_LEFT_X,
            VirtualButton::Right => Params::VIRTUAL_RIGHT_X,
        };
        Vec2::new(size.x * x, size.y * Params::VIRTUAL_Y)
    }
}

pub struct Session {
    surface: Box<dyn RenderSurface>,
    haptics: Box<dyn Haptics>,
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub timers: Timers,
    pub scenery: Scenery,
    state: SessionState,
    target: Option<&'static FruitKind>,
    next_seq: u64,
}

impl Session {
    pub fn new(
        surface: Box<dyn RenderSurface>,
        haptics: Box<dyn Haptics>,
        config: Config,
        rng: GameRng,
    ) -> Self {
        Self {
            surface,
            haptics,
            world: World::new(),
            time: Time::new(0.0, 0.0),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            timers: Timers::new(),
            scenery: Scenery::new(),
            state: SessionState::Idle,
            target: None,
            next_seq: 0,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn score(&self) -> u32 {
        self.score.value
    }

    /// Current target; always `Some` while running
    pub fn target(&self) -> Option<&'static FruitKind> {
        self.target
    }

    /// Fruits still in play, including ones hit but not yet removed
    pub fn fruit_count(&self) -> usize {
        self.world.query::<&Fruit>().iter().count()
    }

    /// Fruits that can still be hit
    pub fn live_fruits(&self) -> Vec<Fruit> {
        self.world
            .query::<(&Fruit, Option<&Lifetime>)>()
            .iter()
            .filter(|(_e, (_fruit, lifetime))| lifetime.is_none())
            .map(|(_e, (fruit, _))| *fruit)
            .collect()
    }

    pub fn surface(&self) -> &dyn RenderSurface {
        self.surface.as_ref()
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    /// Check if an action is valid from the current state
    pub fn can_transition(&self, action: SessionAction) -> bool {
        self.next_state(action).is_some()
    }

    fn next_state(&self, action: SessionAction) -> Option<SessionState> {
        match (self.state, action) {
            (SessionState::Idle, SessionAction::Start) => Some(SessionState::Running),
            (SessionState::Options, SessionAction::Start) => Some(SessionState::Running),
            (SessionState::Options, SessionAction::SaveOptions) => Some(SessionState::Running),

            (SessionState::Idle, SessionAction::ShowOptions) => Some(SessionState::Options),
            (SessionState::Running, SessionAction::ShowOptions) => Some(SessionState::Options),

            // Going home is always allowed and always tears down
            (_, SessionAction::Home) => Some(SessionState::Idle),

            _ => None,
        }
    }

    fn enter(&mut self, state: SessionState) {
        if self.state != state {
            info!(from = self.state.name(), to = state.name(), "session state");
            self.state = state;
            self.events.push(GameEvent::StateChanged { state: state.name() });
        }
    }

    /// Begin a fresh run. Returns false if not allowed from the current screen.
    pub fn start(&mut self) -> bool {
        if !self.can_transition(SessionAction::Start) {
            return false;
        }
        self.begin_run();
        true
    }

    /// Leave the run (or start screen) for the options screen
    pub fn show_options(&mut self) -> bool {
        if !self.can_transition(SessionAction::ShowOptions) {
            return false;
        }
        self.stop();
        self.enter(SessionState::Options);
        true
    }

    /// Apply the chosen options and start a new run
    pub fn save_options(&mut self, options: GameOptions) -> bool {
        if !self.can_transition(SessionAction::SaveOptions) {
            return false;
        }
        self.config.apply_options(options);
        self.begin_run();
        true
    }

    /// Back to the start screen from anywhere
    pub fn return_home(&mut self) {
        self.stop();
        self.enter(SessionState::Idle);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.config.difficulty = difficulty;
    }

    pub fn set_weather(&mut self, weather: Weather) {
        self.config.weather = weather;
    }

    fn begin_run(&mut self) {
        self.stop();
        self.enter(SessionState::Running);
        self.time = Time::new(0.0, 0.0);

        let surface = self.surface.as_mut();
        create_clouds(surface, &mut self.scenery, &mut self.rng, self.config.cloud_count);
        create_weather(surface, &mut self.scenery, &mut self.timers, self.config.weather);
        self.timers.witch = Some(Timer::repeating(self.config.witch_interval_ms));

        rotate_target(
            &mut self.target,
            &mut self.timers,
            &self.config,
            &mut self.rng,
            &mut self.events,
        );
        self.timers.target = Some(Timer::repeating(self.config.target_rotate_ms));

        let setting = self.config.setting();
        self.timers.spawn = Some(Timer::repeating(setting.spawn_interval_ms));

        info!(
            difficulty = %self.config.difficulty,
            weather = %self.config.weather,
            "run started"
        );
    }

    /// Tear down the run. Safe to call in any state, any number of times.
    ///
    /// Timers go first so nothing can fire against a half-cleared session.
    fn stop(&mut self) {
        let cue_pending = self.timers.emphasis.is_some();
        self.timers.cancel_all();
        if cue_pending {
            self.events.push(GameEvent::TargetEmphasis { on: false });
        }

        let surface = self.surface.as_mut();
        clear_entities(&mut self.world, surface);
        clear_weather(surface, &mut self.scenery);
        witch_hide(surface, &mut self.scenery, &mut self.events);

        self.target = None;
        self.score.reset();
        self.events.push(GameEvent::ScoreChanged { score: 0 });
    }

    /// Advance one animation frame. `dt` is wall time since the last frame in ms.
    pub fn step(&mut self, dt: f32) {
        if !self.is_running() {
            return;
        }

        // Clamp dt to prevent large jumps; a non-finite frame counts as no time
        let dt = if dt.is_finite() {
            dt.clamp(0.0, Params::MAX_DT_MS)
        } else {
            0.0
        };
        self.time.dt = dt;
        self.time.now += dt;

        let surface = self.surface.as_mut();

        // 1. Timers; expiries before re-arms so a fresh one-shot is not ticked early
        if tick_timer(&mut self.timers.emphasis, dt) > 0 {
            self.events.push(GameEvent::TargetEmphasis { on: false });
        }
        for _ in 0..tick_timer(&mut self.timers.target, dt) {
            rotate_target(
                &mut self.target,
                &mut self.timers,
                &self.config,
                &mut self.rng,
                &mut self.events,
            );
        }

        let setting = self.config.setting();
        for _ in 0..tick_timer(&mut self.timers.spawn, dt) {
            spawn_fruit(
                &mut self.world,
                surface,
                &self.scenery,
                &setting,
                &mut self.rng,
                &mut self.next_seq,
            );
        }

        if tick_timer(&mut self.timers.witch_hide, dt) > 0 {
            witch_hide(surface, &mut self.scenery, &mut self.events);
        }
        if tick_timer(&mut self.timers.witch, dt) > 0 {
            witch_fire(
                surface,
                &mut self.scenery,
                &mut self.timers,
                &self.config,
                &mut self.rng,
                &mut self.events,
            );
        }

        if tick_timer(&mut self.timers.lightning, dt) > 0 {
            lightning_tick(surface, &mut self.scenery, &mut self.timers, &mut self.rng);
        }

        // 2. Move fruits; anything below the surface is removed
        advance_fruits(&mut self.world, surface, &setting);

        // 3. Expire hit fruits and feedback glyphs
        gc(&mut self.world, surface, &self.time);
    }

    /// Resolve a tap at `point`. Returns the verdict if a fruit was hit.
    pub fn tap(&mut self, point: Vec2) -> Option<HitOutcome> {
        if !self.is_running() {
            return None;
        }
        let target = self.target?;
        let entity = hit_test(&self.world, self.surface.as_ref(), point)?;

        score_hit(
            &mut self.world,
            self.surface.as_mut(),
            self.haptics.as_mut(),
            entity,
            target,
            &self.config,
            &mut self.score,
            &mut self.events,
        )
    }

    /// Touch-screen button press, translated into a tap
    pub fn press(&mut self, button: VirtualButton) -> Option<HitOutcome> {
        let point = button.tap_point(self.surface.size());
        self.tap(point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessSurface, RecordingHaptics};
    use crate::surface::NoHaptics;

    fn session() -> Session {
        Session::new(
            Box::new(HeadlessSurface::new(800.0, 600.0)),
            Box::new(NoHaptics),
            Config::new(),
            GameRng::new(1),
        )
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.state(), SessionState::Idle);
        assert!(session.target().is_none());
        assert_eq!(session.timers.active_count(), 0);
    }

    #[test]
    fn test_start_arms_timers_and_target() {
        let mut session = session();
        assert!(session.start());
        assert_eq!(session.state(), SessionState::Running);
        assert!(session.target().is_some());
        assert!(session.timers.target.is_some());
        assert!(session.timers.spawn.is_some());
        assert!(session.timers.witch.is_some());
        assert_eq!(session.scenery.anchors.len(), Params::CLOUD_COUNT);
    }

    #[test]
    fn test_invalid_transitions_are_noops() {
        let mut session = session();
        assert!(!session.save_options(GameOptions::default()));
        assert_eq!(session.state(), SessionState::Idle);

        session.start();
        assert!(!session.start(), "already running");
        assert_eq!(session.state(), SessionState::Running);
    }

    #[test]
    fn test_options_flow() {
        let mut session = session();
        session.start();
        assert!(session.show_options());
        assert_eq!(session.state(), SessionState::Options);
        assert_eq!(session.timers.active_count(), 0);

        let options = GameOptions {
            difficulty: Difficulty::Hard,
            weather: Weather::Storm,
        };
        assert!(session.save_options(options));
        assert_eq!(session.state(), SessionState::Running);
        assert_eq!(session.config.weather, Weather::Storm);
        assert_eq!(session.scenery.weather_count(), 2);
        assert_eq!(
            session.timers.spawn,
            Some(Timer::repeating(Difficulty::Hard.setting().spawn_interval_ms))
        );
    }

    #[test]
    fn test_step_and_tap_ignored_when_idle() {
        let mut session = session();
        session.step(5_000.0);
        assert_eq!(session.fruit_count(), 0);
        assert!(session.tap(Vec2::new(100.0, 100.0)).is_none());
        assert!(session.press(VirtualButton::Left).is_none());
    }

    #[test]
    fn test_spawn_cadence_follows_difficulty() {
        let mut session = session();
        session.start();
        // Easy spawns every 1000ms
        for _ in 0..100 {
            session.step(10.0);
        }
        assert_eq!(session.fruit_count(), 1);
        for _ in 0..100 {
            session.step(10.0);
        }
        assert_eq!(session.fruit_count(), 2);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut session = session();
        session.start();
        session.step(60_000.0);
        assert_eq!(session.time.now, Params::MAX_DT_MS);
        assert_eq!(session.fruit_count(), 0);
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut session = session();
        session.start();
        session.step(f32::NAN);
        session.step(f32::INFINITY);
        session.step(f32::NEG_INFINITY);
        assert_eq!(session.time.now, 0.0);

        for _ in 0..100 {
            session.step(10.0);
        }
        assert_eq!(session.time.now, 1_000.0);
        assert_eq!(session.fruit_count(), 1, "spawning must keep going");
    }

    #[test]
    fn test_leaving_during_emphasis_turns_it_off() {
        let mut session = session();
        session.start();
        session.step(16.0);
        assert!(session.timers.emphasis.is_some());

        session.show_options();
        let last_emphasis = session
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::TargetEmphasis { .. }))
            .last();
        assert_eq!(last_emphasis, Some(GameEvent::TargetEmphasis { on: false }));

        // Nothing pending, nothing to restore
        session.return_home();
        assert!(!session
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::TargetEmphasis { .. })));
    }

    #[test]
    fn test_virtual_buttons_tap_fixed_points() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(VirtualButton::Left.tap_point(size), Vec2::new(200.0, 450.0));
        assert_eq!(VirtualButton::Right.tap_point(size), Vec2::new(600.0, 450.0));
    }

    #[test]
    fn test_wrong_tap_vibrates() {
        let haptics = std::rc::Rc::new(std::cell::RefCell::new(RecordingHaptics::default()));
        let mut session = Session::new(
            Box::new(HeadlessSurface::new(800.0, 600.0)),
            Box::new(haptics.clone()),
            Config::new(),
            GameRng::new(2),
        );
        session.start();

        // Run until a non-target fruit is on screen, then tap it
        let mut vibrated = false;
        for _ in 0..2_000 {
            session.step(16.0);
            let target = session.target().unwrap();
            let Some(fruit) = session.live_fruits().into_iter().find(|f| f.kind != target) else {
                continue;
            };
            if let Some(outcome) = session.tap(fruit.pos + Vec2::splat(1.0)) {
                if !outcome.correct {
                    vibrated = true;
                    break;
                }
            }
        }
        assert!(vibrated, "expected a wrong hit within the run");
        assert_eq!(haptics.borrow().patterns, vec![vec![100, 50, 100]]);
    }
}
