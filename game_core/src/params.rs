/// Game tuning parameters for Fruit Pop
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Session timers (milliseconds)
    pub const TARGET_ROTATE_MS: f32 = 10_000.0;
    pub const TARGET_EMPHASIS_MS: f32 = 300.0;
    pub const WITCH_INTERVAL_MS: f32 = 60_000.0;
    pub const WITCH_HIDE_MS: f32 = 15_000.0;

    // Witch flight path (percent of surface height, seconds)
    pub const WITCH_START_Y_MIN: f32 = 30.0;
    pub const WITCH_MID_Y_MIN: f32 = 50.0;
    pub const WITCH_Y_SPREAD: f32 = 30.0;
    pub const WITCH_FLIGHT_MIN_S: f32 = 10.0;
    pub const WITCH_FLIGHT_SPREAD_S: f32 = 5.0;

    // Fruit
    pub const SPAWN_SPEED_MIN: f32 = 2.0;
    pub const SPAWN_SPEED_MAX: f32 = 5.0; // exclusive
    pub const HIT_REMOVE_DELAY_MS: f32 = 600.0;
    pub const FEEDBACK_LIFETIME_MS: f32 = 1_000.0;

    // Clouds
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_JITTER_X: f32 = 50.0;
    pub const CLOUD_TOP_MIN: f32 = 20.0;
    pub const CLOUD_TOP_SPREAD: f32 = 30.0;

    // Storm lightning
    pub const LIGHTNING_LIT_MS: f32 = 100.0;
    pub const LIGHTNING_BURST_CHANCE: f64 = 0.3;
    pub const LIGHTNING_BURST_MIN_MS: f32 = 100.0;
    pub const LIGHTNING_BURST_SPREAD_MS: f32 = 300.0;
    pub const LIGHTNING_CALM_MIN_MS: f32 = 1_000.0;
    pub const LIGHTNING_CALM_SPREAD_MS: f32 = 3_000.0;

    // Touch controls (fraction of surface size)
    pub const VIRTUAL_LEFT_X: f32 = 0.25;
    pub const VIRTUAL_RIGHT_X: f32 = 0.75;
    pub const VIRTUAL_Y: f32 = 0.75;

    // Haptics on a wrong hit: on, off, on (ms)
    pub const WRONG_HIT_VIBRATION: [u32; 3] = [100, 50, 100];

    // Frame clamp to prevent large jumps after a backgrounded tab
    pub const MAX_DT_MS: f32 = 250.0;
}
