use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::params::Params;

/// A fruit catalog entry
#[derive(Debug, PartialEq, Eq)]
pub struct FruitKind {
    pub name: &'static str,
    pub points: u32,
    pub glyph: &'static str,
    pub color: &'static str,
}

/// Every fruit that can fall. Names are unique.
pub const FRUITS: &[FruitKind] = &[
    FruitKind {
        name: "Apple",
        points: 10,
        glyph: "🍎",
        color: "#FF5252",
    },
    FruitKind {
        name: "Banana",
        points: 15,
        glyph: "🍌",
        color: "#FFD740",
    },
    FruitKind {
        name: "Cherry",
        points: 20,
        glyph: "🍒",
        color: "#E91E63",
    },
    FruitKind {
        name: "Strawberry",
        points: 25,
        glyph: "🍓",
        color: "#FF4081",
    },
    FruitKind {
        name: "Orange",
        points: 30,
        glyph: "🍊",
        color: "#FF9800",
    },
];

/// Instruction templates; `{fruit}` is replaced with the target name
pub const INSTRUCTIONS: &[&str] = &["Pop {fruit} Only!", "Only Click {fruit}!", "Target: {fruit}!"];

/// Look up a catalog entry by name
pub fn fruit_by_name(name: &str) -> Option<&'static FruitKind> {
    FRUITS.iter().find(|f| f.name == name)
}

/// Fill an instruction template with the target name
pub fn render_instruction(template: &str, fruit: &FruitKind) -> String {
    template.replacen("{fruit}", fruit.name, 1)
}

/// Tuning for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultySetting {
    pub spawn_interval_ms: f32,
    pub speed_multiplier: f32,
    pub penalty_ratio: f32,
    pub max_fall_speed: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn setting(self) -> DifficultySetting {
        match self {
            Difficulty::Easy => DifficultySetting {
                spawn_interval_ms: 1000.0,
                speed_multiplier: 1.0,
                penalty_ratio: 0.5,
                max_fall_speed: 4.0,
            },
            Difficulty::Medium => DifficultySetting {
                spawn_interval_ms: 800.0,
                speed_multiplier: 1.5,
                penalty_ratio: 0.75,
                max_fall_speed: 5.0,
            },
            Difficulty::Hard => DifficultySetting {
                spawn_interval_ms: 600.0,
                speed_multiplier: 2.0,
                penalty_ratio: 1.0,
                max_fall_speed: 6.0,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| format!("unknown difficulty: {s}"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Clear,
    Rain,
    Snow,
    Storm,
}

impl Weather {
    pub const ALL: [Weather; 4] = [Weather::Clear, Weather::Rain, Weather::Snow, Weather::Storm];

    pub fn name(self) -> &'static str {
        match self {
            Weather::Clear => "clear",
            Weather::Rain => "rain",
            Weather::Snow => "snow",
            Weather::Storm => "storm",
        }
    }

    pub fn has_lightning(self) -> bool {
        self == Weather::Storm
    }
}

impl fmt::Display for Weather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weather {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Weather::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| format!("unknown weather: {s}"))
    }
}

/// Choices coming from the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    pub difficulty: Difficulty,
    pub weather: Weather,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub difficulty: Difficulty,
    pub weather: Weather,
    pub target_rotate_ms: f32,
    pub target_emphasis_ms: f32,
    pub witch_interval_ms: f32,
    pub witch_hide_ms: f32,
    pub hit_remove_delay_ms: f32,
    pub feedback_lifetime_ms: f32,
    pub cloud_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            weather: Weather::default(),
            target_rotate_ms: Params::TARGET_ROTATE_MS,
            target_emphasis_ms: Params::TARGET_EMPHASIS_MS,
            witch_interval_ms: Params::WITCH_INTERVAL_MS,
            witch_hide_ms: Params::WITCH_HIDE_MS,
            hit_remove_delay_ms: Params::HIT_REMOVE_DELAY_MS,
            feedback_lifetime_ms: Params::FEEDBACK_LIFETIME_MS,
            cloud_count: Params::CLOUD_COUNT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tuning for the active difficulty
    pub fn setting(&self) -> DifficultySetting {
        self.difficulty.setting()
    }

    pub fn apply_options(&mut self, options: GameOptions) {
        self.difficulty = options.difficulty;
        self.weather = options.weather;
    }
}
