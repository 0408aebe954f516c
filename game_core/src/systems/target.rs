use tracing::debug;

use crate::config::{render_instruction, Config, FruitKind, FRUITS, INSTRUCTIONS};
use crate::resources::{Events, GameEvent, GameRng, Timer, Timers};

/// Pick a new target fruit and instruction, and flash the instruction
pub fn rotate_target(
    target: &mut Option<&'static FruitKind>,
    timers: &mut Timers,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) -> &'static FruitKind {
    let fruit = &FRUITS[rng.index(FRUITS.len())];
    let template = INSTRUCTIONS[rng.index(INSTRUCTIONS.len())];
    let instruction = render_instruction(template, fruit);

    debug!(fruit = fruit.name, %instruction, "target rotated");
    *target = Some(fruit);

    events.push(GameEvent::TargetChanged {
        fruit: fruit.name,
        instruction,
    });
    events.push(GameEvent::TargetEmphasis { on: true });
    timers.emphasis = Some(Timer::once(config.target_emphasis_ms));

    fruit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_sets_target_and_emits() {
        let mut target = None;
        let mut timers = Timers::new();
        let config = Config::new();
        let mut rng = GameRng::new(3);
        let mut events = Events::new();

        let fruit = rotate_target(&mut target, &mut timers, &config, &mut rng, &mut events);

        assert_eq!(target, Some(fruit));
        assert!(timers.emphasis.is_some(), "emphasis cue should be armed");
        match &events.queue[0] {
            GameEvent::TargetChanged {
                fruit: name,
                instruction,
            } => {
                assert_eq!(*name, fruit.name);
                assert!(instruction.contains(fruit.name));
                assert!(!instruction.contains("{fruit}"));
            }
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_rotation_is_deterministic_for_seed() {
        let config = Config::new();
        let pick = |seed| {
            let mut target = None;
            let mut timers = Timers::new();
            let mut events = Events::new();
            let mut rng = GameRng::new(seed);
            (0..5)
                .map(|_| {
                    rotate_target(&mut target, &mut timers, &config, &mut rng, &mut events).name
                })
                .collect::<Vec<_>>()
        };
        assert_eq!(pick(42), pick(42));
    }

    #[test]
    fn test_rotation_covers_catalog() {
        let config = Config::new();
        let mut target = None;
        let mut timers = Timers::new();
        let mut events = Events::new();
        let mut rng = GameRng::new(9);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(rotate_target(&mut target, &mut timers, &config, &mut rng, &mut events).name);
        }
        assert_eq!(seen.len(), FRUITS.len());
    }
}
