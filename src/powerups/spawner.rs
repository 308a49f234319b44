//! Randomized pickup placement and pawn promotion.
//!
//! All randomness the engine uses flows through `PowerupSpawner`, which owns a
//! seedable `StdRng`. Seed it for reproducible games and tests.

use log::debug;
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::board_location::Coordinate;
use crate::game_state::chess_types::PieceClass;

/// Tunables for the powerup layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerupConfig {
    /// Pickups may appear only once the total turn count exceeds this.
    pub delay_turns: u32,
    /// Chance per move, once past the delay, that a pickup is placed.
    pub spawn_chance: f64,
    /// Lets a powered knight keep its powerup after an ordinary L-jump, losing
    /// it only on an extended orthogonal step. Off by default: every piece
    /// spends its powerup on its next move.
    pub knight_keeps_powerup_on_standard_moves: bool,
}

impl Default for PowerupConfig {
    fn default() -> Self {
        Self {
            delay_turns: 2,
            spawn_chance: 0.75,
            knight_keeps_powerup_on_standard_moves: false,
        }
    }
}

impl PowerupConfig {
    /// No pickups ever spawn.
    pub fn disabled() -> Self {
        Self {
            delay_turns: u32::MAX,
            spawn_chance: 0.0,
            ..Self::default()
        }
    }
}

/// Maps one uniform draw in `[0, 1)` to the class a promoted pawn becomes.
///
/// Above 0.9 queen, above 0.6 rook, above 0.3 bishop, otherwise knight.
pub fn promotion_for_draw(value: f64) -> PieceClass {
    if value > 0.9 {
        PieceClass::Queen
    } else if value > 0.6 {
        PieceClass::Rook
    } else if value > 0.3 {
        PieceClass::Bishop
    } else {
        PieceClass::Knight
    }
}

#[derive(Debug, Clone)]
pub struct PowerupSpawner {
    config: PowerupConfig,
    rng: StdRng,
}

impl PowerupSpawner {
    /// Seeded from the operating system.
    pub fn new(config: PowerupConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(config: PowerupConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &PowerupConfig {
        &self.config
    }

    pub fn promotion_class(&mut self) -> PieceClass {
        let draw: f64 = self.rng.random();
        let class = promotion_for_draw(draw);
        debug!("promotion draw {draw:.3} -> {}", class.name());
        class
    }

    /// Draws exactly once per call after the delay has passed, whatever the
    /// chance, so the random stream depends only on the turn count.
    pub fn should_spawn(&mut self, total_turns: u32) -> bool {
        if total_turns <= self.config.delay_turns {
            return false;
        }
        let draw: f64 = self.rng.random();
        draw < self.config.spawn_chance
    }

    /// Uniform choice among the given empty squares.
    pub fn choose_square(&mut self, empty: &[Coordinate]) -> Option<Coordinate> {
        empty.choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_thresholds() {
        assert_eq!(promotion_for_draw(0.0), PieceClass::Knight);
        assert_eq!(promotion_for_draw(0.3), PieceClass::Knight);
        assert_eq!(promotion_for_draw(0.31), PieceClass::Bishop);
        assert_eq!(promotion_for_draw(0.6), PieceClass::Bishop);
        assert_eq!(promotion_for_draw(0.61), PieceClass::Rook);
        assert_eq!(promotion_for_draw(0.9), PieceClass::Rook);
        assert_eq!(promotion_for_draw(0.95), PieceClass::Queen);
    }

    #[test]
    fn never_spawns_before_delay() {
        let mut spawner = PowerupSpawner::with_seed(
            PowerupConfig {
                spawn_chance: 1.0,
                ..PowerupConfig::default()
            },
            11,
        );
        assert!(!spawner.should_spawn(0));
        assert!(!spawner.should_spawn(2));
        assert!(spawner.should_spawn(3));
    }

    #[test]
    fn disabled_config_never_spawns() {
        let mut spawner = PowerupSpawner::with_seed(PowerupConfig::disabled(), 3);
        for turn in 0..200 {
            assert!(!spawner.should_spawn(turn));
        }
    }

    #[test]
    fn zero_chance_still_consumes_a_draw() {
        let never = PowerupConfig {
            spawn_chance: 0.0,
            ..PowerupConfig::default()
        };
        let always = PowerupConfig {
            spawn_chance: 1.0,
            ..PowerupConfig::default()
        };
        let mut a = PowerupSpawner::with_seed(never, 17);
        let mut b = PowerupSpawner::with_seed(always, 17);
        let squares: Vec<Coordinate> = Coordinate::all().collect();

        for turn in 0..10 {
            assert!(!a.should_spawn(turn));
            assert_eq!(b.should_spawn(turn), turn > 2);
            assert_eq!(a.choose_square(&squares), b.choose_square(&squares));
        }
    }

    #[test]
    fn same_seed_same_choices() {
        let squares: Vec<Coordinate> = Coordinate::all().collect();
        let mut a = PowerupSpawner::with_seed(PowerupConfig::default(), 42);
        let mut b = PowerupSpawner::with_seed(PowerupConfig::default(), 42);
        for _ in 0..16 {
            assert_eq!(a.choose_square(&squares), b.choose_square(&squares));
            assert_eq!(a.promotion_class(), b.promotion_class());
        }
        assert_eq!(a.choose_square(&[]), None);
    }
}
