//! Purchasing strategies.
//!
//! Each player has a `Behavior`. The behavior maps to a stateless
//! `PurchaseStrategy` through a static table, so players never allocate
//! their own strategy object.
//!
//! | Behavior  | Buys when                                   |
//! |-----------|---------------------------------------------|
//! | Impulsive | always                                      |
//! | Demanding | rent is strictly greater than 50            |
//! | Cautious  | at least 80 remains after paying            |
//! | Random    | a fair coin says so                         |
//!
//! Affordability is checked by the player before any strategy runs.

use serde::{Deserialize, Serialize};

use crate::board::Property;
use crate::core::GameRng;
use crate::game::Player;

/// Demanding players only buy when rent is above this.
pub const DEMANDING_RENT_THRESHOLD: i64 = 50;

/// Cautious players keep at least this much after a purchase.
pub const CAUTIOUS_RESERVE: i64 = 80;

/// Probability that a Random player buys.
pub const RANDOM_BUY_PROBABILITY: f64 = 0.5;

/// Purchasing behavior of a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Behavior {
    Impulsive,
    Demanding,
    Cautious,
    Random,
}

impl Behavior {
    /// Every behavior, in seat order.
    pub const ALL: [Behavior; 4] = [
        Behavior::Impulsive,
        Behavior::Demanding,
        Behavior::Cautious,
        Behavior::Random,
    ];

    /// Human-readable label, also used as the player name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Behavior::Impulsive => "Impulsive",
            Behavior::Demanding => "Demanding",
            Behavior::Cautious => "Cautious",
            Behavior::Random => "Random",
        }
    }

    /// The shared strategy instance for this behavior.
    #[must_use]
    pub fn strategy(self) -> &'static dyn PurchaseStrategy {
        match self {
            Behavior::Impulsive => &Impulsive,
            Behavior::Demanding => &Demanding,
            Behavior::Cautious => &Cautious,
            Behavior::Random => &CoinFlip,
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Decides whether a player wants a property it can already afford.
pub trait PurchaseStrategy: Send + Sync {
    /// Return true to buy.
    ///
    /// `rng` is only consumed by strategies that need randomness.
    fn should_buy(&self, player: &Player, property: &Property, rng: &mut GameRng) -> bool;
}

/// Buys everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct Impulsive;

impl PurchaseStrategy for Impulsive {
    fn should_buy(&self, _player: &Player, _property: &Property, _rng: &mut GameRng) -> bool {
        true
    }
}

/// Buys only high-rent properties.
#[derive(Clone, Copy, Debug, Default)]
pub struct Demanding;

impl PurchaseStrategy for Demanding {
    fn should_buy(&self, _player: &Player, property: &Property, _rng: &mut GameRng) -> bool {
        property.rent_value > DEMANDING_RENT_THRESHOLD
    }
}

/// Buys only while keeping a cash reserve.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cautious;

impl PurchaseStrategy for Cautious {
    fn should_buy(&self, player: &Player, property: &Property, _rng: &mut GameRng) -> bool {
        player.balance() - property.sale_cost >= CAUTIOUS_RESERVE
    }
}

/// Buys on a fair coin flip, sampled on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoinFlip;

impl PurchaseStrategy for CoinFlip {
    fn should_buy(&self, _player: &Player, _property: &Property, rng: &mut GameRng) -> bool {
        rng.gen_bool(RANDOM_BUY_PROBABILITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn player_with(behavior: Behavior, balance: i64) -> Player {
        Player::new(PlayerId::new(0), behavior, balance)
    }

    #[test]
    fn test_labels_and_order() {
        let labels: Vec<_> = Behavior::ALL.iter().map(|b| b.label()).collect();
        assert_eq!(labels, vec!["Impulsive", "Demanding", "Cautious", "Random"]);
        assert_eq!(Behavior::Cautious.to_string(), "Cautious");
    }

    #[test]
    fn test_impulsive_always_buys() {
        let mut rng = GameRng::new(1);
        let player = player_with(Behavior::Impulsive, 0);
        let property = Property::new(5, "Leblon", 160, 16);
        assert!(Impulsive.should_buy(&player, &property, &mut rng));
    }

    #[test]
    fn test_demanding_threshold_is_strict() {
        let mut rng = GameRng::new(1);
        let player = player_with(Behavior::Demanding, 1000);

        let at_threshold = Property::new(0, "At", 100, 50);
        let above = Property::new(1, "Above", 100, 51);

        assert!(!Demanding.should_buy(&player, &at_threshold, &mut rng));
        assert!(Demanding.should_buy(&player, &above, &mut rng));
    }

    #[test]
    fn test_cautious_reserve_is_inclusive() {
        let mut rng = GameRng::new(1);
        let property = Property::new(0, "Avenida Atlântica", 100, 10);

        assert!(Cautious.should_buy(&player_with(Behavior::Cautious, 180), &property, &mut rng));
        assert!(!Cautious.should_buy(&player_with(Behavior::Cautious, 179), &property, &mut rng));
    }

    #[test]
    fn test_coin_flip_is_roughly_fair() {
        let mut rng = GameRng::new(2024);
        let player = player_with(Behavior::Random, 300);
        let property = Property::new(0, "Avenida Atlântica", 100, 10);

        let yes = (0..2000)
            .filter(|_| CoinFlip.should_buy(&player, &property, &mut rng))
            .count();

        assert!((800..1200).contains(&yes), "got {yes} buys out of 2000");
    }

    #[test]
    fn test_strategy_table_dispatch() {
        let mut rng = GameRng::new(1);
        let property = Property::new(0, "Low rent", 100, 10);
        let rich = player_with(Behavior::Demanding, 1000);

        assert!(Behavior::Impulsive.strategy().should_buy(&rich, &property, &mut rng));
        assert!(!Behavior::Demanding.strategy().should_buy(&rich, &property, &mut rng));
        assert!(Behavior::Cautious.strategy().should_buy(&rich, &property, &mut rng));
    }
}
