//! Aggregate statistics over many independent games.
//!
//! Game `i` of a batch is seeded with `base_seed + i`, so a batch is
//! reproducible from its base seed and the parallel runner produces exactly
//! the same summary as the sequential one.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;
use crate::core::{GameConfig, GameError, GameRng};
use crate::game::{GameResult, Runner};

/// Win counts and averages across a batch of games.
///
/// Per-behavior maps are keyed in seat order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_simulations: usize,
    /// Every behavior is present, including those with zero wins.
    pub wins_by_behavior: BTreeMap<Behavior, usize>,
    /// Percent of games won, rounded to two decimals.
    pub win_percentages: BTreeMap<Behavior, f64>,
    /// Mean game length in turns, rounded to two decimals.
    pub average_turns: f64,
    pub timeout_count: usize,
    /// Seed of the first game in the batch.
    pub base_seed: u64,
}

impl SimulationSummary {
    /// Run `count` games one after another.
    pub fn run(count: usize, config: &GameConfig) -> Result<Self, GameError> {
        let base_seed = batch_seed(count, config)?;

        let results = (0..count)
            .map(|i| play(config, base_seed, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_results(&results, base_seed))
    }

    /// Run `count` games across the rayon thread pool.
    ///
    /// Each game owns its own runner; nothing is shared between them.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(count: usize, config: &GameConfig) -> Result<Self, GameError> {
        use rayon::prelude::*;

        let base_seed = batch_seed(count, config)?;

        let results = (0..count)
            .into_par_iter()
            .map(|i| play(config, base_seed, i))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::from_results(&results, base_seed))
    }

    /// Summarize finished games.
    pub fn from_results(results: &[GameResult], base_seed: u64) -> Self {
        let total = results.len();

        let mut wins: BTreeMap<Behavior, usize> =
            Behavior::ALL.iter().map(|&b| (b, 0)).collect();
        for result in results {
            *wins.entry(result.winner_behavior).or_default() += 1;
        }

        let win_percentages = wins
            .iter()
            .map(|(&behavior, &count)| (behavior, round2(percent(count, total))))
            .collect();

        let total_turns: u64 = results.iter().map(|r| u64::from(r.total_turns)).sum();
        let average_turns = if total == 0 {
            0.0
        } else {
            round2(total_turns as f64 / total as f64)
        };

        Self {
            total_simulations: total,
            wins_by_behavior: wins,
            win_percentages,
            average_turns,
            timeout_count: results.iter().filter(|r| r.timed_out).count(),
            base_seed,
        }
    }

    /// Wins recorded for `behavior`.
    #[must_use]
    pub fn wins(&self, behavior: Behavior) -> usize {
        self.wins_by_behavior.get(&behavior).copied().unwrap_or(0)
    }

    /// Win percentage for `behavior`.
    #[must_use]
    pub fn win_percentage(&self, behavior: Behavior) -> f64 {
        self.win_percentages.get(&behavior).copied().unwrap_or(0.0)
    }
}

fn batch_seed(count: usize, config: &GameConfig) -> Result<u64, GameError> {
    if count == 0 {
        return Err(GameError::invalid_config("at least one simulation is required"));
    }
    config.validate()?;

    Ok(config
        .seed
        .unwrap_or_else(|| GameRng::from_entropy().seed()))
}

fn play(config: &GameConfig, base_seed: u64, index: usize) -> Result<GameResult, GameError> {
    let game_config = config.clone().with_seed(base_seed.wrapping_add(index as u64));
    Runner::new(game_config)?.run()
}

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlayerId;

    fn fake_result(behavior: Behavior, turns: u32, timed_out: bool) -> GameResult {
        GameResult {
            winner: PlayerId::new(0),
            winner_name: behavior.label().to_string(),
            winner_behavior: behavior,
            total_turns: turns,
            timed_out,
            final_standings: Vec::new(),
            players: Vec::new(),
            seed: 0,
        }
    }

    #[test]
    fn test_from_results() {
        let results = vec![
            fake_result(Behavior::Impulsive, 10, false),
            fake_result(Behavior::Impulsive, 20, false),
            fake_result(Behavior::Cautious, 1000, true),
        ];

        let summary = SimulationSummary::from_results(&results, 5);
        assert_eq!(summary.total_simulations, 3);
        assert_eq!(summary.wins(Behavior::Impulsive), 2);
        assert_eq!(summary.wins(Behavior::Cautious), 1);
        assert_eq!(summary.wins(Behavior::Demanding), 0);
        assert_eq!(summary.wins_by_behavior.len(), 4);
        assert_eq!(summary.win_percentage(Behavior::Impulsive), 66.67);
        assert_eq!(summary.win_percentage(Behavior::Cautious), 33.33);
        assert_eq!(summary.average_turns, 343.33);
        assert_eq!(summary.timeout_count, 1);
        assert_eq!(summary.base_seed, 5);
    }

    #[test]
    fn test_zero_games_rejected() {
        assert!(matches!(
            SimulationSummary::run(0, &GameConfig::default()),
            Err(GameError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_batch_is_reproducible() {
        let config = GameConfig::new().with_seed(1234);
        let a = SimulationSummary::run(10, &config).unwrap();
        let b = SimulationSummary::run(10, &config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_json_lists_behaviors_in_seat_order() {
        let results = vec![fake_result(Behavior::Random, 5, false)];
        let json = serde_json::to_string(&SimulationSummary::from_results(&results, 0)).unwrap();

        let wins = &json[json.find("wins_by_behavior").unwrap()..json.find("win_percentages").unwrap()];
        let offsets: Vec<usize> = Behavior::ALL
            .iter()
            .map(|b| wins.find(&format!("\"{}\"", b.label())).unwrap())
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_hundred_games_account_for_every_win() {
        let summary = SimulationSummary::run(100, &GameConfig::default()).unwrap();

        let total: usize = summary.wins_by_behavior.values().sum();
        assert_eq!(total, 100);
        for behavior in Behavior::ALL {
            assert!(summary.wins(behavior) <= 100);
        }
        assert!(summary.average_turns <= 1000.0);
        assert!(summary.timeout_count <= 100);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let config = GameConfig::new().with_seed(99);
        let sequential = SimulationSummary::run(40, &config).unwrap();
        let parallel = SimulationSummary::run_parallel(40, &config).unwrap();
        assert_eq!(sequential, parallel);
    }
}
