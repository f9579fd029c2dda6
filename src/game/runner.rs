//! The game loop.
//!
//! ## Flow
//!
//! Each turn, every active player in seat order:
//! 1. rolls one die and moves, collecting the lap bonus when wrapping
//! 2. pays rent if the landed property belongs to someone else,
//!    otherwise tries to buy it
//! 3. the win condition is checked right away, so a game can end before
//!    the remaining seats act
//!
//! If the turn cap is reached first, the active player with the most total
//! assets wins and the result is flagged as timed out.
//!
//! ## Determinism
//!
//! Dice and purchase coin flips come from two independent streams derived
//! from one seed, so a seed fully determines a game.

use crate::core::config::INITIAL_BALANCE;
use crate::core::{GameConfig, GameError, GameRng, PlayerId};

use super::observer::{GameEvent, GameObserver, NullObserver};
use super::result::GameResult;
use super::table::Table;

/// Runs a single game to completion.
pub struct Runner<O: GameObserver = NullObserver> {
    config: GameConfig,
    table: Table,
    dice: GameRng,
    choices: GameRng,
    seed: u64,
    turn: u32,
    observer: O,
}

impl Runner<NullObserver> {
    /// Create a runner that reports nothing.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: GameObserver> Runner<O> {
    /// Create a runner reporting to `observer`.
    pub fn with_observer(config: GameConfig, observer: O) -> Result<Self, GameError> {
        config.validate()?;

        let root = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        Ok(Self {
            table: Table::new(config.initial_balance),
            dice: root.for_context("dice"),
            choices: root.for_context("choices"),
            seed: root.seed(),
            turn: 0,
            config,
            observer,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Direct state access, for setting up scenarios.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Turns played so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The seed actually used.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    /// The sole remaining active player, if exactly one is left.
    #[must_use]
    pub fn check_win_condition(&self) -> Option<PlayerId> {
        self.table.check_win_condition()
    }

    /// Play until one player remains or the turn cap is hit.
    ///
    /// A game that is already decided returns without playing further turns.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        if self.table.active_players().next().is_none() {
            return Err(GameError::NoActivePlayers { turn: self.turn });
        }

        let seats = self.table.players().player_count();
        let mut winner = self.check_win_condition();

        while winner.is_none() && self.turn < self.config.max_turns {
            self.turn += 1;
            self.emit(GameEvent::TurnStarted { turn: self.turn });

            for player in PlayerId::all(seats) {
                if !self.table.player(player).is_active() {
                    continue;
                }

                self.play_turn(player)?;

                winner = self.check_win_condition();
                if winner.is_some() {
                    break;
                }
            }
        }

        let (winner, timed_out) = match winner {
            Some(winner) => (winner, false),
            None => {
                let richest = self
                    .table
                    .richest_active_player()
                    .ok_or(GameError::NoActivePlayers { turn: self.turn })?;
                (richest, true)
            }
        };

        self.emit(GameEvent::Finished {
            winner,
            turns: self.turn,
            timed_out,
        });

        Ok(GameResult::from_table(
            &self.table,
            winner,
            self.turn,
            timed_out,
            self.seed,
        ))
    }

    fn play_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        let value = self.dice.roll_die();
        self.emit(GameEvent::DiceRolled { player, value });

        let size = self.table.board().len();
        let step = self.table.player_mut(player).move_by(value as usize, size);
        self.emit(GameEvent::Moved {
            player,
            from: step.from,
            to: step.to,
            lap_completed: step.lap_completed,
        });

        let position = step.to;
        let property = self
            .table
            .board()
            .property(position)
            .ok_or(GameError::PositionOutOfRange { position, size })?;
        let (owner, cost, rent) = (property.owner, property.sale_cost, property.rent_value);

        match owner {
            Some(owner) if owner != player => {
                let solvent = self.table.pay_rent(player, position);
                self.emit(GameEvent::RentPaid {
                    payer: player,
                    owner,
                    position,
                    amount: rent,
                });

                if !solvent {
                    let balance = self.table.player(player).balance();
                    self.emit(GameEvent::Bankrupt { player, balance });
                }
            }
            Some(_) => {}
            None => {
                let balance_before = self.table.player(player).balance();
                if self.table.buy_property(player, position, &mut self.choices) {
                    self.emit(GameEvent::Purchased {
                        player,
                        position,
                        cost,
                        rent,
                        balance_before,
                    });
                }
            }
        }

        Ok(())
    }

    fn emit(&mut self, event: GameEvent) {
        self.observer.on_event(&event);
    }
}

/// Run one complete game with default rules and a fresh seed.
pub fn run_simulation(initial_balance: i64) -> Result<GameResult, GameError> {
    Runner::new(GameConfig::new().with_initial_balance(initial_balance))?.run()
}

/// Run one complete game with the default starting balance.
pub fn run_default_simulation() -> Result<GameResult, GameError> {
    run_simulation(INITIAL_BALANCE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_INITIAL_BALANCE;
    use crate::game::observer::EventLog;

    const IMPULSIVE: PlayerId = PlayerId::new(0);
    const DEMANDING: PlayerId = PlayerId::new(1);
    const CAUTIOUS: PlayerId = PlayerId::new(2);
    const RANDOM: PlayerId = PlayerId::new(3);

    fn seeded(seed: u64) -> GameConfig {
        GameConfig::new().with_seed(seed)
    }

    #[test]
    fn test_initial_state() {
        let runner = Runner::new(seeded(1)).unwrap();
        assert_eq!(runner.turn(), 0);
        assert_eq!(runner.seed(), 1);
        assert_eq!(runner.table().active_players().count(), 4);
        assert_eq!(runner.table().board().available_properties().len(), 20);
        assert_eq!(runner.check_win_condition(), None);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Runner::new(GameConfig::new().with_max_turns(0));
        assert!(matches!(result, Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_already_decided_game_plays_no_turns() {
        let mut runner = Runner::new(seeded(5)).unwrap();
        runner.table_mut().go_bankrupt(DEMANDING);
        runner.table_mut().go_bankrupt(CAUTIOUS);
        runner.table_mut().go_bankrupt(RANDOM);

        assert_eq!(runner.check_win_condition(), Some(IMPULSIVE));

        let result = runner.run().unwrap();
        assert_eq!(result.winner, IMPULSIVE);
        assert_eq!(result.total_turns, 0);
        assert!(!result.timed_out);
    }

    #[test]
    fn test_no_active_players_is_an_error() {
        let mut runner = Runner::new(seeded(5)).unwrap();
        for id in PlayerId::all(4) {
            runner.table_mut().go_bankrupt(id);
        }

        assert_eq!(runner.run(), Err(GameError::NoActivePlayers { turn: 0 }));
    }

    #[test]
    fn test_game_terminates_within_cap() {
        for seed in 0..20 {
            let result = Runner::new(seeded(seed)).unwrap().run().unwrap();
            assert!(result.total_turns <= 1000);
            assert!(result.total_turns >= 1);
            assert_eq!(result.final_standings.len(), 4);
            assert_eq!(result.players.len(), 4);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = Runner::new(seeded(77)).unwrap().run().unwrap();
        let b = Runner::new(seeded(77)).unwrap().run().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_timeout_picks_richest_active() {
        let mut runner = Runner::new(seeded(3).with_max_turns(1)).unwrap();
        let result = runner.run().unwrap();

        assert!(result.timed_out);
        assert_eq!(result.total_turns, 1);
        assert_eq!(Some(result.winner), runner.table().richest_active_player());
        assert!(runner.table().player(result.winner).is_active());
    }

    /// Cautious owns the whole board; Demanding is broke. Demanding's first
    /// rent payment ends the game before Cautious ever rolls.
    #[test]
    fn test_natural_win_stops_mid_round() {
        let mut runner = Runner::with_observer(seeded(11), EventLog::new()).unwrap();
        let mut rng = GameRng::new(0);
        {
            let table = runner.table_mut();
            table.go_bankrupt(IMPULSIVE);
            table.go_bankrupt(RANDOM);
            table.player_mut(CAUTIOUS).balance = 1_000_000;
            table.player_mut(DEMANDING).balance = 0;
            for position in 0..table.board().len() {
                assert!(table.buy_property(CAUTIOUS, position, &mut rng));
            }
        }

        let result = runner.run().unwrap();
        assert_eq!(result.winner, CAUTIOUS);
        assert_eq!(result.total_turns, 1);
        assert!(!result.timed_out);
        assert_eq!(runner.table().active_players().collect::<Vec<_>>(), vec![CAUTIOUS]);

        let events = runner.observer().events();
        let bankrupt = events
            .iter()
            .position(|e| matches!(e, GameEvent::Bankrupt { player: DEMANDING, .. }))
            .unwrap();
        assert_eq!(bankrupt + 2, events.len());
        assert!(!events
            .iter()
            .any(|e| matches!(e, GameEvent::DiceRolled { player: CAUTIOUS, .. })));
        assert!(matches!(
            events.last(),
            Some(GameEvent::Finished { winner: CAUTIOUS, turns: 1, timed_out: false })
        ));
    }

    #[test]
    fn test_largest_initial_balance_plays_without_overflow() {
        let config = seeded(4)
            .with_initial_balance(MAX_INITIAL_BALANCE)
            .with_max_turns(50);
        let result = Runner::new(config).unwrap().run().unwrap();
        assert!(result.timed_out);

        let too_rich = seeded(4).with_initial_balance(i64::MAX - 50);
        assert!(matches!(Runner::new(too_rich), Err(GameError::InvalidConfig { .. })));
    }

    #[test]
    fn test_events_reconcile_money() {
        for seed in 0..10 {
            let config = seeded(seed);
            let initial = config.initial_balance;
            let mut runner = Runner::with_observer(config, EventLog::new()).unwrap();
            runner.run().unwrap();

            let log = runner.observer();
            let expected = initial * 4 + 100 * log.laps_completed() as i64 - log.purchase_spend();
            assert_eq!(runner.table().total_balance(), expected);
        }
    }

    #[test]
    fn test_run_simulation_entry_point() {
        let result = run_simulation(300).unwrap();
        assert!(result.total_turns <= 1000);
        assert_eq!(result.winner_name, result.winner_behavior.label());

        assert!(run_default_simulation().is_ok());
        assert!(matches!(run_simulation(-5), Err(GameError::InvalidConfig { .. })));
    }
}
