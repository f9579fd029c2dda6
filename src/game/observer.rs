//! Game events and the observers that receive them.
//!
//! The runner never logs directly. It reports what happens to an injected
//! `GameObserver`, so the engine stays free of I/O unless a caller opts in
//! with `LogObserver`.

use serde::Serialize;

use crate::core::PlayerId;

/// Something that happened during a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    /// A new round of turns begins.
    TurnStarted { turn: u32 },

    /// A player rolled the die.
    DiceRolled { player: PlayerId, value: u8 },

    /// A player moved; `lap_completed` means the lap bonus was paid.
    Moved {
        player: PlayerId,
        from: usize,
        to: usize,
        lap_completed: bool,
    },

    /// A player bought a property.
    Purchased {
        player: PlayerId,
        position: usize,
        cost: i64,
        rent: i64,
        balance_before: i64,
    },

    /// Rent changed hands.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        position: usize,
        amount: i64,
    },

    /// A player went bankrupt.
    Bankrupt { player: PlayerId, balance: i64 },

    /// The game ended.
    Finished {
        winner: PlayerId,
        turns: u32,
        timed_out: bool,
    },
}

/// Receives game events as they happen.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_event(&mut self, _event: &GameEvent) {}
}

/// Forwards events to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl GameObserver for LogObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::TurnStarted { turn } => log::trace!("turn {turn}"),
            GameEvent::DiceRolled { player, value } => log::trace!("{player} rolled {value}"),
            GameEvent::Moved {
                player,
                from,
                to,
                lap_completed,
            } => {
                log::trace!("{player} moved {from} -> {to}");
                if lap_completed {
                    log::debug!("{player} completed a lap");
                }
            }
            GameEvent::Purchased {
                player,
                position,
                cost,
                balance_before,
                ..
            } => log::debug!(
                "{player} bought position {position} for {cost} (balance {balance_before} -> {})",
                balance_before - cost
            ),
            GameEvent::RentPaid {
                payer,
                owner,
                position,
                amount,
            } => log::debug!("{payer} paid {amount} rent to {owner} for position {position}"),
            GameEvent::Bankrupt { player, balance } => {
                log::warn!("{player} went bankrupt with balance {balance}")
            }
            GameEvent::Finished {
                winner,
                turns,
                timed_out,
            } => {
                if timed_out {
                    log::warn!("turn limit reached after {turns} turns");
                }
                log::info!("{winner} won after {turns} turns");
            }
        }
    }
}

/// Keeps every event in memory.
#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Number of lap bonuses paid out.
    #[must_use]
    pub fn laps_completed(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Moved { lap_completed: true, .. }))
            .count()
    }

    /// Total money paid to the bank for purchases.
    #[must_use]
    pub fn purchase_spend(&self) -> i64 {
        self.events
            .iter()
            .map(|e| match e {
                GameEvent::Purchased { cost, .. } => *cost,
                _ => 0,
            })
            .sum()
    }
}

impl GameObserver for EventLog {
    fn on_event(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

impl<O: GameObserver + ?Sized> GameObserver for &mut O {
    fn on_event(&mut self, event: &GameEvent) {
        (**self).on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_records_in_order() {
        let mut log = EventLog::new();
        log.on_event(&GameEvent::TurnStarted { turn: 1 });
        log.on_event(&GameEvent::DiceRolled {
            player: PlayerId::new(0),
            value: 4,
        });

        assert_eq!(log.events().len(), 2);
        assert_eq!(log.events()[0], GameEvent::TurnStarted { turn: 1 });
    }

    #[test]
    fn test_event_log_totals() {
        let mut log = EventLog::new();
        let player = PlayerId::new(2);

        log.on_event(&GameEvent::Moved {
            player,
            from: 18,
            to: 1,
            lap_completed: true,
        });
        log.on_event(&GameEvent::Moved {
            player,
            from: 1,
            to: 4,
            lap_completed: false,
        });
        log.on_event(&GameEvent::Purchased {
            player,
            position: 4,
            cost: 140,
            rent: 14,
            balance_before: 400,
        });

        assert_eq!(log.laps_completed(), 1);
        assert_eq!(log.purchase_spend(), 140);
    }

    #[test]
    fn test_observer_by_mutable_reference() {
        fn emit(mut observer: impl GameObserver) {
            observer.on_event(&GameEvent::TurnStarted { turn: 7 });
        }

        let mut log = EventLog::new();
        emit(&mut log);
        emit(&mut NullObserver);
        emit(LogObserver);

        assert_eq!(log.events(), &[GameEvent::TurnStarted { turn: 7 }]);
    }
}
