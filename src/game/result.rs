//! Terminal game results and post-run player snapshots.

use serde::{Deserialize, Serialize};

use crate::behavior::Behavior;
use crate::core::PlayerId;

use super::table::Table;

/// One row of the final ranking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based rank.
    pub rank: usize,
    pub name: String,
    pub balance: i64,
    pub properties_count: usize,
}

/// A player as it stood when the game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerId,
    pub name: String,
    pub behavior: Behavior,
    pub balance: i64,
    pub position: usize,
    pub active: bool,
    /// Names of the properties owned.
    pub properties: Vec<String>,
    pub total_assets: i64,
}

/// Outcome of one complete game.
///
/// A timed-out game is a complete, valid result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub winner_name: String,
    pub winner_behavior: Behavior,
    pub total_turns: u32,
    pub timed_out: bool,
    /// Sorted by balance, highest first; equal balances keep seat order.
    pub final_standings: Vec<Standing>,
    /// Every player in seat order.
    pub players: Vec<PlayerSnapshot>,
    /// Seed that reproduces this game.
    pub seed: u64,
}

impl GameResult {
    /// Capture the finished table.
    pub(crate) fn from_table(
        table: &Table,
        winner: PlayerId,
        total_turns: u32,
        timed_out: bool,
        seed: u64,
    ) -> Self {
        let winner_state = table.player(winner);

        Self {
            winner,
            winner_name: winner_state.name().to_string(),
            winner_behavior: winner_state.behavior(),
            total_turns,
            timed_out,
            final_standings: standings(table),
            players: snapshots(table),
            seed,
        }
    }
}

/// Final ranking by balance.
pub fn standings(table: &Table) -> Vec<Standing> {
    let mut rows: Vec<_> = table
        .players()
        .values()
        .map(|p| (p.name().to_string(), p.balance(), p.properties_owned().len()))
        .collect();

    // Stable, so ties keep seat order.
    rows.sort_by(|a, b| b.1.cmp(&a.1));

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, balance, properties_count))| Standing {
            rank: i + 1,
            name,
            balance,
            properties_count,
        })
        .collect()
}

/// Snapshot every player in seat order.
pub fn snapshots(table: &Table) -> Vec<PlayerSnapshot> {
    let board = table.board();

    table
        .players()
        .values()
        .map(|p| PlayerSnapshot {
            id: p.id(),
            name: p.name().to_string(),
            behavior: p.behavior(),
            balance: p.balance(),
            position: p.position(),
            active: p.is_active(),
            properties: p
                .properties_owned()
                .iter()
                .filter_map(|&position| board.property(position))
                .map(|property| property.name.to_string())
                .collect(),
            total_assets: p.total_assets(board),
        })
        .collect()
}
