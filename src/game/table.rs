//! The board together with the players sitting around it.
//!
//! Everything that moves money between players, or touches both a player and
//! properties it does not stand on, goes through here.

use crate::behavior::Behavior;
use crate::board::Board;
use crate::core::{GameRng, PlayerId, PlayerMap};

use super::player::Player;

/// Board plus players for one game.
#[derive(Clone, Debug)]
pub struct Table {
    board: Board,
    players: PlayerMap<Player>,
}

impl Table {
    /// Fresh board and one player per behavior, seated in `Behavior::ALL` order.
    pub fn new(initial_balance: i64) -> Self {
        let players = PlayerMap::new(Behavior::ALL.len(), |id| {
            Player::new(id, Behavior::ALL[id.index()], initial_balance)
        });

        Self {
            board: Board::new(),
            players,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    /// Mutable access for movement and direct state setup.
    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    /// Seats of players still in the game, in seat order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| p.is_active())
            .map(|(id, _)| id)
    }

    /// `player` tries to buy the property at `position`.
    ///
    /// Returns true if the purchase went through.
    pub fn buy_property(&mut self, player: PlayerId, position: usize, rng: &mut GameRng) -> bool {
        match self.board.property_mut(position) {
            Some(property) => self.players[player].buy_property(property, rng),
            None => false,
        }
    }

    /// `payer` pays rent for the property at `position`.
    ///
    /// Nothing happens for unowned or self-owned properties. Otherwise the
    /// owner is credited in full before solvency is checked; a payer left
    /// with a negative balance goes bankrupt and false is returned.
    pub fn pay_rent(&mut self, payer: PlayerId, position: usize) -> bool {
        let Some(property) = self.board.property(position) else {
            return true;
        };
        let owner = match property.owner {
            Some(owner) if owner != payer => owner,
            _ => return true,
        };
        let rent = property.rent_value;

        let (payer_state, owner_state) = self.players.pair_mut(payer, owner);
        payer_state.balance -= rent;
        owner_state.receive_payment(rent);

        if payer_state.balance < 0 {
            self.go_bankrupt(payer);
            return false;
        }
        true
    }

    /// Remove `player` from the game and return its properties to the bank.
    ///
    /// The balance is left as is.
    pub fn go_bankrupt(&mut self, player: PlayerId) {
        let state = &mut self.players[player];
        state.active = false;

        for position in state.properties.drain(..) {
            if let Some(property) = self.board.property_mut(position) {
                property.release();
            }
        }
    }

    /// The sole remaining active player, if exactly one is left.
    #[must_use]
    pub fn check_win_condition(&self) -> Option<PlayerId> {
        let mut active = self.active_players();
        match (active.next(), active.next()) {
            (Some(winner), None) => Some(winner),
            _ => None,
        }
    }

    /// Active player with the most total assets; the lowest seat wins ties.
    #[must_use]
    pub fn richest_active_player(&self) -> Option<PlayerId> {
        self.active_players()
            .map(|id| (id, self.players[id].total_assets(&self.board)))
            .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
            .map(|(id, _)| id)
    }

    /// Sum of every player's balance.
    #[must_use]
    pub fn total_balance(&self) -> i64 {
        self.players.values().map(|p| p.balance()).sum()
    }
}
