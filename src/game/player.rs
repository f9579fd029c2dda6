//! Player state and single-player operations.
//!
//! Operations that touch one player (and at most the property it stands on)
//! live here. Transfers between players and bankruptcy, which also touch the
//! board, live on [`Table`](super::Table).

use smallvec::SmallVec;

use crate::behavior::Behavior;
use crate::board::{Board, Property};
use crate::core::config::LAP_BONUS;
use crate::core::{GameRng, PlayerId};

/// Where a move ended and whether it passed the start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
    pub lap_completed: bool,
}

/// One automated player.
///
/// Once inactive, a player owns nothing and never becomes active again.
#[derive(Clone, Debug)]
pub struct Player {
    id: PlayerId,
    name: String,
    behavior: Behavior,
    pub(crate) balance: i64,
    position: usize,
    pub(crate) active: bool,
    /// Board positions of owned properties.
    pub(crate) properties: SmallVec<[usize; 8]>,
}

impl Player {
    /// Create an active player at the start of the board.
    ///
    /// The player is named after its behavior.
    pub fn new(id: PlayerId, behavior: Behavior, initial_balance: i64) -> Self {
        Self {
            id,
            name: behavior.label().to_string(),
            behavior,
            balance: initial_balance,
            position: 0,
            active: true,
            properties: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn behavior(&self) -> Behavior {
        self.behavior
    }

    /// Label of the purchasing behavior.
    #[must_use]
    pub fn behavior_label(&self) -> &'static str {
        self.behavior.label()
    }

    /// Current cash. Negative only for a bankrupt player.
    #[must_use]
    pub fn balance(&self) -> i64 {
        self.balance
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Board positions of owned properties, in purchase order.
    #[must_use]
    pub fn properties_owned(&self) -> &[usize] {
        &self.properties
    }

    /// Whether the balance covers the sale cost.
    #[must_use]
    pub fn can_buy(&self, property: &Property) -> bool {
        self.balance >= property.sale_cost
    }

    /// Affordability first, then the behavior's rule.
    pub fn should_buy(&self, property: &Property, rng: &mut GameRng) -> bool {
        self.can_buy(property) && self.behavior.strategy().should_buy(self, property, rng)
    }

    /// Buy `property` if it is unowned and the player wants it.
    ///
    /// Returns false and changes nothing otherwise.
    pub fn buy_property(&mut self, property: &mut Property, rng: &mut GameRng) -> bool {
        if property.is_owned() || !self.should_buy(property, rng) {
            return false;
        }

        self.balance -= property.sale_cost;
        property.buy(self.id);
        self.properties.push(property.position);
        true
    }

    /// Credit `amount` to the balance.
    pub fn receive_payment(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Advance `steps` cells on a ring of `board_size`.
    ///
    /// Wrapping past the start credits the lap bonus.
    ///
    /// # Panics
    ///
    /// Panics if `board_size` is zero.
    pub fn move_by(&mut self, steps: usize, board_size: usize) -> Move {
        assert!(board_size > 0, "board size must be non-zero");
        let from = self.position;
        self.position = (from + steps) % board_size;

        let lap_completed = self.position < from;
        if lap_completed {
            self.receive_payment(LAP_BONUS);
        }

        Move {
            from,
            to: self.position,
            lap_completed,
        }
    }

    /// Balance plus the sale cost of everything owned.
    #[must_use]
    pub fn total_assets(&self, board: &Board) -> i64 {
        let holdings: i64 = self
            .properties
            .iter()
            .filter_map(|&position| board.property(position))
            .map(|p| p.sale_cost)
            .sum();

        self.balance + holdings
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.active { "active" } else { "bankrupt" };
        write!(
            f,
            "{} ({}) - balance ${} - properties {} - {}",
            self.name,
            self.behavior,
            self.balance,
            self.properties.len(),
            status
        )
    }
}
