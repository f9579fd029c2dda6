//! A single purchasable board cell.

use serde::Serialize;

use crate::core::PlayerId;

/// A board cell with a purchase cost, a rent, and an ownership slot.
///
/// `owner` is a seat handle, not a reference. Property performs no validation
/// on purchase: callers check availability and affordability first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Property {
    /// Position on the board (also the property's identity).
    pub position: usize,

    /// Display name.
    pub name: &'static str,

    /// Price paid to the bank when buying.
    pub sale_cost: i64,

    /// Amount other players pay when landing here.
    pub rent_value: i64,

    /// Current owner, if any.
    pub owner: Option<PlayerId>,
}

impl Property {
    /// Create an unowned property.
    #[must_use]
    pub const fn new(position: usize, name: &'static str, sale_cost: i64, rent_value: i64) -> Self {
        Self {
            position,
            name,
            sale_cost,
            rent_value,
            owner: None,
        }
    }

    /// Whether any player owns this property.
    #[must_use]
    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    /// Whether `player` owns this property.
    #[must_use]
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Assign the property to `player` unconditionally.
    pub fn buy(&mut self, player: PlayerId) {
        self.owner = Some(player);
    }

    /// Return the property to the bank.
    pub fn release(&mut self) {
        self.owner = None;
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - cost ${} - rent ${} - ",
            self.name, self.sale_cost, self.rent_value
        )?;
        match self.owner {
            Some(owner) => write!(f, "owner {}", owner),
            None => write!(f, "available"),
        }
    }
}
