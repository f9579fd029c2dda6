//! The fixed game board.

use serde::Serialize;

use crate::core::PlayerId;

use super::property::Property;

/// Number of properties on the board.
pub const BOARD_SIZE: usize = 20;

/// `(name, sale cost, rent)` for each board position, in order.
const STANDARD_LAYOUT: [(&str, i64, i64); BOARD_SIZE] = [
    ("Avenida Atlântica", 100, 10),
    ("Rua Augusta", 80, 8),
    ("Avenida Paulista", 120, 12),
    ("Copacabana", 150, 15),
    ("Ipanema", 140, 14),
    ("Leblon", 160, 16),
    ("Jardins", 130, 13),
    ("Morumbi", 110, 11),
    ("Brooklin", 90, 9),
    ("Vila Madalena", 95, 9),
    ("Pinheiros", 105, 10),
    ("Itaim Bibi", 125, 12),
    ("Moema", 115, 11),
    ("Perdizes", 85, 8),
    ("Higienópolis", 135, 13),
    ("Barra da Tijuca", 145, 14),
    ("Botafogo", 75, 7),
    ("Flamengo", 70, 7),
    ("Tijuca", 65, 6),
    ("Centro", 60, 6),
];

/// Ordered ring of properties. Only ownership changes after construction.
#[derive(Clone, Debug, Serialize)]
pub struct Board {
    properties: Vec<Property>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Build the standard 20-property board, everything unowned.
    #[must_use]
    pub fn new() -> Self {
        let properties = STANDARD_LAYOUT
            .iter()
            .enumerate()
            .map(|(position, &(name, cost, rent))| Property::new(position, name, cost, rent))
            .collect();

        Self { properties }
    }

    /// Number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Always false for a constructed board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Bounds-checked lookup.
    #[must_use]
    pub fn property(&self, position: usize) -> Option<&Property> {
        self.properties.get(position)
    }

    /// Bounds-checked mutable lookup.
    pub fn property_mut(&mut self, position: usize) -> Option<&mut Property> {
        self.properties.get_mut(position)
    }

    /// All properties in board order.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Properties nobody owns right now.
    #[must_use]
    pub fn available_properties(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| !p.is_owned()).collect()
    }

    /// Properties currently owned by `player`.
    #[must_use]
    pub fn owned_properties(&self, player: PlayerId) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.is_owned_by(player)).collect()
    }
}
