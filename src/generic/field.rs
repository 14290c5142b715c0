use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The symbol a player claims cells with, as sent by the server (`"X"`, `"O"`, ...).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Marker(pub String);

impl Marker {
    pub fn new(marker: impl Into<String>) -> Self {
        Self(marker.into())
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Vacant,
    Occupied { marker: Marker },
}

impl From<Option<Marker>> for Field {
    fn from(cell: Option<Marker>) -> Self {
        match cell {
            Some(marker) => Field::Occupied { marker },
            None => Field::Vacant,
        }
    }
}

impl Field {
    pub fn is_vacant(&self) -> bool {
        matches!(self, Field::Vacant)
    }

    pub fn is_owned_by(&self, player: &Marker) -> bool {
        matches!(self, Field::Occupied { marker } if marker == player)
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Vacant => write!(f, "-"),
            Field::Occupied { marker } => write!(f, "{}", marker),
        }
    }
}
