use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::{Coordinates, Field, Marker, Winner};

/// Wire shape of a sub-board: `rows` is a 3x3 array of markers or `null`.
#[derive(Serialize, Deserialize)]
struct RawSubBoard {
    rows: Vec<Vec<Option<Marker>>>,
    playable: bool,
    #[serde(default)]
    winner: Option<Winner>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(try_from = "RawSubBoard", into = "RawSubBoard")]
pub struct SubBoard {
    pub cells: Array2<Field>,
    pub playable: bool,
    pub winner: Option<Winner>,
}

impl Default for SubBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<RawSubBoard> for SubBoard {
    type Error = String;

    fn try_from(raw: RawSubBoard) -> Result<Self, Self::Error> {
        if raw.rows.len() != Self::SIZE.0 || raw.rows.iter().any(|row| row.len() != Self::SIZE.1)
        {
            return Err(format!(
                "expected {}x{} rows in sub-board, got {:?}",
                Self::SIZE.0,
                Self::SIZE.1,
                raw.rows.iter().map(Vec::len).collect::<Vec<_>>()
            ));
        }

        let fields: Vec<Field> = raw.rows.into_iter().flatten().map(Field::from).collect();
        let cells = Array2::from_shape_vec(Self::SIZE, fields).map_err(|e| e.to_string())?;

        Ok(Self {
            cells,
            playable: raw.playable,
            winner: raw.winner,
        })
    }
}

impl From<SubBoard> for RawSubBoard {
    fn from(sub_board: SubBoard) -> Self {
        let rows = sub_board
            .cells
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .map(|field| match field {
                        Field::Vacant => None,
                        Field::Occupied { marker } => Some(marker.clone()),
                    })
                    .collect()
            })
            .collect();
        RawSubBoard {
            rows,
            playable: sub_board.playable,
            winner: sub_board.winner,
        }
    }
}

impl SubBoard {
    pub const SIZE: Coordinates = (3, 3);

    /// An empty, playable sub-board.
    pub fn new() -> Self {
        Self {
            cells: Array2::from_elem((Self::SIZE.0, Self::SIZE.1), Field::Vacant),
            playable: true,
            winner: None,
        }
    }

    /// Cells in row-major order, indexed like the `cell` of a move.
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.cells.iter()
    }

    pub fn is_full(&self) -> bool {
        self.fields().all(|field| !field.is_vacant())
    }
}
