use serde::{Deserialize, Serialize};

/// Player-facing status of a cell. `Visible` is one-way.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellStatus {
    #[default]
    Hidden,
    Visible,
    Marked,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub is_bomb: bool,
    pub status: CellStatus,
    /// Bombs in the 3×3 block around this cell, the cell itself included.
    pub adjacent_bomb_count: u8,
}

impl Cell {
    pub const fn with_status(self, status: CellStatus) -> Self {
        Self { status, ..self }
    }

    pub const fn is_visible(self) -> bool {
        matches!(self.status, CellStatus::Visible)
    }

    /// A cell the player still has to open to win.
    pub const fn is_hidden_safe(self) -> bool {
        !self.is_bomb && matches!(self.status, CellStatus::Hidden)
    }
}
