#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use reveal::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod reveal;
mod session;
mod types;

/// Constants fixed for the lifetime of a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub bombs: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, bombs: CellCount) -> Self {
        Self { rows, cols, bombs }
    }

    pub fn new(rows: Coord, cols: Coord, bombs: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, bombs);
        config.validate()?;
        Ok(config)
    }

    /// 8×10 board with 10 bombs.
    pub const fn reference() -> Self {
        Self::new_unchecked(8, 10, 10)
    }

    /// Checks that the board is non-empty and leaves room for the safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 || self.bombs >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                rows: self.rows,
                cols: self.cols,
                bombs: self.bombs,
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.bombs)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::reference()
    }
}
