use thiserror::Error;

use crate::{CellCount, Coord, Coord2};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {rows}x{cols} board cannot hold {bombs} bombs and a safe cell")]
    InvalidConfiguration {
        rows: Coord,
        cols: Coord,
        bombs: CellCount,
    },
    #[error("Coordinates {coords:?} are outside the {size:?} board")]
    OutOfBounds { coords: Coord2, size: Coord2 },
}

pub type Result<T> = core::result::Result<T, GameError>;
