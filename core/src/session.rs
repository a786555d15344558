use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Playing
/// - NotStarted -> Won
/// - Playing -> Won
/// - Playing -> Lost
///
/// Any phase goes back to NotStarted on reset.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board not generated yet
    #[default]
    NotStarted,
    Playing,
    Won,
    Lost,
}

impl GamePhase {
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::NotStarted)
    }

    /// No reveal or mark is accepted anymore.
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One discrete player intent, already resolved by the input layer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    Reveal(Coord2),
    ToggleMark(Coord2),
    Reset,
}

/// Complete engine state at one point in time. Every action yields a new value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    config: GameConfig,
    board: Board,
    phase: GamePhase,
}

impl Session {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::fresh(config))
    }

    /// Resumes play on an already generated board.
    pub fn from_board(board: Board) -> Self {
        let (rows, cols) = board.size();
        let config = GameConfig::new_unchecked(rows, cols, board.bomb_count());
        Self {
            config,
            board,
            phase: GamePhase::Playing,
        }
    }

    fn fresh(config: GameConfig) -> Self {
        Self {
            config,
            board: Board::empty(config.size()),
            phase: GamePhase::NotStarted,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        self.board.cell_at(coords)
    }

    pub fn marked_count(&self) -> CellCount {
        self.board.marked_count()
    }

    /// How many bombs have not been marked yet, negative when over-marked.
    pub fn bombs_left(&self) -> isize {
        (self.config.bombs as isize) - (self.board.marked_count() as isize)
    }

    /// The bomb that ended the game, if it was lost.
    pub fn triggered_bomb(&self) -> Option<Coord2> {
        if self.phase != GamePhase::Lost {
            return None;
        }
        self.board
            .iter_cells()
            .find(|(_, cell)| cell.is_bomb && cell.is_visible())
            .map(|(coords, _)| coords)
    }

    pub fn apply<R: RandomSource + ?Sized>(&self, action: Action, rng: &mut R) -> Result<Self> {
        match action {
            Action::Reveal(coords) => self.reveal(coords, rng),
            Action::ToggleMark(coords) => self.toggle_mark(coords),
            Action::Reset => Ok(self.reset()),
        }
    }

    /// Reveals a cell, generating the board first if the game has not started.
    pub fn reveal<R: RandomSource + ?Sized>(&self, coords: Coord2, rng: &mut R) -> Result<Self> {
        let coords = self.board.validate_coords(coords)?;
        if self.phase.is_finished() {
            return Ok(self.clone());
        }

        // judged on the board as it was before this action
        let hit_bomb = self.board[coords].is_bomb;

        let generated;
        let working = if self.phase.is_started() {
            &self.board
        } else {
            generated = generate(self.config, coords, rng)?;
            &generated
        };

        let board = if working[coords].adjacent_bomb_count == 0 {
            reveal_cascade(working, coords)?
        } else {
            working.with_status(coords, CellStatus::Visible)?
        };

        let phase = if hit_bomb {
            GamePhase::Lost
        } else if board.is_cleared() {
            GamePhase::Won
        } else {
            GamePhase::Playing
        };
        if phase != self.phase {
            log::debug!("Phase {:?} -> {:?} after reveal at {:?}", self.phase, phase, coords);
        }

        Ok(Self {
            config: self.config,
            board,
            phase,
        })
    }

    /// Flips a cell between hidden and marked. Ignored before the first reveal,
    /// after the game ended, and on visible cells.
    pub fn toggle_mark(&self, coords: Coord2) -> Result<Self> {
        let coords = self.board.validate_coords(coords)?;
        if self.phase != GamePhase::Playing {
            return Ok(self.clone());
        }

        let status = match self.board[coords].status {
            CellStatus::Hidden => CellStatus::Marked,
            CellStatus::Marked => CellStatus::Hidden,
            CellStatus::Visible => return Ok(self.clone()),
        };

        Ok(Self {
            config: self.config,
            board: self.board.with_status(coords, status)?,
            phase: self.phase,
        })
    }

    /// Fresh, ungenerated session with the same dimensions and bomb count.
    pub fn reset(&self) -> Self {
        log::debug!("Session reset from {:?}", self.phase);
        Self::fresh(self.config)
    }
}
