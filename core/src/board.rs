use core::ops::Index;

use ndarray::{Array2, ArrayView1, ArrayView2, s};
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of cells. Operations that change a cell return a new board.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// All cells hidden, no bombs.
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::from_shape_fn(size.to_nd_index(), |_| Cell::default()),
        }
    }

    /// Builds a fully hidden board with bombs on `bomb_coords` and adjacency
    /// counts computed.
    pub fn from_bomb_coords(size: Coord2, bomb_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size);
        for &coords in bomb_coords {
            let coords = board.validate_coords(coords)?;
            board.set_bomb(coords);
        }
        board.recount();
        Ok(board)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds { coords, size })
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// The 3×3 sub-grid centered on `coords`, clipped to the board.
    pub fn neighborhood(&self, coords: Coord2) -> Result<ArrayView2<'_, Cell>> {
        let coords = self.validate_coords(coords)?;
        Ok(self.neighborhood_of(coords))
    }

    /// Bombs in the neighborhood of `coords`, counting the cell itself.
    pub fn adjacent_bomb_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.bombs_around(coords))
    }

    pub fn iter_neighborhood(&self, coords: Coord2) -> NeighborhoodIter {
        self.cells.iter_neighborhood(coords)
    }

    /// Copy of this board with a single cell's status replaced.
    pub fn with_status(&self, coords: Coord2, status: CellStatus) -> Result<Self> {
        let coords = self.validate_coords(coords)?;
        let mut board = self.clone();
        board.set_status(coords, status);
        Ok(board)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    pub fn bomb_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_bomb)
    }

    pub fn visible_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_visible())
    }

    pub fn marked_count(&self) -> CellCount {
        self.count_where(|cell| cell.status == CellStatus::Marked)
    }

    pub fn hidden_safe_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_hidden_safe())
    }

    /// No safe cell is left hidden. Bombs may still be hidden or marked.
    pub fn is_cleared(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_hidden_safe())
    }

    pub(crate) fn set_status(&mut self, coords: Coord2, status: CellStatus) {
        let cell = &mut self.cells[coords.to_nd_index()];
        *cell = cell.with_status(status);
    }

    pub(crate) fn set_bomb(&mut self, coords: Coord2) {
        self.cells[coords.to_nd_index()].is_bomb = true;
    }

    /// Recomputes every adjacency count from the current bomb layout.
    pub(crate) fn recount(&mut self) {
        let counts = Array2::from_shape_fn(self.cells.dim(), |(row, col)| {
            self.bombs_around((row as Coord, col as Coord))
        });
        ndarray::Zip::from(&mut self.cells)
            .and(&counts)
            .for_each(|cell, &count| cell.adjacent_bomb_count = count);
    }

    // `coords` must already be validated
    fn neighborhood_of(&self, (row, col): Coord2) -> ArrayView2<'_, Cell> {
        let (rows, cols) = self.size();
        let row_range = row.saturating_sub(1) as usize..=row.saturating_add(1).min(rows - 1) as usize;
        let col_range = col.saturating_sub(1) as usize..=col.saturating_add(1).min(cols - 1) as usize;
        self.cells.slice(s![row_range, col_range])
    }

    fn bombs_around(&self, coords: Coord2) -> u8 {
        self.neighborhood_of(coords)
            .iter()
            .filter(|cell| cell.is_bomb)
            .count() as u8
    }

    fn count_where(&self, predicate: impl Fn(&Cell) -> bool) -> CellCount {
        self.cells.iter().filter(|cell| predicate(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}
