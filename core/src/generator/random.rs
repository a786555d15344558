use super::*;

/// Places bombs uniformly at random over every cell except the safe one, using
/// rejection sampling on row-major indices.
#[derive(Debug)]
pub struct RandomBoardGenerator<'a, R: RandomSource + ?Sized> {
    rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> RandomBoardGenerator<'a, R> {
    pub fn new(rng: &'a mut R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource + ?Sized> BoardGenerator for RandomBoardGenerator<'_, R> {
    fn generate(self, config: GameConfig, safe: Coord2) -> Result<Board> {
        config.validate()?;

        let mut board = Board::empty(config.size());
        let safe = board.validate_coords(safe)?;

        let total_cells = config.total_cells();
        let safe_index = linear_index(safe, config.cols);
        let mut bombs_placed = 0;
        let mut rejected = 0usize;
        while bombs_placed < config.bombs {
            // keep a misbehaving source in range
            let index = self.rng.random_int(total_cells) % total_cells;
            let coords = from_linear_index(index, config.cols);
            if index == safe_index || board[coords].is_bomb {
                rejected += 1;
                continue;
            }
            board.set_bomb(coords);
            bombs_placed += 1;
        }

        board.set_status(safe, CellStatus::Visible);
        board.recount();

        log::debug!(
            "Generated {}x{} board with {} bombs around safe cell {:?} ({} draws rejected)",
            config.rows,
            config.cols,
            bombs_placed,
            safe,
            rejected
        );
        Ok(board)
    }
}

/// Generates a board for `config`, keeping `safe` free of bombs.
pub fn generate<R: RandomSource + ?Sized>(
    config: GameConfig,
    safe: Coord2,
    rng: &mut R,
) -> Result<Board> {
    RandomBoardGenerator::new(rng).generate(config, safe)
}
