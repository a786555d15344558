use alloc::collections::{BTreeSet, VecDeque};

use crate::*;

/// Opens the connected zero-count region around `seed`, plus its border.
///
/// Every cell in the 3×3 block of a visited cell becomes visible, and each
/// zero-count neighbor is queued for a visit at most once. Callers must not
/// seed the cascade on a bomb; a bomb reveal is a single-cell status change.
pub fn reveal_cascade(board: &Board, seed: Coord2) -> Result<Board> {
    let seed = board.validate_coords(seed)?;
    let mut next = board.clone();

    let mut scheduled = BTreeSet::from([seed]);
    let mut to_visit = VecDeque::from([seed]);
    let mut opened = 0usize;

    while let Some(visit_coords) = to_visit.pop_front() {
        for pos in next.iter_neighborhood(visit_coords) {
            let cell = next[pos];
            if !cell.is_visible() {
                next.set_status(pos, CellStatus::Visible);
                opened += 1;
                log::trace!(
                    "Cascade opened cell at {:?}, bomb count: {}",
                    pos,
                    cell.adjacent_bomb_count
                );
            }

            // if this is also zero we visit its neighborhood later
            if cell.adjacent_bomb_count == 0 && pos != visit_coords && scheduled.insert(pos) {
                to_visit.push_back(pos);
            }
        }
    }

    log::debug!(
        "Cascade from {:?} opened {} cells over {} visits",
        seed,
        opened,
        scheduled.len()
    );
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord2, bombs: &[Coord2]) -> Board {
        Board::from_bomb_coords(size, bombs).unwrap()
    }

    #[test]
    fn opens_zero_region_and_its_border() {
        // . . . .
        // . . 1 1
        // . . 1 *
        let board = board((3, 4), &[(2, 3)]);

        let opened = reveal_cascade(&board, (0, 0)).unwrap();

        for (coords, cell) in opened.iter_cells() {
            assert_eq!(cell.is_visible(), coords != (2, 3), "at {coords:?}");
        }
    }

    #[test]
    fn border_cells_do_not_propagate() {
        // . 1 * 1 .
        // . 1 1 1 .
        // . . . . .
        let board = board((3, 5), &[(0, 2)]);

        let opened = reveal_cascade(&board, (2, 0)).unwrap();

        assert!(opened[(0, 1)].is_visible());
        assert!(!opened[(0, 2)].is_visible());
        assert!(opened[(0, 4)].is_visible());
        assert_eq!(opened.hidden_safe_count(), 0);
    }

    #[test]
    fn region_cut_off_by_bombs_stays_hidden() {
        // . 2 * 2 .
        // . 3 * 3 .
        // . 2 * 2 .
        let board = board((3, 5), &[(0, 2), (1, 2), (2, 2)]);

        let opened = reveal_cascade(&board, (1, 0)).unwrap();

        for row in 0..3 {
            assert!(opened[(row, 0)].is_visible());
            assert!(opened[(row, 1)].is_visible());
            assert!(!opened[(row, 2)].is_visible());
            assert!(!opened[(row, 3)].is_visible());
            assert!(!opened[(row, 4)].is_visible());
        }
    }

    #[test]
    fn never_opens_bombs_as_side_effect() {
        let bombs = [(0, 4), (3, 1), (5, 5), (6, 0)];
        let board = board((7, 7), &bombs);

        let opened = reveal_cascade(&board, (0, 0)).unwrap();

        for bomb in bombs {
            assert!(!opened[bomb].is_visible(), "bomb at {bomb:?} opened");
        }
    }

    #[test]
    fn opens_marked_cells_inside_region() {
        let board = board((2, 3), &[])
            .with_status((1, 2), CellStatus::Marked)
            .unwrap();

        let opened = reveal_cascade(&board, (0, 0)).unwrap();

        assert_eq!(opened.visible_count(), 6);
    }

    #[test]
    fn input_board_is_not_modified() {
        let board = board((4, 4), &[(3, 3)]);
        let snapshot = board.clone();

        let _ = reveal_cascade(&board, (0, 0)).unwrap();

        assert_eq!(board, snapshot);
    }

    #[test]
    fn rejects_seed_out_of_bounds() {
        let board = board((2, 2), &[]);

        assert!(matches!(
            reveal_cascade(&board, (0, 2)),
            Err(GameError::OutOfBounds { .. })
        ));
    }
}
