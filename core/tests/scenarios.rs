use rand::{SeedableRng, rngs::SmallRng};
use sweeper_core::*;

fn hidden_safe_cells(session: &Session) -> Vec<Coord2> {
    session
        .board()
        .iter_cells()
        .filter(|(_, cell)| cell.is_hidden_safe())
        .map(|(coords, _)| coords)
        .collect()
}

#[test]
fn reference_first_reveal() {
    let session = Session::new(GameConfig::reference()).unwrap();

    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let next = session.apply(Action::Reveal((3, 4)), &mut rng).unwrap();

        assert_eq!(next.board().bomb_count(), 10);
        let cell = next.cell_at((3, 4)).unwrap();
        assert!(!cell.is_bomb);
        assert!(cell.is_visible());
        if !next.board().is_cleared() {
            assert_eq!(next.phase(), GamePhase::Playing);
        }
    }
}

#[test]
fn mark_before_start_leaves_session_unchanged() {
    let session = Session::new(GameConfig::reference()).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    let next = session.apply(Action::ToggleMark((0, 0)), &mut rng).unwrap();

    assert_eq!(next, session);
    assert_eq!(next.phase(), GamePhase::NotStarted);
    assert_eq!(next.board().bomb_count(), 0);
}

#[test]
fn bomb_reveal_is_terminal() {
    let board = Board::from_bomb_coords((4, 4), &[(1, 1), (2, 3)]).unwrap();
    let session = Session::from_board(board);
    let mut rng = SmallRng::seed_from_u64(0);

    let lost = session.apply(Action::Reveal((2, 3)), &mut rng).unwrap();
    assert_eq!(lost.phase(), GamePhase::Lost);

    for action in [
        Action::Reveal((0, 0)),
        Action::Reveal((3, 0)),
        Action::ToggleMark((0, 3)),
    ] {
        assert_eq!(lost.apply(action, &mut rng).unwrap(), lost);
    }
}

#[test]
fn won_session_is_terminal() {
    let session = Session::new(GameConfig::new(4, 4, 0).unwrap()).unwrap();
    let mut rng = SmallRng::seed_from_u64(0);

    let won = session.apply(Action::Reveal((1, 2)), &mut rng).unwrap();
    assert_eq!(won.phase(), GamePhase::Won);

    for action in [
        Action::Reveal((0, 0)),
        Action::Reveal((3, 3)),
        Action::ToggleMark((2, 2)),
    ] {
        assert_eq!(won.apply(action, &mut rng).unwrap(), won);
    }
}

#[test]
fn reset_after_win_starts_over() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut session = Session::new(GameConfig::new(5, 6, 4).unwrap()).unwrap();
    session = session.apply(Action::Reveal((2, 2)), &mut rng).unwrap();

    // open every remaining safe cell
    while let Some(&coords) = hidden_safe_cells(&session).first() {
        session = session.apply(Action::Reveal(coords), &mut rng).unwrap();
        assert_ne!(session.phase(), GamePhase::Lost);
    }
    assert_eq!(session.phase(), GamePhase::Won);

    let reset = session.apply(Action::Reset, &mut rng).unwrap();

    assert_eq!(reset.phase(), GamePhase::NotStarted);
    assert_eq!(reset.board().bomb_count(), 0);
    assert!(
        reset
            .board()
            .iter_cells()
            .all(|(_, cell)| cell.status == CellStatus::Hidden)
    );
}

#[test]
fn won_exactly_when_no_hidden_safe_cell_remains() {
    for seed in 0..30 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut session = Session::new(GameConfig::new(6, 6, 6).unwrap()).unwrap();
        session = session.apply(Action::Reveal((0, 0)), &mut rng).unwrap();

        loop {
            let remaining = hidden_safe_cells(&session);
            assert_eq!(session.phase() == GamePhase::Won, remaining.is_empty());
            let Some(&coords) = remaining.last() else {
                break;
            };
            session = session.apply(Action::Reveal(coords), &mut rng).unwrap();
        }
    }
}

#[test]
fn visible_cells_never_close() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut session = Session::new(GameConfig::new(6, 8, 8).unwrap()).unwrap();
    session = session.apply(Action::Reveal((5, 7)), &mut rng).unwrap();

    let moves = [
        Action::ToggleMark((0, 0)),
        Action::Reveal((0, 7)),
        Action::ToggleMark((5, 7)),
        Action::ToggleMark((0, 0)),
        Action::Reveal((3, 3)),
    ];
    for action in moves {
        let next = session.apply(action, &mut rng).unwrap();
        for (coords, cell) in session.board().iter_cells() {
            if cell.is_visible() {
                assert!(next.board()[coords].is_visible(), "{coords:?} closed by {action:?}");
            }
        }
        session = next;
    }
}

#[test]
fn cascade_reaches_whole_zero_region() {
    let board = Board::from_bomb_coords((6, 6), &[(5, 5), (0, 5)]).unwrap();
    let session = Session::from_board(board);
    let mut rng = SmallRng::seed_from_u64(0);

    let next = session.apply(Action::Reveal((3, 0)), &mut rng).unwrap();

    let board = next.board();
    for (coords, cell) in board.iter_cells() {
        if cell.is_bomb {
            assert!(!cell.is_visible());
            continue;
        }
        assert!(cell.is_visible(), "{coords:?} left hidden");
    }
    assert_eq!(next.phase(), GamePhase::Won);
}

#[test]
fn session_survives_serde_round_trip() {
    let mut rng = SmallRng::seed_from_u64(9);
    let session = Session::new(GameConfig::reference())
        .unwrap()
        .apply(Action::Reveal((0, 0)), &mut rng)
        .unwrap();

    let json = serde_json::to_string(&session).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, session);
}
