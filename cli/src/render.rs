use std::fmt;

use sweeper_core::{Cell, CellStatus, GamePhase, Session};

fn glyph(cell: Cell, phase: GamePhase) -> char {
    match cell.status {
        CellStatus::Visible if cell.is_bomb => '*',
        CellStatus::Visible => match cell.adjacent_bomb_count {
            0 => '.',
            count => char::from(b'0' + count),
        },
        CellStatus::Marked => 'F',
        CellStatus::Hidden if cell.is_bomb && phase == GamePhase::Lost => 'o',
        CellStatus::Hidden => '#',
    }
}

/// Plain-text view of a session, one line per board row.
pub struct SessionView<'a>(pub &'a Session);

impl fmt::Display for SessionView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let (_, cols) = session.size();
        let phase = session.phase();

        writeln!(f, "{:?} | bombs left: {}", phase, session.bombs_left())?;
        write!(f, "   ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for (row, cells) in session.board().rows().enumerate() {
            write!(f, "{:>3}", row)?;
            for &cell in cells.iter() {
                write!(f, "{:>3}", glyph(cell, phase))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
