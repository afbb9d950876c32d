//! 3x3 tic-tac-toe. Big enough to transpose (distinct move orders reach
//! one board), small enough to solve outright, with a scoring twist kept
//! from the classic treatment: a draw is worth -0.5 to both players, so a
//! player who can still win prefers fighting on over settling.

use crate::search::error::Error;
use crate::search::game::{Game, Move, Turn};
use crate::search::score::Score;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn other(&self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
    fn symbol(mark: Option<Mark>) -> char {
        match mark {
            Some(Mark::X) => 'X',
            Some(Mark::O) => 'O',
            None => ' ',
        }
    }
}

impl Turn for Mark {}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// place the active player's mark at column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Move for Cell {}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicTacToe {
    cells: [Option<Mark>; 9],
    turn: Option<Mark>,
}

impl TicTacToe {
    fn at(&self, x: usize, y: usize) -> Option<Mark> {
        self.cells[3 * x + y]
    }

    pub fn winner(&self) -> Option<Mark> {
        [Mark::X, Mark::O].into_iter().find(|&mark| self.won(mark))
    }

    fn won(&self, mark: Mark) -> bool {
        let lines = (0..3).any(|y| (0..3).all(|x| self.at(x, y) == Some(mark)))
            || (0..3).any(|x| (0..3).all(|y| self.at(x, y) == Some(mark)));
        let diagonals = (0..3).all(|b| self.at(b, b) == Some(mark))
            || (0..3).all(|b| self.at(b, 2 - b) == Some(mark));
        lines || diagonals
    }

    fn full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl Game for TicTacToe {
    type M = Cell;
    type T = Mark;
    type K = String;

    fn root() -> Self {
        Self {
            cells: [None; 9],
            turn: Some(Mark::X),
        }
    }

    fn turn(&self) -> Option<Mark> {
        self.turn
    }

    fn over(&self) -> bool {
        self.winner().is_some() || self.full()
    }

    fn moves(&self) -> Vec<Cell> {
        if self.over() {
            return vec![];
        }
        (0..3)
            .flat_map(|x| (0..3).map(move |y| Cell { x, y }))
            .filter(|&Cell { x, y }| self.at(x, y).is_none())
            .collect()
    }

    fn apply(&self, m: Cell) -> Result<Self, Error> {
        if m.x > 2 || m.y > 2 || self.at(m.x, m.y).is_some() || self.over() {
            return Err(Error::IllegalMove(m.to_string()));
        }
        let mover = self.turn.ok_or_else(|| Error::IllegalMove(m.to_string()))?;
        let mut cells = self.cells;
        cells[3 * m.x + m.y] = Some(mover);
        let placed = Self { cells, turn: None };
        if placed.over() {
            Ok(placed)
        } else {
            Ok(Self { cells, turn: Some(mover.other()) })
        }
    }

    /// nine symbols, column-major; the marks alone pin down whose move it
    /// is, so the board string is the whole identity.
    fn key(&self) -> String {
        self.cells.iter().map(|&mark| Mark::symbol(mark)).collect()
    }

    fn evaluate(&self) -> Score<Mark> {
        match self.winner() {
            Some(Mark::X) => [(Mark::X, 1.0), (Mark::O, -1.0)].into_iter().collect(),
            Some(Mark::O) => [(Mark::X, -1.0), (Mark::O, 1.0)].into_iter().collect(),
            None if self.full() => [(Mark::X, -0.5), (Mark::O, -0.5)].into_iter().collect(),
            None => [(Mark::X, 0.0), (Mark::O, 0.0)].into_iter().collect(),
        }
    }
}

impl std::fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..3 {
            writeln!(
                f,
                " {} | {} | {}",
                Mark::symbol(self.at(0, y)),
                Mark::symbol(self.at(1, y)),
                Mark::symbol(self.at(2, y))
            )?;
            if y < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        match (self.turn, self.winner()) {
            (Some(turn), _) => write!(f, "Move: {}", turn),
            (_, Some(winner)) => write!(f, "Winner: {}", winner),
            (None, None) => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played(moves: &[(usize, usize)]) -> TicTacToe {
        moves.iter().fold(TicTacToe::root(), |state, &(x, y)| {
            state.apply(Cell { x, y }).unwrap()
        })
    }

    #[test]
    fn marks_alternate_from_x() {
        let state = TicTacToe::root();
        assert_eq!(state.turn(), Some(Mark::X));
        assert_eq!(played(&[(0, 0)]).turn(), Some(Mark::O));
        assert_eq!(played(&[(0, 0), (1, 1)]).turn(), Some(Mark::X));
    }

    #[test]
    fn a_column_wins_the_game() {
        let state = played(&[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
        assert_eq!(state.winner(), Some(Mark::X));
        assert!(state.over());
        assert_eq!(state.turn(), None);
        assert_eq!(state.moves(), vec![]);
        assert_eq!(state.evaluate().get(&Mark::X), 1.0);
        assert_eq!(state.evaluate().get(&Mark::O), -1.0);
    }

    #[test]
    fn a_full_quiet_board_is_a_draw() {
        // X X O / O O X / X O X
        let state = played(&[
            (0, 0), (2, 0), (1, 0), (0, 1), (2, 1), (1, 1), (0, 2), (1, 2), (2, 2),
        ]);
        assert!(state.over());
        assert_eq!(state.winner(), None);
        assert_eq!(state.evaluate().get(&Mark::X), -0.5);
        assert_eq!(state.evaluate().get(&Mark::O), -0.5);
    }

    #[test]
    fn occupied_cells_are_illegal() {
        let state = played(&[(1, 1)]);
        assert!(matches!(state.apply(Cell { x: 1, y: 1 }), Err(Error::IllegalMove(_))));
    }

    #[test]
    fn keys_are_column_major_board_strings() {
        let state = played(&[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(state.key(), "X   O   X");
    }
}
