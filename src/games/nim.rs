//! Subtraction game over three heaps of 3, 5 and 7 items. Players
//! alternate removing any positive number of items from one heap; whoever
//! clears the last item wins. A first-mover win here (the heap sizes XOR
//! to a nonzero value), which makes it a compact fixture for checking
//! that backpropagation actually solves a game.

use crate::search::error::Error;
use crate::search::game::{Game, Move, Turn};
use crate::search::score::Score;

pub const HEAPS: [u8; 3] = [3, 5, 7];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NimPlayer {
    A,
    B,
}

impl NimPlayer {
    pub fn other(&self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

impl Turn for NimPlayer {}

impl std::fmt::Display for NimPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// remove `count` items from `heap`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Take {
    pub heap: usize,
    pub count: u8,
}

impl Move for Take {}

impl std::fmt::Display for Take {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "take {} from heap {}", self.count, self.heap)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nim {
    heaps: [u8; 3],
    turn: Option<NimPlayer>,
    winner: Option<NimPlayer>,
}

impl Game for Nim {
    type M = Take;
    type T = NimPlayer;
    type K = String;

    fn root() -> Self {
        Self {
            heaps: HEAPS,
            turn: Some(NimPlayer::A),
            winner: None,
        }
    }

    fn turn(&self) -> Option<NimPlayer> {
        self.turn
    }

    fn over(&self) -> bool {
        self.heaps == [0, 0, 0]
    }

    fn moves(&self) -> Vec<Take> {
        (0..self.heaps.len())
            .flat_map(|heap| (1..=self.heaps[heap]).map(move |count| Take { heap, count }))
            .collect()
    }

    fn apply(&self, m: Take) -> Result<Self, Error> {
        if m.heap >= self.heaps.len() || m.count == 0 || m.count > self.heaps[m.heap] {
            return Err(Error::IllegalMove(m.to_string()));
        }
        let mover = self.turn.ok_or_else(|| Error::IllegalMove(m.to_string()))?;
        let mut heaps = self.heaps;
        heaps[m.heap] -= m.count;
        if heaps == [0, 0, 0] {
            Ok(Self { heaps, turn: None, winner: Some(mover) })
        } else {
            Ok(Self { heaps, turn: Some(mover.other()), winner: None })
        }
    }

    /// heap fills plus whose move it is; the cleared board keys on the
    /// winner instead, since a finished game is a different position per
    /// outcome.
    fn key(&self) -> String {
        let board = format!("{}{}{}", self.heaps[0], self.heaps[1], self.heaps[2]);
        match (self.turn, self.winner) {
            (Some(turn), _) => format!("{}{}", board, turn),
            (None, Some(winner)) => format!("{}>{}", board, winner),
            (None, None) => format!("{}-", board),
        }
    }

    fn evaluate(&self) -> Score<NimPlayer> {
        match self.winner {
            Some(NimPlayer::A) => [(NimPlayer::A, 1.0), (NimPlayer::B, -1.0)].into_iter().collect(),
            Some(NimPlayer::B) => [(NimPlayer::A, -1.0), (NimPlayer::B, 1.0)].into_iter().collect(),
            None => [(NimPlayer::A, 0.0), (NimPlayer::B, 0.0)].into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Nim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bars = self
            .heaps
            .iter()
            .zip(HEAPS)
            .map(|(&fill, cap)| {
                let mut bar = "|".repeat(fill as usize);
                bar.push_str(&" ".repeat((cap - fill) as usize));
                bar
            })
            .collect::<Vec<_>>()
            .join("  ");
        match (self.turn, self.winner) {
            (Some(turn), _) => write!(f, "{} Move: {}", bars, turn),
            (_, Some(winner)) => write!(f, "{} Winner: {}", bars, winner),
            (None, None) => write!(f, "{} n/a", bars),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_offers_every_take() {
        assert_eq!(Nim::root().moves().len(), 3 + 5 + 7);
    }

    #[test]
    fn clearing_the_last_heap_wins() {
        let state = Nim {
            heaps: [0, 0, 2],
            turn: Some(NimPlayer::B),
            winner: None,
        };
        let done = state.apply(Take { heap: 2, count: 2 }).unwrap();
        assert!(done.over());
        assert_eq!(done.turn(), None);
        assert_eq!(done.moves(), vec![]);
        assert_eq!(done.evaluate().get(&NimPlayer::B), 1.0);
        assert_eq!(done.evaluate().get(&NimPlayer::A), -1.0);
    }

    #[test]
    fn overdrawing_a_heap_is_illegal() {
        let taken = Nim::root().apply(Take { heap: 0, count: 4 });
        assert!(matches!(taken, Err(Error::IllegalMove(_))));
    }

    #[test]
    fn finished_games_key_on_the_winner() {
        let a = Nim { heaps: [0, 0, 0], turn: None, winner: Some(NimPlayer::A) };
        let b = Nim { heaps: [0, 0, 0], turn: None, winner: Some(NimPlayer::B) };
        assert_ne!(a.key(), b.key());
    }
}
