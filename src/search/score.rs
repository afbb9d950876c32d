use crate::Utility;
use crate::search::game::{Game, Turn};
use std::collections::BTreeMap;

/// Per-player utility of one vertex. Initialized from the game's static
/// evaluator at vertex creation and replaced wholesale whenever the
/// vertex's successor set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Score<T: Turn>(BTreeMap<T, Utility>);

impl<T: Turn> Score<T> {
    pub fn get(&self, player: &T) -> Utility {
        self.0.get(player).copied().unwrap_or_default()
    }
    pub fn insert(&mut self, player: T, value: Utility) {
        self.0.insert(player, value);
    }
    pub fn players(&self) -> impl Iterator<Item = &T> {
        self.0.keys()
    }
}

impl<T: Turn> Default for Score<T> {
    fn default() -> Self {
        Self(BTreeMap::new())
    }
}

impl<T: Turn> FromIterator<(T, Utility)> for Score<T> {
    fn from_iter<I: IntoIterator<Item = (T, Utility)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Turn> std::fmt::Display for Score<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut sep = "";
        for (player, value) in &self.0 {
            write!(f, "{}{}: {}", sep, player, value)?;
            sep = ", ";
        }
        Ok(())
    }
}

/// how a vertex's score follows from its successors' scores.
/// the engine invokes this only for vertices that have successors;
/// leaves keep their static evaluation.
pub trait Scorer<G: Game> {
    fn revalue(&self, turn: Option<G::T>, score: &Score<G::T>, successors: &[Score<G::T>]) -> Score<G::T>;
}

/// Classic minimax: the active player picks the successor best for them,
/// every other player assumes the worst. Applied per player so the same
/// rule covers games with more than two players.
pub struct Minimax;

impl<G: Game> Scorer<G> for Minimax {
    fn revalue(&self, turn: Option<G::T>, score: &Score<G::T>, successors: &[Score<G::T>]) -> Score<G::T> {
        if successors.is_empty() {
            return score.clone();
        }
        let mut revalued = Score::default();
        for player in score.players() {
            let values = successors.iter().map(|s| s.get(player));
            let value = if turn == Some(*player) {
                values.fold(Utility::NEG_INFINITY, Utility::max)
            } else {
                values.fold(Utility::INFINITY, Utility::min)
            };
            revalued.insert(*player, value);
        }
        revalued
    }
}
