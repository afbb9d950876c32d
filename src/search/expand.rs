use crate::search::error::Error;
use crate::search::game::Game;
use crate::search::score::Scorer;
use crate::search::tree::Tree;
use std::collections::HashSet;
use std::time::{Duration, Instant};

/// growth policy: decide which frontier vertices to expand and when to
/// stop. strategies compose whole [`OneStep`] passes and are cooperative,
/// so budget checks happen between passes, never inside one.
pub trait Expander<G: Game> {
    /// grow the tree; report whether anything changed.
    fn grow(&self, tree: &mut Tree<G>, scorer: &dyn Scorer<G>) -> Result<bool, Error>;
}

/// A single pass: expand every vertex that was unexpanded when the pass
/// started. The atomic unit every other strategy repeats.
pub struct OneStep;

impl<G: Game> Expander<G> for OneStep {
    fn grow(&self, tree: &mut Tree<G>, scorer: &dyn Scorer<G>) -> Result<bool, Error> {
        let frontier = tree.frontier();
        log::debug!("expansion pass: {} frontier, {} vertices", frontier.len(), tree.n());
        let mut changed = false;
        for index in frontier {
            changed |= tree.unfold(index, scorer)?;
        }
        Ok(changed)
    }
}

/// Repeat passes until no unexpanded vertex remains anywhere: the whole
/// reachable game graph gets materialized. Terminates exactly when the
/// game is finite.
pub struct Full;

impl<G: Game> Expander<G> for Full {
    fn grow(&self, tree: &mut Tree<G>, scorer: &dyn Scorer<G>) -> Result<bool, Error> {
        let mut changed = false;
        while !tree.frontier().is_empty() {
            changed |= OneStep.grow(tree, scorer)?;
        }
        Ok(changed)
    }
}

/// Repeat passes until the vertex budget or the wall-clock budget is
/// spent, or a pass stops making progress. A budget of zero leaves that
/// dimension unbounded. Budgets are polled between passes only, so the
/// overshoot is at most one pass's worth of growth.
pub struct Bounded {
    pub nodes: usize,
    pub time: Duration,
}

impl<G: Game> Expander<G> for Bounded {
    fn grow(&self, tree: &mut Tree<G>, scorer: &dyn Scorer<G>) -> Result<bool, Error> {
        let start = Instant::now();
        let mut changed = false;
        loop {
            if self.nodes > 0 && tree.n() >= self.nodes {
                log::debug!("vertex budget reached: {} of {}", tree.n(), self.nodes);
                break;
            }
            if !self.time.is_zero() && start.elapsed() >= self.time {
                log::debug!("time budget reached after {:?}", start.elapsed());
                break;
            }
            if !OneStep.grow(tree, scorer)? {
                break;
            }
            changed = true;
        }
        Ok(changed)
    }
}

/// Depth-bounded sweep from the current vertex: expand it, step to its
/// successors, and repeat for `depth` layers, stopping early once a layer
/// comes up empty. Unlike [`Bounded`] this guarantees a shape (a depth-
/// limited horizon) instead of a size, which is the right trade when a
/// static heuristic covers interior vertices and full expansion is out of
/// reach.
pub struct ForwardSweep {
    pub depth: usize,
}

impl<G: Game> Expander<G> for ForwardSweep {
    fn grow(&self, tree: &mut Tree<G>, scorer: &dyn Scorer<G>) -> Result<bool, Error> {
        let mut changed = false;
        let mut layer = vec![tree.current().index()];
        for hop in 0..self.depth {
            if layer.is_empty() {
                break;
            }
            log::debug!("sweep layer {}: {} vertices", hop, layer.len());
            for index in layer.iter().copied() {
                changed |= tree.unfold(index, scorer)?;
            }
            let mut next = HashSet::new();
            layer = layer
                .iter()
                .flat_map(|&index| tree.at(index).children())
                .map(|child| child.index())
                .filter(|&index| next.insert(index))
                .collect();
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nim::Nim;
    use crate::games::tictactoe::TicTacToe;
    use crate::search::score::Minimax;

    // heaps of 3, 5 and 7 have 4, 6 and 8 fill states respectively, and
    // all but a few of those boards are reachable with either player to
    // move. the exceptions: the starting board, the seven boards missing
    // exactly one item from a subset of heaps (their move parity is
    // forced), and the cleared board, which splits into one vertex per
    // possible winner.
    const NIM_STATES: usize = (4 * 6 * 8) * 2 - (1 + 7);

    #[test]
    fn full_expansion_terminates_and_counts() {
        let mut tree = Tree::<Nim>::new();
        assert_eq!(tree.n(), 1);
        Full.grow(&mut tree, &Minimax).unwrap();
        assert_eq!(tree.n(), NIM_STATES);
        assert!(tree.frontier().is_empty());
    }

    #[test]
    fn expansion_is_idempotent() {
        let mut tree = Tree::<Nim>::new();
        Full.grow(&mut tree, &Minimax).unwrap();
        let size = tree.n();
        assert!(!OneStep.grow(&mut tree, &Minimax).unwrap());
        assert_eq!(tree.n(), size);
    }

    #[test]
    fn bounded_respects_vertex_budget() {
        let limit = 50;
        let mut tree = Tree::<Nim>::new();
        Bounded { nodes: limit, time: Duration::ZERO }.grow(&mut tree, &Minimax).unwrap();
        // overshoot is bounded by the one pass that crossed the line
        assert!(tree.n() >= limit);
        assert!(tree.n() < NIM_STATES);
    }

    #[test]
    fn bounded_runs_to_exhaustion_without_budgets() {
        let mut tree = Tree::<Nim>::new();
        Bounded { nodes: 0, time: Duration::ZERO }.grow(&mut tree, &Minimax).unwrap();
        assert_eq!(tree.n(), NIM_STATES);
    }

    #[test]
    fn sweep_layers_match_hand_counts() {
        let mut tree = Tree::<TicTacToe>::new();
        ForwardSweep { depth: 1 }.grow(&mut tree, &Minimax).unwrap();
        assert_eq!(tree.n(), 1 + 9);
        let mut tree = Tree::<TicTacToe>::new();
        ForwardSweep { depth: 2 }.grow(&mut tree, &Minimax).unwrap();
        assert_eq!(tree.n(), 1 + 9 + 9 * 8);
    }

    #[test]
    fn sweep_stops_on_exhausted_horizon() {
        let mut tree = Tree::<Nim>::new();
        Full.grow(&mut tree, &Minimax).unwrap();
        assert!(!ForwardSweep { depth: 3 }.grow(&mut tree, &Minimax).unwrap());
    }
}
