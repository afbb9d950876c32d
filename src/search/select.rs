use crate::Utility;
use crate::search::error::Error;
use crate::search::game::Game;
use crate::search::node::Node;
use rand::seq::IndexedRandom;

/// move choice over an expanded vertex. every policy reads the recorded
/// arcs, never the game rules, so calling one on a vertex with no arcs
/// (unexpanded, or finished) is a caller ordering error.
pub trait Selector<G: Game> {
    fn select(&self, node: Node<'_, G>) -> Result<G::M, Error>;
}

/// Highest successor score for the active player, ties broken uniformly
/// at random so repeated games don't replay one line forever.
pub struct Greedy;

impl<G: Game> Selector<G> for Greedy {
    fn select(&self, node: Node<'_, G>) -> Result<G::M, Error> {
        let turn = node.game().turn().ok_or(Error::NotExpandedYet)?;
        let options = node
            .branches()
            .into_iter()
            .map(|(m, successor)| (m, successor.score().get(&turn)))
            .collect::<Vec<_>>();
        let best = options
            .iter()
            .map(|(_, value)| *value)
            .fold(Utility::NEG_INFINITY, Utility::max);
        options
            .iter()
            .filter(|(_, value)| *value == best)
            .map(|(m, _)| *m)
            .collect::<Vec<_>>()
            .choose(&mut rand::rng())
            .copied()
            .ok_or(Error::NotExpandedYet)
    }
}

/// Smallest move under the move type's ordering. Exists for determinism:
/// drivers and tests that must replay identically use this.
pub struct First;

impl<G: Game> Selector<G> for First {
    fn select(&self, node: Node<'_, G>) -> Result<G::M, Error> {
        node.branches()
            .into_iter()
            .map(|(m, _)| m)
            .min()
            .ok_or(Error::NotExpandedYet)
    }
}

/// Uniformly random over the recorded moves, scores ignored.
pub struct Uniform;

impl<G: Game> Selector<G> for Uniform {
    fn select(&self, node: Node<'_, G>) -> Result<G::M, Error> {
        node.branches()
            .into_iter()
            .map(|(m, _)| m)
            .collect::<Vec<_>>()
            .choose(&mut rand::rng())
            .copied()
            .ok_or(Error::NotExpandedYet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nim::Nim;
    use crate::search::expand::{Expander, Full};
    use crate::search::score::Minimax;
    use crate::search::tree::Tree;

    #[test]
    fn greedy_never_concedes_value() {
        let mut tree = Tree::<Nim>::new();
        Full.grow(&mut tree, &Minimax).unwrap();
        let root = tree.current();
        let turn = root.game().turn().unwrap();
        let best = root
            .branches()
            .into_iter()
            .map(|(_, successor)| successor.score().get(&turn))
            .fold(f32::NEG_INFINITY, f32::max);
        for _ in 0..50 {
            let m = Greedy.select(root).unwrap();
            let value = root.follow(&m).unwrap().score().get(&turn);
            assert_eq!(value, best);
        }
    }

    #[test]
    fn selection_requires_expansion() {
        let tree = Tree::<Nim>::new();
        assert_eq!(Greedy.select(tree.current()), Err(Error::NotExpandedYet));
        assert_eq!(First.select(tree.current()), Err(Error::NotExpandedYet));
        assert_eq!(Uniform.select(tree.current()), Err(Error::NotExpandedYet));
    }
}
