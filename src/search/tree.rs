use crate::search::data::Data;
use crate::search::error::Error;
use crate::search::game::Game;
use crate::search::node::Node;
use crate::search::score::Scorer;
use petgraph::Direction::Outgoing;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use std::collections::{HashMap, HashSet, VecDeque};

/// Outcome of handing a freshly produced state to the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// the key was unseen; a new vertex was created.
    Inserted,
    /// the key was already present; the candidate was discarded and the
    /// existing vertex gained the incoming arc instead.
    Merged,
}

/// The search graph: an arena of state vertices addressed by stable index,
/// deduplicated by canonical key, with a designated current vertex.
///
/// Vertices are shared: transpositions give a vertex many predecessors.
/// Arcs are labeled with the move that produces the successor, so move
/// resolution never goes back through the game rules. Removing a vertex
/// removes its arcs with it, which is what keeps predecessor references
/// trustworthy across pruning.
#[derive(Debug)]
pub struct Tree<G: Game> {
    graph: StableDiGraph<Data<G>, G::M>,
    index: HashMap<G::K, NodeIndex>,
    current: NodeIndex,
}

impl<G: Game> Default for Tree<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Game> Tree<G> {
    /// seed a tree with the game's root state as its current vertex.
    pub fn new() -> Self {
        let root = G::root();
        let key = root.key();
        let mut graph = StableDiGraph::default();
        let mut index = HashMap::new();
        let current = graph.add_node(Data::from(root));
        index.insert(key, current);
        Self { graph, index, current }
    }

    /// number of live vertices.
    pub fn n(&self) -> usize {
        self.graph.node_count()
    }
    pub fn graph(&self) -> &StableDiGraph<Data<G>, G::M> {
        &self.graph
    }
    /// get a Node handle by index
    pub fn at(&self, index: NodeIndex) -> Node<'_, G> {
        Node::from(index, &self.graph)
    }
    pub fn current(&self) -> Node<'_, G> {
        self.at(self.current)
    }
    /// get a Node handle by canonical key
    pub fn lookup(&self, key: &G::K) -> Option<Node<'_, G>> {
        self.index.get(key).map(|&index| self.at(index))
    }
    pub fn indices(&self) -> Vec<NodeIndex> {
        self.graph.node_indices().collect()
    }
    /// the frontier: every vertex not yet expanded.
    pub fn frontier(&self) -> Vec<NodeIndex> {
        self.graph
            .node_indices()
            .filter(|&index| !self.at(index).expanded())
            .collect()
    }

    /// insert a freshly produced successor of `parent`, or merge it into
    /// the vertex already holding its key. either way the parent gains an
    /// arc labeled with the producing move; on merge the candidate itself
    /// is discarded, which is sound because expansion is a pure function
    /// of state and key equality makes the vertices interchangeable.
    pub fn absorb(&mut self, parent: NodeIndex, m: G::M, state: G) -> (NodeIndex, Insertion) {
        let key = state.key();
        match self.index.get(&key) {
            Some(&existing) => {
                self.graph.add_edge(parent, existing, m);
                (existing, Insertion::Merged)
            }
            None => {
                let inserted = self.graph.add_node(Data::from(state));
                self.index.insert(key, inserted);
                self.graph.add_edge(parent, inserted, m);
                (inserted, Insertion::Inserted)
            }
        }
    }

    /// expand one vertex: produce a successor per legal move, wire each
    /// into the graph, mark the vertex expanded, and trigger its rescore.
    /// returns whether the expansion wired any successor at all; finished
    /// and already-expanded vertices report false without touching the
    /// game rules.
    pub fn unfold(&mut self, index: NodeIndex, scorer: &dyn Scorer<G>) -> Result<bool, Error> {
        let (expanded, over, game) = {
            let data = self.graph.node_weight(index).expect("live vertex");
            (data.expanded(), data.game().over(), data.game().clone())
        };
        if expanded {
            return Ok(false);
        }
        if over {
            self.graph.node_weight_mut(index).expect("live vertex").set_expanded();
            return Ok(false);
        }
        let moves = game.moves();
        let (mut merged, mut inserted) = (0, 0);
        for m in moves.iter().copied() {
            let successor = game.apply(m)?;
            match self.absorb(index, m, successor).1 {
                Insertion::Merged => merged += 1,
                Insertion::Inserted => inserted += 1,
            }
        }
        self.graph.node_weight_mut(index).expect("live vertex").set_expanded();
        if moves.is_empty() {
            Ok(false)
        } else {
            log::trace!("unfolded {}: {} inserted, {} merged", self.at(index), inserted, merged);
            self.rescore(index, scorer);
            Ok(true)
        }
    }

    /// backpropagation cascade. recompute the score of `start` from its
    /// successors; whenever a vertex's score actually changes, every
    /// predecessor is enqueued in turn. pending vertices are deduplicated,
    /// but a vertex dirtied again after it was processed re-enters the
    /// queue: an ancestor can sit at the end of arc paths of unequal
    /// length, so its first recomputation may read inputs that settle
    /// later. on the acyclic graphs the adapter contract promises this
    /// settles after at most height-many visits per vertex; the visit cap
    /// only matters if a broken adapter smuggles in a cycle, turning an
    /// endless cascade into a truncated one.
    pub fn rescore(&mut self, start: NodeIndex, scorer: &dyn Scorer<G>) {
        let cap = self.n();
        let mut visits: HashMap<NodeIndex, usize> = HashMap::new();
        let mut queue = VecDeque::from([start]);
        let mut queued = HashSet::from([start]);
        while let Some(index) = queue.pop_front() {
            queued.remove(&index);
            let spins = visits.entry(index).or_insert(0);
            if *spins >= cap {
                continue;
            }
            *spins += 1;
            let (turn, before, successors) = {
                let node = self.at(index);
                (
                    node.game().turn(),
                    node.score().clone(),
                    node.children().iter().map(|child| child.score().clone()).collect::<Vec<_>>(),
                )
            };
            if successors.is_empty() {
                continue;
            }
            let after = scorer.revalue(turn, &before, &successors);
            if after == before {
                continue;
            }
            self.graph.node_weight_mut(index).expect("live vertex").set_score(after);
            for parent in self.at(index).parents().iter().map(Node::index).collect::<Vec<_>>() {
                if queued.insert(parent) {
                    queue.push_back(parent);
                }
            }
        }
    }

    /// commit a move: advance the current pointer along the matching arc.
    /// an unexpanded current vertex is unfolded first, so a driver may
    /// commit moves without ever growing the tree explicitly. fails with
    /// [`Error::IllegalMove`] for a move the rules reject; a legal move
    /// with no recorded arc means the game broke its determinism contract
    /// and fails with [`Error::UnknownMove`].
    pub fn commit(&mut self, m: G::M, scorer: &dyn Scorer<G>) -> Result<(), Error> {
        if !self.current().expanded() {
            self.unfold(self.current, scorer)?;
        }
        match self.current().follow(&m).map(|node| node.index()) {
            Some(next) => {
                self.current = next;
                Ok(())
            }
            None => {
                if self.current().game().moves().contains(&m) {
                    Err(Error::UnknownMove(m.to_string()))
                } else {
                    Err(Error::IllegalMove(m.to_string()))
                }
            }
        }
    }

    /// successor-arc closure of `from`. predecessor arcs play no part:
    /// once a move commits past a vertex, its other ancestors are gone
    /// from the reachable set by definition.
    pub fn reachable(&self, from: NodeIndex) -> HashSet<NodeIndex> {
        let mut closure = HashSet::from([from]);
        let mut frontier = VecDeque::from([from]);
        while let Some(index) = frontier.pop_front() {
            for next in self.graph.neighbors_directed(index, Outgoing) {
                if closure.insert(next) {
                    frontier.push_back(next);
                }
            }
        }
        closure
    }

    /// drop a vertex and all its arcs from the arena and the key index.
    pub fn remove(&mut self, index: NodeIndex) {
        if let Some(data) = self.graph.remove_node(index) {
            self.index.remove(&data.game().key());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Cell, TicTacToe};
    use crate::search::expand::{Expander, ForwardSweep};
    use crate::search::score::Minimax;

    #[test]
    fn transpositions_share_one_vertex() {
        let mut tree = Tree::<TicTacToe>::new();
        ForwardSweep { depth: 3 }.grow(&mut tree, &Minimax).unwrap();
        // X(0,0) O(1,1) X(2,2) and X(2,2) O(1,1) X(0,0) converge here
        let node = tree.lookup(&"X   O   X".to_string()).expect("transposed vertex");
        assert_eq!(node.parents().len(), 2);
    }

    #[test]
    fn commit_expands_implicitly() {
        let mut tree = Tree::<TicTacToe>::new();
        assert_eq!(tree.n(), 1);
        tree.commit(Cell { x: 0, y: 0 }, &Minimax).unwrap();
        assert_eq!(tree.n(), 10);
    }

    #[test]
    fn commit_rejects_illegal_moves() {
        let mut tree = Tree::<TicTacToe>::new();
        tree.commit(Cell { x: 0, y: 0 }, &Minimax).unwrap();
        let replay = tree.commit(Cell { x: 0, y: 0 }, &Minimax);
        assert!(matches!(replay, Err(Error::IllegalMove(_))));
    }

    #[test]
    fn search_graph_is_acyclic() {
        let mut tree = Tree::<TicTacToe>::new();
        ForwardSweep { depth: 3 }.grow(&mut tree, &Minimax).unwrap();
        assert!(!petgraph::algo::is_cyclic_directed(tree.graph()));
    }
}
