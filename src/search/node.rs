use crate::search::data::Data;
use crate::search::game::Game;
use crate::search::score::Score;
use petgraph::Direction::{Incoming, Outgoing};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

/// A Node is a wrapper around a NodeIndex and a &Graph. because they are
/// thin wrappers around an index, they're cheap to Copy. holding reference
/// to the graph is useful for navigational methods.
#[derive(Debug)]
pub struct Node<'tree, G: Game> {
    index: NodeIndex,
    graph: &'tree StableDiGraph<Data<G>, G::M>,
}

impl<G: Game> Clone for Node<'_, G> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<G: Game> Copy for Node<'_, G> {}

impl<'tree, G: Game> Node<'tree, G> {
    pub fn from(index: NodeIndex, graph: &'tree StableDiGraph<Data<G>, G::M>) -> Self {
        Self { index, graph }
    }
    pub fn spawn(&self, index: NodeIndex) -> Node<'tree, G> {
        Self::from(index, self.graph)
    }
    pub fn index(&self) -> NodeIndex {
        self.index
    }
    pub fn data(&self) -> &'tree Data<G> {
        self.graph.node_weight(self.index).expect("valid node index")
    }
    pub fn game(&self) -> &'tree G {
        self.data().game()
    }
    pub fn score(&self) -> &'tree Score<G::T> {
        self.data().score()
    }
    pub fn expanded(&self) -> bool {
        self.data().expanded()
    }

    /// Navigational methods

    /// outgoing arcs as (move, successor) pairs. a vertex may carry
    /// parallel arcs to one successor under distinct moves.
    pub fn branches(&self) -> Vec<(G::M, Node<'tree, G>)> {
        self.graph
            .edges_directed(self.index, Outgoing)
            .map(|edge| (*edge.weight(), self.spawn(edge.target())))
            .collect()
    }
    pub fn children(&self) -> Vec<Node<'tree, G>> {
        self.graph
            .neighbors_directed(self.index, Outgoing)
            .map(|index| self.spawn(index))
            .collect()
    }
    /// distinct predecessors that reached this vertex via some move.
    /// used only to drive score cascades, never for reachability.
    pub fn parents(&self) -> Vec<Node<'tree, G>> {
        let mut indices = self
            .graph
            .neighbors_directed(self.index, Incoming)
            .collect::<Vec<_>>();
        indices.sort();
        indices.dedup();
        indices.into_iter().map(|index| self.spawn(index)).collect()
    }
    /// resolve a move along the recorded arcs.
    pub fn follow(&self, m: &G::M) -> Option<Node<'tree, G>> {
        self.graph
            .edges_directed(self.index, Outgoing)
            .find(|edge| edge.weight() == m)
            .map(|edge| self.spawn(edge.target()))
    }
}

impl<G: Game> std::fmt::Display for Node<'_, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "N{}", self.index.index())
    }
}
