use crate::search::expand::{Bounded, Expander, ForwardSweep, Full, OneStep};
use crate::search::game::Game;
use crate::search::prune::{KeepAll, Pruner, Reachable};
use crate::search::select::{First, Greedy, Selector, Uniform};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which expansion policy grows the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// one pass over the frontier per decision
    OneStep,
    /// materialize the entire reachable game graph
    Full,
    /// repeat passes until the vertex or wall-clock budget is spent
    Bounded,
    /// depth-limited layered sweep from the current vertex
    Sweep,
}

/// Which selection policy picks the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// best successor score, random tiebreak
    Greedy,
    /// smallest move under its ordering, for determinism
    First,
    /// uniformly random legal move
    Uniform,
}

/// Declarative policy configuration for a [`crate::search::bot::Bot`].
/// Budget fields of zero mean unbounded; `search_depth` only matters for
/// [`Strategy::Sweep`], the budgets only for [`Strategy::Bounded`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub strategy: Strategy,
    pub selection: Selection,
    pub pruning: bool,
    pub node_limit: usize,
    pub time_limit_ms: u64,
    pub search_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strategy: Strategy::Full,
            selection: Selection::Greedy,
            pruning: true,
            node_limit: 0,
            time_limit_ms: 0,
            search_depth: 3,
        }
    }
}

impl Config {
    pub fn expander<G: Game>(&self) -> Box<dyn Expander<G>> {
        match self.strategy {
            Strategy::OneStep => Box::new(OneStep),
            Strategy::Full => Box::new(Full),
            Strategy::Bounded => Box::new(Bounded {
                nodes: self.node_limit,
                time: Duration::from_millis(self.time_limit_ms),
            }),
            Strategy::Sweep => Box::new(ForwardSweep { depth: self.search_depth }),
        }
    }
    pub fn selector<G: Game>(&self) -> Box<dyn Selector<G>> {
        match self.selection {
            Selection::Greedy => Box::new(Greedy),
            Selection::First => Box::new(First),
            Selection::Uniform => Box::new(Uniform),
        }
    }
    pub fn pruner<G: Game>(&self) -> Box<dyn Pruner<G>> {
        match self.pruning {
            true => Box::new(Reachable),
            false => Box::new(KeepAll),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: Config = serde_json::from_str(r#"{"strategy": "sweep", "search_depth": 2}"#).unwrap();
        assert_eq!(config.strategy, Strategy::Sweep);
        assert_eq!(config.search_depth, 2);
        assert_eq!(config.selection, Selection::Greedy);
        assert!(config.pruning);
    }
}
