//! Engine for growing, scoring, and pruning the graph of reachable states
//! of a perfect-information turn-based game.
//!
//! The reachable states form a directed graph rather than a tree: distinct
//! move sequences can converge on one position, and such transpositions
//! share a single vertex, deduplicated by the game's canonical key. The
//! graph supports partial, resumable expansion under node and wall-clock
//! budgets, minimax score backpropagation across all incoming paths, and
//! reachability garbage collection after each committed move.
//!
//! Behavior is assembled from four narrow policies injected into the
//! [`bot::Bot`] at construction:
//! - [`expand::Expander`]: which frontier vertices to expand, and when to stop
//! - [`score::Scorer`]: how a vertex's score follows from its successors
//! - [`select::Selector`]: which move to play given the computed scores
//! - [`prune::Pruner`]: what to discard once a move is committed

pub mod bot;
pub mod config;
pub mod data;
pub mod error;
pub mod expand;
pub mod game;
pub mod node;
pub mod prune;
pub mod score;
pub mod select;
pub mod tree;
