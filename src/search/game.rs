use crate::search::error::Error;
use crate::search::score::Score;

/// the move is fully abstracted. it is basically a marker trait,
/// with Ord doubling as the tiebreak order for deterministic selection.
pub trait Move:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
{
}

/// player identity. Ord is required so per-player score maps
/// have a stable iteration order.
pub trait Turn:
    Copy
    + Clone
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + std::hash::Hash
    + std::fmt::Debug
    + std::fmt::Display
{
}

/// canonical state key. equal keys mean interchangeable vertices:
/// unrelated move sequences converging on an equal key share one
/// vertex in the search graph.
pub trait Key: Clone + PartialEq + Eq + std::hash::Hash + std::fmt::Debug {}

impl Key for String {}

/// the game state is fully abstracted. it must be implemented by the
/// consumer of this search API.
///
/// the implementation must be able to create a state from:
///  scratch (i.e. root vertex without context)
///
/// the implementation must be able to determine:
///  whose turn it is (None once the game is over)
///  which moves are legal (empty exactly when the game is over)
///  what any state is statically worth to each player
///
/// states are immutable values; `apply` always constructs a fresh one.
///
/// preconditions the engine trusts without runtime checks: `moves` and
/// `apply` are deterministic pure functions of the state, keys are stable,
/// and no sequence of moves revisits an earlier key. violations surface
/// as [`Error::UnknownMove`] and are fatal, never retried.
pub trait Game: Clone + std::fmt::Display {
    type M: Move;
    type T: Turn;
    type K: Key;

    fn root() -> Self;
    fn turn(&self) -> Option<Self::T>;
    fn over(&self) -> bool;
    fn moves(&self) -> Vec<Self::M>;
    fn apply(&self, m: Self::M) -> Result<Self, Error>;
    fn key(&self) -> Self::K;
    /// static utility per player. must agree with the outcome on
    /// finished states; interior states may be neutral or heuristic.
    fn evaluate(&self) -> Score<Self::T>;
}
