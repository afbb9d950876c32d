/// Failures surfaced by the engine. None of these are retried: expansion,
/// merging, and scoring are deterministic computations over validated
/// inputs, so a failure is either a caller error or a broken adapter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// the requested move is not in the current legal-move set.
    #[error("illegal move: {0}")]
    IllegalMove(String),
    /// a recorded move does not resolve to a live successor. this means
    /// the game implementation broke its determinism contract and the
    /// graph can no longer be trusted.
    #[error("move does not resolve to a recorded successor: {0}")]
    UnknownMove(String),
    /// score or successor queried before the vertex was expanded.
    #[error("vertex has not been expanded yet")]
    NotExpandedYet,
}
