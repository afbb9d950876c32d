use crate::search::game::Game;
use crate::search::score::Score;

/// Payload stored at each vertex of the search graph: the wrapped state,
/// its expansion status, and its current score. Successor and predecessor
/// relationships live on the graph's arcs, not here.
#[derive(Debug)]
pub struct Data<G: Game> {
    game: G,
    expanded: bool,
    score: Score<G::T>,
}

impl<G: Game> From<G> for Data<G> {
    fn from(game: G) -> Self {
        Self {
            score: game.evaluate(),
            expanded: false,
            game,
        }
    }
}

impl<G: Game> Data<G> {
    pub fn game(&self) -> &G {
        &self.game
    }
    pub fn score(&self) -> &Score<G::T> {
        &self.score
    }
    pub fn expanded(&self) -> bool {
        self.expanded
    }
    /// expansion status is monotonic: false to true, once.
    pub fn set_expanded(&mut self) {
        self.expanded = true;
    }
    pub fn set_score(&mut self, score: Score<G::T>) {
        self.score = score;
    }
}
