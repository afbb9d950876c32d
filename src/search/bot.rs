use crate::search::config::Config;
use crate::search::error::Error;
use crate::search::expand::Expander;
use crate::search::game::Game;
use crate::search::prune::Pruner;
use crate::search::score::{Minimax, Score, Scorer};
use crate::search::select::Selector;
use crate::search::tree::Tree;

/// The automated player: one search tree plus one of each policy,
/// composed by plain delegation. The driving loop is choose then advance,
/// kept separate so a caller can apply side effects between picking a
/// move and committing to it.
pub struct Bot<G: Game> {
    tree: Tree<G>,
    expander: Box<dyn Expander<G>>,
    scorer: Box<dyn Scorer<G>>,
    selector: Box<dyn Selector<G>>,
    pruner: Box<dyn Pruner<G>>,
}

impl<G: Game> Bot<G> {
    pub fn new(
        expander: Box<dyn Expander<G>>,
        scorer: Box<dyn Scorer<G>>,
        selector: Box<dyn Selector<G>>,
        pruner: Box<dyn Pruner<G>>,
    ) -> Self {
        Self {
            tree: Tree::new(),
            expander,
            scorer,
            selector,
            pruner,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.expander(),
            Box::new(Minimax),
            config.selector(),
            config.pruner(),
        )
    }

    /// grow the tree per the expansion policy, then pick a move from the
    /// current vertex. does NOT commit: committing is [`Bot::advance`].
    pub fn choose(&mut self) -> Result<G::M, Error> {
        self.expander.grow(&mut self.tree, self.scorer.as_ref())?;
        self.selector.select(self.tree.current())
    }

    /// commit a move, then let the pruning policy collect what fell out
    /// of reach.
    pub fn advance(&mut self, m: G::M) -> Result<(), Error> {
        self.tree.commit(m, self.scorer.as_ref())?;
        let before = self.tree.n();
        let pruned = self.pruner.prune(&mut self.tree);
        log::debug!(
            "search tree size: {} (after move) - {} (pruned) = {}",
            before,
            pruned,
            self.tree.n()
        );
        Ok(())
    }

    /// self-play until the game is over, narrating each position.
    pub fn play(&mut self) -> Result<(), Error> {
        log::info!("\n{}", self.tree.current().game());
        while !self.over() {
            let m = self.choose()?;
            log::info!("playing {}", m);
            self.advance(m)?;
            log::info!("\n{}", self.tree.current().game());
            log::debug!("vertices in the search tree: {}", self.n());
        }
        Ok(())
    }

    /// accessors over the current state

    pub fn over(&self) -> bool {
        self.tree.current().game().over()
    }
    pub fn turn(&self) -> Option<G::T> {
        self.tree.current().game().turn()
    }
    pub fn moves(&self) -> Vec<G::M> {
        self.tree.current().game().moves()
    }
    pub fn score(&self) -> &Score<G::T> {
        self.tree.current().score()
    }
    pub fn n(&self) -> usize {
        self.tree.n()
    }
    pub fn tree(&self) -> &Tree<G> {
        &self.tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::nim::{Nim, NimPlayer};
    use crate::games::tictactoe::{Cell, Mark, TicTacToe};
    use crate::search::config::{Selection, Strategy};

    #[test]
    fn minimax_solves_nim() {
        // 3 ^ 5 ^ 7 != 0, so the first mover holds the win
        let mut bot = Bot::<Nim>::from_config(&Config::default());
        bot.choose().unwrap();
        assert_eq!(bot.score().get(&NimPlayer::A), 1.0);
        assert_eq!(bot.score().get(&NimPlayer::B), -1.0);
    }

    #[test]
    fn shallow_sweep_stays_neutral() {
        // two plies of an empty board force nothing under a neutral
        // interior evaluation
        let config = Config {
            strategy: Strategy::Sweep,
            search_depth: 2,
            ..Config::default()
        };
        let mut bot = Bot::<TicTacToe>::from_config(&config);
        bot.choose().unwrap();
        assert_eq!(bot.n(), 1 + 9 + 9 * 8);
        assert_eq!(bot.score().get(&Mark::X), 0.0);
        assert_eq!(bot.score().get(&Mark::O), 0.0);
    }

    #[test]
    fn midgame_draw_is_detected() {
        let mut bot = Bot::<TicTacToe>::from_config(&Config::default());
        for (x, y) in [(1, 1), (0, 2), (2, 2), (0, 0), (0, 1), (2, 1)] {
            bot.advance(Cell { x, y }).unwrap();
        }
        bot.choose().unwrap();
        assert_eq!(bot.score().get(&Mark::X), -0.5);
        assert_eq!(bot.score().get(&Mark::O), -0.5);
    }

    #[test]
    fn perfect_self_play_draws_tictactoe() {
        let mut bot = Bot::<TicTacToe>::from_config(&Config::default());
        bot.play().unwrap();
        assert!(bot.over());
        assert_eq!(bot.score().get(&Mark::X), -0.5);
        assert_eq!(bot.score().get(&Mark::O), -0.5);
    }

    #[test]
    fn perfect_self_play_wins_nim_for_the_first_mover() {
        let mut bot = Bot::<Nim>::from_config(&Config::default());
        bot.play().unwrap();
        assert!(bot.over());
        assert_eq!(bot.score().get(&NimPlayer::A), 1.0);
    }

    #[test]
    fn deterministic_selection_is_reproducible() {
        let config = Config {
            selection: Selection::First,
            ..Config::default()
        };
        let mut bot = Bot::<TicTacToe>::from_config(&config);
        let first = bot.choose().unwrap();
        assert_eq!(bot.choose().unwrap(), first);
    }
}
