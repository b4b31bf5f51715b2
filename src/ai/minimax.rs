use crate::game::GameState;

use super::agent::Agent;
use super::search::{SearchConfig, Searcher};

/// Agent backed by the alpha-beta [`Searcher`].
pub struct MinimaxAgent {
    searcher: Searcher,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            searcher: Searcher::new(depth),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        MinimaxAgent {
            searcher: Searcher::from_config(config),
        }
    }

    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        MinimaxAgent {
            searcher: Searcher::default(),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        self.searcher
            .best_move(state.board(), state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
