//! Depth-limited minimax with alpha-beta pruning.
//!
//! Scores are always from the searching player's fixed point of view: a
//! win for it is `+WIN_SCORE`, a loss `-WIN_SCORE`, a draw `0`, and a
//! position at the horizon is scored by the [`Heuristic`]. The whole search
//! runs on one board buffer; every move is dropped before recursing and
//! lifted again afterwards, so each node sees the position it would see on
//! its own copy.

use log::{debug, trace};

use crate::game::{Board, GameOutcome, Player, COLS};

use super::heuristic::{Heuristic, WindowHeuristic};

/// Plies searched from the root, counting the root move itself.
pub const DEFAULT_DEPTH: usize = 6;

/// Deepest search the configuration accepts.
pub const MAX_DEPTH: usize = 12;

/// Magnitude of a decided game.
pub const WIN_SCORE: i32 = 1000;

/// Search settings, loadable from the `[search]` config section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub depth: usize,
    pub alpha_beta: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            alpha_beta: true,
        }
    }
}

/// What a search decided and what it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen column, or `None` when the game on the board is already over.
    pub column: Option<usize>,
    /// Minimax value of the chosen column.
    pub score: i32,
    /// Positions visited.
    pub nodes: u64,
}

pub struct Searcher {
    depth: usize,
    alpha_beta: bool,
    heuristic: Box<dyn Heuristic>,
}

impl Searcher {
    pub fn new(depth: usize) -> Self {
        Searcher {
            depth: depth.max(1),
            alpha_beta: true,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::new(config.depth).with_alpha_beta(config.alpha_beta)
    }

    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Disabling pruning gives a plain exhaustive minimax with the same
    /// result and a larger node count.
    pub fn with_alpha_beta(mut self, enabled: bool) -> Self {
        self.alpha_beta = enabled;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Best column for `player` to drop into, or `None` if the board is full
    /// or already holds a line of four.
    pub fn best_move(&self, board: &Board, player: Player) -> Option<usize> {
        self.search(board, player).column
    }

    pub fn search(&self, board: &Board, player: Player) -> SearchResult {
        let finished = board.evaluate_outcome();
        if finished.is_terminal() {
            debug!("{player} has nothing to search: {finished:?}");
            return SearchResult {
                column: None,
                score: match finished {
                    GameOutcome::Winner(winner) if winner == player => WIN_SCORE,
                    GameOutcome::Winner(_) => -WIN_SCORE,
                    _ => 0,
                },
                nodes: 0,
            };
        }

        let mut walk = Walk {
            board: *board,
            player,
            depth: self.depth,
            alpha_beta: self.alpha_beta,
            heuristic: self.heuristic.as_ref(),
            nodes: 0,
        };

        // An immediate win beats anything found deeper.
        for col in 0..COLS {
            if walk.board.is_column_full(col) {
                continue;
            }
            let outcome = walk.board.apply_move(player, col);
            walk.board.lift(col);
            walk.nodes += 1;
            if outcome == GameOutcome::Winner(player) {
                debug!("{player} wins immediately in column {col}");
                return SearchResult {
                    column: Some(col),
                    score: WIN_SCORE,
                    nodes: walk.nodes,
                };
            }
        }

        let mut best_column = None;
        let mut best_score = i32::MIN;
        let mut alpha = i32::MIN;

        for col in 0..COLS {
            if walk.board.is_column_full(col) {
                continue;
            }
            let outcome = walk.board.apply_move(player, col);
            let score = walk.minimax(outcome, player.other(), 1, alpha, i32::MAX);
            walk.board.lift(col);
            trace!("{player} column {col}: {score}");

            // Strict improvement only, so ties keep the leftmost column.
            if score > best_score {
                best_score = score;
                best_column = Some(col);
            }
            if self.alpha_beta {
                alpha = alpha.max(score);
            }
        }

        let result = SearchResult {
            column: best_column,
            score: best_score,
            nodes: walk.nodes,
        };
        debug!(
            "{player} picks {:?} (score {}, {} nodes, depth {})",
            result.column, result.score, result.nodes, self.depth
        );
        result
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// State of one search in flight.
struct Walk<'a> {
    board: Board,
    player: Player,
    depth: usize,
    alpha_beta: bool,
    heuristic: &'a dyn Heuristic,
    nodes: u64,
}

impl Walk<'_> {
    /// Value of the current board, reached with `outcome` after `ply` moves,
    /// with `to_move` on turn.
    fn minimax(
        &mut self,
        outcome: GameOutcome,
        to_move: Player,
        ply: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        match outcome {
            GameOutcome::Winner(winner) if winner == self.player => return WIN_SCORE,
            GameOutcome::Winner(_) => return -WIN_SCORE,
            GameOutcome::Draw => return 0,
            GameOutcome::InProgress => {}
        }
        if ply >= self.depth {
            return self.heuristic.evaluate(&self.board, self.player);
        }

        let maximizing = to_move == self.player;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in 0..COLS {
            if self.board.is_column_full(col) {
                continue;
            }
            let child = self.board.apply_move(to_move, col);
            let score = self.minimax(child, to_move.other(), ply + 1, alpha, beta);
            self.board.lift(col);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.alpha_beta && beta <= alpha {
                break;
            }
        }

        best
    }
}
