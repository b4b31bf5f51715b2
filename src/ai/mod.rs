mod agent;
pub mod heuristic;
mod minimax;
mod random;
pub mod search;

pub use agent::Agent;
pub use heuristic::{evaluate, Heuristic, WindowHeuristic};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::{SearchConfig, SearchResult, Searcher, DEFAULT_DEPTH, MAX_DEPTH, WIN_SCORE};
