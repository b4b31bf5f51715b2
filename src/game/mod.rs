//! Core Connect Four rules: the board with its gravity and win detection,
//! the two players, and the live game state machine.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Seed, Window, COLS, ROWS, WINDOWS, WINDOW_COUNT, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState, MoveError};
