//! # Connect Four Minimax
//!
//! Connect Four on the classic 6x7 board with a computer opponent driven by
//! depth-limited minimax search and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, seeds, players, game state machine
//! - [`ai`] — Heuristic evaluator, alpha-beta search, agents
//! - [`arena`] — Headless games and matches between agents
//! - [`ui`] — Terminal UI (ratatui) for playing against the computer
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — Logger initialisation for the binaries

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
