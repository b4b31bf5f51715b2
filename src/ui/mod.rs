//! Terminal UI: the interactive game loop and its ratatui view.

mod app;
mod game_view;

pub use app::App;
pub use game_view::status_line;
