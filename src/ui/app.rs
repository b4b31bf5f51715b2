use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use log::{debug, info};
use ratatui::{backend::Backend, Frame, Terminal};

use crate::ai::Searcher;
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, MoveError, Player, COLS};

/// Interactive game of one human against the search engine.
pub struct App {
    game_state: GameState,
    searcher: Searcher,
    ai_player: Player,
    show_scores: bool,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            game_state: GameState::initial(),
            searcher: Searcher::from_config(&config.search),
            ai_player: config.play.ai_player,
            show_scores: config.play.show_scores,
            selected_column: COLS / 2,
            should_quit: false,
            message: None,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

            if self.should_quit {
                break;
            }

            // The human's disc is on screen before the engine starts thinking
            if self.ai_to_move() {
                self.ai_reply();
            } else {
                self.handle_events()?;
            }
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='7') => {
                self.selected_column = c as usize - '1' as usize;
                self.drop_piece();
            }
            KeyCode::Char('u') => {
                self.undo();
            }
            KeyCode::Char('n') | KeyCode::Char('r') => {
                self.game_state.new_game();
                self.selected_column = COLS / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn ai_to_move(&self) -> bool {
        !self.game_state.is_terminal() && self.game_state.current_player() == self.ai_player
    }

    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'n' for a new game.".to_string());
            return;
        }

        match self.game_state.play(self.selected_column) {
            Ok(outcome) => self.announce(outcome),
            Err(MoveError::ColumnFull(col)) => {
                self.message = Some(format!("Column {} is full!", col + 1));
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    /// Let the engine answer with its best column.
    fn ai_reply(&mut self) {
        let result = self.searcher.search(self.game_state.board(), self.ai_player);
        let Some(col) = result.column else {
            self.message = Some("Computer has no move".to_string());
            return;
        };

        match self.game_state.play(col) {
            Ok(outcome) => {
                debug!("computer played {col}: {result:?}");
                self.message = Some(if self.show_scores {
                    format!(
                        "Computer played {} (score {}, {} nodes)",
                        col + 1,
                        result.score,
                        result.nodes
                    )
                } else {
                    format!("Computer played {}", col + 1)
                });
                self.announce(outcome);
            }
            Err(err) => self.message = Some(format!("Computer move rejected: {err}")),
        }
    }

    /// Take back the last human move together with the engine's reply.
    fn undo(&mut self) {
        if let Err(err) = self.game_state.undo() {
            self.message = Some(err.to_string());
            return;
        }
        if self.game_state.current_player() == self.ai_player && !self.game_state.moves().is_empty() {
            if let Err(err) = self.game_state.undo() {
                self.message = Some(err.to_string());
                return;
            }
        }
        self.message = Some("Move undone".to_string());
    }

    fn announce(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::InProgress => {}
            GameOutcome::Winner(player) => {
                info!("{player} wins after {} moves", self.game_state.moves().len());
                let text = if player == self.ai_player {
                    "Computer wins!".to_string()
                } else {
                    format!("{player} wins!")
                };
                self.message = Some(text);
            }
            GameOutcome::Draw => {
                info!("draw after {} moves", self.game_state.moves().len());
                self.message = Some("It's a draw!".to_string());
            }
        }
    }

    fn render(&self, frame: &mut Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            self.ai_player,
        );
    }
}
