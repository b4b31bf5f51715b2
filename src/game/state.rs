use super::{Board, Player, COLS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// True once the game has been won or drawn
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(player) => Some(player),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of range (0..7)")]
    InvalidColumn(usize),

    #[error("the game is already over")]
    GameOver,

    #[error("no moves to undo")]
    NothingToUndo,
}

/// A live game: the board, whose turn it is, and the moves that led here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    history: Vec<usize>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::A, // A starts
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
        }
    }

    /// Resume from an arbitrary position with `to_move` on turn. The move
    /// history starts empty.
    pub fn from_board(board: Board, to_move: Player) -> Self {
        GameState {
            outcome: board.evaluate_outcome(),
            board,
            current_player: to_move,
            history: Vec::new(),
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Columns played so far, oldest first
    pub fn moves(&self) -> &[usize] {
        &self.history
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns().collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.play(column)?;
        Ok(next)
    }

    /// Apply a move in place for the player on turn
    pub fn play(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        if self.board.is_column_full(column) {
            return Err(MoveError::ColumnFull(column));
        }

        self.outcome = self.board.apply_move(self.current_player, column);
        self.current_player = self.current_player.other();
        self.history.push(column);

        Ok(self.outcome)
    }

    /// Take back the last move, returning its column
    pub fn undo(&mut self) -> Result<usize, MoveError> {
        let column = self.history.pop().ok_or(MoveError::NothingToUndo)?;
        self.board.lift(column);
        self.current_player = self.current_player.other();
        self.outcome = GameOutcome::InProgress;
        Ok(column)
    }

    /// Clear the board and hand the first move back to A
    pub fn new_game(&mut self) {
        self.board.reset();
        self.current_player = Player::A;
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Seed;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::A);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::B);
        assert_eq!(new_state.board().get(5, 3), Seed::PlayerA);
        assert_eq!(new_state.moves(), &[3]);
        // original untouched
        assert_eq!(state.board().get(5, 3), Seed::Empty);
    }

    #[test]
    fn test_move_errors() {
        let mut state = GameState::initial();
        assert_eq!(state.play(7), Err(MoveError::InvalidColumn(7)));
        for _ in 0..6 {
            state.play(0).unwrap();
        }
        assert_eq!(state.play(0), Err(MoveError::ColumnFull(0)));
        assert_eq!(state.moves().len(), 6);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // A wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // A
            if col < 3 {
                state = state.apply_move(col).unwrap(); // B (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::A));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.play(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_undo_reopens_game() {
        let mut state = GameState::initial();
        for col in [0, 0, 1, 1, 2, 2] {
            state.play(col).unwrap();
        }
        assert_eq!(state.play(3), Ok(GameOutcome::Winner(Player::A)));

        assert_eq!(state.undo(), Ok(3));
        assert_eq!(state.outcome(), GameOutcome::InProgress);
        assert_eq!(state.current_player(), Player::A);
        assert_eq!(state.board().get(5, 3), Seed::Empty);
    }

    #[test]
    fn test_undo_empty_history() {
        let mut state = GameState::initial();
        assert_eq!(state.undo(), Err(MoveError::NothingToUndo));
    }

    #[test]
    fn test_new_game() {
        let mut state = GameState::initial();
        state.play(3).unwrap();
        state.play(4).unwrap();
        state.play(3).unwrap();
        state.new_game();
        assert_eq!(state, GameState::initial());
    }

    #[test]
    fn test_from_board_detects_outcome() {
        let board: Board = "
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            . . . . . . .
            B B B B A A A
        "
        .parse()
        .unwrap();
        let state = GameState::from_board(board, Player::A);
        assert_eq!(state.outcome(), GameOutcome::Winner(Player::B));
    }

    #[test]
    fn test_draw() {
        let mut state = GameState::initial();

        // Column pairs are filled so that no line of four ever forms
        let order = [
            0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, //
            2, 3, 2, 3, 2, 3, 3, 2, 3, 2, 3, 2, //
            4, 5, 4, 5, 4, 5, 5, 4, 5, 4, 5, 4, //
            6, 6, 6, 6, 6, 6,
        ];

        for &col in &order {
            assert!(!state.is_terminal(), "game ended early at {:?}", state.moves());
            state.play(col).unwrap();
        }

        assert_eq!(state.outcome(), GameOutcome::Draw);
    }
}
