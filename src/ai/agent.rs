use crate::game::GameState;

/// Anything that can pick a column for the player on turn.
pub trait Agent {
    /// Select a column for `state.current_player()`. Returns `None` when
    /// there is nothing to play (full board or finished game).
    fn select_action(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
