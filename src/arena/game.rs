use log::trace;

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{GameOutcome, GameState, Player};

/// Moves and result of one finished game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRecord {
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        self.outcome.winner()
    }

    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game to the end. `first` plays A and moves first.
pub fn play_game(first: &mut dyn Agent, second: &mut dyn Agent) -> Result<GameRecord, ArenaError> {
    let mut state = GameState::initial();

    while !state.is_terminal() {
        let agent: &mut dyn Agent = match state.current_player() {
            Player::A => &mut *first,
            Player::B => &mut *second,
        };
        let action = agent.select_action(&state).ok_or_else(|| ArenaError::NoMove {
            agent: agent.name().to_string(),
        })?;
        trace!("{} ({}) plays {action}", agent.name(), state.current_player());

        if state.play(action).is_err() {
            return Err(ArenaError::IllegalAction {
                agent: agent.name().to_string(),
                action,
                legal: state.legal_actions(),
            });
        }
    }

    Ok(GameRecord {
        moves: state.moves().to_vec(),
        outcome: state.outcome(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};

    /// Plays a fixed list of columns, then gives up.
    struct Scripted {
        moves: Vec<usize>,
    }

    impl Agent for Scripted {
        fn select_action(&mut self, _state: &GameState) -> Option<usize> {
            if self.moves.is_empty() {
                None
            } else {
                Some(self.moves.remove(0))
            }
        }

        fn name(&self) -> &str {
            "Scripted"
        }
    }

    #[test]
    fn scripted_game_records_moves() {
        let mut a = Scripted {
            moves: vec![0, 1, 2, 3],
        };
        let mut b = Scripted {
            moves: vec![0, 1, 2],
        };
        let record = play_game(&mut a, &mut b).unwrap();
        assert_eq!(record.moves, vec![0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(record.winner(), Some(Player::A));
        assert_eq!(record.game_length(), 7);
    }

    #[test]
    fn illegal_action_is_reported() {
        let mut a = Scripted { moves: vec![9] };
        let mut b = Scripted { moves: vec![] };
        let err = play_game(&mut a, &mut b).unwrap_err();
        assert!(matches!(err, ArenaError::IllegalAction { action: 9, .. }));
    }

    #[test]
    fn giving_up_is_reported() {
        let mut a = Scripted { moves: vec![3] };
        let mut b = Scripted { moves: vec![] };
        let err = play_game(&mut a, &mut b).unwrap_err();
        assert!(matches!(err, ArenaError::NoMove { .. }));
    }

    #[test]
    fn minimax_vs_random_finishes() {
        let mut minimax = MinimaxAgent::new(3);
        let mut random = RandomAgent::with_seed(11);
        let record = play_game(&mut random, &mut minimax).unwrap();
        assert!(record.outcome.is_terminal());
        assert!(record.game_length() >= 7);
    }
}
