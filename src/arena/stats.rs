use crate::game::Player;

use super::game::GameRecord;

/// Running tally for a match between two agents, "first" and "second"
/// by the order they were handed to the match, not by seat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchStats {
    pub first_wins: usize,
    pub second_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl MatchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a game in which the first agent sat as `first_seat`.
    pub fn record(&mut self, record: &GameRecord, first_seat: Player) {
        self.total_moves += record.game_length();
        match record.winner() {
            Some(winner) if winner == first_seat => self.first_wins += 1,
            Some(_) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.first_wins + self.second_wins + self.draws
    }

    /// Win rate of the first agent.
    pub fn first_win_rate(&self) -> f32 {
        self.rate(self.first_wins)
    }

    pub fn second_win_rate(&self) -> f32 {
        self.rate(self.second_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / games as f32
    }

    fn rate(&self, count: usize) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        count as f32 / games as f32
    }
}
