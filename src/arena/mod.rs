//! Headless matches between agents: single games, seat-swapping match
//! runs, and their statistics.

mod game;
mod stats;

pub use game::{play_game, GameRecord};
pub use stats::MatchStats;

use log::info;

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::Player;

/// Match settings, loadable from the `[arena]` config section.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    /// Seed for random agents; fresh entropy when unset.
    pub rng_seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 20,
            rng_seed: None,
        }
    }
}

/// Play `games` games, swapping seats every game so `first` opens the
/// even-numbered ones.
pub fn run_match(
    first: &mut dyn Agent,
    second: &mut dyn Agent,
    games: usize,
) -> Result<MatchStats, ArenaError> {
    let mut stats = MatchStats::new();

    for game in 0..games {
        let (record, first_seat) = if game % 2 == 0 {
            (play_game(first, second)?, Player::A)
        } else {
            (play_game(second, first)?, Player::B)
        };
        stats.record(&record, first_seat);

        let result = match record.winner() {
            Some(winner) if winner == first_seat => first.name().to_string(),
            Some(_) => second.name().to_string(),
            None => "draw".to_string(),
        };
        info!(
            "game {}/{}: {} as {}, {} moves, result: {}",
            game + 1,
            games,
            first.name(),
            first_seat,
            record.game_length(),
            result
        );
    }

    info!(
        "{} {} - {} {} ({} draws), avg length {:.1}",
        first.name(),
        stats.first_wins,
        stats.second_wins,
        second.name(),
        stats.draws,
        stats.average_game_length()
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};

    #[test]
    fn match_plays_every_game() {
        let mut minimax = MinimaxAgent::new(2);
        let mut random = RandomAgent::with_seed(3);
        let stats = run_match(&mut minimax, &mut random, 4).unwrap();
        assert_eq!(stats.games(), 4);
    }

    #[test]
    fn identical_agents_trade_seats() {
        // Deterministic players: whoever sits as A replays the same game
        let mut first = MinimaxAgent::new(2);
        let mut second = MinimaxAgent::new(2);
        let stats = run_match(&mut first, &mut second, 2).unwrap();
        if stats.draws == 0 {
            assert_eq!(stats.first_wins, 1);
            assert_eq!(stats.second_wins, 1);
        } else {
            assert_eq!(stats.draws, 2);
            assert_eq!(stats.first_wins + stats.second_wins, 0);
        }
    }

    #[test]
    fn default_config() {
        let config = ArenaConfig::default();
        assert_eq!(config.games, 20);
        assert_eq!(config.rng_seed, None);
    }
}
