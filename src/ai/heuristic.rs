use crate::game::{Board, Player, Seed, Window, WINDOWS};

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: sums a score over every 4-cell window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        evaluate(board, player)
    }
}

/// Static evaluation of `board` for `player`, summed over all windows.
pub fn evaluate(board: &Board, player: Player) -> i32 {
    WINDOWS
        .iter()
        .map(|window| score_window(board, window, player))
        .sum()
}

/// A full line is worth +/-100. A window shared by both sides is dead.
/// Otherwise `k` own discs score `k^3`; windows holding only opponent
/// discs score nothing.
fn score_window(board: &Board, window: &Window, player: Player) -> i32 {
    let own_seed = player.to_seed();
    let mut own = 0;
    let mut opp = 0;
    for &(row, col) in window {
        match board.get(row, col) {
            Seed::Empty => {}
            seed if seed == own_seed => own += 1,
            _ => opp += 1,
        }
    }

    match (own, opp) {
        (4, _) => 100,
        (_, 4) => -100,
        (k, 0) => k * k * k,
        _ => 0,
    }
}
