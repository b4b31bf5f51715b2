use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use connect_four_minimax::ai::{evaluate, Searcher, WIN_SCORE};
use connect_four_minimax::game::{Board, GameOutcome, GameState, Player, COLS};

/// Unfinished positions reached by random play, with the player on turn.
fn random_positions(seed: u64, count: usize) -> Vec<(Board, Player)> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut positions = Vec::with_capacity(count);

    while positions.len() < count {
        let mut state = GameState::initial();
        let plies = rng.random_range(0..30);
        for _ in 0..plies {
            let legal = state.legal_actions();
            if legal.is_empty() {
                break;
            }
            let col = legal[rng.random_range(0..legal.len())];
            state.play(col).expect("legal column");
        }
        if !state.is_terminal() {
            positions.push((*state.board(), state.current_player()));
        }
    }
    positions
}

fn wins_immediately(board: &Board, player: Player, col: usize) -> bool {
    let mut scratch = *board;
    !scratch.is_column_full(col) && scratch.apply_move(player, col) == GameOutcome::Winner(player)
}

#[test]
fn best_move_is_always_playable() {
    let searcher = Searcher::new(4);
    for (board, player) in random_positions(1, 40) {
        let col = searcher
            .best_move(&board, player)
            .expect("open board must yield a move");
        assert!(col < COLS);
        assert!(!board.is_column_full(col), "column {col} is full on\n{board}");
    }
}

#[test]
fn full_board_yields_no_move() {
    let board: Board = "
        A A B B A A B
        B B A A B B A
        A A B B A A B
        B B A A B B A
        A A B B A A B
        B B A A B B A
    "
    .parse()
    .expect("valid board");
    assert_eq!(board.evaluate_outcome(), GameOutcome::Draw);
    for player in [Player::A, Player::B] {
        assert_eq!(Searcher::default().best_move(&board, player), None);
    }
}

#[test]
fn pruning_never_changes_the_result() {
    for (board, player) in random_positions(2, 12) {
        let pruned = Searcher::new(5).search(&board, player);
        let plain = Searcher::new(5).with_alpha_beta(false).search(&board, player);
        assert_eq!(pruned.column, plain.column, "column differs on\n{board}");
        assert_eq!(pruned.score, plain.score, "score differs on\n{board}");
        assert!(pruned.nodes <= plain.nodes);
    }
}

#[test]
fn pruning_parity_at_full_depth() {
    let board: Board = "
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . B . . .
        . . A A . . .
    "
    .parse()
    .expect("valid board");
    let pruned = Searcher::default().search(&board, Player::A);
    let plain = Searcher::default().with_alpha_beta(false).search(&board, Player::A);
    assert_eq!(pruned.column, plain.column);
    assert_eq!(pruned.score, plain.score);
    assert!(pruned.nodes < plain.nodes);
}

#[test]
fn immediate_wins_are_taken() {
    let searcher = Searcher::new(4);
    let mut checked = 0;
    for (board, player) in random_positions(3, 300) {
        let winning: Vec<usize> = (0..COLS)
            .filter(|&col| wins_immediately(&board, player, col))
            .collect();
        if winning.is_empty() {
            continue;
        }
        checked += 1;
        let result = searcher.search(&board, player);
        assert_eq!(result.column, Some(winning[0]), "missed win on\n{board}");
        assert_eq!(result.score, WIN_SCORE);
    }
    assert!(checked > 0, "no position with an immediate win was generated");
}

#[test]
fn single_threat_is_blocked() {
    let searcher = Searcher::default();
    for (board, player) in random_positions(4, 300) {
        let opponent = player.other();
        let own_wins = (0..COLS).any(|col| wins_immediately(&board, player, col));
        let threats: Vec<usize> = (0..COLS)
            .filter(|&col| wins_immediately(&board, opponent, col))
            .collect();
        if own_wins || threats.len() != 1 {
            continue;
        }

        let block = threats[0];
        // Skip positions where blocking hands the opponent a win on top
        let mut blocked = board;
        blocked.apply_move(player, block);
        if wins_immediately(&blocked, opponent, block) {
            continue;
        }

        // Every other column loses at once, so unless the position is lost
        // regardless, the block must be chosen.
        let result = searcher.search(&board, player);
        if result.score > -WIN_SCORE {
            assert_eq!(
                result.column,
                Some(block),
                "did not block column {block} for {player} on\n{board}"
            );
        }
    }
}

#[test]
fn second_player_blocks_opening_row() {
    let board: Board = "
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        . . . . . . .
        A A A . . . .
    "
    .parse()
    .expect("valid board");
    assert_eq!(Searcher::default().best_move(&board, Player::B), Some(3));
}

#[test]
fn heuristic_is_mirror_symmetric() {
    for (board, _) in random_positions(5, 60) {
        let mirror = board.mirrored();
        for player in [Player::A, Player::B] {
            assert_eq!(evaluate(&board, player), evaluate(&mirror, player));
        }
    }
}

#[test]
fn search_is_deterministic() {
    let searcher = Searcher::new(5);
    for (board, player) in random_positions(6, 10) {
        assert_eq!(searcher.search(&board, player), searcher.search(&board, player));
    }
}
