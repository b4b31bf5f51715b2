use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{Board, GameOutcome, GameState, Player, Seed, COLS, ROWS};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    ai_player: Player,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, ai_player, chunks[0]);
    render_board(frame, game_state.board(), selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::A => Color::Red,
        Player::B => Color::Yellow,
    }
}

/// One-line summary of whose turn it is or how the game ended.
pub fn status_line(game_state: &GameState, ai_player: Player) -> String {
    match game_state.outcome() {
        GameOutcome::InProgress if game_state.current_player() == ai_player => {
            format!("Computer to move ({ai_player})")
        }
        GameOutcome::InProgress => format!("Your move ({})", game_state.current_player()),
        GameOutcome::Winner(player) if player == ai_player => {
            format!("Game Over  |  Computer ({player}) won")
        }
        GameOutcome::Winner(player) => format!("Game Over  |  You ({player}) won"),
        GameOutcome::Draw => "Game Over  |  Draw".to_string(),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, ai_player: Player, area: Rect) {
    let color = match game_state.outcome() {
        GameOutcome::Winner(player) => player_color(player),
        GameOutcome::Draw => Color::White,
        GameOutcome::InProgress => player_color(game_state.current_player()),
    };

    let header = Paragraph::new(status_line(game_state, ai_player))
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let selected = Style::default().fg(Color::Cyan);
    let mut lines = Vec::with_capacity(ROWS + 4);

    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                selected.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(COLS * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let (symbol, color) = match board.get(row, col) {
                Seed::Empty => (" . ", Color::DarkGray),
                Seed::PlayerA => (" ● ", player_color(Player::A)),
                Seed::PlayerB => (" ● ", player_color(Player::B)),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column {
            indicator.push(Span::styled(" ▲ ", selected));
        } else {
            indicator.push(Span::raw("   "));
        }
    }
    indicator.push(Span::raw("  "));
    lines.push(Line::from(indicator));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→ or 1-7: Column  |  Enter: Drop  |  U: Undo  |  N: New  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
