use std::fmt;
use std::str::FromStr;

use super::{GameOutcome, Player};
use crate::error::BoardParseError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const WIN_LENGTH: usize = 4;

/// Number of distinct 4-cell lines on the board, across all four directions.
pub const WINDOW_COUNT: usize = ROWS * (COLS - WIN_LENGTH + 1)
    + (ROWS - WIN_LENGTH + 1) * COLS
    + 2 * (ROWS - WIN_LENGTH + 1) * (COLS - WIN_LENGTH + 1);

/// Line directions as (row step, column step): horizontal, vertical,
/// diagonal down-right, diagonal up-right. Row 0 is the top.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// A run of `WIN_LENGTH` cell coordinates along one direction.
pub type Window = [(usize, usize); WIN_LENGTH];

/// Every window on the board. Shared by win detection and the heuristic.
pub static WINDOWS: [Window; WINDOW_COUNT] = build_windows();

const fn build_windows() -> [Window; WINDOW_COUNT] {
    let mut windows = [[(0, 0); WIN_LENGTH]; WINDOW_COUNT];
    let span = WIN_LENGTH as isize - 1;
    let mut n = 0;
    let mut d = 0;
    while d < DIRECTIONS.len() {
        let (dr, dc) = DIRECTIONS[d];
        let mut row = 0;
        while row < ROWS {
            let mut col = 0;
            while col < COLS {
                let end_row = row as isize + dr * span;
                let end_col = col as isize + dc * span;
                if end_row >= 0 && end_row < ROWS as isize && end_col < COLS as isize {
                    let mut i = 0;
                    while i < WIN_LENGTH {
                        windows[n][i] = (
                            (row as isize + dr * i as isize) as usize,
                            (col as isize + dc * i as isize) as usize,
                        );
                        i += 1;
                    }
                    n += 1;
                }
                col += 1;
            }
            row += 1;
        }
        d += 1;
    }
    windows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Seed {
    #[default]
    Empty,
    PlayerA,
    PlayerB,
}

impl Seed {
    /// The player owning this seed, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Seed::Empty => None,
            Seed::PlayerA => Some(Player::A),
            Seed::PlayerB => Some(Player::B),
        }
    }

    /// Single-character form used by the text board format
    pub fn glyph(self) -> char {
        match self {
            Seed::Empty => '.',
            Seed::PlayerA => 'A',
            Seed::PlayerB => 'B',
        }
    }

    fn from_glyph(glyph: char) -> Option<Seed> {
        match glyph {
            '.' | '_' => Some(Seed::Empty),
            'A' | 'a' | 'X' | 'x' => Some(Seed::PlayerA),
            'B' | 'b' | 'O' | 'o' => Some(Seed::PlayerB),
            _ => None,
        }
    }
}

/// A grid position and its occupant. Only minted by [`Board`], so the
/// coordinates are always in range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    row: usize,
    col: usize,
    seed: Seed,
}

impl Cell {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn is_empty(&self) -> bool {
        self.seed == Seed::Empty
    }
}

/// Fixed 6x7 grid. Row 0 is the top, row 5 is the bottom; discs stack
/// upward from row 5 without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Seed; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Seed::Empty; COLS]; ROWS],
        }
    }

    /// Clear every cell for a new game
    pub fn reset(&mut self) {
        self.cells = [[Seed::Empty; COLS]; ROWS];
    }

    /// Get the seed at a specific position
    pub fn get(&self, row: usize, col: usize) -> Seed {
        self.cells[row][col]
    }

    /// Get the cell at a specific position
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        Cell {
            row,
            col,
            seed: self.cells[row][col],
        }
    }

    /// All cells, top row first
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..ROWS).flat_map(move |row| (0..COLS).map(move |col| self.cell(row, col)))
    }

    /// The row a disc dropped into `col` would land on. `None` when the
    /// column is full or out of range.
    pub fn lowest_empty_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Seed::Empty)
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        self.lowest_empty_row(col).is_none()
    }

    /// Columns that can still take a disc, left to right
    pub fn legal_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..COLS).filter(move |&col| !self.is_column_full(col))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(|&seed| seed != Seed::Empty)
    }

    /// Number of discs on the board
    pub fn disc_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&seed| seed != Seed::Empty)
            .count()
    }

    /// Drop a disc for `player` into `col`, returning the row it landed on
    pub fn drop_seed(&mut self, col: usize, player: Player) -> Option<usize> {
        let row = self.lowest_empty_row(col)?;
        self.cells[row][col] = player.to_seed();
        Some(row)
    }

    /// Remove the top disc of `col`, returning what was there. Inverse of
    /// [`Board::drop_seed`].
    pub fn lift(&mut self, col: usize) -> Option<Seed> {
        if col >= COLS {
            return None;
        }
        let row = (0..ROWS).find(|&row| self.cells[row][col] != Seed::Empty)?;
        Some(std::mem::take(&mut self.cells[row][col]))
    }

    /// Play `player` into `col` and report the outcome of that move. A move
    /// into a full or out-of-range column leaves the board untouched and
    /// reports `InProgress`.
    pub fn apply_move(&mut self, player: Player, col: usize) -> GameOutcome {
        let Some(row) = self.drop_seed(col, player) else {
            return GameOutcome::InProgress;
        };
        if self.check_win(row, col) {
            GameOutcome::Winner(player)
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    /// Check if the disc at (row, col) is part of a line of four
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let seed = self.get(row, col);
        if seed == Seed::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, seed) + self.run_length(row, col, -dr, -dc, seed)
                >= WIN_LENGTH
        })
    }

    /// Count matching seeds walking away from (row, col), excluding it
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, seed: Seed) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while (0..ROWS as isize).contains(&r)
            && (0..COLS as isize).contains(&c)
            && self.cells[r as usize][c as usize] == seed
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    /// Full-board scan: a completed window wins, otherwise a full board is
    /// a draw.
    pub fn evaluate_outcome(&self) -> GameOutcome {
        let winner = WINDOWS.iter().find_map(|window| {
            let (r0, c0) = window[0];
            let seed = self.cells[r0][c0];
            let complete = window[1..]
                .iter()
                .all(|&(r, c)| self.cells[r][c] == seed);
            if complete {
                seed.player()
            } else {
                None
            }
        });

        match winner {
            Some(player) => GameOutcome::Winner(player),
            None if self.is_full() => GameOutcome::Draw,
            None => GameOutcome::InProgress,
        }
    }

    /// Left-right mirror image
    pub fn mirrored(&self) -> Board {
        let mut cells = self.cells;
        for row in cells.iter_mut() {
            row.reverse();
        }
        Board { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|seed| seed.glyph().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parse the text form: six non-blank lines of seven glyphs, top row
    /// first. Whitespace inside a line is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        if lines.len() != ROWS {
            return Err(BoardParseError::RowCount { found: lines.len() });
        }

        let mut board = Board::new();
        for (row, line) in lines.iter().enumerate() {
            let glyphs: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if glyphs.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    found: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                board.cells[row][col] = Seed::from_glyph(glyph)
                    .ok_or(BoardParseError::Glyph { row, col, glyph })?;
            }
        }

        for col in 0..COLS {
            for row in 1..ROWS {
                if board.cells[row - 1][col] != Seed::Empty && board.cells[row][col] == Seed::Empty
                {
                    return Err(BoardParseError::Floating { row: row - 1, col });
                }
            }
        }

        Ok(board)
    }
}
