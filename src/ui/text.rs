use std::fmt::Write;

use crate::config::PlayersConfig;
use crate::game::{Board, Cell, Player, COLS};

/// Renders the board as plain text, one line per row with `+---+`
/// separators. Tokens are a colored `O` when color is on, otherwise `X` for
/// player one and `O` for player two.
pub struct TextRenderer<'a> {
    players: &'a PlayersConfig,
    color: bool,
}

impl<'a> TextRenderer<'a> {
    pub fn new(players: &'a PlayersConfig, color: bool) -> Self {
        TextRenderer { players, color }
    }

    /// Text for a single cell, including escape codes when colored
    pub fn token(&self, cell: Cell) -> String {
        match cell {
            Cell::Empty => " ".to_string(),
            Cell::Occupied(player) if self.color => {
                let code = self.players.style(player).color.ansi_code();
                format!("\x1b[{code}mO\x1b[0m")
            }
            Cell::Occupied(Player::One) => "X".to_string(),
            Cell::Occupied(Player::Two) => "O".to_string(),
        }
    }

    pub fn render_board(&self, board: &Board) -> String {
        let separator = format!("+{}", "---+".repeat(COLS));
        let header: Vec<String> = (0..COLS).map(|col| col.to_string()).collect();

        let mut out = String::new();
        out.push('\n');
        let _ = writeln!(out, "  {}", header.join("   "));
        let _ = writeln!(out, "{separator}");
        for row in board.rows() {
            let cells: Vec<String> = row.iter().map(|&cell| self.token(cell)).collect();
            let _ = writeln!(out, "| {} |", cells.join(" | "));
            let _ = writeln!(out, "{separator}");
        }
        out
    }
}
