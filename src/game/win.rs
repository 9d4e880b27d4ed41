//! Four-in-a-row detection over the whole grid.
//!
//! Every check slides a window of [`WIN_LENGTH`] cells across the board and
//! asks whether each cell in the window is held by the player under test.
//! Windows never wrap across a row or column edge, and an empty cell never
//! matches either player.

use super::board::{Board, COLS, ROWS};
use super::Player;

/// Number of aligned tokens needed to win
pub const WIN_LENGTH: usize = 4;

/// Check whether `player` holds four aligned tokens anywhere on the board.
///
/// Runs a full rescan, so it does not depend on which move was played last.
pub fn has_four_in_a_row(board: &Board, player: Player) -> bool {
    horizontal(board, player)
        || vertical(board, player)
        || diagonal_down(board, player)
        || diagonal_up(board, player)
}

/// True when the `WIN_LENGTH` cells starting at (`row`, `col`) and stepping by
/// (`d_row`, `d_col`) all belong to `player`. The caller keeps the window on
/// the board.
fn window_held(
    board: &Board,
    player: Player,
    (row, col): (usize, usize),
    (d_row, d_col): (isize, isize),
) -> bool {
    (0..WIN_LENGTH as isize).all(|i| {
        let r = (row as isize + i * d_row) as usize;
        let c = (col as isize + i * d_col) as usize;
        board.get(r, c).is_held_by(player)
    })
}

/// Windows confined to a single row (anchor columns 0..=3)
fn horizontal(board: &Board, player: Player) -> bool {
    (0..ROWS).any(|row| {
        (0..=COLS - WIN_LENGTH).any(|col| window_held(board, player, (row, col), (0, 1)))
    })
}

/// Windows running down a single column (anchor rows 0..=2)
fn vertical(board: &Board, player: Player) -> bool {
    (0..COLS).any(|col| {
        (0..=ROWS - WIN_LENGTH).any(|row| window_held(board, player, (row, col), (1, 0)))
    })
}

/// Top-left to bottom-right (\), anchored on the top-left cell
fn diagonal_down(board: &Board, player: Player) -> bool {
    (0..=ROWS - WIN_LENGTH).any(|row| {
        (0..=COLS - WIN_LENGTH).any(|col| window_held(board, player, (row, col), (1, 1)))
    })
}

/// Bottom-left to top-right (/), anchored on the bottom-left cell
fn diagonal_up(board: &Board, player: Player) -> bool {
    (WIN_LENGTH - 1..ROWS).any(|row| {
        (0..=COLS - WIN_LENGTH).any(|col| window_held(board, player, (row, col), (-1, 1)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_no_win_with_three() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            "1......",
            "1...2..",
            "1.111..",
        ]);
        assert!(!has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_win() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".222...",
            ".1111..",
        ]);
        assert!(horizontal(&board, Player::One));
        assert!(has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_does_not_wrap_rows() {
        // Last three of row 4 plus first of row 5 are contiguous only when
        // the grid is flattened.
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            "....111",
            "1......",
        ]);
        assert!(!has_four_in_a_row(&board, Player::One));
    }

    #[test]
    fn test_horizontal_at_right_edge() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "...1111",
        ]);
        assert!(horizontal(&board, Player::One));
    }

    #[test]
    fn test_vertical_win() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            ".1.....",
            ".1.....",
            ".12....",
            ".122...",
        ]);
        assert!(vertical(&board, Player::One));
        assert!(has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_vertical_at_top_of_column() {
        let board = Board::from_diagram([
            "......2",
            "......2",
            "......2",
            "......2",
            "......1",
            "......1",
        ]);
        assert!(vertical(&board, Player::Two));
        assert!(!vertical(&board, Player::One));
    }

    #[test]
    fn test_diagonal_up_win() {
        // (5,1) (4,2) (3,3) (2,4)
        let board = Board::from_diagram([
            ".......",
            ".......",
            "....1..",
            "...11..",
            ".2112..",
            ".1222..",
        ]);
        assert!(diagonal_up(&board, Player::One));
        assert!(!diagonal_down(&board, Player::One));
        assert!(has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_diagonal_down_win() {
        // (2,2) (3,3) (4,4) (5,5)
        let board = Board::from_diagram([
            ".......",
            ".......",
            "..1....",
            "..211..",
            ".21.1..",
            "2122212",
        ]);
        assert!(diagonal_down(&board, Player::One));
        assert!(has_four_in_a_row(&board, Player::One));
    }

    #[test]
    fn test_diagonal_corners() {
        let top_left = Board::from_diagram([
            "2......",
            ".2.....",
            "..2....",
            "...2...",
            ".......",
            ".......",
        ]);
        assert!(diagonal_down(&top_left, Player::Two));

        let bottom_right = Board::from_diagram([
            ".......",
            ".......",
            "......1",
            ".....1.",
            "....1..",
            "...1...",
        ]);
        assert!(diagonal_up(&bottom_right, Player::One));
    }

    #[test]
    fn test_diagonal_down_last_anchor() {
        // (2,3) (3,4) (4,5) (5,6)
        let board = Board::from_diagram([
            ".......",
            ".......",
            "...1...",
            "....1..",
            ".....1.",
            "......1",
        ]);
        assert!(diagonal_down(&board, Player::One));
        assert!(!diagonal_up(&board, Player::One));
        assert!(has_four_in_a_row(&board, Player::One));
    }

    #[test]
    fn test_diagonal_up_top_anchor() {
        // (3,0) (2,1) (1,2) (0,3)
        let board = Board::from_diagram([
            "...2...",
            "..2....",
            ".2.....",
            "2......",
            ".......",
            ".......",
        ]);
        assert!(diagonal_up(&board, Player::Two));
        assert!(!diagonal_down(&board, Player::Two));
        assert!(has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_mixed_diagonal_is_not_a_win() {
        let board = Board::from_diagram([
            ".......",
            ".......",
            "...2...",
            "..1....",
            ".1.....",
            "1......",
        ]);
        assert!(!has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }

    #[test]
    fn test_full_board_without_line() {
        // Columns alternate in pairs so no four ever line up
        let board = Board::from_diagram([
            "1122112",
            "2211221",
            "1122112",
            "2211221",
            "1122112",
            "2211221",
        ]);
        assert!(!has_four_in_a_row(&board, Player::One));
        assert!(!has_four_in_a_row(&board, Player::Two));
    }
}
