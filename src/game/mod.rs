//! Core Connect Four game logic: board representation, player identity,
//! four-in-a-row detection, and the turn state machine for one session.

mod board;
mod player;
mod session;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use session::{GameSession, InvalidMoveReason, MoveOutcome, NewGameOutcome, Phase};
pub use win::{has_four_in_a_row, WIN_LENGTH};
