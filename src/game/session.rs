use tracing::{debug, info, warn};

use super::board::COLS;
use super::{has_four_in_a_row, Board, Player};

/// Where a round currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    /// Terminal until [`GameSession::start_new_game`] is called.
    Won(Player),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveReason {
    /// Column index outside 0..=6
    OutOfRange,
    ColumnFull,
}

/// Result of [`GameSession::submit_move`]. Every variant is an ordinary,
/// recoverable outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Token placed, turn passed to the other player
    MoveAccepted,
    /// Token placed and completed a line; the round is over
    GameWon(Player),
    /// Nothing changed, the same player should choose again
    InvalidMove(InvalidMoveReason),
    /// The round already has a winner
    GameAlreadyOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewGameOutcome {
    Started,
    /// Rejected because nobody has won yet; nothing was reset
    GameInProgress,
}

/// One round of Connect Four: the board and whose turn it is, always
/// created and reset together.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    active_player: Player,
    phase: Phase,
    moves_played: usize,
}

impl GameSession {
    /// Fresh round with an empty board and player one to move
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            active_player: Player::One,
            phase: Phase::AwaitingMove,
            moves_played: 0,
        }
    }

    /// Player whose token the next accepted move places. After a win this
    /// is the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::Won(player) => Some(player),
            Phase::AwaitingMove => None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accepted moves since the round started
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Every column is full and nobody has won. No move can be accepted;
    /// the caller decides whether to abandon the round via
    /// [`GameSession::new`].
    pub fn is_stalled(&self) -> bool {
        self.phase == Phase::AwaitingMove && self.board.is_full()
    }

    /// Drop the active player's token into `column`.
    ///
    /// Any integer is accepted; values outside 0..=6 are rejected as
    /// [`InvalidMoveReason::OutOfRange`] without touching the session.
    pub fn submit_move(&mut self, column: i64) -> MoveOutcome {
        if let Phase::Won(winner) = self.phase {
            debug!(column, ?winner, "move rejected, game already over");
            return MoveOutcome::GameAlreadyOver;
        }

        let Some(col) = usize::try_from(column).ok().filter(|&c| c < COLS) else {
            debug!(column, player = ?self.active_player, "move rejected, column out of range");
            return MoveOutcome::InvalidMove(InvalidMoveReason::OutOfRange);
        };

        if !self.board.is_column_open(col) {
            debug!(column, player = ?self.active_player, "move rejected, column full");
            return MoveOutcome::InvalidMove(InvalidMoveReason::ColumnFull);
        }

        let Some(row) = self.board.drop_piece(col, self.active_player) else {
            return MoveOutcome::InvalidMove(InvalidMoveReason::ColumnFull);
        };
        self.moves_played += 1;
        debug!(row, col, player = ?self.active_player, "token placed");

        if has_four_in_a_row(&self.board, self.active_player) {
            self.phase = Phase::Won(self.active_player);
            info!(
                winner = ?self.active_player,
                moves = self.moves_played,
                "four in a row"
            );
            return MoveOutcome::GameWon(self.active_player);
        }

        self.active_player = self.active_player.other();
        if self.board.is_full() {
            warn!(moves = self.moves_played, "board is full with no winner");
        }
        MoveOutcome::MoveAccepted
    }

    /// Reset board and turn together for another round. Only valid once the
    /// current round has a winner.
    pub fn start_new_game(&mut self) -> NewGameOutcome {
        if self.phase == Phase::AwaitingMove {
            debug!("new game rejected, round still in progress");
            return NewGameOutcome::GameInProgress;
        }

        self.board.reset();
        self.active_player = Player::One;
        self.phase = Phase::AwaitingMove;
        self.moves_played = 0;
        info!("new game started");
        NewGameOutcome::Started
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
