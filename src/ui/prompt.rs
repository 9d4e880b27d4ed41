//! Line-based play over any reader/writer pair: prints the board, reads a
//! column number per line, and asks to play again after each round.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::text::TextRenderer;
use crate::config::AppConfig;
use crate::game::{GameSession, MoveOutcome, Player};

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RoundEnd {
    Won(Player),
    Stalled,
    /// Input closed mid-round
    Eof,
}

pub struct PromptLoop<R, W> {
    session: GameSession,
    config: AppConfig,
    color: bool,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptLoop<R, W> {
    pub fn new(config: AppConfig, input: R, output: W) -> Self {
        let color = config.ui.color;
        PromptLoop {
            session: GameSession::new(),
            config,
            color,
            input,
            output,
        }
    }

    /// Override the configured color setting
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Play rounds until the players decline a rematch or input runs out
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            match self.play_round()? {
                RoundEnd::Eof => return Ok(()),
                RoundEnd::Won(winner) => {
                    self.print_board()?;
                    let name = &self.config.players.style(winner).name;
                    writeln!(self.output, "{name} is the winner!")?;
                    if !self.ask_replay()? {
                        return self.farewell();
                    }
                    self.session.start_new_game();
                }
                RoundEnd::Stalled => {
                    self.print_board()?;
                    writeln!(self.output, "The board is full and nobody won.")?;
                    if !self.ask_replay()? {
                        return self.farewell();
                    }
                    self.session = GameSession::new();
                }
            }
        }
    }

    fn play_round(&mut self) -> io::Result<RoundEnd> {
        loop {
            if self.session.is_stalled() {
                return Ok(RoundEnd::Stalled);
            }

            let name = &self.config.players.style(self.session.active_player()).name;
            writeln!(self.output, "{name}, it's your turn!")?;
            writeln!(self.output, "Choose a column between 0 and 6 that isn't full.")?;
            self.print_board()?;

            let Some(line) = self.read_line()? else {
                return Ok(RoundEnd::Eof);
            };
            let Ok(column) = line.trim().parse::<i64>() else {
                debug!(input = %line.trim(), "unparseable column");
                writeln!(self.output, "Invalid choice.")?;
                continue;
            };

            match self.session.submit_move(column) {
                MoveOutcome::MoveAccepted => {}
                MoveOutcome::GameWon(winner) => return Ok(RoundEnd::Won(winner)),
                MoveOutcome::InvalidMove(_) => writeln!(self.output, "Invalid choice.")?,
                MoveOutcome::GameAlreadyOver => {
                    return Ok(RoundEnd::Won(self.session.active_player()))
                }
            }
        }
    }

    fn ask_replay(&mut self) -> io::Result<bool> {
        writeln!(
            self.output,
            "Would you like to play again? Type 'YES' if you do, or anything else if you don't."
        )?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("yes")))
    }

    fn farewell(&mut self) -> io::Result<()> {
        writeln!(self.output, "Thank you for playing!")
    }

    fn print_board(&mut self) -> io::Result<()> {
        let text = TextRenderer::new(&self.config.players, self.color)
            .render_board(self.session.board());
        write!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Next input line, or `None` at end of input. Invalid UTF-8 is replaced
    /// rather than reported, so it is rejected like any other bad choice.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
