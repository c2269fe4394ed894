//! Line-oriented protocol loop driving a game session.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use tictac_engine::SearchResult;

use crate::command::{Command, GameOption, PositionInfo, parse_command};
use crate::error::ProtocolError;
use crate::session::{Phase, Session, SessionConfig};

/// The protocol engine, holding the current game session.
///
/// Commands are handled synchronously: a full search finishes well within
/// a single command's turnaround, so no worker thread is needed.
pub struct ProtocolEngine {
    session: Session,
}

impl ProtocolEngine {
    /// Create an engine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(config: SessionConfig) -> Self {
        Self {
            session: Session::new(config),
        }
    }

    /// The current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read commands from `input` until `quit` or end of input, writing replies to `output`.
    ///
    /// Rejected commands are reported on `output` as `error` lines and do not
    /// stop the loop; only I/O failures are returned.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), ProtocolError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let command = match parse_command(trimmed) {
                Ok(command) => command,
                Err(e) => {
                    warn!(error = %e, "parse error");
                    writeln!(output, "error {e}")?;
                    output.flush()?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            match self.handle(command, output) {
                Ok(()) => {}
                Err(ProtocolError::Io { source }) => return Err(ProtocolError::Io { source }),
                Err(e) => {
                    warn!(error = %e, "command rejected");
                    writeln!(output, "error {e}")?;
                }
            }
            output.flush()?;
        }

        info!("tictac shutting down");
        Ok(())
    }

    /// Execute one command.
    pub fn handle<W: Write>(&mut self, command: Command, output: &mut W) -> Result<(), ProtocolError> {
        match command {
            Command::Hello => self.handle_hello(output),
            Command::IsReady => {
                writeln!(output, "readyok")?;
                Ok(())
            }
            Command::NewGame => self.handle_newgame(output),
            Command::Position(info) => self.handle_position(info, output),
            Command::Move(square) => {
                self.session.play_player(square)?;
                self.write_state(output)?;
                self.reply_if_computer_turn(output)
            }
            Command::Go => self.handle_go(output),
            Command::Board => self.handle_board(output),
            Command::SetOption(option) => {
                self.handle_setoption(option);
                Ok(())
            }
            Command::Quit => Ok(()),
            Command::Unknown(cmd) => {
                if !cmd.is_empty() {
                    debug!(cmd = %cmd, "ignoring unknown command");
                }
                Ok(())
            }
        }
    }

    fn handle_hello<W: Write>(&self, output: &mut W) -> Result<(), ProtocolError> {
        let config = self.session.config();
        writeln!(output, "id name tictac")?;
        writeln!(
            output,
            "option name FirstTurn type combo default {} var player var computer",
            config.first_turn.name()
        )?;
        writeln!(
            output,
            "option name TieBreak type combo default {} var ascending var quickest",
            config.tie_break.name()
        )?;
        writeln!(output, "hellook")?;
        Ok(())
    }

    fn handle_newgame<W: Write>(&mut self, output: &mut W) -> Result<(), ProtocolError> {
        self.session.reset();
        self.write_state(output)?;
        self.reply_if_computer_turn(output)
    }

    fn handle_position<W: Write>(&mut self, info: PositionInfo, output: &mut W) -> Result<(), ProtocolError> {
        self.session.set_position(info.board, info.to_move)?;
        self.write_state(output)?;
        self.reply_if_computer_turn(output)
    }

    fn handle_go<W: Write>(&self, output: &mut W) -> Result<(), ProtocolError> {
        let (moves, best) = self.session.analyze()?;
        for mv in &moves {
            writeln!(
                output,
                "info move {} score {} plies {}",
                mv.square, mv.score, mv.plies
            )?;
        }
        write_bestmove(output, &best)?;
        Ok(())
    }

    fn handle_board<W: Write>(&self, output: &mut W) -> Result<(), ProtocolError> {
        writeln!(output, "{}", self.session.board().pretty())?;
        writeln!(output, "message {}", self.session.message())?;
        Ok(())
    }

    fn handle_setoption(&mut self, option: GameOption) {
        let mut config = self.session.config();
        match option {
            GameOption::FirstTurn(mark) => config.first_turn = mark,
            GameOption::TieBreak(tie_break) => config.tie_break = tie_break,
        }
        debug!(
            first_turn = config.first_turn.name(),
            tie_break = config.tie_break.name(),
            "configuration updated"
        );
        self.session.set_config(config);
    }

    /// Let the computer move if it is its turn.
    fn reply_if_computer_turn<W: Write>(&mut self, output: &mut W) -> Result<(), ProtocolError> {
        if self.session.phase() != Phase::ComputerTurn {
            return Ok(());
        }
        let result = self.session.play_computer()?;
        write_bestmove(output, &result)?;
        self.write_state(output)
    }

    fn write_state<W: Write>(&self, output: &mut W) -> Result<(), ProtocolError> {
        writeln!(output, "board {}", self.session.board())?;
        writeln!(output, "message {}", self.session.message())?;
        if let Phase::GameOver(outcome) = self.session.phase() {
            writeln!(output, "result {outcome}")?;
        }
        Ok(())
    }
}

impl Default for ProtocolEngine {
    fn default() -> Self {
        Self::new()
    }
}

fn write_bestmove<W: Write>(output: &mut W, result: &SearchResult) -> Result<(), ProtocolError> {
    match result.best_move {
        Some(square) => writeln!(output, "bestmove {square} score {}", result.score)?,
        None => writeln!(output, "bestmove none score {}", result.score)?,
    }
    Ok(())
}
