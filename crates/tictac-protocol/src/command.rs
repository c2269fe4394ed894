//! Text protocol command parsing.

use tictac_core::{Board, Mark, Square};
use tictac_engine::TieBreak;

use crate::error::ProtocolError;

/// Board and side to move for the `position` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionInfo {
    pub board: Board,
    pub to_move: Mark,
}

/// Options adjustable via `setoption`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOption {
    /// Who moves first after `newgame`.
    FirstTurn(Mark),
    /// How the computer chooses between equally scored moves.
    TieBreak(TieBreak),
}

/// A parsed protocol command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello` -- identify the engine and list options.
    Hello,
    /// `isready` -- synchronization ping.
    IsReady,
    /// `newgame` -- clear the board and start over.
    NewGame,
    /// `position` -- install a board with a side to move.
    Position(PositionInfo),
    /// `move` -- the player marks a square.
    Move(Square),
    /// `go` -- score every move for the side to move without playing.
    Go,
    /// `board` -- print the current grid.
    Board,
    /// `setoption` -- change a configuration knob.
    SetOption(GameOption),
    /// `quit` -- exit.
    Quit,
    /// Unrecognized command (ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "hello" => Ok(Command::Hello),
        "isready" => Ok(Command::IsReady),
        "newgame" => Ok(Command::NewGame),
        "go" => Ok(Command::Go),
        "board" | "d" => Ok(Command::Board),
        "quit" => Ok(Command::Quit),
        "position" => parse_position(&tokens[1..]),
        "move" => parse_move(&tokens[1..]),
        "setoption" => parse_setoption(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

/// Parse `position <board> [player|computer]`.
///
/// `position startpos` is accepted as the empty board.
fn parse_position(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let notation = tokens.first().ok_or(ProtocolError::MalformedPosition)?;

    let board = if *notation == "startpos" {
        Board::empty()
    } else {
        notation.parse::<Board>().map_err(|source| ProtocolError::InvalidBoard {
            board: notation.to_string(),
            source,
        })?
    };

    let to_move = match tokens.get(1) {
        Some(side) => Mark::from_name(side).ok_or_else(|| ProtocolError::InvalidSide {
            value: side.to_string(),
        })?,
        None => Mark::Player,
    };

    Ok(Command::Position(PositionInfo { board, to_move }))
}

/// Parse `move <0-8>`.
fn parse_move(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let value = tokens.first().ok_or(ProtocolError::MissingSquare)?;
    let square = value
        .parse::<u8>()
        .ok()
        .and_then(Square::from_index)
        .ok_or_else(|| ProtocolError::InvalidSquare {
            value: value.to_string(),
        })?;
    Ok(Command::Move(square))
}

/// Parse `setoption name <name> value <value>`.
fn parse_setoption(tokens: &[&str]) -> Result<Command, ProtocolError> {
    let name_pos = tokens
        .iter()
        .position(|&t| t == "name")
        .ok_or(ProtocolError::MalformedOption)?;
    let value_pos = tokens
        .iter()
        .position(|&t| t == "value")
        .ok_or(ProtocolError::MalformedOption)?;
    if value_pos <= name_pos + 1 || value_pos + 1 >= tokens.len() {
        return Err(ProtocolError::MalformedOption);
    }

    let name = tokens[name_pos + 1..value_pos].join(" ");
    let value = tokens[value_pos + 1..].join(" ");
    let invalid = || ProtocolError::InvalidOptionValue {
        name: name.clone(),
        value: value.clone(),
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "firstturn" => GameOption::FirstTurn(
            Mark::from_name(&value.to_ascii_lowercase()).ok_or_else(invalid)?,
        ),
        "tiebreak" => GameOption::TieBreak(TieBreak::from_name(&value).ok_or_else(invalid)?),
        _ => return Err(ProtocolError::UnknownOption { name: name.clone() }),
    };

    Ok(Command::SetOption(option))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_commands() {
        assert_eq!(parse_command("hello").unwrap(), Command::Hello);
        assert_eq!(parse_command("isready").unwrap(), Command::IsReady);
        assert_eq!(parse_command("newgame").unwrap(), Command::NewGame);
        assert_eq!(parse_command("go").unwrap(), Command::Go);
        assert_eq!(parse_command("board").unwrap(), Command::Board);
        assert_eq!(parse_command("d").unwrap(), Command::Board);
        assert_eq!(parse_command("quit").unwrap(), Command::Quit);
    }

    #[test]
    fn parse_move_square() {
        assert_eq!(
            parse_command("move 4").unwrap(),
            Command::Move(Square::CENTER)
        );
        assert_eq!(
            parse_command("  move   0  ").unwrap(),
            Command::Move(Square::TOP_LEFT)
        );
    }

    #[test]
    fn parse_move_errors() {
        assert!(matches!(
            parse_command("move"),
            Err(ProtocolError::MissingSquare)
        ));
        assert!(matches!(
            parse_command("move 9"),
            Err(ProtocolError::InvalidSquare { .. })
        ));
        assert!(matches!(
            parse_command("move e4"),
            Err(ProtocolError::InvalidSquare { .. })
        ));
    }

    #[test]
    fn parse_position_default_side() {
        let cmd = parse_command("position XX.OO....").unwrap();
        match cmd {
            Command::Position(info) => {
                assert_eq!(info.board.to_string(), "XX.OO....");
                assert_eq!(info.to_move, Mark::Player);
            }
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_with_side() {
        let cmd = parse_command("position XX./OO./... computer").unwrap();
        match cmd {
            Command::Position(info) => assert_eq!(info.to_move, Mark::Computer),
            _ => panic!("expected Position"),
        }
    }

    #[test]
    fn parse_position_startpos() {
        let cmd = parse_command("position startpos").unwrap();
        assert_eq!(
            cmd,
            Command::Position(PositionInfo {
                board: Board::empty(),
                to_move: Mark::Player
            })
        );
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(
            parse_command("position"),
            Err(ProtocolError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position XXX"),
            Err(ProtocolError::InvalidBoard { .. })
        ));
        assert!(matches!(
            parse_command("position ......... nobody"),
            Err(ProtocolError::InvalidSide { .. })
        ));
    }

    #[test]
    fn parse_setoption_first_turn() {
        assert_eq!(
            parse_command("setoption name FirstTurn value computer").unwrap(),
            Command::SetOption(GameOption::FirstTurn(Mark::Computer))
        );
    }

    #[test]
    fn parse_setoption_tie_break() {
        assert_eq!(
            parse_command("setoption name TieBreak value ascending").unwrap(),
            Command::SetOption(GameOption::TieBreak(TieBreak::Ascending))
        );
    }

    #[test]
    fn parse_setoption_errors() {
        assert!(matches!(
            parse_command("setoption FirstTurn computer"),
            Err(ProtocolError::MalformedOption)
        ));
        assert!(matches!(
            parse_command("setoption name FirstTurn value"),
            Err(ProtocolError::MalformedOption)
        ));
        assert!(matches!(
            parse_command("setoption name Depth value 3"),
            Err(ProtocolError::UnknownOption { .. })
        ));
        assert!(matches!(
            parse_command("setoption name FirstTurn value nobody"),
            Err(ProtocolError::InvalidOptionValue { .. })
        ));
    }

    #[test]
    fn parse_unknown_and_empty() {
        assert_eq!(
            parse_command("foobar").unwrap(),
            Command::Unknown("foobar".to_string())
        );
        assert_eq!(parse_command("").unwrap(), Command::Unknown(String::new()));
    }
}
