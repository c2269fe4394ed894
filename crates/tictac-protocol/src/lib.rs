//! Text protocol and game session for tictac.

pub mod command;
pub mod engine;
pub mod error;
pub mod session;

pub use command::{Command, GameOption, PositionInfo, parse_command};
pub use engine::ProtocolEngine;
pub use error::{ProtocolError, SessionError};
pub use session::{Phase, Session, SessionConfig};
