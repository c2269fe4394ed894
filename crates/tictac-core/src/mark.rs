//! The two marks a cell can hold.

use std::fmt;
use std::ops::Not;

/// A mark on the board: the human player's `X` or the computer's `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    Player = 0,
    Computer = 1,
}

impl Mark {
    /// Total number of marks.
    pub const COUNT: usize = 2;

    /// All marks in index order.
    pub const ALL: [Mark; 2] = [Mark::Player, Mark::Computer];

    /// Return the index (0 for Player, 1 for Computer).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opposing mark.
    #[inline]
    pub const fn flip(self) -> Mark {
        match self {
            Mark::Player => Mark::Computer,
            Mark::Computer => Mark::Player,
        }
    }

    /// The board symbol for this mark.
    #[inline]
    pub const fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Computer => 'O',
        }
    }

    /// Parse a board symbol (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::Player),
            'O' | 'o' => Some(Mark::Computer),
            _ => None,
        }
    }

    /// Parse a side name as used by the text protocol.
    pub fn from_name(name: &str) -> Option<Mark> {
        match name {
            "player" | "x" | "X" => Some(Mark::Player),
            "computer" | "o" | "O" => Some(Mark::Computer),
            _ => None,
        }
    }

    /// Lowercase side name.
    pub const fn name(self) -> &'static str {
        match self {
            Mark::Player => "player",
            Mark::Computer => "computer",
        }
    }
}

impl Not for Mark {
    type Output = Mark;

    #[inline]
    fn not(self) -> Mark {
        self.flip()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Mark;

    #[test]
    fn index_values() {
        assert_eq!(Mark::Player.index(), 0);
        assert_eq!(Mark::Computer.index(), 1);
    }

    #[test]
    fn flip_and_not() {
        assert_eq!(Mark::Player.flip(), Mark::Computer);
        assert_eq!(!Mark::Computer, Mark::Player);
        assert_eq!(!!Mark::Player, Mark::Player);
    }

    #[test]
    fn symbols() {
        assert_eq!(format!("{}", Mark::Player), "X");
        assert_eq!(format!("{}", Mark::Computer), "O");
        assert_eq!(Mark::from_symbol('x'), Some(Mark::Player));
        assert_eq!(Mark::from_symbol('O'), Some(Mark::Computer));
        assert_eq!(Mark::from_symbol('.'), None);
    }

    #[test]
    fn names() {
        assert_eq!(Mark::from_name("computer"), Some(Mark::Computer));
        assert_eq!(Mark::from_name("player"), Some(Mark::Player));
        assert_eq!(Mark::from_name("nobody"), None);
        assert_eq!(Mark::Computer.name(), "computer");
    }
}
