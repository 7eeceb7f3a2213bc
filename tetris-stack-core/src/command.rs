//! Menu commands a driver can send to a [`Rack`](crate::Rack), and what they report back.

use std::fmt;
use std::str::FromStr;

use crate::piece::Piece;

/// A driver command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Command {
    /// Consume the front piece of the queue (menu `1`).
    Play,
    /// Move the front piece into the reserve (menu `2`).
    Reserve,
    /// Consume the top reserved piece (menu `3`).
    UseReserved,
    /// Swap queue front with reserve top (menu `4`).
    SwapFrontTop,
    /// Swap the first three of the queue with the top three of the reserve (menu `5`).
    SwapMulti,
    /// Leave the game (menu `0`).
    Quit,
}

impl Command {
    /// Every command in menu order, with its key and label.
    pub const MENU: [(Command, &'static str, &'static str); 6] = [
        (Command::Play, "1", "Play piece"),
        (Command::Reserve, "2", "Reserve piece"),
        (Command::UseReserved, "3", "Use reserved piece"),
        (Command::SwapFrontTop, "4", "Swap queue front with reserve top"),
        (Command::SwapMulti, "5", "Swap first 3 of queue with reserve"),
        (Command::Quit, "0", "Quit"),
    ];
}

/// Input that names no command.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid option {0:?}")]
pub struct ParseCommandError(pub String);

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmd = match s.trim().to_ascii_lowercase().as_str() {
            "1" | "play" => Command::Play,
            "2" | "reserve" => Command::Reserve,
            "3" | "use" => Command::UseReserved,
            "4" | "swap" => Command::SwapFrontTop,
            "5" | "multi" => Command::SwapMulti,
            "0" | "quit" => Command::Quit,
            _ => return Err(ParseCommandError(s.trim().to_string())),
        };
        Ok(cmd)
    }
}

/// Result of a successfully applied command.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    Used(Piece),
    Swapped,
    MultiSwapped,
    Quit,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Played(piece) => write!(f, "Played {piece}"),
            Outcome::Reserved(piece) => write!(f, "Reserved {piece}"),
            Outcome::Used(piece) => write!(f, "Used reserved {piece}"),
            Outcome::Swapped => f.write_str("Swapped queue front with reserve top"),
            Outcome::MultiSwapped => f.write_str("Swapped first 3 of queue with top 3 of reserve"),
            Outcome::Quit => f.write_str("Leaving the game"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::PieceKind;

    #[test]
    fn test_parse_menu_digits() {
        for (cmd, key, _) in Command::MENU {
            assert_eq!(key.parse::<Command>(), Ok(cmd));
        }
    }

    #[test]
    fn test_parse_names() {
        assert_eq!(" Play\n".parse::<Command>(), Ok(Command::Play));
        assert_eq!("USE".parse::<Command>(), Ok(Command::UseReserved));
        assert_eq!("multi".parse::<Command>(), Ok(Command::SwapMulti));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "7".parse::<Command>(),
            Err(ParseCommandError("7".to_string()))
        );
        assert!("".parse::<Command>().is_err());
    }

    #[test]
    fn test_outcome_display() {
        let piece = Piece::new(PieceKind::L, 3);
        assert_eq!(Outcome::Played(piece).to_string(), "Played [L 3]");
        assert_eq!(Outcome::Used(piece).to_string(), "Used reserved [L 3]");
    }
}
