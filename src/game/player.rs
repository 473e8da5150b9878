use serde::{Deserialize, Serialize};

/// Contents of one board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscState {
    Empty,
    Black,
    White,
}

impl DiscState {
    /// The player owning this disc, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            DiscState::Empty => None,
            DiscState::Black => Some(Player::Black),
            DiscState::White => Some(Player::White),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub const BOTH: [Player; 2] = [Player::Black, Player::White];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to the disc it places
    pub fn to_disc(self) -> DiscState {
        match self {
            Player::Black => DiscState::Black,
            Player::White => DiscState::White,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Black.other(), Player::White);
        assert_eq!(Player::White.other(), Player::Black);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Black.name(), "Black");
        assert_eq!(Player::White.name(), "White");
    }

    #[test]
    fn test_disc_owner_roundtrip() {
        for player in Player::BOTH {
            assert_eq!(player.to_disc().owner(), Some(player));
        }
        assert_eq!(DiscState::Empty.owner(), None);
    }
}
