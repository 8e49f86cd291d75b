use crate::board::Board;
use crate::game::Game;
use crate::r#move::Move;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Serialize Board as a FEN piece placement
impl Serialize for Board {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_fen())
    }
}

/// Deserialize Board from a FEN piece placement
impl<'de> Deserialize<'de> for Board {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fen = String::deserialize(deserializer)?;
        Board::from_fen(&fen).map_err(serde::de::Error::custom)
    }
}

/// Serialize Game as placement plus side to move. The move log is not kept.
impl Serialize for Game {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_fen())
    }
}

impl<'de> Deserialize<'de> for Game {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let fen = String::deserialize(deserializer)?;
        Game::from_fen(&fen).map_err(serde::de::Error::custom)
    }
}

/// Serialize Move as coordinate text
impl Serialize for Move {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_lan())
    }
}

impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let lan = String::deserialize(deserializer)?;
        Move::from_lan(&lan).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::game::GameSnapshot;
    use crate::pieces::PieceKind;
    use crate::square::Square;

    #[test]
    fn test_game_serde() {
        let mut game = Game::standard();
        for lan in ["e2e4", "e7e5", "g1f3", "b8c6"] {
            game.apply_lan(lan).expect("legal move");
        }

        let json = serde_json::to_string(&game).expect("serialize game");
        let restored: Game = serde_json::from_str(&json).expect("deserialize game");

        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.turn(), Color::White);
    }

    #[test]
    fn test_move_serde() {
        let mv = Move::with_promotion(Square::new(6, 4), Square::new(7, 4), PieceKind::Queen);

        let json = serde_json::to_string(&mv).expect("serialize move");
        assert_eq!(json, "\"e7e8q\"");

        let restored: Move = serde_json::from_str(&json).expect("deserialize move");
        assert_eq!(restored, mv);
    }

    #[test]
    fn test_invalid_move_text_is_rejected() {
        assert!(serde_json::from_str::<Move>("\"e2\"").is_err());
        assert!(serde_json::from_str::<Board>("\"8/8\"").is_err());
    }

    #[test]
    fn test_snapshot_serde() {
        let mut game = Game::standard();
        let snapshot = game.apply_lan("d2d4").expect("legal move");

        let json = serde_json::to_string(&snapshot).expect("serialize snapshot");
        let restored: GameSnapshot = serde_json::from_str(&json).expect("deserialize snapshot");

        assert_eq!(restored, snapshot);
    }
}
