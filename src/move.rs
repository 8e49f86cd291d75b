use crate::color::Color;
use crate::error::ParseError;
use crate::pieces::PieceKind;
use crate::square::Square;
use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct MoveFlags: u8 {
        const CAPTURE = 0b00000001;
        const DOUBLE_PUSH = 0b00000010;
        const PROMOTION = 0b00000100;
        const CHECK = 0b00001000;
    }
}

/// A move proposed by a caller, not yet validated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(from: Square, to: Square, promotion: PieceKind) -> Self {
        Move {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    /// Parse coordinate text such as `e2e4` or `e7e8q`.
    pub fn from_lan(lan: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidMove(lan.to_string());

        if !lan.is_ascii() || !(4..=5).contains(&lan.len()) {
            return Err(invalid());
        }

        let from = Square::from_algebraic(&lan[0..2])?;
        let to = Square::from_algebraic(&lan[2..4])?;

        let promotion = match lan[4..].chars().next() {
            None => None,
            Some(c) => Some(PieceKind::from_char(c).ok_or_else(invalid)?),
        };

        Ok(Move {
            from,
            to,
            promotion,
        })
    }

    pub fn to_lan(&self) -> String {
        let mut lan = format!("{}{}", self.from, self.to);

        if let Some(promo) = self.promotion {
            lan.push(promo.to_char());
        }

        lan
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_lan())
    }
}

/// A committed move as stored in the game's move log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveRecord {
    pub mover: Color,
    pub kind: PieceKind,
    pub from: Square,
    pub to: Square,
    pub captured: Option<PieceKind>,
    pub promotion: Option<PieceKind>,
    pub flags: MoveFlags,
}

impl MoveRecord {
    pub fn as_move(&self) -> Move {
        Move {
            from: self.from,
            to: self.to,
            promotion: self.promotion,
        }
    }
}

impl std::fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_move())?;
        if self.flags.contains(MoveFlags::CHECK) {
            write!(f, "+")?;
        }
        Ok(())
    }
}
