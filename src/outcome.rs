use crate::color::Color;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DecisionReason {
    Checkmate,
    Stalemate,
    Resignation,
    AgreedDraw,
}

impl fmt::Display for DecisionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionReason::Checkmate => "checkmate",
            DecisionReason::Stalemate => "stalemate",
            DecisionReason::Resignation => "resignation",
            DecisionReason::AgreedDraw => "agreed_draw",
        };
        write!(f, "{}", s)
    }
}

/// `Decided` is absorbing: the session refuses further moves once it is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    #[default]
    InProgress,
    Decided {
        reason: DecisionReason,
        winner: Option<Color>,
    },
}

impl Outcome {
    pub fn decided(reason: DecisionReason, winner: Option<Color>) -> Self {
        Outcome::Decided { reason, winner }
    }

    pub fn is_decided(&self) -> bool {
        matches!(self, Outcome::Decided { .. })
    }

    pub fn reason(&self) -> Option<DecisionReason> {
        match self {
            Outcome::InProgress => None,
            Outcome::Decided { reason, .. } => Some(*reason),
        }
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::InProgress => None,
            Outcome::Decided { winner, .. } => *winner,
        }
    }

    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Decided { winner: None, .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in_progress"),
            Outcome::Decided {
                reason,
                winner: Some(color),
            } => write!(f, "{}, {} wins", reason, color),
            Outcome::Decided {
                reason,
                winner: None,
            } => write!(f, "{}, draw", reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::InProgress.winner(), None);
        assert_eq!(
            Outcome::decided(DecisionReason::Checkmate, Some(Color::White)).winner(),
            Some(Color::White)
        );
        assert_eq!(
            Outcome::decided(DecisionReason::Resignation, Some(Color::Black)).winner(),
            Some(Color::Black)
        );
        assert_eq!(
            Outcome::decided(DecisionReason::Stalemate, None).winner(),
            None
        );
    }

    #[test]
    fn test_is_draw() {
        assert!(!Outcome::InProgress.is_draw());
        assert!(!Outcome::decided(DecisionReason::Checkmate, Some(Color::White)).is_draw());
        assert!(Outcome::decided(DecisionReason::Stalemate, None).is_draw());
        assert!(Outcome::decided(DecisionReason::AgreedDraw, None).is_draw());
    }

    #[test]
    fn test_is_decided() {
        assert!(!Outcome::InProgress.is_decided());
        assert!(Outcome::decided(DecisionReason::AgreedDraw, None).is_decided());
        assert_eq!(Outcome::default(), Outcome::InProgress);
    }

    #[test]
    fn test_to_string() {
        assert_eq!(Outcome::InProgress.to_string(), "in_progress");
        assert_eq!(
            Outcome::decided(DecisionReason::Checkmate, Some(Color::White)).to_string(),
            "checkmate, White wins"
        );
        assert_eq!(
            Outcome::decided(DecisionReason::Stalemate, None).to_string(),
            "stalemate, draw"
        );
        assert_eq!(
            Outcome::decided(DecisionReason::AgreedDraw, None).to_string(),
            "agreed_draw, draw"
        );
    }
}
