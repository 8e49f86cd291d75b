use std::fmt;

use crate::error::ParseError;

pub const BOARD_SIZE: usize = 8;

/// A board coordinate. Rank 0 is White's back rank, file 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    pub rank: usize,
    pub file: usize,
}

impl Square {
    pub fn new(rank: usize, file: usize) -> Self {
        Square { rank, file }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(rank: usize, file: usize) -> Option<Self> {
        let square = Square { rank, file };
        square.is_valid().then_some(square)
    }

    pub fn is_valid(&self) -> bool {
        self.rank < BOARD_SIZE && self.file < BOARD_SIZE
    }

    /// Step by the given rank/file deltas, or `None` when that leaves the board.
    pub fn offset(&self, d_rank: i32, d_file: i32) -> Option<Square> {
        let rank = self.rank as i32 + d_rank;
        let file = self.file as i32 + d_file;

        if (0..BOARD_SIZE as i32).contains(&rank) && (0..BOARD_SIZE as i32).contains(&file) {
            Some(Square::new(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// All 64 squares, rank by rank starting from rank 0.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|rank| (0..BOARD_SIZE).map(move |file| Square::new(rank, file)))
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", (b'a' + self.file as u8) as char, self.rank + 1)
    }

    pub fn from_algebraic(s: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidSquare(s.to_string());

        let mut chars = s.chars();
        let (Some(file_char), Some(rank_char), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(invalid());
        };

        if !('a'..='h').contains(&file_char) || !('1'..='8').contains(&rank_char) {
            return Err(invalid());
        }

        Ok(Square::new(
            (rank_char as u8 - b'1') as usize,
            (file_char as u8 - b'a') as usize,
        ))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.to_algebraic())
        } else {
            write!(f, "({}, {})", self.rank, self.file)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_creation() {
        let sq = Square::new(3, 4);
        assert_eq!(sq.rank, 3);
        assert_eq!(sq.file, 4);
    }

    #[test]
    fn test_try_new_rejects_off_board() {
        assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
        assert_eq!(Square::try_new(8, 0), None);
        assert_eq!(Square::try_new(0, 8), None);
    }

    #[test]
    fn test_square_algebraic() {
        assert_eq!(Square::new(0, 0).to_algebraic(), "a1");
        assert_eq!(Square::new(7, 7).to_algebraic(), "h8");
        assert_eq!(Square::new(3, 4).to_algebraic(), "e4");
    }

    #[test]
    fn test_square_from_algebraic() {
        let sq = Square::from_algebraic("e4").expect("e4 should parse");
        assert_eq!(sq, Square::new(3, 4));

        let sq = Square::from_algebraic("h8").expect("h8 should parse");
        assert_eq!(sq, Square::new(7, 7));

        assert!(Square::from_algebraic("i1").is_err());
        assert!(Square::from_algebraic("a9").is_err());
        assert!(Square::from_algebraic("a").is_err());
        assert!(Square::from_algebraic("a10").is_err());
    }

    #[test]
    fn test_offset_edges() {
        let corner = Square::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 2), Some(Square::new(1, 2)));

        let far = Square::new(7, 7);
        assert_eq!(far.offset(1, 0), None);
        assert_eq!(far.offset(-2, -1), Some(Square::new(5, 6)));
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0));
        assert_eq!(squares[63], Square::new(7, 7));
    }
}
