use std::fmt;

use crate::chess_errors::ChessErrors;

/// A square on the 8x8 board.
///
/// Rank 0 is the back rank of the dark (black) side, file 0 is the "a" file.
/// Fields are private, so every value is on the board: build one through
/// `new`, `offset` or `all`.
///
/// ```compile_fail
/// use powerup_chess::board_location::Coordinate;
/// let off_board = Coordinate { rank: 5, file: 12 };
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    rank: u8,
    file: u8,
}

impl Coordinate {
    /// Builds a coordinate, rejecting anything outside `0..=7`.
    pub fn new(rank: u8, file: u8) -> Result<Self, ChessErrors> {
        if rank > 7 || file > 7 {
            Err(ChessErrors::InvalidCoordinate { rank, file })
        } else {
            Ok(Coordinate { rank, file })
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    /// Moves a coordinate by a rank and file offset.
    ///
    /// # Arguments
    ///
    /// * `d_rank` - The rank offset.
    /// * `d_file` - The file offset.
    ///
    /// # Returns
    ///
    /// * `Option<Coordinate>` - The new coordinate if it is still on the board.
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Coordinate> {
        let rank = self.rank as i8 + d_rank;
        let file = self.file as i8 + d_file;
        if (rank < 0) | (rank > 7) | (file < 0) | (file > 7) {
            None
        } else {
            Some(Coordinate {
                rank: rank as u8,
                file: file as u8,
            })
        }
    }

    /// Row-major index in `0..64`.
    #[inline]
    pub const fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    /// Every square on the board, rank by rank.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Coordinate { rank, file }))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rank, self.file)
    }
}
