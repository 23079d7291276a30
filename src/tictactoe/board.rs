//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the grid
pub const SIZE: usize = 3;

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// The mark occupying this cell, if any
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
            Cell::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// One of the two players' symbols. X always moves first and maximizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Get the opponent mark
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }

    /// Terminal utility of a win by this mark
    pub fn utility(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// A zero-based `(row, col)` coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: usize,
    pub col: usize,
}

impl Move {
    /// Create a move, validating it lies on the grid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either coordinate is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < SIZE && col < SIZE {
            Ok(Move { row, col })
        } else {
            Err(crate::Error::OutOfBounds { row, col })
        }
    }

    /// Create a move from a row-major index (0-8).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if the index is >= 9.
    pub fn from_index(index: usize) -> Result<Self, crate::Error> {
        Self::new(index / SIZE, index % SIZE)
    }

    /// Row-major index (0-8)
    pub fn index(&self) -> usize {
        self.row * SIZE + self.col
    }

    pub fn is_corner(&self) -> bool {
        self.row != 1 && self.col != 1
    }

    pub fn is_center(&self) -> bool {
        self.row == 1 && self.col == 1
    }

    fn in_bounds(&self) -> bool {
        self.row < SIZE && self.col < SIZE
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Parse `"row,col"` (whitespace tolerated, parentheses optional).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::Error::InvalidMoveFormat {
            input: s.to_string(),
        };
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let (row, col) = trimmed.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse::<usize>().map_err(|_| invalid())?;
        let col = col.trim().parse::<usize>().map_err(|_| invalid())?;
        Move::new(row, col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// A 3x3 row-major grid of cells.
///
/// `Board` is `Copy`: every transition produces a fresh value, so sibling
/// branches of a search never share storage. The player to move is derived
/// from the piece counts rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Create the empty starting board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Build a board from explicit rows without validating piece counts.
    pub fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Board { cells }
    }

    /// Helper: Parse 9 cells from a slice of characters.
    ///
    /// # Errors
    ///
    /// Returns error if the slice does not hold exactly 9 characters or any
    /// character is invalid.
    fn parse_cells(chars: &[char], context: &str) -> Result<[[Cell; SIZE]; SIZE], crate::Error> {
        if chars.len() != SIZE * SIZE {
            return Err(crate::Error::InvalidBoardLength {
                expected: SIZE * SIZE,
                got: chars.len(),
                context: context.to_string(),
            });
        }

        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (i, &c) in chars.iter().enumerate() {
            cells[i / SIZE][i % SIZE] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: context.to_string(),
                })?;
        }

        Ok(cells)
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in self.cells.iter().flatten() {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain 9 cell characters once whitespace and `|`
    /// separators are removed, so `"XX.|.O.|..."` and `"XX. .O. ..."` both
    /// describe the same board.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The string does not hold exactly 9 cell characters
    /// - Any character is not a valid cell representation
    /// - The piece counts are not balanced (X equal to O or one ahead)
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        let board = Board {
            cells: Self::parse_cells(&chars, s)?,
        };

        let count = board.count_pieces();
        if count.x != count.o && count.x != count.o + 1 {
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// Get the 9-character row-major encoding
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|&c| c.to_char()).collect()
    }

    /// Rows of the grid
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Get cell at a coordinate. Returns `None` when out of bounds.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Player to move, derived from the piece counts.
    ///
    /// O moves when X has placed more pieces, otherwise X moves. Boards with
    /// unbalanced counts still get an answer but it carries no meaning.
    pub fn current_player(&self) -> Mark {
        let count = self.count_pieces();
        if count.x > count.o { Mark::O } else { Mark::X }
    }

    /// Every empty coordinate in row-major order.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(SIZE * SIZE);
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                if cell.is_empty() {
                    moves.push(Move { row, col });
                }
            }
        }
        moves
    }

    /// Check whether a move names an empty cell on the grid
    pub fn is_legal(&self, mv: Move) -> bool {
        self.get(mv).is_some_and(Cell::is_empty)
    }

    /// Place the current player's mark and return the resulting board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] for coordinates off the grid and
    /// [`crate::Error::InvalidMove`] when the cell is occupied. The receiver
    /// is never modified.
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, mv: Move) -> Result<Board, crate::Error> {
        if !mv.in_bounds() {
            return Err(crate::Error::OutOfBounds {
                row: mv.row,
                col: mv.col,
            });
        }

        if !self.cells[mv.row][mv.col].is_empty() {
            return Err(crate::Error::InvalidMove {
                row: mv.row,
                col: mv.col,
            });
        }

        let mut next = *self;
        next.cells[mv.row][mv.col] = self.current_player().to_cell();
        Ok(next)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Mark> {
        LineAnalyzer::winning_line(&self.cells).map(|(mark, _)| mark)
    }

    /// Check if the board is full
    pub fn is_full(&self) -> bool {
        self.count_pieces().empty == 0
    }

    /// Check if the game is over (win or draw)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Numeric outcome: +1 if X won, -1 if O won, 0 otherwise.
    ///
    /// Only meaningful on terminal boards; an unfinished game without a
    /// winner also reports 0.
    pub fn utility(&self) -> i32 {
        self.winner().map_or(0, Mark::utility)
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
            if i + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new();
        assert_eq!(board.current_player(), Mark::X);
        assert!(board.rows().iter().flatten().all(|c| c.is_empty()));
        assert_eq!(board.legal_moves().len(), 9);
    }

    #[test]
    fn test_apply_move() {
        let board = Board::new();

        let next = board.apply_move(mv(1, 1)).unwrap();
        assert_eq!(next.get(mv(1, 1)), Some(Cell::X));
        assert_eq!(next.current_player(), Mark::O);

        let err = next.apply_move(mv(1, 1)).unwrap_err();
        assert!(err.to_string().contains("occupied"));
    }

    #[test]
    fn test_apply_move_rejects_out_of_bounds() {
        let board = Board::new();
        let result = board.apply_move(Move { row: 3, col: 0 });
        assert!(matches!(
            result,
            Err(crate::Error::OutOfBounds { row: 3, col: 0 })
        ));
    }

    #[test]
    fn test_apply_move_leaves_input_untouched() {
        let board = Board::from_string("X.. .O. ...").unwrap();
        let before = board;
        let _ = board.apply_move(mv(2, 2)).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_are_row_major() {
        let board = Board::from_string("X.O .X. O..").unwrap();
        assert_eq!(
            board.legal_moves(),
            vec![mv(0, 1), mv(1, 0), mv(1, 2), mv(2, 1), mv(2, 2)]
        );
    }

    #[test]
    fn test_current_player_follows_counts() {
        assert_eq!(Board::from_string("X........").unwrap().current_player(), Mark::O);
        assert_eq!(Board::from_string("XO.......").unwrap().current_player(), Mark::X);
    }

    #[test]
    fn test_win_detection_horizontal() {
        let board = Board::from_string("XXX OO. ...").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Mark::X));
        assert_eq!(board.utility(), 1);
    }

    #[test]
    fn test_win_detection_vertical() {
        let board = Board::from_string("XOX .OX .O.").unwrap();
        assert!(board.is_terminal());
        assert_eq!(board.winner(), Some(Mark::O));
        assert_eq!(board.utility(), -1);
    }

    #[test]
    fn test_win_detection_anti_diagonal() {
        let board = Board::from_string("OOX .X. X..").unwrap();
        assert_eq!(board.winner(), Some(Mark::X));
    }

    #[test]
    fn test_draw_detection() {
        let board = Board::from_string("XOX XOO OXX").unwrap();
        assert!(board.is_terminal());
        assert!(board.is_draw());
        assert_eq!(board.winner(), None);
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_in_progress_is_not_terminal() {
        let board = Board::from_string("XO. ... ...").unwrap();
        assert!(!board.is_terminal());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.get(mv(0, 0)), Some(Cell::X));
        assert_eq!(board.get(mv(0, 1)), Some(Cell::O));
        assert_eq!(board.current_player(), Mark::O);

        assert!(matches!(
            Board::from_string("XO"),
            Err(crate::Error::InvalidBoardLength { got: 2, .. })
        ));
        assert!(matches!(
            Board::from_string("XOZ......"),
            Err(crate::Error::InvalidCellCharacter { character: 'Z', .. })
        ));
        assert!(matches!(
            Board::from_string("XX......."),
            Err(crate::Error::InvalidPieceCounts { x_count: 2, o_count: 0 })
        ));
        assert!(Board::from_string("O........").is_err());
    }

    #[test]
    fn test_cell_characters() {
        let board = Board::from_string("x_o ... ...").unwrap();
        assert_eq!(board.encode(), "X.O......");

        // A zero is a typo for O, not a mark.
        assert!(matches!(
            Board::from_string("X0X ... ..."),
            Err(crate::Error::InvalidCellCharacter { character: '0', position: 1, .. })
        ));
        assert!(matches!(
            Board::from_string("X-- --- ---"),
            Err(crate::Error::InvalidCellCharacter { character: '-', position: 1, .. })
        ));
    }

    #[test]
    fn test_from_string_accepts_separators() {
        let a = Board::from_string("XO.|.X.|..O").unwrap();
        let b: Board = "XO. .X. ..O".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_encode_and_display() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        assert_eq!(board.encode(), "XOX.O.X..");
        assert_eq!(format!("{board}"), "XOX\n.O.\nX..");
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!("1,2".parse::<Move>().unwrap(), mv(1, 2));
        assert_eq!(" (0, 2) ".parse::<Move>().unwrap(), mv(0, 2));
        assert!(matches!(
            "1;2".parse::<Move>(),
            Err(crate::Error::InvalidMoveFormat { .. })
        ));
        assert!(matches!(
            "3,0".parse::<Move>(),
            Err(crate::Error::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_move_index_roundtrip() {
        for index in 0..9 {
            assert_eq!(Move::from_index(index).unwrap().index(), index);
        }
        assert!(Move::from_index(9).is_err());
    }

    #[test]
    fn test_move_classification() {
        assert!(mv(0, 0).is_corner());
        assert!(mv(2, 2).is_corner());
        assert!(!mv(0, 1).is_corner());
        assert!(mv(1, 1).is_center());
    }

    #[test]
    fn test_player_alternation() {
        let mut board = Board::new();
        let mut expected = Mark::X;
        for index in [4, 0, 8, 2, 1, 7] {
            assert_eq!(board.current_player(), expected);
            board = board.apply_move(Move::from_index(index).unwrap()).unwrap();
            expected = expected.opponent();
        }
    }
}
