//! Board representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Side length of the classic board
pub const CLASSIC_SIZE: usize = 3;

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '-' | '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The player owning this cell, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player (mark) in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

impl FromStr for Player {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(crate::Error::InvalidPlayerString {
                player: other.to_string(),
            }),
        }
    }
}

/// A zero-based (row, col) coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Coord { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square grid of cells, stored row-major.
///
/// The board is owned by whoever drives the game. Policies only ever borrow it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`]
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = crate::Error;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let expected = raw.size * raw.size;
        if raw.cells.len() != expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: raw.cells.len(),
                context: format!("cells of a {0}x{0} board", raw.size),
            });
        }
        Ok(Board {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Create an empty `size` x `size` board
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Create an empty 3x3 board
    pub fn classic() -> Self {
        Self::new(CLASSIC_SIZE)
    }

    /// Build a board from explicit rows.
    ///
    /// # Errors
    ///
    /// Returns error if any row length differs from the number of rows.
    pub fn from_rows<R: AsRef<[Cell]>>(rows: &[R]) -> Result<Self, crate::Error> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(crate::Error::InvalidBoardLength {
                    expected: size,
                    got: row.len(),
                    context: format!("row of a {size}x{size} board"),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Board { size, cells })
    }

    /// Parse a `size` x `size` board from its cells in row-major order.
    ///
    /// Whitespace and the row separators `/` and `|` are ignored, so
    /// `"XO-/OX-/---"` and `"XO- OX- ---"` are both accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not `size * size` or a character
    /// is not a valid cell.
    pub fn parse_sized(size: usize, s: &str) -> Result<Self, crate::Error> {
        let chars = Self::cell_chars(s);
        let expected = size * size;
        if chars.len() != expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = Vec::with_capacity(expected);
        for (i, &c) in chars.iter().enumerate() {
            let cell = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
            cells.push(cell);
        }

        Ok(Board { size, cells })
    }

    /// Parse a board, inferring its size from the number of cells.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not a perfect square of at least 4.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let count = Self::cell_chars(s).len();
        let size = (count as f64).sqrt().round() as usize;
        if size < 2 || size * size != count {
            return Err(crate::Error::InvalidBoardLength {
                expected: (size.max(2)).pow(2),
                got: count,
                context: s.to_string(),
            });
        }
        Self::parse_sized(size, s)
    }

    fn cell_chars(s: &str) -> Vec<char> {
        s.chars()
            .filter(|c| !c.is_whitespace() && *c != '/' && *c != '|')
            .collect()
    }

    /// Side length of the board
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the coordinate lies on the board
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "{coord} is off a {0}x{0} board",
            self.size
        );
        coord.row * self.size + coord.col
    }

    /// Get the cell at a coordinate.
    ///
    /// Panics if the coordinate is off the board.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[self.index(coord)]
    }

    /// Overwrite the cell at a coordinate.
    ///
    /// Panics if the coordinate is off the board.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        let idx = self.index(coord);
        self.cells[idx] = cell;
    }

    /// Place a player's mark on an empty cell
    pub fn place(&mut self, coord: Coord, player: Player) -> Result<(), crate::Error> {
        if !self.contains(coord) || !self.is_empty(coord) {
            return Err(crate::Error::InvalidMove { coord });
        }
        self.set(coord, player.to_cell());
        Ok(())
    }

    /// Check if a coordinate is empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// All empty coordinates in row-major order
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Coord::new(i / self.size, i % self.size))
            .collect()
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// True when no empty cell remains
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Iterate over rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// Check if a player has a complete line
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(self, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::X) {
            Some(Player::X)
        } else if self.has_won(Player::O) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

impl FromStr for Board {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_string(s)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::classic();
        assert_eq!(board.size(), 3);
        assert_eq!(board.empty_count(), 9);
        assert!(!board.is_full());
    }

    #[test]
    fn test_parse_with_separators() {
        let a = Board::parse_sized(3, "XO-/OX-/---").unwrap();
        let b = Board::parse_sized(3, "XO- OX- ---").unwrap();
        let c: Board = "XO-|OX-|---".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.get(Coord::new(0, 0)), Cell::X);
        assert_eq!(a.get(Coord::new(1, 0)), Cell::O);
        assert_eq!(a.get(Coord::new(2, 2)), Cell::Empty);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = Board::parse_sized(3, "XO-OX").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 5,
                ..
            }
        ));
        assert!(Board::from_string("XO-OX-").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_character() {
        let err = Board::parse_sized(3, "XO-OZ----").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidCellCharacter {
                character: 'Z',
                position: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_from_string_infers_size() {
        let board = Board::from_string("X---/----/----/---O").unwrap();
        assert_eq!(board.size(), 4);
        assert_eq!(board.get(Coord::new(3, 3)), Cell::O);
    }

    #[test]
    fn test_from_rows() {
        use Cell::{Empty as E, O, X};
        let board = Board::from_rows(&[[X, O, E], [O, X, E], [E, E, E]]).unwrap();
        assert_eq!(board, Board::parse_sized(3, "XO-OX----").unwrap());

        let ragged: Vec<Vec<Cell>> = vec![vec![X, O], vec![E]];
        assert!(Board::from_rows(&ragged).is_err());
    }

    #[test]
    fn test_place() {
        let mut board = Board::classic();
        board.place(Coord::new(1, 1), Player::X).unwrap();
        assert_eq!(board.get(Coord::new(1, 1)), Cell::X);

        let occupied = board.place(Coord::new(1, 1), Player::O);
        assert!(occupied.unwrap_err().to_string().contains("occupied"));
        assert!(board.place(Coord::new(3, 0), Player::O).is_err());
    }

    #[test]
    fn test_empty_cells_row_major() {
        let board = Board::parse_sized(3, "X-O-X-OX-").unwrap();
        assert_eq!(
            board.empty_cells(),
            vec![
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(1, 2),
                Coord::new(2, 2)
            ]
        );
    }

    #[test]
    fn test_full_and_terminal() {
        let board = Board::parse_sized(3, "XOXXOOOXX").unwrap();
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.winner(), None);

        let won = Board::parse_sized(3, "XXXOO----").unwrap();
        assert!(won.is_terminal());
        assert_eq!(won.winner(), Some(Player::X));
    }

    #[test]
    fn test_display() {
        let board = Board::parse_sized(3, "XO-OX---X").unwrap();
        assert_eq!(board.to_string(), "XO-\nOX-\n--X");
    }

    #[test]
    fn test_deserialize_checks_cell_count() {
        let board = Board::parse_sized(3, "XO-OX---X").unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);

        let short = serde_json::from_str::<Board>(r#"{"size":3,"cells":["Empty"]}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("expected 9"), "{err}");
    }

    #[test]
    fn test_player_parse_and_opponent() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert!("z".parse::<Player>().is_err());
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.to_cell(), Cell::O);
        assert_eq!(Cell::O.to_player(), Some(Player::O));
        assert_eq!(Cell::Empty.to_player(), None);
    }
}
