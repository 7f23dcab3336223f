use std::fmt::{Display, Formatter};

use crate::algorithms::buchberger::*;
use crate::computation::DontObserve;
use crate::error::GroebnerError;
use crate::rings::multivariate::Coefficient;
use crate::rings::multivariate::ordered::*;

///
/// Errors that can occur when building a [`SudokuBoard`].
///
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum SudokuError {
    /// the subsquare size must be between 1 and [`SudokuBoard::MAX_SUBSQUARE_SIZE`]
    InvalidSize(usize),
    CellOutOfRange { row: usize, col: usize },
    ValueOutOfRange(usize),
    /// the number of given rows does not match the board size
    RowCount { expected: usize, found: usize },
    RowLength { row: usize, expected: usize, found: usize }
}

impl Display for SudokuError {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SudokuError::InvalidSize(n) => write!(f, "subsquare size {} is not supported", n),
            SudokuError::CellOutOfRange { row, col } => write!(f, "cell ({}, {}) is not on the board", row, col),
            SudokuError::ValueOutOfRange(value) => write!(f, "value {} is not allowed on the board", value),
            SudokuError::RowCount { expected, found } => write!(f, "expected {} rows, got {}", expected, found),
            SudokuError::RowLength { row, expected, found } => write!(f, "row {} has length {}, expected {}", row, found, expected)
        }
    }
}

impl std::error::Error for SudokuError {}

///
/// A Sudoku board with `n^2` rows and columns, made up of `n x n` subsquares, whose
/// cells contain values in `1..=n^2` or are empty.
///
/// The board can be encoded as a set of polynomials in `Z[x_{1,1}, ..., x_{n^2,n^2}]`, one
/// indeterminate per cell in row-major order, such that every solution of the puzzle is a
/// common zero; a Groebner basis of these polynomials can then be used to read off values
/// of cells. Cells are indexed from `0` in the API, but indeterminates are named 1-based.
///
/// # Example
/// ```
/// # use zz_groebner::sudoku::*;
/// # use zz_groebner::algorithms::buchberger::*;
/// let board = SudokuBoard::from_rows(2, &[
///     [1usize, 4, 2, 3],
///     [2, 3, 4, 1],
///     [4, 1, 3, 2],
///     [3, 2, 1, 0]
/// ]).unwrap();
/// let basis = board.solve(&BuchbergerConfig::default()).unwrap();
/// assert_eq!(Some(4), board.read_solution(&basis).unwrap().get(3, 3));
/// ```
///
#[derive(Clone, Debug)]
pub struct SudokuBoard {
    n: usize,
    cells: Vec<Option<usize>>,
    ring: IntegerPolyRing
}

impl SudokuBoard {

    ///
    /// Boards are limited to this subsquare size, since the encoding contains
    /// the constant `(n^2)!`, which has to fit into a [`Coefficient`].
    ///
    pub const MAX_SUBSQUARE_SIZE: usize = 4;

    ///
    /// Creates an empty board made of `n x n` subsquares.
    ///
    pub fn new(n: usize) -> Result<Self, SudokuError> {
        if n == 0 || n > Self::MAX_SUBSQUARE_SIZE {
            return Err(SudokuError::InvalidSize(n));
        }
        let size = n * n;
        let ring = IntegerPolyRing::new((1..=size).flat_map(|i| (1..=size).map(move |j| format!("x_{{{},{}}}", i, j))));
        Ok(Self { n, cells: vec![None; size * size], ring })
    }

    ///
    /// Creates a board made of `n x n` subsquares, filled with the given values, where
    /// `0` denotes an empty cell.
    ///
    pub fn from_rows<R>(n: usize, rows: &[R]) -> Result<Self, SudokuError>
        where R: AsRef<[usize]>
    {
        let mut result = Self::new(n)?;
        let size = result.size();
        if rows.len() != size {
            return Err(SudokuError::RowCount { expected: size, found: rows.len() });
        }
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(SudokuError::RowLength { row: i, expected: size, found: row.len() });
            }
            for (j, value) in row.iter().enumerate() {
                if *value != 0 {
                    result.set(i, j, *value)?;
                }
            }
        }
        return Ok(result);
    }

    ///
    /// The side length `n` of the subsquares.
    ///
    pub fn subsquare_size(&self) -> usize {
        self.n
    }

    ///
    /// The number of rows, which is also the number of columns and the largest allowed value.
    ///
    pub fn size(&self) -> usize {
        self.n * self.n
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, SudokuError> {
        if row >= self.size() || col >= self.size() {
            return Err(SudokuError::CellOutOfRange { row, col });
        }
        return Ok(row * self.size() + col);
    }

    pub fn set(&mut self, row: usize, col: usize, value: usize) -> Result<(), SudokuError> {
        let index = self.index(row, col)?;
        if value == 0 || value > self.size() {
            return Err(SudokuError::ValueOutOfRange(value));
        }
        self.cells[index] = Some(value);
        return Ok(());
    }

    pub fn clear(&mut self, row: usize, col: usize) -> Result<(), SudokuError> {
        let index = self.index(row, col)?;
        self.cells[index] = None;
        return Ok(());
    }

    ///
    /// Returns the value of the given cell, or `None` if it is empty or not on the board.
    ///
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        self.index(row, col).ok().and_then(|index| self.cells[index])
    }

    ///
    /// The ring containing the polynomials of [`SudokuBoard::to_polynomials()`], which has
    /// one indeterminate `x_{i,j}` per cell.
    ///
    pub fn ring(&self) -> &IntegerPolyRing {
        &self.ring
    }

    ///
    /// Returns the index of the indeterminate belonging to the given cell.
    ///
    pub fn variable(&self, row: usize, col: usize) -> Result<usize, SudokuError> {
        self.index(row, col)
    }

    ///
    /// Encodes the board as polynomials that vanish at every solution of the board. These are
    ///  - for every cell, `(x - 1) (x - 2) ... (x - n^2)` with `x` the indeterminate of the cell
    ///  - for every nonempty cell with value `v`, the clue `x - v`
    ///  - for every subsquare, then every row, then every column, the sum of its indeterminates
    ///    minus `1 + ... + n^2` and the product of its indeterminates minus `(n^2)!`
    ///
    pub fn to_polynomials(&self) -> Result<Vec<Polynomial>, GroebnerError> {
        let ring = &self.ring;
        let size = self.size();
        let cell = |row: usize, col: usize| ring.indeterminate(row * size + col);
        let mut result = Vec::new();

        for row in 0..size {
            for col in 0..size {
                let factors = (1..=size)
                    .map(|k| ring.sub(&cell(row, col), &ring.constant(k as Coefficient)))
                    .collect::<Result<Vec<_>, _>>()?;
                result.push(ring.prod(factors.iter())?);
            }
        }

        for row in 0..size {
            for col in 0..size {
                if let Some(value) = self.cells[row * size + col] {
                    result.push(ring.sub(&cell(row, col), &ring.constant(value as Coefficient))?);
                }
            }
        }

        let value_sum = (1..=size as Coefficient).sum::<Coefficient>();
        let value_prod = (1..=size as Coefficient).product::<Coefficient>();
        let mut groups: Vec<Vec<(usize, usize)>> = Vec::new();
        for i in (0..size).step_by(self.n) {
            for j in (0..size).step_by(self.n) {
                groups.push((0..self.n).flat_map(|x| (0..self.n).map(move |y| (i + x, j + y))).collect());
            }
        }
        for row in 0..size {
            groups.push((0..size).map(|col| (row, col)).collect());
        }
        for col in 0..size {
            groups.push((0..size).map(|row| (row, col)).collect());
        }
        for group in groups {
            let variables = group.iter().map(|(row, col)| cell(*row, *col)).collect::<Vec<_>>();
            result.push(ring.sub(&ring.sum(variables.iter())?, &ring.constant(value_sum))?);
            result.push(ring.sub(&ring.prod(variables.iter())?, &ring.constant(value_prod))?);
        }
        return Ok(result);
    }

    ///
    /// Computes a Groebner basis of the polynomials from [`SudokuBoard::to_polynomials()`].
    ///
    pub fn solve(&self, config: &BuchbergerConfig) -> Result<Vec<Polynomial>, GroebnerError> {
        let input = self.to_polynomials()?;
        tracing::debug!(n = self.n, generators = input.len(), "solving sudoku");
        return buchberger(&self.ring, input, config, DontObserve);
    }

    ///
    /// Returns a copy of this board, in which every empty cell whose value is determined by
    /// the given basis is filled in.
    ///
    /// The value of a cell with indeterminate `x` is `v` if the basis contains an element
    /// `c * x - c * v`, or otherwise if `x - v` reduces to zero modulo the basis for exactly
    /// one valid value `v`.
    ///
    pub fn read_solution(&self, basis: &[Polynomial]) -> Result<SudokuBoard, GroebnerError> {
        let mut result = self.clone();
        for f in basis {
            if let Some((index, value)) = self.isolated_value(f) {
                if result.cells[index].is_none() {
                    result.cells[index] = Some(value);
                }
            }
        }
        for index in 0..result.cells.len() {
            if result.cells[index].is_some() {
                continue;
            }
            let x = self.ring.indeterminate(index);
            let mut values = Vec::new();
            for value in 1..=self.size() {
                let f = self.ring.sub(&x, &self.ring.constant(value as Coefficient))?;
                if multivariate_division(&self.ring, &f, basis)?.is_zero() {
                    values.push(value);
                }
            }
            if let [value] = values[..] {
                result.cells[index] = Some(value);
            }
        }
        return Ok(result);
    }

    fn isolated_value(&self, f: &Polynomial) -> Option<(usize, usize)> {
        let (linear, constant) = match f.monomials() {
            [linear, constant] if constant.deg() == 0 => (linear, constant.coefficient()),
            _ => return None
        };
        if linear.deg() != 1 {
            return None;
        }
        let index = linear.degrees().iter().position(|e| *e == 1)?;
        if constant.checked_rem(linear.coefficient())? != 0 {
            return None;
        }
        let value = usize::try_from(constant.checked_div(linear.coefficient())?.checked_neg()?).ok()?;
        if value == 0 || value > self.size() {
            return None;
        }
        return Some((index, value));
    }
}

impl Display for SudokuBoard {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let width = size.to_string().len();
        let separator = format!("+{}", format!("{}+", "-".repeat(width + 2)).repeat(size));
        writeln!(f, "{}", separator)?;
        for row in 0..size {
            write!(f, "|")?;
            for col in 0..size {
                match self.cells[row * size + col] {
                    Some(value) => write!(f, " {:>width$} |", value, width = width)?,
                    None => write!(f, " {:>width$} |", "", width = width)?
                }
            }
            writeln!(f)?;
            writeln!(f, "{}", separator)?;
        }
        return Ok(());
    }
}

#[cfg(test)]
const SOLVED_BOARD: [[usize; 4]; 4] = [
    [1, 4, 2, 3],
    [2, 3, 4, 1],
    [4, 1, 3, 2],
    [3, 2, 1, 4]
];

#[test]
fn test_board() {
    let mut board = SudokuBoard::new(2).unwrap();
    assert_eq!(4, board.size());
    assert_eq!(16, board.ring().indeterminate_count());
    assert_eq!("x_{1,1}", board.ring().variables()[0]);
    assert_eq!("x_{2,3}", board.ring().variables()[board.variable(1, 2).unwrap()]);
    board.set(1, 2, 4).unwrap();
    assert_eq!(Some(4), board.get(1, 2));
    assert_eq!(None, board.get(2, 1));
    board.clear(1, 2).unwrap();
    assert_eq!(None, board.get(1, 2));
}

#[test]
fn test_board_errors() {
    assert_eq!(SudokuError::InvalidSize(0), SudokuBoard::new(0).unwrap_err());
    assert_eq!(SudokuError::InvalidSize(5), SudokuBoard::new(5).unwrap_err());
    let mut board = SudokuBoard::new(2).unwrap();
    assert_eq!(Err(SudokuError::CellOutOfRange { row: 4, col: 0 }), board.set(4, 0, 1));
    assert_eq!(Err(SudokuError::ValueOutOfRange(5)), board.set(0, 0, 5));
    assert_eq!(Err(SudokuError::ValueOutOfRange(0)), board.set(0, 0, 0));
    assert_eq!(SudokuError::RowCount { expected: 4, found: 1 }, SudokuBoard::from_rows(2, &[[1usize, 2, 3, 4]]).unwrap_err());
    assert_eq!(
        SudokuError::RowLength { row: 1, expected: 4, found: 3 },
        SudokuBoard::from_rows(2, &[vec![1usize, 2, 3, 4], vec![1, 2, 3], vec![0; 4], vec![0; 4]]).unwrap_err()
    );
}

#[test]
fn test_to_polynomials() {
    let board = SudokuBoard::from_rows(2, &SOLVED_BOARD).unwrap();
    let ring = board.ring();
    let polys = board.to_polynomials().unwrap();
    assert_eq!(16 + 16 + 12 * 2, polys.len());
    assert!(polys.iter().all(|f| ring.check(f).is_ok()));

    assert_eq!(
        ring.parse("x_{1,1}^4 - 10 * x_{1,1}^3 + 35 * x_{1,1}^2 - 50 * x_{1,1} + 24").unwrap(),
        polys[0]
    );
    let clues = &polys[16..32];
    for (k, clue) in clues.iter().enumerate() {
        let (row, col) = (k / 4, k % 4);
        let expected = ring.sub(&ring.indeterminate(board.variable(row, col).unwrap()), &ring.constant(SOLVED_BOARD[row][col] as Coefficient)).unwrap();
        assert_eq!(&expected, clue);
    }
    assert_eq!(ring.parse("x_{1,1} + x_{1,2} + x_{2,1} + x_{2,2} - 10").unwrap(), polys[32]);
    assert_eq!(ring.parse("x_{1,1} * x_{1,2} * x_{2,1} * x_{2,2} - 24").unwrap(), polys[33]);
    assert_eq!(ring.parse("x_{1,1} + x_{2,1} + x_{3,1} + x_{4,1} - 10").unwrap(), polys[48]);
}

#[test]
fn test_solution_is_common_zero() {
    let board = SudokuBoard::from_rows(2, &SOLVED_BOARD).unwrap();
    let point = SOLVED_BOARD.iter().flat_map(|row| row.iter().map(|v| *v as Coefficient)).collect::<Vec<_>>();
    let mut empty_board = board.clone();
    empty_board.clear(0, 0).unwrap();
    for f in board.to_polynomials().unwrap().iter().chain(empty_board.to_polynomials().unwrap().iter()) {
        assert_eq!(0, board.ring().evaluate(f, &point).unwrap());
    }
    let mut wrong_point = point.clone();
    wrong_point.swap(0, 1);
    assert!(empty_board.to_polynomials().unwrap().iter().any(|f| board.ring().evaluate(f, &wrong_point).unwrap() != 0));
}

#[test]
fn test_solve_full_board() {
    let board = SudokuBoard::from_rows(2, &SOLVED_BOARD).unwrap();
    let basis = board.solve(&BuchbergerConfig::default()).unwrap();
    let input = board.to_polynomials().unwrap();
    assert_eq!(input, basis);
    let solution = board.read_solution(&basis).unwrap();
    for row in 0..4 {
        for col in 0..4 {
            assert_eq!(Some(SOLVED_BOARD[row][col]), solution.get(row, col));
        }
    }
}

#[test]
fn test_solve_one_blank() {
    let mut board = SudokuBoard::from_rows(2, &SOLVED_BOARD).unwrap();
    board.clear(3, 3).unwrap();
    let basis = board.solve(&BuchbergerConfig::default()).unwrap();
    assert_eq!(57, basis.len());
    let x_44 = board.ring().indeterminate(board.variable(3, 3).unwrap());
    assert!(basis.contains(&board.ring().sub(&x_44, &board.ring().constant(4)).unwrap()));
    assert_s_polynomials_reduce_to_zero(board.ring(), &basis);
    assert_eq!(None, board.get(3, 3));
    assert_eq!(Some(4), board.read_solution(&basis).unwrap().get(3, 3));
}

#[test]
fn test_solve_two_blanks() {
    let mut board = SudokuBoard::from_rows(2, &SOLVED_BOARD).unwrap();
    board.clear(0, 0).unwrap();
    board.clear(1, 1).unwrap();
    let basis = board.solve(&BuchbergerConfig::default()).unwrap();
    assert_eq!(59, basis.len());
    assert_s_polynomials_reduce_to_zero(board.ring(), &basis);
    // x_{1,1} - 1 is not itself a basis element, but lies in the ideal
    let x_11 = board.ring().indeterminate(board.variable(0, 0).unwrap());
    let clue = board.ring().sub(&x_11, &board.ring().constant(1)).unwrap();
    assert!(!basis.contains(&clue));
    assert!(multivariate_division(board.ring(), &clue, &basis).unwrap().is_zero());

    let solution = board.read_solution(&basis).unwrap();
    assert_eq!(Some(1), solution.get(0, 0));
    assert_eq!(Some(3), solution.get(1, 1));
    assert_eq!(Some(2), solution.get(1, 0));
}

#[test]
fn test_read_solution() {
    let board = SudokuBoard::new(2).unwrap();
    let ring = board.ring();
    let basis = [
        ring.parse("3 * x_{1,2} - 6").unwrap(),
        ring.parse("x_{2,2} - 7").unwrap(),
        ring.parse("2 * x_{3,3} - 3").unwrap(),
        ring.parse("x_{4,4} * x_{1,1} - 1").unwrap(),
        ring.parse("x_{4,1} + x_{4,2} - 1").unwrap()
    ];
    let solution = board.read_solution(&basis).unwrap();
    assert_eq!(Some(2), solution.get(0, 1));
    assert_eq!(None, solution.get(1, 1));
    assert_eq!(None, solution.get(2, 2));
    assert_eq!(None, solution.get(3, 3));
    assert_eq!(None, solution.get(3, 0));
}

#[test]
fn test_display() {
    let mut board = SudokuBoard::new(1).unwrap();
    assert_eq!("+---+\n|   |\n+---+\n", format!("{}", board));
    board.set(0, 0, 1).unwrap();
    assert_eq!("+---+\n| 1 |\n+---+\n", format!("{}", board));

    let board = SudokuBoard::from_rows(2, &[[1usize, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 4]]).unwrap();
    let expected = "\
+---+---+---+---+
| 1 |   |   |   |
+---+---+---+---+
|   |   |   |   |
+---+---+---+---+
|   |   |   |   |
+---+---+---+---+
|   |   |   | 4 |
+---+---+---+---+
";
    assert_eq!(expected, format!("{}", board));
}
