//!
//! Groebner bases of ideals in the polynomial ring `Z[X1, ..., Xn]` over the integers,
//! computed by Buchberger's algorithm w.r.t. the lexicographic monomial order.
//!
//! The polynomials live in an [`rings::multivariate::ordered::IntegerPolyRing`], which
//! fixes the names of the indeterminates. The algorithm itself is
//! [`algorithms::buchberger::buchberger()`]. As a demonstration, [`sudoku::SudokuBoard`]
//! encodes a Sudoku puzzle as a set of polynomials whose Groebner basis determines
//! the values of empty cells.
//!
//! # Example
//! ```
//! # use zz_groebner::rings::multivariate::ordered::*;
//! # use zz_groebner::algorithms::buchberger::*;
//! let ring = IntegerPolyRing::new(["x", "y"]);
//! let f = ring.parse("x^2 + 2 * x * y^2").unwrap();
//! let g = ring.parse("x * y + 2 * y^3 - 1").unwrap();
//! let basis = buchberger_simple(&ring, vec![f.clone(), g.clone()]).unwrap();
//! assert!(multivariate_division(&ring, &f, &basis).unwrap().is_zero());
//! assert!(multivariate_division(&ring, &g, &basis).unwrap().is_zero());
//! ```
//!

///
/// Contains [`error::GroebnerError`], the error type of all polynomial arithmetic.
///
pub mod error;
///
/// Contains the trait [`computation::ComputationController`], which receives the
/// progress output of long-running computations.
///
#[macro_use]
pub mod computation;
///
/// Contains the polynomial ring `Z[X1, ..., Xn]` and its elements.
///
pub mod rings;
pub mod algorithms;
///
/// Contains [`sudoku::SudokuBoard`], which encodes Sudoku puzzles as polynomial systems.
///
pub mod sudoku;
