use std::fmt::{Display, Formatter};

///
/// Errors that can occur during polynomial arithmetic or during the computation
/// of a Groebner basis.
///
/// All of them are local conditions; in particular, a failed reduction never leaves
/// a partially updated basis behind.
///
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum GroebnerError {
    /// Two exponent vectors of different lengths were combined, or an exponent vector
    /// does not match the number of indeterminates of the ring
    DimensionMismatch { expected: usize, found: usize },
    /// A quotient of terms does not lie in `Z[X1, ..., Xn]`, i.e. the coefficient
    /// division is not exact or some exponent would become negative
    InexactDivision,
    /// The generating set passed to the Buchberger algorithm was empty
    EmptyGeneratingSet,
    /// The configured bound on the basis length or on the number of S-polynomials
    /// was exceeded
    ResourceExhausted { basis_len: usize, spolys: usize },
    /// Some coefficient does not fit into an `i64`, or some exponent does not fit
    /// into a [`crate::rings::multivariate::MonomialExponent`]
    Overflow
}

impl Display for GroebnerError {

    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            GroebnerError::DimensionMismatch { expected, found } => write!(f, "expected exponent vector of length {}, got length {}", expected, found),
            GroebnerError::InexactDivision => write!(f, "term division is not exact over the integers"),
            GroebnerError::EmptyGeneratingSet => write!(f, "the generating set is empty"),
            GroebnerError::ResourceExhausted { basis_len, spolys } => write!(f, "resource bound exceeded (basis length {}, {} S-polynomials considered)", basis_len, spolys),
            GroebnerError::Overflow => write!(f, "integer overflow in a coefficient or exponent")
        }
    }
}

impl std::error::Error for GroebnerError {}

#[test]
fn test_display() {
    assert_eq!("expected exponent vector of length 2, got length 3", format!("{}", GroebnerError::DimensionMismatch { expected: 2, found: 3 }));
    assert_eq!("resource bound exceeded (basis length 10, 4 S-polynomials considered)", format!("{}", GroebnerError::ResourceExhausted { basis_len: 10, spolys: 4 }));
}
