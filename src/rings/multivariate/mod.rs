use std::cmp::{max, Ordering};
use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::GroebnerError;

///
/// Contains [`ordered::IntegerPolyRing`], the ring `Z[X1, ..., Xn]` whose elements
/// are stored as lists of their terms, ordered by [`Lex`].
///
pub mod ordered;

pub type MonomialExponent = u16;

pub type Coefficient = i64;

///
/// A term `c * X1^e1 * ... * Xn^en`, i.e. an integer coefficient together with an exponent
/// vector.
///
/// The exponent vector must contain exactly one entry per indeterminate of the ring the
/// monomial is used in, with (possibly trailing) zeros for indeterminates that do not occur.
/// Binary operations on monomials of different lengths fail with [`GroebnerError::DimensionMismatch`].
///
/// Note that the derived equality compares exponents and coefficient, which is the right notion
/// for comparing polynomials term-by-term. For comparing monomials w.r.t. the monomial order (which
/// ignores coefficients), use [`Lex::compare()`].
///
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Monomial {
    degrees: Vec<MonomialExponent>,
    coefficient: Coefficient
}

impl Monomial {

    pub fn new(degrees: Vec<MonomialExponent>, coefficient: Coefficient) -> Self {
        Self { degrees, coefficient }
    }

    ///
    /// Creates the constant term `c` with `len` indeterminates.
    ///
    pub fn constant(len: usize, coefficient: Coefficient) -> Self {
        Self::new(vec![0; len], coefficient)
    }

    pub fn degrees(&self) -> &[MonomialExponent] {
        &self.degrees
    }

    pub fn coefficient(&self) -> Coefficient {
        self.coefficient
    }

    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    pub fn is_zero(&self) -> bool {
        self.coefficient == 0
    }

    ///
    /// The total degree, i.e. the sum of all exponents.
    ///
    pub fn deg(&self) -> u32 {
        self.degrees.iter().map(|e| *e as u32).sum()
    }

    pub fn with_coefficient(&self, coefficient: Coefficient) -> Self {
        Self::new(self.degrees.clone(), coefficient)
    }

    fn check_dimension(&self, rhs: &Self) -> Result<(), GroebnerError> {
        if self.len() != rhs.len() {
            return Err(GroebnerError::DimensionMismatch { expected: self.len(), found: rhs.len() });
        }
        return Ok(());
    }

    ///
    /// Computes the product of two monomials.
    ///
    pub fn mul(&self, rhs: &Self) -> Result<Self, GroebnerError> {
        self.check_dimension(rhs)?;
        let degrees = self.degrees.iter().zip(rhs.degrees.iter())
            .map(|(l, r)| l.checked_add(*r).ok_or(GroebnerError::Overflow))
            .collect::<Result<Vec<_>, _>>()?;
        let coefficient = self.coefficient.checked_mul(rhs.coefficient).ok_or(GroebnerError::Overflow)?;
        return Ok(Self::new(degrees, coefficient));
    }

    ///
    /// Multiplies the coefficient by `factor`.
    ///
    pub fn scale(&self, factor: Coefficient) -> Result<Self, GroebnerError> {
        let coefficient = self.coefficient.checked_mul(factor).ok_or(GroebnerError::Overflow)?;
        return Ok(self.with_coefficient(coefficient));
    }

    ///
    /// Computes the lcm of the exponent vectors of two monomials. The coefficient
    /// of the result is always `1`.
    ///
    pub fn lcm(&self, rhs: &Self) -> Result<Self, GroebnerError> {
        self.check_dimension(rhs)?;
        return Ok(Self::new(self.degrees.iter().zip(rhs.degrees.iter()).map(|(l, r)| max(*l, *r)).collect(), 1));
    }

    ///
    /// Checks whether the exponent vector of `self` divides the exponent vector of `rhs`,
    /// ignoring coefficients.
    ///
    pub fn divides(&self, rhs: &Self) -> Result<bool, GroebnerError> {
        self.check_dimension(rhs)?;
        return Ok(self.degrees.iter().zip(rhs.degrees.iter()).all(|(l, r)| l <= r));
    }

    ///
    /// Checks whether the exponent vectors of the two monomials have disjoint support.
    ///
    pub fn is_coprime(&self, rhs: &Self) -> Result<bool, GroebnerError> {
        self.check_dimension(rhs)?;
        return Ok(self.degrees.iter().zip(rhs.degrees.iter()).all(|(l, r)| *l == 0 || *r == 0));
    }

    ///
    /// Computes the quotient `self / rhs` as a term of `Z[X1, ..., Xn]`.
    ///
    /// Fails with [`GroebnerError::InexactDivision`] if some exponent of `rhs` exceeds
    /// the corresponding exponent of `self`, or if the coefficient of `rhs` does not
    /// divide the coefficient of `self`. Nothing is ever truncated.
    ///
    pub fn div_exact(&self, rhs: &Self) -> Result<Self, GroebnerError> {
        self.check_dimension(rhs)?;
        if rhs.coefficient == 0 || self.coefficient.checked_rem(rhs.coefficient).ok_or(GroebnerError::Overflow)? != 0 {
            return Err(GroebnerError::InexactDivision);
        }
        let degrees = self.degrees.iter().zip(rhs.degrees.iter())
            .map(|(l, r)| l.checked_sub(*r).ok_or(GroebnerError::InexactDivision))
            .collect::<Result<Vec<_>, _>>()?;
        let coefficient = self.coefficient.checked_div(rhs.coefficient).ok_or(GroebnerError::Overflow)?;
        return Ok(Self::new(degrees, coefficient));
    }

    ///
    /// Evaluates the term at the given point.
    ///
    pub fn evaluate(&self, values: &[Coefficient]) -> Result<Coefficient, GroebnerError> {
        if values.len() != self.len() {
            return Err(GroebnerError::DimensionMismatch { expected: self.len(), found: values.len() });
        }
        let mut result = self.coefficient;
        for (x, e) in values.iter().zip(self.degrees.iter()) {
            let power = x.checked_pow(*e as u32).ok_or(GroebnerError::Overflow)?;
            result = result.checked_mul(power).ok_or(GroebnerError::Overflow)?;
        }
        return Ok(result);
    }
}

impl Debug for Monomial {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.coefficient)?;
        if self.degrees.len() == 0 {
            return write!(f, "()");
        }
        write!(f, "(")?;
        for i in 0..(self.degrees.len() - 1) {
            write!(f, "{}, ", self.degrees[i])?;
        }
        write!(f, "{})", self.degrees[self.degrees.len() - 1])
    }
}

///
/// Standard lexicographic order of monomials.
///
/// To compare two monomials lexicographically, just compare the exponents
/// of one indeterminate after the other, and return the first comparison result
/// that is not "equal". Coefficients are never taken into account, thus two
/// monomials compare equal if and only if their exponent vectors are identical.
/// Both monomials must have the same number of indeterminates.
///
/// This is the only monomial order supported by this crate.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Lex;

impl Lex {

    pub fn compare(&self, lhs: &Monomial, rhs: &Monomial) -> Ordering {
        debug_assert_eq!(lhs.len(), rhs.len());
        for (l, r) in lhs.degrees.iter().zip(rhs.degrees.iter()) {
            if l < r {
                return Ordering::Less;
            } else if l > r {
                return Ordering::Greater;
            }
        }
        return Ordering::Equal;
    }

    pub fn eq_mon(&self, lhs: &Monomial, rhs: &Monomial) -> bool {
        self.compare(lhs, rhs) == Ordering::Equal
    }
}

#[cfg(test)]
fn random_monomial(rng: &mut oorandom::Rand64, len: usize) -> Monomial {
    Monomial::new((0..len).map(|_| rng.rand_range(0..3) as MonomialExponent).collect(), rng.rand_range(0..7) as Coefficient - 3)
}

#[test]
fn test_lex() {
    let mut monomials: Vec<Monomial> = vec![
        Monomial::new(vec![0, 0, 0], 1),
        Monomial::new(vec![0, 0, 1], 1),
        Monomial::new(vec![0, 0, 2], 1),
        Monomial::new(vec![0, 1, 0], 1),
        Monomial::new(vec![0, 1, 1], 1),
        Monomial::new(vec![0, 2, 0], 1),
        Monomial::new(vec![1, 0, 0], 1),
        Monomial::new(vec![1, 0, 1], 1),
        Monomial::new(vec![1, 1, 0], 1),
        Monomial::new(vec![2, 0, 0], 1)
    ];
    monomials.sort_by(|l, r| Lex.compare(l, r).reverse());
    assert_eq!(vec![
        Monomial::new(vec![2, 0, 0], 1),
        Monomial::new(vec![1, 1, 0], 1),
        Monomial::new(vec![1, 0, 1], 1),
        Monomial::new(vec![1, 0, 0], 1),
        Monomial::new(vec![0, 2, 0], 1),
        Monomial::new(vec![0, 1, 1], 1),
        Monomial::new(vec![0, 1, 0], 1),
        Monomial::new(vec![0, 0, 2], 1),
        Monomial::new(vec![0, 0, 1], 1),
        Monomial::new(vec![0, 0, 0], 1)
    ], monomials);
}

#[test]
fn test_lex_ignores_coefficient() {
    let a = Monomial::new(vec![1, 2], 5);
    let b = Monomial::new(vec![1, 2], -3);
    assert_eq!(Ordering::Equal, Lex.compare(&a, &b));
    assert!(Lex.eq_mon(&a, &b));
    assert!(a != b);
}

#[test]
#[should_panic]
#[cfg(debug_assertions)]
fn test_lex_different_lengths() {
    _ = Lex.compare(&Monomial::new(vec![1, 0], 1), &Monomial::new(vec![1, 0, 0], 1));
}

#[test]
fn test_lex_total_order() {
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..200 {
        let a = random_monomial(&mut rng, 3);
        let b = random_monomial(&mut rng, 3);
        let c = random_monomial(&mut rng, 3);
        assert_eq!(Lex.compare(&a, &b), Lex.compare(&b, &a).reverse());
        assert_eq!(Lex.compare(&a, &b) == Ordering::Equal, a.degrees() == b.degrees());
        if Lex.compare(&a, &b) != Ordering::Greater && Lex.compare(&b, &c) != Ordering::Greater {
            assert!(Lex.compare(&a, &c) != Ordering::Greater);
        }
    }
}

#[test]
fn test_lex_compatible_with_multiplication() {
    let mut rng = oorandom::Rand64::new(2);
    for _ in 0..200 {
        let a = random_monomial(&mut rng, 3);
        let b = random_monomial(&mut rng, 3);
        let p = random_monomial(&mut rng, 3);
        assert_eq!(Lex.compare(&a, &b), Lex.compare(&a.mul(&p).unwrap(), &b.mul(&p).unwrap()));
    }
}

#[test]
fn test_mul() {
    let a = Monomial::new(vec![2, 0, 1], 3);
    let b = Monomial::new(vec![0, 1, 1], -2);
    assert_eq!(Monomial::new(vec![2, 1, 2], -6), a.mul(&b).unwrap());
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 3, found: 2 }), a.mul(&Monomial::new(vec![1, 1], 1)));
    assert_eq!(Err(GroebnerError::Overflow), Monomial::new(vec![1], i64::MAX).mul(&Monomial::new(vec![0], 2)));
}

#[test]
fn test_div_exact() {
    let a = Monomial::new(vec![2, 1, 3], 6);
    assert_eq!(Monomial::new(vec![1, 1, 0], -2), a.div_exact(&Monomial::new(vec![1, 0, 3], -3)).unwrap());
    assert_eq!(Err(GroebnerError::InexactDivision), a.div_exact(&Monomial::new(vec![1, 0, 0], 4)));
    assert_eq!(Err(GroebnerError::InexactDivision), a.div_exact(&Monomial::new(vec![0, 2, 0], 1)));
    assert_eq!(Err(GroebnerError::InexactDivision), a.div_exact(&Monomial::new(vec![0, 0, 0], 0)));
}

#[test]
fn test_lcm_divides_coprime() {
    let a = Monomial::new(vec![2, 0, 1], 3);
    let b = Monomial::new(vec![0, 1, 3], 5);
    let lcm = a.lcm(&b).unwrap();
    assert_eq!(Monomial::new(vec![2, 1, 3], 1), lcm);
    assert!(a.divides(&lcm).unwrap());
    assert!(b.divides(&lcm).unwrap());
    assert!(!lcm.divides(&a).unwrap());
    assert!(!a.is_coprime(&b).unwrap());
    assert!(Monomial::new(vec![2, 0, 0], 1).is_coprime(&Monomial::new(vec![0, 0, 4], 1)).unwrap());
}

#[test]
fn test_evaluate() {
    let a = Monomial::new(vec![2, 0, 1], 3);
    assert_eq!(3 * 4 * 5, a.evaluate(&[2, 7, 5]).unwrap());
    assert_eq!(3, a.deg());
    assert_eq!("3(2, 0, 1)", format!("{:?}", a));
}
