use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{Debug, Display, Write};

use serde::{Deserialize, Serialize};

use crate::error::GroebnerError;

use super::*;

///
/// Sorts the given terms descending w.r.t. the monomial order, combines terms whose
/// monomials compare equal by adding their coefficients, and removes terms with zero
/// coefficient.
///
/// The result is the canonical representation of the polynomial given by the sum of
/// the input terms.
///
fn normalize(mut monomials: Vec<Monomial>, order: Lex) -> Result<Vec<Monomial>, GroebnerError> {
    if let Some(first) = monomials.first() {
        let len = first.len();
        if let Some(wrong) = monomials.iter().find(|m| m.len() != len) {
            return Err(GroebnerError::DimensionMismatch { expected: len, found: wrong.len() });
        }
    }
    monomials.sort_by(|l, r| order.compare(l, r).reverse());
    let mut result: Vec<Monomial> = Vec::with_capacity(monomials.len());
    for m in monomials {
        match result.last_mut() {
            Some(last) if order.eq_mon(last, &m) => {
                last.coefficient = last.coefficient.checked_add(m.coefficient).ok_or(GroebnerError::Overflow)?;
            },
            _ => result.push(m)
        }
    }
    result.retain(|m| !m.is_zero());
    return Ok(result);
}

///
/// An element of `Z[X1, ..., Xn]`, stored as the list of its terms.
///
/// The list is always normalized, i.e. sorted strictly descending w.r.t. [`Lex`], without
/// two monomials that compare equal, and without zero coefficients. In particular, the
/// zero polynomial is represented by the empty list, and the first entry is the leading
/// term. Since the representation is canonical, the derived equality and hash coincide with
/// equality of polynomials.
///
/// Polynomials are values: all arithmetic goes through an [`IntegerPolyRing`] and produces
/// new polynomials.
///
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Monomial>", into = "Vec<Monomial>")]
pub struct Polynomial {
    monomials: Vec<Monomial>
}

impl Polynomial {

    pub fn zero() -> Self {
        Self { monomials: Vec::new() }
    }

    pub fn is_zero(&self) -> bool {
        self.monomials.len() == 0
    }

    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    pub fn into_monomials(self) -> Vec<Monomial> {
        self.monomials
    }

    ///
    /// Returns the number of terms.
    ///
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    ///
    /// Returns the leading term, i.e. the term whose monomial is largest w.r.t. [`Lex`],
    /// or `None` for the zero polynomial.
    ///
    pub fn lt(&self) -> Option<&Monomial> {
        self.monomials.first()
    }

    ///
    /// Returns a string that identifies this polynomial, i.e. two polynomials have
    /// the same key if and only if they are equal. Used to give collections of
    /// polynomials set semantics.
    ///
    pub fn canonical_key(&self) -> String {
        if self.is_zero() {
            return "0".to_owned();
        }
        let mut result = String::new();
        for (i, m) in self.monomials.iter().enumerate() {
            if i != 0 {
                result.push('|');
            }
            _ = write!(&mut result, "{}:", m.coefficient());
            for (j, e) in m.degrees().iter().enumerate() {
                if j != 0 {
                    result.push(',');
                }
                _ = write!(&mut result, "{}", e);
            }
        }
        return result;
    }

    fn is_valid(&self, order: Lex) -> bool {
        self.monomials.iter().all(|m| !m.is_zero()) &&
            self.monomials.windows(2).all(|w| order.compare(&w[0], &w[1]) == Ordering::Greater)
    }
}

impl TryFrom<Vec<Monomial>> for Polynomial {

    type Error = GroebnerError;

    fn try_from(monomials: Vec<Monomial>) -> Result<Self, Self::Error> {
        Ok(Self { monomials: normalize(monomials, Lex)? })
    }
}

impl From<Polynomial> for Vec<Monomial> {

    fn from(value: Polynomial) -> Self {
        value.into_monomials()
    }
}

impl Debug for Polynomial {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.monomials.iter()).finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsePolynomialError {
    UnknownVariable(String),
    InvalidFactor(String),
    DanglingOperator,
    Algebra(GroebnerError)
}

impl From<GroebnerError> for ParsePolynomialError {

    fn from(value: GroebnerError) -> Self {
        ParsePolynomialError::Algebra(value)
    }
}

impl Display for ParsePolynomialError {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsePolynomialError::UnknownVariable(name) => write!(f, "unknown variable {}", name),
            ParsePolynomialError::InvalidFactor(factor) => write!(f, "cannot parse factor {}", factor),
            ParsePolynomialError::DanglingOperator => write!(f, "expected a term after the last operator"),
            ParsePolynomialError::Algebra(err) => write!(f, "{}", err)
        }
    }
}

impl std::error::Error for ParsePolynomialError {}

///
/// The ring `Z[X1, ..., Xn]` of multivariate polynomials with integer coefficients,
/// over a fixed and ordered list of named indeterminates.
///
/// This is the context of every polynomial computation: it fixes the length of all
/// exponent vectors and the monomial order. It cannot be changed after creation; all
/// constructors and arithmetic operations on [`Monomial`]s and [`Polynomial`]s go through
/// it and check that their arguments have the right number of indeterminates.
///
/// # Example
/// ```
/// # use zz_groebner::rings::multivariate::ordered::*;
/// let ring = IntegerPolyRing::new(["x", "y"]);
/// let f = ring.parse("x^2 + 2 * x * y^2").unwrap();
/// let g = ring.parse("x * y + 2 * y^3 + -1").unwrap();
/// let h = ring.mul(&f, &g).unwrap();
/// assert_eq!("x^3 * y + 4 * x^2 * y^3 + -1 * x^2 + 4 * x * y^5 + -2 * x * y^2", format!("{}", ring.format(&h)));
/// ```
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IntegerPolyRing {
    variables: Vec<String>,
    order: Lex
}

impl IntegerPolyRing {

    ///
    /// Creates the polynomial ring over the given indeterminates. The names must be
    /// pairwise distinct, and the first name is the largest w.r.t. the monomial order.
    ///
    pub fn new<I, S>(variables: I) -> Self
        where I: IntoIterator<Item = S>,
            S: Into<String>
    {
        let variables = variables.into_iter().map(|name| name.into()).collect::<Vec<_>>();
        let mut seen = HashSet::new();
        assert!(variables.iter().all(|name| seen.insert(name.as_str())), "indeterminate names must be distinct");
        Self { variables, order: Lex }
    }

    ///
    /// Creates the polynomial ring with `n` indeterminates, called `X0, ..., X(n - 1)`.
    ///
    pub fn with_indeterminates(n: usize) -> Self {
        Self::new((0..n).map(|i| format!("X{}", i)))
    }

    pub fn indeterminate_count(&self) -> usize {
        self.variables.len()
    }

    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.iter().position(|v| v == name)
    }

    pub fn order(&self) -> Lex {
        self.order
    }

    fn check_monomial(&self, m: &Monomial) -> Result<(), GroebnerError> {
        if m.len() != self.indeterminate_count() {
            return Err(GroebnerError::DimensionMismatch { expected: self.indeterminate_count(), found: m.len() });
        }
        return Ok(());
    }

    ///
    /// Checks that all terms of the given polynomial have one exponent per indeterminate
    /// of this ring.
    ///
    pub fn check(&self, f: &Polynomial) -> Result<(), GroebnerError> {
        f.monomials().iter().try_for_each(|m| self.check_monomial(m))
    }

    ///
    /// Creates the term `coefficient * X1^degrees[0] * ... * Xn^degrees[n - 1]`.
    ///
    pub fn monomial(&self, degrees: Vec<MonomialExponent>, coefficient: Coefficient) -> Result<Monomial, GroebnerError> {
        let result = Monomial::new(degrees, coefficient);
        self.check_monomial(&result)?;
        return Ok(result);
    }

    ///
    /// Creates a polynomial from the given terms. The terms may be given in any order, and
    /// may contain the same monomial multiple times, in which case the coefficients are summed up.
    ///
    pub fn from_monomials(&self, monomials: Vec<Monomial>) -> Result<Polynomial, GroebnerError> {
        monomials.iter().try_for_each(|m| self.check_monomial(m))?;
        return Ok(Polynomial { monomials: normalize(monomials, self.order)? });
    }

    ///
    /// Creates a polynomial from the given pairs of coefficient and exponent vector.
    ///
    pub fn from_terms<I>(&self, terms: I) -> Result<Polynomial, GroebnerError>
        where I: IntoIterator<Item = (Coefficient, Vec<MonomialExponent>)>
    {
        self.from_monomials(terms.into_iter().map(|(c, e)| Monomial::new(e, c)).collect())
    }

    pub fn zero(&self) -> Polynomial {
        Polynomial::zero()
    }

    pub fn one(&self) -> Polynomial {
        self.constant(1)
    }

    pub fn constant(&self, c: Coefficient) -> Polynomial {
        if c == 0 {
            return self.zero();
        }
        Polynomial { monomials: vec![Monomial::constant(self.indeterminate_count(), c)] }
    }

    ///
    /// Returns the term `c * Xi`.
    ///
    pub fn linear_term(&self, i: usize, c: Coefficient) -> Polynomial {
        assert!(i < self.indeterminate_count());
        if c == 0 {
            return self.zero();
        }
        let mut degrees = vec![0; self.indeterminate_count()];
        degrees[i] = 1;
        Polynomial { monomials: vec![Monomial::new(degrees, c)] }
    }

    ///
    /// Returns the `i`-th indeterminate `Xi` as a polynomial.
    ///
    pub fn indeterminate(&self, i: usize) -> Polynomial {
        self.linear_term(i, 1)
    }

    pub fn is_zero(&self, f: &Polynomial) -> bool {
        f.is_zero()
    }

    pub fn eq_el(&self, lhs: &Polynomial, rhs: &Polynomial) -> bool {
        lhs == rhs
    }

    ///
    /// Returns the leading term of `f`, see [`Polynomial::lt()`].
    ///
    pub fn lt<'a>(&self, f: &'a Polynomial) -> Option<&'a Monomial> {
        f.lt()
    }

    pub fn add(&self, lhs: &Polynomial, rhs: &Polynomial) -> Result<Polynomial, GroebnerError> {
        self.check(lhs)?;
        self.check(rhs)?;
        let mut monomials = Vec::with_capacity(lhs.len() + rhs.len());
        monomials.extend(lhs.monomials().iter().cloned());
        monomials.extend(rhs.monomials().iter().cloned());
        return Ok(Polynomial { monomials: normalize(monomials, self.order)? });
    }

    pub fn negate(&self, f: &Polynomial) -> Result<Polynomial, GroebnerError> {
        self.check(f)?;
        let monomials = f.monomials().iter().map(|m| m.scale(-1)).collect::<Result<Vec<_>, _>>()?;
        return Ok(Polynomial { monomials });
    }

    pub fn sub(&self, lhs: &Polynomial, rhs: &Polynomial) -> Result<Polynomial, GroebnerError> {
        self.add(lhs, &self.negate(rhs)?)
    }

    ///
    /// Computes the product of two polynomials by multiplying each pair of terms, and normalizing
    /// the result.
    ///
    pub fn mul(&self, lhs: &Polynomial, rhs: &Polynomial) -> Result<Polynomial, GroebnerError> {
        self.check(lhs)?;
        self.check(rhs)?;
        let mut monomials = Vec::with_capacity(lhs.len() * rhs.len());
        for l in lhs.monomials() {
            for r in rhs.monomials() {
                monomials.push(l.mul(r)?);
            }
        }
        return Ok(Polynomial { monomials: normalize(monomials, self.order)? });
    }

    ///
    /// Multiplies the polynomial with a single term. Since the monomial order is compatible
    /// with multiplication, this does not require sorting again.
    ///
    pub fn mul_monomial(&self, f: &Polynomial, m: &Monomial) -> Result<Polynomial, GroebnerError> {
        self.check_monomial(m)?;
        self.check(f)?;
        if m.is_zero() {
            return Ok(self.zero());
        }
        let result = Polynomial { monomials: f.monomials().iter().map(|t| t.mul(m)).collect::<Result<Vec<_>, _>>()? };
        debug_assert!(result.is_valid(self.order));
        return Ok(result);
    }

    pub fn pow(&self, f: &Polynomial, power: usize) -> Result<Polynomial, GroebnerError> {
        let mut result = self.one();
        for _ in 0..power {
            result = self.mul(&result, f)?;
        }
        return Ok(result);
    }

    pub fn sum<'a, I>(&self, summands: I) -> Result<Polynomial, GroebnerError>
        where I: IntoIterator<Item = &'a Polynomial>
    {
        summands.into_iter().try_fold(self.zero(), |current, f| self.add(&current, f))
    }

    pub fn prod<'a, I>(&self, factors: I) -> Result<Polynomial, GroebnerError>
        where I: IntoIterator<Item = &'a Polynomial>
    {
        factors.into_iter().try_fold(self.one(), |current, f| self.mul(&current, f))
    }

    ///
    /// Evaluates the polynomial at the given point.
    ///
    pub fn evaluate(&self, f: &Polynomial, values: &[Coefficient]) -> Result<Coefficient, GroebnerError> {
        if values.len() != self.indeterminate_count() {
            return Err(GroebnerError::DimensionMismatch { expected: self.indeterminate_count(), found: values.len() });
        }
        let mut result: Coefficient = 0;
        for m in f.monomials() {
            result = result.checked_add(m.evaluate(values)?).ok_or(GroebnerError::Overflow)?;
        }
        return Ok(result);
    }

    ///
    /// Parses a polynomial in the indeterminates of this ring.
    ///
    /// Terms are separated by `+` or `-`, and each term is a product of factors separated by
    /// whitespace or `*`. A factor is either an integer or an indeterminate name, optionally raised
    /// to a power via `^`. This accepts both the output of [`IntegerPolyRing::format()`] and the
    /// positional style `1 x^2 y^0 + -3 x^0 y^1`.
    ///
    pub fn parse(&self, input: &str) -> Result<Polynomial, ParsePolynomialError> {
        let mut terms: Vec<(Coefficient, String)> = Vec::new();
        let mut current = String::new();
        let mut sign: Coefficient = 1;
        let mut expects_term = false;
        for c in input.chars() {
            if c == '+' || c == '-' {
                if current.trim().is_empty() {
                    if c == '-' {
                        sign = -sign;
                    }
                } else {
                    terms.push((sign, std::mem::take(&mut current)));
                    sign = if c == '-' { -1 } else { 1 };
                }
                expects_term = true;
            } else {
                current.push(c);
                if !c.is_whitespace() {
                    expects_term = false;
                }
            }
        }
        if expects_term {
            return Err(ParsePolynomialError::DanglingOperator);
        }
        if !current.trim().is_empty() {
            terms.push((sign, current));
        }

        let mut monomials = Vec::with_capacity(terms.len());
        for (sign, term) in terms {
            let mut coefficient = sign;
            let mut degrees = vec![0 as MonomialExponent; self.indeterminate_count()];
            for factor in term.split(|c: char| c.is_whitespace() || c == '*').filter(|f| !f.is_empty()) {
                if let Ok(value) = factor.parse::<Coefficient>() {
                    coefficient = coefficient.checked_mul(value).ok_or(GroebnerError::Overflow)?;
                    continue;
                }
                let (name, exponent) = match factor.split_once('^') {
                    Some((name, exponent)) => (name, exponent.parse::<MonomialExponent>().map_err(|_| ParsePolynomialError::InvalidFactor(factor.to_owned()))?),
                    None => (factor, 1)
                };
                let index = self.variable_index(name).ok_or_else(|| ParsePolynomialError::UnknownVariable(name.to_owned()))?;
                degrees[index] = degrees[index].checked_add(exponent).ok_or(GroebnerError::Overflow)?;
            }
            monomials.push(Monomial::new(degrees, coefficient));
        }
        return Ok(self.from_monomials(monomials)?);
    }

    pub fn format<'a>(&'a self, f: &'a Polynomial) -> PolynomialDisplayWrapper<'a> {
        PolynomialDisplayWrapper { ring: self, poly: f }
    }
}

pub struct PolynomialDisplayWrapper<'a> {
    ring: &'a IntegerPolyRing,
    poly: &'a Polynomial
}

impl<'a> Display for PolynomialDisplayWrapper<'a> {

    fn fmt(&self, out: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.poly.is_zero() {
            return write!(out, "0");
        }
        for (i, m) in self.poly.monomials().iter().enumerate() {
            if i != 0 {
                write!(out, " + ")?;
            }
            let is_constant = m.degrees().iter().all(|e| *e == 0);
            if m.coefficient() != 1 || is_constant {
                write!(out, "{}", m.coefficient())?;
                if !is_constant {
                    write!(out, " * ")?;
                }
            }
            let mut needs_separator = false;
            for (name, e) in self.ring.variables().iter().zip(m.degrees().iter()) {
                if *e > 0 {
                    if needs_separator {
                        write!(out, " * ")?;
                    }
                    write!(out, "{}", name)?;
                    needs_separator = true;
                }
                if *e > 1 {
                    write!(out, "^{}", e)?;
                }
            }
        }
        return Ok(());
    }
}

#[cfg(test)]
fn random_poly(ring: &IntegerPolyRing, rng: &mut oorandom::Rand64) -> Polynomial {
    let terms = rng.rand_range(0..5);
    ring.from_terms((0..terms).map(|_| (
        rng.rand_range(0..9) as Coefficient - 4,
        (0..ring.indeterminate_count()).map(|_| rng.rand_range(0..3) as MonomialExponent).collect()
    ))).unwrap()
}

#[test]
fn test_normalize() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.from_terms([
        (1, vec![0, 1]),
        (3, vec![2, 0]),
        (-1, vec![0, 1]),
        (2, vec![1, 1]),
        (0, vec![0, 0]),
        (4, vec![2, 0])
    ]).unwrap();
    assert_eq!(&[Monomial::new(vec![2, 0], 7), Monomial::new(vec![1, 1], 2)], f.monomials());
    assert_eq!(Some(&Monomial::new(vec![2, 0], 7)), f.lt());
    assert!(f.is_valid(Lex));
}

#[test]
fn test_normalize_idempotent() {
    let ring = IntegerPolyRing::with_indeterminates(3);
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..100 {
        let f = random_poly(&ring, &mut rng);
        assert!(f.is_valid(Lex));
        let renormalized = ring.from_monomials(f.monomials().to_vec()).unwrap();
        assert_eq!(f, renormalized);
    }
}

#[test]
fn test_zero() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.from_terms([(0, vec![1, 1]), (0, vec![0, 0])]).unwrap();
    assert!(ring.is_zero(&f));
    assert_eq!(0, f.len());
    assert_eq!(None, f.lt());
    assert_eq!("0", format!("{}", ring.format(&f)));
    assert_eq!("0", f.canonical_key());
    assert_eq!(ring.zero(), ring.constant(0));
}

#[test]
fn test_dimension_mismatch() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 2, found: 3 }), ring.from_terms([(1, vec![1, 0, 0])]));
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 2, found: 1 }), ring.monomial(vec![1], 1));
    let other = IntegerPolyRing::new(["x", "y", "z"]);
    let f = other.indeterminate(2);
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 2, found: 3 }), ring.add(&ring.one(), &f));
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 2, found: 3 }), ring.mul(&f, &ring.one()));
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 2, found: 3 }), Polynomial::try_from(vec![Monomial::new(vec![1, 0], 1), Monomial::new(vec![1, 0, 0], 1)]));
}

#[test]
fn test_add_sub() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("x^2 + 2 * x * y^2").unwrap();
    let g = ring.parse("x * y + 2 * y^3 + -1").unwrap();
    assert_eq!(ring.parse("x^2 + 2 * x * y^2 + x * y + 2 * y^3 - 1").unwrap(), ring.add(&f, &g).unwrap());
    assert_eq!(ring.parse("x^2 + 2 * x * y^2 - x * y - 2 * y^3 + 1").unwrap(), ring.sub(&f, &g).unwrap());
    assert!(ring.is_zero(&ring.sub(&f, &f).unwrap()));
}

#[test]
fn test_sub_inverse() {
    let ring = IntegerPolyRing::with_indeterminates(3);
    let mut rng = oorandom::Rand64::new(3);
    for _ in 0..100 {
        let f = random_poly(&ring, &mut rng);
        assert_eq!(Polynomial::zero(), ring.sub(&f, &f).unwrap());
    }
}

#[test]
fn test_negate() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("x * y + 2 * y^3 - 1").unwrap();
    assert_eq!(ring.parse("-1 * x * y - 2 * y^3 + 1").unwrap(), ring.negate(&f).unwrap());
    assert_eq!(f, ring.negate(&ring.negate(&f).unwrap()).unwrap());
    assert_eq!(ring.zero(), ring.negate(&ring.zero()).unwrap());
    assert_eq!(Err(GroebnerError::Overflow), ring.negate(&ring.constant(Coefficient::MIN)));
}

#[test]
fn test_into_monomials() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("2 - y + x").unwrap();
    let expected = vec![Monomial::new(vec![1, 0], 1), Monomial::new(vec![0, 1], -1), Monomial::new(vec![0, 0], 2)];
    assert_eq!(expected, f.clone().into_monomials());
    assert_eq!(expected, Vec::<Monomial>::from(f));
}

#[test]
fn test_mul() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    let x_plus_y = ring.add(&x, &y).unwrap();
    let x_minus_y = ring.sub(&x, &y).unwrap();
    assert_eq!(ring.parse("x^2 - y^2").unwrap(), ring.mul(&x_plus_y, &x_minus_y).unwrap());
    assert_eq!(ring.parse("x^3 + 3 x^2 y + 3 x y^2 + y^3").unwrap(), ring.pow(&x_plus_y, 3).unwrap());
    assert_eq!(ring.zero(), ring.mul(&x_plus_y, &ring.zero()).unwrap());
}

#[test]
fn test_mul_distributive() {
    let ring = IntegerPolyRing::with_indeterminates(3);
    let mut rng = oorandom::Rand64::new(4);
    for _ in 0..100 {
        let f = random_poly(&ring, &mut rng);
        let g = random_poly(&ring, &mut rng);
        let h = random_poly(&ring, &mut rng);
        let lhs = ring.mul(&f, &ring.add(&g, &h).unwrap()).unwrap();
        let rhs = ring.add(&ring.mul(&f, &g).unwrap(), &ring.mul(&f, &h).unwrap()).unwrap();
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn test_mul_monomial() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("x * y + 2 * y^3 - 1").unwrap();
    let m = ring.monomial(vec![1, 0], -3).unwrap();
    assert_eq!(ring.mul(&f, &ring.from_monomials(vec![m.clone()]).unwrap()).unwrap(), ring.mul_monomial(&f, &m).unwrap());
    assert_eq!(ring.zero(), ring.mul_monomial(&f, &m.with_coefficient(0)).unwrap());
}

#[test]
fn test_canonical_key() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("x * y + 2 * y^3 - 1").unwrap();
    assert_eq!("1:1,1|2:0,3|-1:0,0", f.canonical_key());
    let g = ring.parse("-1 + 2 y^3 + y x").unwrap();
    assert_eq!(f.canonical_key(), g.canonical_key());
    assert_ne!(f.canonical_key(), ring.negate(&f).unwrap().canonical_key());
}

#[test]
fn test_format() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    assert_eq!("x^2 + 2 * x * y^2", format!("{}", ring.format(&ring.parse("2 x^1 y^2 + 1 x^2 y^0").unwrap())));
    assert_eq!("x * y + 2 * y^3 + -1", format!("{}", ring.format(&ring.parse("1 x^1 y^1 + 2 x^0 y^3 + -1 x^0 y^0").unwrap())));
    assert_eq!("-1 * x", format!("{}", ring.format(&ring.linear_term(0, -1))));
}

#[test]
fn test_parse() {
    let ring = IntegerPolyRing::new(["x_{1,1}", "x_{1,2}"]);
    let f = ring.parse("x_{1,1} * x_{1,2}^2 - 3").unwrap();
    assert_eq!(ring.from_terms([(1, vec![1, 2]), (-3, vec![0, 0])]).unwrap(), f);
    assert_eq!(Err(ParsePolynomialError::UnknownVariable("z".to_owned())), ring.parse("x_{1,1} + z"));
    assert_eq!(Err(ParsePolynomialError::InvalidFactor("x_{1,1}^a".to_owned())), ring.parse("x_{1,1}^a"));
    assert_eq!(Err(ParsePolynomialError::DanglingOperator), ring.parse("x_{1,1} +"));
    assert_eq!(ring.zero(), ring.parse("0").unwrap());
    assert_eq!(ring.zero(), ring.parse("").unwrap());
}

#[test]
fn test_parse_format_inverse() {
    let ring = IntegerPolyRing::new(["x", "y", "z"]);
    let mut rng = oorandom::Rand64::new(5);
    for _ in 0..50 {
        let f = random_poly(&ring, &mut rng);
        assert_eq!(f, ring.parse(&format!("{}", ring.format(&f))).unwrap());
    }
}

#[test]
fn test_evaluate() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("x * y + 2 * y^3 - 1").unwrap();
    assert_eq!(3 * 2 + 2 * 8 - 1, ring.evaluate(&f, &[3, 2]).unwrap());
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 2, found: 1 }), ring.evaluate(&f, &[3]));
}

#[test]
fn test_serialize() {
    let ring = IntegerPolyRing::new(["x", "y"]);
    let f = ring.parse("x * y + 2 * y^3 - 1").unwrap();
    let json = serde_json::to_string(&f).unwrap();
    assert_eq!(r#"[{"degrees":[1,1],"coefficient":1},{"degrees":[0,3],"coefficient":2},{"degrees":[0,0],"coefficient":-1}]"#, json);
    assert_eq!(f, serde_json::from_str::<Polynomial>(&json).unwrap());

    let unnormalized = r#"[{"degrees":[0,0],"coefficient":-1},{"degrees":[1,1],"coefficient":1},{"degrees":[0,0],"coefficient":1}]"#;
    assert_eq!(ring.parse("x * y").unwrap(), serde_json::from_str::<Polynomial>(unnormalized).unwrap());
    assert!(serde_json::from_str::<Polynomial>(r#"[{"degrees":[0,0],"coefficient":-1},{"degrees":[1],"coefficient":1}]"#).is_err());
}
