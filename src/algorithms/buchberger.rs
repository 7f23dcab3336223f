use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::computation::*;
use crate::error::GroebnerError;
use crate::rings::multivariate::*;
use crate::rings::multivariate::ordered::*;

///
/// Decides which of the remainders that occur while reducing an S-polynomial
/// are added to the basis.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum CandidatePolicy {
    /// Accept a remainder only if it is nonzero, not yet part of the basis, and its
    /// leading term is not a multiple (with exact coefficient quotient) of the leading
    /// term of any current basis element
    #[default]
    Irreducible,
    /// Accept every nonzero remainder that is not yet part of the basis; this usually
    /// makes the basis grow until one of the bounds of [`BuchbergerConfig`] is hit
    Every
}

///
/// Configuration of [`buchberger()`].
///
/// # Example
/// ```
/// # use zz_groebner::algorithms::buchberger::*;
/// let config = BuchbergerConfig::default()
///     .with_max_basis_len(Some(100))
///     .with_product_criterion(false);
/// assert_eq!(Some(100), config.max_basis_len);
/// assert_eq!(CandidatePolicy::Irreducible, config.candidate_policy);
/// ```
///
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct BuchbergerConfig {
    /// the computation fails with [`GroebnerError::ResourceExhausted`] as soon as the basis
    /// gets longer than this
    pub max_basis_len: Option<usize>,
    /// the computation fails with [`GroebnerError::ResourceExhausted`] as soon as more than
    /// this many S-polynomials have been reduced
    pub max_spolys: Option<usize>,
    pub use_product_criterion: bool,
    pub candidate_policy: CandidatePolicy
}

impl Default for BuchbergerConfig {

    fn default() -> Self {
        Self {
            max_basis_len: Some(10_000),
            max_spolys: Some(1_000_000),
            use_product_criterion: true,
            candidate_policy: CandidatePolicy::Irreducible
        }
    }
}

impl BuchbergerConfig {

    pub fn with_max_basis_len(mut self, max_basis_len: Option<usize>) -> Self {
        self.max_basis_len = max_basis_len;
        self
    }

    pub fn with_max_spolys(mut self, max_spolys: Option<usize>) -> Self {
        self.max_spolys = max_spolys;
        self
    }

    pub fn with_product_criterion(mut self, use_product_criterion: bool) -> Self {
        self.use_product_criterion = use_product_criterion;
        self
    }

    pub fn with_candidate_policy(mut self, candidate_policy: CandidatePolicy) -> Self {
        self.candidate_policy = candidate_policy;
        self
    }
}

///
/// Returns `true` if the exponent vector of `m` is componentwise at least the exponent
/// vector of `divisor`, and both terms are nonzero. Coefficients are otherwise ignored.
///
pub fn is_multiple(m: &Monomial, divisor: &Monomial) -> Result<bool, GroebnerError> {
    if m.is_zero() || divisor.is_zero() {
        return Ok(false);
    }
    return divisor.divides(m);
}

///
/// Returns the index of the first (i.e. largest) term of `f` that is a multiple of
/// the leading term of `g` in the sense of [`is_multiple()`], or `None` if there is no
/// such term or `g` is zero.
///
pub fn can_reduce(f: &Polynomial, g: &Polynomial) -> Result<Option<usize>, GroebnerError> {
    let Some(lt_g) = g.lt() else {
        return Ok(None);
    };
    for (i, m) in f.monomials().iter().enumerate() {
        if is_multiple(m, lt_g)? {
            return Ok(Some(i));
        }
    }
    return Ok(None);
}

///
/// Cancels the term of `f` located by [`can_reduce()`] by subtracting a suitable multiple
/// of `g`, i.e. computes `f - (m / lt(g)) * g`.
///
/// Fails with [`GroebnerError::InexactDivision`] if `g` cannot reduce `f`, or if the coefficient
/// of the located term is not divisible by the leading coefficient of `g`.
///
pub fn reduce_once(ring: &IntegerPolyRing, f: &Polynomial, g: &Polynomial) -> Result<Polynomial, GroebnerError> {
    ring.check(f)?;
    ring.check(g)?;
    let index = can_reduce(f, g)?.ok_or(GroebnerError::InexactDivision)?;
    let quotient = f.monomials()[index].div_exact(g.lt().unwrap())?;
    return ring.sub(f, &ring.mul_monomial(g, &quotient)?);
}

///
/// Checks whether `m` is a multiple of `divisor` in `Z[X1, ..., Xn]`, i.e. the quotient
/// has nonnegative exponents and an integral coefficient.
///
fn reduces_exactly(m: &Monomial, divisor: &Monomial) -> Result<bool, GroebnerError> {
    Ok(is_multiple(m, divisor)? && m.coefficient().checked_rem(divisor.coefficient()) == Some(0))
}

///
/// Finds the first basis element (in basis order) whose leading term divides some term of `f` with
/// exact coefficient quotient, and returns its index together with the index of the largest
/// such term.
///
fn find_reducer(f: &Polynomial, basis: &[Polynomial]) -> Result<Option<(usize, usize)>, GroebnerError> {
    for (j, g) in basis.iter().enumerate() {
        let Some(lt_g) = g.lt() else {
            continue;
        };
        for (i, m) in f.monomials().iter().enumerate() {
            if reduces_exactly(m, lt_g)? {
                return Ok(Some((j, i)));
            }
        }
    }
    return Ok(None);
}

///
/// Result of [`reduce_fully()`].
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reduction {
    /// all nonzero intermediate remainders, in the order they occurred; the last one is the
    /// final remainder, unless that is zero
    pub candidates: Vec<Polynomial>,
    pub remainder: Polynomial
}

///
/// Repeatedly reduces `f` by elements of `basis` until no basis element can reduce any
/// term of the remainder anymore.
///
/// In every step, the first basis element that can cancel some term of the current remainder is
/// used, where basis elements whose leading coefficient does not divide the coefficient of the
/// term are skipped for that term. Since the cancelled term strictly decreases w.r.t. [`Lex`] among
/// the terms a given reducer can touch, this terminates.
///
#[instrument(skip_all, level = "trace")]
pub fn reduce_fully(ring: &IntegerPolyRing, f: &Polynomial, basis: &[Polynomial]) -> Result<Reduction, GroebnerError> {
    ring.check(f)?;
    let mut candidates = Vec::new();
    let mut current = f.clone();
    while let Some((j, i)) = find_reducer(&current, basis)? {
        let quotient = current.monomials()[i].div_exact(basis[j].lt().unwrap())?;
        let cancelled = current.monomials()[i].clone();
        current = ring.sub(&current, &ring.mul_monomial(&basis[j], &quotient)?)?;
        debug_assert!(current.monomials().iter().all(|m| !ring.order().eq_mon(m, &cancelled)));
        if current.is_zero() {
            break;
        }
        candidates.push(current.clone());
    }
    return Ok(Reduction { candidates, remainder: current });
}

///
/// Computes the remainder of `f` modulo the given polynomials, as done by [`reduce_fully()`].
/// If the result is zero, `f` lies in the ideal generated by `basis`.
///
pub fn multivariate_division(ring: &IntegerPolyRing, f: &Polynomial, basis: &[Polynomial]) -> Result<Polynomial, GroebnerError> {
    Ok(reduce_fully(ring, f, basis)?.remainder)
}

///
/// Computes the S-polynomial of `f` and `g`.
///
/// With `a` the lcm of the leading monomials and `d` the gcd of the leading coefficients,
/// this is `(lc(f) / d) * (a / lm(g)) * g - (lc(g) / d) * (a / lm(f)) * f`. The term with monomial
/// `a` cancels. If one of the inputs is zero, the result is zero.
///
pub fn s_polynomial(ring: &IntegerPolyRing, f: &Polynomial, g: &Polynomial) -> Result<Polynomial, GroebnerError> {
    ring.check(f)?;
    ring.check(g)?;
    let (Some(lt_f), Some(lt_g)) = (f.lt(), g.lt()) else {
        return Ok(ring.zero());
    };
    let d = gcd(lt_f.coefficient(), lt_g.coefficient())?;
    let lcm = lt_f.lcm(lt_g)?;
    let f_factor = lcm.div_exact(&lt_f.with_coefficient(1))?.with_coefficient(lt_g.coefficient() / d);
    let g_factor = lcm.div_exact(&lt_g.with_coefficient(1))?.with_coefficient(lt_f.coefficient() / d);
    return ring.sub(&ring.mul_monomial(g, &g_factor)?, &ring.mul_monomial(f, &f_factor)?);
}

fn gcd(a: Coefficient, b: Coefficient) -> Result<Coefficient, GroebnerError> {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    return Coefficient::try_from(a).map_err(|_| GroebnerError::Overflow);
}

#[derive(PartialEq, Clone, Copy, Eq, Hash)]
struct SPoly(usize, usize);

impl Debug for SPoly {

    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "S({}, {})", self.0, self.1)
    }
}

///
/// Checks whether the S-polynomial is known to reduce to zero by the product criterion, i.e.
/// both leading coefficients are units and the leading monomials are coprime.
///
fn filter_spoly(spoly: SPoly, basis: &[Polynomial]) -> Result<bool, GroebnerError> {
    let lt_i = basis[spoly.0].lt().unwrap();
    let lt_j = basis[spoly.1].lt().unwrap();
    return Ok(lt_i.coefficient().unsigned_abs() == 1 && lt_j.coefficient().unsigned_abs() == 1 && lt_i.is_coprime(lt_j)?);
}

///
/// The basis during the computation, which only grows. New elements schedule their
/// S-polynomials with all earlier elements.
///
struct Basis {
    elements: Vec<Polynomial>,
    keys: HashSet<String>,
    open: VecDeque<SPoly>,
    /// the S-polynomial of every considered pair, or `None` if the pair was skipped
    considered: HashMap<SPoly, Option<Polynomial>>
}

impl Basis {

    fn new() -> Self {
        Self { elements: Vec::new(), keys: HashSet::new(), open: VecDeque::new(), considered: HashMap::new() }
    }

    fn mark_considered(&mut self, spoly: SPoly, s: Option<Polynomial>) {
        let previous = self.considered.insert(spoly, s);
        debug_assert!(previous.is_none());
    }

    fn is_top_reducible(&self, f: &Polynomial) -> Result<bool, GroebnerError> {
        let lt_f = f.lt().unwrap();
        for g in &self.elements {
            let lt_g = g.lt().unwrap();
            if reduces_exactly(lt_f, lt_g)? {
                return Ok(true);
            }
        }
        return Ok(false);
    }

    fn insert(&mut self, f: Polynomial, policy: Option<CandidatePolicy>) -> Result<bool, GroebnerError> {
        if f.is_zero() || self.keys.contains(&f.canonical_key()) {
            return Ok(false);
        }
        if policy == Some(CandidatePolicy::Irreducible) && self.is_top_reducible(&f)? {
            return Ok(false);
        }
        _ = self.keys.insert(f.canonical_key());
        self.elements.push(f);
        let j = self.elements.len() - 1;
        self.open.extend((0..j).map(|i| SPoly(i, j)));
        return Ok(true);
    }
}

///
/// Computes a Groebner basis of the ideal generated by the input basis w.r.t. [`Lex`], using
/// Buchberger's algorithm over the integers.
///
/// For a variant of this function that uses sensible defaults for all parameters, see
/// [`buchberger_simple()`].
///
/// The algorithm considers all pairs of basis elements in the order they are created, reduces
/// their S-polynomials with [`reduce_fully()`] against the current basis, and offers all occurring
/// remainders to the basis, as configured by [`BuchbergerConfig::candidate_policy`]. Elements are
/// never removed, thus the result contains the (nonzero, deduplicated) input polynomials at the
/// front and is in general not minimal; see [`minimal_basis()`]. Since reduction over `Z` only
/// uses exact coefficient quotients, the result need not be a strong Groebner basis.
///
/// Zero polynomials in the input are ignored, so if all inputs are zero, the result is empty.
/// An empty input gives [`GroebnerError::EmptyGeneratingSet`]. All polynomials are checked to
/// belong to `ring` before the computation starts.
///
/// # Explanation of logging output
///
/// The passed computation controller receives the following symbols:
///  - `-` means an S-polynomial was reduced to zero
///  - `s(n)` means the reduction of an S-polynomial produced `n` new basis elements
///  - `c` means an S-polynomial was skipped by the product criterion
///  - `(b=n)` means that the basis has now length `n`
///  - `(S=n)` means that the algorithm still has to consider `n` more S-polynomials
///
#[instrument(skip_all, level = "trace")]
pub fn buchberger<Controller>(ring: &IntegerPolyRing, input_basis: Vec<Polynomial>, config: &BuchbergerConfig, controller: Controller) -> Result<Vec<Polynomial>, GroebnerError>
    where Controller: ComputationController
{
    if input_basis.len() == 0 {
        return Err(GroebnerError::EmptyGeneratingSet);
    }
    input_basis.iter().try_for_each(|f| ring.check(f))?;

    let exhausted = |basis: &Basis, spolys: usize| GroebnerError::ResourceExhausted { basis_len: basis.elements.len(), spolys };
    let mut basis = Basis::new();
    for f in input_basis {
        _ = basis.insert(f, None)?;
    }
    if config.max_basis_len.is_some_and(|max| basis.elements.len() > max) {
        tracing::debug!(basis_len = basis.elements.len(), "input exceeds basis length bound");
        return Err(exhausted(&basis, 0));
    }
    log_progress!(controller, "(b={})(S={})", basis.elements.len(), basis.open.len());

    let mut reduced_spolys = 0;
    while let Some(spoly) = basis.open.pop_front() {
        if config.use_product_criterion && filter_spoly(spoly, &basis.elements)? {
            basis.mark_considered(spoly, None);
            log_progress!(controller, "c");
            continue;
        }
        reduced_spolys += 1;
        if config.max_spolys.is_some_and(|max| reduced_spolys > max) {
            tracing::debug!(basis_len = basis.elements.len(), spolys = reduced_spolys, "S-polynomial bound exceeded");
            return Err(exhausted(&basis, reduced_spolys));
        }

        let s = s_polynomial(ring, &basis.elements[spoly.0], &basis.elements[spoly.1])?;
        basis.mark_considered(spoly, Some(s.clone()));
        let Reduction { mut candidates, remainder } = reduce_fully(ring, &s, &basis.elements)?;
        if remainder.is_zero() {
            log_progress!(controller, "-");
        } else if candidates.len() == 0 {
            candidates.push(remainder);
        }

        let mut accepted = 0;
        for candidate in candidates {
            if basis.insert(candidate, Some(config.candidate_policy))? {
                accepted += 1;
                if config.max_basis_len.is_some_and(|max| basis.elements.len() > max) {
                    tracing::debug!(basis_len = basis.elements.len(), spolys = reduced_spolys, "basis length bound exceeded");
                    return Err(exhausted(&basis, reduced_spolys));
                }
            }
        }
        if accepted > 0 {
            tracing::debug!(?spoly, accepted, basis_len = basis.elements.len(), "extended basis");
            log_progress!(controller, "s({})(b={})(S={})", accepted, basis.elements.len(), basis.open.len());
        }
    }
    return Ok(basis.elements);
}

///
/// Computes a Groebner basis of the ideal generated by the input basis w.r.t. [`Lex`].
///
/// For a variant of this function that allows for more configuration, see [`buchberger()`].
///
pub fn buchberger_simple(ring: &IntegerPolyRing, input_basis: Vec<Polynomial>) -> Result<Vec<Polynomial>, GroebnerError> {
    buchberger(ring, input_basis, &BuchbergerConfig::default(), DontObserve)
}

///
/// Removes all elements from the given basis whose leading term is divisible, with exact
/// coefficient quotient, by the leading term of another remaining element. Elements are
/// considered in order, thus of two elements with mutually divisible leading terms, the first
/// one is removed.
///
/// The ideal generated by the result is in general smaller than the one generated by `basis`,
/// since reduction over `Z` is weaker than over a field; but if `basis` was computed by
/// [`buchberger()`], all elements of the result reduce everything that `basis` reduces at the top.
///
#[stability::unstable(feature = "enable")]
pub fn minimal_basis(ring: &IntegerPolyRing, mut basis: Vec<Polynomial>) -> Result<Vec<Polynomial>, GroebnerError> {
    basis.iter().try_for_each(|f| ring.check(f))?;
    basis.retain(|f| !f.is_zero());
    let mut i = 0;
    while i < basis.len() {
        let lt_f = basis[i].lt().unwrap();
        let mut redundant = false;
        for (j, g) in basis.iter().enumerate() {
            let lt_g = g.lt().unwrap();
            if j != i && reduces_exactly(lt_f, lt_g)? {
                redundant = true;
                break;
            }
        }
        if redundant {
            _ = basis.remove(i);
        } else {
            i += 1;
        }
    }
    return Ok(basis);
}

#[cfg(test)]
fn example_ring() -> IntegerPolyRing {
    IntegerPolyRing::new(["x", "y"])
}

#[cfg(test)]
fn example_input(ring: &IntegerPolyRing) -> Vec<Polynomial> {
    vec![
        ring.parse("x^2 + 2 * x * y^2").unwrap(),
        ring.parse("x * y + 2 * y^3 - 1").unwrap()
    ]
}

#[test]
fn test_is_multiple() {
    let ring = example_ring();
    let m = ring.monomial(vec![2, 1], 3).unwrap();
    assert!(is_multiple(&m, &ring.monomial(vec![1, 1], 5).unwrap()).unwrap());
    assert!(is_multiple(&m, &ring.monomial(vec![2, 1], 1).unwrap()).unwrap());
    assert!(!is_multiple(&m, &ring.monomial(vec![0, 2], 1).unwrap()).unwrap());
    assert!(!is_multiple(&m, &ring.monomial(vec![1, 1], 0).unwrap()).unwrap());
    assert!(!is_multiple(&m.with_coefficient(0), &ring.monomial(vec![1, 1], 1).unwrap()).unwrap());
    assert_eq!(Err(GroebnerError::DimensionMismatch { expected: 3, found: 2 }), is_multiple(&m, &Monomial::new(vec![0, 0, 0], 1)));
}

#[test]
fn test_can_reduce() {
    let ring = example_ring();
    let f = ring.parse("x^2 + 2 * x * y^2 + y").unwrap();
    assert_eq!(Some(0), can_reduce(&f, &ring.parse("-x").unwrap()).unwrap());
    assert_eq!(Some(1), can_reduce(&f, &ring.parse("3 * y^2 + 1").unwrap()).unwrap());
    assert_eq!(Some(1), can_reduce(&f, &ring.parse("2 * y - 1").unwrap()).unwrap());
    assert_eq!(None, can_reduce(&f, &ring.parse("y^3").unwrap()).unwrap());
    assert_eq!(None, can_reduce(&f, &ring.zero()).unwrap());
}

#[test]
fn test_reduce_once() {
    let ring = example_ring();
    let f = ring.parse("x^2 + 2 * x * y^2").unwrap();
    let g = ring.parse("-x").unwrap();
    let reduced = reduce_once(&ring, &f, &g).unwrap();
    assert_eq!(ring.parse("2 * x * y^2").unwrap(), reduced);
    assert!(ring.order().compare(reduced.lt().unwrap(), f.lt().unwrap()) == std::cmp::Ordering::Less);
    assert!(reduced.monomials().iter().all(|m| !ring.order().eq_mon(m, f.lt().unwrap())));

    assert_eq!(Err(GroebnerError::InexactDivision), reduce_once(&ring, &ring.parse("x").unwrap(), &ring.parse("2 * x").unwrap()));
    assert_eq!(Err(GroebnerError::InexactDivision), reduce_once(&ring, &ring.parse("y").unwrap(), &ring.parse("x").unwrap()));

    // the leading term x^2 is not a multiple of y, so the term 2 * x * y^2 is reduced
    let f = ring.parse("x^2 + 2 * x * y^2 + y").unwrap();
    let g = ring.parse("2 * y - 1").unwrap();
    let reduced = reduce_once(&ring, &f, &g).unwrap();
    assert_eq!(ring.parse("x^2 + x * y + y").unwrap(), reduced);
    assert!(ring.order().eq_mon(reduced.lt().unwrap(), f.lt().unwrap()));
    assert!(reduced.monomials().iter().all(|m| !ring.order().eq_mon(m, &f.monomials()[1])));
}

#[test]
fn test_reduce_once_random() {
    let ring = IntegerPolyRing::with_indeterminates(3);
    let mut rng = oorandom::Rand64::new(2);
    let mut reduced_count = 0;
    let mut reduced_non_leading = 0;
    for _ in 0..500 {
        let f = random_nonzero_poly(&ring, &mut rng);
        let g = random_nonzero_poly(&ring, &mut rng);
        let Some(i) = can_reduce(&f, &g).unwrap() else {
            continue;
        };
        let reduced = match reduce_once(&ring, &f, &g) {
            Ok(reduced) => reduced,
            Err(GroebnerError::InexactDivision) => continue,
            Err(e) => panic!("unexpected error {:?}", e)
        };
        reduced_count += 1;
        if i > 0 {
            reduced_non_leading += 1;
        }
        let consumed = &f.monomials()[i];
        assert!(reduced.monomials().iter().all(|m| !ring.order().eq_mon(m, consumed)));
        if let Some(lt) = reduced.lt() {
            assert!(ring.order().compare(lt, f.lt().unwrap()) != std::cmp::Ordering::Greater);
        }
        // terms larger than the consumed one are not touched
        for m in f.monomials().iter().take(i) {
            assert!(reduced.monomials().contains(m));
        }
    }
    assert!(reduced_count > 20);
    assert!(reduced_non_leading > 0);
}

#[test]
fn test_reduce_fully() {
    let ring = example_ring();
    let basis = [ring.parse("x - 1").unwrap(), ring.parse("2 * y").unwrap()];
    let Reduction { candidates, remainder } = reduce_fully(&ring, &ring.parse("x^2 + 3 * y").unwrap(), &basis).unwrap();
    // x^2 + 3y -> x + 3y -> 3y + 1, the term 3y cannot be reduced exactly by 2y
    assert_eq!(vec![ring.parse("x + 3 * y").unwrap(), ring.parse("3 * y + 1").unwrap()], candidates);
    assert_eq!(ring.parse("3 * y + 1").unwrap(), remainder);

    let Reduction { candidates, remainder } = reduce_fully(&ring, &ring.parse("x^2 - 1").unwrap(), &basis).unwrap();
    assert_eq!(vec![ring.parse("x - 1").unwrap()], candidates);
    assert!(remainder.is_zero());
}

#[test]
fn test_s_polynomial() {
    let ring = example_ring();
    let input = example_input(&ring);
    assert_eq!(ring.parse("-x").unwrap(), s_polynomial(&ring, &input[0], &input[1]).unwrap());
    assert_eq!(ring.zero(), s_polynomial(&ring, &input[0], &ring.zero()).unwrap());

    let f = ring.parse("6 * x * y + 1").unwrap();
    let g = ring.parse("4 * x^2 + y").unwrap();
    // lcm x^2 y, gcd 2, thus 3 * y * g - 2 * x * f
    assert_eq!(ring.parse("3 * y^2 - 2 * x").unwrap(), s_polynomial(&ring, &f, &g).unwrap());
}

#[test]
fn test_s_polynomial_cancels_lcm() {
    let ring = IntegerPolyRing::with_indeterminates(3);
    let mut rng = oorandom::Rand64::new(1);
    for _ in 0..200 {
        let f = random_nonzero_poly(&ring, &mut rng);
        let g = random_nonzero_poly(&ring, &mut rng);
        let lcm = f.lt().unwrap().lcm(g.lt().unwrap()).unwrap();
        let s = s_polynomial(&ring, &f, &g).unwrap();
        assert!(s.monomials().iter().all(|m| !ring.order().eq_mon(m, &lcm)));
    }
}

#[cfg(test)]
fn random_nonzero_poly(ring: &IntegerPolyRing, rng: &mut oorandom::Rand64) -> Polynomial {
    loop {
        let terms = rng.rand_range(1..5);
        let result = ring.from_terms((0..terms).map(|_| (
            rng.rand_range(0..9) as Coefficient - 4,
            (0..ring.indeterminate_count()).map(|_| rng.rand_range(0..3) as MonomialExponent).collect()
        ))).unwrap();
        if !result.is_zero() {
            return result;
        }
    }
}

#[test]
fn test_buchberger_small() {
    let ring = example_ring();
    let input = example_input(&ring);

    let actual = buchberger(&ring, input.clone(), &BuchbergerConfig::default(), TEST_LOG_PROGRESS).unwrap();

    let expected = vec![
        ring.parse("x^2 + 2 * x * y^2").unwrap(),
        ring.parse("x * y + 2 * y^3 - 1").unwrap(),
        ring.parse("-x").unwrap(),
        ring.parse("-4 * y^4 + 2 * y").unwrap(),
        ring.parse("2 * y^3 - 1").unwrap()
    ];
    assert_eq!(expected, actual);
    for f in &input {
        assert!(multivariate_division(&ring, f, &actual).unwrap().is_zero());
    }
    assert_s_polynomials_reduce_to_zero(&ring, &actual);
}

///
/// Asserts that the S-polynomial of every pair of basis elements reduces to zero
/// modulo the basis.
///
#[cfg(test)]
pub fn assert_s_polynomials_reduce_to_zero(ring: &IntegerPolyRing, basis: &[Polynomial]) {
    for i in 0..basis.len() {
        for j in (i + 1)..basis.len() {
            let s = s_polynomial(ring, &basis[i], &basis[j]).unwrap();
            let remainder = multivariate_division(ring, &s, basis).unwrap();
            assert!(remainder.is_zero(), "S({}, {}) reduces to {}", i, j, ring.format(&remainder));
        }
    }
}

#[test]
fn test_buchberger_closed_random() {
    let ring = example_ring();
    let mut rng = oorandom::Rand64::new(7);
    let config = BuchbergerConfig::default()
        .with_max_basis_len(Some(30))
        .with_max_spolys(Some(500));
    let mut terminated = 0;
    for _ in 0..40 {
        let input = vec![random_nonzero_poly(&ring, &mut rng), random_nonzero_poly(&ring, &mut rng)];
        let basis = match buchberger(&ring, input.clone(), &config, DontObserve) {
            Ok(basis) => basis,
            Err(GroebnerError::ResourceExhausted { .. }) | Err(GroebnerError::Overflow) => continue,
            Err(e) => panic!("unexpected error {:?}", e)
        };
        terminated += 1;
        for f in &input {
            assert!(multivariate_division(&ring, f, &basis).unwrap().is_zero());
        }
        assert_s_polynomials_reduce_to_zero(&ring, &basis);
    }
    assert!(terminated > 20);
}

#[test]
fn test_buchberger_without_product_criterion() {
    let ring = example_ring();
    let config = BuchbergerConfig::default().with_product_criterion(false);
    let with_criterion = buchberger_simple(&ring, example_input(&ring)).unwrap();
    let without_criterion = buchberger(&ring, example_input(&ring), &config, DontObserve).unwrap();
    assert_eq!(with_criterion, without_criterion);
}

#[test]
fn test_minimal_basis() {
    let ring = example_ring();
    let basis = buchberger_simple(&ring, example_input(&ring)).unwrap();
    let minimal = minimal_basis(&ring, basis).unwrap();
    assert_eq!(vec![ring.parse("-x").unwrap(), ring.parse("2 * y^3 - 1").unwrap()], minimal);

    let f = ring.parse("x + y").unwrap();
    let minimal = minimal_basis(&ring, vec![f.clone(), ring.negate(&f).unwrap()]).unwrap();
    assert_eq!(vec![ring.negate(&f).unwrap()], minimal);
}

#[test]
fn test_buchberger_discards_zero() {
    let ring = example_ring();
    let mut input = example_input(&ring);
    input.insert(1, ring.zero());
    input.push(input[0].clone());
    let actual = buchberger_simple(&ring, input).unwrap();
    assert_eq!(buchberger_simple(&ring, example_input(&ring)).unwrap(), actual);
    assert!(actual.iter().all(|f| !f.is_zero()));

    assert_eq!(Ok(Vec::new()), buchberger_simple(&ring, vec![ring.zero(), ring.zero()]));
}

#[test]
fn test_buchberger_trivial() {
    let ring = example_ring();
    let x = ring.indeterminate(0);
    let y = ring.indeterminate(1);
    // the product criterion applies, so nothing needs to be reduced
    let recorder = RecordProgress::new();
    assert_eq!(vec![x.clone(), y.clone()], buchberger(&ring, vec![x, y], &BuchbergerConfig::default(), recorder.clone()).unwrap());
    assert_eq!("(b=2)(S=1)c", recorder.recorded());
}

#[test]
fn test_buchberger_errors() {
    let ring = example_ring();
    assert_eq!(Err(GroebnerError::EmptyGeneratingSet), buchberger_simple(&ring, Vec::new()));

    let other_ring = IntegerPolyRing::with_indeterminates(3);
    assert_eq!(
        Err(GroebnerError::DimensionMismatch { expected: 2, found: 3 }),
        buchberger_simple(&ring, vec![ring.one(), other_ring.indeterminate(0)])
    );
}

#[test]
fn test_buchberger_resource_exhausted() {
    let ring = example_ring();
    let config = BuchbergerConfig::default()
        .with_candidate_policy(CandidatePolicy::Every)
        .with_max_basis_len(Some(100));
    match buchberger(&ring, example_input(&ring), &config, DontObserve) {
        Err(GroebnerError::ResourceExhausted { basis_len, .. }) => assert_eq!(101, basis_len),
        result => panic!("expected ResourceExhausted, got {:?}", result)
    }

    let config = BuchbergerConfig::default().with_max_spolys(Some(3));
    assert!(matches!(
        buchberger(&ring, example_input(&ring), &config, DontObserve),
        Err(GroebnerError::ResourceExhausted { spolys: 4, .. })
    ));

    let config = BuchbergerConfig::default().with_max_basis_len(Some(1));
    let recorder = RecordProgress::new();
    assert_eq!(
        Err(GroebnerError::ResourceExhausted { basis_len: 2, spolys: 0 }),
        buchberger(&ring, example_input(&ring), &config, recorder.clone())
    );
    assert_eq!("", recorder.recorded());
    assert!(buchberger(&ring, example_input(&ring), &BuchbergerConfig::default().with_max_basis_len(Some(5)), DontObserve).is_ok());
}

#[test]
fn test_buchberger_log() {
    let ring = example_ring();
    let recorder = RecordProgress::new();
    _ = buchberger(&ring, example_input(&ring), &BuchbergerConfig::default(), recorder.clone()).unwrap();
    let log = recorder.recorded();
    assert!(log.starts_with("(b=2)(S=1)"));
    assert!(log.contains("(b=5)"));
    assert!(log.contains("-"));
    assert!(!log.contains("c"));
}

#[test]
fn test_config_serialization() {
    let config = BuchbergerConfig::default()
        .with_max_spolys(None)
        .with_candidate_policy(CandidatePolicy::Every);
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(r#"{"max_basis_len":10000,"max_spolys":null,"use_product_criterion":true,"candidate_policy":"Every"}"#, json);
    assert_eq!(config, serde_json::from_str(&json).unwrap());

    let serializer = serde_assert::Serializer::builder().is_human_readable(false).build();
    let tokens = config.serialize(&serializer).unwrap();
    let mut deserializer = serde_assert::Deserializer::builder(tokens).is_human_readable(false).build();
    assert_eq!(config, BuchbergerConfig::deserialize(&mut deserializer).unwrap());
}
