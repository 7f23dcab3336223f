///
/// This module contains [`multivariate::Monomial`] and [`multivariate::Lex`], and in
/// [`multivariate::ordered`] the ring `Z[X1, ..., Xn]` of integer polynomials whose terms
/// are stored sorted w.r.t. [`multivariate::Lex`].
///
pub mod multivariate;
