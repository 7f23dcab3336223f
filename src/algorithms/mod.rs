///
/// Contains an implementation of Buchberger's algorithm over the integers, together
/// with the reduction and S-polynomial operations it is built from.
///
pub mod buchberger;
