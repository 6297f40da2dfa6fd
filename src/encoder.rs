//! Binary encoding of minterm ids

use crate::error::MinimizationError;
use crate::term::Term;
use crate::MintermId;

/// Encode every id as a term of exactly `width` positions
///
/// The output preserves input order. The first id that does not fit in
/// `width` bits aborts the whole batch.
///
/// # Examples
///
/// ```
/// use quine_logic::encoder::encode;
///
/// let terms = encode(&[0, 3, 5], 3).unwrap();
/// let rendered: Vec<String> = terms.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, ["000", "011", "101"]);
/// ```
pub fn encode(values: &[MintermId], width: usize) -> Result<Vec<Term>, MinimizationError> {
    values
        .iter()
        .map(|&value| Term::from_minterm(value, width))
        .collect()
}
