//! Algebraic rendering of covers
//!
//! Uses the classic textbook notation: juxtaposition for AND, a trailing `'`
//! for complement and ` + ` for OR, e.g. `AB' + C`.

use crate::term::{Bit, Term};

/// Complement marker appended to a negated variable
pub const COMPLEMENT: char = '\'';

/// Separator placed between the products of a cover
pub const OR_SEPARATOR: &str = " + ";

/// Render one product term as concatenated literals
///
/// The universal term has no literals and renders as `"1"`.
///
/// # Examples
///
/// ```
/// use quine_logic::format::format_term;
/// use quine_logic::Term;
///
/// let term: Term = "1-0".parse().unwrap();
/// assert_eq!(format_term(&term, &["A", "B", "C"]), "AC'");
/// ```
pub fn format_term<S: AsRef<str>>(term: &Term, variables: &[S]) -> String {
    if term.is_universal() {
        return "1".to_string();
    }

    let mut product = String::new();
    for (bit, variable) in term.bits().iter().zip(variables) {
        match bit {
            Bit::One => product.push_str(variable.as_ref()),
            Bit::Zero => {
                product.push_str(variable.as_ref());
                product.push(COMPLEMENT);
            }
            Bit::DontCare => {}
        }
    }
    product
}

/// Render a cover as a sum of products
///
/// A cover containing the universal term is the constant-true function and
/// renders as `"1"` on its own. An empty cover is the constant-false function
/// and renders as `"0"`.
///
/// # Examples
///
/// ```
/// use quine_logic::format::format_cover;
/// use quine_logic::Term;
///
/// let cover: Vec<Term> = vec!["01".parse().unwrap(), "1-".parse().unwrap()];
/// assert_eq!(format_cover(&cover, &["A", "B"]), "A'B + A");
/// ```
pub fn format_cover<S: AsRef<str>>(cover: &[Term], variables: &[S]) -> String {
    if cover.is_empty() {
        return "0".to_string();
    }
    if cover.iter().any(Term::is_universal) {
        return "1".to_string();
    }

    cover
        .iter()
        .map(|term| format_term(term, variables))
        .collect::<Vec<_>>()
        .join(OR_SEPARATOR)
}
