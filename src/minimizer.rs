//! The minimization pipeline
//!
//! Validation happens up front; once it passes, the stages run in order:
//! encoding, elimination rounds, the coverage chart, essential extraction,
//! Petrick expansion, final selection and formatting.

use std::collections::BTreeSet;

use tracing::debug;

use crate::elimination::EliminationEngine;
use crate::encoder::encode;
use crate::error::MinimizationError;
use crate::format::format_cover;
use crate::petrick::PetrickSolver;
use crate::table::{select_essentials, CoverageTable, Essentials};
use crate::term::Term;
use crate::{MinimizerConfig, MintermId, MAX_VARIABLES};

/// Everything a minimization run produces
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Minimization {
    /// Algebraic form of each entry of `solutions`, e.g. `"AB' + C"`
    pub simplified_forms: Vec<String>,
    /// Every minimum cover, each sorted canonically
    pub solutions: Vec<Vec<Term>>,
    /// Implicants that are the sole coverer of some required minterm
    pub essential_prime_implicants: Vec<Term>,
    /// All prime implicants, in discovery order
    pub prime_implicants: Vec<Term>,
    /// Set when the Petrick expansion hit its cap, in which case
    /// `solutions` are valid covers but may not be minimum
    pub truncated: bool,
}

impl Minimization {
    /// `(terms, literals)` of the first solution, if any
    pub fn cost(&self) -> Option<(usize, usize)> {
        self.solutions.first().map(|cover| {
            let literals = cover.iter().map(Term::literal_count).sum();
            (cover.len(), literals)
        })
    }

    /// Whether the function reduces to the constant `1`
    pub fn is_constant_true(&self) -> bool {
        self.simplified_forms.first().is_some_and(|form| form == "1")
    }
}

/// Minimize with the default [`MinimizerConfig`]
///
/// `variables.len()` fixes the number of variables; variable `0` is the most
/// significant bit of each id.
///
/// # Examples
///
/// ```
/// use quine_logic::minimize;
///
/// # fn main() -> Result<(), quine_logic::MinimizationError> {
/// let result = minimize(&[1, 3], &[], &["A", "B"])?;
/// assert_eq!(result.simplified_forms, vec!["B"]);
/// assert_eq!(result.essential_prime_implicants.len(), 1);
/// # Ok(())
/// # }
/// ```
pub fn minimize<S: AsRef<str>>(
    minterms: &[MintermId],
    dont_cares: &[MintermId],
    variables: &[S],
) -> Result<Minimization, MinimizationError> {
    minimize_with_config(minterms, dont_cares, variables, &MinimizerConfig::default())
}

/// Minimize with an explicit configuration
///
/// # Errors
///
/// Input is rejected before any work starts when:
/// - the config is inconsistent ([`MinimizationError::InvalidConfig`])
/// - there are more than [`MAX_VARIABLES`] variables
/// - an id does not fit in the variable count ([`MinimizationError::InvalidDomain`])
/// - an id is repeated within one list ([`MinimizationError::DuplicateValue`])
/// - an id is both a minterm and a don't-care ([`MinimizationError::ConflictingInput`])
///
/// An empty minterm list is not an error; it yields an empty [`Minimization`].
pub fn minimize_with_config<S: AsRef<str>>(
    minterms: &[MintermId],
    dont_cares: &[MintermId],
    variables: &[S],
    config: &MinimizerConfig,
) -> Result<Minimization, MinimizationError> {
    config.validate()?;

    let num_vars = variables.len();
    if num_vars > MAX_VARIABLES {
        return Err(MinimizationError::TooManyVariables {
            requested: num_vars,
            max: MAX_VARIABLES,
        });
    }

    let minterm_terms = encode(minterms, num_vars)?;
    let dont_care_terms = encode(dont_cares, num_vars)?;
    let required = distinct(minterms)?;
    let optional = distinct(dont_cares)?;
    if let Some(&value) = dont_cares.iter().find(|id| required.contains(id)) {
        return Err(MinimizationError::ConflictingInput { value });
    }

    if required.is_empty() {
        debug!(
            num_vars,
            dont_cares = optional.len(),
            "no required minterms; nothing to minimize"
        );
        return Ok(Minimization::default());
    }

    let entries = minterm_terms
        .into_iter()
        .zip(minterms.iter().copied())
        .chain(dont_care_terms.into_iter().zip(dont_cares.iter().copied()));
    let elimination = EliminationEngine::new(num_vars, entries)?.run();

    let table = CoverageTable::build(&elimination.coverage, &required);
    let Essentials {
        essentials,
        residual,
    } = select_essentials(&table);

    let outcome = PetrickSolver::from_config(config).solve(&residual);
    let solutions = final_covers(outcome.candidates, &essentials);
    let simplified_forms: Vec<String> = solutions
        .iter()
        .map(|cover| format_cover(cover, variables))
        .collect();

    debug!(
        num_vars,
        minterms = required.len(),
        dont_cares = optional.len(),
        rounds = elimination.rounds,
        primes = elimination.prime_implicants.len(),
        essentials = essentials.len(),
        residual = residual.len(),
        solutions = solutions.len(),
        truncated = outcome.truncated,
        "minimization finished"
    );

    Ok(Minimization {
        simplified_forms,
        solutions,
        essential_prime_implicants: essentials,
        prime_implicants: elimination.prime_implicants,
        truncated: outcome.truncated,
    })
}

fn distinct(values: &[MintermId]) -> Result<BTreeSet<MintermId>, MinimizationError> {
    let mut seen = BTreeSet::new();
    for &value in values {
        if !seen.insert(value) {
            return Err(MinimizationError::DuplicateValue { value });
        }
    }
    Ok(seen)
}

/// Union the essentials into every candidate and keep the smallest results
fn final_covers(candidates: Vec<Vec<Term>>, essentials: &[Term]) -> Vec<Vec<Term>> {
    let combined: BTreeSet<BTreeSet<Term>> = candidates
        .into_iter()
        .map(|candidate| {
            candidate
                .into_iter()
                .chain(essentials.iter().cloned())
                .collect()
        })
        .collect();

    let Some(minimum) = combined.iter().map(BTreeSet::len).min() else {
        return Vec::new();
    };

    combined
        .into_iter()
        .filter(|cover| cover.len() == minimum)
        .map(|cover| cover.into_iter().collect())
        .collect()
}
