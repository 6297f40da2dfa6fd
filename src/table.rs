//! Prime implicant chart and essential prime implicant extraction

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::elimination::CoverageMap;
use crate::term::Term;
use crate::MintermId;

/// Mapping from each required minterm to the prime implicants covering it
///
/// Don't-care ids never appear as rows, even though they show up inside the
/// coverage of individual implicants. Coverers are kept in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverageTable {
    rows: BTreeMap<MintermId, Vec<Term>>,
}

impl CoverageTable {
    /// Invert an implicant coverage map, keeping only `required` minterms
    pub fn build(coverage: &CoverageMap, required: &BTreeSet<MintermId>) -> Self {
        let mut rows: BTreeMap<MintermId, Vec<Term>> = BTreeMap::new();
        for (term, covered) in coverage {
            for id in covered.iter().filter(|id| required.contains(id)) {
                rows.entry(*id).or_default().push(term.clone());
            }
        }
        CoverageTable { rows }
    }

    /// Build a table from explicit rows
    pub fn from_rows(rows: impl IntoIterator<Item = (MintermId, Vec<Term>)>) -> Self {
        CoverageTable {
            rows: rows.into_iter().collect(),
        }
    }

    /// Number of minterms still in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether every minterm has been satisfied
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Implicants covering `minterm`, if it is still in the table
    pub fn coverers(&self, minterm: MintermId) -> Option<&[Term]> {
        self.rows.get(&minterm).map(Vec::as_slice)
    }

    /// Iterate over `(minterm, coverers)` rows in ascending minterm order
    pub fn iter(&self) -> impl Iterator<Item = (MintermId, &[Term])> + '_ {
        self.rows.iter().map(|(&id, terms)| (id, terms.as_slice()))
    }

    /// Minterms still in the table
    pub fn minterms(&self) -> impl Iterator<Item = MintermId> + '_ {
        self.rows.keys().copied()
    }

    /// A new table without every minterm that `term` covers
    pub fn without_covered_by(&self, term: &Term) -> Self {
        CoverageTable {
            rows: self
                .rows
                .iter()
                .filter(|(_, coverers)| !coverers.contains(term))
                .map(|(&id, coverers)| (id, coverers.clone()))
                .collect(),
        }
    }

    fn sole_coverer(&self) -> Option<&Term> {
        self.rows
            .values()
            .find(|coverers| coverers.len() == 1)
            .map(|coverers| &coverers[0])
    }
}

/// Output of [`select_essentials`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Essentials {
    /// Essential prime implicants, in the order they were found
    pub essentials: Vec<Term>,
    /// Minterms not covered by any essential
    pub residual: CoverageTable,
}

/// Extract essential prime implicants, iterating to a fixpoint
///
/// Each pass looks for a minterm with exactly one coverer, records that
/// coverer, and derives a new table without everything it covers. The loop
/// stops once no minterm has a unique coverer, so running it again on the
/// residual table changes nothing.
///
/// # Examples
///
/// ```
/// use quine_logic::table::{select_essentials, CoverageTable};
/// use quine_logic::Term;
///
/// let a: Term = "0-".parse().unwrap();
/// let b: Term = "-1".parse().unwrap();
/// let table = CoverageTable::from_rows([
///     (0, vec![a.clone()]),
///     (1, vec![a.clone(), b.clone()]),
///     (3, vec![b.clone()]),
/// ]);
///
/// let selected = select_essentials(&table);
/// assert_eq!(selected.essentials, vec![a, b]);
/// assert!(selected.residual.is_empty());
/// ```
pub fn select_essentials(table: &CoverageTable) -> Essentials {
    let mut essentials: Vec<Term> = Vec::new();
    let mut current = table.clone();

    loop {
        let Some(essential) = current.sole_coverer().cloned() else {
            break;
        };
        current = current.without_covered_by(&essential);
        trace!(
            essential = %essential,
            remaining = current.len(),
            "selected essential prime implicant"
        );
        if !essentials.contains(&essential) {
            essentials.push(essential);
        }
    }

    Essentials {
        essentials,
        residual: current,
    }
}
