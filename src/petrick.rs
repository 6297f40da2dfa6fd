//! Petrick's method for the cyclic part of the prime implicant chart
//!
//! The residual chart is read as a product of sums: for every minterm, at
//! least one of its coverers must be chosen. The product is multiplied out one
//! clause at a time into a set of candidate covers. Candidates are bitsets
//! over the chart's implicants in canonical order.
//!
//! A candidate that already contains a coverer of the current clause is
//! carried forward unchanged (absorption `X(X + Y) = X`). The supersets it
//! would otherwise spawn are never of minimum size.
//!
//! # Truncation
//!
//! The expansion can grow exponentially. Whenever a step leaves more than
//! `cap` candidates, only the `retain` smallest ones survive (ties broken by
//! canonical order) and the outcome is flagged as truncated. A truncated
//! outcome is still a valid cover, but it is no longer guaranteed to be of
//! minimum size.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, HashSet};

use tracing::{trace, warn};

use crate::table::CoverageTable;
use crate::term::Term;
use crate::MinimizerConfig;

/// A set of implicant indices stored as a bitset
///
/// Ordering compares the ascending index sequences lexicographically, which
/// matches the order of the corresponding canonically sorted term lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Candidate {
    words: Box<[u64]>,
    len: usize,
}

impl Candidate {
    fn empty(num_implicants: usize) -> Self {
        Candidate {
            words: vec![0; num_implicants.div_ceil(64)].into_boxed_slice(),
            len: 0,
        }
    }

    fn contains(&self, index: usize) -> bool {
        self.words[index / 64] >> (index % 64) & 1 == 1
    }

    /// A copy with `index` added; `index` must not be present yet
    fn with(&self, index: usize) -> Self {
        let mut words = self.words.clone();
        words[index / 64] |= 1 << (index % 64);
        Candidate {
            words,
            len: self.len + 1,
        }
    }

    fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            (0..64)
                .filter(move |&bit| word >> bit & 1 == 1)
                .map(move |bit| w * 64 + bit)
        })
    }

    /// Whether any index above `word * 64 + bit` is present
    fn any_above(&self, word: usize, bit: u32) -> bool {
        let upper = u64::MAX.checked_shl(bit + 1).unwrap_or(0);
        self.words[word] & upper != 0 || self.words[word + 1..].iter().any(|&w| w != 0)
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        for (w, (&x, &y)) in self.words.iter().zip(other.words.iter()).enumerate() {
            let diff = x ^ y;
            if diff == 0 {
                continue;
            }
            // Both sequences agree below the lowest differing index. The side
            // holding it is smaller unless the other side ends right there.
            let bit = diff.trailing_zeros();
            let self_holds = x >> bit & 1 == 1;
            let (lacking, when_longer) = if self_holds {
                (other, Ordering::Less)
            } else {
                (self, Ordering::Greater)
            };
            return if lacking.any_above(w, bit) {
                when_longer
            } else {
                when_longer.reverse()
            };
        }
        Ordering::Equal
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Enumerates minimum covers of a residual chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetrickSolver {
    cap: usize,
    retain: usize,
}

/// Result of [`PetrickSolver::solve`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetrickOutcome {
    /// Every candidate of the minimum observed size, each sorted canonically
    pub candidates: Vec<Vec<Term>>,
    /// Whether the candidate cap fired at least once
    pub truncated: bool,
}

impl PetrickSolver {
    /// Create a solver that keeps the `retain` smallest candidates whenever
    /// more than `cap` exist
    pub fn new(cap: usize, retain: usize) -> Self {
        PetrickSolver { cap, retain }
    }

    /// Create a solver from the Petrick settings of a config
    pub fn from_config(config: &MinimizerConfig) -> Self {
        PetrickSolver::new(config.petrick_cap, config.petrick_retain)
    }

    /// Expand the chart and return all smallest covering sets
    ///
    /// An empty chart yields a single empty candidate.
    ///
    /// # Examples
    ///
    /// ```
    /// use quine_logic::petrick::PetrickSolver;
    /// use quine_logic::table::CoverageTable;
    /// use quine_logic::Term;
    ///
    /// let (p, q, r): (Term, Term, Term) =
    ///     ("0-".parse().unwrap(), "-1".parse().unwrap(), "1-".parse().unwrap());
    /// let chart = CoverageTable::from_rows([
    ///     (1, vec![p.clone(), q.clone()]),
    ///     (3, vec![q.clone(), r.clone()]),
    /// ]);
    ///
    /// let outcome = PetrickSolver::new(2000, 1000).solve(&chart);
    /// assert_eq!(outcome.candidates, vec![vec![q]]);
    /// assert!(!outcome.truncated);
    /// ```
    pub fn solve(&self, residual: &CoverageTable) -> PetrickOutcome {
        let implicants: Vec<Term> = residual
            .iter()
            .flat_map(|(_, coverers)| coverers.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let positions: BTreeMap<&Term, usize> = implicants
            .iter()
            .enumerate()
            .map(|(i, term)| (term, i))
            .collect();

        let mut candidates: HashSet<Candidate> =
            HashSet::from([Candidate::empty(implicants.len())]);
        let mut truncated = false;

        for (minterm, coverers) in residual.iter() {
            let clause: Vec<usize> = coverers
                .iter()
                .filter_map(|term| positions.get(term).copied())
                .collect();

            let mut expanded: HashSet<Candidate> = HashSet::with_capacity(candidates.len());
            for combo in candidates {
                if clause.iter().any(|&i| combo.contains(i)) {
                    expanded.insert(combo);
                    continue;
                }
                for &i in &clause {
                    expanded.insert(combo.with(i));
                }
            }
            candidates = expanded;

            if candidates.len() > self.cap {
                trace!(
                    minterm,
                    candidates = candidates.len(),
                    retain = self.retain,
                    "truncating petrick expansion"
                );
                candidates = self.keep_smallest(candidates).into_iter().collect();
                truncated = true;
            }
            trace!(minterm, candidates = candidates.len(), "petrick step");
        }

        if truncated {
            warn!(
                cap = self.cap,
                retain = self.retain,
                "petrick expansion was truncated; covers may not be minimal"
            );
        }

        let Some(minimum) = candidates.iter().map(|c| c.len).min() else {
            return PetrickOutcome {
                candidates: Vec::new(),
                truncated,
            };
        };

        let mut smallest: Vec<Candidate> = candidates
            .into_iter()
            .filter(|candidate| candidate.len == minimum)
            .collect();
        smallest.sort_unstable();

        PetrickOutcome {
            candidates: smallest
                .iter()
                .map(|candidate| {
                    candidate
                        .indices()
                        .map(|i| implicants[i].clone())
                        .collect()
                })
                .collect(),
            truncated,
        }
    }

    /// The `retain` smallest candidates, ties in canonical order
    fn keep_smallest(&self, candidates: HashSet<Candidate>) -> Vec<Candidate> {
        let mut ordered: Vec<Candidate> = candidates.into_iter().collect();
        ordered.sort_unstable_by(|a, b| a.len.cmp(&b.len).then_with(|| a.cmp(b)));
        ordered.truncate(self.retain);
        ordered
    }
}

impl Default for PetrickSolver {
    fn default() -> Self {
        PetrickSolver::from_config(&MinimizerConfig::default())
    }
}
