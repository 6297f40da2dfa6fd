//! Iterative bit-merging that discovers prime implicants
//!
//! Terms are grouped by their number of `One` bits. Each [`Round`] tries to
//! merge every term of group `i` with every term of group `i + 1`; children
//! land in group `i` of the next round. Whatever is never consumed by a merge
//! is a prime implicant.
//!
//! A round is a pure function of its input. It returns a fresh
//! [`CoverageMap`] snapshot instead of updating a shared one, so the law
//! `coverage(child) = coverage(parent_a) ∪ coverage(parent_b)` can be checked
//! round by round.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::error::MinimizationError;
use crate::term::Term;
use crate::MintermId;

/// Mapping from a term to the original minterm and don't-care ids it subsumes
pub type CoverageMap = BTreeMap<Term, BTreeSet<MintermId>>;

/// The state consumed by one merge round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    /// Terms indexed by popcount group
    pub groups: Vec<Vec<Term>>,
    /// Coverage of every term in `groups` plus every prime found so far
    pub coverage: CoverageMap,
}

/// What a single round produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Input for the following round, one group shorter
    pub next: Round,
    /// Terms of this round that merged with nothing, in canonical order
    pub primes: Vec<Term>,
}

impl Round {
    /// Run one merge round
    pub fn next(&self) -> RoundOutcome {
        let num = self.groups.len().saturating_sub(1);
        let mut next_groups: Vec<BTreeSet<Term>> = vec![BTreeSet::new(); num];
        let mut children: CoverageMap = BTreeMap::new();
        let mut consumed: BTreeSet<&Term> = BTreeSet::new();

        for i in 0..num {
            for a in &self.groups[i] {
                for b in &self.groups[i + 1] {
                    let Some(child) = a.merge(b) else {
                        continue;
                    };
                    consumed.insert(a);
                    consumed.insert(b);

                    let entry = children.entry(child.clone()).or_default();
                    entry.extend(self.coverage_of(a));
                    entry.extend(self.coverage_of(b));
                    next_groups[i].insert(child);
                }
            }
        }

        let primes: Vec<Term> = self
            .groups
            .iter()
            .flatten()
            .filter(|term| !consumed.contains(term))
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Earlier primes and this round's primes keep their coverage unchanged;
        // consumed parents drop out of the snapshot.
        let mut coverage: CoverageMap = self
            .coverage
            .iter()
            .filter(|(term, _)| !consumed.contains(term))
            .map(|(term, ids)| (term.clone(), ids.clone()))
            .collect();
        coverage.extend(children);

        RoundOutcome {
            next: Round {
                groups: next_groups
                    .into_iter()
                    .map(|group| group.into_iter().collect())
                    .collect(),
                coverage,
            },
            primes,
        }
    }

    fn coverage_of(&self, term: &Term) -> impl Iterator<Item = MintermId> + '_ {
        self.coverage.get(term).into_iter().flatten().copied()
    }

    fn is_exhausted(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

/// Result of running the engine to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    /// Every prime implicant, in discovery order
    pub prime_implicants: Vec<Term>,
    /// Coverage of exactly the prime implicants
    pub coverage: CoverageMap,
    /// Number of rounds executed
    pub rounds: usize,
}

/// Drives [`Round`]s until no groups remain
#[derive(Debug, Clone)]
pub struct EliminationEngine {
    initial: Round,
}

impl EliminationEngine {
    /// Group atomic terms by popcount and seed each with its own id
    ///
    /// Fails with [`MinimizationError::WidthMismatch`] when a term does not
    /// have exactly `width` positions.
    pub fn new(
        width: usize,
        entries: impl IntoIterator<Item = (Term, MintermId)>,
    ) -> Result<Self, MinimizationError> {
        let mut groups: Vec<Vec<Term>> = vec![Vec::new(); width + 1];
        let mut coverage: CoverageMap = BTreeMap::new();

        for (term, id) in entries {
            if term.width() != width {
                return Err(MinimizationError::WidthMismatch {
                    expected: width,
                    found: term.width(),
                });
            }
            let ids = coverage.entry(term.clone()).or_default();
            if ids.is_empty() {
                groups[term.ones()].push(term);
            }
            ids.insert(id);
        }

        Ok(EliminationEngine {
            initial: Round { groups, coverage },
        })
    }

    /// The round the engine starts from
    pub fn initial_round(&self) -> &Round {
        &self.initial
    }

    /// Merge until no groups remain and collect the prime implicants
    pub fn run(self) -> Elimination {
        let mut round = self.initial;
        let mut prime_implicants = Vec::new();
        let mut seen = BTreeSet::new();
        let mut rounds = 0;

        while !round.groups.is_empty() && !round.is_exhausted() {
            let outcome = round.next();
            rounds += 1;
            trace!(
                round = rounds,
                primes = outcome.primes.len(),
                children = outcome.next.groups.iter().map(Vec::len).sum::<usize>(),
                "elimination round"
            );

            for prime in outcome.primes {
                if seen.insert(prime.clone()) {
                    prime_implicants.push(prime);
                }
            }
            round = outcome.next;
        }

        Elimination {
            prime_implicants,
            coverage: round.coverage,
            rounds,
        }
    }
}
