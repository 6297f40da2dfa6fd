//! Property-based tests for the minimization pipeline
//!
//! Random functions over up to four variables are generated as a truth table
//! where every input is OFF, ON or don't-care.

use proptest::prelude::*;
use quine_logic::elimination::EliminationEngine;
use quine_logic::encoder::encode;
use quine_logic::table::{select_essentials, CoverageTable};
use quine_logic::*;
use std::collections::BTreeSet;

const NAMES: [&str; 4] = ["A", "B", "C", "D"];

#[derive(Debug, Clone)]
struct Function {
    num_vars: usize,
    on: Vec<MintermId>,
    dc: Vec<MintermId>,
    off: Vec<MintermId>,
}

/// 0 = OFF, 1 = ON, 2 = don't-care for each of the 2^n inputs
fn function() -> impl Strategy<Value = Function> {
    (1usize..=4, prop::collection::vec(0u8..3, 16)).prop_map(|(num_vars, table)| {
        let mut f = Function {
            num_vars,
            on: Vec::new(),
            dc: Vec::new(),
            off: Vec::new(),
        };
        for (id, class) in table.into_iter().take(1 << num_vars).enumerate() {
            let id = id as MintermId;
            match class {
                0 => f.off.push(id),
                1 => f.on.push(id),
                _ => f.dc.push(id),
            }
        }
        f
    })
}

fn bit() -> impl Strategy<Value = Bit> {
    prop_oneof![Just(Bit::Zero), Just(Bit::One), Just(Bit::DontCare)]
}

fn term_pair() -> impl Strategy<Value = (Term, Term)> {
    (1usize..=6).prop_flat_map(|width| {
        (
            prop::collection::vec(bit(), width),
            prop::collection::vec(bit(), width),
        )
            .prop_map(|(a, b)| (Term::new(a), Term::new(b)))
    })
}

fn run(f: &Function) -> Minimization {
    minimize(&f.on, &f.dc, &NAMES[..f.num_vars]).unwrap()
}

/// Smallest number of primes covering every ON minterm, by exhaustive search
fn brute_force_minimum(primes: &[Term], on: &[MintermId]) -> usize {
    let n = primes.len();
    (0u32..(1 << n))
        .filter(|mask| {
            on.iter().all(|&m| {
                primes
                    .iter()
                    .enumerate()
                    .any(|(i, p)| *mask & (1u32 << i) != 0 && p.covers(m))
            })
        })
        .map(|mask| mask.count_ones() as usize)
        .min()
        .unwrap_or(0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_every_solution_covers_on_set(f in function()) {
        let result = run(&f);
        for cover in &result.solutions {
            for &m in &f.on {
                prop_assert!(cover.iter().any(|t| t.covers(m)), "minterm {} uncovered", m);
            }
            for &m in &f.off {
                prop_assert!(!cover.iter().any(|t| t.covers(m)), "off-set {} covered", m);
            }
        }
        prop_assert_eq!(result.solutions.len(), result.simplified_forms.len());
        prop_assert_eq!(result.solutions.is_empty(), f.on.is_empty());
    }

    #[test]
    fn prop_solutions_share_minimum_size(f in function()) {
        let result = run(&f);
        let sizes: BTreeSet<usize> = result.solutions.iter().map(Vec::len).collect();
        prop_assert!(sizes.len() <= 1);

        let distinct: BTreeSet<&Vec<Term>> = result.solutions.iter().collect();
        prop_assert_eq!(distinct.len(), result.solutions.len());

        for cover in &result.solutions {
            let mut sorted = cover.clone();
            sorted.sort();
            prop_assert_eq!(&sorted, cover);
            for essential in &result.essential_prime_implicants {
                prop_assert!(cover.contains(essential));
            }
        }
    }

    #[test]
    fn prop_solutions_are_minimum(f in function()) {
        let result = run(&f);
        prop_assume!(!result.truncated);
        prop_assume!(!f.on.is_empty());
        prop_assume!(result.prime_implicants.len() <= 16);

        let expected = brute_force_minimum(&result.prime_implicants, &f.on);
        prop_assert_eq!(result.solutions[0].len(), expected);
    }

    #[test]
    fn prop_primes_are_maximal(f in function()) {
        let result = run(&f);
        let allowed: BTreeSet<MintermId> = f.on.iter().chain(&f.dc).copied().collect();
        for prime in &result.prime_implicants {
            // Freeing any literal must reach an OFF input
            for (i, bit) in prime.bits().iter().enumerate() {
                if !bit.is_literal() {
                    continue;
                }
                let mut bits = prime.bits().to_vec();
                bits[i] = Bit::DontCare;
                let widened = Term::new(bits);
                let stays_inside = (0..(1u64 << f.num_vars))
                    .filter(|&id| widened.covers(id))
                    .all(|id| allowed.contains(&id));
                prop_assert!(!stays_inside, "{} is not prime", prime);
            }
        }
        for essential in &result.essential_prime_implicants {
            prop_assert!(result.prime_implicants.contains(essential));
        }
    }

    #[test]
    fn prop_merge_soundness((a, b) in term_pair()) {
        let same_mask = a
            .bits()
            .iter()
            .zip(b.bits())
            .all(|(x, y)| x.is_literal() == y.is_literal());
        let differences = a.bits().iter().zip(b.bits()).filter(|(x, y)| x != y).count();

        match a.merge(&b) {
            Some(merged) => {
                prop_assert!(same_mask);
                prop_assert_eq!(differences, 1);
                prop_assert_eq!(merged.literal_count() + 1, a.literal_count());
                prop_assert_eq!(Some(merged), b.merge(&a));
            }
            None => {
                prop_assert!(!same_mask || differences != 1);
            }
        }
    }

    #[test]
    fn prop_round_coverage_is_union_of_parents(f in function()) {
        let ids: Vec<MintermId> = f.on.iter().chain(&f.dc).copied().collect();
        let terms = encode(&ids, f.num_vars).unwrap();
        let entries = terms.into_iter().zip(ids.iter().copied());
        let engine = EliminationEngine::new(f.num_vars, entries).unwrap();
        let round = engine.initial_round();
        let outcome = round.next();

        for (i, group) in round.groups.iter().enumerate().skip(1) {
            for a in &round.groups[i - 1] {
                for b in group {
                    if let Some(child) = a.merge(b) {
                        let covered = &outcome.next.coverage[&child];
                        prop_assert!(covered.is_superset(&round.coverage[a]));
                        prop_assert!(covered.is_superset(&round.coverage[b]));
                        let exact: BTreeSet<MintermId> =
                            ids.iter().copied().filter(|&id| child.covers(id)).collect();
                        prop_assert_eq!(covered, &exact);
                    }
                }
            }
        }
    }

    #[test]
    fn prop_essential_extraction_is_idempotent(f in function()) {
        let ids: Vec<MintermId> = f.on.iter().chain(&f.dc).copied().collect();
        let terms = encode(&ids, f.num_vars).unwrap();
        let entries = terms.into_iter().zip(ids.iter().copied());
        let elimination = EliminationEngine::new(f.num_vars, entries).unwrap().run();
        let required: BTreeSet<MintermId> = f.on.iter().copied().collect();

        let table = CoverageTable::build(&elimination.coverage, &required);
        prop_assert_eq!(table.len(), required.len());

        let first = select_essentials(&table);
        let second = select_essentials(&first.residual);
        prop_assert!(second.essentials.is_empty());
        prop_assert_eq!(second.residual, first.residual.clone());
        for (_, coverers) in first.residual.iter() {
            prop_assert!(coverers.len() >= 2);
        }
    }
}
