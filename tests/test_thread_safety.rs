//! Tests for concurrent use
//!
//! Every minimization owns all of its state, so independent calls may run on
//! many threads at once and must agree with a sequential run.

use quine_logic::{minimize, BooleanFunction, Minimizable, Minimization};
use std::sync::Arc;
use std::thread;

const VARS: [&str; 4] = ["A", "B", "C", "D"];

fn textbook() -> Minimization {
    minimize(&[4, 8, 10, 11, 12, 15], &[9, 14], &VARS).expect("Minimization failed")
}

#[test]
fn test_concurrent_execution() {
    let expected = textbook();

    let handles: Vec<_> = (0..8).map(|_| thread::spawn(textbook)).collect();

    for handle in handles {
        let result = handle.join().expect("Thread panicked");
        assert_eq!(result, expected);
    }
}

#[test]
fn test_different_functions_per_thread() {
    let handles: Vec<_> = (0u64..8)
        .map(|i| {
            thread::spawn(move || {
                // Each thread minimizes a single minterm: the result is that minterm
                let result = minimize(&[i], &[], &["A", "B", "C"]).expect("Minimization failed");
                (i, result)
            })
        })
        .collect();

    for handle in handles {
        let (i, result) = handle.join().expect("Thread panicked");
        assert_eq!(result.solutions.len(), 1);
        assert_eq!(result.solutions[0].len(), 1);
        assert!(result.solutions[0][0].covers(i));
        assert_eq!(result.solutions[0][0].literal_count(), 3);
    }
}

#[test]
fn test_shared_function_definition() {
    let mut function = BooleanFunction::with_variables(&VARS);
    function
        .extend_minterms([4, 8, 10, 11, 12, 15])
        .extend_dont_cares([9, 14]);
    let function = Arc::new(function);
    let expected = textbook();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let function = Arc::clone(&function);
            thread::spawn(move || function.minimize().expect("Minimization failed"))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("Thread panicked"), expected);
    }
}
