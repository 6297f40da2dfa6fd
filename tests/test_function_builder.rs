//! Tests for the BooleanFunction builder and the Minimizable trait

use quine_logic::{BooleanFunction, Minimizable, MinimizationError, MinimizerConfig};

#[test]
fn test_auto_labels() {
    let function = BooleanFunction::new(3);
    let names: Vec<&str> = function.variables().iter().map(|v| v.as_ref()).collect();
    assert_eq!(names, ["x0", "x1", "x2"]);
}

#[test]
fn test_minimize_with_auto_labels() {
    let mut function = BooleanFunction::new(3);
    function.extend_minterms([0, 1, 4, 5]);
    let result = function.minimize().unwrap();
    assert_eq!(result.simplified_forms, vec!["x1'"]);
}

#[test]
fn test_builder_matches_free_function() {
    let mut function = BooleanFunction::with_variables(&["A", "B", "C"]);
    function.add_minterm(1).add_minterm(3).add_minterm(6);
    function.add_dont_care(7);

    let via_trait = function.minimize().unwrap();
    let direct = quine_logic::minimize(&[1, 3, 6], &[7], &["A", "B", "C"]).unwrap();
    assert_eq!(via_trait, direct);
    assert_eq!(via_trait.simplified_forms, vec!["A'C + AB"]);
}

#[test]
fn test_builder_reports_conflicts() {
    let mut function = BooleanFunction::new(2);
    function.add_minterm(2).add_dont_care(2);
    assert_eq!(
        function.minimize().unwrap_err(),
        MinimizationError::ConflictingInput { value: 2 }
    );
}

#[test]
fn test_builder_with_custom_config() {
    let mut function = BooleanFunction::new(2);
    function.add_minterm(0);
    let config = MinimizerConfig {
        petrick_cap: 0,
        petrick_retain: 1,
    };
    assert!(matches!(
        function.minimize_with_config(&config),
        Err(MinimizationError::InvalidConfig { .. })
    ));
}

#[test]
fn test_clone_is_independent() {
    let mut original = BooleanFunction::new(2);
    original.add_minterm(3);
    let mut copy = original.clone();
    copy.add_minterm(2);

    assert_eq!(original.minterms(), &[3]);
    assert_eq!(copy.minterms(), &[3, 2]);
    assert_eq!(original.minimize().unwrap().simplified_forms, vec!["x0x1"]);
    assert_eq!(copy.minimize().unwrap().simplified_forms, vec!["x0"]);
}

#[test]
fn test_debug_output() {
    let function = BooleanFunction::new(1);
    let debug_str = format!("{:?}", function);
    assert!(debug_str.contains("BooleanFunction"));
}
