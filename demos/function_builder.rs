//! Building a function incrementally and minimizing it through `Minimizable`
//!
//! This example shows how to:
//! - Use auto-labelled variables (`x0`, `x1`, ...)
//! - Supply custom variable names
//! - Tighten the Petrick cap and detect truncation

use quine_logic::{BooleanFunction, Minimizable, MinimizerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== BooleanFunction Builder Example ===\n");

    println!("Example 1: Auto-labelled 3-input majority function");
    println!("--------------------------------------------------");
    let mut majority = BooleanFunction::new(3);
    majority.extend_minterms([3, 5, 6, 7]);
    println!("Variables: {:?}", majority.variables());
    let result = majority.minimize()?;
    println!("F = {}\n", result.simplified_forms[0]);
    assert_eq!(result.simplified_forms, vec!["x1x2 + x0x2 + x0x1"]);

    println!("Example 2: Named variables with don't-cares");
    println!("-------------------------------------------");
    let mut decoder = BooleanFunction::with_variables(&["sel", "en", "rst"]);
    decoder
        .add_minterm(6)
        .add_minterm(7)
        .add_dont_care(4)
        .add_dont_care(5);
    let result = decoder.minimize()?;
    println!("F = {}\n", result.simplified_forms[0]);
    assert_eq!(result.simplified_forms, vec!["sel"]);

    println!("Example 3: Cyclic chart under a tight Petrick cap");
    println!("-------------------------------------------------");
    let mut cyclic = BooleanFunction::with_variables(&["A", "B", "C"]);
    cyclic.extend_minterms([0, 1, 2, 5, 6, 7]);

    let exact = cyclic.minimize()?;
    println!("Exact:   {} minimum covers", exact.solutions.len());
    for form in &exact.simplified_forms {
        println!("  F = {}", form);
    }

    let tight = cyclic.minimize_with_config(&MinimizerConfig {
        petrick_cap: 4,
        petrick_retain: 2,
    })?;
    println!(
        "Capped:  {} cover(s), truncated = {}",
        tight.solutions.len(),
        tight.truncated
    );
    for form in &tight.simplified_forms {
        println!("  F = {}", form);
    }

    Ok(())
}
