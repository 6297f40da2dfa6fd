//! Basic minimization example

use quine_logic::minimize;

fn main() -> std::io::Result<()> {
    println!("Boolean Function Minimization Example\n");

    println!("Function: F(A, B, C, D) = Σm(4, 8, 10, 11, 12, 15) + d(9, 14)");
    println!("(the don't-cares may be used to enlarge implicants)\n");

    let result = minimize(&[4, 8, 10, 11, 12, 15], &[9, 14], &["A", "B", "C", "D"])?;

    println!("Prime implicants:");
    for prime in &result.prime_implicants {
        let marker = if result.essential_prime_implicants.contains(prime) {
            " (essential)"
        } else {
            ""
        };
        println!("  {}{}", prime, marker);
    }

    println!("\nMinimum covers:");
    for form in &result.simplified_forms {
        println!("  F = {}", form);
    }

    if let Some((terms, literals)) = result.cost() {
        println!("\nEach cover uses {} terms and {} literals.", terms, literals);
    }

    Ok(())
}
