//! # Quine-McCluskey Logic Minimizer
//!
//! This crate computes exact minimum sum-of-products forms of single-output
//! Boolean functions, given as lists of minterm ids, optional don't-care ids
//! and variable names.
//!
//! ## Overview
//!
//! The pipeline runs in stages:
//!
//! 1. **Encoding** - each id becomes a fixed-width binary [`Term`]
//! 2. **Elimination** - terms differing in one bit are merged round after round,
//!    tracking which ids every merged term covers; terms that never merge are
//!    the prime implicants
//! 3. **Essentials** - primes that are the only cover of some required minterm
//!    are selected, repeatedly, until none remain
//! 4. **Petrick's method** - the rest of the chart is solved exactly by expanding
//!    a product of sums into candidate covers
//! 5. **Formatting** - every minimum cover is rendered as `AB' + C` style text
//!
//! ## Using the Minimizer
//!
//! ### 1. One-shot function
//!
//! ```
//! use quine_logic::minimize;
//!
//! # fn main() -> Result<(), quine_logic::MinimizationError> {
//! // f(A, B, C) = Σm(0, 2, 5, 7) with don't-cares d(6)
//! let result = minimize(&[0, 2, 5, 7], &[6], &["A", "B", "C"])?;
//!
//! for form in &result.simplified_forms {
//!     println!("F = {}", form);
//! }
//! println!("{} prime implicants", result.prime_implicants.len());
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. BooleanFunction builder
//!
//! Accumulate ids first and minimize later through the [`Minimizable`] trait.
//! Variables are auto-labelled `x0`, `x1`, ... unless names are supplied:
//!
//! ```
//! use quine_logic::{BooleanFunction, Minimizable};
//!
//! # fn main() -> Result<(), quine_logic::MinimizationError> {
//! let mut function = BooleanFunction::new(2);
//! function.add_minterm(1).add_minterm(3);
//!
//! let result = function.minimize()?;
//! assert_eq!(result.simplified_forms, vec!["x1"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Exactness and the Petrick Cap
//!
//! Petrick's method is exponential in the worst case. The expansion is bounded
//! by [`MinimizerConfig::petrick_cap`]: once a step produces more candidates
//! than that, only the [`MinimizerConfig::petrick_retain`] smallest are kept.
//! Results computed under the cap are still valid covers, but they are no
//! longer guaranteed to be minimum, and [`Minimization::truncated`] says so.
//!
//! ```
//! use quine_logic::{minimize_with_config, MinimizerConfig};
//!
//! # fn main() -> Result<(), quine_logic::MinimizationError> {
//! let config = MinimizerConfig {
//!     petrick_cap: 50_000,
//!     petrick_retain: 10_000,
//! };
//! let result = minimize_with_config(&[0, 1, 2, 5, 6, 7], &[], &["A", "B", "C"], &config)?;
//! assert!(!result.truncated);
//! assert_eq!(result.solutions.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Thread Safety
//!
//! Every call owns all of its state, so minimizations can run concurrently on
//! any number of threads without synchronization.

pub mod elimination;
pub mod encoder;
pub mod error;
pub mod format;
pub mod function;
pub mod minimizer;
pub mod petrick;
pub mod table;
pub mod term;

mod labels;
mod minimizable;

pub use error::MinimizationError;
pub use function::BooleanFunction;
pub use minimizable::Minimizable;
pub use minimizer::{minimize, minimize_with_config, Minimization};
pub use term::{Bit, Term};

/// Identifier of a minterm or don't-care: the input combination as an integer
pub type MintermId = u64;

/// Largest number of variables a [`Term`] can encode
pub const MAX_VARIABLES: usize = 64;

/// Configuration for the minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimizerConfig {
    /// Candidate count above which the Petrick expansion is truncated
    pub petrick_cap: usize,
    /// Number of smallest candidates kept when truncating
    pub petrick_retain: usize,
}

impl Default for MinimizerConfig {
    fn default() -> Self {
        MinimizerConfig {
            petrick_cap: 2000,
            petrick_retain: 1000,
        }
    }
}

impl MinimizerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that the Petrick settings are usable
    pub fn validate(&self) -> Result<(), MinimizationError> {
        if self.petrick_retain == 0 {
            return Err(MinimizationError::InvalidConfig {
                message: "petrick_retain must be at least 1".to_string(),
            });
        }
        if self.petrick_retain > self.petrick_cap {
            return Err(MinimizationError::InvalidConfig {
                message: format!(
                    "petrick_retain ({}) must not exceed petrick_cap ({})",
                    self.petrick_retain, self.petrick_cap
                ),
            });
        }
        Ok(())
    }
}
