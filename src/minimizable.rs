//! Minimizable trait for Boolean function minimization

use crate::error::MinimizationError;
use crate::minimizer::Minimization;
use crate::MinimizerConfig;

/// Types that describe a single-output Boolean function and can be minimized
///
/// Minimization takes `&self` and returns a fresh [`Minimization`]; the
/// source value is left untouched and can be minimized again, for instance
/// with a different configuration.
///
/// ```
/// use quine_logic::{BooleanFunction, Minimizable, MinimizerConfig};
///
/// # fn main() -> Result<(), quine_logic::MinimizationError> {
/// let mut function = BooleanFunction::with_variables(&["A", "B", "C"]);
/// for id in [0, 1, 2, 5, 6, 7] {
///     function.add_minterm(id);
/// }
///
/// let exact = function.minimize()?;
/// let tight = function.minimize_with_config(&MinimizerConfig {
///     petrick_cap: 4,
///     petrick_retain: 2,
/// })?;
///
/// assert!(!exact.truncated);
/// assert!(tight.truncated);
/// # Ok(())
/// # }
/// ```
pub trait Minimizable {
    /// Minimize with the default configuration
    fn minimize(&self) -> Result<Minimization, MinimizationError> {
        self.minimize_with_config(&MinimizerConfig::default())
    }

    /// Minimize with a custom configuration
    ///
    /// This is the method implementations must provide.
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Minimization, MinimizationError>;
}
