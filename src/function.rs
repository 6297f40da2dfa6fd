//! Incremental description of a Boolean function
//!
//! [`BooleanFunction`] collects minterms, don't-cares and variable labels
//! before handing them to the minimizer through [`Minimizable`].

use std::sync::Arc;

use crate::error::MinimizationError;
use crate::labels::LabelManager;
use crate::minimizable::Minimizable;
use crate::minimizer::{minimize_with_config, Minimization};
use crate::{MinimizerConfig, MintermId};

/// A single-output Boolean function given by its ON-set and don't-care set
///
/// Ids are validated when the function is minimized, not when they are
/// added, so the builder itself never fails.
///
/// # Examples
///
/// ```
/// use quine_logic::{BooleanFunction, Minimizable};
///
/// # fn main() -> Result<(), quine_logic::MinimizationError> {
/// let mut function = BooleanFunction::with_variables(&["A", "B"]);
/// function.add_minterm(0).add_minterm(2);
/// function.add_dont_care(1).add_dont_care(3);
///
/// assert_eq!(function.num_variables(), 2);
/// assert_eq!(function.minimize()?.simplified_forms, vec!["1"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default)]
pub struct BooleanFunction {
    variables: LabelManager<'x'>,
    minterms: Vec<MintermId>,
    dont_cares: Vec<MintermId>,
}

impl BooleanFunction {
    /// Create a function over `num_variables` auto-labelled variables
    /// (`x0`, `x1`, ...)
    ///
    /// ```
    /// use quine_logic::BooleanFunction;
    ///
    /// let function = BooleanFunction::new(3);
    /// let names: Vec<&str> = function.variables().iter().map(|v| v.as_ref()).collect();
    /// assert_eq!(names, ["x0", "x1", "x2"]);
    /// ```
    pub fn new(num_variables: usize) -> Self {
        let mut variables = LabelManager::new();
        variables.backfill_to(num_variables);
        BooleanFunction {
            variables,
            ..Default::default()
        }
    }

    /// Create a function over named variables; the first name is the most
    /// significant bit of each id
    pub fn with_variables<S: AsRef<str>>(variables: &[S]) -> Self {
        BooleanFunction {
            variables: LabelManager::from_labels(variables),
            ..Default::default()
        }
    }

    /// Number of variables
    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    /// Variable names in bit order
    pub fn variables(&self) -> &[Arc<str>] {
        self.variables.as_slice()
    }

    /// Position of a variable by name
    pub fn variable_index(&self, name: &str) -> Option<usize> {
        self.variables.find_position(name)
    }

    /// Require the function to be 1 at `id`
    pub fn add_minterm(&mut self, id: MintermId) -> &mut Self {
        self.minterms.push(id);
        self
    }

    /// Leave the function unconstrained at `id`
    pub fn add_dont_care(&mut self, id: MintermId) -> &mut Self {
        self.dont_cares.push(id);
        self
    }

    /// Add several minterms at once
    pub fn extend_minterms(&mut self, ids: impl IntoIterator<Item = MintermId>) -> &mut Self {
        self.minterms.extend(ids);
        self
    }

    /// Add several don't-cares at once
    pub fn extend_dont_cares(&mut self, ids: impl IntoIterator<Item = MintermId>) -> &mut Self {
        self.dont_cares.extend(ids);
        self
    }

    /// Minterms in insertion order
    pub fn minterms(&self) -> &[MintermId] {
        &self.minterms
    }

    /// Don't-cares in insertion order
    pub fn dont_cares(&self) -> &[MintermId] {
        &self.dont_cares
    }
}

impl Minimizable for BooleanFunction {
    fn minimize_with_config(
        &self,
        config: &MinimizerConfig,
    ) -> Result<Minimization, MinimizationError> {
        minimize_with_config(
            &self.minterms,
            &self.dont_cares,
            self.variables.as_slice(),
            config,
        )
    }
}
