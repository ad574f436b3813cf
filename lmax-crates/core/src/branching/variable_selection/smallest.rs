use log::warn;

use super::VariableSelector;
use crate::branching::SelectionContext;
use crate::engine::variables::DomainId;

/// A [`VariableSelector`] which selects the unfixed variable with the smallest lower bound. Ties
/// are broken in favour of the variable that comes first in the provided list.
#[derive(Debug)]
pub struct Smallest<Var> {
    variables: Vec<Var>,
}

impl<Var: Copy> Smallest<Var> {
    pub fn new(variables: &[Var]) -> Self {
        if variables.is_empty() {
            warn!("The Smallest variable selector was not provided with any variables");
        }
        Smallest {
            variables: variables.to_vec(),
        }
    }
}

impl VariableSelector<DomainId> for Smallest<DomainId> {
    fn select_variable(&mut self, context: &mut SelectionContext<'_>) -> Option<DomainId> {
        self.variables
            .iter()
            .copied()
            .filter(|variable| !context.is_integer_fixed(*variable))
            .min_by_key(|variable| context.lower_bound(*variable))
    }
}
