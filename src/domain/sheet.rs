use super::{Cents, Portfolio};

/// The root configuration for one forecast run: the balance the simulation
/// starts from plus the full portfolio of gains and dumps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoneySheet {
    pub initial_balance: Cents,
    pub portfolio: Portfolio,
}

impl MoneySheet {
    pub fn new(initial_balance: Cents, portfolio: Portfolio) -> Self {
        Self {
            initial_balance,
            portfolio,
        }
    }
}
