//! Derived cart aggregates.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The derived money aggregates for a cart.
///
/// Pure function of the cart lines and a pricing policy; never stored, so
/// it can never drift from the collection it was computed from. All
/// intermediate arithmetic is exact decimal; rounding to two places
/// happens only in the display helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    /// Sum of effective unit price x quantity over all lines.
    pub subtotal: Decimal,
    /// `subtotal` x the configured tax rate.
    pub tax: Decimal,
    /// Flat fee, or zero at/above the free-shipping threshold.
    pub shipping: Decimal,
    /// `subtotal + tax + shipping`.
    pub grand_total: Decimal,
}

impl CartTotals {
    /// Round a monetary amount for display, half-up to two places.
    #[must_use]
    pub fn display(amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}")
    }

    /// The grand total rounded for display.
    #[must_use]
    pub fn display_grand_total(&self) -> String {
        Self::display(self.grand_total)
    }
}
