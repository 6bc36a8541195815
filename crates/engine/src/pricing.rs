//! Aggregate pricing calculator.
//!
//! Pure functions over cart lines. The policy is a parameter rather than
//! a constant because two genuinely distinct shipping policies exist in
//! the product: the full cart page and the slide-in panel quote different
//! free-shipping thresholds and fees. The calculator takes whichever one
//! the calling surface was configured with.

use gingham_core::{CartLine, CartTotals};
use rust_decimal::Decimal;

/// Free-shipping threshold and the flat fee charged below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShippingPolicy {
    /// Subtotal at or above which shipping is free.
    pub free_threshold: Decimal,
    /// Flat fee charged below the threshold.
    pub flat_fee: Decimal,
}

/// Everything the calculator needs besides the cart lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Tax rate applied to the subtotal (e.g. `0.05` for 5%).
    pub tax_rate: Decimal,
    /// Shipping policy for the calling surface.
    pub shipping: ShippingPolicy,
}

/// Compute the derived aggregates for a cart.
///
/// Subtotal is the exact decimal sum of line subtotals; tax is subtotal
/// times the rate; shipping is zero at or above the free threshold and
/// the flat fee below it. The formula has no special cases: an empty
/// cart has subtotal zero and quotes the flat fee like any other cart
/// below the threshold.
#[must_use]
pub fn compute_totals(lines: &[CartLine], policy: &PricingPolicy) -> CartTotals {
    let subtotal: Decimal = lines.iter().map(CartLine::line_subtotal).sum();
    let tax = subtotal * policy.tax_rate;
    let shipping = if subtotal >= policy.shipping.free_threshold {
        Decimal::ZERO
    } else {
        policy.shipping.flat_fee
    };
    CartTotals {
        subtotal,
        tax,
        shipping,
        grand_total: subtotal + tax + shipping,
    }
}
