//! # Pricing Consistency
//!
//! Keeps cost, price, profit amount and profit percentage mutually
//! consistent, in exact decimal arithmetic.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/binary floating point:                                   │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: rust_decimal                                             │
//! │    dec(0.1) + dec(0.2) = dec(0.3) exactly                               │
//! │    profit figures hold cent-exact through every derivation              │
//! │                                                                         │
//! │  Rounding happens ONCE, at display time, with banker's rounding —      │
//! │  never in the middle of a calculation.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## User Workflow
//! ```text
//! User edits any one field in the pricing form:
//!
//!   cost ─┐
//!   price ─┼──► Pricing::from_cost_and_price / ..._profit_amount / ...
//!   profit ┘        │
//!                   ▼
//!   { cost, price, profit_amount, profit_percentage }  (all four filled)
//!                   │
//!                   ▼
//!   ProfitIndicator::classify(profit) → green / red / neutral badge
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Pricing;
use crate::PRICE_DISPLAY_DECIMALS;

// =============================================================================
// Profit Functions
// =============================================================================

/// Profit amount: `price - cost`. Negative when selling below cost.
#[inline]
pub fn profit_amount(price: Decimal, cost: Decimal) -> Decimal {
    price - cost
}

/// Profit as a percentage of cost: `(price - cost) / cost * 100`.
///
/// ## Zero-Cost Guard
/// When `cost` is zero the percentage is **0 by convention** — a defined
/// degenerate case, never a division-by-zero error. A free-to-make item
/// has no meaningful markup ratio.
///
/// ## Example
/// ```rust
/// use rust_decimal::Decimal;
/// use bodega_core::pricing::profit_percentage;
///
/// let pct = profit_percentage(Decimal::from(150), Decimal::from(100));
/// assert_eq!(pct, Decimal::from(50)); // 50% markup
///
/// assert_eq!(
///     profit_percentage(Decimal::from(150), Decimal::ZERO),
///     Decimal::ZERO
/// );
/// ```
pub fn profit_percentage(price: Decimal, cost: Decimal) -> Decimal {
    if cost.is_zero() {
        return Decimal::ZERO;
    }
    (price - cost) / cost * Decimal::ONE_HUNDRED
}

// =============================================================================
// Profit Indicator
// =============================================================================

/// Sign classification of a profit figure.
///
/// Pure and UI-agnostic: the storefront maps these to green/red/grey (or
/// whatever its theme says); the engine only states the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProfitIndicator {
    /// Profit above zero.
    Positive,
    /// Selling below cost.
    Negative,
    /// Break-even.
    Neutral,
}

impl ProfitIndicator {
    /// Classifies a profit amount (or percentage) by sign.
    pub fn classify(amount: Decimal) -> Self {
        if amount > Decimal::ZERO {
            ProfitIndicator::Positive
        } else if amount < Decimal::ZERO {
            ProfitIndicator::Negative
        } else {
            ProfitIndicator::Neutral
        }
    }
}

// =============================================================================
// Pricing Derivations
// =============================================================================

impl Pricing {
    /// Derives the full pricing figure set from cost and price.
    pub fn from_cost_and_price(cost: Decimal, price: Decimal) -> Self {
        Pricing {
            cost,
            price,
            profit_amount: profit_amount(price, cost),
            profit_percentage: profit_percentage(price, cost),
        }
    }

    /// Derives the full set from cost and a target profit amount.
    pub fn from_cost_and_profit_amount(cost: Decimal, profit: Decimal) -> Self {
        Pricing::from_cost_and_price(cost, cost + profit)
    }

    /// Derives the full set from price and a target profit amount.
    pub fn from_price_and_profit_amount(price: Decimal, profit: Decimal) -> Self {
        Pricing::from_cost_and_price(price - profit, price)
    }

    /// Derives the full set from cost and a target profit percentage.
    ///
    /// `price = cost * (1 + percentage / 100)`. With `cost == 0` the price
    /// stays 0 regardless of the requested percentage, consistent with the
    /// zero-cost convention.
    pub fn from_cost_and_profit_percentage(cost: Decimal, percentage: Decimal) -> Self {
        let price = cost + cost * percentage / Decimal::ONE_HUNDRED;
        Pricing::from_cost_and_price(cost, price)
    }

    /// Zero across the board: the figures of a brand-new product.
    pub fn zero() -> Self {
        Pricing::from_cost_and_price(Decimal::ZERO, Decimal::ZERO)
    }

    /// Sign classification of the profit, for display badges.
    pub fn indicator(&self) -> ProfitIndicator {
        ProfitIndicator::classify(self.profit_amount)
    }

    /// Whether the four figures agree with each other.
    ///
    /// Holds for anything built through the constructors above; exists for
    /// figures deserialized from an external payload.
    pub fn is_consistent(&self) -> bool {
        self.profit_amount == profit_amount(self.price, self.cost)
            && self.profit_percentage == profit_percentage(self.price, self.cost)
    }

    /// Copy rounded for display to the currency's minor-unit precision.
    ///
    /// Uses banker's rounding (round half to even) so totals don't drift
    /// upward across many products. Display is the ONLY place rounding is
    /// allowed; the stored figures stay full precision.
    pub fn rounded_for_display(&self) -> Self {
        Pricing {
            cost: self.cost.round_dp(PRICE_DISPLAY_DECIMALS),
            price: self.price.round_dp(PRICE_DISPLAY_DECIMALS),
            profit_amount: self.profit_amount.round_dp(PRICE_DISPLAY_DECIMALS),
            profit_percentage: self.profit_percentage.round_dp(PRICE_DISPLAY_DECIMALS),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(mantissa: i64, scale: u32) -> Decimal {
        Decimal::new(mantissa, scale)
    }

    #[test]
    fn test_profit_amount() {
        assert_eq!(
            profit_amount(dec(1099, 2), dec(750, 2)),
            dec(349, 2) // $10.99 - $7.50 = $3.49
        );
        assert_eq!(
            profit_amount(dec(500, 2), dec(750, 2)),
            dec(-250, 2) // selling below cost
        );
    }

    #[test]
    fn test_profit_percentage() {
        // cost $100, price $150: 50%
        let pct = profit_percentage(Decimal::from(150), Decimal::from(100));
        assert_eq!(pct, Decimal::from(50));

        // cost $8, price $10: 25%
        let pct = profit_percentage(Decimal::from(10), Decimal::from(8));
        assert_eq!(pct, Decimal::from(25));
    }

    #[test]
    fn test_zero_cost_guard() {
        assert_eq!(
            profit_percentage(dec(1099, 2), Decimal::ZERO),
            Decimal::ZERO
        );
        assert_eq!(profit_percentage(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_no_binary_float_drift() {
        // The 0.1 + 0.2 classic, in prices.
        let total = dec(1, 1) + dec(2, 1);
        assert_eq!(total, dec(3, 1));
        assert_eq!(profit_amount(dec(3, 1), dec(1, 1)), dec(2, 1));
    }

    #[test]
    fn test_indicator_classification() {
        assert_eq!(
            ProfitIndicator::classify(dec(1, 2)),
            ProfitIndicator::Positive
        );
        assert_eq!(
            ProfitIndicator::classify(dec(-1, 2)),
            ProfitIndicator::Negative
        );
        assert_eq!(
            ProfitIndicator::classify(Decimal::ZERO),
            ProfitIndicator::Neutral
        );
    }

    #[test]
    fn test_from_cost_and_price() {
        let pricing = Pricing::from_cost_and_price(dec(800, 2), dec(1000, 2));
        assert_eq!(pricing.profit_amount, dec(200, 2));
        assert_eq!(pricing.profit_percentage, Decimal::from(25));
        assert!(pricing.is_consistent());
        assert_eq!(pricing.indicator(), ProfitIndicator::Positive);
    }

    #[test]
    fn test_from_cost_and_profit_amount() {
        let pricing = Pricing::from_cost_and_profit_amount(dec(800, 2), dec(200, 2));
        assert_eq!(pricing.price, dec(1000, 2));
        assert_eq!(pricing.profit_percentage, Decimal::from(25));
        assert!(pricing.is_consistent());
    }

    #[test]
    fn test_from_price_and_profit_amount() {
        let pricing = Pricing::from_price_and_profit_amount(dec(1000, 2), dec(200, 2));
        assert_eq!(pricing.cost, dec(800, 2));
        assert_eq!(pricing.profit_percentage, Decimal::from(25));
        assert!(pricing.is_consistent());
    }

    #[test]
    fn test_from_cost_and_profit_percentage() {
        let pricing = Pricing::from_cost_and_profit_percentage(dec(800, 2), Decimal::from(25));
        assert_eq!(pricing.price, dec(1000, 2));
        assert_eq!(pricing.profit_amount, dec(200, 2));
        assert!(pricing.is_consistent());
    }

    #[test]
    fn test_zero_cost_percentage_request_keeps_price_zero() {
        let pricing =
            Pricing::from_cost_and_profit_percentage(Decimal::ZERO, Decimal::from(40));
        assert_eq!(pricing.price, Decimal::ZERO);
        assert_eq!(pricing.profit_percentage, Decimal::ZERO);
        assert_eq!(pricing.indicator(), ProfitIndicator::Neutral);
    }

    #[test]
    fn test_negative_margin() {
        let pricing = Pricing::from_cost_and_price(Decimal::from(10), Decimal::from(8));
        assert_eq!(pricing.profit_amount, Decimal::from(-2));
        assert_eq!(pricing.profit_percentage, Decimal::from(-20));
        assert_eq!(pricing.indicator(), ProfitIndicator::Negative);
    }

    #[test]
    fn test_display_rounding_is_bankers() {
        // 1/3 markup: percentage = 33.333...; display rounds to 2 dp.
        let pricing = Pricing::from_cost_and_price(Decimal::from(3), Decimal::from(4));
        let display = pricing.rounded_for_display();
        assert_eq!(display.profit_percentage, dec(3333, 2));

        // Stored figures remain full precision.
        assert_ne!(pricing.profit_percentage, display.profit_percentage);

        // Half-to-even: 0.125 rounds to 0.12, 0.135 rounds to 0.14.
        assert_eq!(dec(125, 3).round_dp(2), dec(12, 2));
        assert_eq!(dec(135, 3).round_dp(2), dec(14, 2));
    }
}
