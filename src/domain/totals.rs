use crate::domain::item::LineItem;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::Serialize;

/// Sales tax applied to the subtotal.
pub const TAX_RATE: Decimal = dec!(0.08);
/// Orders strictly above this subtotal ship for free.
pub const FREE_SHIPPING_THRESHOLD: Decimal = dec!(100);
/// Flat fee charged below the free-shipping threshold.
pub const FLAT_SHIPPING_FEE: Decimal = dec!(10);

/// Rounds a monetary amount to 2 fraction digits, half-up.
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Derived totals summary for a cart. Never stored; recomputed on demand.
///
/// Monetary fields are rounded to 2 fraction digits. The shipping decision and
/// the grand total are taken from the exact, unrounded amounts first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub grand_total: Decimal,
    pub item_count: u32,
}

impl Totals {
    pub fn of(items: &[LineItem]) -> Self {
        let mut subtotal = Decimal::ZERO;
        let mut item_count = 0u32;
        for item in items {
            subtotal += item.line_total();
            item_count += item.quantity.get();
        }

        let tax = subtotal * TAX_RATE;
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            Decimal::ZERO
        } else {
            FLAT_SHIPPING_FEE
        };
        let grand_total = subtotal + tax + shipping;

        Self {
            subtotal: round_currency(subtotal),
            tax: round_currency(tax),
            shipping,
            grand_total: round_currency(grand_total),
            item_count,
        }
    }
}
