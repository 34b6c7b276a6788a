use crate::domain::cart::Cart;
use crate::domain::item::ItemId;
use crate::domain::totals::{Totals, round_currency};
use rust_decimal::Decimal;
use serde::Serialize;

/// One rendered line of the item list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineRow {
    pub id: ItemId,
    pub name: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// `unit_price * quantity`, rounded for display.
    pub line_total: Decimal,
    pub image: String,
    pub link: String,
}

/// The order-summary panel. Present only when the cart has items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryPanel {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub shipping: Decimal,
    pub grand_total: Decimal,
    pub item_count: u32,
}

impl From<Totals> for SummaryPanel {
    fn from(totals: Totals) -> Self {
        Self {
            subtotal: totals.subtotal,
            tax: totals.tax,
            shipping: totals.shipping,
            grand_total: totals.grand_total,
            item_count: totals.item_count,
        }
    }
}

/// What the checkout confirmation reports. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckoutReceipt {
    pub grand_total: Decimal,
    pub item_count: u32,
}

impl From<&Totals> for CheckoutReceipt {
    fn from(totals: &Totals) -> Self {
        Self {
            grand_total: totals.grand_total,
            item_count: totals.item_count,
        }
    }
}

/// Full projection of the cart for one render pass.
///
/// `badge` is the header item counter, `None` when the count is 0 so the
/// presenter hides it. An empty cart yields no rows and no summary; the
/// presenter shows the empty-state message instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartViewModel {
    pub rows: Vec<LineRow>,
    pub summary: Option<SummaryPanel>,
    pub badge: Option<u32>,
}

/// Pure projection of cart state to a view-model. No side effects; all I/O
/// lives behind the presenter port.
pub fn project(cart: &Cart) -> CartViewModel {
    let rows = cart
        .items()
        .iter()
        .map(|item| LineRow {
            id: item.id.clone(),
            name: item.name.clone(),
            color: item.color.clone(),
            quantity: item.quantity.get(),
            unit_price: item.unit_price.value(),
            line_total: round_currency(item.line_total()),
            image: item.image.clone(),
            link: item.link.clone(),
        })
        .collect();

    let summary = if cart.is_empty() {
        None
    } else {
        Some(SummaryPanel::from(cart.totals()))
    };

    let count = cart.item_count();
    let badge = if count > 0 { Some(count) } else { None };

    CartViewModel {
        rows,
        summary,
        badge,
    }
}
