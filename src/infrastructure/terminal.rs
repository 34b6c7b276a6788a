use crate::domain::ports::CartPresenter;
use crate::domain::totals::round_currency;
use crate::domain::view::{CartViewModel, CheckoutReceipt};
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Renders the cart view as plain text to any `Write` sink.
///
/// Each `present` call writes the full view; there is no incremental diffing.
/// The sink sits behind an async lock so one render never interleaves with
/// another.
pub struct TerminalPresenter<W> {
    sink: Arc<Mutex<W>>,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> TerminalPresenter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
        }
    }
}

impl<W> Clone for TerminalPresenter<W> {
    fn clone(&self) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
        }
    }
}

#[async_trait]
impl<W: Write + Send> CartPresenter for TerminalPresenter<W> {
    async fn present(&self, view: &CartViewModel) -> Result<()> {
        let mut sink = self.sink.lock().await;
        write_view(&mut *sink, view)?;
        sink.flush()?;
        Ok(())
    }

    async fn confirm(&self, receipt: &CheckoutReceipt) -> Result<()> {
        let mut sink = self.sink.lock().await;
        write_receipt(&mut *sink, receipt)?;
        sink.flush()?;
        Ok(())
    }
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", round_currency(amount))
}

fn write_view<W: Write>(w: &mut W, view: &CartViewModel) -> io::Result<()> {
    match view.badge {
        Some(count) => writeln!(w, "Cart ({count})")?,
        None => writeln!(w, "Cart")?,
    }

    if view.rows.is_empty() {
        writeln!(w, "  Your cart is empty")?;
        writeln!(w)?;
        return Ok(());
    }

    for row in &view.rows {
        writeln!(w, "  {} [{}]", row.name, row.color)?;
        writeln!(
            w,
            "    Qty {} @ {} each    {}",
            row.quantity,
            money(row.unit_price),
            money(row.line_total)
        )?;
    }

    if let Some(summary) = &view.summary {
        writeln!(w)?;
        writeln!(w, "  Order Summary")?;
        writeln!(
            w,
            "  Subtotal ({} items): {}",
            summary.item_count,
            money(summary.subtotal)
        )?;
        writeln!(w, "  Tax: {}", money(summary.tax))?;
        if summary.shipping.is_zero() {
            writeln!(w, "  Shipping: FREE")?;
        } else {
            writeln!(w, "  Shipping: {}", money(summary.shipping))?;
        }
        writeln!(w, "  Total: {}", money(summary.grand_total))?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_receipt<W: Write>(w: &mut W, receipt: &CheckoutReceipt) -> io::Result<()> {
    writeln!(w, "Thank you for your order!")?;
    writeln!(w, "Total: {}", money(receipt.grand_total))?;
    writeln!(w, "Items: {}", receipt.item_count)?;
    writeln!(w)?;
    Ok(())
}
