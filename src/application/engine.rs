use crate::domain::cart::Cart;
use crate::domain::event::{CartEvent, EventType};
use crate::domain::ports::PresenterBox;
use crate::domain::view::{CheckoutReceipt, project};
use crate::error::Result;
use tracing::debug;

/// The main entry point for the cart application.
///
/// `CartEngine` owns the cart and the presenter and applies events strictly
/// one at a time, awaiting each render before the next event is considered.
/// Invalid or inapplicable events (unknown ids, zero quantities, missing
/// fields) are silent no-ops and do not trigger a refresh.
pub struct CartEngine {
    cart: Cart,
    presenter: PresenterBox,
}

impl CartEngine {
    pub fn new(cart: Cart, presenter: PresenterBox) -> Self {
        Self { cart, presenter }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Projects the current state and pushes it through the presenter.
    ///
    /// Called once at startup for the initial render and after every applied
    /// mutation.
    pub async fn refresh(&self) -> Result<()> {
        self.presenter.present(&project(&self.cart)).await
    }

    /// Applies one cart event.
    pub async fn apply(&mut self, event: CartEvent) -> Result<()> {
        match event.r#type {
            EventType::SetQuantity => {
                if let Some(id) = event.item
                    && let Some(quantity) = event.quantity
                {
                    if self.cart.set_quantity(&id, quantity) {
                        self.refresh().await?;
                    } else {
                        debug!(item = %id, quantity, "ignoring quantity change");
                    }
                }
                Ok(())
            }
            EventType::Remove => {
                if let Some(id) = event.item {
                    if self.cart.remove_item(&id) {
                        self.refresh().await?;
                    } else {
                        debug!(item = %id, "ignoring removal of unknown item");
                    }
                }
                Ok(())
            }
            EventType::Checkout => {
                if self.cart.is_empty() {
                    debug!("ignoring checkout of empty cart");
                    return Ok(());
                }
                let receipt = CheckoutReceipt::from(&self.cart.totals());
                self.presenter.confirm(&receipt).await
            }
        }
    }
}
