use super::view::{CartViewModel, CheckoutReceipt};
use crate::error::Result;
use async_trait::async_trait;

/// Outbound port for the rendered cart.
///
/// The engine pushes a full view-model through `present` after every applied
/// mutation and a receipt through `confirm` on checkout. Implementations own
/// whatever sink they write to.
#[async_trait]
pub trait CartPresenter: Send + Sync {
    async fn present(&self, view: &CartViewModel) -> Result<()>;
    async fn confirm(&self, receipt: &CheckoutReceipt) -> Result<()>;
}

pub type PresenterBox = Box<dyn CartPresenter>;
