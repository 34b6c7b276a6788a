use crate::domain::ports::CartPresenter;
use crate::domain::view::{CartViewModel, CheckoutReceipt};
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A presenter that records everything it is shown.
///
/// Uses `Arc<RwLock<Vec<_>>>` so clones share the same history. Ideal for
/// asserting on the refresh discipline in tests without touching a terminal.
#[derive(Default, Clone)]
pub struct RecordingPresenter {
    views: Arc<RwLock<Vec<CartViewModel>>>,
    receipts: Arc<RwLock<Vec<CheckoutReceipt>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn views(&self) -> Vec<CartViewModel> {
        self.views.read().await.clone()
    }

    pub async fn last_view(&self) -> Option<CartViewModel> {
        self.views.read().await.last().cloned()
    }

    pub async fn receipts(&self) -> Vec<CheckoutReceipt> {
        self.receipts.read().await.clone()
    }
}

#[async_trait]
impl CartPresenter for RecordingPresenter {
    async fn present(&self, view: &CartViewModel) -> Result<()> {
        self.views.write().await.push(view.clone());
        Ok(())
    }

    async fn confirm(&self, receipt: &CheckoutReceipt) -> Result<()> {
        self.receipts.write().await.push(*receipt);
        Ok(())
    }
}
