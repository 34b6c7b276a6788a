use crate::domain::item::LineItem;
use crate::error::{CartError, Result};
use std::io::Read;

/// Reads the seed cart from a JSON array of line items.
///
/// Value-object validation happens during deserialization, so a seed with a
/// negative price or an out-of-bounds quantity fails here rather than
/// producing a malformed cart.
pub struct SeedReader<R: Read> {
    source: R,
}

impl<R: Read> SeedReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    pub fn items(self) -> Result<Vec<LineItem>> {
        serde_json::from_reader(self.source).map_err(CartError::from)
    }
}
