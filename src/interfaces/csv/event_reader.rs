use crate::domain::event::CartEvent;
use crate::error::{CartError, Result};
use std::io::Read;

/// Reads cart events from a CSV source.
///
/// Wraps `csv::Reader` and provides an iterator over `Result<CartEvent>`.
/// Whitespace is trimmed and record lengths are flexible, so checkout rows
/// may omit the trailing empty fields.
pub struct EventReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> EventReader<R> {
    /// Creates a new `EventReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes events.
    ///
    /// Each malformed row yields its own error, leaving the rest of the
    /// stream readable.
    pub fn events(self) -> impl Iterator<Item = Result<CartEvent>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(CartError::from))
    }
}
