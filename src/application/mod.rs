//! Application layer orchestrating the cart ledger.
//!
//! This module defines the `CartEngine`, the primary entry point for applying
//! cart events. It keeps mutation and rendering in lock-step: every applied
//! mutation is followed by a full view refresh through the presenter port.

pub mod engine;
