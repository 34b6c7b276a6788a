use crate::domain::item::ItemId;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    SetQuantity,
    Remove,
    Checkout,
}

/// A discrete cart interaction, as carried by the event stream.
///
/// `item` and `quantity` are optional at the transport level; which fields an
/// event type actually requires is decided by the engine, which silently
/// ignores incomplete or inapplicable events.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CartEvent {
    pub r#type: EventType,
    pub item: Option<ItemId>,
    pub quantity: Option<u32>,
}
