//! Inventory quantity selection.
//!
//! Quantity falls through a channel-priority chain: the configured variant
//! channel first, then a matching supply channel, then the plain available
//! quantity. `None` means "no applicable inventory" and is distinct from
//! zero stock. A zero quantity on a channel falls through to the next link
//! in the chain rather than winning outright.

use std::collections::BTreeMap;

use cartbridge_entities::commerce::{
    ChannelAvailability, InventoryEntry, ProductVariantAvailability, Reference,
};

/// Uniform view over the two stock-bearing shapes: variant availability
/// (channel map) and inventory entries (single supply channel).
#[derive(Debug, Clone, Copy)]
pub struct InventorySource<'a> {
    pub available_quantity: Option<i64>,
    pub channels: Option<&'a BTreeMap<String, ChannelAvailability>>,
    pub supply_channel: Option<&'a Reference>,
}

impl<'a> From<&'a ProductVariantAvailability> for InventorySource<'a> {
    fn from(availability: &'a ProductVariantAvailability) -> Self {
        Self {
            available_quantity: availability.available_quantity,
            channels: availability.channels.as_ref(),
            supply_channel: None,
        }
    }
}

impl<'a> From<&'a InventoryEntry> for InventorySource<'a> {
    fn from(entry: &'a InventoryEntry) -> Self {
        Self {
            available_quantity: entry.available_quantity,
            channels: None,
            supply_channel: entry.supply_channel.as_ref(),
        }
    }
}

/// Select the quantity to report for a stock source.
///
/// `configured_channel` is `None` when channel inventory is disabled and
/// `Some("")` when configured but blank; the two behave differently for
/// supply-channel-scoped entries.
pub fn quantity_by_priority(
    source: Option<InventorySource<'_>>,
    configured_channel: Option<&str>,
) -> Option<i64> {
    let raw_quantity = source.and_then(|s| s.available_quantity).unwrap_or(0);

    let Some(channel) = configured_channel else {
        return Some(raw_quantity);
    };
    let Some(source) = source else {
        return Some(raw_quantity);
    };

    let has_channels = source.channels.is_some();
    let has_supply_channel = source.supply_channel.is_some();

    if channel.is_empty() || !(has_channels || has_supply_channel) {
        // A channel-scoped entry with a blank configured channel has no
        // applicable inventory; everything else keeps the raw quantity.
        if channel.is_empty() && has_supply_channel {
            return None;
        }
        return Some(raw_quantity);
    }

    let variant_channel_quantity = source
        .channels
        .and_then(|channels| channels.get(channel))
        .and_then(|c| c.available_quantity);
    if let Some(quantity) = variant_channel_quantity {
        if quantity != 0 {
            return Some(quantity);
        }
    }

    let supply_channel_quantity = match source.supply_channel {
        Some(reference) if reference.id == channel => source.available_quantity,
        _ => None,
    };
    if let Some(quantity) = supply_channel_quantity {
        if quantity != 0 {
            return Some(quantity);
        }
    }

    if !has_channels {
        return None;
    }

    Some(raw_quantity)
}
