//! # cartbridge-sync
//!
//! The translation layer of the connector: pure mapping functions from
//! commerce entities to marketing request bodies, and the dispatcher that
//! classifies an inbound commerce message into the ordered list of sync
//! requests it implies.
//!
//! Everything here is deterministic. Mappers read only their inputs and the
//! connector settings; the same input always produces byte-identical output.

mod dispatcher;
mod inventory;
mod mappers;
mod pricing;

pub use dispatcher::EventDispatcher;
pub use inventory::{quantity_by_priority, InventorySource};
pub use mappers::{CategoryMapper, CustomerMapper, OrderMapper, ProductMapper};
pub use pricing::select_price;
