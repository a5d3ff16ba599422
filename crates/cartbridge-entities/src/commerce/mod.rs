//! Commerce platform entity shapes, consumed as-is from webhook payloads.

mod customer;
mod inventory;
mod message;
mod order;
mod product;
mod types;

pub use customer::{Address, Customer};
pub use inventory::InventoryEntry;
pub use message::CommerceMessage;
pub use order::{LineItem, Order, OrderState};
pub use product::{
    Category, CategoryReference, ChannelAvailability, Product, ProductCatalogData, ProductData,
    ProductVariant, ProductVariantAvailability,
};
pub use types::{Image, LocalizedString, Money, Price, Reference};
