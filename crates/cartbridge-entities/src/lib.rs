//! # cartbridge-entities
//!
//! Data-transfer structures for both sides of the connector.
//!
//! Neither schema is owned by this system: the `commerce` module mirrors the
//! commerce platform's published entity shapes, the `marketing` module mirrors
//! the marketing platform's catalog, profile, and event request bodies.
//! Everything here is plain data; construction and mapping live in
//! `cartbridge-sync`.

pub mod commerce;
pub mod marketing;
