//! Inventory domain module (append-only, in-memory).
//!
//! This crate contains the item record and the store that holds it, implemented
//! as plain domain logic (no HTTP, no rendering).

pub mod item;
pub mod store;

pub use item::{AddItem, Item};
pub use store::{InMemoryItemStore, ItemStore};
