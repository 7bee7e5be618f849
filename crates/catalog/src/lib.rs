//! `shelfwise-catalog` — inventory and sales ledger records.
//!
//! Plain data in, plain data out: the embedding host owns fetching,
//! persistence, and serialization boundaries; this crate only defines the
//! already-structured shapes the analytics passes read, plus their
//! field-level validation.

pub mod item;
pub mod sale;

pub use item::InventoryItem;
pub use sale::SalesRecord;
