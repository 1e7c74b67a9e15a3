//! Repository layer: per-entity database access.

pub mod record_store;

pub use record_store::RecordStore;
