//! Domain primitives shared by the storage and HTTP crates.
//!
//! Nothing in here performs I/O.

pub mod error;
pub mod types;
pub mod upload_naming;
pub mod variant;
