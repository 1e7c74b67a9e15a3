pub mod catalog;
pub mod website;
