//! Domain logic for the portfolio backend.
//!
//! Everything here is free of I/O so it can be shared by the repository
//! layer, the HTTP handlers, and tests alike.

pub mod catalog;
pub mod error;
pub mod images;
pub mod language;
pub mod ordering;
pub mod types;
pub mod work;
