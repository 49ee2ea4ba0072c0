//! Core types for Samovar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod item;
pub mod price;

pub use id::ItemId;
pub use item::Item;
pub use price::{Currency, Price, PriceError};
