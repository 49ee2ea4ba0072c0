//! Samovar Core - Shared types library.
//!
//! This crate provides the domain types used across the Samovar mini-app:
//! - `miniapp` - The menu/cart widget core and its terminal driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no host
//! bindings. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Item identifiers, prices with currency, and catalog items

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
