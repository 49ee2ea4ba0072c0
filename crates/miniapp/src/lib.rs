//! Samovar mini-app library.
//!
//! The menu/cart widget core as a library: everything except presentation.
//! An embedding shell (the chat platform's web view, or the terminal driver
//! in `main.rs`) renders the view data and feeds user events back in.
//!
//! # Architecture
//!
//! - [`catalog`] - menu loading: CSV fetch, row parsing, derived categories
//! - [`cart`] - item-quantity mapping and totals
//! - [`views`] - pure view descriptions computed from catalog + cart
//! - [`session`] - the per-session state machine driving the host boundary
//! - [`host`] - the host platform capability trait and its local fallback
//! - [`order`] - the checkout snapshot handed to the host

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod host;
pub mod order;
pub mod session;
pub mod views;
