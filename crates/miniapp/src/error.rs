//! Catalog loading errors.
//!
//! Both variants are terminal for the session's data view: the UI replaces
//! its content with an error screen and the user must reload. Unresolvable
//! cart entries and empty-cart checkouts are not errors at this level; they
//! are handled in [`crate::cart`] and [`crate::session`].

use thiserror::Error;

/// Errors from loading the menu catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The fetch failed, timed out, or returned a non-success status.
    #[error("menu request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The fetch succeeded but zero rows survived validation. Surfaced to
    /// the user identically to a transport failure.
    #[error("menu contained no usable items")]
    Empty,
}

impl CatalogError {
    /// Message shown on the error screen. Both variants read the same to
    /// the user; the distinction only matters in logs.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        "Failed to load the menu."
    }
}
