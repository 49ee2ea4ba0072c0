//! HTTP loader for the published menu sheet.

use std::time::Duration;

use reqwest::Client;
use samovar_core::Currency;
use tracing::{info, instrument, warn};
use url::Url;

use crate::config::MiniappConfig;
use crate::error::CatalogError;

use super::{Catalog, parse::parse_menu};

/// Client for the published CSV export of the menu sheet.
///
/// Performs a single GET per load with a configured timeout. There is no
/// retry: a load failure is terminal for the session's data view and the
/// user reloads the page.
pub struct SheetClient {
    client: Client,
    menu_url: Url,
    currency: Currency,
}

impl SheetClient {
    /// Create a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &MiniappConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            menu_url: config.menu_url.clone(),
            currency: config.currency,
        })
    }

    /// Fetch and parse the menu.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] on a network failure, timeout, or
    /// non-success status, and [`CatalogError::Empty`] when the response
    /// parses to zero usable items.
    #[instrument(skip(self), fields(url = %self.menu_url))]
    pub async fn load_menu(&self) -> Result<Catalog, CatalogError> {
        let response = self
            .client
            .get(self.menu_url.as_str())
            .send()
            .await?
            .error_for_status()?;
        let csv = response.text().await?;

        let items = parse_menu(&csv, self.currency);
        if items.is_empty() {
            warn!("menu parsed to zero usable items");
            return Err(CatalogError::Empty);
        }

        let catalog = Catalog::new(items, self.currency);
        info!(
            items = catalog.len(),
            categories = catalog.categories().len(),
            "menu loaded"
        );
        Ok(catalog)
    }
}
