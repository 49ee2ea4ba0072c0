//! The per-session state machine.
//!
//! Owns the catalog, cart, and view selector for exactly one page load:
//! `Loading → Ready` (≥ 1 item parsed) or `Loading → Failed` (transport
//! failure or an empty menu). Within `Ready` the content area cycles
//! between the category grid and an item grid, with the cart overlay
//! reachable from either and returning to whichever was active.
//!
//! All mutations are synchronous; the only suspension point in a session's
//! life is the catalog fetch, which happens outside this type.

use samovar_core::ItemId;
use tracing::{debug, info, warn};

use crate::cart::{Cart, CartSummary};
use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::host::Host;
use crate::order::build_order;
use crate::views::{self, CartPanel, Chrome, Screen};

/// Title of the item grid shown for search results.
const SEARCH_RESULTS_TITLE: &str = "Search results";

/// Which item list is selected. Content is recomputed from the catalog on
/// every render, so item views never go stale after a cart change.
#[derive(Debug, Clone, PartialEq, Eq)]
enum ItemSelection {
    Category(String),
    Search(String),
}

/// Navigation within a loaded session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Nav {
    Categories,
    Items(ItemSelection),
}

/// Load lifecycle of the session's data view.
#[derive(Debug)]
enum Phase {
    Loading,
    Failed(String),
    Ready { catalog: Catalog, nav: Nav },
}

/// One user session of the widget.
pub struct Session<H: Host> {
    host: H,
    phase: Phase,
    cart: Cart,
    cart_open: bool,
}

impl<H: Host> Session<H> {
    /// Create a session in the loading phase and expand the host viewport.
    pub fn new(host: H) -> Self {
        host.expand();
        Self {
            host,
            phase: Phase::Loading,
            cart: Cart::new(),
            cart_open: false,
        }
    }

    /// Feed the catalog load result in.
    ///
    /// A failure is terminal for the session's data view: the screen shows
    /// the error and no automatic retry happens; the user must reload.
    pub fn catalog_loaded(&mut self, result: Result<Catalog, CatalogError>) {
        match result {
            Ok(catalog) => {
                info!(items = catalog.len(), "session ready");
                self.phase = Phase::Ready {
                    catalog,
                    nav: Nav::Categories,
                };
            }
            Err(err) => {
                warn!(error = %err, "menu load failed");
                self.phase = Phase::Failed(err.user_message().to_owned());
            }
        }
        self.sync_main_button();
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.phase, Phase::Ready { .. })
    }

    /// The content area for the current state, as pure view data.
    #[must_use]
    pub fn screen(&self) -> Screen {
        match &self.phase {
            Phase::Loading => Screen::Loading,
            Phase::Failed(message) => Screen::Failed {
                message: message.clone(),
            },
            Phase::Ready { catalog, nav } => match nav {
                Nav::Categories => Screen::Categories {
                    cards: views::category_cards(catalog),
                },
                Nav::Items(ItemSelection::Category(name)) => Screen::Items(views::items_view(
                    name.clone(),
                    catalog.in_category(name),
                    catalog,
                    &self.cart,
                )),
                Nav::Items(ItemSelection::Search(query)) => Screen::Items(views::items_view(
                    SEARCH_RESULTS_TITLE.to_owned(),
                    catalog.search(query),
                    catalog,
                    &self.cart,
                )),
            },
        }
    }

    /// The floating cart button state. Hidden until the session is ready.
    #[must_use]
    pub fn chrome(&self) -> Chrome {
        match &self.phase {
            Phase::Ready { catalog, .. } => views::chrome(catalog, &self.cart),
            Phase::Loading | Phase::Failed(_) => Chrome {
                cart_visible: false,
                cart_label: "Cart (0)".to_owned(),
            },
        }
    }

    /// The cart overlay, when open and the session is ready.
    #[must_use]
    pub fn cart_panel(&self) -> Option<CartPanel> {
        if !self.cart_open {
            return None;
        }
        match &self.phase {
            Phase::Ready { catalog, .. } => Some(views::cart_panel(catalog, &self.cart)),
            Phase::Loading | Phase::Failed(_) => None,
        }
    }

    #[must_use]
    pub const fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Open the cart overlay on top of the current view.
    pub fn open_cart(&mut self) {
        self.cart_open = true;
    }

    /// Close the overlay, returning to whichever view was underneath.
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Show the item grid for a category.
    pub fn select_category(&mut self, name: &str) {
        if let Phase::Ready { nav, .. } = &mut self.phase {
            *nav = Nav::Items(ItemSelection::Category(name.to_owned()));
        }
    }

    /// Back from the item grid to the category grid.
    pub fn back(&mut self) {
        if let Phase::Ready { nav, .. } = &mut self.phase {
            *nav = Nav::Categories;
        }
    }

    /// Live search-box input.
    ///
    /// An emptied query returns to the category grid. A single character
    /// leaves the current view untouched (skips re-rendering on the very
    /// first keystroke). Two or more characters switch to search results.
    pub fn search_input(&mut self, query: &str) {
        let query = query.trim();
        let Phase::Ready { nav, .. } = &mut self.phase else {
            return;
        };
        match query.chars().count() {
            0 => *nav = Nav::Categories,
            1 => {}
            _ => *nav = Nav::Items(ItemSelection::Search(query.to_owned())),
        }
    }

    /// Add one of the item. Succeeds even for ids missing from the catalog;
    /// rendering and totals skip unresolvable entries.
    pub fn increment(&mut self, id: ItemId) {
        let quantity = self.cart.increment(id);
        debug!(quantity, "cart increment");
        self.sync_main_button();
    }

    /// Remove one of the item; no-op if it is not in the cart.
    pub fn decrement(&mut self, id: &ItemId) {
        let quantity = self.cart.decrement(id);
        debug!(quantity, "cart decrement");
        self.sync_main_button();
    }

    /// Cart totals against the current catalog. `None` until ready.
    #[must_use]
    pub fn cart_summary(&self) -> Option<CartSummary> {
        match &self.phase {
            Phase::Ready { catalog, .. } => Some(self.cart.summary(catalog)),
            Phase::Loading | Phase::Failed(_) => None,
        }
    }

    /// Submit the order to the host.
    ///
    /// Refused with a user-visible notice when the cart holds nothing
    /// resolvable; otherwise the snapshot is built and handed to the host
    /// exactly once. The shell calls this when the host's main button fires.
    pub fn checkout(&self) {
        let Phase::Ready { catalog, .. } = &self.phase else {
            debug!("checkout ignored: menu not loaded");
            return;
        };
        let summary = self.cart.summary(catalog);
        if summary.total_items == 0 {
            warn!("checkout refused: cart is empty");
            self.host.show_alert("Your cart is empty.");
            return;
        }

        let order = build_order(catalog, &self.cart, self.host.user_context());
        match serde_json::to_value(&order) {
            Ok(payload) => {
                info!(total = %summary.total_price, "order submitted");
                self.host.send_data(payload);
            }
            Err(err) => {
                warn!(error = %err, "failed to serialize order");
                self.host.show_alert("Could not submit the order.");
            }
        }
    }

    /// The host boundary this session drives.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mirror the cart onto the host main button: shown with the order
    /// total while anything resolvable is in the cart, hidden otherwise.
    fn sync_main_button(&self) {
        let Phase::Ready { catalog, .. } = &self.phase else {
            self.host.hide_main_button();
            return;
        };
        let summary = self.cart.summary(catalog);
        if summary.total_items > 0 {
            self.host
                .set_main_button_text(&format!("Place order ({})", summary.total_price));
            self.host.show_main_button();
        } else {
            self.host.hide_main_button();
        }
    }
}
