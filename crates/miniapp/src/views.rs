//! Pure view descriptions.
//!
//! Every view here is plain data computed from (catalog, cart): no markup,
//! no event handlers. The embedding shell renders these and binds its own
//! events, so nothing has to be torn down and re-scanned after a state
//! change.

use samovar_core::{Item, ItemId, Price};

use crate::cart::{Cart, CartSummary};
use crate::catalog::Catalog;

/// One entry in the category grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCard {
    pub name: String,
    pub image: String,
}

/// Per-item quantity control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityControl {
    /// Quantity is zero: render a single "add" affordance.
    Add,
    /// Quantity is positive: render a minus/count/plus triplet.
    Stepper { quantity: u32 },
}

impl QuantityControl {
    #[must_use]
    pub const fn for_quantity(quantity: u32) -> Self {
        if quantity == 0 {
            Self::Add
        } else {
            Self::Stepper { quantity }
        }
    }
}

/// One entry in the item grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemCard {
    pub id: ItemId,
    pub name: String,
    pub price: Price,
    pub image: String,
    pub control: QuantityControl,
}

/// The item grid with its title (a category name, or the search header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemsView {
    pub title: String,
    pub items: Vec<ItemCard>,
}

/// One resolved line of the cart overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub line_total: Price,
}

/// The cart overlay: resolved lines plus totals. No lines means the shell
/// shows the empty-cart placeholder instead of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPanel {
    pub lines: Vec<CartLine>,
    pub summary: CartSummary,
}

impl CartPanel {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Always-present chrome around the content area: the floating cart button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    /// Whether the floating cart button is shown (total items > 0).
    pub cart_visible: bool,
    /// Label of the floating cart button, e.g. `Cart (3)`.
    pub cart_label: String,
}

/// The content area, as a function of session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Catalog fetch in flight.
    Loading,
    /// Catalog load failed; terminal until the user reloads.
    Failed { message: String },
    /// The category grid.
    Categories { cards: Vec<CategoryCard> },
    /// The item grid for a category or a search.
    Items(ItemsView),
}

/// The category grid: one card per distinct category.
#[must_use]
pub fn category_cards(catalog: &Catalog) -> Vec<CategoryCard> {
    catalog
        .categories()
        .iter()
        .map(|category| CategoryCard {
            name: category.name.clone(),
            image: category.image.clone(),
        })
        .collect()
}

/// The item grid for the given items, with current cart quantities.
pub fn items_view<'a>(
    title: String,
    items: impl IntoIterator<Item = &'a Item>,
    catalog: &Catalog,
    cart: &Cart,
) -> ItemsView {
    let items = items
        .into_iter()
        .map(|item| ItemCard {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: display_image(item, catalog),
            control: QuantityControl::for_quantity(cart.quantity(&item.id)),
        })
        .collect();
    ItemsView { title, items }
}

/// The cart overlay: every entry that resolves to a catalog item, in id
/// order, with line totals. Stale entries are skipped, never an error.
#[must_use]
pub fn cart_panel(catalog: &Catalog, cart: &Cart) -> CartPanel {
    let lines = cart
        .iter()
        .filter_map(|(id, quantity)| {
            let item = catalog.get(id)?;
            Some(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity,
                line_total: item.price.times(quantity),
            })
        })
        .collect();
    CartPanel {
        lines,
        summary: cart.summary(catalog),
    }
}

/// The chrome for the current cart state.
#[must_use]
pub fn chrome(catalog: &Catalog, cart: &Cart) -> Chrome {
    let summary = cart.summary(catalog);
    Chrome {
        cart_visible: summary.total_items > 0,
        cart_label: format!("Cart ({})", summary.total_items),
    }
}

/// Item display image: the per-item image when present, otherwise the
/// category's representative image. The fallback happens here, at render
/// time, not at parse time.
fn display_image(item: &Item, catalog: &Catalog) -> String {
    item.item_image.clone().unwrap_or_else(|| {
        catalog
            .category_image(&item.category)
            .unwrap_or(&item.image)
            .to_owned()
    })
}
