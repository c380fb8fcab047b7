//! # Cart Store
//!
//! Owns the shopping cart, mirrors it to local storage and announces every
//! change with a toast.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  UI Action            Store Method           Toast                      │
//! │  ─────────            ────────────           ─────                      │
//! │  Add to cart ───────► add_to_cart() ───────► Added "<title>" to cart    │
//! │   (already in cart)                          Updated "<title>" quantity │
//! │                                              in cart                    │
//! │  +/- quantity ──────► update_quantity() ───► (none)                     │
//! │  Remove ────────────► remove_from_cart() ──► Removed "<title>" from cart│
//! │  Clear / checkout ──► clear_cart() ────────► Cart cleared               │
//! │                                                                         │
//! │  Every mutation ends with persist(): the whole entry list is written    │
//! │  as JSON under `bookstore_cart`.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Local storage is best effort. A value that doesn't parse at startup
//! gives an empty cart; a failed write is logged and the in-memory cart
//! keeps the change.

use tracing::{debug, error, info, warn};

use haven_core::{AddOutcome, Book, Cart, CartEntry, CartTotals, TaxRate, CART_STORAGE_KEY};
use haven_db::LocalStorageRepository;

use crate::notify::Notifier;

/// The cart plus its persistence and notifications.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    storage: LocalStorageRepository,
    notifier: Notifier,
}

impl CartStore {
    /// Restores the cart saved in local storage.
    ///
    /// Missing, unreadable or malformed data yields an empty cart.
    pub async fn load(storage: LocalStorageRepository, notifier: Notifier) -> Self {
        let cart = match storage.get_item(CART_STORAGE_KEY).await {
            Ok(Some(raw)) => parse_cart(&raw),
            Ok(None) => Cart::new(),
            Err(e) => {
                error!(error = %e, "Failed to read saved cart");
                Cart::new()
            }
        };

        info!(
            entries = cart.item_count(),
            total_items = cart.total_items(),
            "Cart restored"
        );

        CartStore {
            cart,
            storage,
            notifier,
        }
    }

    /// The current cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn entries(&self) -> &[CartEntry] {
        self.cart.entries()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Order summary at the given tax rate.
    pub fn totals(&self, tax_rate: TaxRate) -> CartTotals {
        self.cart.totals(tax_rate)
    }

    /// Adds `quantity` copies of `book`.
    ///
    /// A quantity below 1 changes nothing and shows no toast.
    pub async fn add_to_cart(&mut self, book: &Book, quantity: i64) -> AddOutcome {
        let outcome = self.cart.add(book, quantity);
        debug!(book_id = %book.id, quantity, ?outcome, "add_to_cart");

        match outcome {
            AddOutcome::Added => {
                self.notifier
                    .success(format!("Added \"{}\" to cart", book.title));
            }
            AddOutcome::QuantityUpdated => {
                self.notifier
                    .success(format!("Updated \"{}\" quantity in cart", book.title));
            }
            AddOutcome::Ignored => return outcome,
        }

        self.persist().await;
        outcome
    }

    /// Removes a book from the cart. Unknown ids are a no-op.
    pub async fn remove_from_cart(&mut self, book_id: &str) -> Option<CartEntry> {
        let removed = self.cart.remove(book_id);
        debug!(book_id, found = removed.is_some(), "remove_from_cart");

        if let Some(entry) = &removed {
            self.notifier
                .success(format!("Removed \"{}\" from cart", entry.book.title));
            self.persist().await;
        }

        removed
    }

    /// Sets a book's quantity. Below 1, or an unknown id, is a silent no-op.
    pub async fn update_quantity(&mut self, book_id: &str, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(book_id, quantity);
        debug!(book_id, quantity, changed, "update_quantity");

        if changed {
            self.persist().await;
        }
        changed
    }

    /// Empties the cart. Always announces `Cart cleared`.
    pub async fn clear_cart(&mut self) {
        self.cart.clear();
        debug!("clear_cart");

        self.notifier.success("Cart cleared");
        self.persist().await;
    }

    /// Writes the full entry list to local storage.
    async fn persist(&self) {
        let json = match serde_json::to_string(self.cart.entries()) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize cart");
                return;
            }
        };

        if let Err(e) = self.storage.set_item(CART_STORAGE_KEY, &json).await {
            error!(error = %e, "Failed to save cart");
        }
    }
}

/// Parses a stored cart, falling back to an empty one.
fn parse_cart(raw: &str) -> Cart {
    match serde_json::from_str::<Vec<CartEntry>>(raw) {
        Ok(entries) => Cart::from_entries(entries),
        Err(e) => {
            warn!(error = %e, "Discarding malformed saved cart");
            Cart::new()
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
