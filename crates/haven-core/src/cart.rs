//! # Cart
//!
//! The shopping cart as pure data: ordered entries keyed by book id, plus
//! the totals derived from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  UI Action              Cart Method              Entry Change           │
//! │  ─────────              ───────────              ────────────           │
//! │                                                                         │
//! │  Add to cart ─────────► add(book, qty) ────────► push or qty += n       │
//! │                                                                         │
//! │  Change quantity ─────► update_quantity() ─────► qty = n  (n >= 1)      │
//! │                                                                         │
//! │  Click remove ────────► remove(id) ────────────► entry dropped          │
//! │                                                                         │
//! │  Clear / checkout ────► clear() ───────────────► entries emptied        │
//! │                                                                         │
//! │  Any read ────────────► total_items(), subtotal() (recomputed)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence and notifications live in the storefront's `CartStore`; this
//! type only enforces the invariants.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Book, OrderItem, TaxRate};

/// Most copies of one book a cart entry can hold. Larger requests are
/// clamped to this.
pub const MAX_QUANTITY: i64 = 999;

// =============================================================================
// Cart Entry
// =============================================================================

/// A cart line: a book snapshot and how many copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartEntry {
    pub book: Book,

    /// Always at least 1 while the entry is in a cart.
    pub quantity: i64,
}

impl CartEntry {
    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.book.line_total(self.quantity)
    }

    /// Freezes this line into an order item.
    pub fn to_order_item(&self) -> OrderItem {
        OrderItem {
            book_id: self.book.id.clone(),
            title: self.book.title.clone(),
            cover_image: self.book.cover_image.clone(),
            unit_price: self.book.price,
            quantity: self.quantity,
        }
    }
}

/// What [`Cart::add`] did, so callers can word their notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new entry was inserted.
    Added,
    /// An existing entry's quantity was incremented.
    QuantityUpdated,
    /// The quantity was below 1; nothing changed.
    Ignored,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by book id (adding the same book increases quantity)
/// - Every quantity is between 1 and [`MAX_QUANTITY`]
/// - Entry order is insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: Vec::new(),
        }
    }

    /// Builds a cart from entries of unknown provenance (e.g. local storage).
    ///
    /// Duplicate book ids are merged into the first occurrence and entries
    /// with a quantity below 1 are dropped, so the invariants hold no matter
    /// what was stored.
    pub fn from_entries(entries: Vec<CartEntry>) -> Self {
        let mut cart = Cart::new();
        for entry in entries {
            cart.add(&entry.book, entry.quantity);
        }
        cart
    }

    /// Adds `quantity` copies of a book.
    ///
    /// ## Behavior
    /// - Book already in cart: quantity increases by `quantity`
    /// - Book not in cart: appended as a new entry
    /// - `quantity < 1`: ignored
    /// - The resulting quantity is capped at [`MAX_QUANTITY`]
    pub fn add(&mut self, book: &Book, quantity: i64) -> AddOutcome {
        if quantity < 1 {
            return AddOutcome::Ignored;
        }

        if let Some(entry) = self.entries.iter_mut().find(|e| e.book.id == book.id) {
            entry.quantity = entry.quantity.saturating_add(quantity).min(MAX_QUANTITY);
            return AddOutcome::QuantityUpdated;
        }

        self.entries.push(CartEntry {
            book: book.clone(),
            quantity: quantity.min(MAX_QUANTITY),
        });
        AddOutcome::Added
    }

    /// Removes the entry for `book_id`, returning it if it was present.
    pub fn remove(&mut self, book_id: &str) -> Option<CartEntry> {
        let index = self.entries.iter().position(|e| e.book.id == book_id)?;
        Some(self.entries.remove(index))
    }

    /// Replaces the quantity of an entry.
    ///
    /// A `quantity` below 1 is silently ignored, as is an unknown id.
    /// Values above [`MAX_QUANTITY`] are clamped.
    /// Returns `true` when an entry was changed.
    pub fn update_quantity(&mut self, book_id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }
        let quantity = quantity.min(MAX_QUANTITY);

        match self.entries.iter_mut().find(|e| e.book.id == book_id) {
            Some(entry) if entry.quantity != quantity => {
                entry.quantity = quantity;
                true
            }
            _ => false,
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Looks up the entry for a book.
    pub fn get(&self, book_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.book.id == book_id)
    }

    /// Returns the number of distinct books in the cart.
    pub fn item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Sum of price × quantity over all entries.
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(CartEntry::line_total).sum()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Computes the order summary shown beside the cart and checkout.
    pub fn totals(&self, tax_rate: TaxRate) -> CartTotals {
        CartTotals::compute(self, tax_rate)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Cart totals summary for UI responses.
///
/// Shipping is always free; tax applies to the subtotal as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_items: i64,
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

impl CartTotals {
    fn compute(cart: &Cart, tax_rate: TaxRate) -> Self {
        let subtotal = cart.subtotal();
        let shipping = Money::zero();
        let tax = subtotal.calculate_tax(tax_rate);

        CartTotals {
            item_count: cart.item_count(),
            total_items: cart.total_items(),
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
