//! # haven-core: Pure Storefront Logic for Literary Haven
//!
//! This crate holds the storefront's domain logic as pure functions and
//! plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Literary Haven Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Front End (out of scope)                 │   │
//! │  │    Browse ──► Book Detail ──► Cart ──► Checkout ──► Profile     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command / JSON                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    apps/storefront                              │   │
//! │  │    CartStore, AuthStore, AdminStore, Storefront::dispatch       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ haven-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ catalog │ │ checkout │ │   │
//! │  │   │  Book   │ │  Money  │ │  Cart   │ │ search  │ │  wizard  │ │   │
//! │  │   │  User   │ │ TaxRate │ │  Entry  │ │ top/rel │ │  steps   │ │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO DELAYS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    haven-db (Local Storage)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, User, SiteSettings, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart entries, uniqueness invariant, derived totals
//! - [`catalog`] - The static catalog and its query helpers
//! - [`checkout`] - The three-step checkout wizard
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use haven_core::cart::Cart;
//! use haven_core::catalog::Catalog;
//!
//! let catalog = Catalog::seeded();
//! let book = catalog.get_book_by_id("3").unwrap();
//!
//! let mut cart = Cart::new();
//! cart.add(book, 1);
//! cart.add(book, 2);
//!
//! assert_eq!(cart.entries().len(), 1);
//! assert_eq!(cart.total_items(), 3);
//! assert_eq!(cart.subtotal().cents(), 3 * 1899);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{AddOutcome, Cart, CartEntry, CartTotals, MAX_QUANTITY};
pub use catalog::{Catalog, CatalogStats};
pub use checkout::{build_order, Checkout, CheckoutForm, CheckoutStep};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Local storage key holding the serialized cart entries.
pub const CART_STORAGE_KEY: &str = "bookstore_cart";

/// Local storage key holding the serialized session user.
pub const SESSION_STORAGE_KEY: &str = "bookstore_user";

/// Email address that unlocks the admin panel.
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// The only credential pair the mock login accepts.
pub const DEMO_EMAIL: &str = "demo@example.com";
pub const DEMO_PASSWORD: &str = "password";

/// Default number of books returned by related/recommended/top-rated queries.
pub const DEFAULT_QUERY_LIMIT: usize = 4;

/// Default number of books in the "new releases" shelf.
pub const NEW_RELEASES_LIMIT: usize = 5;
