//! # Cart Commands
//!
//! Cart manipulation. Each command answers with the whole cart so the UI
//! can redraw the cart badge, the cart page and the order summary at once.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │────►│  Order   │        │
//! │  │  Cart    │     │          │     │  Wizard  │     │  Placed  │        │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘        │
//! │       ▲                │                                  │             │
//! │       │           add_to_cart                       submit_order        │
//! │       │           update_quantity                   (checkout.rs)       │
//! │       │           remove_from_cart                        │             │
//! │       │                │                                  │             │
//! │       └──── clear_cart ┴──────────────────────────────────┘             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use ts_rs::TS;

use haven_core::{CartEntry, CartTotals};

use crate::error::AppResult;
use crate::storefront::Storefront;

/// Cart response including entries and totals.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub entries: Vec<CartEntry>,
    pub totals: CartTotals,
}

impl CartResponse {
    fn current(storefront: &Storefront) -> Self {
        CartResponse {
            entries: storefront.cart.entries().to_vec(),
            totals: storefront.cart.totals(storefront.config.tax_rate()),
        }
    }
}

pub fn get_cart(storefront: &Storefront) -> CartResponse {
    CartResponse::current(storefront)
}

/// Adds a catalog book to the cart.
///
/// ## Errors
/// `NOT_FOUND` if the id is not in the catalog. A quantity below 1 is not
/// an error; the cart is returned unchanged.
pub async fn add_to_cart(
    storefront: &mut Storefront,
    book_id: &str,
    quantity: i64,
) -> AppResult<CartResponse> {
    let book = storefront.catalog.require_book(book_id)?;
    storefront.cart.add_to_cart(book, quantity).await;

    Ok(CartResponse::current(storefront))
}

pub async fn update_quantity(
    storefront: &mut Storefront,
    book_id: &str,
    quantity: i64,
) -> CartResponse {
    storefront.cart.update_quantity(book_id, quantity).await;
    CartResponse::current(storefront)
}

pub async fn remove_from_cart(storefront: &mut Storefront, book_id: &str) -> CartResponse {
    storefront.cart.remove_from_cart(book_id).await;
    CartResponse::current(storefront)
}

pub async fn clear_cart(storefront: &mut Storefront) -> CartResponse {
    storefront.cart.clear_cart().await;
    CartResponse::current(storefront)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::notify::{Toast, ToastReceiver};
    use crate::state::StorefrontConfig;
    use haven_core::MAX_QUANTITY;

    async fn storefront() -> (Storefront, ToastReceiver) {
        Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_add_and_total() {
        let (mut storefront, mut toasts) = storefront().await;

        add_to_cart(&mut storefront, "1", 1).await.unwrap();
        let cart = add_to_cart(&mut storefront, "1", 1).await.unwrap();

        assert_eq!(cart.entries.len(), 1);
        assert_eq!(cart.totals.total_items, 2);
        // 2 × $24.99 = $49.98, tax 10% = $5.00
        assert_eq!(cart.totals.subtotal.cents(), 4998);
        assert_eq!(cart.totals.tax.cents(), 500);
        assert_eq!(cart.totals.total.cents(), 5498);

        assert_eq!(
            toasts.try_recv().unwrap(),
            Toast::success("Added \"The Silent Patient\" to cart")
        );
        assert_eq!(
            toasts.try_recv().unwrap(),
            Toast::success("Updated \"The Silent Patient\" quantity in cart")
        );
    }

    #[tokio::test]
    async fn test_add_unknown_book() {
        let (mut storefront, _toasts) = storefront().await;

        let err = add_to_cart(&mut storefront, "nope", 1).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&storefront).entries.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_quantities_are_capped() {
        let (mut storefront, _toasts) = storefront().await;

        add_to_cart(&mut storefront, "3", i64::MAX / 2).await.unwrap();
        add_to_cart(&mut storefront, "3", i64::MAX / 2).await.unwrap();
        let cart = add_to_cart(&mut storefront, "3", 2).await.unwrap();

        assert_eq!(cart.entries[0].quantity, MAX_QUANTITY);
        assert_eq!(cart.totals.subtotal.cents(), 1899 * MAX_QUANTITY);
        assert!(cart.totals.total.cents() > cart.totals.subtotal.cents());

        let cart = update_quantity(&mut storefront, "3", i64::MAX).await;
        assert_eq!(cart.totals.total_items, MAX_QUANTITY);
    }

    #[tokio::test]
    async fn test_update_remove_clear() {
        let (mut storefront, _toasts) = storefront().await;
        add_to_cart(&mut storefront, "3", 1).await.unwrap();
        add_to_cart(&mut storefront, "4", 1).await.unwrap();

        let cart = update_quantity(&mut storefront, "3", 0).await;
        assert_eq!(cart.totals.total_items, 2);

        let cart = update_quantity(&mut storefront, "3", 4).await;
        assert_eq!(cart.totals.total_items, 5);

        let cart = remove_from_cart(&mut storefront, "missing").await;
        assert_eq!(cart.entries.len(), 2);

        let cart = remove_from_cart(&mut storefront, "4").await;
        assert_eq!(cart.entries.len(), 1);

        let cart = clear_cart(&mut storefront).await;
        assert!(cart.entries.is_empty());
        assert_eq!(cart.totals.subtotal.cents(), 0);
    }
}
