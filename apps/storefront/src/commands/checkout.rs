//! # Checkout Commands
//!
//! Drives the three-step wizard and places the order.
//!
//! ## Order Placement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  submit_order                                                           │
//! │                                                                         │
//! │  1. Checkout::begin_submit ── Review step? cart non-empty?              │
//! │  2. Simulated payment delay (checkout latency)                          │
//! │  3. build_order ── snapshot of the cart lines, ORD-NNN id, today        │
//! │  4. ProfileState::record_order ── newest first                          │
//! │  5. CartStore::clear_cart ── "Cart cleared" toast                       │
//! │  6. Checkout::complete ── confirmation email                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command here requires a signed-in session.

use chrono::Utc;
use serde::Serialize;
use tracing::info;
use ts_rs::TS;

use haven_core::{build_order, Checkout, CheckoutForm, Order};

use crate::error::AppResult;
use crate::latency::LatencyKind;
use crate::storefront::Storefront;

/// The placed order and where its confirmation went.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    pub order: Order,
    pub email: String,
}

/// Opens a fresh wizard prefilled from the session user.
pub fn start_checkout(storefront: &mut Storefront) -> AppResult<Checkout> {
    let user = storefront.auth.require_user()?;
    storefront.checkout = Checkout::new(Some(user));
    Ok(storefront.checkout.clone())
}

pub fn update_form(storefront: &mut Storefront, form: CheckoutForm) -> AppResult<Checkout> {
    storefront.auth.require_user()?;
    storefront.checkout.update_form(form)?;
    Ok(storefront.checkout.clone())
}

/// Validates the current step and advances.
///
/// ## Errors
/// `VALIDATION_ERROR` naming the first blank or malformed field.
pub fn next_step(storefront: &mut Storefront) -> AppResult<Checkout> {
    storefront.auth.require_user()?;
    storefront.checkout.next()?;
    Ok(storefront.checkout.clone())
}

pub fn previous_step(storefront: &mut Storefront) -> AppResult<Checkout> {
    storefront.auth.require_user()?;
    storefront.checkout.back()?;
    Ok(storefront.checkout.clone())
}

/// Places the order from the review step.
///
/// ## Errors
/// - `BUSINESS_LOGIC` when not at the review step or the cart is empty
/// - `UNAUTHORIZED` when signed out
pub async fn submit_order(storefront: &mut Storefront) -> AppResult<OrderConfirmation> {
    storefront.auth.require_user()?;
    storefront.checkout.begin_submit(storefront.cart.cart())?;

    storefront.latency.wait(LatencyKind::Checkout).await;

    let order = build_order(
        storefront.profile.next_order_id(),
        Utc::now().date_naive(),
        storefront.cart.cart(),
        storefront.config.tax_rate(),
    );
    info!(order_id = %order.id, total = %order.total, items = order.item_count(), "Order placed");

    storefront.profile.record_order(order.clone());
    storefront.cart.clear_cart().await;
    storefront.checkout.complete();

    Ok(OrderConfirmation {
        order,
        email: storefront
            .checkout
            .confirmation_email()
            .unwrap_or_default()
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::notify::{Toast, ToastReceiver};
    use crate::state::StorefrontConfig;
    use haven_core::{CheckoutStep, OrderStatus};

    async fn signed_in() -> (Storefront, ToastReceiver) {
        let (mut storefront, mut toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();
        storefront.auth.login("demo@example.com", "password").await.unwrap();
        while toasts.try_recv().is_ok() {}
        (storefront, toasts)
    }

    fn filled_form(storefront: &Storefront) -> CheckoutForm {
        CheckoutForm {
            address: "1 Library Lane".to_string(),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
            country: "US".to_string(),
            card_number: "4242 4242 4242 4242".to_string(),
            card_name: "Demo User".to_string(),
            expiry_date: "12/29".to_string(),
            cvv: "123".to_string(),
            ..storefront.checkout.form().clone()
        }
    }

    #[tokio::test]
    async fn test_requires_sign_in() {
        let (mut storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let err = start_checkout(&mut storefront).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err = submit_order(&mut storefront).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }

    #[tokio::test]
    async fn test_blank_fields_block_next() {
        let (mut storefront, _toasts) = signed_in().await;
        start_checkout(&mut storefront).unwrap();

        let err = next_step(&mut storefront).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(storefront.checkout.step(), CheckoutStep::Shipping);
    }

    #[tokio::test]
    async fn test_empty_cart_cannot_submit() {
        let (mut storefront, _toasts) = signed_in().await;
        start_checkout(&mut storefront).unwrap();
        let form = filled_form(&storefront);
        update_form(&mut storefront, form).unwrap();
        next_step(&mut storefront).unwrap();
        next_step(&mut storefront).unwrap();

        let err = submit_order(&mut storefront).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::BusinessLogic);
        assert_eq!(storefront.profile.orders().len(), 2);
    }

    #[tokio::test]
    async fn test_submit_places_order_and_empties_cart() {
        let (mut storefront, mut toasts) = signed_in().await;
        let book = storefront.catalog.get_book_by_id("6").unwrap().clone();
        storefront.cart.add_to_cart(&book, 2).await;
        toasts.try_recv().unwrap();

        start_checkout(&mut storefront).unwrap();
        let form = filled_form(&storefront);
        update_form(&mut storefront, form).unwrap();
        assert_eq!(next_step(&mut storefront).unwrap().step(), CheckoutStep::Payment);
        assert_eq!(previous_step(&mut storefront).unwrap().step(), CheckoutStep::Shipping);
        next_step(&mut storefront).unwrap();
        assert_eq!(next_step(&mut storefront).unwrap().step(), CheckoutStep::Review);

        let confirmation = submit_order(&mut storefront).await.unwrap();

        // 2 × $25.49 = $50.98, tax $5.10
        assert_eq!(confirmation.order.id, "ORD-003");
        assert_eq!(confirmation.order.total.cents(), 5608);
        assert_eq!(confirmation.order.status, OrderStatus::Pending);
        assert_eq!(confirmation.email, "demo@example.com");

        assert_eq!(storefront.profile.orders()[0], confirmation.order);
        assert!(storefront.cart.cart().is_empty());
        assert!(storefront.checkout.is_complete());
        assert_eq!(toasts.try_recv().unwrap(), Toast::success("Cart cleared"));

        let err = update_form(&mut storefront, CheckoutForm::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }
}
