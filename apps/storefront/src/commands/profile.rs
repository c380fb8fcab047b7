//! # Profile Commands
//!
//! The signed-in user's order history.

use haven_core::Order;

use crate::error::{AppError, AppResult};
use crate::storefront::Storefront;

/// Orders, newest first.
pub fn get_orders(storefront: &Storefront) -> AppResult<Vec<Order>> {
    storefront.auth.require_user()?;
    Ok(storefront.profile.orders().to_vec())
}

pub fn get_order(storefront: &Storefront, order_id: &str) -> AppResult<Order> {
    storefront.auth.require_user()?;
    storefront
        .profile
        .get_order(order_id)
        .cloned()
        .ok_or_else(|| AppError::not_found("Order", order_id))
}
