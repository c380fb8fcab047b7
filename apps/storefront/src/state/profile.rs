//! # Profile State
//!
//! The order history shown on the profile page. It starts with two demo
//! orders and grows as checkouts complete. Nothing here is persisted.

use chrono::NaiveDate;

use haven_core::{Catalog, Money, Order, OrderItem, OrderStatus};

#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    /// Newest first.
    orders: Vec<Order>,
}

impl ProfileState {
    /// History seeded with the demo orders.
    pub fn seeded(catalog: &Catalog) -> Self {
        let item = |book_id: &str, quantity: i64| -> Option<OrderItem> {
            let book = catalog.get_book_by_id(book_id)?;
            Some(OrderItem {
                book_id: book.id.clone(),
                title: book.title.clone(),
                cover_image: book.cover_image.clone(),
                unit_price: book.price,
                quantity,
            })
        };

        let orders = vec![
            Order {
                id: Order::format_id(1),
                date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap_or_default(),
                items: [item("1", 1), item("3", 1)].into_iter().flatten().collect(),
                total: Money::from_cents(4694),
                status: OrderStatus::Delivered,
            },
            Order {
                id: Order::format_id(2),
                date: NaiveDate::from_ymd_opt(2024, 12, 28).unwrap_or_default(),
                items: [item("6", 1)].into_iter().flatten().collect(),
                total: Money::from_cents(2549),
                status: OrderStatus::Shipped,
            },
        ];

        ProfileState { orders }
    }

    /// Orders, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn get_order(&self, id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == id)
    }

    /// Id for the next order: one past the highest `ORD-NNN` sequence.
    pub fn next_order_id(&self) -> String {
        let highest = self
            .orders
            .iter()
            .filter_map(|o| o.id.strip_prefix("ORD-")?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        Order::format_id(highest + 1)
    }

    /// Adds a placed order at the top of the history.
    pub fn record_order(&mut self, order: Order) {
        self.orders.insert(0, order);
    }
}
