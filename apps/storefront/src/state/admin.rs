//! # Admin Store
//!
//! Site branding and the admin dashboard. Settings live in process memory
//! only and reset on restart.
//!
//! The store itself does no access control: the command layer checks
//! [`AdminStore::is_admin`] before calling anything that mutates.

use serde::Serialize;
use tracing::info;
use ts_rs::TS;

use haven_core::{Catalog, Money, Order, SiteSettings, SiteSettingsPatch, User};

/// Figures shown on the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_books: usize,
    pub in_stock_books: usize,
    pub average_rating: f32,
    pub order_count: usize,
    pub revenue: Money,
}

#[derive(Debug, Clone)]
pub struct AdminStore {
    admin_email: String,
    settings: SiteSettings,
}

impl AdminStore {
    pub fn new(admin_email: impl Into<String>) -> Self {
        AdminStore {
            admin_email: admin_email.into(),
            settings: SiteSettings::default(),
        }
    }

    /// True iff someone is signed in with the admin email.
    pub fn is_admin(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| u.is_admin(&self.admin_email))
    }

    pub fn site_settings(&self) -> &SiteSettings {
        &self.settings
    }

    /// Merges the present fields of `patch` into the settings.
    pub fn update_site_settings(&mut self, patch: SiteSettingsPatch) -> &SiteSettings {
        self.settings.merge(patch);
        info!(site_name = %self.settings.site_name, "Site settings updated");
        &self.settings
    }

    /// Computes the dashboard from the catalog and the order history.
    pub fn dashboard(&self, catalog: &Catalog, orders: &[Order]) -> DashboardStats {
        let books = catalog.stats();

        DashboardStats {
            total_books: books.total_books,
            in_stock_books: books.in_stock,
            average_rating: books.average_rating,
            order_count: orders.len(),
            revenue: orders.iter().map(|o| o.total).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use haven_core::OrderStatus;

    fn user(email: &str) -> User {
        User {
            id: "9".to_string(),
            email: email.to_string(),
            name: "Someone".to_string(),
        }
    }

    #[test]
    fn test_is_admin() {
        let admin = AdminStore::new("admin@example.com");

        assert!(admin.is_admin(Some(&user("admin@example.com"))));
        assert!(!admin.is_admin(Some(&user("demo@example.com"))));
        assert!(!admin.is_admin(None));
    }

    #[test]
    fn test_update_merges_fields() {
        let mut admin = AdminStore::new("admin@example.com");

        let settings = admin.update_site_settings(SiteSettingsPatch {
            primary_color: Some("#111111".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.primary_color, "#111111");
        assert_eq!(settings.site_name, "LiteraryHaven");
    }

    #[test]
    fn test_dashboard() {
        let admin = AdminStore::new("admin@example.com");
        let order = |cents| Order {
            id: "ORD-001".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            items: Vec::new(),
            total: Money::from_cents(cents),
            status: OrderStatus::Delivered,
        };

        let stats = admin.dashboard(&Catalog::seeded(), &[order(4694), order(2549)]);

        assert_eq!(stats.total_books, 8);
        assert_eq!(stats.in_stock_books, 8);
        assert_eq!(stats.order_count, 2);
        assert_eq!(stats.revenue.cents(), 7243);
    }
}
