//! # Domain Types
//!
//! Core domain types used throughout Literary Haven.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │      User       │   │  SiteSettings   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  id             │   │  site_name      │       │
//! │  │  title, author  │   │  email          │   │  primary_color  │       │
//! │  │  price (Money)  │   │  name           │   │  secondary_color│       │
//! │  │  rating, genre  │   └─────────────────┘   │  logo           │       │
//! │  └─────────────────┘                         └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     TaxRate     │   │      Order      │   │   OrderStatus   │       │
//! │  │  bps (u32)      │   │  id, date       │   │  Pending        │       │
//! │  │  1000 = 10%     │   │  items, total   │   │  Shipped        │       │
//! │  └─────────────────┘   └─────────────────┘   │  Delivered      │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Books are immutable reference data. Users and orders are created by the
//! storefront at runtime. Site settings are a single mutable record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// 1 basis point = 0.01%, so 1000 bps = 10% (the storefront's default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Creates a tax rate from a percentage (for configuration input).
    pub fn from_percentage(pct: f64) -> Self {
        TaxRate((pct * 100.0).round() as u32)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }
}

impl Default for TaxRate {
    /// The storefront charges a flat 10% tax.
    fn default() -> Self {
        TaxRate::from_bps(1000)
    }
}

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Unique identifier.
    pub id: String,

    pub title: String,

    pub author: String,

    /// Cover image URL.
    pub cover_image: String,

    /// Price, always positive.
    pub price: Money,

    /// Average reader rating, 0.0 to 5.0.
    pub rating: f32,

    /// Free-text genre ("Fiction", "Science Fiction", ...).
    pub genre: String,

    pub description: String,

    #[ts(as = "String")]
    pub publication_date: NaiveDate,

    /// Page count.
    pub pages: u32,

    pub in_stock: bool,
}

impl Book {
    /// Price of `quantity` copies of this book.
    #[inline]
    pub fn line_total(&self, quantity: i64) -> Money {
        self.price.multiply_quantity(quantity)
    }
}

// =============================================================================
// User
// =============================================================================

/// The signed-in shopper.
///
/// There is at most one of these at a time: the session is a singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl User {
    /// Checks whether this user may open the admin panel.
    pub fn is_admin(&self, admin_email: &str) -> bool {
        self.email == admin_email
    }
}

// =============================================================================
// Site Settings
// =============================================================================

/// Site branding, editable from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub site_name: String,
    pub primary_color: String,
    pub secondary_color: String,
    /// Logo image path or URL.
    pub logo: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        SiteSettings {
            site_name: "LiteraryHaven".to_string(),
            primary_color: "#3B82F6".to_string(),
            secondary_color: "#1D4ED8".to_string(),
            logo: "/logo.svg".to_string(),
        }
    }
}

impl SiteSettings {
    /// Merges the fields present in `patch` into this record.
    ///
    /// Absent fields keep their current value. No validation is applied.
    pub fn merge(&mut self, patch: SiteSettingsPatch) {
        if let Some(site_name) = patch.site_name {
            self.site_name = site_name;
        }
        if let Some(primary_color) = patch.primary_color {
            self.primary_color = primary_color;
        }
        if let Some(secondary_color) = patch.secondary_color {
            self.secondary_color = secondary_color;
        }
        if let Some(logo) = patch.logo {
            self.logo = logo;
        }
    }
}

/// A partial update to [`SiteSettings`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettingsPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

// =============================================================================
// Orders
// =============================================================================

/// Fulfilment status of a placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Shipped,
    Delivered,
}

/// A line of a placed order. Uses the snapshot pattern: title and price are
/// frozen at the moment the order is placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub book_id: String,
    pub title: String,
    pub cover_image: String,
    pub unit_price: Money,
    pub quantity: i64,
}

impl OrderItem {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

/// A placed order as shown in the profile's order history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Human-readable id, `ORD-001` style.
    pub id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub items: Vec<OrderItem>,
    pub total: Money,
    pub status: OrderStatus,
}

impl Order {
    /// Formats the sequential order id (`ORD-001`, `ORD-002`, ...).
    pub fn format_id(sequence: u32) -> String {
        format!("ORD-{:03}", sequence)
    }

    /// Total number of copies across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_percentage() {
        let rate = TaxRate::from_percentage(10.0);
        assert_eq!(rate.bps(), 1000);
        assert!((rate.percentage() - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_tax_rate_default_is_ten_percent() {
        assert_eq!(TaxRate::default().bps(), 1000);
    }

    #[test]
    fn test_site_settings_merge_only_touches_present_fields() {
        let mut settings = SiteSettings::default();
        settings.merge(SiteSettingsPatch {
            site_name: Some("Paper Lantern".to_string()),
            logo: Some("/lantern.png".to_string()),
            ..Default::default()
        });

        assert_eq!(settings.site_name, "Paper Lantern");
        assert_eq!(settings.logo, "/lantern.png");
        assert_eq!(settings.primary_color, "#3B82F6");
        assert_eq!(settings.secondary_color, "#1D4ED8");
    }

    #[test]
    fn test_site_settings_patch_deserializes_partial_json() {
        let patch: SiteSettingsPatch =
            serde_json::from_str(r##"{"primaryColor":"#000000"}"##).unwrap();
        assert_eq!(patch.primary_color.as_deref(), Some("#000000"));
        assert!(patch.site_name.is_none());
    }

    #[test]
    fn test_user_is_admin() {
        let user = User {
            id: "7".to_string(),
            email: "admin@example.com".to_string(),
            name: "Admin".to_string(),
        };
        assert!(user.is_admin("admin@example.com"));
        assert!(!user.is_admin("demo@example.com"));
    }

    #[test]
    fn test_order_id_format() {
        assert_eq!(Order::format_id(1), "ORD-001");
        assert_eq!(Order::format_id(42), "ORD-042");
        assert_eq!(Order::format_id(1234), "ORD-1234");
    }

    #[test]
    fn test_order_status_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Delivered).unwrap(),
            "\"delivered\""
        );
    }
}
