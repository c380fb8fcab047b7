//! # Admin Commands
//!
//! ## Access Control
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get_site_settings      anyone (the header shows the site name)         │
//! │  update_site_settings   admin only ─┐                                   │
//! │  admin_list_books       admin only ─┼─► require_admin()                 │
//! │  get_dashboard          admin only ─┘     │                             │
//! │                                           ├─ admin email? ──► proceed   │
//! │                                           └─ otherwise ─────► FORBIDDEN │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected command changes nothing.

use serde::Serialize;
use tracing::warn;
use ts_rs::TS;

use haven_core::{Book, CatalogStats, SiteSettings, SiteSettingsPatch};

use crate::error::{AppError, AppResult};
use crate::state::DashboardStats;
use crate::storefront::Storefront;

/// The admin book table and the counters above it.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct AdminBooksResponse {
    pub books: Vec<Book>,
    pub stats: CatalogStats,
}

fn require_admin(storefront: &Storefront) -> AppResult<()> {
    if storefront.admin.is_admin(storefront.auth.user()) {
        Ok(())
    } else {
        warn!(
            user = storefront.auth.user().map(|u| u.email.as_str()),
            "Admin command rejected"
        );
        Err(AppError::forbidden())
    }
}

pub fn get_site_settings(storefront: &Storefront) -> SiteSettings {
    storefront.admin.site_settings().clone()
}

/// Merges `patch` into the site settings.
///
/// ## Errors
/// `FORBIDDEN` unless the admin is signed in.
pub fn update_site_settings(
    storefront: &mut Storefront,
    patch: SiteSettingsPatch,
) -> AppResult<SiteSettings> {
    require_admin(storefront)?;
    Ok(storefront.admin.update_site_settings(patch).clone())
}

/// Filters the catalog by title or author for the admin table.
pub fn list_books(storefront: &Storefront, query: &str) -> AppResult<AdminBooksResponse> {
    require_admin(storefront)?;

    Ok(AdminBooksResponse {
        books: storefront
            .catalog
            .admin_search(query)
            .into_iter()
            .cloned()
            .collect(),
        stats: storefront.catalog.stats(),
    })
}

pub fn get_dashboard(storefront: &Storefront) -> AppResult<DashboardStats> {
    require_admin(storefront)?;
    Ok(storefront
        .admin
        .dashboard(&storefront.catalog, storefront.profile.orders()))
}
