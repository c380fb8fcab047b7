//! # Config Commands
//!
//! Display settings the UI needs at startup.

use serde::Serialize;
use ts_rs::TS;

use crate::storefront::Storefront;

/// The read-only slice of configuration the UI sees.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub currency_symbol: String,
    /// Tax rate as a percentage, e.g. `10.0`.
    pub tax_rate: f64,
    /// Whether the session user may open the admin panel.
    pub is_admin: bool,
}

pub fn get_config(storefront: &Storefront) -> ConfigResponse {
    ConfigResponse {
        currency_symbol: storefront.config.currency_symbol.clone(),
        tax_rate: storefront.config.tax_rate().percentage(),
        is_admin: storefront.admin.is_admin(storefront.auth.user()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StorefrontConfig;

    #[tokio::test]
    async fn test_get_config() {
        let (storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        let config = get_config(&storefront);

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.tax_rate, 10.0);
        assert!(!config.is_admin);
    }
}
