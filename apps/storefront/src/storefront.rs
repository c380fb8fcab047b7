//! # Storefront
//!
//! Owns every store and the shared services they use. Built once at
//! startup; the UI then talks to it through [`Storefront::dispatch`]
//! (see [`crate::commands`]).
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Resolve database path (config / HAVEN_DB_PATH / platform data dir) │
//! │  2. Open local storage, run migrations                                 │
//! │  3. Create the toast channel                                           │
//! │  4. Restore the cart (bookstore_cart) and session (bookstore_user)     │
//! │  5. Seed catalog, order history and first recommendations             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use haven_core::{Catalog, Checkout};
use haven_db::{Database, DbConfig};

use crate::error::AppResult;
use crate::latency::SimulatedLatency;
use crate::notify::{Notifier, ToastReceiver};
use crate::state::{
    AdminStore, AuthStore, CartStore, ProfileState, RecommendationState, StorefrontConfig,
};

/// The storefront application state.
#[derive(Debug)]
pub struct Storefront {
    pub(crate) config: StorefrontConfig,
    pub(crate) db: Database,
    pub(crate) catalog: Catalog,
    pub(crate) latency: SimulatedLatency,
    pub(crate) rng: StdRng,
    pub(crate) cart: CartStore,
    pub(crate) auth: AuthStore,
    pub(crate) admin: AdminStore,
    pub(crate) checkout: Checkout,
    pub(crate) profile: ProfileState,
    pub(crate) recommendations: RecommendationState,
}

impl Storefront {
    /// Opens local storage and restores saved state.
    ///
    /// Returns the storefront and the receiver its toasts arrive on.
    pub async fn bootstrap(config: StorefrontConfig) -> AppResult<(Self, ToastReceiver)> {
        let db_path = config.resolve_database_path()?;
        info!(?db_path, "Database path determined");

        let db_config = DbConfig::new(db_path);
        let db_config = if db_config.is_in_memory() {
            DbConfig::in_memory()
        } else {
            db_config
        };
        let db = Database::new(db_config).await?;

        Ok(Self::with_database(config, db).await)
    }

    /// Builds the storefront over an already opened database.
    pub async fn with_database(config: StorefrontConfig, db: Database) -> (Self, ToastReceiver) {
        let (notifier, toasts) = Notifier::channel();
        let latency = config.latency();

        let mut rng = match config.recommendation_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let catalog = Catalog::seeded();
        let cart = CartStore::load(db.local_storage(), notifier.clone()).await;
        let auth = AuthStore::load(db.local_storage(), notifier, latency).await;

        let mut recommendations = RecommendationState::new(&catalog, &mut rng);
        if auth.is_authenticated() {
            recommendations.apply_default_preferences();
        }

        let storefront = Storefront {
            admin: AdminStore::new(config.admin_email.clone()),
            checkout: Checkout::new(auth.user()),
            profile: ProfileState::seeded(&catalog),
            config,
            db,
            catalog,
            latency,
            rng,
            cart,
            auth,
            recommendations,
        };

        info!(
            books = storefront.catalog.len(),
            signed_in = storefront.auth.is_authenticated(),
            "Storefront ready"
        );

        (storefront, toasts)
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn auth(&self) -> &AuthStore {
        &self.auth
    }

    pub fn admin(&self) -> &AdminStore {
        &self.admin
    }

    pub fn checkout(&self) -> &Checkout {
        &self.checkout
    }

    pub fn profile(&self) -> &ProfileState {
        &self.profile
    }

    pub fn recommendations(&self) -> &RecommendationState {
        &self.recommendations
    }

    /// Closes local storage.
    pub async fn shutdown(&self) {
        info!("Shutting down storefront");
        self.db.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use haven_core::{CART_STORAGE_KEY, SESSION_STORAGE_KEY};

    #[tokio::test]
    async fn test_bootstrap_in_memory() {
        let (storefront, _toasts) = Storefront::bootstrap(StorefrontConfig::for_tests())
            .await
            .unwrap();

        assert_eq!(storefront.catalog().len(), 8);
        assert!(storefront.cart().cart().is_empty());
        assert!(!storefront.auth().is_authenticated());
        assert_eq!(storefront.profile().orders().len(), 2);
        assert_eq!(storefront.recommendations().results().len(), 4);
    }

    #[tokio::test]
    async fn test_restores_saved_state() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let book = Catalog::seeded().get_book_by_id("2").unwrap().clone();
        let raw = format!(
            r#"[{{"book":{},"quantity":2}}]"#,
            serde_json::to_string(&book).unwrap()
        );
        db.local_storage().set_item(CART_STORAGE_KEY, &raw).await.unwrap();
        db.local_storage()
            .set_item(
                SESSION_STORAGE_KEY,
                r#"{"id":"1","email":"demo@example.com","name":"Demo User"}"#,
            )
            .await
            .unwrap();

        let (storefront, _toasts) =
            Storefront::with_database(StorefrontConfig::for_tests(), db).await;

        assert_eq!(storefront.cart().total_items(), 2);
        assert_eq!(storefront.auth().user().unwrap().name, "Demo User");
        assert_eq!(storefront.checkout().form().email, "demo@example.com");
        assert_eq!(storefront.recommendations().preferences(), ["Fiction", "Thriller"]);
    }

    #[tokio::test]
    async fn test_cart_and_session_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            database_path: Some(dir.path().join("haven.db")),
            ..StorefrontConfig::for_tests()
        };

        let (mut storefront, _toasts) = Storefront::bootstrap(config.clone()).await.unwrap();
        let book = storefront.catalog.get_book_by_id("5").unwrap().clone();
        storefront
            .auth
            .login("demo@example.com", "password")
            .await
            .unwrap();
        storefront.cart.add_to_cart(&book, 2).await;
        storefront.shutdown().await;
        drop(storefront);

        let (storefront, _toasts) = Storefront::bootstrap(config).await.unwrap();

        assert_eq!(storefront.cart().total_items(), 2);
        assert_eq!(storefront.cart().entries()[0].book, book);
        assert_eq!(storefront.auth().user().unwrap().name, "Demo User");
        assert_eq!(storefront.checkout().form().email, "demo@example.com");
        storefront.shutdown().await;
    }

    #[tokio::test]
    async fn test_same_seed_same_first_recommendations() {
        let (a, _) = Storefront::bootstrap(StorefrontConfig::for_tests()).await.unwrap();
        let (b, _) = Storefront::bootstrap(StorefrontConfig::for_tests()).await.unwrap();

        assert_eq!(a.recommendations().results(), b.recommendations().results());
    }
}
