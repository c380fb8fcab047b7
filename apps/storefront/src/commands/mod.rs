//! # Commands Module
//!
//! Every UI event enters the storefront here.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs              ◄─── You are here (Command, dispatch)
//! ├── catalog.rs          ◄─── Browsing, search, book detail
//! ├── cart.rs             ◄─── Cart manipulation
//! ├── auth.rs             ◄─── Login, signup, logout, profile edits
//! ├── admin.rs            ◄─── Site settings, admin listing, dashboard
//! ├── checkout.rs         ◄─── The checkout wizard
//! ├── profile.rs          ◄─── Order history
//! ├── recommendations.rs  ◄─── Genre picks and generation
//! └── config.rs           ◄─── Display configuration
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Front end                                                              │
//! │  { "command": "add_to_cart", "args": { "bookId": "3", "quantity": 2 } } │
//! │         │                                                               │
//! │         │ serde_json::from_str::<Command>                               │
//! │         ▼                                                               │
//! │  Storefront::dispatch(command)                                          │
//! │         │                                                               │
//! │         ├──► commands::cart::add_to_cart(&mut storefront, "3", 2)       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<CommandOutput, AppError>  ──► JSON back to the front end        │
//! │                                                                         │
//! │  Toasts raised along the way arrive separately on the ToastReceiver.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod profile;
pub mod recommendations;

use serde::{Deserialize, Serialize};
use tracing::debug;
use ts_rs::TS;

use haven_core::{Book, Checkout, CheckoutForm, Order, SiteSettings, SiteSettingsPatch, User};

use crate::error::AppResult;
use crate::state::{AuthStatus, DashboardStats};
use crate::storefront::Storefront;

pub use admin::AdminBooksResponse;
pub use cart::CartResponse;
pub use catalog::{BookDetailResponse, HomeResponse};
pub use checkout::OrderConfirmation;
pub use config::ConfigResponse;
pub use recommendations::RecommendationsResponse;

/// A UI event.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", content = "args", rename_all = "snake_case")]
pub enum Command {
    GetConfig,

    // Catalog
    ListBooks,
    #[serde(rename_all = "camelCase")]
    GetBook { book_id: String },
    SearchBooks { query: String },
    GetHome,
    ListGenres,

    // Cart
    GetCart,
    #[serde(rename_all = "camelCase")]
    AddToCart { book_id: String, quantity: Option<i64> },
    #[serde(rename_all = "camelCase")]
    UpdateQuantity { book_id: String, quantity: i64 },
    #[serde(rename_all = "camelCase")]
    RemoveFromCart { book_id: String },
    ClearCart,

    // Session
    GetSession,
    Login { email: String, password: String },
    Signup { name: String, email: String, password: String },
    Logout,
    UpdateProfile { name: String, email: String },

    // Admin
    GetSiteSettings,
    UpdateSiteSettings(SiteSettingsPatch),
    AdminListBooks { query: String },
    GetDashboard,

    // Checkout
    StartCheckout,
    UpdateCheckoutForm(CheckoutForm),
    CheckoutNext,
    CheckoutBack,
    SubmitOrder,

    // Profile
    GetOrders,
    #[serde(rename_all = "camelCase")]
    GetOrder { order_id: String },

    // Recommendations
    GetRecommendations,
    ToggleGenre { genre: String },
    GenerateRecommendations,
}

impl Command {
    /// The wire name, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::GetConfig => "get_config",
            Command::ListBooks => "list_books",
            Command::GetBook { .. } => "get_book",
            Command::SearchBooks { .. } => "search_books",
            Command::GetHome => "get_home",
            Command::ListGenres => "list_genres",
            Command::GetCart => "get_cart",
            Command::AddToCart { .. } => "add_to_cart",
            Command::UpdateQuantity { .. } => "update_quantity",
            Command::RemoveFromCart { .. } => "remove_from_cart",
            Command::ClearCart => "clear_cart",
            Command::GetSession => "get_session",
            Command::Login { .. } => "login",
            Command::Signup { .. } => "signup",
            Command::Logout => "logout",
            Command::UpdateProfile { .. } => "update_profile",
            Command::GetSiteSettings => "get_site_settings",
            Command::UpdateSiteSettings(_) => "update_site_settings",
            Command::AdminListBooks { .. } => "admin_list_books",
            Command::GetDashboard => "get_dashboard",
            Command::StartCheckout => "start_checkout",
            Command::UpdateCheckoutForm(_) => "update_checkout_form",
            Command::CheckoutNext => "checkout_next",
            Command::CheckoutBack => "checkout_back",
            Command::SubmitOrder => "submit_order",
            Command::GetOrders => "get_orders",
            Command::GetOrder { .. } => "get_order",
            Command::GetRecommendations => "get_recommendations",
            Command::ToggleGenre { .. } => "toggle_genre",
            Command::GenerateRecommendations => "generate_recommendations",
        }
    }
}

/// What a command hands back to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum CommandOutput {
    Config(ConfigResponse),
    Books(Vec<Book>),
    BookDetail(BookDetailResponse),
    Home(HomeResponse),
    Genres(Vec<String>),
    Cart(CartResponse),
    Session(AuthStatus),
    User(User),
    SiteSettings(SiteSettings),
    AdminBooks(AdminBooksResponse),
    Dashboard(DashboardStats),
    Checkout(Checkout),
    OrderPlaced(OrderConfirmation),
    Orders(Vec<Order>),
    Order(Order),
    Recommendations(RecommendationsResponse),
}

impl Storefront {
    /// Runs one command against the storefront.
    pub async fn dispatch(&mut self, command: Command) -> AppResult<CommandOutput> {
        debug!(command = command.name(), "dispatch");

        let output = match command {
            Command::GetConfig => CommandOutput::Config(config::get_config(self)),

            Command::ListBooks => CommandOutput::Books(catalog::list_books(self)),
            Command::GetBook { book_id } => {
                CommandOutput::BookDetail(catalog::get_book(self, &book_id)?)
            }
            Command::SearchBooks { query } => {
                CommandOutput::Books(catalog::search_books(self, &query))
            }
            Command::GetHome => CommandOutput::Home(catalog::get_home(self)),
            Command::ListGenres => CommandOutput::Genres(catalog::list_genres(self)),

            Command::GetCart => CommandOutput::Cart(cart::get_cart(self)),
            Command::AddToCart { book_id, quantity } => {
                CommandOutput::Cart(cart::add_to_cart(self, &book_id, quantity.unwrap_or(1)).await?)
            }
            Command::UpdateQuantity { book_id, quantity } => {
                CommandOutput::Cart(cart::update_quantity(self, &book_id, quantity).await)
            }
            Command::RemoveFromCart { book_id } => {
                CommandOutput::Cart(cart::remove_from_cart(self, &book_id).await)
            }
            Command::ClearCart => CommandOutput::Cart(cart::clear_cart(self).await),

            Command::GetSession => CommandOutput::Session(auth::get_session(self)),
            Command::Login { email, password } => {
                CommandOutput::User(auth::login(self, &email, &password).await?)
            }
            Command::Signup {
                name,
                email,
                password,
            } => CommandOutput::User(auth::signup(self, &name, &email, &password).await),
            Command::Logout => CommandOutput::Session(auth::logout(self).await),
            Command::UpdateProfile { name, email } => {
                CommandOutput::User(auth::update_profile(self, &name, &email).await?)
            }

            Command::GetSiteSettings => {
                CommandOutput::SiteSettings(admin::get_site_settings(self))
            }
            Command::UpdateSiteSettings(patch) => {
                CommandOutput::SiteSettings(admin::update_site_settings(self, patch)?)
            }
            Command::AdminListBooks { query } => {
                CommandOutput::AdminBooks(admin::list_books(self, &query)?)
            }
            Command::GetDashboard => CommandOutput::Dashboard(admin::get_dashboard(self)?),

            Command::StartCheckout => CommandOutput::Checkout(checkout::start_checkout(self)?),
            Command::UpdateCheckoutForm(form) => {
                CommandOutput::Checkout(checkout::update_form(self, form)?)
            }
            Command::CheckoutNext => CommandOutput::Checkout(checkout::next_step(self)?),
            Command::CheckoutBack => CommandOutput::Checkout(checkout::previous_step(self)?),
            Command::SubmitOrder => CommandOutput::OrderPlaced(checkout::submit_order(self).await?),

            Command::GetOrders => CommandOutput::Orders(profile::get_orders(self)?),
            Command::GetOrder { order_id } => {
                CommandOutput::Order(profile::get_order(self, &order_id)?)
            }

            Command::GetRecommendations => {
                CommandOutput::Recommendations(recommendations::get_recommendations(self))
            }
            Command::ToggleGenre { genre } => {
                CommandOutput::Recommendations(recommendations::toggle_genre(self, &genre))
            }
            Command::GenerateRecommendations => {
                CommandOutput::Recommendations(recommendations::generate(self).await)
            }
        };

        Ok(output)
    }
}
