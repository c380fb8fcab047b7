//! # State Module
//!
//! One focused state type per concern instead of a single global context.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │                          Storefront (owner)                             │
//! │                               │                                         │
//! │     ┌──────────────┬──────────┼──────────┬───────────────┐              │
//! │     ▼              ▼          ▼          ▼               ▼              │
//! │ ┌──────────┐ ┌──────────┐ ┌────────┐ ┌─────────┐ ┌────────────────┐     │
//! │ │CartStore │ │AuthStore │ │ Admin  │ │ Profile │ │Recommendations │     │
//! │ │          │ │          │ │ Store  │ │  State  │ │     State      │     │
//! │ │ persisted│ │ persisted│ │ memory │ │ memory  │ │    memory      │     │
//! │ └──────────┘ └──────────┘ └────────┘ └─────────┘ └────────────────┘     │
//! │                                                                         │
//! │  StorefrontConfig: read-only after startup                              │
//! │                                                                         │
//! │  Every store is mutated through `&mut self`; the storefront has a       │
//! │  single logical writer, so no locks are needed.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod admin;
mod auth;
mod cart;
mod config;
mod profile;
mod recommendations;

pub use admin::{AdminStore, DashboardStats};
pub use auth::{AuthError, AuthStatus, AuthStore};
pub use cart::CartStore;
pub use config::{ConfigError, ConfigResult, StorefrontConfig};
pub use profile::ProfileState;
pub use recommendations::{RecommendationState, DEFAULT_PREFERENCES, PREFERENCE_GENRES};
