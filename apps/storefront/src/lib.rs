//! # Literary Haven Storefront
//!
//! Application state for the Literary Haven bookstore: the stores behind
//! every page, the toast channel, simulated latency and configuration,
//! all reached through [`Storefront::dispatch`].
//!
//! ## Module Organization
//! ```text
//! haven_storefront/
//! ├── lib.rs          ◄─── You are here (exports, tracing setup)
//! ├── storefront.rs   ◄─── Storefront: owns every store, bootstrap
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Persisted cart
//! │   ├── auth.rs     ◄─── Persisted mock session
//! │   ├── admin.rs    ◄─── Site settings, dashboard
//! │   ├── profile.rs  ◄─── Order history
//! │   ├── recommendations.rs
//! │   └── config.rs   ◄─── StorefrontConfig (TOML + env)
//! ├── commands/       ◄─── Command enum and handlers per page
//! ├── notify.rs       ◄─── Toast channel
//! ├── latency.rs      ◄─── Simulated network delays
//! └── error.rs        ◄─── AppError for the UI
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use haven_storefront::{init_tracing, Command, Storefront, StorefrontConfig};
//!
//! # async fn demo() -> Result<(), haven_storefront::AppError> {
//! init_tracing();
//!
//! let config = StorefrontConfig::load_or_default(None);
//! let (mut storefront, mut toasts) = Storefront::bootstrap(config).await?;
//!
//! storefront
//!     .dispatch(Command::AddToCart { book_id: "3".into(), quantity: Some(1) })
//!     .await?;
//!
//! while let Ok(toast) = toasts.try_recv() {
//!     println!("{}", toast.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod error;
pub mod latency;
pub mod notify;
pub mod state;
pub mod storefront;

use tracing_subscriber::EnvFilter;

pub use commands::{Command, CommandOutput};
pub use error::{AppError, AppResult, ErrorCode};
pub use latency::{LatencyKind, SimulatedLatency};
pub use notify::{Notifier, Toast, ToastKind, ToastReceiver};
pub use state::StorefrontConfig;
pub use storefront::Storefront;

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=haven=trace` - Show trace for haven crates only
/// - Default: `info,haven=debug,sqlx=warn`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,haven=debug,sqlx=warn"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_twice() {
        init_tracing();
        init_tracing();
    }
}
