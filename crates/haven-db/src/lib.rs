//! # haven-db: Local Storage for Literary Haven
//!
//! This crate provides the storefront's durable local storage. It is a
//! single SQLite key/value table accessed through sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Literary Haven Data Flow                           │
//! │                                                                         │
//! │  CartStore / AuthStore (apps/storefront)                               │
//! │       │  serde_json::to_string(&cart)                                   │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     haven-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────────┐  ┌──────────┐  │   │
//! │  │   │   Database    │    │ LocalStorageRepo     │  │Migrations│  │   │
//! │  │   │   (pool.rs)   │◄───│ get_item / set_item  │  │(embedded)│  │   │
//! │  │   │  SqlitePool   │    │ remove_item / keys   │  │ 001_*.sql│  │   │
//! │  │   └───────────────┘    └──────────────────────┘  └──────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/literary-haven/haven.db (or HAVEN_DB_PATH)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are opaque strings here. Parsing, and recovering from values that
//! do not parse, is the caller's job.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use haven_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/haven.db")).await?;
//!
//! db.local_storage().set_item("bookstore_cart", "[]").await?;
//! let raw = db.local_storage().get_item("bookstore_cart").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::local_storage::LocalStorageRepository;
