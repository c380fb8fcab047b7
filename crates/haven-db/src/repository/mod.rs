//! # Repository Module
//!
//! Database repository implementations for Literary Haven.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CartStore::persist                                                    │
//! │       │                                                                 │
//! │       │  db.local_storage().set_item("bookstore_cart", json)           │
//! │       ▼                                                                 │
//! │  LocalStorageRepository                                                │
//! │  ├── get_item(&self, key)                                              │
//! │  ├── set_item(&self, key, value)                                       │
//! │  ├── remove_item(&self, key)                                           │
//! │  └── keys(&self)                                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite: local_storage(key, value, updated_at)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`local_storage::LocalStorageRepository`] - Key/value document storage

pub mod local_storage;
