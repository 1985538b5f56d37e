//! # Worktrack
//!
//! A REST backend for tracking who works on which project and when,
//! usable both as a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! worktrack = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use chrono::Duration;
//! use worktrack::auth::TokenSigner;
//! use worktrack::server::{AppState, create_router};
//! use worktrack::store::{AdminSeed, SqliteStore, Store, seed};
//!
//! let store = SqliteStore::new("./data/worktrack.db").unwrap();
//! store.initialize().unwrap();
//! seed(&store, &AdminSeed { mail: "admin@mydb".into(), password: "change-me".into() }).unwrap();
//!
//! let state = Arc::new(AppState::new(
//!     Arc::new(store),
//!     TokenSigner::random(Duration::hours(8)),
//! ));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `worktrack` binary. Disable with `default-features = false`.

pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
