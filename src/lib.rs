//! Console country manager backed by SQLite.
//!
//! # Examples
//!
//! Scripted session against the in-memory store:
//! ```
//! use std::io::Cursor;
//!
//! use countrymgr::{
//!     controller::Controller,
//!     core::store::MemoryCountryStore,
//!     persist::CountryStore,
//!     types::CountryCode,
//! };
//!
//! let input = Cursor::new("add\nCHD\nChad\n6.5\n\nquit\n");
//! let mut controller = Controller::new(MemoryCountryStore::new(), input, Vec::new());
//! controller.run().expect("session");
//!
//! let chad = controller
//!     .store()
//!     .find_by_code(&CountryCode::parse("CHD").unwrap())
//!     .unwrap()
//!     .expect("stored");
//! assert_eq!(chad.internet_users, Some(6.5));
//! assert_eq!(chad.adult_literacy_rate, None);
//! ```
//!
//! Against SQLite:
//! ```no_run
//! use std::io;
//!
//! use countrymgr::{controller::Controller, persist::sqlite::SqliteCountryStore};
//!
//! let store = SqliteCountryStore::open("countrymgr.db").expect("open sqlite");
//! let stdin = io::stdin();
//! let mut controller = Controller::new(store, stdin.lock(), io::stdout());
//! controller.run().expect("session");
//! ```

/// Max/min scan over the percentage fields.
pub mod analysis;
/// Startup configuration.
pub mod config;
/// Interactive menu loop and operations.
pub mod controller;
/// In-memory record store.
pub mod core;
/// Country record and builder.
pub mod country;
/// Menu commands and table.
pub mod menu;
/// Mutation op model and journal wrapper types.
pub mod op;
/// Store contract and SQLite implementation.
pub mod persist;
/// Console formatting.
pub mod render;
/// Shared primitive types.
pub mod types;
