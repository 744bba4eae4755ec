// crates/countrydb-core/src/lib.rs

//! # countrydb-core
//!
//! A small, bundled country dataset with a pure filter engine on top.
//!
//! - [`CountryDb::load`] parses the bundled dataset once per process and
//!   reports a broken dataset as an error.
//! - [`CountryDb::filter`] / [`search::filter_countries`] keep the records
//!   whose search corpus contains the query (case-insensitive) and whose
//!   region equals the region filter (case-sensitive), in dataset order.
//! - [`state::AppState`] and [`theme`] carry the UI-facing state: theme mode,
//!   search input, load outcome.
//!
//! ```
//! use countrydb_core::prelude::*;
//!
//! let db = CountryDb::load()?;
//! let europe = db.filter(&SearchState::new("", "Europe"));
//! assert!(europe.iter().all(|c| c.region() == "Europe"));
//! # Ok::<(), CountryDbError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod config;
pub mod error;
#[cfg(feature = "json")]
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod state;
pub mod theme;
pub mod traits;

// Re-exports
pub use crate::common::DbStats;
pub use crate::config::Config;
pub use crate::error::{CountryDbError, Result};
pub use crate::model::{CountryDb, CountryRecord};
pub use crate::search::{filter_countries, SearchState};
pub use crate::theme::ThemeMode;
pub use crate::traits::CountrySearch;
