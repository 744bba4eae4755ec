//! countrydb prelude: bring common types and traits into scope for demos.

pub use crate::common::DbStats;
pub use crate::config::Config;
pub use crate::error::{CountryDbError, Result};
pub use crate::model::{CountryDb, CountryRecord};
pub use crate::search::{filter_countries, search_corpus, SearchState};
pub use crate::state::{Action, AppState, Listing, LoadState};
pub use crate::theme::{tokens, ThemeMode, ThemeTokens};
pub use crate::traits::CountrySearch;
