// crates/countrydb-core/src/state.rs

//! Application state store.
//!
//! [`AppState`] is the single source of truth for what the screens show:
//! the theme mode, the search input and whether the dataset loaded. It is
//! created once at startup and only changes through [`AppState::dispatch`].
//! Derived values ([`AppState::listing`], [`AppState::theme_tokens`]) are
//! recomputed from the current state on every call.
//!
//! ```
//! use countrydb_core::config::Config;
//! use countrydb_core::state::{Action, AppState, Listing};
//! use countrydb_core::CountryDb;
//!
//! let db = CountryDb::from_json_str(r#"[{"name":"France","region":"Europe"}]"#).unwrap();
//! let mut state = AppState::new(&Config::default());
//! assert!(matches!(state.listing(), Listing::Loading));
//!
//! state.dispatch(Action::DatasetLoaded(db));
//! state.dispatch(Action::SetQuery("fra".into()));
//! assert_eq!(state.listing().countries().len(), 1);
//!
//! state.dispatch(Action::SetQuery("zz".into()));
//! assert!(matches!(state.listing(), Listing::Empty { total: 1 }));
//! ```

use crate::config::Config;
use crate::error::Result;
use crate::model::{CountryDb, CountryRecord};
use crate::search::SearchState;
use crate::theme::{self, ThemeMode, ThemeTokens};
use serde::Serialize;

/// Where the dataset is in its one-shot load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(CountryDb),
    /// Load failed; holds the message to show instead of the list.
    Failed(String),
}

/// State transitions. Nothing else mutates [`AppState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleTheme,
    SetTheme(ThemeMode),
    SetQuery(String),
    SetRegion(String),
    /// Clears both the query and the region filter.
    ClearFilters,
    /// Shows or hides the region filter panel.
    ToggleFilters,
    DatasetLoaded(CountryDb),
    DatasetFailed(String),
}

/// What the country list should display right now.
///
/// Serializes with a `status` tag (`"loading"`, `"failed"`, `"empty"`,
/// `"results"`) for front ends that consume JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Listing<'a> {
    Loading,
    Failed { message: &'a str },
    /// Dataset loaded but nothing matches the current search.
    Empty { total: usize },
    Results {
        countries: Vec<&'a CountryRecord>,
        total: usize,
    },
}

impl<'a> Listing<'a> {
    /// Matching records; empty for every state except `Results`.
    pub fn countries(&self) -> &[&'a CountryRecord] {
        match self {
            Listing::Results { countries, .. } => countries,
            _ => &[],
        }
    }

    /// "{shown} of {total} countries found", or `None` while loading or failed.
    pub fn summary(&self) -> Option<String> {
        match self {
            Listing::Results { countries, total } => {
                Some(format!("{} of {} countries found", countries.len(), total))
            }
            Listing::Empty { total } => Some(format!("0 of {total} countries found")),
            Listing::Loading | Listing::Failed { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub theme: ThemeMode,
    pub search: SearchState,
    pub load: LoadState,
    pub filters_visible: bool,
}

impl AppState {
    /// Fresh state in [`LoadState::Loading`] with the configured theme.
    pub fn new(config: &Config) -> Self {
        Self {
            theme: config.theme,
            search: SearchState::default(),
            load: LoadState::Loading,
            filters_visible: false,
        }
    }

    /// State after a finished load attempt. An error becomes
    /// [`LoadState::Failed`] rather than an empty list.
    pub fn from_load_result(result: Result<CountryDb>, config: &Config) -> Self {
        let mut state = Self::new(config);
        let action = match result {
            Ok(db) => Action::DatasetLoaded(db),
            Err(e) => Action::DatasetFailed(e.to_string()),
        };
        state.dispatch(action);
        state
    }

    /// Loads the dataset selected by `config` and builds the initial state.
    #[cfg(feature = "json")]
    pub fn boot(config: &Config) -> Self {
        Self::from_load_result(CountryDb::load_with(config), config)
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(action = action_name(&action), "dispatch");
        match action {
            Action::ToggleTheme => self.theme = self.theme.toggle(),
            Action::SetTheme(mode) => self.theme = mode,
            Action::SetQuery(q) => self.search.query = q,
            Action::SetRegion(r) => self.search.region = r,
            Action::ClearFilters => self.search = SearchState::default(),
            Action::ToggleFilters => self.filters_visible = !self.filters_visible,
            Action::DatasetLoaded(db) => self.load = LoadState::Loaded(db),
            Action::DatasetFailed(msg) => {
                tracing::warn!(error = %msg, "showing load error instead of country list");
                self.load = LoadState::Failed(msg);
            }
        }
    }

    /// Tokens for the current theme mode.
    pub fn theme_tokens(&self) -> &'static ThemeTokens {
        theme::tokens(self.theme)
    }

    /// The loaded dataset, if any.
    pub fn db(&self) -> Option<&CountryDb> {
        match &self.load {
            LoadState::Loaded(db) => Some(db),
            _ => None,
        }
    }

    /// Runs the current search against the dataset.
    pub fn listing(&self) -> Listing<'_> {
        match &self.load {
            LoadState::Loading => Listing::Loading,
            LoadState::Failed(message) => Listing::Failed { message },
            LoadState::Loaded(db) => {
                let countries = db.filter(&self.search);
                if countries.is_empty() {
                    Listing::Empty { total: db.len() }
                } else {
                    Listing::Results {
                        countries,
                        total: db.len(),
                    }
                }
            }
        }
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::ToggleTheme => "toggle_theme",
        Action::SetTheme(_) => "set_theme",
        Action::SetQuery(_) => "set_query",
        Action::SetRegion(_) => "set_region",
        Action::ClearFilters => "clear_filters",
        Action::ToggleFilters => "toggle_filters",
        Action::DatasetLoaded(_) => "dataset_loaded",
        Action::DatasetFailed(_) => "dataset_failed",
    }
}
