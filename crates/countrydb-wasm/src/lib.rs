//! countrydb-wasm: WebAssembly bindings for countrydb-core
//!
//! Exposes the bundled country dataset, the filter engine and the theme
//! tokens to a JavaScript rendering layer.
//!
//! What it provides
//! ----------------
//! - Initialization on module load (via `#[wasm_bindgen(start)]`)
//! - Stateless queries: `get_country_count()`, `get_regions()`,
//!   `search_countries(query, region)`, `find_country(code)`,
//!   `get_theme_tokens("light" | "dark")`
//! - `CountryExplorer`: the app state store for a screen, driven by
//!   `setQuery` / `setRegion` / `toggleTheme` and read via `listing()`
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { CountryExplorer, search_countries } from 'countrydb-wasm';
//!
//! async function main() {
//!   await init();
//!   console.log(search_countries('paris', ''));   // [{ name: "France", ... }]
//!
//!   const explorer = new CountryExplorer('dark');
//!   explorer.setRegion('Asia');
//!   const listing = explorer.listing();            // { status: "results", countries, total }
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - A dataset that fails to load makes every query throw instead of
//!   returning an empty array, so "no results" and "broken data" stay
//!   distinguishable in the UI.

use countrydb_core::prelude::*;
use countrydb_core::theme;
use serde::Serialize;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing countrydb WASM module...".into());

    match CountryDb::load() {
        Ok(db) => {
            let stats = db.stats();
            web_sys::console::log_1(
                &format!(
                    "✓ Loaded {} countries in {} regions",
                    stats.countries, stats.regions
                )
                .into(),
            );
        }
        Err(e) => {
            web_sys::console::error_1(&format!("✗ Failed to load countries: {e}").into());
        }
    }
}

fn db() -> Result<&'static CountryDb, JsError> {
    CountryDb::load().map_err(|e| JsError::new(&e.to_string()))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_country_count() -> Result<usize, JsError> {
    Ok(db()?.len())
}

/// Distinct region names, in dataset order.
#[wasm_bindgen]
pub fn get_regions() -> Result<js_sys::Array, JsError> {
    let array = js_sys::Array::new();
    for region in db()?.regions() {
        array.push(&JsValue::from_str(region));
    }
    Ok(array)
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsError> {
    to_js(&db()?.stats())
}

/// Lookup by ISO2 or ISO3 code; `undefined` when unknown.
#[wasm_bindgen]
pub fn find_country(code: &str) -> Result<JsValue, JsError> {
    match db()?.find_country_by_code(code) {
        Some(country) => to_js(country),
        None => Ok(JsValue::UNDEFINED),
    }
}

/* --------------------------------------------------------------------------
   Search + Region Filter
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn search_countries(query: &str, region: &str) -> Result<JsValue, JsError> {
    let hits = db()?.filter(&SearchState::new(query, region));
    to_js(&hits)
}

/* --------------------------------------------------------------------------
   Theme
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn get_theme_tokens(mode: &str) -> Result<JsValue, JsError> {
    let mode: ThemeMode = mode
        .parse()
        .map_err(|e: CountryDbError| JsError::new(&e.to_string()))?;
    to_js(theme::tokens(mode))
}

/* --------------------------------------------------------------------------
   App State
-------------------------------------------------------------------------- */

/// Screen state owned by the JS side; every setter is one [`Action`].
#[wasm_bindgen]
pub struct CountryExplorer {
    state: AppState,
}

#[wasm_bindgen]
impl CountryExplorer {
    /// Starts with the bundled dataset. A load failure is kept in the state
    /// and reported by `listing()` as `{ status: "failed", message }`.
    #[wasm_bindgen(constructor)]
    pub fn new(theme: Option<String>) -> Result<CountryExplorer, JsError> {
        let mode = match theme.as_deref() {
            Some(name) => name
                .parse()
                .map_err(|e: CountryDbError| JsError::new(&e.to_string()))?,
            None => ThemeMode::default(),
        };
        let config = Config {
            theme: mode,
            ..Config::default()
        };
        let state = AppState::from_load_result(CountryDb::load().cloned(), &config);
        Ok(CountryExplorer { state })
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, query: String) {
        self.state.dispatch(Action::SetQuery(query));
    }

    #[wasm_bindgen(js_name = setRegion)]
    pub fn set_region(&mut self, region: String) {
        self.state.dispatch(Action::SetRegion(region));
    }

    #[wasm_bindgen(js_name = clearFilters)]
    pub fn clear_filters(&mut self) {
        self.state.dispatch(Action::ClearFilters);
    }

    #[wasm_bindgen(js_name = toggleFilters)]
    pub fn toggle_filters(&mut self) -> bool {
        self.state.dispatch(Action::ToggleFilters);
        self.state.filters_visible
    }

    /// Flips light/dark and returns the new mode name.
    #[wasm_bindgen(js_name = toggleTheme)]
    pub fn toggle_theme(&mut self) -> String {
        self.state.dispatch(Action::ToggleTheme);
        self.state.theme.to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn theme(&self) -> String {
        self.state.theme.to_string()
    }

    #[wasm_bindgen(js_name = themeTokens)]
    pub fn theme_tokens(&self) -> Result<JsValue, JsError> {
        to_js(self.state.theme_tokens())
    }

    pub fn listing(&self) -> Result<JsValue, JsError> {
        to_js(&self.state.listing())
    }

    /// "N of M countries found", or `undefined` while loading or failed.
    pub fn summary(&self) -> Option<String> {
        self.state.listing().summary()
    }
}
