use wasm_bindgen_test::*;

use countrydb_wasm::{get_country_count, search_countries, CountryExplorer};

#[wasm_bindgen_test]
fn can_get_country_count() {
    #[cfg(target_arch = "wasm32")]
    countrydb_wasm::start();

    let count = get_country_count().ok().expect("dataset loads");
    assert!(count > 0, "expected at least one country, got {count}");
}

#[wasm_bindgen_test]
fn search_returns_array() {
    let value = search_countries("paris", "").ok().expect("search succeeds");
    assert!(js_sys::Array::is_array(&value));
    assert_eq!(js_sys::Array::from(&value).length(), 1);
}

#[wasm_bindgen_test]
fn explorer_tracks_filters_and_theme() {
    let mut explorer = CountryExplorer::new(Some("dark".into()))
        .ok()
        .expect("explorer starts");
    assert_eq!(explorer.theme(), "dark");

    explorer.set_query("zz".into());
    assert!(explorer.summary().unwrap().starts_with("0 of "));

    explorer.clear_filters();
    explorer.set_region("Asia".into());
    assert!(!explorer.summary().unwrap().starts_with("0 of "));

    assert_eq!(explorer.toggle_theme(), "light");
}
