//! Error handling example for countrydb-rs
//!
//! Shows how load failures surface as errors (and as a failed listing)
//! instead of looking like an empty search result.

use countrydb_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let (filter, bad_directive) = match EnvFilter::try_new(config.trace_directive()) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new("info"), Some(e)),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
    if let Some(e) = bad_directive {
        tracing::warn!(
            directive = config.trace_directive(),
            error = %e,
            "invalid trace level, using info"
        );
    }

    println!("=== countrydb-rs Error Handling ===\n");

    // Example 1: loading the bundled dataset
    println!("--- Example 1: bundled dataset ---");
    match CountryDb::load() {
        Ok(db) => tracing::info!(countries = db.len(), "bundled dataset ready"),
        Err(e) => {
            tracing::error!(error = %e, "bundled dataset failed to load");
            return Err(e);
        }
    }
    println!();

    // Example 2: a missing dataset file
    println!("--- Example 2: missing file ---");
    match CountryDb::load_from_path("/does/not/exist/countries.json") {
        Ok(db) => println!("  unexpectedly loaded {} countries", db.len()),
        Err(e) => println!("  error: {e} (malformed: {})", e.is_malformed()),
    }
    println!();

    // Example 3: malformed JSON
    println!("--- Example 3: malformed dataset ---");
    for payload in [r#"{"name": "France"}"#, r#"[{"name": "France""#, r#"[{"name": ""}]"#] {
        match CountryDb::from_json_str(payload) {
            Ok(db) => println!("  parsed {} countries", db.len()),
            Err(e) => println!("  error: {e}"),
        }
    }
    println!();

    // Example 4: what the list screen shows for each outcome
    println!("--- Example 4: listing states ---");
    let failed = AppState::from_load_result(
        CountryDb::load_from_path("/does/not/exist/countries.json"),
        &config,
    );
    println!("  after failed load: {:?}", failed.listing());

    let mut ok = AppState::boot(&config);
    ok.dispatch(Action::SetQuery("zz".into()));
    println!("  no matches:        {:?}", ok.listing());

    // Example 5: unknown codes are not errors
    println!("\n--- Example 5: unknown codes ---");
    let db = CountryDb::load()?;
    for code in ["XX", "", "ABCD", "fra"] {
        match db.find_country_by_code(code) {
            Some(c) => println!("  {code:?}: {}", c.name()),
            None => println!("  {code:?}: not found"),
        }
    }

    Ok(())
}
