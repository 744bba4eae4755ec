//! Basic usage example for countrydb-rs
//!
//! Loads the bundled dataset and runs a few searches the way the country
//! list screen does while the user types.
//!
//! Run with `COUNTRYDB_TRACE_LEVEL=debug` to see the filter spans.

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

    println!("=== countrydb-rs Basic Usage ===\n");

    let db = CountryDb::load_with(&config)?;
    tracing::info!(
        countries = db.len(),
        custom = config.data_path.is_some(),
        "dataset ready"
    );
    let stats = db.stats();
    println!(
        "Discover {} countries in {} regions\n",
        stats.countries, stats.regions
    );

    // Example 1: typing a query one keystroke at a time
    println!("--- Example 1: keystrokes for 'swe' ---");
    for n in 1..=3 {
        let q = &"swe"[..n];
        let hits = db.filter(&SearchState::new(q, ""));
        println!("  {q:<4} -> {} matches", hits.len());
    }
    println!();

    // Example 2: capitals, currencies, phone codes and TLDs are searchable too
    println!("--- Example 2: searching non-name fields ---");
    for q in ["tokyo", "peso", "+44", "44", ".nz"] {
        let hits = db.filter(&SearchState::new(q, ""));
        let names: Vec<_> = hits.iter().map(|c| c.name()).collect();
        println!("  {q:<6} -> {names:?}");
    }
    println!();

    // Example 3: a single country card
    println!("--- Example 3: country card ---");
    if let Some(c) = db.find_country_by_code("JP") {
        println!("{} {}", c.name(), c.emoji());
        println!(
            "  Capital: {} • Currency: {} ({})",
            c.capital().unwrap_or("-"),
            c.currency_name(),
            c.currency_symbol()
        );
        println!("  Region: {} • Subregion: {}", c.region(), c.subregion());
        println!("  Phone Code: +{} • TLD: {}", c.phone_code(), c.tld());
        println!(
            "  ISO2: {} • ISO3: {} • Numeric: {}",
            c.iso2(),
            c.iso3(),
            c.numeric_code()
        );
    }

    Ok(())
}
