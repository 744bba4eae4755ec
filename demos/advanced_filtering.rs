//! Advanced filtering example for countrydb-rs
//!
//! Combines free-text search with the region filter and drives the same
//! search through the app state store.

use countrydb_core::prelude::*;
use tracing_subscriber::EnvFilter;

fn print_listing(label: &str, listing: &Listing<'_>) {
    println!("--- {label} ---");
    match listing {
        Listing::Loading => println!("  Loading countries..."),
        Listing::Failed { message } => println!("  Could not load countries: {message}"),
        Listing::Empty { .. } => {
            println!("  No countries found");
            println!("  Try adjusting your search or filters to find more results.");
        }
        Listing::Results { countries, .. } => {
            for c in countries.iter().take(8) {
                println!("  - {} ({})", c.name(), c.region());
            }
            if countries.len() > 8 {
                println!("  ... and {} more", countries.len() - 8);
            }
        }
    }
    if let Some(summary) = listing.summary() {
        println!("  {summary}");
    }
    println!();
}

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

    println!("=== countrydb-rs Advanced Filtering ===\n");

    let db = CountryDb::load_with(&config)?;
    tracing::info!(
        countries = db.len(),
        custom = config.data_path.is_some(),
        "dataset ready"
    );

    // Example 1: region hints for the filter field
    println!("Regions: {}\n", db.regions().join(", "));

    // Example 2: Euro countries in Europe
    let euro = db.filter(&SearchState::new("euro", "Europe"));
    println!("--- Euro users in Europe: {} ---", euro.len());
    for c in &euro {
        println!("  - {} ({})", c.name(), c.capital().unwrap_or("-"));
    }
    println!();

    // Example 3: the region filter is exact, unlike the text search
    let exact = db.filter(&SearchState::new("", "Asia")).len();
    let lower = db.filter(&SearchState::new("", "asia")).len();
    let text = db.filter(&SearchState::new("asia", "")).len();
    println!("--- Case handling ---");
    println!("  region 'Asia' -> {exact}, region 'asia' -> {lower}, text 'asia' -> {text}\n");

    // Example 4: the same flow through the state store
    let mut state = AppState::from_load_result(Ok(db), &config);
    state.dispatch(Action::ToggleFilters);
    state.dispatch(Action::SetRegion("Americas".into()));
    print_listing("Americas", &state.listing());

    state.dispatch(Action::SetQuery("dollar".into()));
    print_listing("Americas + 'dollar'", &state.listing());

    state.dispatch(Action::SetQuery("zz".into()));
    print_listing("Americas + 'zz'", &state.listing());

    state.dispatch(Action::ClearFilters);
    state.dispatch(Action::ToggleTheme);
    let tokens = state.theme_tokens();
    println!(
        "Theme now {} (background {}, text {})",
        state.theme, tokens.background, tokens.text.primary
    );

    Ok(())
}
