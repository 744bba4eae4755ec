use countrydb_core::prelude::*;
use std::io::Write;
use tempfile::tempdir;

const TWO: &str = r#"[
  {"name":"France","iso2":"FR","capital":"Paris","region":"Europe","phone_code":33},
  {"name":"Japan","iso2":"JP","capital":null,"region":"Asia","tld":".jp"}
]"#;

#[test]
fn bundled_dataset_has_expected_shape() {
    let db = CountryDb::load().unwrap();
    assert!(db.len() >= 40);

    let fr = db.find_country_by_code("FR").unwrap();
    assert_eq!(fr.name(), "France");
    assert_eq!(fr.capital(), Some("Paris"));
    assert_eq!(fr.tld(), ".fr");

    let aq = db.find_country_by_code("ATA").unwrap();
    assert_eq!(aq.capital(), None);
    assert_eq!(aq.region(), "Polar");

    assert!(db.regions().contains(&"Europe"));
    assert_eq!(db.stats().countries, db.len());
}

#[test]
fn loads_plain_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.json");
    std::fs::write(&path, TWO).unwrap();

    let db = CountryDb::load_from_path(&path).unwrap();
    assert_eq!(db.len(), 2);
    assert_eq!(db.countries()[0].phone_code(), "33");
    assert_eq!(db.countries()[1].capital(), None);
}

#[cfg(feature = "compact")]
#[test]
fn loads_gzip_file() {
    use flate2::{write::GzEncoder, Compression};

    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.json.gz");
    let mut enc = GzEncoder::new(std::fs::File::create(&path).unwrap(), Compression::default());
    enc.write_all(TWO.as_bytes()).unwrap();
    enc.finish().unwrap();

    let db = CountryDb::load_from_path(&path).unwrap();
    assert_eq!(db.filter(&SearchState::new("", "Asia"))[0].name(), "Japan");
}

#[test]
fn missing_file_is_an_error_not_an_empty_dataset() {
    let dir = tempdir().unwrap();
    let err = CountryDb::load_from_path(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CountryDbError::NotFound(_)));
    assert!(!err.is_malformed());
}

#[test]
fn truncated_file_is_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.json");
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(&TWO.as_bytes()[..40]).unwrap();
    drop(f);

    let err = CountryDb::load_from_path(&path).unwrap_err();
    assert!(err.is_malformed(), "unexpected error: {err}");
}

#[test]
fn config_selects_dataset_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("countries.json");
    std::fs::write(&path, TWO).unwrap();

    let config = Config {
        data_path: Some(path),
        ..Config::default()
    };
    let state = AppState::boot(&config);
    assert_eq!(state.listing().countries().len(), 2);
}

#[test]
fn boot_with_missing_file_shows_failure() {
    let config = Config {
        data_path: Some("/no/such/countries.json".into()),
        theme: ThemeMode::Dark,
        ..Config::default()
    };
    let state = AppState::boot(&config);
    assert!(matches!(state.listing(), Listing::Failed { .. }));
    assert_eq!(state.theme, ThemeMode::Dark);
}
