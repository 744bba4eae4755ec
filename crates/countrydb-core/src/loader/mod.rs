// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (file access, decompression) and parses the
//! JSON payload into a [`CountryDb`].
//!
//! The dataset bundled with the crate is compiled into the binary and parsed
//! at most once per process. A broken dataset is reported as an error; the
//! loader never hands out an empty database in its place.

use crate::config::Config;
use crate::error::{CountryDbError, Result};
use crate::model::{CountryDb, CountryRecord};
use once_cell::sync::OnceCell;
use std::io::Read;
use std::path::{Path, PathBuf};

mod common_io;

pub use common_io::is_gzip;

/// The dataset shipped with the crate.
pub const BUNDLED_DATASET: &str = include_str!("../../data/countries.json");

// Single in-process instance so the bundled dataset is parsed once.
static BUNDLED_DB: OnceCell<CountryDb> = OnceCell::new();

impl CountryDb {
    /// Directory holding the dataset files of this crate.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "countries.json"
    }

    /// Returns the bundled dataset, parsing it on first use.
    ///
    /// ```
    /// use countrydb_core::CountryDb;
    ///
    /// let db = CountryDb::load().expect("bundled dataset parses");
    /// assert!(!db.is_empty());
    /// ```
    pub fn load() -> Result<&'static CountryDb> {
        BUNDLED_DB.get_or_try_init(|| {
            Self::from_json_str(BUNDLED_DATASET)
                .inspect(|db| tracing::info!(countries = db.len(), "bundled dataset loaded"))
                .inspect_err(|e| tracing::error!(error = %e, "bundled dataset failed to load"))
        })
    }

    /// Loads the dataset selected by `config`: `data_path` when set, the
    /// bundled dataset otherwise.
    pub fn load_with(config: &Config) -> Result<CountryDb> {
        match &config.data_path {
            Some(path) => Self::load_from_path(path),
            None => Self::load().cloned(),
        }
    }

    /// Reads a dataset file. `*.gz` files are decompressed on the fly
    /// (requires the `compact` feature).
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<CountryDb> {
        let path = path.as_ref();
        let result = common_io::open_stream(path).and_then(Self::from_reader);
        match &result {
            Ok(db) => tracing::info!(path = %path.display(), countries = db.len(), "dataset loaded"),
            Err(e) => tracing::error!(path = %path.display(), error = %e, "dataset failed to load"),
        }
        result
    }

    /// Parses a JSON array of country records from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<CountryDb> {
        let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
        Self::validated(records)
    }

    /// Parses a JSON array of country records from a string.
    pub fn from_json_str(json: &str) -> Result<CountryDb> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Self::validated(records)
    }

    fn validated(records: Vec<CountryRecord>) -> Result<CountryDb> {
        if let Some(i) = records.iter().position(|r| r.name.trim().is_empty()) {
            return Err(CountryDbError::InvalidData(format!(
                "record {i} has an empty name"
            )));
        }
        Ok(CountryDb::from_records(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_is_parsed_once() {
        let a = CountryDb::load().unwrap();
        let b = CountryDb::load().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn bundled_dataset_file_matches_embedded_copy() {
        let path = CountryDb::default_data_dir().join(CountryDb::default_dataset_filename());
        let from_disk = CountryDb::load_from_path(path).unwrap();
        assert_eq!(&from_disk, CountryDb::load().unwrap());
    }

    #[test]
    fn object_instead_of_array_is_rejected() {
        let err = CountryDb::from_json_str(r#"{"name":"France"}"#).unwrap_err();
        assert!(matches!(err, CountryDbError::Json(_)));
        assert!(err.is_malformed());
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = CountryDb::from_json_str(r#"[{"name":"France"},{"name":"  "}]"#).unwrap_err();
        match err {
            CountryDbError::InvalidData(msg) => assert!(msg.contains("record 1")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn record_without_name_key_is_malformed() {
        let err = CountryDb::from_json_str(r#"[{"region":"Asia"}]"#).unwrap_err();
        assert!(matches!(err, CountryDbError::Json(_)));
    }

    #[test]
    fn null_codes_do_not_fail_the_dataset() {
        let db = CountryDb::from_json_str(
            r#"[{"name":"France","iso2":"FR"},{"name":"Kosovo","iso2":null,"iso3":null}]"#,
        )
        .unwrap();
        assert_eq!(db.len(), 2);
        assert_eq!(db.countries()[1].iso2(), "");
    }

    #[test]
    fn empty_array_is_a_valid_empty_dataset() {
        let db = CountryDb::from_json_str("[]").unwrap();
        assert!(db.is_empty());
    }

    #[test]
    fn load_with_defaults_to_bundled() {
        let db = CountryDb::load_with(&Config::default()).unwrap();
        assert_eq!(db.len(), CountryDb::load().unwrap().len());
    }
}
