// crates/countrydb-core/src/traits.rs
use crate::common::DbStats;
use crate::model::{CountryDb, CountryRecord};
use crate::search::SearchState;

/// Read-only queries over a loaded country dataset.
///
/// Implemented by [`CountryDb`]. Lookups by code are ASCII case-insensitive;
/// [`CountrySearch::filter`] follows the filter engine rules in
/// [`crate::search`].
pub trait CountrySearch {
    /// All records, in dataset order.
    fn countries(&self) -> &[CountryRecord];

    fn stats(&self) -> DbStats;

    /// Find a country by ISO2 code, case-insensitive (e.g. "FR", "jp").
    fn find_country_by_iso2(&self, iso2: &str) -> Option<&CountryRecord> {
        self.countries()
            .iter()
            .find(|c| !c.iso2().is_empty() && c.iso2().eq_ignore_ascii_case(iso2))
    }

    /// Find a country by ISO3 code, case-insensitive (e.g. "FRA", "jpn").
    fn find_country_by_iso3(&self, iso3: &str) -> Option<&CountryRecord> {
        self.countries()
            .iter()
            .find(|c| !c.iso3().is_empty() && c.iso3().eq_ignore_ascii_case(iso3))
    }

    /// Find a country by code, trying ISO2 first and then ISO3.
    ///
    /// Examples:
    /// - "FR"  → matches ISO2
    /// - "fra" → matches ISO3 (case-insensitive)
    /// - " jp " → trimmed, matches ISO2
    fn find_country_by_code(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        if code.is_empty() {
            return None;
        }
        self.find_country_by_iso2(code)
            .or_else(|| self.find_country_by_iso3(code))
    }

    fn filter(&self, search: &SearchState) -> Vec<&CountryRecord>;
}

impl CountrySearch for CountryDb {
    fn countries(&self) -> &[CountryRecord] {
        CountryDb::countries(self)
    }

    fn stats(&self) -> DbStats {
        DbStats {
            countries: self.len(),
            regions: self.regions().len(),
        }
    }

    fn filter(&self, search: &SearchState) -> Vec<&CountryRecord> {
        CountryDb::filter(self, search)
    }
}
