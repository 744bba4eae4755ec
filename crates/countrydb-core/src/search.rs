// crates/countrydb-core/src/search.rs

//! # Filter Engine
//!
//! Text search and region filtering over country records.
//!
//! A record is kept when it passes both predicates:
//!
//! - **text**: the lower-cased query is a substring of the record's
//!   [search corpus](search_corpus);
//! - **region**: the record's region equals the region filter exactly.
//!
//! An empty query or an empty region filter matches everything. The output
//! is always a subsequence of the input in the original order.
//!
//! Region matching is case-sensitive ("asia" does not match "Asia") while text
//! matching is not. Both behaviors are covered by tests.

use crate::model::{CountryDb, CountryRecord};
use serde::{Deserialize, Serialize};

/// The user's current search input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Free text, matched case-insensitively. Empty disables text filtering.
    pub query: String,
    /// Exact region name. Empty disables region filtering.
    pub region: String,
}

impl SearchState {
    pub fn new(query: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            region: region.into(),
        }
    }

    /// True when neither criterion is set.
    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.region.is_empty()
    }
}

/// Builds the lower-cased text a query is matched against.
///
/// Fields, in order: name, capital, region, subregion, currency name,
/// currency code, phone code, TLD. Missing fields contribute an empty string,
/// so the separators stay in place.
///
/// ```
/// use countrydb_core::model::CountryRecord;
/// use countrydb_core::search::search_corpus;
///
/// let mut rec = CountryRecord::named("France");
/// rec.capital = Some("Paris".into());
/// rec.tld = Some(".fr".into());
/// assert_eq!(search_corpus(&rec), "france paris      .fr");
/// ```
pub fn search_corpus(record: &CountryRecord) -> String {
    let fields = [
        record.name(),
        record.capital().unwrap_or(""),
        record.region(),
        record.subregion(),
        record.currency_name(),
        record.currency(),
        record.phone_code(),
        record.tld(),
    ];
    fields.join(" ").to_lowercase()
}

/// Lower-cases a raw query. Whitespace is significant and is not trimmed.
#[inline]
pub fn fold_query(query: &str) -> String {
    query.to_lowercase()
}

/// Text predicate over a pre-built corpus and an already folded query.
#[inline]
pub fn matches_query(corpus: &str, folded_query: &str) -> bool {
    folded_query.is_empty() || corpus.contains(folded_query)
}

/// Region predicate: exact, case-sensitive equality.
#[inline]
pub fn matches_region(record: &CountryRecord, region: &str) -> bool {
    region.is_empty() || record.region() == region
}

/// Filters `records` by free-text `query` and exact `region`.
///
/// Accepts anything that yields record references, so it works on slices,
/// vectors and on the output of a previous call.
///
/// ```
/// use countrydb_core::model::CountryRecord;
/// use countrydb_core::search::filter_countries;
///
/// let mut fr = CountryRecord::named("France");
/// fr.region = Some("Europe".into());
/// let mut jp = CountryRecord::named("Japan");
/// jp.region = Some("Asia".into());
/// let all = vec![fr, jp];
///
/// let hits = filter_countries(&all, "FRA", "");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), "France");
///
/// let hits = filter_countries(&all, "", "Asia");
/// assert_eq!(hits[0].name(), "Japan");
/// ```
pub fn filter_countries<'a, I>(records: I, query: &str, region: &str) -> Vec<&'a CountryRecord>
where
    I: IntoIterator<Item = &'a CountryRecord>,
{
    let q = fold_query(query);
    records
        .into_iter()
        .filter(|record| {
            matches_region(record, region)
                && (q.is_empty() || matches_query(&search_corpus(record), &q))
        })
        .collect()
}

impl CountryDb {
    /// Applies `search` to the whole dataset, using the corpora built at load time.
    ///
    /// Behaves exactly like [`filter_countries`] over [`CountryDb::countries`].
    pub fn filter(&self, search: &SearchState) -> Vec<&CountryRecord> {
        let _span = tracing::debug_span!(
            "filter",
            total = self.countries.len(),
            query_len = search.query.len(),
            region = %search.region
        )
        .entered();

        let q = fold_query(&search.query);
        let out: Vec<&CountryRecord> = self
            .indexed()
            .filter(|(record, corpus)| {
                matches_region(record, &search.region) && matches_query(corpus, &q)
            })
            .map(|(record, _)| record)
            .collect();

        tracing::debug!(matched = out.len(), "filter complete");
        out
    }

    /// Distinct non-empty regions, in order of first appearance.
    pub fn regions(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for c in &self.countries {
            let r = c.region();
            if !r.is_empty() && !out.contains(&r) {
                out.push(r);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, capital: Option<&str>, region: &str) -> CountryRecord {
        CountryRecord {
            name: name.into(),
            capital: capital.map(Into::into),
            region: Some(region.into()),
            ..CountryRecord::default()
        }
    }

    #[test]
    fn corpus_keeps_field_order_and_separators() {
        let rec = CountryRecord {
            name: "Japan".into(),
            capital: Some("Tokyo".into()),
            region: Some("Asia".into()),
            subregion: Some("Eastern Asia".into()),
            currency: Some("JPY".into()),
            currency_name: Some("Yen".into()),
            phone_code: Some("81".into()),
            tld: Some(".jp".into()),
            ..CountryRecord::default()
        };
        assert_eq!(
            search_corpus(&rec),
            "japan tokyo asia eastern asia yen jpy 81 .jp"
        );
    }

    #[test]
    fn query_may_span_field_boundary() {
        let recs = [record("France", Some("Paris"), "Europe")];
        assert_eq!(filter_countries(&recs, "france paris", "").len(), 1);
    }

    #[test]
    fn whitespace_in_query_is_not_trimmed() {
        let recs = [record("France", Some("Paris"), "Europe")];
        assert_eq!(filter_countries(&recs, " paris ", "").len(), 1);
        assert!(filter_countries(&recs, "  paris", "").is_empty());
    }

    #[test]
    fn empty_predicates_are_vacuous() {
        assert!(matches_query("anything", ""));
        assert!(matches_region(&CountryRecord::named("x"), ""));
    }

    #[test]
    fn db_filter_agrees_with_free_function() {
        let recs = vec![
            record("France", Some("Paris"), "Europe"),
            record("Japan", Some("Tokyo"), "Asia"),
            record("Nepal", None, "Asia"),
        ];
        let db = CountryDb::from_records(recs.clone());
        for (q, r) in [("", ""), ("a", ""), ("A", "Asia"), ("tokyo", "Europe"), ("", "Asia")] {
            let a: Vec<_> = db.filter(&SearchState::new(q, r)).into_iter().cloned().collect();
            let b: Vec<_> = filter_countries(&recs, q, r).into_iter().cloned().collect();
            assert_eq!(a, b, "query={q:?} region={r:?}");
        }
    }

    #[test]
    fn regions_are_distinct_in_first_seen_order() {
        let db = CountryDb::from_records(vec![
            record("Japan", None, "Asia"),
            record("France", None, "Europe"),
            record("Nepal", None, "Asia"),
            CountryRecord::named("Nowhere"),
        ]);
        assert_eq!(db.regions(), ["Asia", "Europe"]);
    }
}
