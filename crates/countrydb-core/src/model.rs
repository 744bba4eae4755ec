// crates/countrydb-core/src/model.rs
use crate::search::search_corpus;
use serde::{Deserialize, Deserializer, Serialize};

/// A single country as shipped in the dataset.
///
/// Records are read-only once loaded. Optional text fields are `None` when the
/// dataset omits them or sets them to `null`; the `&str` accessors below map
/// that to an empty string so callers rarely need to care.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iso2: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub iso3: Option<String>,
    /// ISO 3166-1 numeric code, kept as text ("250", "004").
    #[serde(default, deserialize_with = "lenient_string")]
    pub numeric_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub capital: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subregion: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub currency_symbol: Option<String>,
    /// Dialing prefix without the leading `+`.
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_code: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub tld: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub emoji: Option<String>,
}

/// Scalar JSON values that we accept where the dataset expects text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
}

/// Deserializes a string field that some datasets encode as a number
/// (`"phone_code": 33`). Every scalar is coerced to its string form.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|v| match v {
        Scalar::Str(s) => s,
        Scalar::Int(i) => i.to_string(),
        Scalar::UInt(u) => u.to_string(),
        Scalar::Float(f) => f.to_string(),
        Scalar::Bool(b) => b.to_string(),
    }))
}

#[inline]
fn opt_str(v: &Option<String>) -> &str {
    v.as_deref().unwrap_or("")
}

impl CountryRecord {
    /// Creates a record with only a display name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Country display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO 3166-1 alpha-2 code (e.g. "FR"), or an empty string when unknown.
    pub fn iso2(&self) -> &str {
        opt_str(&self.iso2)
    }

    /// ISO 3166-1 alpha-3 code, or an empty string when unknown.
    pub fn iso3(&self) -> &str {
        opt_str(&self.iso3)
    }

    pub fn numeric_code(&self) -> &str {
        opt_str(&self.numeric_code)
    }

    /// Capital city name, if the dataset provides one.
    ///
    /// An empty string in the dataset is reported as `None` as well.
    pub fn capital(&self) -> Option<&str> {
        self.capital.as_deref().filter(|c| !c.is_empty())
    }

    /// Region label (e.g. "Europe"), empty when unknown.
    pub fn region(&self) -> &str {
        opt_str(&self.region)
    }

    pub fn subregion(&self) -> &str {
        opt_str(&self.subregion)
    }

    /// ISO 4217 currency code (e.g. "EUR").
    pub fn currency(&self) -> &str {
        opt_str(&self.currency)
    }

    pub fn currency_name(&self) -> &str {
        opt_str(&self.currency_name)
    }

    pub fn currency_symbol(&self) -> &str {
        opt_str(&self.currency_symbol)
    }

    /// Dialing prefix without `+` (e.g. "33").
    pub fn phone_code(&self) -> &str {
        opt_str(&self.phone_code)
    }

    /// Top-level domain including the leading dot (e.g. ".fr").
    pub fn tld(&self) -> &str {
        opt_str(&self.tld)
    }

    pub fn emoji(&self) -> &str {
        opt_str(&self.emoji)
    }
}

/// The loaded country dataset.
///
/// Records keep the order of the source file. Next to every record the
/// database stores its lower-cased search corpus, built once here so that
/// keystroke-driven filtering does not normalize the same text over and over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountryDb {
    pub(crate) countries: Vec<CountryRecord>,
    pub(crate) corpora: Vec<String>,
}

impl CountryDb {
    /// Builds a database from already-parsed records.
    pub fn from_records(countries: Vec<CountryRecord>) -> Self {
        let corpora = countries.iter().map(search_corpus).collect();
        Self { countries, corpora }
    }

    /// All records in dataset order.
    pub fn countries(&self) -> &[CountryRecord] {
        &self.countries
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Records paired with their pre-built corpus, in dataset order.
    pub(crate) fn indexed(&self) -> impl Iterator<Item = (&CountryRecord, &str)> + '_ {
        self.countries
            .iter()
            .zip(self.corpora.iter().map(String::as_str))
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_are_coerced_to_text() {
        let rec: CountryRecord = serde_json::from_str(
            r#"{"name":"France","numeric_code":250,"phone_code":33,"capital":null}"#,
        )
        .unwrap();
        assert_eq!(rec.numeric_code(), "250");
        assert_eq!(rec.phone_code(), "33");
        assert_eq!(rec.capital(), None);
    }

    #[test]
    fn missing_optional_fields_read_as_empty() {
        let rec: CountryRecord = serde_json::from_str(r#"{"name":"Nowhere"}"#).unwrap();
        assert_eq!(rec.iso2(), "");
        assert_eq!(rec.region(), "");
        assert_eq!(rec.tld(), "");
        assert!(rec.capital().is_none());
    }

    #[test]
    fn null_or_numeric_codes_do_not_fail_the_record() {
        let rec: CountryRecord = serde_json::from_str(r#"{"name":"X","iso2":null}"#).unwrap();
        assert_eq!(rec.iso2(), "");

        let rec: CountryRecord =
            serde_json::from_str(r#"{"name":"X","iso2":12,"iso3":null}"#).unwrap();
        assert_eq!(rec.iso2(), "12");
        assert_eq!(rec.iso3(), "");
    }

    #[test]
    fn empty_capital_is_none() {
        let mut rec = CountryRecord::named("Antarctica");
        rec.capital = Some(String::new());
        assert_eq!(rec.capital(), None);
    }

    #[test]
    fn corpora_follow_records() {
        let db = CountryDb::from_records(vec![
            CountryRecord::named("France"),
            CountryRecord::named("Japan"),
        ]);
        let names: Vec<_> = db.indexed().map(|(r, _)| r.name()).collect();
        assert_eq!(names, ["France", "Japan"]);
        assert_eq!(db.len(), 2);
        assert!(db.indexed().all(|(r, c)| c.starts_with(&r.name.to_lowercase())));
    }
}
