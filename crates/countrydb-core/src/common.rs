use serde::{Deserialize, Serialize};

/// Simple aggregate statistics for the database.
///
/// Returned by [`CountrySearch::stats`](crate::traits::CountrySearch::stats).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbStats {
    pub countries: usize,
    /// Distinct non-empty region labels.
    pub regions: usize,
}
