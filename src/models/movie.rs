use crate::errors::AppResult;
use crate::utils::date;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    /// Seconds since the Unix epoch, as stored in `movies.release_timestamp`.
    pub release_timestamp: f64,
}

impl Movie {
    /// `Jan 05 2025` style date used by every listing.
    pub fn human_date(&self) -> AppResult<String> {
        date::format_release_date(self.release_timestamp)
    }
}
