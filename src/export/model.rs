// src/export/model.rs

use crate::errors::AppResult;
use crate::models::movie::Movie;
use crate::utils::date::format_iso_date;
use serde::Serialize;

/// Flat movie row for CSV / JSON exports.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct MovieExport {
    pub id: i64,
    pub title: String,
    pub release_timestamp: f64,
    pub release_date: String,
}

impl MovieExport {
    pub fn from_movie(movie: &Movie) -> AppResult<Self> {
        Ok(Self {
            id: movie.id,
            title: movie.title.clone(),
            release_timestamp: movie.release_timestamp,
            release_date: format_iso_date(movie.release_timestamp)?,
        })
    }
}
