use crate::core::movies::Listing;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{ExportFormat, MovieExport, ensure_writable, export_csv, export_json};
use crate::ui::messages::warning;
use std::io::BufRead;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export all movies (or only the upcoming ones) to `file`.
    ///
    /// Returns the number of movies written; nothing is written when the
    /// selection is empty.
    pub fn export<R: BufRead>(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        upcoming: bool,
        force: bool,
        confirm_input: &mut R,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force, confirm_input)?;

        let listing = if upcoming {
            Listing::Upcoming
        } else {
            Listing::All
        };

        let movies = listing.load(&pool.conn)?;
        if movies.is_empty() {
            warning(format!(
                "{} Nothing to export.",
                listing.empty_message()
            ));
            return Ok(0);
        }

        let rows = movies
            .iter()
            .map(MovieExport::from_movie)
            .collect::<AppResult<Vec<_>>>()?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
