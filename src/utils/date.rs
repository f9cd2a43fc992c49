use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Input format for release dates (`25-12-2025`).
pub const RELEASE_DATE_INPUT: &str = "%d-%m-%Y";

/// Display format for release dates (`Dec 25 2025`).
pub const RELEASE_DATE_DISPLAY: &str = "%b %d %Y";

/// Current instant as fractional seconds since the epoch.
pub fn now_timestamp() -> f64 {
    datetime_to_timestamp(&Utc::now())
}

pub fn datetime_to_timestamp<Tz: TimeZone>(dt: &DateTime<Tz>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_nanos()) / 1_000_000_000.0
}

/// Parse a `dd-mm-YYYY` release date into the timestamp of local midnight
/// on that day.
pub fn parse_release_date(s: &str) -> AppResult<f64> {
    let day = NaiveDate::parse_from_str(s, RELEASE_DATE_INPUT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;

    let midnight = day
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;

    // `earliest` is None only when a DST jump skips local midnight.
    let local = Local
        .from_local_datetime(&midnight)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(s.to_string()))?;

    Ok(datetime_to_timestamp(&local))
}

pub fn timestamp_to_local(ts: f64) -> AppResult<DateTime<Local>> {
    if !ts.is_finite() {
        return Err(AppError::InvalidTimestamp(ts));
    }

    let secs = ts.floor();
    let nanos = ((ts - secs) * 1_000_000_000.0) as u32;

    let utc = DateTime::<Utc>::from_timestamp(secs as i64, nanos.min(999_999_999))
        .ok_or(AppError::InvalidTimestamp(ts))?;

    Ok(utc.with_timezone(&Local))
}

pub fn format_release_date(ts: f64) -> AppResult<String> {
    Ok(timestamp_to_local(ts)?.format(RELEASE_DATE_DISPLAY).to_string())
}

/// ISO `YYYY-MM-DD` rendering, used by exports and `db --info`.
pub fn format_iso_date(ts: f64) -> AppResult<String> {
    Ok(timestamp_to_local(ts)?.format("%Y-%m-%d").to_string())
}
