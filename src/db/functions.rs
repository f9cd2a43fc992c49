//! Application-defined SQL functions registered on every connection.

use rusqlite::functions::FunctionFlags;
use rusqlite::{Connection, Result};

/// Unicode-aware `lower()`. SQLite's built-in one only folds ASCII letters.
pub const LOWER_FN: &str = "movielist_lower";

pub fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        LOWER_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| s.to_lowercase()))
        },
    )
}
