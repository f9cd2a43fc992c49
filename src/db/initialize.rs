use crate::errors::AppResult;
use rusqlite::Connection;

/// Full schema. Every statement is `IF NOT EXISTS`, so running it on each
/// startup leaves an existing database untouched.
const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS movies (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        title             TEXT,
        release_timestamp REAL
    );

    CREATE TABLE IF NOT EXISTS users (
        username TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS watched (
        user_username TEXT,
        movie_id      INTEGER,
        FOREIGN KEY(user_username) REFERENCES users(username),
        FOREIGN KEY(movie_id) REFERENCES movies(id)
    );

    CREATE INDEX IF NOT EXISTS idx_movies_release ON movies(release_timestamp);

    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );
"#;

/// Create tables and indexes if they are missing.
pub fn create_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

/// Names of the user tables currently present, sorted.
pub fn table_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Names of the explicitly created indexes, sorted.
pub fn index_names(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT name FROM sqlite_master
         WHERE type = 'index' AND name NOT LIKE 'sqlite_%'
         ORDER BY name",
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
