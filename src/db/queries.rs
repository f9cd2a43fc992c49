use crate::errors::AppResult;
use crate::models::movie::Movie;
use crate::utils::date;
use rusqlite::{Connection, Params, Result, Row, ToSql, params};

const SELECT_ALL_MOVIES: &str = "SELECT id, title, release_timestamp FROM movies";

const SELECT_UPCOMING_MOVIES: &str = "SELECT id, title, release_timestamp
     FROM movies
     WHERE release_timestamp > ?1";

const SEARCH_MOVIES: &str = r"SELECT id, title, release_timestamp
     FROM movies
     WHERE movielist_lower(title) LIKE ?1 ESCAPE '\'";

const SELECT_WATCHED_MOVIES: &str = "SELECT movies.id, movies.title, movies.release_timestamp
     FROM movies
     JOIN watched ON movies.id = watched.movie_id
     JOIN users ON users.username = watched.user_username
     WHERE users.username = ?1";

pub fn map_movie(row: &Row) -> Result<Movie> {
    Ok(Movie {
        id: row.get("id")?,
        title: row.get::<_, Option<String>>("title")?.unwrap_or_default(),
        release_timestamp: row.get::<_, Option<f64>>("release_timestamp")?.unwrap_or(0.0),
    })
}

fn load_movies<P: Params>(conn: &Connection, sql: &str, params: P) -> AppResult<Vec<Movie>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let rows = stmt.query_map(params, map_movie)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a user. A duplicate username surfaces the UNIQUE constraint error.
pub fn add_user(conn: &Connection, username: &str) -> AppResult<()> {
    conn.execute("INSERT INTO users (username) VALUES (?1)", [username])?;
    Ok(())
}

/// Insert a movie and return the id SQLite assigned to it.
pub fn add_movie(conn: &Connection, title: &str, release_timestamp: f64) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO movies (title, release_timestamp) VALUES (?1, ?2)",
        params![title, release_timestamp],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All movies, or only the upcoming ones (released strictly after now).
pub fn list_movies(conn: &Connection, upcoming: bool) -> AppResult<Vec<Movie>> {
    if upcoming {
        list_movies_released_after(conn, date::now_timestamp())
    } else {
        load_movies(conn, SELECT_ALL_MOVIES, [])
    }
}

/// Movies whose release timestamp is strictly greater than `instant`.
pub fn list_movies_released_after(conn: &Connection, instant: f64) -> AppResult<Vec<Movie>> {
    load_movies(conn, SELECT_UPCOMING_MOVIES, [instant])
}

/// Case-insensitive substring match on the title, with Unicode case folding
/// on both sides. `%` and `_` in `term` are matched literally.
///
/// Needs a connection opened through `DbPool`, which registers
/// `movielist_lower`.
pub fn search_movies(conn: &Connection, term: &str) -> AppResult<Vec<Movie>> {
    let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
    load_movies(conn, SEARCH_MOVIES, [pattern])
}

fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Record that `username` watched `movie_id`.
///
/// The movie id is bound as given: the interactive prompt passes the raw
/// text, and SQLite's INTEGER affinity turns numeric text into an integer.
/// Existence of the user and the movie is left to the foreign keys.
pub fn record_watch<M: ToSql>(conn: &Connection, username: &str, movie_id: M) -> AppResult<()> {
    conn.execute(
        "INSERT INTO watched (user_username, movie_id) VALUES (?1, ?2)",
        params![username, movie_id],
    )?;
    Ok(())
}

/// Movies watched by `username`, one row per watch event.
pub fn list_watched_movies(conn: &Connection, username: &str) -> AppResult<Vec<Movie>> {
    load_movies(conn, SELECT_WATCHED_MOVIES, [username])
}

/// Row counts for `movies`, `users` and `watched`.
pub fn count_rows(conn: &Connection) -> AppResult<(i64, i64, i64)> {
    let count = |table: &str| -> Result<i64> {
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
    };

    Ok((count("movies")?, count("users")?, count("watched")?))
}
