//! Operations shared by the interactive menu and the one-shot subcommands:
//! mutations (each committed together with its audit log line) and the
//! movie listings.

use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::movie::Movie;
use crate::utils::date;
use rusqlite::Connection;
use std::io::Write;

/// Which movie listing to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing<'a> {
    All,
    Upcoming,
    Search(&'a str),
    WatchedBy(&'a str),
}

impl Listing<'_> {
    pub fn heading(&self) -> String {
        match self {
            Listing::All => "All movies".to_string(),
            Listing::Upcoming => "Upcoming movies".to_string(),
            Listing::Search(_) => "Movies found".to_string(),
            Listing::WatchedBy(username) => format!("{username}'s watched movies"),
        }
    }

    pub fn empty_message(&self) -> String {
        match self {
            Listing::All => "There are no movies in the list!".to_string(),
            Listing::Upcoming => "There are no upcoming movies!".to_string(),
            Listing::Search(_) => "No movies match that search term!".to_string(),
            Listing::WatchedBy(username) => format!("{username} has not watched any movies yet!"),
        }
    }

    pub fn load(&self, conn: &Connection) -> AppResult<Vec<Movie>> {
        match self {
            Listing::All => queries::list_movies(conn, false),
            Listing::Upcoming => queries::list_movies(conn, true),
            Listing::Search(term) => queries::search_movies(conn, term),
            Listing::WatchedBy(username) => queries::list_watched_movies(conn, username),
        }
    }
}

pub struct MovieLogic;

impl MovieLogic {
    /// Parse a `dd-mm-YYYY` date and store the movie. Returns the new id.
    pub fn add_movie(pool: &mut DbPool, title: &str, release_date: &str) -> AppResult<i64> {
        let release_timestamp = date::parse_release_date(release_date)?;

        let tx = pool.conn.transaction()?;
        let id = queries::add_movie(&tx, title, release_timestamp)?;
        ttlog_quiet(
            &tx,
            "add_movie",
            title,
            &format!("Added movie {id} '{title}' released {release_date}"),
        );
        tx.commit()?;

        Ok(id)
    }

    pub fn add_user(pool: &mut DbPool, username: &str) -> AppResult<()> {
        let tx = pool.conn.transaction()?;
        queries::add_user(&tx, username)?;
        ttlog_quiet(&tx, "add_user", username, "Registered user");
        tx.commit()?;
        Ok(())
    }

    /// `movie_id` is the text the user typed; it is not checked to be numeric.
    pub fn watch(pool: &mut DbPool, username: &str, movie_id: &str) -> AppResult<()> {
        let tx = pool.conn.transaction()?;
        queries::record_watch(&tx, username, movie_id)?;
        ttlog_quiet(&tx, "watch", username, &format!("Watched movie {movie_id}"));
        tx.commit()?;
        Ok(())
    }

    /// Load a listing and print it, or its "nothing found" message.
    /// Returns the number of movies printed.
    pub fn show<W: Write>(pool: &mut DbPool, listing: Listing<'_>, out: &mut W) -> AppResult<usize> {
        let movies = listing.load(&pool.conn)?;

        if movies.is_empty() {
            writeln!(out, "{}", listing.empty_message())?;
        } else {
            write_movie_list(out, &listing.heading(), &movies)?;
        }

        Ok(movies.len())
    }
}

/// Heading, one `id: title (on Mon DD YYYY)` line per movie, then a footer.
pub fn write_movie_list<W: Write>(out: &mut W, heading: &str, movies: &[Movie]) -> AppResult<()> {
    writeln!(out, "-- {heading} --")?;
    for movie in movies {
        writeln!(
            out,
            "{}: {} (on {})",
            movie.id,
            movie.title,
            movie.human_date()?
        )?;
    }
    writeln!(out, "---- \n")?;
    Ok(())
}
