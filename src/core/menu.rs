//! Interactive main menu.
//!
//! A single state ("awaiting selection") that loops until `8` is entered.
//! Input and output are generic so the same loop runs on stdin/stdout and
//! on in-memory buffers.

use crate::core::movies::{Listing, MovieLogic};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::menu_choice::MenuChoice;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the Movie List app";
pub const INVALID_INPUT: &str = "Invalid input, please try again!";

/// Full menu text, ending with the selection prompt.
pub fn menu_text() -> String {
    let mut s = String::from(" Please select one of the following options:\n");
    for choice in MenuChoice::ALL {
        s.push_str(&format!("{}) {}\n", choice.key(), choice.label()));
    }
    s.push_str("\n\nYour selection: ");
    s
}

pub struct MenuSession<'a, R: BufRead, W: Write> {
    pool: &'a mut DbPool,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W> {
    pub fn new(pool: &'a mut DbPool, input: R, out: W) -> Self {
        Self { pool, input, out }
    }

    /// Loop until the user exits. End of input at the selection prompt is
    /// treated as an exit.
    pub fn run(&mut self) -> AppResult<()> {
        let menu = menu_text();

        loop {
            write!(self.out, "{menu}")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            match MenuChoice::from_input(&line) {
                Some(MenuChoice::Exit) => break,
                Some(choice) => self.dispatch(choice)?,
                None => writeln!(self.out, "{INVALID_INPUT}")?,
            }
        }

        self.out.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> AppResult<()> {
        match choice {
            MenuChoice::AddMovie => self.add_movie(),
            MenuChoice::UpcomingMovies => self.show(Listing::Upcoming),
            MenuChoice::AllMovies => self.show(Listing::All),
            MenuChoice::WatchMovie => self.watch_movie(),
            MenuChoice::WatchedMovies => self.show_watched(),
            MenuChoice::AddUser => self.add_user(),
            MenuChoice::SearchMovies => self.search(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_movie(&mut self) -> AppResult<()> {
        let title = self.prompt("Movie title: ")?;
        let release_date = self.prompt("Release date (dd-mm-YYYY): ")?;
        MovieLogic::add_movie(self.pool, &title, &release_date)?;
        Ok(())
    }

    fn watch_movie(&mut self) -> AppResult<()> {
        let username = self.prompt("Username: ")?;
        let movie_id = self.prompt("Movie ID: ")?;
        MovieLogic::watch(self.pool, &username, &movie_id)
    }

    fn add_user(&mut self) -> AppResult<()> {
        let username = self.prompt("Username: ")?;
        MovieLogic::add_user(self.pool, &username)
    }

    fn show_watched(&mut self) -> AppResult<()> {
        let username = self.prompt("Username: ")?;
        self.show(Listing::WatchedBy(&username))
    }

    fn search(&mut self) -> AppResult<()> {
        let term = self.prompt("Enter the partial movie title: ")?;
        self.show(Listing::Search(&term))
    }

    fn show(&mut self, listing: Listing<'_>) -> AppResult<()> {
        MovieLogic::show(self.pool, listing, &mut self.out)?;
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> AppResult<String> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        self.read_line()?
            .ok_or_else(|| AppError::InputClosed(label.trim_end_matches([':', ' ']).to_string()))
    }

    /// One line without its line terminator, or None at end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        Ok(Some(buf))
    }
}
