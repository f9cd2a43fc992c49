use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::movies::{Listing, MovieLogic};
use crate::db::initialize::create_schema;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::io;

fn open(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    create_schema(&pool.conn)?;
    Ok(pool)
}

/// One-shot versions of the menu entries.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::AddMovie {
            title,
            release_date,
        } => {
            let mut pool = open(cfg)?;
            let id = MovieLogic::add_movie(&mut pool, title, release_date)?;
            success(format!("Added movie {id}: {title}"));
        }

        Commands::AddUser { username } => {
            let mut pool = open(cfg)?;
            MovieLogic::add_user(&mut pool, username)?;
            success(format!("Added user {username}"));
        }

        Commands::Watch { username, movie_id } => {
            let mut pool = open(cfg)?;
            MovieLogic::watch(&mut pool, username, movie_id)?;
            success(format!("{username} watched movie {movie_id}"));
        }

        Commands::List { upcoming } => {
            let listing = if *upcoming {
                Listing::Upcoming
            } else {
                Listing::All
            };
            show(cfg, listing)?;
        }

        Commands::Search { term } => show(cfg, Listing::Search(term))?,

        Commands::Watched { username } => show(cfg, Listing::WatchedBy(username))?,

        _ => {}
    }

    Ok(())
}

fn show(cfg: &Config, listing: Listing<'_>) -> AppResult<()> {
    let mut pool = open(cfg)?;
    let stdout = io::stdout();
    MovieLogic::show(&mut pool, listing, &mut stdout.lock())?;
    Ok(())
}
