use crate::config::Config;
use crate::core::menu::{MenuSession, WELCOME};
use crate::db::initialize::create_schema;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::io;

/// Banner, schema check, then the menu loop on stdin/stdout.
pub fn handle(cfg: &Config) -> AppResult<()> {
    println!("{WELCOME}");

    let mut pool = DbPool::new(&cfg.database)?;
    create_schema(&pool.conn)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    MenuSession::new(&mut pool, stdin.lock(), stdout.lock()).run()
}
