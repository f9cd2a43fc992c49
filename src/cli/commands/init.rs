use crate::config::Config;
use crate::db::initialize::create_schema;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create (or confirm) the schema.
pub fn handle(cfg: &Config) -> AppResult<()> {
    info(format!("Initializing database at {}", cfg.database));

    let pool = DbPool::new(&cfg.database)?;
    create_schema(&pool.conn)?;

    ttlog_quiet(
        &pool.conn,
        "init",
        "",
        &format!("Schema ensured at {}", cfg.database),
    );

    success(format!("Database ready at {}", cfg.database));
    Ok(())
}
