use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::initialize::create_schema;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use std::io;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        upcoming,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        create_schema(&pool.conn)?;

        let stdin = io::stdin();
        let written = ExportLogic::export(
            &mut pool,
            *format,
            file,
            *upcoming,
            *force,
            &mut stdin.lock(),
        )?;

        if written > 0 {
            ttlog_quiet(
                &pool.conn,
                "export",
                format.as_str(),
                &format!("Exported {written} movie(s) to {file}"),
            );
        }
    }
    Ok(())
}
