use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::create_schema;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success};
use crate::utils::colors::{CYAN, GREEN, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        create_schema(&pool.conn)?;

        //
        // 1) INFO
        //
        if *show_info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Checking database integrity…{}", CYAN, RESET);
            let problems = stats::check_integrity(&mut pool)?;
            if problems.is_empty() {
                success("Database integrity OK.");
            } else {
                for p in &problems {
                    error(p);
                }
                error(format!("{} problem(s) found.", problems.len()));
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            stats::vacuum(&mut pool)?;
            ttlog_quiet(&pool.conn, "vacuum", "", "Database optimized");
            println!("{}✔ Database optimized.{}", GREEN, RESET);
        }

        if !*show_info && !*check && !*vacuum {
            info("Nothing to do: use --info, --check or --vacuum.");
        }
    }

    Ok(())
}
