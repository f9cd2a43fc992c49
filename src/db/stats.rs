use crate::db::pool::DbPool;
use crate::db::queries::count_rows;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::format_iso_date;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();
    header("Database info");

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let (movies, users, watched) = count_rows(&pool.conn)?;
    println!("{}• Movies:{} {}{}{}", CYAN, RESET, GREEN, movies, RESET);
    println!("{}• Users:{} {}{}{}", CYAN, RESET, GREEN, users, RESET);
    println!("{}• Watch events:{} {}{}{}", CYAN, RESET, GREEN, watched, RESET);

    //
    // 3) RELEASE RANGE
    //
    let (first, last): (Option<f64>, Option<f64>) = pool.conn.query_row(
        "SELECT MIN(release_timestamp), MAX(release_timestamp) FROM movies",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let fmt = |ts: Option<f64>| -> AppResult<String> {
        match ts {
            Some(t) => format_iso_date(t),
            None => Ok(format!("{GREY}--{RESET}")),
        }
    };

    println!("{}• Release range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first)?);
    println!("    to:   {}", fmt(last)?);

    println!();
    Ok(())
}

/// `PRAGMA integrity_check` followed by `PRAGMA foreign_key_check`.
/// Returns the problems found; an empty list means the database is healthy.
pub fn check_integrity(pool: &mut DbPool) -> AppResult<Vec<String>> {
    let problems = pool.with_conn(|conn| {
        let mut out = Vec::new();

        let mut stmt = conn.prepare("PRAGMA integrity_check")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
        for r in rows {
            let line = r?;
            if line != "ok" {
                out.push(line);
            }
        }

        let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
        let rows = stmt.query_map([], |row| {
            let table: String = row.get(0)?;
            let rowid: Option<i64> = row.get(1)?;
            let parent: String = row.get(2)?;
            Ok(format!(
                "{table} row {} references a missing {parent} row",
                rowid.map(|r| r.to_string()).unwrap_or_else(|| "?".into())
            ))
        })?;
        for r in rows {
            out.push(r?);
        }

        Ok(out)
    })?;

    Ok(problems)
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.with_conn(|conn| conn.execute_batch("VACUUM"))?;
    Ok(())
}
