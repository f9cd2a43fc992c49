use movielist::db::initialize::{index_names, table_names};
use movielist::db::{
    add_movie, add_user, create_schema, list_movies, list_movies_released_after,
    list_watched_movies, record_watch, search_movies,
};
use movielist::errors::AppError;
use movielist::utils::date::{now_timestamp, parse_release_date};

mod common;
use common::{memory_pool, setup_test_db};

fn is_constraint_violation(err: &AppError) -> bool {
    matches!(
        err,
        AppError::Db(rusqlite::Error::SqliteFailure(e, _))
            if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

#[test]
fn test_create_schema_is_idempotent() {
    let pool = memory_pool();

    create_schema(&pool.conn).expect("second create_schema");
    create_schema(&pool.conn).expect("third create_schema");

    let tables = table_names(&pool.conn).unwrap();
    assert_eq!(tables, vec!["log", "movies", "users", "watched"]);

    let indexes = index_names(&pool.conn).unwrap();
    assert_eq!(indexes, vec!["idx_movies_release"]);
}

#[test]
fn test_schema_survives_reopen() {
    let db_path = setup_test_db("schema_reopen");

    {
        let pool = movielist::db::DbPool::new(&db_path).unwrap();
        create_schema(&pool.conn).unwrap();
        add_movie(&pool.conn, "Alien", 294_278_400.0).unwrap();
    }

    let pool = movielist::db::DbPool::new(&db_path).unwrap();
    create_schema(&pool.conn).unwrap();

    let movies = list_movies(&pool.conn, false).unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Alien");
}

#[test]
fn test_add_movie_then_list_all() {
    let pool = memory_pool();

    let first = add_movie(&pool.conn, "Heat", 817_776_000.0).unwrap();
    let second = add_movie(&pool.conn, "Ronin", 906_336_000.5).unwrap();
    assert_ne!(first, second);

    let movies = list_movies(&pool.conn, false).unwrap();
    assert_eq!(movies.len(), 2);

    let ronin = movies.iter().find(|m| m.id == second).expect("Ronin listed");
    assert_eq!(ronin.title, "Ronin");
    assert_eq!(ronin.release_timestamp, 906_336_000.5);
}

#[test]
fn test_list_movies_empty_database() {
    let pool = memory_pool();
    assert!(list_movies(&pool.conn, false).unwrap().is_empty());
    assert!(list_movies(&pool.conn, true).unwrap().is_empty());
}

#[test]
fn test_upcoming_excludes_past_and_exact_instant() {
    let pool = memory_pool();
    let instant = 1_750_000_000.0;

    add_movie(&pool.conn, "Past", instant - 86_400.0).unwrap();
    add_movie(&pool.conn, "Exactly now", instant).unwrap();
    let future = add_movie(&pool.conn, "Future", instant + 1.0).unwrap();

    let upcoming = list_movies_released_after(&pool.conn, instant).unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].id, future);
    assert!(upcoming[0].release_timestamp > instant);
}

#[test]
fn test_upcoming_uses_current_time() {
    let pool = memory_pool();
    let now = now_timestamp();

    add_movie(&pool.conn, "Yesterday", now - 86_400.0).unwrap();
    add_movie(&pool.conn, "Next year", now + 365.0 * 86_400.0).unwrap();

    let upcoming = list_movies(&pool.conn, true).unwrap();
    let titles: Vec<&str> = upcoming.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Next year"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let pool = memory_pool();

    add_movie(&pool.conn, "Inception", 1_279_238_400.0).unwrap();
    add_movie(&pool.conn, "Interstellar", 1_415_232_000.0).unwrap();
    add_movie(&pool.conn, "Dune", 1_634_860_800.0).unwrap();

    let found = search_movies(&pool.conn, "incep").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Inception");

    let found = search_movies(&pool.conn, "IN").unwrap();
    assert_eq!(found.len(), 2);

    assert!(search_movies(&pool.conn, "matrix").unwrap().is_empty());

    add_movie(&pool.conn, "Amélie", 988_675_200.0).unwrap();
    add_movie(&pool.conn, "ÉLITE SQUAD", 1_191_542_400.0).unwrap();

    let found = search_movies(&pool.conn, "AMÉLIE").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "Amélie");

    let found = search_movies(&pool.conn, "élite").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "ÉLITE SQUAD");
}

#[test]
fn test_search_empty_term_returns_everything() {
    let pool = memory_pool();

    add_movie(&pool.conn, "Heat", 817_776_000.0).unwrap();
    add_movie(&pool.conn, "Ronin", 906_336_000.0).unwrap();

    assert_eq!(search_movies(&pool.conn, "").unwrap().len(), 2);
}

#[test]
fn test_search_wildcards_match_literally() {
    let pool = memory_pool();

    add_movie(&pool.conn, "100% Wolf", 1_590_000_000.0).unwrap();
    add_movie(&pool.conn, "Up", 1_243_000_000.0).unwrap();
    add_movie(&pool.conn, "snake_case", 1_500_000_000.0).unwrap();

    let found = search_movies(&pool.conn, "%").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "100% Wolf");

    let found = search_movies(&pool.conn, "_").unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].title, "snake_case");
}

#[test]
fn test_watch_round_trip() {
    let pool = memory_pool();

    add_user(&pool.conn, "alice").unwrap();
    let release = parse_release_date("22-10-2021").unwrap();
    let dune = add_movie(&pool.conn, "Dune", release).unwrap();
    add_movie(&pool.conn, "Arrival", 1_478_822_400.0).unwrap();

    record_watch(&pool.conn, "alice", dune).unwrap();

    let watched = list_watched_movies(&pool.conn, "alice").unwrap();
    assert_eq!(watched.len(), 1);
    assert_eq!(watched[0].id, dune);
    assert_eq!(watched[0].title, "Dune");
    assert_eq!(watched[0].release_timestamp, release);
}

#[test]
fn test_watch_twice_records_two_rows() {
    let pool = memory_pool();

    add_user(&pool.conn, "alice").unwrap();
    let id = add_movie(&pool.conn, "Dune", 1_634_860_800.0).unwrap();

    record_watch(&pool.conn, "alice", id).unwrap();
    record_watch(&pool.conn, "alice", id).unwrap();

    let watched = list_watched_movies(&pool.conn, "alice").unwrap();
    assert_eq!(watched.len(), 2);
    assert!(watched.iter().all(|m| m.id == id));
}

#[test]
fn test_watch_accepts_numeric_text_id() {
    let pool = memory_pool();

    add_user(&pool.conn, "alice").unwrap();
    let id = add_movie(&pool.conn, "Dune", 1_634_860_800.0).unwrap();

    record_watch(&pool.conn, "alice", id.to_string().as_str()).unwrap();

    let watched = list_watched_movies(&pool.conn, "alice").unwrap();
    assert_eq!(watched.len(), 1);
    assert_eq!(watched[0].id, id);
}

#[test]
fn test_watch_rejects_dangling_references() {
    let pool = memory_pool();

    add_user(&pool.conn, "alice").unwrap();
    let id = add_movie(&pool.conn, "Dune", 1_634_860_800.0).unwrap();

    let err = record_watch(&pool.conn, "ghost", id).unwrap_err();
    assert!(is_constraint_violation(&err), "unexpected error: {err}");

    let err = record_watch(&pool.conn, "alice", id + 100).unwrap_err();
    assert!(is_constraint_violation(&err), "unexpected error: {err}");

    let err = record_watch(&pool.conn, "alice", "abc").unwrap_err();
    assert!(is_constraint_violation(&err), "unexpected error: {err}");

    assert!(list_watched_movies(&pool.conn, "alice").unwrap().is_empty());
}

#[test]
fn test_duplicate_user_fails_with_uniqueness_violation() {
    let pool = memory_pool();

    add_user(&pool.conn, "bob").unwrap();
    let err = add_user(&pool.conn, "bob").unwrap_err();

    assert!(is_constraint_violation(&err), "unexpected error: {err}");
    assert!(err.to_string().contains("UNIQUE constraint failed"));
}

#[test]
fn test_watched_for_unknown_or_idle_user_is_empty() {
    let pool = memory_pool();

    add_user(&pool.conn, "carol").unwrap();
    add_movie(&pool.conn, "Heat", 817_776_000.0).unwrap();

    assert!(list_watched_movies(&pool.conn, "nobody").unwrap().is_empty());
    assert!(list_watched_movies(&pool.conn, "carol").unwrap().is_empty());
}
