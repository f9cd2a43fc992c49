pub mod functions;
pub mod initialize;
pub mod log;
pub mod pool;
pub mod queries;
pub mod stats;

pub use initialize::create_schema;
pub use pool::DbPool;
pub use queries::{
    add_movie, add_user, list_movies, list_movies_released_after, list_watched_movies,
    record_watch, search_movies,
};
