pub mod export;
pub mod log;
pub mod menu;
pub mod movies;
