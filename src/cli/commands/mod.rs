pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod menu;
pub mod movies;
