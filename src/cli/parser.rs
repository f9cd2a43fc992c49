use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for movielist.
/// Without a subcommand the interactive menu starts.
#[derive(Parser)]
#[command(
    name = "movielist",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small movie tracker: add movies and users, mark movies watched, search and list them using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override the database path (otherwise DATABASE_URL is required)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,

    /// Create the database schema if it is missing
    Init,

    /// Add a movie with its release date
    AddMovie {
        title: String,

        /// Release date (dd-mm-YYYY)
        release_date: String,
    },

    /// Register a user
    AddUser { username: String },

    /// Record that a user watched a movie
    Watch {
        username: String,

        /// Movie id, passed to the database as typed
        movie_id: String,
    },

    /// List all movies, or only upcoming ones
    List {
        #[arg(long, short, help = "Show only movies released after now")]
        upcoming: bool,
    },

    /// Search movies by partial title (case-insensitive)
    Search {
        #[arg(default_value = "")]
        term: String,
    },

    /// Show the movies a user has watched
    Watched { username: String },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Database maintenance (integrity checks, vacuum, info)
    Db {
        #[arg(long = "check", help = "Check database and foreign key integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Export the movie list
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Export only upcoming movies")]
        upcoming: bool,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
