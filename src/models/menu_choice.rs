/// One entry of the interactive main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddMovie,
    UpcomingMovies,
    AllMovies,
    WatchMovie,
    WatchedMovies,
    AddUser,
    SearchMovies,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 8] = [
        MenuChoice::AddMovie,
        MenuChoice::UpcomingMovies,
        MenuChoice::AllMovies,
        MenuChoice::WatchMovie,
        MenuChoice::WatchedMovies,
        MenuChoice::AddUser,
        MenuChoice::SearchMovies,
        MenuChoice::Exit,
    ];

    /// Exact match on the selection digit. Whitespace, signs or leading
    /// zeros are not accepted.
    pub fn from_input(s: &str) -> Option<Self> {
        match s {
            "1" => Some(Self::AddMovie),
            "2" => Some(Self::UpcomingMovies),
            "3" => Some(Self::AllMovies),
            "4" => Some(Self::WatchMovie),
            "5" => Some(Self::WatchedMovies),
            "6" => Some(Self::AddUser),
            "7" => Some(Self::SearchMovies),
            "8" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            MenuChoice::AddMovie => '1',
            MenuChoice::UpcomingMovies => '2',
            MenuChoice::AllMovies => '3',
            MenuChoice::WatchMovie => '4',
            MenuChoice::WatchedMovies => '5',
            MenuChoice::AddUser => '6',
            MenuChoice::SearchMovies => '7',
            MenuChoice::Exit => '8',
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddMovie => "Add new movie.",
            MenuChoice::UpcomingMovies => "View upcoming movies.",
            MenuChoice::AllMovies => "View all movies.",
            MenuChoice::WatchMovie => "Watch a movie.",
            MenuChoice::WatchedMovies => "View watched movies.",
            MenuChoice::AddUser => "Add user to the app.",
            MenuChoice::SearchMovies => "Search for a movie.",
            MenuChoice::Exit => "Exit.",
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, MenuChoice::Exit)
    }
}
