/// Every action reachable from the main menu. The order of [`Command::MENU`]
/// is the order options are printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    AddMovie,
    AddActor,
    MoviesWithCast,
    UniqueGenres,
    CountByGenre,
    AverageBirthYear,
    SearchTitle,
    PagedTitles,
    NamesAndTitles,
    MovieAges,
    Exit,
}

impl Command {
    pub const MENU: [Command; 11] = [
        Command::AddMovie,
        Command::AddActor,
        Command::MoviesWithCast,
        Command::UniqueGenres,
        Command::CountByGenre,
        Command::AverageBirthYear,
        Command::SearchTitle,
        Command::PagedTitles,
        Command::NamesAndTitles,
        Command::MovieAges,
        Command::Exit,
    ];

    /// The token the user types to pick this command.
    pub fn token(self) -> &'static str {
        match self {
            Command::AddMovie => "1",
            Command::AddActor => "2",
            Command::MoviesWithCast => "3",
            Command::UniqueGenres => "4",
            Command::CountByGenre => "5",
            Command::AverageBirthYear => "6",
            Command::SearchTitle => "7",
            Command::PagedTitles => "8",
            Command::NamesAndTitles => "9",
            Command::MovieAges => "10",
            Command::Exit => "0",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::AddMovie => "Add a movie",
            Command::AddActor => "Add an actor",
            Command::MoviesWithCast => "Show all movies with their cast",
            Command::UniqueGenres => "Show unique genres",
            Command::CountByGenre => "Show movie count by genre",
            Command::AverageBirthYear => "Show average actor birth year for a genre",
            Command::SearchTitle => "Search movies by title",
            Command::PagedTitles => "Show movies (paginated)",
            Command::NamesAndTitles => "Show all actor names and movie titles",
            Command::MovieAges => "Show movie ages",
            Command::Exit => "Exit",
        }
    }

    /// Map a typed choice onto a command. Surrounding whitespace is ignored;
    /// anything else that is not an exact token yields `None`.
    pub fn parse(input: &str) -> Option<Command> {
        let token = input.trim();
        Command::MENU
            .into_iter()
            .find(|command| command.token() == token)
    }
}
