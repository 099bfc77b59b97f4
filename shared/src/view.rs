use std::fmt;

/// Every page the application can render. Routes can only point at one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    LandingPage,
    Home,
    Deutsch,
    Puzzle,
    Tetris,
    SnakeAndLadder,
    TicTacToe,
}

impl View {
    pub const ALL: [View; 7] = [
        View::LandingPage,
        View::Home,
        View::Deutsch,
        View::Puzzle,
        View::Tetris,
        View::SnakeAndLadder,
        View::TicTacToe,
    ];

    pub const GAMES: [View; 4] = [
        View::Puzzle,
        View::Tetris,
        View::SnakeAndLadder,
        View::TicTacToe,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            View::LandingPage => "LandingPage",
            View::Home => "Home",
            View::Deutsch => "Deutsch",
            View::Puzzle => "Puzzle",
            View::Tetris => "Tetris",
            View::SnakeAndLadder => "SnakeAndLadder",
            View::TicTacToe => "TicTacToe",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::LandingPage => "Welcome",
            View::Home => "Home",
            View::Deutsch => "Deutsch",
            View::Puzzle => "Puzzle",
            View::Tetris => "Tetris",
            View::SnakeAndLadder => "Snake and Ladder",
            View::TicTacToe => "Tic-Tac-Toe",
        }
    }

    pub fn is_game(&self) -> bool {
        Self::GAMES.contains(self)
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
