use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    UnmatchedPath(String),
    DuplicatePath(String),
    InvalidPath(String),
}

impl RouteError {
    pub fn path(&self) -> &str {
        match self {
            Self::UnmatchedPath(path) | Self::DuplicatePath(path) | Self::InvalidPath(path) => path,
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnmatchedPath(path) => write!(f, "No route matches path: {}", path),
            Self::DuplicatePath(path) => write!(f, "Path registered more than once: {}", path),
            Self::InvalidPath(path) => write!(f, "Invalid route path: {}", path),
        }
    }
}

impl std::error::Error for RouteError {}
