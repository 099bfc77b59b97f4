use std::collections::HashSet;

use crate::constants::ROOT_PATH;
use crate::error::RouteError;
use crate::validation::validate_route_path;
use crate::view::View;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub view: View,
}

impl Route {
    pub const fn new(path: &'static str, view: View) -> Self {
        Self { path, view }
    }
}

/// Paths are matched verbatim. The mixed casing (`/puzzle` next to `/Tetris`)
/// is what is already bookmarked, so it stays as is.
pub const APP_ROUTES: [Route; 7] = [
    Route::new("/", View::LandingPage),
    Route::new("/home", View::Home),
    Route::new("/deutsch", View::Deutsch),
    Route::new("/puzzle", View::Puzzle),
    Route::new("/Tetris", View::Tetris),
    Route::new("/SnakeAndLadder", View::SnakeAndLadder),
    Route::new("/TicTacToe", View::TicTacToe),
];

/// An ordered, immutable mapping from literal paths to views.
///
/// Built once at startup and shared by reference. Lookups are exact and
/// case-sensitive, so `/tetris` does not reach `/Tetris`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Rejects the table if any path appears twice or is not absolute.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteError> {
        let mut seen = HashSet::with_capacity(routes.len());
        for route in &routes {
            validate_route_path(route.path)?;
            if !seen.insert(route.path) {
                return Err(RouteError::DuplicatePath(route.path.to_string()));
            }
        }
        log::debug!("Route table built with {} routes", routes.len());
        Ok(Self { routes })
    }

    pub fn app_routes() -> Result<Self, RouteError> {
        Self::new(APP_ROUTES.to_vec())
    }

    pub fn resolve(&self, path: &str) -> Result<View, RouteError> {
        self.routes
            .iter()
            .find(|route| route.path == path)
            .map(|route| route.view)
            .ok_or_else(|| RouteError::UnmatchedPath(path.to_string()))
    }

    /// Resolves a browser pathname served under `base`. Misses report the full pathname.
    pub fn resolve_location(&self, base: &str, pathname: &str) -> Result<View, RouteError> {
        strip_base(base, pathname)
            .and_then(|path| self.resolve(path).ok())
            .ok_or_else(|| RouteError::UnmatchedPath(pathname.to_string()))
    }

    /// First path registered for `view`.
    pub fn path_of(&self, view: View) -> Option<&'static str> {
        self.routes
            .iter()
            .find(|route| route.view == view)
            .map(|route| route.path)
    }

    pub fn href(&self, base: &str, view: View) -> Option<String> {
        let path = self.path_of(view)?;
        Some(if base == ROOT_PATH {
            path.to_string()
        } else if path == ROOT_PATH {
            base.to_string()
        } else {
            format!("{}{}", base, path)
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

pub fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        ROOT_PATH.to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

/// Strips a normalized `base` from `pathname`, only at a segment boundary.
pub fn strip_base<'a>(base: &str, pathname: &'a str) -> Option<&'a str> {
    if base == ROOT_PATH {
        return Some(pathname);
    }
    let rest = pathname.strip_prefix(base)?;
    if rest.is_empty() {
        Some(ROOT_PATH)
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPECTED: [(&str, View); 7] = [
        ("/", View::LandingPage),
        ("/home", View::Home),
        ("/deutsch", View::Deutsch),
        ("/puzzle", View::Puzzle),
        ("/Tetris", View::Tetris),
        ("/SnakeAndLadder", View::SnakeAndLadder),
        ("/TicTacToe", View::TicTacToe),
    ];

    fn app_table() -> RouteTable {
        RouteTable::app_routes().unwrap()
    }

    #[test]
    fn test_app_routes_go_through_construction_checks() {
        let table = RouteTable::app_routes().unwrap();
        assert_eq!(table.routes(), &APP_ROUTES[..]);
        assert_eq!(table.len(), 7);
    }

    #[test]
    fn test_each_path_resolves_to_its_view_only() {
        let table = app_table();
        for (path, view) in EXPECTED {
            assert_eq!(table.resolve(path), Ok(view));
            for (_, other) in EXPECTED.iter().filter(|(p, _)| *p != path) {
                assert_ne!(table.resolve(path), Ok(*other));
            }
        }
    }

    #[test]
    fn test_every_view_is_routed() {
        let table = app_table();
        for view in View::ALL {
            assert!(table.path_of(view).is_some(), "{view} has no route");
        }
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let table = app_table();
        for path in ["/tetris", "/TETRIS", "/Puzzle", "/HOME", "/snakeandladder", "/tictactoe", "/Deutsch"] {
            assert_eq!(table.resolve(path), Err(RouteError::UnmatchedPath(path.to_string())));
        }
    }

    #[test]
    fn test_unregistered_path_is_unmatched() {
        let table = app_table();
        assert_eq!(
            table.resolve("/nonexistent"),
            Err(RouteError::UnmatchedPath("/nonexistent".to_string()))
        );
        assert!(table.resolve("").is_err());
        assert!(table.resolve("/home/").is_err());
        assert!(table.resolve("/home?tab=1").is_err());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = app_table();
        let before = table.clone();
        let first = table.resolve("/Tetris");
        let second = table.resolve("/Tetris");
        assert_eq!(first, second);
        assert_eq!(table.resolve("/missing"), table.resolve("/missing"));
        assert_eq!(table, before);
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let result = RouteTable::new(vec![
            Route::new("/home", View::Home),
            Route::new("/puzzle", View::Puzzle),
            Route::new("/home", View::Deutsch),
        ]);
        assert_eq!(result, Err(RouteError::DuplicatePath("/home".to_string())));
    }

    #[test]
    fn test_case_variants_are_distinct_paths() {
        let table = RouteTable::new(vec![
            Route::new("/tetris", View::Puzzle),
            Route::new("/Tetris", View::Tetris),
        ])
        .unwrap();
        assert_eq!(table.resolve("/tetris"), Ok(View::Puzzle));
        assert_eq!(table.resolve("/Tetris"), Ok(View::Tetris));
    }

    #[test]
    fn test_relative_path_rejected() {
        let result = RouteTable::new(vec![Route::new("home", View::Home)]);
        assert_eq!(result, Err(RouteError::InvalidPath("home".to_string())));
    }

    #[test]
    fn test_unusual_literal_paths_build_and_match_exactly() {
        for path in ["/home/", "/spiel.html", "/%C3%BCber", "/a~b"] {
            let table = RouteTable::new(vec![Route::new(path, View::Home)]).unwrap();
            assert_eq!(table.resolve(path), Ok(View::Home));
        }
        let table = RouteTable::new(vec![Route::new("/home/", View::Home)]).unwrap();
        assert!(table.resolve("/home").is_err());
    }

    #[test]
    fn test_default_table_is_empty() {
        assert!(RouteTable::default().is_empty());
    }

    #[test]
    fn test_alias_resolves_and_path_of_prefers_first() {
        let table = RouteTable::new(vec![
            Route::new("/start", View::Home),
            Route::new("/home", View::Home),
        ])
        .unwrap();
        assert_eq!(table.resolve("/start"), Ok(View::Home));
        assert_eq!(table.resolve("/home"), Ok(View::Home));
        assert_eq!(table.path_of(View::Home), Some("/start"));
        assert_eq!(table.path_of(View::Tetris), None);
    }

    #[test]
    fn test_empty_table() {
        let table = RouteTable::new(Vec::new()).unwrap();
        assert!(table.is_empty());
        assert!(table.resolve("/").is_err());
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base(""), "/");
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("  "), "/");
        assert_eq!(normalize_base("app"), "/app");
        assert_eq!(normalize_base("/app/"), "/app");
        assert_eq!(normalize_base("/games/hub//"), "/games/hub");
    }

    #[test]
    fn test_strip_base_respects_segments() {
        assert_eq!(strip_base("/", "/home"), Some("/home"));
        assert_eq!(strip_base("/app", "/app"), Some("/"));
        assert_eq!(strip_base("/app", "/app/Tetris"), Some("/Tetris"));
        assert_eq!(strip_base("/app", "/apphome"), None);
        assert_eq!(strip_base("/app", "/home"), None);
    }

    #[test]
    fn test_resolve_location_under_base() {
        let table = app_table();
        assert_eq!(table.resolve_location("/app", "/app"), Ok(View::LandingPage));
        assert_eq!(table.resolve_location("/app", "/app/TicTacToe"), Ok(View::TicTacToe));
        assert_eq!(
            table.resolve_location("/app", "/TicTacToe"),
            Err(RouteError::UnmatchedPath("/TicTacToe".to_string()))
        );
        assert_eq!(
            table.resolve_location("/app", "/app/nope"),
            Err(RouteError::UnmatchedPath("/app/nope".to_string()))
        );
        assert_eq!(table.resolve_location("/", "/puzzle"), Ok(View::Puzzle));
    }

    #[test]
    fn test_href_prefixes_base() {
        let table = app_table();
        assert_eq!(table.href("/", View::Tetris).as_deref(), Some("/Tetris"));
        assert_eq!(table.href("/", View::LandingPage).as_deref(), Some("/"));
        assert_eq!(table.href("/app", View::Tetris).as_deref(), Some("/app/Tetris"));
        assert_eq!(table.href("/app", View::LandingPage).as_deref(), Some("/app"));
    }

    #[test]
    fn test_href_round_trips_through_resolve_location() {
        let table = app_table();
        for base in ["/", "/app"] {
            for view in View::ALL {
                let href = table.href(base, view).unwrap();
                assert_eq!(table.resolve_location(base, &href), Ok(view));
            }
        }
    }
}
