use std::fmt;

/// Navigation target derived from a store identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Game(String),
    News(String),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Game(id) => write!(f, "/game/{}", id),
            Route::News(id) => write!(f, "/news/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_are_keyed_by_id() {
        assert_eq!(Route::Game("game4".to_string()).to_string(), "/game/game4");
        assert_eq!(Route::News("news1".to_string()).to_string(), "/news/news1");
    }
}
