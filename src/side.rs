use serde::{Deserialize, Serialize};

/// One value per side of a game. Row order is always away, then home.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeAway<T> {
    pub away: T,
    pub home: T,
}

impl<T> HomeAway<T> {
    pub const LABELS: [&'static str; 2] = ["away", "home"];

    pub fn new(away: T, home: T) -> Self {
        Self { away, home }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, mut f: F) -> HomeAway<U> {
        HomeAway {
            away: f(self.away),
            home: f(self.home),
        }
    }

    pub fn as_ref(&self) -> HomeAway<&T> {
        HomeAway {
            away: &self.away,
            home: &self.home,
        }
    }

    /// `("away", away), ("home", home)`.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &T)> + '_ {
        Self::LABELS.into_iter().zip([&self.away, &self.home])
    }
}

impl<T, E> HomeAway<Result<T, E>> {
    /// Both sides or the first error (away checked first).
    pub fn transpose(self) -> Result<HomeAway<T>, E> {
        Ok(HomeAway {
            away: self.away?,
            home: self.home?,
        })
    }
}
