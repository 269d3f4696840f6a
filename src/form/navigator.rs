use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Destinations the sign-up flow can navigate to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    SignUp,
    Home,
    Terms,
    Privacy,
}

impl Route {
    /// Route identifier string
    pub fn as_str(&self) -> &'static str {
        match self {
            Route::SignUp => "/signup",
            Route::Home => "/home",
            Route::Terms => "./t_and_c",
            Route::Privacy => "./privacy",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "/signup" => Ok(Route::SignUp),
            "/home" => Ok(Route::Home),
            "./t_and_c" => Ok(Route::Terms),
            "./privacy" => Ok(Route::Privacy),
            other => Err(UnknownRoute(other.to_string())),
        }
    }
}

/// Performs a synchronous, fire-and-forget transition to a route
pub trait Navigator {
    fn navigate(&mut self, route: Route);
}
