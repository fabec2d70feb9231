//! Path-based page routing.
//!
//! A route table is an ordered list of `{pattern, page}` pairs. Patterns are
//! either exact (`/`, `/about`) or subtree patterns ending in `/*`, which
//! match their prefix and everything below it. The first matching route wins.

use std::collections::VecDeque;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Pages that can occupy the center region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Profile,
    Explore,
    Notifications,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Explore, Page::Notifications, Page::Profile];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Profile => "Profile",
            Page::Explore => "Explore",
            Page::Notifications => "Notifications",
        }
    }

    /// Path the left rail navigates to for this page.
    pub fn path(&self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Profile => "/profile",
            Page::Explore => "/explore",
            Page::Notifications => "/notifications",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub pattern: &'static str,
    pub page: Page,
}

impl Route {
    pub const fn new(pattern: &'static str, page: Page) -> Self {
        Self { pattern, page }
    }

    pub fn matches(&self, path: &str) -> bool {
        pattern_matches(self.pattern, path)
    }
}

/// The application's route table, in match order.
pub const ROUTES: [Route; 4] = [
    Route::new("/", Page::Home),
    Route::new("/profile/*", Page::Profile),
    Route::new("/explore/*", Page::Explore),
    Route::new("/notifications/*", Page::Notifications),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no route matches path `{0}`")]
    NoMatch(String),
}

/// Resolve `path` against `routes`, first match wins.
pub fn resolve(path: &str, routes: &[Route]) -> Result<Page, RouteError> {
    let page = routes
        .iter()
        .find(|route| route.matches(path))
        .map(|route| route.page)
        .ok_or_else(|| RouteError::NoMatch(path.to_string()))?;

    debug!(path, page = %page, "resolved route");
    Ok(page)
}

/// Drop query string and fragment, collapse trailing slashes, and map the
/// empty path to `/`.
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

fn pattern_matches(pattern: &str, path: &str) -> bool {
    let path = normalize(path);

    match pattern.strip_suffix("/*") {
        Some(prefix) => match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        },
        None => normalize(pattern) == path,
    }
}

/// Returns the part of `path` below a subtree pattern's prefix, without the
/// leading slash. `None` for exact patterns or non-matching paths.
pub fn subpath<'a>(pattern: &str, path: &'a str) -> Option<&'a str> {
    let prefix = pattern.strip_suffix("/*")?;
    let rest = normalize(path).strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest.trim_start_matches('/'))
    } else {
        None
    }
}

/// Entries kept by [`Navigator`]; older ones are forgotten.
pub const MAX_HISTORY: usize = 100;

/// Session navigation history.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: String,
    history: VecDeque<String>,
}

impl Navigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            current: start.into(),
            history: VecDeque::new(),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move to `path`. Returns false when already there.
    pub fn navigate(&mut self, path: impl Into<String>) -> bool {
        let path = path.into();
        if normalize(&path) == normalize(&self.current) {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, path);
        if self.history.len() == MAX_HISTORY {
            self.history.pop_front();
        }
        self.history.push_back(previous);
        true
    }

    /// Step back one entry. Returns false when there is no history.
    pub fn back(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}
