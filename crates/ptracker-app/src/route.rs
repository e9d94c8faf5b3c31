//! Client-side routes
//!
//! Each route maps to one screen. Routes are written the way the web
//! client spells them, so `ptracker /promise-card/3` opens the same view
//! as `/promise-card/3` did in the browser.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use ptracker_core::prelude::*;
use ptracker_core::CandidateId;

static ROUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^/(?:(?P<id>\d+)|(?P<page>about|politicians|contact|login)|promise-card/(?P<card>\d+))?/?$")
        .expect("Invalid route regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Candidate dashboard. `None` shows the first candidate on record.
    Home { candidate_id: Option<CandidateId> },
    About,
    Politicians,
    Contact,
    Login,
    /// Scorecard for one candidate
    PromiseCard { candidate_id: CandidateId },
}

impl Default for Route {
    fn default() -> Self {
        Route::Home { candidate_id: None }
    }
}

/// Navbar entries in display order
pub const NAV_ITEMS: [(&str, Route); 5] = [
    ("Home", Route::Home { candidate_id: None }),
    ("About Us", Route::About),
    ("Politicians", Route::Politicians),
    ("Contact Us", Route::Contact),
    ("Login/Signup", Route::Login),
];

impl Route {
    pub fn parse(path: &str) -> Result<Self> {
        let trimmed = path.trim();
        let normalized = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };

        let caps = ROUTE_PATTERN
            .captures(&normalized)
            .ok_or_else(|| Error::invalid_route(path))?;

        if let Some(id) = caps.name("id") {
            let id = parse_id(id.as_str(), path)?;
            return Ok(Route::Home {
                candidate_id: Some(id),
            });
        }
        if let Some(card) = caps.name("card") {
            return Ok(Route::PromiseCard {
                candidate_id: parse_id(card.as_str(), path)?,
            });
        }
        Ok(match caps.name("page").map(|m| m.as_str()) {
            Some("about") => Route::About,
            Some("politicians") => Route::Politicians,
            Some("contact") => Route::Contact,
            Some("login") => Route::Login,
            _ => Route::default(),
        })
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home { candidate_id: None } => "/".to_string(),
            Route::Home {
                candidate_id: Some(id),
            } => format!("/{id}"),
            Route::About => "/about".to_string(),
            Route::Politicians => "/politicians".to_string(),
            Route::Contact => "/contact".to_string(),
            Route::Login => "/login".to_string(),
            Route::PromiseCard { candidate_id } => format!("/promise-card/{candidate_id}"),
        }
    }

    /// Index of the navbar entry this route belongs to
    pub fn nav_index(&self) -> Option<usize> {
        match self {
            Route::Home { .. } => Some(0),
            Route::About => Some(1),
            Route::Politicians => Some(2),
            Route::Contact => Some(3),
            Route::Login => Some(4),
            Route::PromiseCard { .. } => None,
        }
    }

    /// Route behind navbar shortcut `n` (1-based)
    pub fn from_nav_number(n: usize) -> Option<Self> {
        n.checked_sub(1)
            .and_then(|i| NAV_ITEMS.get(i))
            .map(|(_, route)| *route)
    }

    /// Candidate this route is about, if any
    pub fn candidate_id(&self) -> Option<CandidateId> {
        match self {
            Route::Home { candidate_id } => *candidate_id,
            Route::PromiseCard { candidate_id } => Some(*candidate_id),
            _ => None,
        }
    }
}

fn parse_id(raw: &str, path: &str) -> Result<CandidateId> {
    raw.parse().map_err(|_| Error::invalid_route(path))
}

impl FromStr for Route {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
