//! Navigation targets of the booking front-end.
//!
//! ```text
//! /                 → Catalog
//! /suite/:id        → SuiteDetail
//! /checkout         → Checkout
//! /confirmation     → Confirmation
//! /auth             → Auth (placeholder)
//! anything else     → NotFound
//! ```

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "route", content = "param", rename_all = "snake_case")]
pub enum Route {
    Catalog,
    SuiteDetail(String),
    Checkout,
    Confirmation,
    Auth,
    NotFound(String),
}

impl Route {
    /// Resolves a path. Query strings and trailing slashes are ignored.
    pub fn parse(path: &str) -> Route {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');

        match trimmed {
            "" => Route::Catalog,
            "/checkout" => Route::Checkout,
            "/confirmation" => Route::Confirmation,
            "/auth" => Route::Auth,
            other => match other.strip_prefix("/suite/") {
                Some(id) if !id.is_empty() && !id.contains('/') => {
                    Route::SuiteDetail(id.to_string())
                }
                _ => Route::NotFound(path.to_string()),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::SuiteDetail(id) => format!("/suite/{id}"),
            Route::Checkout => "/checkout".to_string(),
            Route::Confirmation => "/confirmation".to_string(),
            Route::Auth => "/auth".to_string(),
            Route::NotFound(path) => path.clone(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Catalog);
        assert_eq!(Route::parse(""), Route::Catalog);
        assert_eq!(Route::parse("/checkout/"), Route::Checkout);
        assert_eq!(Route::parse("/confirmation?ref=mail"), Route::Confirmation);
        assert_eq!(Route::parse("/auth"), Route::Auth);
        assert_eq!(
            Route::parse("/suite/suite-3"),
            Route::SuiteDetail("suite-3".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("/suite/"), Route::NotFound("/suite/".to_string()));
        assert_eq!(
            Route::parse("/suite/a/b"),
            Route::NotFound("/suite/a/b".to_string())
        );
        assert_eq!(Route::parse("/spa"), Route::NotFound("/spa".to_string()));
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/suite/suite-1", "/checkout", "/confirmation", "/auth"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }
}
