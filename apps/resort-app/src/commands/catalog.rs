//! Catalog commands: browsing suites.

use resort_core::{catalog, Suite};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppConfig;

/// One card on the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuiteSummary {
    pub id: String,
    pub name: String,
    pub sleeps: u32,
    pub price_per_night: i64,
    /// e.g. `$425`
    pub price_label: String,
    pub image: String,
    /// Where the card links to.
    pub link: String,
}

impl SuiteSummary {
    pub fn from_suite(suite: &Suite, config: &AppConfig) -> Self {
        SuiteSummary {
            id: suite.id.clone(),
            name: suite.name.clone(),
            sleeps: suite.sleeps,
            price_per_night: suite.price_per_night,
            price_label: config.format_currency(suite.nightly_rate()),
            image: suite.image.clone(),
            link: format!("/suite/{}", suite.id),
        }
    }
}

/// Lists every suite in catalog order.
pub fn list_suites(config: &AppConfig) -> Vec<SuiteSummary> {
    debug!("list_suites command");
    catalog::all()
        .iter()
        .map(|suite| SuiteSummary::from_suite(suite, config))
        .collect()
}

/// Full details for one suite.
pub fn get_suite(id: &str) -> Result<Suite, ApiError> {
    debug!(id, "get_suite command");
    Ok(catalog::get(id)?.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_list_suites() {
        let suites = list_suites(&AppConfig::default());
        assert_eq!(suites.len(), 6);
        assert_eq!(suites[0].name, "Ocean Breeze Suite");
        assert_eq!(suites[0].price_label, "$425");
        assert_eq!(suites[0].link, "/suite/suite-1");
    }

    #[test]
    fn test_get_suite() {
        assert_eq!(get_suite("suite-6").unwrap().name, "Sunset Vista Suite");

        let err = get_suite("nope").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
