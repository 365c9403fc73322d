//! Canonical category and location names from the job-filter API.
//!
//! The upstream API returns a point-in-time snapshot of every known job
//! category and of every province with its cities. Path slugs are resolved
//! back to these canonical display names by normalizing each candidate and
//! comparing, in the order the upstream delivered them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::utils::slugify;

/// A province and the cities it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Province {
    pub name: String,
    pub cities: Vec<String>,
}

/// Snapshot of the candidate name sets, order-preserving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterData {
    pub categories: Vec<String>,
    pub provinces: Vec<Province>,
}

/// Which location namespace a slug resolved into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    Province,
    City,
}

/// A resolved location name with its namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationMatch {
    pub name: String,
    pub kind: LocationKind,
}

/// Find the canonical category whose slug equals `slug`.
///
/// Candidates are scanned in their given order and the first match wins;
/// slugs are lossy, so two names sharing a slug resolve to whichever the
/// upstream listed first.
pub fn match_category<'a>(slug: &str, categories: &'a [String]) -> Option<&'a str> {
    categories
        .iter()
        .find(|name| slugify(name) == slug)
        .map(String::as_str)
}

/// Find the canonical location whose slug equals `slug`.
///
/// All province names are scanned before any city, so a slug shared by a
/// province and a city always resolves to the province. Within the city scan,
/// provinces and their city lists are walked in given order.
pub fn match_location(slug: &str, provinces: &[Province]) -> Option<LocationMatch> {
    if let Some(province) = provinces.iter().find(|p| slugify(&p.name) == slug) {
        return Some(LocationMatch {
            name: province.name.clone(),
            kind: LocationKind::Province,
        });
    }

    for province in provinces {
        if let Some(city) = province.cities.iter().find(|c| slugify(c) == slug) {
            return Some(LocationMatch {
                name: city.clone(),
                kind: LocationKind::City,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_provinces() -> Vec<Province> {
        vec![
            Province {
                name: "Jawa Barat".to_string(),
                cities: vec!["Bandung".to_string(), "Bekasi".to_string()],
            },
            Province {
                name: "DKI Jakarta".to_string(),
                cities: vec!["Jakarta Selatan".to_string(), "Jakarta Barat".to_string()],
            },
        ]
    }

    #[test]
    fn category_resolves_by_slug() {
        let categories = vec!["Teknologi Informasi".to_string(), "Pemasaran".to_string()];
        assert_eq!(
            match_category("teknologi-informasi", &categories),
            Some("Teknologi Informasi")
        );
        assert_eq!(match_category("pemasaran", &categories), Some("Pemasaran"));
    }

    #[test]
    fn unknown_category_slug_is_none() {
        let categories = vec!["Teknologi Informasi".to_string()];
        assert_eq!(match_category("unknown-slug", &categories), None);
    }

    #[test]
    fn province_resolves_before_cities() {
        let matched = match_location("jawa-barat", &sample_provinces()).unwrap();
        assert_eq!(matched.name, "Jawa Barat");
        assert_eq!(matched.kind, LocationKind::Province);
    }

    #[test]
    fn city_resolves_within_owning_province() {
        let matched = match_location("bandung", &sample_provinces()).unwrap();
        assert_eq!(matched.name, "Bandung");
        assert_eq!(matched.kind, LocationKind::City);

        let matched = match_location("jakarta-selatan", &sample_provinces()).unwrap();
        assert_eq!(matched.name, "Jakarta Selatan");
        assert_eq!(matched.kind, LocationKind::City);
    }

    #[test]
    fn unknown_location_slug_is_none() {
        assert_eq!(match_location("sumatera-utara", &sample_provinces()), None);
    }

    // Pins the precedence when a province and a city share a slug: the
    // province scan runs first, so the province wins.
    #[test]
    fn province_wins_slug_collision() {
        let provinces = vec![
            Province {
                name: "Yogyakarta".to_string(),
                cities: vec![],
            },
            Province {
                name: "DI Yogyakarta".to_string(),
                cities: vec!["Yogyakarta".to_string()],
            },
        ];

        let matched = match_location("yogyakarta", &provinces).unwrap();
        assert_eq!(matched.name, "Yogyakarta");
        assert_eq!(matched.kind, LocationKind::Province);
    }

    #[test]
    fn first_match_wins_within_a_namespace() {
        let categories = vec![
            "Food & Beverage".to_string(),
            "Food Beverage".to_string(),
        ];
        // Both collapse to the same slug; the earlier entry is returned.
        assert_eq!(match_category("food-beverage", &categories), Some("Food & Beverage"));
    }
}
