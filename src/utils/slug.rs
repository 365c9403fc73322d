//! Slug derivation from display names.
//!
//! Category and location names coming from the job-filter API are matched
//! against URL path segments by normalizing both sides with the same
//! transform. The transform is lossy: distinct display names may collapse to
//! the same slug, and callers resolve that by taking the first match.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Normalize a display name into a URL-safe slug.
///
/// The steps are order-sensitive: `&` is dropped before the general character
/// filter so "Food & Beverage" yields `food-beverage` rather than
/// `food--beverage`, and hyphens are introduced only after all other
/// punctuation is gone.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    let no_amp = lowered.replace('&', "");
    let cleaned = NON_SLUG_CHARS.replace_all(&no_amp, "");
    let hyphenated = WHITESPACE_RUN.replace_all(&cleaned, "-");
    let collapsed = DASH_RUN.replace_all(&hyphenated, "-");
    collapsed.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ampersand_is_dropped_before_hyphenation() {
        assert_eq!(slugify("Food & Beverage"), "food-beverage");
    }

    #[test]
    fn punctuation_and_whitespace_runs_collapse() {
        assert_eq!(slugify("  Jakarta   Selatan!!"), "jakarta-selatan");
    }

    #[test]
    fn plain_names_lowercase_and_hyphenate() {
        assert_eq!(slugify("Teknologi Informasi"), "teknologi-informasi");
        assert_eq!(slugify("Jawa Barat"), "jawa-barat");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn output_charset_is_slug_safe() {
        for name in ["D3/S1 - Teknik (Sipil)", "R&D   Engineer", "-- edge --"] {
            let slug = slugify(name);
            assert!(!slug.starts_with('-') && !slug.ends_with('-'), "{slug}");
            assert!(!slug.contains("--"), "{slug}");
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug}"
            );
        }
    }

    #[test]
    fn idempotent_on_slug_shaped_input() {
        for name in ["Food & Beverage", "Jakarta Selatan", "Pemasaran"] {
            let once = slugify(name);
            assert_eq!(slugify(&once), once);
        }
    }
}
