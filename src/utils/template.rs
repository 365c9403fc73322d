//! SEO template rendering.
//!
//! Admin-authored title/description templates contain `{{key}}` placeholders
//! that are filled in at request time with the resolved entity name and site
//! identity.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Replace every `{{key}}` occurrence in `template` with its binding.
///
/// Placeholders without a binding are left verbatim, extra bindings are
/// ignored, and substituted values are never re-scanned, so a value that
/// itself contains `{{...}}` is inserted as-is. An empty `vars` slice returns
/// the template unchanged.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            let key = &caps[1];
            match vars.iter().find(|(k, _)| *k == key) {
                Some((_, value)) => (*value).to_string(),
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}
