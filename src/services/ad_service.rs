//! Advertisement service - placement snippets from site settings.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::domain::AdPlacement;
use crate::services::{FetchOptions, SettingsService};

static H2_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<h2[^>]*>").unwrap());

/// Advertisement service trait for dependency injection.
#[async_trait]
pub trait AdService: Send + Sync {
    /// Get the ad snippet configured for a placement; empty when unset
    async fn ad_code(&self, placement: AdPlacement) -> String;
}

/// Concrete implementation reading through the settings service.
pub struct AdManager {
    settings: Arc<dyn SettingsService>,
}

impl AdManager {
    /// Create new advertisement service instance
    pub fn new(settings: Arc<dyn SettingsService>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl AdService for AdManager {
    async fn ad_code(&self, placement: AdPlacement) -> String {
        self.settings
            .get_settings(FetchOptions::cached())
            .await
            .ad_code(placement)
            .to_string()
    }
}

/// Inject an ad snippet before the middle `<h2>` of an HTML body.
///
/// Articles get a mid-content ad slot at their median section heading. The
/// content is returned unchanged when either input is empty or no `<h2>`
/// exists.
pub fn insert_middle_ad(content: &str, ad_code: &str) -> String {
    if ad_code.is_empty() || content.is_empty() {
        return content.to_string();
    }

    let matches: Vec<_> = H2_TAG.find_iter(content).collect();
    if matches.is_empty() {
        return content.to_string();
    }

    let middle = matches[matches.len() / 2];
    let ad_html = format!(
        "\n<div class=\"advertisement-middle my-6\">\n\
         <div class=\"text-xs text-gray-500 mb-2 text-center\">Advertisement</div>\n\
         {ad_code}\n\
         </div>\n"
    );

    let mut result = String::with_capacity(content.len() + ad_html.len());
    result.push_str(&content[..middle.start()]);
    result.push_str(&ad_html);
    result.push_str(&content[middle.start()..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn injects_before_the_middle_heading() {
        let content = "<p>intro</p><h2>One</h2><p>a</p><h2>Two</h2><p>b</p><h2>Three</h2>";
        let result = insert_middle_ad(content, "<script>ad</script>");

        // Three headings: the ad lands before the second.
        let ad_pos = result.find("advertisement-middle").unwrap();
        let second_h2 = result.find("<h2>Two</h2>").unwrap();
        assert!(ad_pos < second_h2);
        assert!(result.find("<h2>One</h2>").unwrap() < ad_pos);
        assert!(result.contains("<script>ad</script>"));
    }

    #[test]
    fn single_heading_gets_the_ad_before_it() {
        let content = "<p>intro</p><h2 class=\"title\">Only</h2><p>body</p>";
        let result = insert_middle_ad(content, "AD");
        assert!(result.find("AD").unwrap() < result.find("Only").unwrap());
    }

    #[test]
    fn no_heading_passes_content_through() {
        let content = "<p>no headings here</p>";
        assert_eq!(insert_middle_ad(content, "AD"), content);
    }

    #[test]
    fn empty_inputs_pass_through() {
        assert_eq!(insert_middle_ad("", "AD"), "");
        assert_eq!(insert_middle_ad("<h2>x</h2>", ""), "<h2>x</h2>");
    }
}
