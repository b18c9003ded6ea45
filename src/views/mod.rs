pub mod footer;
pub mod header;
pub mod html;
pub mod layout;
pub mod reveal;

use chrono::Datelike;

use crate::config::SiteSettings;

/// Everything the shared chrome needs to render a page.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub settings: SiteSettings,
    /// Request path, used for the nav highlight.
    pub current_path: String,
    pub year: i32,
}

impl SiteContext {
    pub fn new(settings: SiteSettings, current_path: &str) -> Self {
        Self {
            settings,
            current_path: current_path.to_string(),
            year: chrono::Utc::now().year(),
        }
    }

    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.settings.contact_email)
    }
}
