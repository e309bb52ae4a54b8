//! `[author]` configuration.
//!
//! Display-only identity strings for the About page. Every field is
//! optional; empty values hide the corresponding element.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    /// Author display name.
    pub name: String,
    /// Contact email (rendered as a `mailto:` link).
    pub email: String,
    /// Avatar image path or URL.
    pub avatar: String,
    pub occupation: String,
    pub company: String,
    /// Profile URLs.
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    /// Page heading (e.g., "Hi, I'm Ada, a frontend developer.").
    pub headline: String,
    /// Sub-heading under the headline.
    pub tagline: String,
    /// Biography paragraphs, in order.
    pub bio: Vec<String>,
}

impl AuthorConfig {
    pub const TEMPLATE: &'static str = r#"[author]
name = ""
email = ""
avatar = "/static/images/avatar.png"
# occupation = ""
# company = ""
github = ""                 # Full profile URL
linkedin = ""
twitter = ""
headline = ""               # About page heading
tagline = ""                # About page sub-heading
bio = []                    # Paragraphs shown on the About page
"#;

    /// Name to show in titles, falling back to `fallback` when unset.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.name.trim().is_empty() {
            fallback
        } else {
            &self.name
        }
    }
}
