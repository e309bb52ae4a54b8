//! Page title, description, Open Graph and Twitter Card tags.
//!
//! Emits exactly the values it is given; empty values are skipped.

use crate::config::SiteConfig;
use crate::utils::html::Element;

/// Site-level defaults for Open Graph tags.
pub struct OgDefaults<'a> {
    pub og_type: &'static str,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub twitter_card: &'static str,
}

impl<'a> OgDefaults<'a> {
    /// Create default OG tags from site config.
    pub fn from_config(config: &'a SiteConfig) -> Self {
        Self {
            og_type: "website",
            site_name: &config.site.title,
            locale: &config.site.language,
            twitter_card: "summary_large_image",
        }
    }
}

/// SEO tags for one page.
pub struct PageSeo<'a> {
    pub title: String,
    pub description: String,
    pub canonical_url: Option<String>,
    pub defaults: OgDefaults<'a>,
}

impl<'a> PageSeo<'a> {
    pub fn new(title: impl Into<String>, description: impl Into<String>, defaults: OgDefaults<'a>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            canonical_url: None,
            defaults,
        }
    }

    pub fn canonical(mut self, url: Option<String>) -> Self {
        self.canonical_url = url;
        self
    }

    fn meta_name(name: &'static str, content: &str) -> Option<Element> {
        (!content.is_empty()).then(|| Element::new("meta").attr("name", name).attr("content", content))
    }

    fn meta_property(property: &'static str, content: &str) -> Option<Element> {
        (!content.is_empty())
            .then(|| Element::new("meta").attr("property", property).attr("content", content))
    }

    /// Tags for the document `<head>`, one per line.
    pub fn render(&self) -> String {
        let d = &self.defaults;
        let canonical = self.canonical_url.as_deref().unwrap_or_default();

        let tags = [
            Some(Element::new("title").text(&self.title)),
            Self::meta_name("robots", "follow, index"),
            Self::meta_name("description", &self.description),
            Self::meta_property("og:url", canonical),
            Self::meta_property("og:type", d.og_type),
            Self::meta_property("og:site_name", d.site_name),
            Self::meta_property("og:locale", d.locale),
            Self::meta_property("og:title", &self.title),
            Self::meta_property("og:description", &self.description),
            Self::meta_name("twitter:card", d.twitter_card),
            Self::meta_name("twitter:title", &self.title),
            Self::meta_name("twitter:description", &self.description),
            (!canonical.is_empty())
                .then(|| Element::new("link").attr("rel", "canonical").attr("href", canonical)),
        ];

        tags.into_iter()
            .flatten()
            .map(|el| el.render())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
