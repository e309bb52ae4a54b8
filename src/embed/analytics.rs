//! Conditional analytics script loader.
//!
//! The Umami tracking script is emitted only for production renders with a
//! complete `[analytics]` section. Anything else yields no script and no
//! error: missing settings simply mean analytics is off.
//!
//! The descriptor is handed to the page `<head>` and never observed again.
//! Loading is `async` + `defer`, so a slow or failing analytics host cannot
//! block the page, and nothing here retries or reports the outcome.

use crate::config::SiteConfig;
use crate::core::RenderEnvironment;
use crate::utils::html::Element;

/// Script file served by every Umami host.
const UMAMI_SCRIPT: &str = "umami.js";

/// Attribute carrying the Umami website id.
pub const WEBSITE_ID_ATTR: &str = "data-website-id";

/// A third-party script to inject into the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedDescriptor {
    src: String,
    is_async: bool,
    defer: bool,
    data: Vec<(&'static str, String)>,
}

impl EmbedDescriptor {
    /// Umami script for `host` tracking `website_id`.
    pub fn umami(host: &str, website_id: &str) -> Self {
        Self {
            src: format!("https://{host}/{UMAMI_SCRIPT}"),
            is_async: true,
            defer: true,
            data: vec![(WEBSITE_ID_ATTR, website_id.to_string())],
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub const fn is_async(&self) -> bool {
        self.is_async
    }

    pub const fn is_defer(&self) -> bool {
        self.defer
    }

    /// Value of a `data-*` attribute.
    pub fn data(&self, name: &str) -> Option<&str> {
        self.data
            .iter()
            .find_map(|(n, v)| (*n == name).then_some(v.as_str()))
    }

    pub fn website_id(&self) -> Option<&str> {
        self.data(WEBSITE_ID_ATTR)
    }

    pub fn to_element(&self) -> Element {
        let mut el = Element::new("script");
        if self.is_async {
            el = el.flag("async");
        }
        if self.defer {
            el = el.flag("defer");
        }
        for (name, value) in &self.data {
            el = el.attr(*name, value.clone());
        }
        el.attr("src", self.src.clone())
    }

    /// `<script>` tag for the document head.
    pub fn render(&self) -> String {
        self.to_element().render()
    }
}

/// Analytics script for this render, if any.
///
/// Returns `Some` only when `env` is production and both `analytics.host`
/// and `analytics.id` are non-empty.
pub fn maybe_render_embed(env: RenderEnvironment, config: &SiteConfig) -> Option<EmbedDescriptor> {
    if !env.is_production() {
        return None;
    }

    let analytics = &config.analytics;
    let host = analytics.host()?;
    let id = analytics.id()?;
    Some(EmbedDescriptor::umami(host, id))
}
