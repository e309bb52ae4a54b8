//! Track identifiers to embedded players.
//!
//! Each identifier becomes exactly one widget, in input order. Identifiers
//! are opaque: nothing here checks that they exist. An unknown id shows up
//! as the provider's own "not found" state inside the player.

use crate::utils::html::Element;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Characters left as-is inside query values (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Default player accent color.
pub const DEFAULT_COLOR: &str = "#ff5500";

// ============================================================================
// EmbedIdentifier
// ============================================================================

/// Opaque name of one piece of third-party content (e.g. a track id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmbedIdentifier(String);

impl EmbedIdentifier {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmbedIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmbedIdentifier {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EmbedIdentifier {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&String> for EmbedIdentifier {
    fn from(id: &String) -> Self {
        Self(id.clone())
    }
}

// ============================================================================
// WidgetProvider
// ============================================================================

/// Embed provider, selects the player URL template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetProvider {
    #[default]
    SoundCloud,
}

impl WidgetProvider {
    /// Player URL for `id`.
    pub fn embed_url(self, id: &EmbedIdentifier, color: &str) -> String {
        match self {
            Self::SoundCloud => {
                let track = utf8_percent_encode(id.as_str(), QUERY_VALUE);
                let color = utf8_percent_encode(color, QUERY_VALUE);
                format!(
                    "https://w.soundcloud.com/player/?url=https%3A//api.soundcloud.com/tracks/{track}\
                     &color={color}&auto_play=false&hide_related=false&show_comments=true\
                     &show_user=true&show_reposts=false&show_teaser=true"
                )
            }
        }
    }

    /// Player height in pixels.
    pub const fn height(self) -> u32 {
        match self {
            Self::SoundCloud => 166,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::SoundCloud => "SoundCloud player",
        }
    }
}

// ============================================================================
// WidgetDescriptor
// ============================================================================

/// Player options shared by every widget in one list.
#[derive(Debug, Clone, Copy)]
pub struct WidgetOptions<'a> {
    pub provider: WidgetProvider,
    pub color: &'a str,
}

impl Default for WidgetOptions<'_> {
    fn default() -> Self {
        Self {
            provider: WidgetProvider::default(),
            color: DEFAULT_COLOR,
        }
    }
}

impl<'a> WidgetOptions<'a> {
    pub fn from_config(music: &'a crate::config::MusicConfig) -> Self {
        Self {
            provider: music.provider,
            color: &music.color,
        }
    }
}

/// One embedded player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetDescriptor {
    id: EmbedIdentifier,
    provider: WidgetProvider,
    url: String,
}

impl WidgetDescriptor {
    pub fn new(id: EmbedIdentifier, options: &WidgetOptions<'_>) -> Self {
        let url = options.provider.embed_url(&id, options.color);
        Self {
            id,
            provider: options.provider,
            url,
        }
    }

    pub fn id(&self) -> &EmbedIdentifier {
        &self.id
    }

    pub const fn provider(&self) -> WidgetProvider {
        self.provider
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn to_element(&self) -> Element {
        Element::new("iframe")
            .attr("class", "embed-widget")
            .attr("title", self.provider.title())
            .attr("width", "100%")
            .attr("height", self.provider.height().to_string())
            .attr("scrolling", "no")
            .attr("frameborder", "no")
            .attr("allow", "autoplay")
            .attr("loading", "lazy")
            .attr("src", self.url.clone())
    }

    /// `<iframe>` markup for the player.
    pub fn render(&self) -> String {
        self.to_element().render()
    }
}

/// One default-provider widget per identifier, in order.
pub fn render_widgets<I>(ids: I) -> Vec<WidgetDescriptor>
where
    I: IntoIterator,
    I::Item: Into<EmbedIdentifier>,
{
    render_widgets_with(&WidgetOptions::default(), ids)
}

/// One widget per identifier using `options`, in order. Duplicates are kept.
pub fn render_widgets_with<I>(options: &WidgetOptions<'_>, ids: I) -> Vec<WidgetDescriptor>
where
    I: IntoIterator,
    I::Item: Into<EmbedIdentifier>,
{
    ids.into_iter()
        .map(|id| WidgetDescriptor::new(id.into(), options))
        .collect()
}
