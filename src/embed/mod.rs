//! Third-party embeds and embedded templates.
//!
//! # Module Structure
//!
//! - `analytics` - Conditional analytics script loader (Umami)
//! - `widget` - Track identifiers to embedded players (SoundCloud)
//! - `template` - Single-pass placeholder templates
//! - `build` - Build-time templates (page.html)
//!
//! # Usage
//!
//! ```ignore
//! use embed::analytics::maybe_render_embed;
//! use embed::widget::render_widgets;
//!
//! let head = maybe_render_embed(env, &config).map(|e| e.render());
//! let players = render_widgets(&config.music.tracks);
//! ```

pub mod analytics;
mod template;
pub mod widget;

pub use template::{Template, TemplateVars};

pub mod build {
    use super::{Template, TemplateVars};
    use crate::utils::html::escape_attr;
    use std::borrow::Cow;

    /// Variables for page.html template.
    pub struct PageVars {
        pub lang: String,
        pub head: String,
        pub body: String,
    }

    impl TemplateVars for PageVars {
        const SLOTS: &'static [&'static str] = &["__LANG__", "__HEAD__", "__BODY__"];

        fn value(&self, slot: &str) -> Cow<'_, str> {
            match slot {
                "__LANG__" => escape_attr(&self.lang),
                "__HEAD__" => Cow::Borrowed(self.head.as_str()),
                _ => Cow::Borrowed(self.body.as_str()),
            }
        }
    }

    /// Document shell shared by every page.
    pub const PAGE_HTML: Template<PageVars> =
        Template::new(include_str!("build/page.html"));
}
