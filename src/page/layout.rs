//! Document shell shared by all pages.

use crate::component::PageSeo;
use crate::component::seo::OgDefaults;
use crate::config::SiteConfig;
use crate::core::RenderEnvironment;
use crate::embed::analytics::maybe_render_embed;
use crate::embed::build::{PAGE_HTML, PageVars};

/// Everything a page needs to render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub env: RenderEnvironment,
}

impl<'a> RenderContext<'a> {
    pub const fn new(config: &'a SiteConfig, env: RenderEnvironment) -> Self {
        Self { config, env }
    }

    /// SEO tags for a page at `route`.
    pub fn seo(&self, route: &str, title: String, description: String) -> PageSeo<'a> {
        PageSeo::new(title, description, OgDefaults::from_config(self.config))
            .canonical(self.config.url_for(route))
    }
}

/// A page document: head tags plus body markup.
pub struct Document<'a> {
    pub seo: PageSeo<'a>,
    pub body: String,
}

impl Document<'_> {
    /// Full HTML document, with the analytics script when enabled.
    pub fn render(self, ctx: &RenderContext<'_>) -> String {
        let mut head = self.seo.render();
        if let Some(embed) = maybe_render_embed(ctx.env, ctx.config) {
            head.push('\n');
            head.push_str(&embed.render());
        }

        PAGE_HTML.render(&PageVars {
            lang: ctx.config.site.language.clone(),
            head,
            body: self.body,
        })
    }
}
