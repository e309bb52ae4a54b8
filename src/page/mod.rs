//! Site pages.
//!
//! Pages compose components and embeds into full HTML documents. Each page
//! receives the resolved config and render environment explicitly through
//! [`RenderContext`].
//!
//! | Route      | Page                  |
//! |------------|-----------------------|
//! | `/`        | About (author) page   |
//! | `/about/`  | About (author) page   |
//! | `/music/`  | Music showcase        |

mod author;
mod layout;
mod music;

pub use author::render_author_page;
pub use layout::RenderContext;
pub use music::render_music_page;

use std::path::PathBuf;

/// A rendered page ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Site route, always starting and ending with `/`.
    pub route: &'static str,
    pub html: String,
}

impl Page {
    /// Output path relative to the output directory (`music/index.html`).
    pub fn output_path(&self) -> PathBuf {
        let trimmed = self.route.trim_matches('/');
        if trimmed.is_empty() {
            PathBuf::from("index.html")
        } else {
            PathBuf::from(trimmed).join("index.html")
        }
    }
}

/// Render every page of the site.
pub fn render_all(ctx: &RenderContext<'_>) -> Vec<Page> {
    vec![
        Page {
            route: "/",
            html: render_author_page(ctx, "/"),
        },
        Page {
            route: "/about/",
            html: render_author_page(ctx, "/about/"),
        },
        Page {
            route: "/music/",
            html: render_music_page(ctx),
        },
    ]
}
