//! Social profile icon links.
//!
//! Icons reference symbols in a sprite sheet (`/static/icons.svg#<kind>`),
//! so no SVG data lives in the page.

use crate::utils::html::Element;
use regex::Regex;
use std::sync::LazyLock;

/// Sprite sheet containing one `<symbol>` per kind.
const ICON_SPRITE: &str = "/static/icons.svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialKind {
    Mail,
    Github,
    Linkedin,
    Twitter,
}

impl SocialKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mail => "mail",
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
        }
    }
}

/// A link to one social profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialIcon {
    pub kind: SocialKind,
    pub href: String,
    /// Icon size in Tailwind spacing units.
    pub size: u32,
}

impl SocialIcon {
    pub fn new(kind: SocialKind, href: impl Into<String>) -> Self {
        Self {
            kind,
            href: href.into(),
            size: 8,
        }
    }

    /// `mailto:` link for `email`. Empty email gives an empty href.
    pub fn mail(email: &str) -> Self {
        let href = if email.trim().is_empty() {
            String::new()
        } else {
            format!("mailto:{}", email.trim())
        };
        Self::new(SocialKind::Mail, href)
    }

    /// Whether this icon has something to link to.
    pub fn is_visible(&self) -> bool {
        if self.href.trim().is_empty() {
            return false;
        }
        self.kind != SocialKind::Mail || is_valid_mailto(&self.href)
    }

    /// Icon link markup, `None` when the href is empty or not a valid `mailto:`.
    pub fn render(&self) -> Option<String> {
        if !self.is_visible() {
            return None;
        }

        let kind = self.kind.as_str();
        let icon_class = format!("h-{0} w-{0} fill-current", self.size);
        let icon = Element::new("svg")
            .attr("class", icon_class)
            .attr("aria-hidden", "true")
            .child(Element::new("use").attr("href", format!("{ICON_SPRITE}#{kind}")));

        let html = Element::new("a")
            .attr("class", "text-sm transition hover:opacity-75")
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
            .attr("href", self.href.clone())
            .child(Element::new("span").attr("class", "sr-only").text(kind))
            .child(icon)
            .render();
        Some(html)
    }
}

/// Render a row of icons, skipping hidden ones.
pub fn render_icons(icons: &[SocialIcon]) -> String {
    icons.iter().filter_map(SocialIcon::render).collect()
}

fn is_valid_mailto(href: &str) -> bool {
    static RE_MAILTO: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^mailto:[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*@[A-Za-z0-9_]+([.-]?[A-Za-z0-9_]+)*(\.[A-Za-z0-9_]{2,3})+$")
            .unwrap()
    });
    RE_MAILTO.is_match(href)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_href_renders_nothing() {
        assert!(SocialIcon::new(SocialKind::Github, "").render().is_none());
        assert!(SocialIcon::new(SocialKind::Twitter, "   ").render().is_none());
        assert!(SocialIcon::mail("").render().is_none());
    }

    #[test]
    fn test_invalid_mail_renders_nothing() {
        assert!(SocialIcon::mail("not-an-email").render().is_none());
        assert!(SocialIcon::mail("a@b").render().is_none());
    }

    #[test]
    fn test_valid_mail() {
        let html = SocialIcon::mail("ada.lovelace@example.com").render().unwrap();
        assert!(html.contains(r#"href="mailto:ada.lovelace@example.com""#));
        assert!(html.contains(r#"<span class="sr-only">mail</span>"#));
        assert!(html.contains("/static/icons.svg#mail"));
    }

    #[test]
    fn test_profile_link() {
        let html = SocialIcon::new(SocialKind::Github, "https://github.com/ada")
            .render()
            .unwrap();
        assert!(html.starts_with("<a "));
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
        assert!(html.contains(r#"class="h-8 w-8 fill-current""#));
    }

    #[test]
    fn test_render_icons_skips_hidden() {
        let icons = [
            SocialIcon::mail(""),
            SocialIcon::new(SocialKind::Github, "https://github.com/ada"),
            SocialIcon::new(SocialKind::Linkedin, ""),
        ];
        let html = render_icons(&icons);
        assert_eq!(html.matches("<a ").count(), 1);
        assert!(html.contains("#github"));
    }
}
