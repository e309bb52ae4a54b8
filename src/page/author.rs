//! About page built from the `[author]` section.

use super::layout::{Document, RenderContext};
use crate::component::social::render_icons;
use crate::component::{Image, SocialIcon, SocialKind};
use crate::utils::html::Element;

/// 1x1 transparent PNG used as the avatar placeholder.
const AVATAR_PLACEHOLDER: &str = "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mOssXpbDwAFAQIk5PtssAAAAABJRU5ErkJggg==";

pub fn render_author_page(ctx: &RenderContext<'_>, route: &str) -> String {
    let author = &ctx.config.author;
    let name = author.display_name(&ctx.config.site.title);

    let seo = ctx.seo(route, format!("About - {name}"), format!("About me - {name}"));

    let mut intro = Element::new("div").attr("class", "space-y-2 pt-6 pb-8");
    if !author.headline.is_empty() {
        intro = intro.child(Element::new("h1").text(&author.headline));
    }
    if !author.tagline.is_empty() {
        intro = intro.child(Element::new("h2").text(&author.tagline));
    }

    let icons = [
        SocialIcon::mail(&author.email),
        SocialIcon::new(SocialKind::Github, author.github.as_str()),
        SocialIcon::new(SocialKind::Linkedin, author.linkedin.as_str()),
        SocialIcon::new(SocialKind::Twitter, author.twitter.as_str()),
    ];

    let mut card = Element::new("div").attr("class", "flex flex-col items-center pt-8");
    if let Some(avatar) = Image::new(&author.avatar, name)
        .size(192, 192)
        .class("h-48 w-48 rounded-full")
        .blur(AVATAR_PLACEHOLDER)
        .render()
    {
        card = card.raw(&avatar);
    }
    card = card.child(Element::new("h3").attr("class", "pt-4 pb-2").text(name));
    for line in [&author.occupation, &author.company] {
        if !line.is_empty() {
            card = card.child(Element::new("div").attr("class", "text-gray-500").text(line));
        }
    }
    card = card.child(
        Element::new("div")
            .attr("class", "flex space-x-3 pt-2")
            .raw(&render_icons(&icons)),
    );

    let bio = Element::new("div")
        .attr("class", "prose max-w-none pt-8 pb-8 xl:col-span-2")
        .children(author.bio.iter().map(|p| Element::new("p").text(p)));

    let body = Element::new("div")
        .attr("class", "divide-y")
        .child(intro)
        .child(
            Element::new("div")
                .attr("class", "items-start space-y-2 xl:grid xl:grid-cols-3 xl:gap-x-8")
                .child(card)
                .child(bio),
        )
        .render();

    Document { seo, body }.render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, test_parse_config};
    use crate::core::RenderEnvironment;

    #[test]
    fn test_full_author() {
        let config = test_parse_config(
            r#"
[author]
name = "Ada"
email = "ada@example.com"
avatar = "/avatar.png"
github = "https://github.com/ada"
headline = "Hi, I'm Ada."
tagline = "I write software."
bio = ["First paragraph.", "Second <paragraph>."]
"#,
        );
        let ctx = RenderContext::new(&config, RenderEnvironment::Development);
        let html = render_author_page(&ctx, "/about/");

        assert!(html.contains("<title>About - Ada</title>"));
        assert!(html.contains(r#"content="About me - Ada""#));
        assert!(html.contains("<h1>Hi, I&#39;m Ada.</h1>"));
        assert!(html.contains("<h2>I write software.</h2>"));
        assert!(html.contains(r#"src="/avatar.png" alt="Ada""#));
        assert!(html.contains("mailto:ada@example.com"));
        assert!(html.contains("#github"));
        assert!(!html.contains("#linkedin"));
        assert!(html.contains("<p>First paragraph.</p><p>Second &lt;paragraph&gt;.</p>"));
    }

    #[test]
    fn test_missing_author_section() {
        let mut config = SiteConfig::default();
        config.site.title = "Notes".into();
        let ctx = RenderContext::new(&config, RenderEnvironment::Production);
        let html = render_author_page(&ctx, "/");

        assert!(html.contains("<title>About - Notes</title>"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("<a "));
        assert!(!html.contains("<h1>"));
    }

    #[test]
    fn test_placeholder_like_name_stays_in_place() {
        let config = test_parse_config("[author]\nname = \"__BODY__\"");
        let ctx = RenderContext::new(&config, RenderEnvironment::Development);
        let html = render_author_page(&ctx, "/about/");

        let (head, body) = html.split_once("</head>").unwrap();
        assert!(head.contains("<title>About - __BODY__</title>"));
        assert!(!head.contains("<h3"));
        assert_eq!(html.matches("<h3 ").count(), 1);
        assert!(body.contains(r#"<h3 class="pt-4 pb-2">__BODY__</h3>"#));
    }
}
