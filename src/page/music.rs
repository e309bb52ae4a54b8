//! Music showcase page.

use super::layout::{Document, RenderContext};
use crate::component::{Alert, ExampleFrame};
use crate::embed::widget::{WidgetOptions, render_widgets_with};
use crate::utils::html::Element;

pub fn render_music_page(ctx: &RenderContext<'_>) -> String {
    let config = ctx.config;
    let name = config.author.display_name(&config.site.title);
    let seo = ctx.seo(
        "/music/",
        format!("Music - {name}"),
        config.site.description.clone(),
    );

    let options = WidgetOptions::from_config(&config.music);
    let widgets = render_widgets_with(&options, &config.music.tracks);
    crate::debug!("music"; "{} track widget(s)", widgets.len());

    let mut header = Element::new("div")
        .attr("class", "space-y-2 pt-6 pb-8 md:space-y-5")
        .child(Element::new("h1").text("Music"));
    if !config.music.intro.is_empty() {
        header = header.child(
            Element::new("p")
                .attr("class", "text-lg leading-7 text-gray-500")
                .text(&config.music.intro),
        );
    }

    let players = if widgets.is_empty() {
        Element::new("div").raw(&Alert::info("No tracks yet.").render())
    } else {
        let list = Element::new("div")
            .attr("class", "flex flex-wrap gap-8")
            .children(widgets.iter().map(|w| w.to_element()))
            .render();
        Element::new("div").raw(&ExampleFrame::new(&list).title("Listen").render())
    };

    let body = Element::new("div")
        .attr("class", "divide-y")
        .child(header)
        .child(Element::new("div").attr("class", "container py-12").child(players))
        .render();

    Document { seo, body }.render(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::core::RenderEnvironment;

    #[test]
    fn test_tracks_rendered_in_order() {
        let config = test_parse_config(
            "[author]\nname = \"Ada\"\n[music]\ntracks = [\"1243533106\", \"1172495164\", \"1243533106\"]",
        );
        let ctx = RenderContext::new(&config, RenderEnvironment::Development);
        let html = render_music_page(&ctx);

        assert!(html.contains("<title>Music - Ada</title>"));
        assert_eq!(html.matches("<iframe ").count(), 3);
        assert!(html.contains(">Listen</div>"));

        let first = html.find("tracks/1243533106").unwrap();
        let second = html.find("tracks/1172495164").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("tracks/1243533106").count(), 2);
    }

    #[test]
    fn test_no_tracks() {
        let config = test_parse_config("[music]\nintro = \"Soon.\"");
        let ctx = RenderContext::new(&config, RenderEnvironment::Development);
        let html = render_music_page(&ctx);
        assert!(!html.contains("<iframe"));
        assert!(html.contains("Soon."));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains("No tracks yet."));
        assert!(!html.contains(">Listen</div>"));
    }
}
