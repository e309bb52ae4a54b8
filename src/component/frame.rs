//! Framed example with a title badge.

use crate::utils::html::Element;

const FRAME_CLASS: &str = "not-prose relative rounded-2xl border p-6";
const BADGE_CLASS: &str = "absolute -top-3 left-4 rounded px-2 text-sm font-medium uppercase";

#[derive(Debug, Clone)]
pub struct ExampleFrame<'a> {
    /// Badge text.
    pub title: &'a str,
    /// Extra classes appended to the frame.
    pub class: &'a str,
    pub content: &'a str,
}

impl<'a> ExampleFrame<'a> {
    /// Frame with the default "Render" badge.
    pub fn new(content: &'a str) -> Self {
        Self {
            title: "Render",
            class: "",
            content,
        }
    }

    pub fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = class;
        self
    }

    pub fn render(&self) -> String {
        let class = if self.class.is_empty() {
            FRAME_CLASS.to_string()
        } else {
            format!("{FRAME_CLASS} {}", self.class)
        };

        Element::new("div")
            .attr("class", class)
            .child(Element::new("div").attr("class", BADGE_CLASS).text(self.title))
            .raw(self.content)
            .render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        let html = ExampleFrame::new("<b>x</b>").render();
        assert!(html.contains(">Render</div><b>x</b></div>"));
    }

    #[test]
    fn test_custom_title_and_class() {
        let html = ExampleFrame::new("").title("Output").class("my-4").render();
        assert!(html.contains(&format!(r#"class="{FRAME_CLASS} my-4""#)));
        assert!(html.contains(">Output</div>"));
    }
}
