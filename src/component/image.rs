//! Image wrapper with explicit size and lazy loading.

use crate::utils::html::Element;

#[derive(Debug, Clone, Default)]
pub struct Image<'a> {
    pub src: &'a str,
    pub alt: &'a str,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub class: &'a str,
    /// Data URL shown blurred until the image loads.
    pub blur_data_url: Option<&'a str>,
    /// Load eagerly (above-the-fold images).
    pub priority: bool,
}

impl<'a> Image<'a> {
    pub fn new(src: &'a str, alt: &'a str) -> Self {
        Self {
            src,
            alt,
            ..Self::default()
        }
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn class(mut self, class: &'a str) -> Self {
        self.class = class;
        self
    }

    pub fn blur(mut self, data_url: &'a str) -> Self {
        self.blur_data_url = Some(data_url);
        self
    }

    /// `<img>` markup, `None` without a source.
    pub fn render(&self) -> Option<String> {
        if self.src.is_empty() {
            return None;
        }

        let mut el = Element::new("img").attr("src", self.src).attr("alt", self.alt);
        if let Some(width) = self.width {
            el = el.attr("width", width.to_string());
        }
        if let Some(height) = self.height {
            el = el.attr("height", height.to_string());
        }
        el = el
            .attr_opt("class", self.class)
            .attr("loading", if self.priority { "eager" } else { "lazy" })
            .attr("decoding", "async");
        if let Some(blur) = self.blur_data_url {
            el = el.attr(
                "style",
                format!("background-size:cover;background-image:url(\"{blur}\")"),
            );
        }
        Some(el.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_src() {
        assert!(Image::new("", "Avatar").render().is_none());
    }

    #[test]
    fn test_full_render() {
        let html = Image::new("/avatar.png", "Ada")
            .size(192, 192)
            .class("h-48 w-48 rounded-full")
            .render()
            .unwrap();
        assert_eq!(
            html,
            r#"<img src="/avatar.png" alt="Ada" width="192" height="192" class="h-48 w-48 rounded-full" loading="lazy" decoding="async">"#
        );
    }

    #[test]
    fn test_blur_placeholder_is_escaped() {
        let html = Image::new("/a.png", "").blur("data:image/gif;base64,AAA").render().unwrap();
        assert!(html.contains("background-image:url(&quot;data:image/gif;base64,AAA&quot;)"));
    }
}
