//! Info alert box.

use crate::utils::html::Element;

const ALERT_CLASS: &str = "flex items-center rounded-lg border p-4 text-sm";

/// Informational box around pre-rendered content.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    /// Screen-reader label announced before the content.
    pub label: &'a str,
    pub content: &'a str,
}

impl<'a> Alert<'a> {
    pub fn info(content: &'a str) -> Self {
        Self {
            label: "Info",
            content,
        }
    }

    pub fn render(&self) -> String {
        Element::new("div")
            .attr("class", ALERT_CLASS)
            .attr("role", "alert")
            .child(Element::new("span").attr("class", "sr-only").text(self.label))
            .child(Element::new("div").raw(self.content))
            .render()
    }
}
