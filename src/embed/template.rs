//! Single-pass placeholder templates.
//!
//! A template is static text with `__NAME__` slots. Rendering walks the
//! text once: substituted values are copied to the output and never
//! searched again, so a value that happens to contain a slot name is
//! emitted literally.

use std::borrow::Cow;
use std::marker::PhantomData;

/// A set of values filling the slots of one template.
pub trait TemplateVars {
    /// Slot names this set fills, e.g. `__BODY__`.
    const SLOTS: &'static [&'static str];

    /// Value for `slot`, which is always one of [`Self::SLOTS`].
    fn value(&self, slot: &str) -> Cow<'_, str>;
}

/// Static template text bound to the variable set that fills it.
#[derive(Debug, Clone, Copy)]
pub struct Template<V> {
    content: &'static str,
    _vars: PhantomData<V>,
}

impl<V> Template<V> {
    pub const fn new(content: &'static str) -> Self {
        Self {
            content,
            _vars: PhantomData,
        }
    }
}

impl<V: TemplateVars> Template<V> {
    pub fn render(&self, vars: &V) -> String {
        let mut out = String::with_capacity(self.content.len());
        let mut rest = self.content;

        while let Some((at, slot)) = next_slot(rest, V::SLOTS) {
            out.push_str(&rest[..at]);
            out.push_str(&vars.value(slot));
            rest = &rest[at + slot.len()..];
        }
        out.push_str(rest);
        out
    }
}

/// Earliest slot occurrence in `text`.
fn next_slot(text: &str, slots: &[&'static str]) -> Option<(usize, &'static str)> {
    slots
        .iter()
        .filter_map(|slot| text.find(slot).map(|at| (at, *slot)))
        .min_by_key(|(at, _)| *at)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        a: String,
        b: String,
    }

    impl TemplateVars for Pair {
        const SLOTS: &'static [&'static str] = &["__A__", "__B__"];

        fn value(&self, slot: &str) -> Cow<'_, str> {
            match slot {
                "__A__" => Cow::Borrowed(self.a.as_str()),
                _ => Cow::Borrowed(self.b.as_str()),
            }
        }
    }

    fn pair(a: &str, b: &str) -> Pair {
        Pair {
            a: a.to_string(),
            b: b.to_string(),
        }
    }

    #[test]
    fn test_fills_every_occurrence() {
        let tpl: Template<Pair> = Template::new("[__A__|__B__|__A__]");
        assert_eq!(tpl.render(&pair("x", "y")), "[x|y|x]");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let tpl: Template<Pair> = Template::new("__A__ then __B__");
        assert_eq!(tpl.render(&pair("__B__", "b")), "__B__ then b");
        assert_eq!(tpl.render(&pair("a", "__A__")), "a then __A__");
    }

    #[test]
    fn test_unknown_slots_kept() {
        let tpl: Template<Pair> = Template::new("__C__ __A__");
        assert_eq!(tpl.render(&pair("a", "b")), "__C__ a");
    }

    #[test]
    fn test_no_slots() {
        let tpl: Template<Pair> = Template::new("plain");
        assert_eq!(tpl.render(&pair("a", "b")), "plain");
    }
}
