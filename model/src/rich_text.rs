//! Styled text whose spans can carry a tap action.
//!
//! Offsets are counted in `char`s over the concatenation of all spans.
//! Actionable spans become disjoint half-open ranges, and resolving a tap is a
//! single binary search over them.

use std::ops::Range;

use crate::locale::Locale;
use crate::strings::StringKey;

/// Phone number dialed from the "contact us" link.
pub const CONTACT_PHONE_NUMBER: &str = "19888";

/// What happens when a span is tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapAction {
    Dial(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStyle {
    #[default]
    Plain,
    /// Brand red, underlined.
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
    /// Char range this span covers in the full text.
    pub range: Range<usize>,
    pub action: Option<TapAction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichText {
    spans: Vec<Span>,
}

impl RichText {
    pub fn builder() -> RichTextBuilder {
        RichTextBuilder::default()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// The plain concatenated text.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.spans.last().map_or(0, |s| s.range.end)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the action of the span containing `offset`, if that span has one.
    pub fn action_at(&self, offset: usize) -> Option<&TapAction> {
        // Spans are contiguous and sorted, so this finds the unique span whose
        // range contains `offset`.
        let idx = self.spans.partition_point(|s| s.range.end <= offset);
        let span = self.spans.get(idx)?;
        if span.range.contains(&offset) {
            span.action.as_ref()
        } else {
            None
        }
    }

    /// `"{need_help} {contact_us}"`, with "contact us" styled as a link that
    /// dials [`CONTACT_PHONE_NUMBER`].
    pub fn contact(locale: Locale) -> Self {
        Self::builder()
            .push(format!("{} ", StringKey::NeedHelp.text(locale)))
            .push_action(
                StringKey::ContactUs.text(locale),
                SpanStyle::Link,
                TapAction::Dial(CONTACT_PHONE_NUMBER.to_string()),
            )
            .build()
    }
}

#[derive(Debug, Default)]
pub struct RichTextBuilder {
    spans: Vec<Span>,
    cursor: usize,
}

impl RichTextBuilder {
    pub fn push(self, text: impl Into<String>) -> Self {
        self.push_span(text.into(), SpanStyle::Plain, None)
    }

    pub fn push_action(self, text: impl Into<String>, style: SpanStyle, action: TapAction) -> Self {
        self.push_span(text.into(), style, Some(action))
    }

    fn push_span(mut self, text: String, style: SpanStyle, action: Option<TapAction>) -> Self {
        let len = text.chars().count();
        // zero-width spans could never be hit and would break the ordering
        if len == 0 {
            return self;
        }
        let range = self.cursor..self.cursor + len;
        self.cursor = range.end;
        self.spans.push(Span {
            text,
            style,
            range,
            action,
        });
        self
    }

    pub fn build(self) -> RichText {
        RichText { spans: self.spans }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dial() -> TapAction {
        TapAction::Dial(CONTACT_PHONE_NUMBER.to_string())
    }

    #[test]
    fn contact_text_dials_only_inside_link() {
        let text = RichText::contact(Locale::En);
        assert_eq!(text.text(), "Need help? Contact us");

        let start = "Need help? ".chars().count();
        let end = text.len();
        assert_eq!(end - start, "Contact us".len());

        for offset in 0..start {
            assert_eq!(text.action_at(offset), None, "offset {offset}");
        }
        for offset in start..end {
            assert_eq!(text.action_at(offset), Some(&dial()), "offset {offset}");
        }
        assert_eq!(text.action_at(end), None);
        assert_eq!(text.action_at(usize::MAX), None);
    }

    #[test]
    fn arabic_offsets_count_chars() {
        let text = RichText::contact(Locale::Ar);
        let start = "تحتاج مساعدة؟ ".chars().count();
        assert_eq!(text.action_at(start - 1), None);
        assert_eq!(text.action_at(start), Some(&dial()));
        assert_eq!(text.len(), start + "اتصل بنا".chars().count());
    }

    #[test]
    fn builder_skips_empty_spans() {
        let text = RichText::builder()
            .push("")
            .push_action("", SpanStyle::Link, dial())
            .push("ab")
            .build();
        assert_eq!(text.spans().len(), 1);
        assert_eq!(text.spans()[0].range, 0..2);
        assert_eq!(text.action_at(0), None);
        assert!(RichText::default().is_empty());
    }
}
