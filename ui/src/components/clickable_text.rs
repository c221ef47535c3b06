use dioxus::prelude::*;
use model::rich_text::RichText;
use model::rich_text::SpanStyle;

/// One rendered span and the offset it reports when tapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TapTarget {
    pub offset: usize,
    pub content: String,
    pub class: &'static str,
}

/// Each span becomes one element that reports its first char offset.
pub(crate) fn tap_targets(text: &RichText) -> Vec<TapTarget> {
    text.spans()
        .iter()
        .map(|s| TapTarget {
            offset: s.range.start,
            content: s.text.clone(),
            class: match s.style {
                SpanStyle::Plain => "",
                SpanStyle::Link => "span-link",
            },
        })
        .collect()
}

/// A paragraph of styled spans that reports which char offset was tapped.
///
/// What an offset *means* is left to the caller.
#[component]
pub fn ClickableText(text: RichText, on_tap: EventHandler<usize>) -> Element {
    rsx! {
        p {
            class: "clickable-text",
            for target in tap_targets(&text) {
                span {
                    class: target.class,
                    onclick: move |_| on_tap.call(target.offset),
                    "{target.content}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialer::DialRequest;
    use crate::dialer::SystemDialer;
    use model::dial::Dialer;
    use model::locale::Locale;
    use model::locale::LocaleStore;
    use model::login::LoginScreen;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Resolves dials the way `SystemDialer` would, without leaving the app.
    #[derive(Clone, Default)]
    struct CapturingDialer(Rc<RefCell<Vec<DialRequest>>>);

    impl Dialer for CapturingDialer {
        fn launch_dial(&self, phone_number: &str) {
            self.0.borrow_mut().push(SystemDialer::request(phone_number));
        }
    }

    #[test]
    fn targets_report_span_starts() {
        let text = RichText::contact(Locale::En);
        let targets = tap_targets(&text);
        assert_eq!(targets.len(), text.spans().len());
        for (target, span) in targets.iter().zip(text.spans()) {
            assert_eq!(target.offset, span.range.start);
            assert_eq!(target.content, span.text);
        }
        assert_eq!(targets[1].class, "span-link");
        assert_eq!(targets[1].content, "Contact us");
    }

    #[test]
    fn link_target_dials_contact_number() {
        for locale in [Locale::En, Locale::Ar] {
            let dialer = CapturingDialer::default();
            let mut screen = LoginScreen::new(LocaleStore::new(locale), dialer.clone());
            let targets = tap_targets(&screen.view().contact);

            for target in targets.iter().filter(|t| t.class != "span-link") {
                screen.on_contact_link_pressed(target.offset);
            }
            assert!(dialer.0.borrow().is_empty());

            let link = targets.iter().find(|t| t.class == "span-link").unwrap();
            screen.on_contact_link_pressed(link.offset);
            assert_eq!(
                *dialer.0.borrow(),
                vec![DialRequest {
                    route: crate::compat::ROUTE,
                    uri: "tel:19888".to_string(),
                }]
            );
        }
    }
}
