//! The login screen's state and input handling.
//!
//! [`LoginScreen`] owns the transient form state and talks to its
//! collaborators (locale service, dialer, optional login handler). Renderers
//! call [`LoginScreen::view`] and draw the resulting [`LoginView`].

use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::info;

use crate::catalog::TileIcon;
use crate::catalog::PROMO_TILES;
use crate::credentials::Credentials;
use crate::dial::Dialer;
use crate::locale::Locale;
use crate::locale::LocaleService;
use crate::locale::TextDirection;
use crate::masking::mask;
use crate::rich_text::RichText;
use crate::rich_text::TapAction;
use crate::strings::StringKey;

/// Receives the draft when the user presses "log in".
///
/// Nothing implements this yet. It is where authentication will plug in.
pub trait LoginHandler {
    fn submit(&mut self, credentials: &Credentials);
}

/// Form state: the credentials draft plus the visibility toggle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    credentials: Credentials,
    password_visible: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a form from a saved draft. Visibility is not part of the
    /// saved state, so the password comes back hidden.
    pub fn restore(credentials: Credentials) -> Self {
        Self {
            credentials,
            password_visible: false,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// Only the password gates the button; the username is not checked.
    pub fn is_login_enabled(&self) -> bool {
        self.credentials.has_password()
    }

    /// What the password field shows: the text itself, or one mask glyph
    /// per character.
    pub fn password_display(&self) -> String {
        if self.password_visible {
            self.credentials.password.clone()
        } else {
            mask(&self.credentials.password)
        }
    }
}

/// One promotional tile, resolved for the current locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileView {
    pub icon: TileIcon,
    pub label: &'static str,
}

/// Everything a renderer needs to draw the screen once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub locale: Locale,
    pub direction: TextDirection,
    pub logo_description: &'static str,
    pub language_label: &'static str,
    pub username_label: &'static str,
    pub password_label: &'static str,
    /// Accessible label of the visibility icon; describes what a tap does.
    pub visibility_toggle_label: &'static str,
    pub forgot_password_label: &'static str,
    pub login_label: &'static str,
    pub username: String,
    /// Raw password, for the input's value.
    pub password: String,
    /// Password as it should appear on screen.
    pub password_display: String,
    pub password_visible: bool,
    pub login_enabled: bool,
    pub contact: RichText,
    pub tiles: Vec<TileView>,
}

pub struct LoginScreen<L, D> {
    form: LoginForm,
    locale: L,
    dialer: D,
    login_handler: Option<Box<dyn LoginHandler>>,
}

impl<L: LocaleService, D: Dialer> LoginScreen<L, D> {
    pub fn new(locale: L, dialer: D) -> Self {
        Self {
            form: LoginForm::new(),
            locale,
            dialer,
            login_handler: None,
        }
    }

    pub fn with_login_handler(mut self, handler: impl LoginHandler + 'static) -> Self {
        self.login_handler = Some(Box::new(handler));
        self
    }

    pub fn form(&self) -> &LoginForm {
        &self.form
    }

    pub fn locale(&self) -> Locale {
        self.locale.current()
    }

    /// The part of the state that survives a reconfiguration.
    pub fn save(&self) -> Credentials {
        self.form.credentials.clone()
    }

    pub fn restore(&mut self, saved: Credentials) {
        self.form = LoginForm::restore(saved);
    }

    pub fn on_username_changed(&mut self, text: impl Into<String>) {
        self.form.credentials.username = text.into();
    }

    pub fn on_password_changed(&mut self, text: impl Into<String>) {
        self.form.credentials.password = text.into();
    }

    pub fn on_toggle_visibility(&mut self) {
        self.form.password_visible = !self.form.password_visible;
    }

    /// Switches between Arabic and English and returns the new locale.
    ///
    /// The locale service takes care of other dependents. This screen is
    /// rebuilt from its saved draft, which hides the password again.
    pub fn on_toggle_language(&mut self) -> Locale {
        let target = self.locale.current().toggled();
        self.locale.set(target);
        let saved = self.save();
        self.restore(saved);
        target
    }

    pub fn on_login_pressed(&mut self) {
        if !self.form.is_login_enabled() {
            debug!("login pressed while disabled; ignoring");
            return;
        }
        match self.login_handler.as_mut() {
            Some(handler) => handler.submit(&self.form.credentials),
            None => debug!("login pressed; no login handler installed"),
        }
    }

    /// Dials the contact number if `offset` lands on the "contact us" span.
    pub fn on_contact_link_pressed(&mut self, offset: usize) {
        let contact = RichText::contact(self.locale.current());
        match contact.action_at(offset) {
            Some(TapAction::Dial(number)) => {
                info!("dialing {number}");
                self.dialer.launch_dial(number);
            }
            None => debug!("contact text tapped at {offset}; no action"),
        }
    }

    pub fn view(&self) -> LoginView {
        let locale = self.locale.current();
        let visibility_key = if self.form.password_visible {
            StringKey::HidePassword
        } else {
            StringKey::ShowPassword
        };
        LoginView {
            locale,
            direction: locale.direction(),
            logo_description: StringKey::LogoDescription.text(locale),
            language_label: StringKey::Arabic.text(locale),
            username_label: StringKey::Username.text(locale),
            password_label: StringKey::Password.text(locale),
            visibility_toggle_label: visibility_key.text(locale),
            forgot_password_label: StringKey::ForgotPassword.text(locale),
            login_label: StringKey::Login.text(locale),
            username: self.form.credentials.username.clone(),
            password: self.form.credentials.password.clone(),
            password_display: self.form.password_display(),
            password_visible: self.form.password_visible,
            login_enabled: self.form.is_login_enabled(),
            contact: RichText::contact(locale),
            tiles: PROMO_TILES
                .iter()
                .map(|tile| TileView {
                    icon: tile.icon,
                    label: tile.label_text(locale),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dial::RecordingDialer;
    use crate::locale::LocaleStore;
    use crate::rich_text::CONTACT_PHONE_NUMBER;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn screen() -> (LoginScreen<LocaleStore, RecordingDialer>, RecordingDialer) {
        let dialer = RecordingDialer::default();
        let screen = LoginScreen::new(LocaleStore::new(Locale::En), dialer.clone());
        (screen, dialer)
    }

    /// Every piece of localized text on the screen, top to bottom.
    fn visible_labels(view: &LoginView) -> Vec<String> {
        let mut labels: Vec<String> = vec![
            view.language_label.to_string(),
            view.username_label.to_string(),
            view.password_label.to_string(),
            view.forgot_password_label.to_string(),
            view.login_label.to_string(),
            view.contact.text(),
        ];
        labels.extend(view.tiles.iter().map(|t| t.label.to_string()));
        labels
    }

    const SAMPLES: [&str; 6] = ["", "x", " ", "p@ss word", "كلمة السر", "\u{1F512}"];

    #[test]
    fn password_alone_gates_login() {
        let (mut screen, _) = screen();
        for s in SAMPLES {
            screen.on_password_changed(s);
            assert_eq!(screen.view().login_enabled, !s.is_empty(), "{s:?}");
        }
    }

    #[test]
    fn username_never_affects_login() {
        let (mut screen, _) = screen();
        for password in ["", "pw"] {
            screen.on_password_changed(password);
            let expected = screen.form().is_login_enabled();
            for s in SAMPLES {
                screen.on_username_changed(s);
                assert_eq!(screen.form().is_login_enabled(), expected);
                assert_eq!(screen.view().username, s);
            }
        }
    }

    #[test]
    fn visibility_toggle_is_self_inverse() {
        let (mut screen, _) = screen();
        screen.on_password_changed("abc");
        let before = screen.view().password_display;
        screen.on_toggle_visibility();
        assert_eq!(screen.view().password_display, "abc");
        screen.on_toggle_visibility();
        assert_eq!(screen.view().password_display, before);
        assert_eq!(before, "•••");
    }

    #[test]
    fn language_toggle_is_self_inverse() {
        let (mut screen, _) = screen();
        assert_eq!(screen.on_toggle_language(), Locale::Ar);
        assert_eq!(screen.on_toggle_language(), Locale::En);
        assert_eq!(screen.locale(), Locale::En);
    }

    #[test]
    fn language_toggle_keeps_draft_but_hides_password() {
        let (mut screen, _) = screen();
        screen.on_username_changed("ahmed");
        screen.on_password_changed("pw");
        screen.on_toggle_visibility();

        screen.on_toggle_language();

        let view = screen.view();
        assert_eq!(view.username, "ahmed");
        assert_eq!(view.password, "pw");
        assert!(!view.password_visible);
        assert_eq!(view.password_display, "••");
    }

    #[test]
    fn language_toggle_notifies_locale_subscribers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = LocaleStore::new(Locale::En);
        let sink = seen.clone();
        store.subscribe(move |l| sink.borrow_mut().push(l));

        let mut screen = LoginScreen::new(store, RecordingDialer::default());
        screen.on_toggle_language();
        screen.on_toggle_language();
        assert_eq!(*seen.borrow(), vec![Locale::Ar, Locale::En]);
    }

    #[test]
    fn contact_link_dials_only_on_link_span() {
        for locale in [Locale::En, Locale::Ar] {
            let dialer = RecordingDialer::default();
            let mut screen = LoginScreen::new(LocaleStore::new(locale), dialer.clone());
            let contact = screen.view().contact;
            let link = contact.spans().iter().find(|s| s.action.is_some()).unwrap().range.clone();

            screen.on_contact_link_pressed(0);
            screen.on_contact_link_pressed(link.start - 1);
            screen.on_contact_link_pressed(link.end);
            screen.on_contact_link_pressed(10_000);
            assert!(dialer.dialed.borrow().is_empty());

            screen.on_contact_link_pressed(link.start);
            screen.on_contact_link_pressed(link.end - 1);
            assert_eq!(
                *dialer.dialed.borrow(),
                vec![CONTACT_PHONE_NUMBER.to_string(); 2]
            );
        }
    }

    #[derive(Clone, Default)]
    struct RecordingLogin(Rc<RefCell<Vec<Credentials>>>);

    impl LoginHandler for RecordingLogin {
        fn submit(&mut self, credentials: &Credentials) {
            self.0.borrow_mut().push(credentials.clone());
        }
    }

    #[test]
    fn login_without_handler_is_a_no_op() {
        let (mut screen, dialer) = screen();
        screen.on_password_changed("pw");
        let before = screen.view();
        screen.on_login_pressed();
        assert_eq!(screen.view(), before);
        assert!(dialer.dialed.borrow().is_empty());
    }

    #[test]
    fn login_handler_fires_only_when_enabled() {
        let submitted = RecordingLogin::default();
        let (screen, _) = screen();
        let mut screen = screen.with_login_handler(submitted.clone());

        screen.on_username_changed("ahmed");
        screen.on_login_pressed();
        assert!(submitted.0.borrow().is_empty());

        screen.on_password_changed("pw");
        screen.on_login_pressed();
        let got = submitted.0.borrow();
        assert_eq!(got.len(), 1);
        assert_eq!(got[0].username, "ahmed");
        assert_eq!(got[0].password, "pw");
    }

    #[test]
    fn saved_draft_round_trips_through_json() {
        let (mut screen, _) = screen();
        screen.on_username_changed("ahmed");
        screen.on_password_changed("pw");
        screen.on_toggle_visibility();

        let json = serde_json::to_string(&screen.save()).unwrap();
        let (mut rebuilt, _) = self::screen();
        rebuilt.restore(serde_json::from_str(&json).unwrap());

        assert_eq!(rebuilt.form().credentials(), screen.form().credentials());
        assert!(!rebuilt.form().password_visible());
    }

    #[test]
    fn walkthrough() {
        let (mut screen, _) = screen();
        let view = screen.view();
        assert_eq!(view.username, "");
        assert_eq!(view.password, "");
        assert!(!view.password_visible);
        assert_eq!(view.locale, Locale::En);
        assert!(!view.login_enabled);

        screen.on_password_changed("x");
        let view = screen.view();
        assert!(view.login_enabled);
        assert_eq!(view.password_display, "•");

        screen.on_toggle_visibility();
        assert_eq!(screen.view().password_display, "x");

        let english = visible_labels(&screen.view());
        screen.on_toggle_language();
        let view = screen.view();
        assert_eq!(view.locale, Locale::Ar);
        assert!(view.direction.is_rtl());
        assert_eq!(view.login_label, "تسجيل الدخول");
        assert_eq!(view.language_label, "English");
        let arabic = visible_labels(&view);
        assert_eq!(arabic.len(), english.len());
        for (en, ar) in english.iter().zip(&arabic) {
            assert_ne!(en, ar);
        }
    }
}
