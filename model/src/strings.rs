//! Compiled-in string tables for every supported [`Locale`].

use crate::locale::Locale;

/// Identifies one localized string resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum StringKey {
    Username,
    Password,
    Login,
    ForgotPassword,
    NeedHelp,
    ContactUs,
    OurProducts,
    ExchangeRate,
    SecurityTips,
    NearestBranch,
    /// Label of the language toggle. Always names the language you would
    /// switch *to*, so it reads "العربية" in English and "English" in Arabic.
    Arabic,
    ShowPassword,
    HidePassword,
    LogoDescription,
}

impl StringKey {
    pub fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en(),
            Locale::Ar => self.ar(),
        }
    }

    fn en(&self) -> &'static str {
        match self {
            Self::Username => "Username",
            Self::Password => "Password",
            Self::Login => "Log In",
            Self::ForgotPassword => "Forgot username/password?",
            Self::NeedHelp => "Need help?",
            Self::ContactUs => "Contact us",
            Self::OurProducts => "Our products",
            Self::ExchangeRate => "Exchange rate",
            Self::SecurityTips => "Security tips",
            Self::NearestBranch => "Nearest branch or ATM",
            Self::Arabic => "العربية",
            Self::ShowPassword => "Show password",
            Self::HidePassword => "Hide password",
            Self::LogoDescription => "Banque Masr logo",
        }
    }

    fn ar(&self) -> &'static str {
        match self {
            Self::Username => "اسم المستخدم",
            Self::Password => "كلمة المرور",
            Self::Login => "تسجيل الدخول",
            Self::ForgotPassword => "نسيت اسم المستخدم/كلمة المرور؟",
            Self::NeedHelp => "تحتاج مساعدة؟",
            Self::ContactUs => "اتصل بنا",
            Self::OurProducts => "منتجاتنا",
            Self::ExchangeRate => "أسعار العملات",
            Self::SecurityTips => "نصائح أمنية",
            Self::NearestBranch => "أقرب فرع أو ماكينة صراف",
            Self::Arabic => "English",
            Self::ShowPassword => "إظهار كلمة المرور",
            Self::HidePassword => "إخفاء كلمة المرور",
            Self::LogoDescription => "شعار بنك مصر",
        }
    }
}
