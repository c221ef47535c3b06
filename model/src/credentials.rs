use serde::Deserialize;
use serde::Serialize;

/// The username/password the user has typed so far.
///
/// Lives only as long as the screen does. It is serializable so a screen can
/// be rebuilt after a reconfiguration without losing what was typed.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

// Keep the password out of logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &format_args!("<{} chars>", self.password.chars().count()))
            .finish()
    }
}
