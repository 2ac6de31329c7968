use crate::config::{ADMIN_EMAIL, ADMIN_PASSWORD};

/// The admin gate. A static comparison that only flips a UI capability flag;
/// it protects nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn from_config() -> Self {
        Self::new(ADMIN_EMAIL.as_str(), ADMIN_PASSWORD.as_str())
    }

    pub fn knows_email(&self, email: &str) -> bool {
        self.email.eq_ignore_ascii_case(email.trim())
    }

    pub fn verify(&self, email: &str, password: &str) -> bool {
        self.knows_email(email) && self.password == password
    }
}
