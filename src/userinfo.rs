//! Userinfo (`user[:password]`) from an authority.

use std::fmt;

/// Credentials preceding `@` in an authority.
///
/// An absent password (`user@host`) and an empty one (`user:@host`) are
/// different values and recompose differently.
///
/// # Examples
///
/// ```
/// use rawurl::Userinfo;
///
/// let info = Userinfo::parse("user:");
/// assert_eq!(info.username(), "user");
/// assert_eq!(info.password(), "");
/// assert!(info.password_set());
///
/// let info = Userinfo::parse("user");
/// assert!(!info.password_set());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Userinfo {
    username: String,
    password: Option<String>,
}

impl Userinfo {
    /// Creates userinfo with a username and no password field.
    #[must_use]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: None,
        }
    }

    /// Creates userinfo with a username and a (possibly empty) password.
    #[must_use]
    pub fn with_password(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
        }
    }

    /// Splits raw userinfo text (without `@`) at its first `:`.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        match input.split_once(':') {
            Some((username, password)) => Self::with_password(username, password),
            None => Self::new(input),
        }
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password, or an empty string if there is no password field.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or_default()
    }

    /// Returns true if a password field is present, even an empty one.
    #[must_use]
    pub const fn password_set(&self) -> bool {
        self.password.is_some()
    }

    pub(crate) fn set_username(&mut self, username: &str) {
        username.clone_into(&mut self.username);
    }

    pub(crate) fn set_password(&mut self, password: &str) {
        self.password = Some(password.to_string());
    }
}

impl fmt::Display for Userinfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.username)?;
        if let Some(password) = &self.password {
            write!(f, ":{password}")?;
        }
        Ok(())
    }
}
