use std::env;

use crate::{Error, Result};

/// Environment variable holding the application OAuth token.
pub const APP_TOKEN_ENV: &str = "APP_TOKEN";
/// Environment variable holding the application OAuth secret.
pub const APP_SECRET_ENV: &str = "APP_SECRET";
/// Environment variable holding the user-authorized OAuth token.
pub const ACCESS_TOKEN_ENV: &str = "ACCESS_TOKEN";
/// Environment variable holding the user-authorized OAuth secret.
pub const ACCESS_SECRET_ENV: &str = "ACCESS_SECRET";

/// The two OAuth 1.0a token/secret pairs the Copy API requires: one for the
/// application identity and one for the user that authorized it.
///
/// Immutable once constructed. Every field must be non-empty; a blank value
/// almost always means a missing environment variable, so construction fails
/// early instead of producing requests the server will reject.
#[derive(Debug, Clone)]
pub struct Credentials {
    app_token: String,
    app_secret: String,
    access_token: String,
    access_secret: String,
}

impl Credentials {
    pub fn new<T>(app_token: T, app_secret: T, access_token: T, access_secret: T) -> Result<Self>
    where
        T: Into<String>,
    {
        let credentials = Credentials {
            app_token: app_token.into(),
            app_secret: app_secret.into(),
            access_token: access_token.into(),
            access_secret: access_secret.into(),
        };
        for (name, value) in [
            ("app token", &credentials.app_token),
            ("app secret", &credentials.app_secret),
            ("access token", &credentials.access_token),
            ("access secret", &credentials.access_secret),
        ] {
            if value.is_empty() {
                return Err(Error::Configuration(name));
            }
        }
        Ok(credentials)
    }

    /// Reads all four secrets from `APP_TOKEN`, `APP_SECRET`, `ACCESS_TOKEN`
    /// and `ACCESS_SECRET`.
    pub fn from_env() -> Result<Self> {
        Credentials::new(
            env::var(APP_TOKEN_ENV).unwrap_or_default(),
            env::var(APP_SECRET_ENV).unwrap_or_default(),
            env::var(ACCESS_TOKEN_ENV).unwrap_or_default(),
            env::var(ACCESS_SECRET_ENV).unwrap_or_default(),
        )
    }

    /// Application (consumer) token and secret.
    pub fn app_pair(&self) -> (&str, &str) {
        (&self.app_token, &self.app_secret)
    }

    /// User access token and secret.
    pub fn access_pair(&self) -> (&str, &str) {
        (&self.access_token, &self.access_secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_fields_present() {
        let credentials = Credentials::new("at", "as", "tt", "ts").unwrap();
        assert_eq!(credentials.app_pair(), ("at", "as"));
        assert_eq!(credentials.access_pair(), ("tt", "ts"));
    }

    #[test]
    fn any_empty_field_fails() {
        let tuples = [
            ("", "as", "tt", "ts", "app token"),
            ("at", "", "tt", "ts", "app secret"),
            ("at", "as", "", "ts", "access token"),
            ("at", "as", "tt", "", "access secret"),
        ];
        for (app_token, app_secret, access_token, access_secret, field) in tuples {
            match Credentials::new(app_token, app_secret, access_token, access_secret) {
                Err(Error::Configuration(name)) => assert_eq!(name, field),
                other => panic!("expected configuration error, got {:?}", other),
            }
        }
    }

    #[test]
    fn from_env_reads_all_four() {
        env::set_var(APP_TOKEN_ENV, "env-app-token");
        env::set_var(APP_SECRET_ENV, "env-app-secret");
        env::set_var(ACCESS_TOKEN_ENV, "env-access-token");
        env::set_var(ACCESS_SECRET_ENV, "env-access-secret");
        let credentials = Credentials::from_env().unwrap();
        assert_eq!(credentials.app_pair(), ("env-app-token", "env-app-secret"));
        assert_eq!(
            credentials.access_pair(),
            ("env-access-token", "env-access-secret")
        );
    }
}
