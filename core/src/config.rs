//! Typed client configuration.

use crate::types::Credentials;

/// The live Restful-Booker deployment.
pub const DEFAULT_BASE_URL: &str = "https://restful-booker.herokuapp.com";
/// Credentials the live service accepts.
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password123";

/// Everything a `BookingSession` needs to open: where the service lives and
/// which credentials to authenticate with.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl Config {
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Read `BOOKER_BASE_URL` / `BOOKER_USERNAME` / `BOOKER_PASSWORD`,
    /// falling back to the live deployment's defaults.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("BOOKER_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            username: std::env::var("BOOKER_USERNAME")
                .unwrap_or_else(|_| DEFAULT_USERNAME.to_string()),
            password: std::env::var("BOOKER_PASSWORD")
                .unwrap_or_else(|_| DEFAULT_PASSWORD.to_string()),
        }
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}
