use crate::domain::error::Result;
use crate::infrastructure::security::keyring::KeyringManager;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
const API_BASE_URL_ENV: &str = "TESTPILOT_API_URL";
const AUTH_TOKEN_KEY: &str = "auth_token";

/// Process-wide settings: the API base URL and the bearer token held in
/// the OS credential store.
pub struct ConfigService {
    keyring: KeyringManager,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            keyring: KeyringManager::new("TestPilot"),
        }
    }

    pub fn api_base_url(&self) -> String {
        std::env::var(API_BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
    }

    pub fn save_auth_token(&self, token: &str) -> Result<()> {
        self.keyring.set_secret(AUTH_TOKEN_KEY, token)
    }

    /// `None` when no token is stored; callers turn that into the
    /// re-authentication redirect.
    pub fn auth_token(&self) -> Option<String> {
        self.keyring.get_secret(AUTH_TOKEN_KEY).ok()
    }

    pub fn clear_auth_token(&self) -> Result<()> {
        self.keyring.delete_secret(AUTH_TOKEN_KEY)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
