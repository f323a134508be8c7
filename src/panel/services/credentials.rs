//! # Credential Providers
//!
//! Supply the bearer token sent with every API call. Injected into the
//! remote client instead of being read from ambient storage.

/// Environment variable consulted by `EnvCredential::default()`
pub const TOKEN_ENV_VAR: &str = "PANELFORM_TOKEN";

pub trait CredentialProvider: Send + Sync {
    /// Current bearer token, if one is available
    fn bearer_token(&self) -> Option<String>;
}

/// Fixed token, typically read from the profile
#[derive(Debug, Clone, Default)]
pub struct StaticCredential {
    token: Option<String>,
}

impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn none() -> Self {
        Self { token: None }
    }
}

impl CredentialProvider for StaticCredential {
    fn bearer_token(&self) -> Option<String> {
        self.token.clone()
    }
}

/// Token read from an environment variable on every call
#[derive(Debug, Clone)]
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

impl CredentialProvider for EnvCredential {
    fn bearer_token(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

/// First provider that yields a token wins
pub struct ChainedCredential {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl ChainedCredential {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }
}

impl CredentialProvider for ChainedCredential {
    fn bearer_token(&self) -> Option<String> {
        self.providers.iter().find_map(|p| p.bearer_token())
    }
}
