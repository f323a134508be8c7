//! Configuration constants and profile loading for panelform
//!
//! Profiles live in an INI file; each section names a profile holding the API
//! base URL, the bearer token and the image base URL used by print views.

use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for panelform
pub const DEFAULT_PROFILE_PATH: &str = "~/.panelform/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "PANELFORM_PROFILE_PATH";

/// Base URL used when the profile does not set one
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

pub const BASE_URL_KEY: &str = "base_url";
pub const TOKEN_KEY: &str = "token";
pub const IMAGE_BASE_URL_KEY: &str = "image_base_url";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Connection settings of one profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub base_url: String,
    pub token: Option<String>,
    pub image_base_url: Option<String>,
}

impl Profile {
    /// Profile used when nothing is configured
    pub fn blank(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            image_base_url: None,
        }
    }
}

/// Reads profiles from an INI file
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Load a profile section; `Ok(None)` when the file or section is absent
    pub fn get_profile(&self, name: &str) -> Result<Option<Profile>> {
        let expanded = shellexpand::full(&self.path)
            .with_context(|| format!("Failed to expand profile path '{}'", self.path))?;
        let path = Path::new(&*expanded);
        if !path.exists() {
            tracing::debug!("Profile file '{}' does not exist", path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(path)
            .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;
        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let value = |key: &str| {
            section
                .get(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        Ok(Some(Profile {
            name: name.to_string(),
            base_url: value(BASE_URL_KEY).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: value(TOKEN_KEY),
            image_base_url: value(IMAGE_BASE_URL_KEY),
        }))
    }
}

/// Load a profile, falling back to a blank one when it is not configured
pub fn load_profile(profile_name: &str, profile_path: &str) -> Result<Profile> {
    tracing::debug!("Loading profile '{}' from '{}'", profile_name, profile_path);

    let store = IniProfileStore::new(profile_path);
    let profile = match store.get_profile(profile_name)? {
        Some(p) => {
            tracing::debug!("Profile loaded successfully, server: {}", p.base_url);
            p
        }
        None => {
            tracing::debug!("Profile '{}' not found, using blank profile", profile_name);
            Profile::blank(profile_name)
        }
    };

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn profile_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_profile_path() {
        assert_eq!(DEFAULT_PROFILE_PATH, "~/.panelform/profile");
    }

    #[test]
    fn test_get_profile_path_default_and_override() {
        // Save current env var state
        let original = std::env::var_os(PROFILE_PATH_ENV_VAR);

        std::env::remove_var(PROFILE_PATH_ENV_VAR);
        assert_eq!(get_profile_path(), DEFAULT_PROFILE_PATH);

        let test_path = "/custom/profile/path";
        std::env::set_var(PROFILE_PATH_ENV_VAR, test_path);
        assert_eq!(get_profile_path(), test_path);

        // Restore original state
        match original {
            Some(val) => std::env::set_var(PROFILE_PATH_ENV_VAR, val),
            None => std::env::remove_var(PROFILE_PATH_ENV_VAR),
        }
    }

    #[test]
    fn get_profile_should_read_section_values() {
        let file = profile_file(
            "[default]\nbase_url = https://panel.example/api\ntoken = abc123\n\n[staging]\nbase_url = https://staging.example/api\nimage_base_url = https://cdn.example/dir\n",
        );
        let store = IniProfileStore::new(file.path().to_string_lossy());

        let default = store.get_profile("default").unwrap().unwrap();
        assert_eq!(default.base_url, "https://panel.example/api");
        assert_eq!(default.token.as_deref(), Some("abc123"));
        assert_eq!(default.image_base_url, None);

        let staging = store.get_profile("staging").unwrap().unwrap();
        assert_eq!(staging.token, None);
        assert_eq!(
            staging.image_base_url.as_deref(),
            Some("https://cdn.example/dir")
        );
    }

    #[test]
    fn get_profile_should_return_none_for_missing_section_or_file() {
        let file = profile_file("[default]\nbase_url = https://panel.example/api\n");
        let store = IniProfileStore::new(file.path().to_string_lossy());
        assert_eq!(store.get_profile("prod").unwrap(), None);

        let missing = IniProfileStore::new("/nonexistent/panelform/profile");
        assert_eq!(missing.get_profile("default").unwrap(), None);
    }

    #[test]
    fn load_profile_should_fall_back_to_blank() {
        let profile = load_profile("dev", "/nonexistent/panelform/profile").unwrap();
        assert_eq!(profile, Profile::blank("dev"));
        assert_eq!(profile.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn blank_values_should_be_treated_as_unset() {
        let file = profile_file("[default]\nbase_url =\ntoken =   \n");
        let store = IniProfileStore::new(file.path().to_string_lossy());
        let profile = store.get_profile("default").unwrap().unwrap();
        assert_eq!(profile.base_url, DEFAULT_BASE_URL);
        assert_eq!(profile.token, None);
    }
}
