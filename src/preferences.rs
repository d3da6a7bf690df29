use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Connection settings for the webhook backend.
///
/// All three fields must be present before the chat loop starts; the binary
/// refuses to run unconfigured and points the user at `chatty settings`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
    pub webhook_url: String,
    pub username: String,
    pub password: String,

    #[serde(skip)]
    file_path: Option<String>,
}

impl Settings {
    pub fn ephemeral() -> Self {
        Self::default()
    }

    pub fn with_file(file_path: &str) -> Self {
        Self {
            file_path: Some(file_path.to_string()),
            ..Self::default()
        }
    }

    pub fn load_or_ephemeral(file_path: Option<&str>) -> Self {
        match file_path {
            Some(path) => Self::load_from_file(path).unwrap_or_else(|e| {
                log::error!("Failed to load settings from {path}: {e}");
                Self::with_file(path)
            }),
            None => Self::ephemeral(),
        }
    }

    pub fn load_from_file(file_path: &str) -> anyhow::Result<Self> {
        let path = Path::new(file_path);
        if path.exists() {
            let content = fs::read_to_string(path)?;

            match serde_json::from_str::<Self>(&content) {
                Ok(mut settings) => {
                    settings.file_path = Some(file_path.to_string());
                    Ok(settings)
                }
                Err(e) => {
                    log::error!("Failed to parse settings file: {e}");
                    Err(anyhow::anyhow!("Failed to parse settings: {}", e))
                }
            }
        } else {
            Ok(Self::with_file(file_path))
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        match &self.file_path {
            Some(path) => {
                let content = serde_json::to_string_pretty(self)?;
                fs::write(path, content)?;
                Ok(())
            }
            None => Ok(()),
        }
    }

    /// Environment variables win over the settings file.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var("CHATTY_WEBHOOK_URL") {
            self.webhook_url = url;
        }
        if let Ok(username) = std::env::var("CHATTY_USERNAME") {
            self.username = username;
        }
        if let Ok(password) = std::env::var("CHATTY_PASSWORD") {
            self.password = password;
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.webhook_url.is_empty() && !self.username.is_empty() && !self.password.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ephemeral_settings_are_unconfigured() {
        assert!(!Settings::ephemeral().is_configured());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let path_str = path.to_str().unwrap();

        let mut settings = Settings::with_file(path_str);
        settings.webhook_url = "https://n8n.example.com/webhook/chat".to_string();
        settings.username = "alice".to_string();
        settings.password = "secret".to_string();
        settings.save().unwrap();

        let reloaded = Settings::load_from_file(path_str).unwrap();
        assert!(reloaded.is_configured());
        assert_eq!(reloaded.webhook_url, settings.webhook_url);
        assert_eq!(reloaded.username, "alice");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let settings = Settings::load_from_file(path.to_str().unwrap()).unwrap();
        assert!(!settings.is_configured());
    }
}
