//! Configuration structs for the web front-end.
use serde::{Deserialize, Serialize};

/// Default avatar shown in the account dropdown trigger.
pub const DEFAULT_AVATAR_URL: &str = "https://gravatar.com/avatar/00000000000000000000000000000000?d=mp";

/// Presentation settings for the top navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarConfig {
    /// Brand text rendered at the left edge of the bar.
    pub brand: String,
    /// Where the brand link points (defaults to `/`).
    pub brand_href: String,
    /// Image URL used for the avatar that opens the account dropdown.
    pub avatar_url: String,
    /// Optional log level override (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: Option<String>,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            brand: "Ticketify".to_string(),
            brand_href: "/".to_string(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
            log_level: None,
        }
    }
}

impl NavbarConfig {
    /// Parse a config document; absent fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = NavbarConfig::from_json(r#"{"brand":"Tix","log_level":"debug"}"#).unwrap();
        assert_eq!(config.brand, "Tix");
        assert_eq!(config.brand_href, "/");
        assert_eq!(config.avatar_url, DEFAULT_AVATAR_URL);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn empty_document_is_default() {
        assert_eq!(NavbarConfig::from_json("{}").unwrap(), NavbarConfig::default());
    }
}
