//! ==============================================================================
//! config.rs - header configuration
//! ==============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ==============================================================================
// types
// ==============================================================================

/// input to a single header render
///
/// plain value: `None` means the caller omitted the field. defaults are
/// applied by `header_bar::render`, never here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderConfiguration {
    /// image locator, passed through verbatim to the logo element.
    /// an omitted key reads as an empty reference, not an error
    #[serde(default)]
    pub logo_src: String,
    /// main heading text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// whether the start/stop control block is rendered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_control_panel: Option<bool>,
}

/// errors raised while loading a configuration blob
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed header configuration: {0}")]
    Malformed(#[from] serde_json::Error),
}

// ==============================================================================
// construction
// ==============================================================================

impl HeaderConfiguration {
    pub fn new(logo_src: impl Into<String>) -> Self {
        Self {
            logo_src: logo_src.into(),
            title: None,
            show_control_panel: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_control_panel(mut self, show: bool) -> Self {
        self.show_control_panel = Some(show);
        self
    }

    /// parse a configuration from its json form (`logoSrc`, `title`, `showControlPanel`)
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_omitted_fields_stay_none() {
        let config = HeaderConfiguration::from_json(r#"{"logoSrc": "/logo.svg"}"#).unwrap();
        assert_eq!(config, HeaderConfiguration::new("/logo.svg"));
        assert!(config.title.is_none());
        assert!(config.show_control_panel.is_none());
    }

    #[test]
    fn test_from_json_all_fields() {
        let raw = r#"{"logoSrc": "/logo.svg", "title": "DEMO", "showControlPanel": false}"#;
        let config = HeaderConfiguration::from_json(raw).unwrap();
        assert_eq!(config.title.as_deref(), Some("DEMO"));
        assert_eq!(config.show_control_panel, Some(false));
    }

    #[test]
    fn test_from_json_malformed() {
        let err = HeaderConfiguration::from_json("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::Malformed(_)));
        assert!(err.to_string().starts_with("malformed header configuration"));
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let config = HeaderConfiguration::new("x.png").with_control_panel(true);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"logoSrc\":\"x.png\""));
        assert!(json.contains("\"showControlPanel\":true"));
        assert!(!json.contains("title"));
    }

    #[test]
    fn test_from_json_without_logo_keeps_other_fields() {
        let raw = r#"{"title": "DEMO", "showControlPanel": false}"#;
        let config = HeaderConfiguration::from_json(raw).unwrap();
        assert_eq!(config.logo_src, "");
        assert_eq!(config.title.as_deref(), Some("DEMO"));
        assert_eq!(config.show_control_panel, Some(false));

        let tree = crate::render(&config);
        let logo = tree.find_by_class(crate::classes::LOGO).unwrap();
        assert_eq!(logo.attr("src"), Some(""));
        assert_eq!(
            tree.find_by_class(crate::classes::TITLE_MAIN).unwrap().text_content(),
            "DEMO"
        );
        assert!(tree.find_by_class(crate::classes::CONTROL).is_none());
    }

    #[test]
    fn test_default_has_empty_logo() {
        let config = HeaderConfiguration::default();
        assert!(config.logo_src.is_empty());
        assert!(config.title.is_none());
    }
}
