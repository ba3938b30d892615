//! ==============================================================================
//! config.rs - header configuration from the host page
//! ==============================================================================
//!
//! the host page embeds the configuration as json:
//!
//!     <script id="header-config" type="application/json">
//!         {"logoSrc": "/logo.svg", "title": "AUTO TRADING TRACKER", "showControlPanel": true}
//!     </script>
//!
//! loading never fails: a missing or malformed blob degrades to
//! `HeaderConfiguration::default()` (empty logo, default title and controls).
//!
//! ==============================================================================

use shared::HeaderConfiguration;

/// id of the script element holding the json blob
pub const CONFIG_ELEMENT_ID: &str = "header-config";

pub fn load_header_config() -> HeaderConfiguration {
    parse_header_config(read_config_blob().as_deref())
}

/// turn the raw blob (if any) into a configuration; blank counts as missing
pub fn parse_header_config(raw: Option<&str>) -> HeaderConfiguration {
    let Some(raw) = raw.filter(|raw| !raw.trim().is_empty()) else {
        tracing::debug!(id = CONFIG_ELEMENT_ID, "no header config blob, using defaults");
        return HeaderConfiguration::default();
    };

    match HeaderConfiguration::from_json(raw) {
        Ok(config) => {
            tracing::info!(logo_src = %config.logo_src, "loaded header config");
            config
        }
        Err(e) => {
            tracing::warn!(error = %e, "ignoring header config blob");
            HeaderConfiguration::default()
        }
    }
}

fn read_config_blob() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content()
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_blob_uses_defaults() {
        assert_eq!(parse_header_config(None), HeaderConfiguration::default());
    }

    #[test]
    fn test_blank_blob_counts_as_missing() {
        assert_eq!(parse_header_config(Some("   \n\t ")), HeaderConfiguration::default());
    }

    #[test]
    fn test_malformed_blob_uses_defaults() {
        assert_eq!(parse_header_config(Some("{bad")), HeaderConfiguration::default());
    }

    #[test]
    fn test_valid_blob_is_used() {
        let config = parse_header_config(Some(
            r#"{"logoSrc": "/logo.svg", "title": "DEMO", "showControlPanel": false}"#,
        ));
        assert_eq!(
            config,
            HeaderConfiguration::new("/logo.svg")
                .with_title("DEMO")
                .with_control_panel(false)
        );
    }

    #[test]
    fn test_blob_without_logo_keeps_caller_fields() {
        let config = parse_header_config(Some(r#"{"title": "DEMO", "showControlPanel": false}"#));
        assert_eq!(config.logo_src, "");
        assert_eq!(config.title.as_deref(), Some("DEMO"));
        assert_eq!(config.show_control_panel, Some(false));
    }
}
