//! Loads the shell configuration, preferring an inline override in the page.

use crate::core::config::{ConfigError, ShellConfig};
use gloo::console;
use gloo::utils::document;

/// Id of the optional `<script type="application/json">` override.
const OVERRIDE_ELEMENT_ID: &str = "floatchat-config";

pub(crate) fn load() -> Result<ShellConfig, ConfigError> {
    if let Some(raw) = override_document() {
        match ShellConfig::from_json(&raw) {
            Ok(config) => return Ok(config),
            Err(err) => log_config_error("override", &err),
        }
    }
    ShellConfig::bundled().inspect_err(|err| log_config_error("bundled", err))
}

fn override_document() -> Option<String> {
    document()
        .get_element_by_id(OVERRIDE_ELEMENT_ID)
        .and_then(|element| element.text_content())
        .filter(|raw| !raw.trim().is_empty())
}

fn log_config_error(source: &'static str, err: &ConfigError) {
    console::error!("shell configuration rejected", source, err.to_string());
}
