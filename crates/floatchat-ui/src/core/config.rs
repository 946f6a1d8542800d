//! Shell configuration: branding, profile card and sidebar geometry.
//!
//! Defaults are compiled in from `config/shell.json`; the page may override
//! them with an inline JSON document (see `app::config`).

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_JSON: &str = include_str!("../../config/shell.json");

/// Errors raised while loading a [`ShellConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the schema.
    #[error("failed to parse shell configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("invalid shell configuration field `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },
}

/// Product name block at the top of the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct BrandConfig {
    /// Product name.
    pub title: String,
    /// Edition caption under the name.
    pub subtitle: String,
}

/// Signed-in user card.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProfileConfig {
    /// Display name.
    pub name: String,
    /// Avatar initials.
    pub initials: String,
    /// Plan caption.
    pub tier: String,
}

/// Sidebar rail widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct SidebarConfig {
    /// Width while expanded.
    pub expanded_width: u16,
    /// Width while collapsed.
    pub collapsed_width: u16,
}

/// Everything the layout shell reads at mount.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ShellConfig {
    /// Branding.
    pub brand: BrandConfig,
    /// Profile card.
    pub profile: ProfileConfig,
    /// Sidebar geometry.
    pub sidebar: SidebarConfig,
    /// Placeholder of the global search box.
    pub search_placeholder: String,
}

impl ShellConfig {
    /// Parse and validate a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::Invalid`] when a value fails validation.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Compiled-in defaults.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled `shell.json` is broken.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_JSON)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let sidebar = self.sidebar;
        if sidebar.collapsed_width == 0 {
            return Err(ConfigError::Invalid {
                field: "sidebar.collapsed_width",
                reason: "must be greater than zero",
            });
        }
        if sidebar.collapsed_width >= sidebar.expanded_width {
            return Err(ConfigError::Invalid {
                field: "sidebar.collapsed_width",
                reason: "must be narrower than expanded_width",
            });
        }
        let initials = self.profile.initials.chars().count();
        if !(1..=3).contains(&initials) {
            return Err(ConfigError::Invalid {
                field: "profile.initials",
                reason: "must be one to three characters",
            });
        }
        if self.brand.title.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "brand.title",
                reason: "must not be empty",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_defaults_are_valid() -> Result<(), ConfigError> {
        let config = ShellConfig::bundled()?;
        assert_eq!(config.brand.title, "FloatChat");
        assert_eq!(config.profile.initials, "AN");
        assert_eq!(config.sidebar.expanded_width, 280);
        assert_eq!(config.sidebar.collapsed_width, 80);
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ShellConfig::from_json("{ not json").err();
        assert!(matches!(err, Some(ConfigError::Parse(_))));
    }

    #[test]
    fn collapsed_wider_than_expanded_is_rejected() {
        let raw = DEFAULT_JSON.replace("\"collapsed_width\": 80", "\"collapsed_width\": 300");
        let err = ShellConfig::from_json(&raw).err();
        assert!(matches!(
            err,
            Some(ConfigError::Invalid {
                field: "sidebar.collapsed_width",
                ..
            })
        ));
    }

    #[test]
    fn long_initials_are_rejected() {
        let raw = DEFAULT_JSON.replace("\"AN\"", "\"ABCD\"");
        let err = ShellConfig::from_json(&raw).err();
        assert!(err.is_some_and(|err| err.to_string().contains("profile.initials")));
    }
}
