use serde_derive::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_PROFILE_NAME: &str = "default";
pub const DEFAULT_STORAGE_KEY: &str = "activities";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    #[serde(default)]
    pub profile: HashMap<String, ProfileConfig>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CoreConfig {
    /// Profile used by default when none are specified
    pub default_profile_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ProfileConfig {
    /// Storage backend used by this profile, `file` or `in-memory` (default: file)
    pub storage_type: Option<String>,

    /// Directory where the file backend keeps its keys (default: ~/.local/share/actstore)
    pub storage_location: Option<String>,

    /// Key the activity snapshot is stored under (default: activities)
    pub storage_key: Option<String>,

    /// How new ids are derived, `monotonic` or `persisted-count` (default: monotonic)
    pub id_allocation: Option<String>,
}

impl Config {
    /// Builds a config holding a single default profile.
    pub fn with_default_profile() -> Self {
        let mut profile = HashMap::new();
        profile.insert(DEFAULT_PROFILE_NAME.to_owned(), ProfileConfig::default());

        Self {
            core: CoreConfig::default(),
            profile,
        }
    }

    /// Gets the profile named `profile_name`, falling back on `default_profile_name`.
    pub fn get_profile(&self, profile_name: Option<&str>) -> eyre::Result<&ProfileConfig> {
        let profile_name = profile_name
            .map(|p| p.to_owned())
            .unwrap_or_else(|| self.core.get_default_profile_name());

        self.profile
            .get(&profile_name)
            .ok_or_else(|| eyre::eyre!("Profile '{profile_name}' not found in config"))
    }
}

impl CoreConfig {
    /// Return the default profile name is set or "default"
    pub fn get_default_profile_name(&self) -> String {
        self.default_profile_name
            .clone()
            .unwrap_or(DEFAULT_PROFILE_NAME.to_owned())
    }
}

impl ProfileConfig {
    pub fn get_storage_type(&self) -> &str {
        self.storage_type.as_deref().unwrap_or("file")
    }

    pub fn get_storage_location(&self) -> eyre::Result<PathBuf> {
        let path_raw = self
            .storage_location
            .as_deref()
            .unwrap_or("~/.local/share/actstore");

        Ok(PathBuf::from(shellexpand::full(path_raw)?.into_owned()))
    }

    pub fn get_storage_key(&self) -> &str {
        self.storage_key.as_deref().unwrap_or(DEFAULT_STORAGE_KEY)
    }

    pub fn get_id_allocation(&self) -> &str {
        self.id_allocation.as_deref().unwrap_or("monotonic")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let profile = ProfileConfig::default();

        assert_eq!(profile.get_storage_type(), "file");
        assert_eq!(profile.get_storage_key(), "activities");
        assert_eq!(profile.get_id_allocation(), "monotonic");
    }

    #[test]
    fn test_get_profile_uses_default_name() -> eyre::Result<()> {
        let config: Config = toml::from_str(
            r#"
            [core]
            default_profile_name = "work"

            [profile.work]
            storage_type = "in-memory"
            storage_key = "work-activities"
            "#,
        )?;

        let profile = config.get_profile(None)?;
        assert_eq!(profile.get_storage_type(), "in-memory");
        assert_eq!(profile.get_storage_key(), "work-activities");

        assert!(config.get_profile(Some("home")).is_err());
        Ok(())
    }

    #[test]
    fn test_storage_location_expands_tilde() -> eyre::Result<()> {
        let profile = ProfileConfig {
            storage_location: Some("~/actstore-data".to_owned()),
            ..Default::default()
        };
        let home = PathBuf::from(shellexpand::tilde("~").into_owned());

        let location = profile.get_storage_location()?;
        assert!(!location.starts_with("~"));
        assert_eq!(location, home.join("actstore-data"));

        let absolute = ProfileConfig {
            storage_location: Some("/tmp/actstore-data".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            absolute.get_storage_location()?,
            PathBuf::from("/tmp/actstore-data")
        );
        Ok(())
    }
}
