//! File-based settings provider (YAML)
//!
//! Supports user-level (~/.config/toolshelf/config.yaml) and workspace-level (.config/toolshelf/config.yaml) files.

use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::settings::Settings;
use super::{ConfigError, ConfigResult};

/// Config level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLevel {
    User,
    Workspace,
}

impl ConfigLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigLevel::User => "user",
            ConfigLevel::Workspace => "workspace",
        }
    }
}

/// Reads and writes `Settings` from a YAML file
///
/// A missing file yields `Settings::default()`.
///
/// ```no_run
/// use toolshelf_core::config::FileSettingsProvider;
///
/// let settings = FileSettingsProvider::user().settings().unwrap();
/// ```
pub struct FileSettingsProvider {
    path: PathBuf,
    level: ConfigLevel,
    cache: RwLock<Option<Settings>>,
}

impl FileSettingsProvider {
    pub fn new(path: impl Into<PathBuf>, level: ConfigLevel) -> Self {
        Self {
            path: path.into(),
            level,
            cache: RwLock::new(None),
        }
    }

    /// User-level settings (~/.config/toolshelf/config.yaml)
    pub fn user() -> Self {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("toolshelf").join("config.yaml"), ConfigLevel::User)
    }

    /// Workspace-level settings (.config/toolshelf/config.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root.as_ref().join(".config").join("toolshelf").join("config.yaml");
        Self::new(path, ConfigLevel::Workspace)
    }

    /// The workspace file when it exists, otherwise the user file
    pub fn discover(workspace_root: impl AsRef<Path>) -> Self {
        let workspace = Self::workspace(workspace_root);
        if workspace.exists() {
            workspace
        } else {
            Self::user()
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> ConfigLevel {
        self.level
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn load(&self) -> ConfigResult<Settings> {
        if !self.path.exists() {
            return Ok(Settings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        serde_yaml::from_str(&content).map_err(ConfigError::Yaml)
    }

    /// Cached settings, loading the file on first use
    pub fn settings(&self) -> ConfigResult<Settings> {
        if let Some(settings) = self.cache.read().as_ref() {
            return Ok(settings.clone());
        }
        let settings = self.load()?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }

    /// Re-read the file, replacing the cache
    pub fn reload(&self) -> ConfigResult<Settings> {
        let settings = self.load()?;
        *self.cache.write() = Some(settings.clone());
        Ok(settings)
    }

    pub fn save(&self, settings: &Settings) -> ConfigResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(settings).map_err(ConfigError::Yaml)?;
        fs::write(&self.path, content)?;
        *self.cache.write() = Some(settings.clone());
        Ok(())
    }
}

impl std::fmt::Debug for FileSettingsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileSettingsProvider")
            .field("path", &self.path)
            .field("level", &self.level)
            .field("exists", &self.exists())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let provider = FileSettingsProvider::workspace(dir.path());
        assert!(!provider.exists());
        assert_eq!(provider.level().as_str(), "workspace");
        assert_eq!(provider.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let provider = FileSettingsProvider::new(&path, ConfigLevel::User);

        let settings = Settings {
            locale: Locale::ZhCn,
            banner_duration_ms: 5000,
            ..Settings::default()
        };
        provider.save(&settings).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("zh-CN"));

        let other = FileSettingsProvider::new(&path, ConfigLevel::User);
        assert_eq!(other.reload().unwrap(), settings);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "banner_duration_ms: [not a number").unwrap();

        let provider = FileSettingsProvider::new(&path, ConfigLevel::User);
        assert!(matches!(provider.settings(), Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_discover_prefers_workspace_file() {
        let dir = tempdir().unwrap();
        let provider = FileSettingsProvider::discover(dir.path());
        assert_eq!(provider.level(), ConfigLevel::User);

        let workspace = FileSettingsProvider::workspace(dir.path());
        workspace
            .save(&Settings {
                banner_duration_ms: 1500,
                ..Settings::default()
            })
            .unwrap();

        let provider = FileSettingsProvider::discover(dir.path());
        assert_eq!(provider.level(), ConfigLevel::Workspace);
        assert_eq!(provider.settings().unwrap().banner_duration_ms, 1500);
    }
}
