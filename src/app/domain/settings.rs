use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::record::Category;
use crate::app::error::Result;

const APP_DIR: &str = "manual-label-maker";
const INTERMEDIATE_FILE: &str = "GENERATED_Label_Template.docx";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Base document the labels are appended to. Built-in blank page if unset.
    #[serde(default)]
    pub template_path: Option<PathBuf>,

    /// Where the skeleton document is written before substitution.
    #[serde(default)]
    pub intermediate_path: Option<PathBuf>,

    /// Caption font size in points.
    #[serde(default = "default_caption_font_size")]
    pub caption_font_size: u32,

    /// Substituted value font size in half-points, as stored in `w:sz`.
    #[serde(default = "default_value_font_size")]
    pub value_font_size: u32,

    #[serde(default = "default_category")]
    pub default_category: Category,

    #[serde(default)]
    pub open_after_save: bool,

    #[serde(default)]
    pub last_save_directory: Option<PathBuf>,
}

fn default_caption_font_size() -> u32 {
    16
}

fn default_value_font_size() -> u32 {
    32 // 16pt
}

fn default_category() -> Category {
    Category::Envelope
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            template_path: None,
            intermediate_path: None,
            caption_font_size: default_caption_font_size(),
            value_font_size: default_value_font_size(),
            default_category: default_category(),
            open_after_save: false,
            last_save_directory: None,
        }
    }
}

impl AppSettings {
    /// Load settings from disk, or create default if not exists
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    tracing::warn!(
                        path = %config_path.display(),
                        error = %e,
                        "failed to parse settings, using defaults"
                    );
                    Self::default()
                }
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                // First run, write defaults
                let default = Self::default();
                if let Err(e) = default.save_to(config_path) {
                    tracing::debug!(error = %e, "could not write default settings");
                }
                default
            }
            Err(e) => {
                tracing::warn!(
                    path = %config_path.display(),
                    error = %e,
                    "failed to read settings, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push("settings.json");
        path
    }

    /// Fixed location of the skeleton document, overwritten on every run.
    pub fn intermediate_path(&self) -> PathBuf {
        if let Some(ref path) = self.intermediate_path {
            return path.clone();
        }
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(APP_DIR);
        path.push(INTERMEDIATE_FILE);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.caption_font_size, 16);
        assert_eq!(settings.value_font_size, 32);
        assert_eq!(settings.default_category, Category::Envelope);
        assert!(settings.template_path.is_none());
        assert!(!settings.open_after_save);
    }

    #[test]
    fn test_partial_config() {
        let json = r#"{"value_font_size": 40}"#;
        let settings: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.value_font_size, 40);
        assert_eq!(settings.caption_font_size, 16); // Should use default
    }

    #[test]
    fn test_category_serialization() {
        let settings = AppSettings {
            default_category: Category::Card,
            ..Default::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"Card\""));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            template_path: Some(PathBuf::from("/tmp/base.docx")),
            open_after_save: true,
            ..Default::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path), settings);
    }

    #[test]
    fn test_load_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let settings = AppSettings::load_from(&path);
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());
    }

    #[test]
    fn test_load_corrupt_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
    }

    #[test]
    fn test_load_unreadable_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let original = b"{\"template_path\": \"/srv/caf\xe9.docx\"}".to_vec();
        fs::write(&path, &original).unwrap();

        assert_eq!(AppSettings::load_from(&path), AppSettings::default());
        assert_eq!(fs::read(&path).unwrap(), original);
    }

    #[test]
    fn test_intermediate_path_override() {
        let settings = AppSettings {
            intermediate_path: Some(PathBuf::from("skeleton.docx")),
            ..Default::default()
        };
        assert_eq!(settings.intermediate_path(), PathBuf::from("skeleton.docx"));

        let default_path = AppSettings::default().intermediate_path();
        assert!(default_path.ends_with("manual-label-maker/GENERATED_Label_Template.docx"));
    }
}
