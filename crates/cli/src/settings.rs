use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use versecheck_core::shared::constants::{MULTI_VERSE_PASS_THRESHOLD, SINGLE_VERSE_PASS_THRESHOLD};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_single_verse_threshold")]
    pub single_verse_threshold: f64,
    #[serde(default = "default_multi_verse_threshold")]
    pub multi_verse_threshold: f64,
    #[serde(default)]
    pub show_diff: bool,
}

fn default_single_verse_threshold() -> f64 {
    SINGLE_VERSE_PASS_THRESHOLD
}

fn default_multi_verse_threshold() -> f64 {
    MULTI_VERSE_PASS_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            single_verse_threshold: default_single_verse_threshold(),
            multi_verse_threshold: default_multi_verse_threshold(),
            show_diff: false,
        }
    }
}

impl Settings {
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("versecheck").join("settings.json"))
    }

    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
                log::warn!("Ignoring invalid settings in {}: {e}", path.display());
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let s = Settings::load_from(&dir.path().join("settings.json"));
        assert_eq!(s, Settings::default());
        assert_eq!(s.single_verse_threshold, 90.0);
        assert_eq!(s.multi_verse_threshold, 80.0);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"multi_verse_threshold": 75.0}"#).unwrap();
        let s = Settings::load_from(&path);
        assert_eq!(s.multi_verse_threshold, 75.0);
        assert_eq!(s.single_verse_threshold, 90.0);
        assert!(!s.show_diff);
    }

    #[test]
    fn test_invalid_json_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let s = Settings {
            single_verse_threshold: 95.0,
            multi_verse_threshold: 85.0,
            show_diff: true,
        };
        s.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), s);
    }
}
