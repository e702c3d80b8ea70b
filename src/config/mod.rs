use crate::palette::{MAX_CARDS, PaletteConfig};
use anyhow::{Context, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub palette: PaletteSection,
    pub notifier: NotifierConfig,
    pub export: ExportConfig,
    pub input: InputConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteSection {
    /// Number of color cards.
    pub cards: usize,
    /// Fixed RNG seed for reproducible palettes.
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifierConfig {
    /// Show the "copied" overlay after a successful copy.
    pub enabled: bool,
    /// Seconds before the overlay closes itself.
    pub auto_close_secs: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: PathBuf,
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for PaletteSection {
    fn default() -> Self {
        Self {
            cards: 5,
            seed: None,
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            auto_close_secs: 5.0,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            file_name: "colors.json".to_string(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let proj = ProjectDirs::from("dev", "huebox", "huebox");
        let data_dir = proj
            .as_ref()
            .map(|p| p.data_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("huebox"));
        Self { data_dir }
    }
}

impl Config {
    /// Reject values the app cannot run with. Called once after loading.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.palette.cards == 0 || self.palette.cards > MAX_CARDS {
            bail!(
                "palette.cards must be between 1 and {MAX_CARDS}, got {}",
                self.palette.cards
            );
        }
        if !self.notifier.auto_close_secs.is_finite() || self.notifier.auto_close_secs < 0.0 {
            bail!(
                "notifier.auto_close_secs must be a non-negative number, got {}",
                self.notifier.auto_close_secs
            );
        }
        let name = self.export.file_name.trim();
        if name.is_empty() || name.contains(['/', '\\']) {
            bail!("export.file_name must be a plain file name, got {:?}", self.export.file_name);
        }
        Ok(())
    }

    pub fn palette_config(&self) -> PaletteConfig {
        PaletteConfig {
            cards: self.palette.cards,
            notifications: self.notifier.enabled,
            auto_close_secs: self.notifier.auto_close_secs,
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "huebox", "huebox").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Load the config, writing defaults on first run.
pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = Config::default();
        save(&cfg, Some(&path)).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let cfg: Config = toml::from_str("[palette]\ncards = 3\n").unwrap();
        assert_eq!(cfg.palette.cards, 3);
        assert!(cfg.notifier.enabled);
        assert_eq!(cfg.notifier.auto_close_secs, 5.0);
        assert_eq!(cfg.export.file_name, "colors.json");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut cfg = Config::default();
        cfg.palette.cards = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.notifier.auto_close_secs = -1.0;
        assert!(cfg.validate().is_err());

        let mut cfg = Config::default();
        cfg.export.file_name = "../colors.json".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_load_writes_defaults_then_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let first = load(Some(&path)).unwrap();
        assert!(path.exists());

        let mut changed = first.clone();
        changed.palette.cards = 7;
        changed.notifier.enabled = false;
        save(&changed, Some(&path)).unwrap();

        let second = load(Some(&path)).unwrap();
        assert_eq!(second.palette.cards, 7);
        assert!(!second.notifier.enabled);
        assert_eq!(second.palette_config().cards, 7);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[palette]\ncards = 40\n").unwrap();
        assert!(load(Some(&path)).is_err());
    }
}
