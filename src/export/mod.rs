//! JSON export of the current palette

use crate::color::Rgb;
use anyhow::Context;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedColor {
    pub hex: String,
    pub rgb: String,
    pub channels: [u8; 3],
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportedPalette {
    /// Unix seconds.
    pub generated_at: i64,
    pub colors: Vec<ExportedColor>,
}

impl ExportedPalette {
    pub fn new(colors: &[Rgb]) -> Self {
        Self {
            generated_at: time::OffsetDateTime::now_utc().unix_timestamp(),
            colors: colors
                .iter()
                .map(|c| ExportedColor {
                    hex: c.to_hex_css_string(),
                    rgb: c.to_css_string(),
                    channels: c.channels(),
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("encode palette json")
    }
}

/// Write the palette to `dir/file_name`, creating `dir` if needed. Returns the written path.
pub fn write_json(colors: &[Rgb], dir: &Path, file_name: &str) -> anyhow::Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let path = dir.join(file_name);
    let raw = ExportedPalette::new(colors).to_json()?;
    fs::write(&path, raw).with_context(|| format!("write {}", path.display()))?;
    tracing::info!(path = %path.display(), colors = colors.len(), "palette exported");
    Ok(path)
}
