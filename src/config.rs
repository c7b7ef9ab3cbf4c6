use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::input::PartialInputs;
use crate::output::{OutputFormat, ReportOptions};

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
}

/// Preset inputs; anything left unset is prompted for
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct InputConfig {
    pub angle: Option<i64>,
    pub size: Option<i64>,
    pub length: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub precision: Option<usize>,
    pub show_lengths: bool,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/logo-coords/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("logo-coords").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists.
    /// A file that fails to parse is logged and ignored.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("{:#}; using defaults", e);
                None
            }
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::generate_config_template())?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r#"# logo-coords configuration

[input]
# Preset values skip their prompt. Command-line flags take priority.
# angle = 65
# size = 75
# length = 170

[output]
# Output format: "text" or "toml"
format = "text"
# Fixed number of decimals for text output (omit for shortest form)
# precision = 3
# Print rh, rhp, rhpp, rw, rwp, rwpp before the points
show_lengths = false
"#
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(angle) = args.angle {
            self.input.angle = Some(angle);
        }
        if let Some(size) = args.size {
            self.input.size = Some(size);
        }
        if let Some(length) = args.length {
            self.input.length = Some(length);
        }

        if let Some(format) = args.format {
            self.output.format = format;
        }
        if let Some(precision) = args.precision {
            self.output.precision = Some(precision);
        }
        if args.show_lengths {
            self.output.show_lengths = true;
        }
    }

    pub fn preset_inputs(&self) -> PartialInputs {
        PartialInputs {
            angle: self.input.angle,
            size: self.input.size,
            length: self.input.length,
        }
    }

    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            format: self.output.format,
            precision: self.output.precision,
            show_lengths: self.output.show_lengths,
        }
    }
}
