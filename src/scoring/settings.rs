// src/scoring/settings.rs
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::cli::types::{Category, StatKind};
use crate::error::{HoopsError, Result};
use crate::scoring::config::{CategoryConfig, CategorySetting, FantasyFormatConfig, PointsConfig};
use crate::SETTINGS_ENV_VAR;

/// Settings file shape, tagged by league format.
#[derive(Debug, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
enum FormatSettingsFile {
    Points(PointsSettingsFile),
    Category(CategorySettingsFile),
    #[serde(alias = "roto")]
    Rotisserie(CategorySettingsFile),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PointsSettingsFile {
    weights: Option<BTreeMap<String, f64>>,
    scored: Option<Vec<String>>,
    three_pointer_bonus: Option<f64>,
    double_double_bonus: Option<f64>,
    triple_double_bonus: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategorySettingsFile {
    categories: Option<Vec<CategoryEntry>>,
}

/// Either a bare key (`"PTS"`) or a key with flags.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Key(String),
    Detailed(DetailedCategoryEntry),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DetailedCategoryEntry {
    key: String,
    #[serde(default = "selected_by_default")]
    selected: bool,
    negative: Option<bool>,
}

fn selected_by_default() -> bool {
    true
}

impl PointsSettingsFile {
    fn into_config(self) -> Result<PointsConfig> {
        let mut config = match self.weights {
            Some(raw) => {
                let weights = raw
                    .into_iter()
                    .map(|(k, w)| k.parse::<StatKind>().map(|s| (s, w)))
                    .collect::<Result<Vec<_>>>()?;
                PointsConfig::from_weights(weights)
            }
            None => PointsConfig::default(),
        };

        if let Some(scored) = self.scored {
            let stats = scored
                .iter()
                .map(|s| s.parse::<StatKind>())
                .collect::<Result<Vec<_>>>()?;
            config = config.with_scored(stats);
        }
        if let Some(bonus) = self.three_pointer_bonus {
            config = config.with_three_pointer_bonus(bonus);
        }
        if let Some(bonus) = self.double_double_bonus {
            config = config.with_double_double_bonus(bonus);
        }
        if let Some(bonus) = self.triple_double_bonus {
            config = config.with_triple_double_bonus(bonus);
        }

        config.validate()?;
        Ok(config)
    }
}

impl CategorySettingsFile {
    fn into_config(self) -> Result<CategoryConfig> {
        let Some(entries) = self.categories else {
            return Ok(CategoryConfig::default());
        };

        let settings = entries
            .into_iter()
            .map(|entry| match entry {
                CategoryEntry::Key(key) => key.parse::<Category>().map(CategorySetting::new),
                CategoryEntry::Detailed(DetailedCategoryEntry {
                    key,
                    selected,
                    negative,
                }) => {
                    let category = key.parse::<Category>()?;
                    Ok(CategorySetting {
                        category,
                        selected,
                        negative: negative.unwrap_or_else(|| category.negative_by_default()),
                    })
                }
            })
            .collect::<Result<Vec<_>>>()?;
        CategoryConfig::new(settings)
    }
}

/// Parse and validate a settings document.
pub fn parse_format_config(json: &str) -> Result<FantasyFormatConfig> {
    let file: FormatSettingsFile = serde_json::from_str(json)?;
    match file {
        FormatSettingsFile::Points(p) => Ok(FantasyFormatConfig::Points(p.into_config()?)),
        FormatSettingsFile::Category(c) => Ok(FantasyFormatConfig::Category(c.into_config()?)),
        FormatSettingsFile::Rotisserie(c) => {
            Ok(FantasyFormatConfig::Rotisserie(c.into_config()?))
        }
    }
}

/// Path: $HOOPS_FANTASY_SETTINGS, else ~/.config/hoops-fantasy/scoring.json
pub fn settings_path() -> PathBuf {
    settings_path_from(std::env::var(SETTINGS_ENV_VAR).ok())
}

/// Resolve the settings path from an already-read override value.
/// Blank overrides fall through to the config directory.
pub fn settings_path_from(env_value: Option<String>) -> PathBuf {
    if let Some(path) = env_value {
        if !path.trim().is_empty() {
            return PathBuf::from(path);
        }
    }
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("hoops-fantasy").join("scoring.json")
}

/// Load the league format.
///
/// An explicit path must exist and parse. Without one, the default location
/// is tried; if nothing is there a fresh standard points config is returned.
pub fn load_format_config(path: Option<&Path>) -> Result<FantasyFormatConfig> {
    if let Some(p) = path {
        let contents = std::fs::read_to_string(p)?;
        return parse_format_config(&contents);
    }

    let default_path = settings_path();
    match std::fs::read_to_string(&default_path) {
        Ok(contents) => {
            debug!(path = %default_path.display(), "loaded scoring settings");
            parse_format_config(&contents)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(
                path = %default_path.display(),
                "no settings file, using standard points scoring"
            );
            Ok(FantasyFormatConfig::default())
        }
        Err(e) => {
            warn!(path = %default_path.display(), error = %e, "could not read settings file");
            Err(HoopsError::Io(e))
        }
    }
}
