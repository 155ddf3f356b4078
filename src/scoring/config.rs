//! Fantasy format configuration values
//!
//! Every config here is an immutable value built fresh by its caller. There is
//! no shared default instance; `Default` simply constructs a new one.

use crate::cli::types::{Category, StatKind};
use crate::error::{HoopsError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Points-league settings: a weight per scored stat plus bonuses.
///
/// # Examples
///
/// ```rust
/// use hoops_fantasy::{scoring::PointsConfig, StatKind};
///
/// let config = PointsConfig::default()
///     .with_weight(StatKind::FieldGoalsAttempted, -0.45)
///     .with_double_double_bonus(2.0);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.weight(StatKind::Rebounds), Some(1.2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointsConfig {
    weights: BTreeMap<StatKind, f64>,
    scored: BTreeSet<StatKind>,
    three_pointer_bonus: f64,
    double_double_bonus: Option<f64>,
    triple_double_bonus: Option<f64>,
}

impl Default for PointsConfig {
    /// Standard weights with a +0.5 bonus per made three and no
    /// double-double or triple-double bonus.
    fn default() -> Self {
        Self::from_weights([
            (StatKind::Points, 1.0),
            (StatKind::Rebounds, 1.2),
            (StatKind::Assists, 1.5),
            (StatKind::Steals, 3.0),
            (StatKind::Blocks, 3.0),
            (StatKind::Turnovers, -1.0),
        ])
        .with_three_pointer_bonus(0.5)
    }
}

impl PointsConfig {
    /// Every weighted stat is scored. No three-pointer bonus, no
    /// double-double or triple-double bonus.
    pub fn from_weights(weights: impl IntoIterator<Item = (StatKind, f64)>) -> Self {
        let weights: BTreeMap<StatKind, f64> = weights.into_iter().collect();
        let scored = weights.keys().copied().collect();
        Self {
            weights,
            scored,
            three_pointer_bonus: 0.0,
            double_double_bonus: None,
            triple_double_bonus: None,
        }
    }

    /// Set a weight and score that stat.
    pub fn with_weight(mut self, stat: StatKind, weight: f64) -> Self {
        self.weights.insert(stat, weight);
        self.scored.insert(stat);
        self
    }

    /// Replace the set of stats to score. Each must carry a weight or
    /// validation fails.
    pub fn with_scored(mut self, stats: impl IntoIterator<Item = StatKind>) -> Self {
        self.scored = stats.into_iter().collect();
        self
    }

    pub fn with_three_pointer_bonus(mut self, bonus: f64) -> Self {
        self.three_pointer_bonus = bonus;
        self
    }

    pub fn with_double_double_bonus(mut self, bonus: f64) -> Self {
        self.double_double_bonus = Some(bonus);
        self
    }

    pub fn with_triple_double_bonus(mut self, bonus: f64) -> Self {
        self.triple_double_bonus = Some(bonus);
        self
    }

    pub fn weight(&self, stat: StatKind) -> Option<f64> {
        self.weights.get(&stat).copied()
    }

    pub fn weights(&self) -> &BTreeMap<StatKind, f64> {
        &self.weights
    }

    pub fn scored(&self) -> impl Iterator<Item = StatKind> + '_ {
        self.scored.iter().copied()
    }

    pub fn three_pointer_bonus(&self) -> f64 {
        self.three_pointer_bonus
    }

    pub fn double_double_bonus(&self) -> Option<f64> {
        self.double_double_bonus
    }

    pub fn triple_double_bonus(&self) -> Option<f64> {
        self.triple_double_bonus
    }

    /// Fail if a scored stat has no weight or any number is not finite.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<String> = self
            .scored
            .iter()
            .filter(|s| !self.weights.contains_key(s))
            .map(|s| s.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(HoopsError::invalid_config(format!(
                "no weight configured for scored stat(s): {}",
                missing.join(", ")
            )));
        }

        if let Some((stat, w)) = self.weights.iter().find(|(_, w)| !w.is_finite()) {
            return Err(HoopsError::invalid_config(format!(
                "weight for {} is not a finite number ({})",
                stat, w
            )));
        }

        let bonuses = [
            ("three_pointer_bonus", Some(self.three_pointer_bonus)),
            ("double_double_bonus", self.double_double_bonus),
            ("triple_double_bonus", self.triple_double_bonus),
        ];
        for (name, value) in bonuses {
            if let Some(v) = value.filter(|v| !v.is_finite()) {
                return Err(HoopsError::invalid_config(format!(
                    "{} is not a finite number ({})",
                    name, v
                )));
            }
        }
        Ok(())
    }
}

/// One entry of a category league's ordered category list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategorySetting {
    pub category: Category,
    pub selected: bool,
    /// Lower is better (e.g. turnovers).
    pub negative: bool,
}

impl CategorySetting {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            selected: true,
            negative: category.negative_by_default(),
        }
    }
}

/// Category / rotisserie settings: an ordered set of categories, each with a
/// selection flag and a lower-is-better flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryConfig {
    settings: Vec<CategorySetting>,
}

impl Default for CategoryConfig {
    /// The standard nine categories, all selected, turnovers negative.
    fn default() -> Self {
        Self {
            settings: Category::ALL.iter().copied().map(CategorySetting::new).collect(),
        }
    }
}

impl CategoryConfig {
    /// Build from explicit settings. Duplicate categories or an empty
    /// selection are configuration errors.
    pub fn new(settings: Vec<CategorySetting>) -> Result<Self> {
        let mut seen = HashSet::new();
        for setting in &settings {
            if !seen.insert(setting.category) {
                return Err(HoopsError::invalid_config(format!(
                    "category {} listed more than once",
                    setting.category
                )));
            }
        }
        if !settings.iter().any(|s| s.selected) {
            return Err(HoopsError::invalid_config("no categories selected"));
        }
        Ok(Self { settings })
    }

    /// Build from category key strings, all selected, default negativity.
    ///
    /// An unrecognized key fails with `UnknownCategory`.
    pub fn from_keys<S: AsRef<str>>(keys: &[S]) -> Result<Self> {
        let settings = keys
            .iter()
            .map(|k| k.as_ref().parse::<Category>().map(CategorySetting::new))
            .collect::<Result<Vec<_>>>()?;
        Self::new(settings)
    }

    /// Same categories with one flagged (or unflagged) as lower-is-better.
    pub fn with_negative(mut self, category: Category, negative: bool) -> Result<Self> {
        let setting = self
            .settings
            .iter_mut()
            .find(|s| s.category == category)
            .ok_or_else(|| {
                HoopsError::invalid_config(format!("category {} is not configured", category))
            })?;
        setting.negative = negative;
        Ok(self)
    }

    pub fn settings(&self) -> &[CategorySetting] {
        &self.settings
    }

    /// Selected categories in configured order.
    pub fn selected(&self) -> impl Iterator<Item = &CategorySetting> + '_ {
        self.settings.iter().filter(|s| s.selected)
    }

    pub fn is_negative(&self, category: Category) -> bool {
        self.settings
            .iter()
            .any(|s| s.category == category && s.negative)
    }
}

/// The league format together with its settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum FantasyFormatConfig {
    Points(PointsConfig),
    Category(CategoryConfig),
    Rotisserie(CategoryConfig),
}

impl FantasyFormatConfig {
    pub fn name(&self) -> &'static str {
        match self {
            FantasyFormatConfig::Points(_) => "points",
            FantasyFormatConfig::Category(_) => "category",
            FantasyFormatConfig::Rotisserie(_) => "rotisserie",
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            FantasyFormatConfig::Points(config) => config.validate(),
            FantasyFormatConfig::Category(_) | FantasyFormatConfig::Rotisserie(_) => Ok(()),
        }
    }
}

impl Default for FantasyFormatConfig {
    fn default() -> Self {
        FantasyFormatConfig::Points(PointsConfig::default())
    }
}
