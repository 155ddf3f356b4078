//! Game-to-game consistency scoring

use serde::Serialize;

use super::metric::{mean, population_std_dev};
use crate::error::{HoopsError, Result};
use crate::scoring::TIE_TOLERANCE;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Consistency {
    pub games: usize,
    pub mean: f64,
    /// Population standard deviation (divides by N).
    pub std_dev: f64,
    /// `std_dev / |mean|`; `None` when the mean is zero.
    pub coefficient_of_variation: Option<f64>,
    /// `1 - CV` clamped to `[0, 1]`; higher is steadier.
    pub score: Option<f64>,
}

/// Mean, population standard deviation and coefficient of variation of a
/// per-game series. Needs at least two games.
///
/// The CV is taken against the magnitude of the mean, so series that sit
/// below zero (plus/minus, some fantasy point runs) are never negative.
pub fn consistency(values: &[f64]) -> Result<Consistency> {
    if values.len() < 2 {
        return Err(HoopsError::insufficient("consistency", 2, values.len()));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(HoopsError::invalid_input(format!(
            "consistency values must be finite (got {})",
            bad
        )));
    }

    let mean = mean(values).unwrap_or_default();
    let std_dev = population_std_dev(values).unwrap_or_default();
    let coefficient_of_variation = (mean.abs() >= TIE_TOLERANCE).then(|| std_dev / mean.abs());
    let score = coefficient_of_variation.map(|cv| (1.0 - cv).clamp(0.0, 1.0));

    Ok(Consistency {
        games: values.len(),
        mean,
        std_dev,
        coefficient_of_variation,
        score,
    })
}
