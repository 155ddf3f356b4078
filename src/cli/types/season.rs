//! Season windows supplied by the caller.

use crate::error::{HoopsError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A labelled, inclusive date range that defines one season.
///
/// The store never infers season boundaries from dates; the caller decides
/// where a season starts and ends.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use hoops_fantasy::SeasonWindow;
///
/// let season = SeasonWindow::new(
///     "2024-25",
///     NaiveDate::from_ymd_opt(2024, 10, 22).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 4, 13).unwrap(),
/// )
/// .unwrap();
/// assert!(season.contains(NaiveDate::from_ymd_opt(2024, 12, 25).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SeasonWindow {
    label: String,
    start: NaiveDate,
    end: NaiveDate,
}

impl SeasonWindow {
    pub fn new(label: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(HoopsError::invalid_input(format!(
                "season start {} is after end {}",
                start, end
            )));
        }
        Ok(Self {
            label: label.into(),
            start,
            end,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl fmt::Display for SeasonWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} to {})", self.label, self.start, self.end)
    }
}
