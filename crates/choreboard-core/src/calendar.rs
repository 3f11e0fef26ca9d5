//! Month labeling for the displayed calendar page.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// The month/year the dashboard is currently showing.
///
/// Only used for labeling report output; the statistics engine never reads
/// the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMonth {
    pub year: i32,
    /// 1-12
    pub month: u32,
}

impl DisplayMonth {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing today, from the local clock.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    /// Human label like "August 2026".
    pub fn title(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%B %Y").to_string(),
            None => format!("{}/{}", self.month, self.year),
        }
    }
}
