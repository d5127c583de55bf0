//! Day window around today used to trim the homework list.

use chrono::{Days, Local, NaiveDate};

use crate::types::RawHomework;

/// Days kept before today by default.
pub const DEFAULT_PAST_DAYS: u32 = 7;

/// Days kept after today by default.
pub const DEFAULT_FUTURE_DAYS: u32 = 14;

/// Inclusive `[today - past_days, today + future_days]` window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateWindow {
    pub past_days: u32,
    pub future_days: u32,
}

impl Default for DateWindow {
    fn default() -> Self {
        Self {
            past_days: DEFAULT_PAST_DAYS,
            future_days: DEFAULT_FUTURE_DAYS,
        }
    }
}

impl DateWindow {
    pub fn new(past_days: u32, future_days: u32) -> Self {
        Self {
            past_days,
            future_days,
        }
    }

    /// First and last day of the window anchored at `today`.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let from = today
            .checked_sub_days(Days::new(u64::from(self.past_days)))
            .unwrap_or(NaiveDate::MIN);
        let to = today
            .checked_add_days(Days::new(u64::from(self.future_days)))
            .unwrap_or(NaiveDate::MAX);
        (from, to)
    }

    /// Keeps the records dated inside the window around the local calendar date.
    pub fn filter(&self, homeworks: Vec<RawHomework>) -> Vec<RawHomework> {
        self.filter_at(homeworks, Local::now().date_naive())
    }

    /// Keeps the records dated inside the window around `today`.
    ///
    /// Records with a missing or malformed date are dropped; the order of
    /// the rest is preserved.
    pub fn filter_at(&self, homeworks: Vec<RawHomework>, today: NaiveDate) -> Vec<RawHomework> {
        let (from, to) = self.bounds(today);
        homeworks
            .into_iter()
            .filter(|hw| match parse_date(hw.date.as_deref()) {
                Some(date) => from <= date && date <= to,
                None => false,
            })
            .collect()
    }
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw.filter(|s| !s.is_empty())?;
    // chrono accepts unpadded fields, a sign and leading spaces; the portal
    // date must be exactly `YYYY-MM-DD`.
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) if date.format("%Y-%m-%d").to_string() == raw => Some(date),
        _ => {
            tracing::debug!("Skipping homework with invalid date: {}", raw);
            None
        }
    }
}
