use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::error::ValidationError;
use crate::model::day_record::DayRecord;
use crate::model::hours::Hours;
use crate::time::{day_key, parse_day_key, YearMonth};

pub const SEED_FIRST_YEAR: i32 = 2023;
pub const SEED_LAST_YEAR: i32 = 2030;

/// Day key -> per-day state.
///
/// Values are immutable snapshots: every mutating operation takes `&self` and
/// returns a new store, so a copy handed to a reader never changes under it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkedDateStore {
    days: BTreeMap<String, DayRecord>,
}

impl MarkedDateStore {
    /// One record for every day from the first of January `SEED_FIRST_YEAR`
    /// through the last of December `SEED_LAST_YEAR`.
    pub fn initialize() -> Self {
        let days = (SEED_FIRST_YEAR..=SEED_LAST_YEAR)
            .flat_map(|year| (1..=12).map(move |month| YearMonth { year, month }))
            .flat_map(|ym| ym.days())
            .map(|date| (day_key(date), DayRecord::seeded(date)))
            .collect();
        Self { days }
    }

    pub fn toggle_selection(&self, key: &str) -> Self {
        let mut days = self.days.clone();
        let record = match days.get(key) {
            Some(existing) => existing.toggled(),
            None => DayRecord::picked(),
        };
        debug!(day = key, selected = record.selected, "toggled day");
        days.insert(key.to_string(), record);
        Self { days }
    }

    pub fn toggle_date(&self, date: NaiveDate) -> Self {
        self.toggle_selection(&day_key(date))
    }

    /// Parses `input` as hours and applies them to every selected day.
    /// On a validation error nothing is changed.
    pub fn assign_hours(&self, input: &str) -> Result<Self, ValidationError> {
        let hours = input.parse::<Hours>().inspect_err(|e| {
            warn!(reason = %e.detail(), "rejected hours input");
        })?;
        Ok(self.assign(hours))
    }

    pub fn assign(&self, hours: Hours) -> Self {
        let days: BTreeMap<String, DayRecord> = self
            .days
            .iter()
            .map(|(key, record)| {
                let record = if record.selected { record.with_hours(hours) } else { *record };
                (key.clone(), record)
            })
            .collect();
        debug!(hours = hours.get(), days = self.selected_count(), "assigned hours");
        Self { days }
    }

    /// Records of one month in ascending date order. Keys that are not valid
    /// dates are skipped. Computed fresh from this snapshot on every call.
    pub fn project_for_month(&self, year: i32, month: u32) -> impl Iterator<Item = (&str, &DayRecord)> + '_ {
        let prefix = YearMonth { year, month }.key_prefix();
        let bound = prefix.clone();
        self.days
            .range(bound..)
            .take_while(move |(key, _)| key.starts_with(&prefix))
            .filter(move |(key, _)| {
                parse_day_key(key).is_some_and(|d| d.year() == year && d.month() == month)
            })
            .map(|(key, record)| (key.as_str(), record))
    }

    pub fn get(&self, key: &str) -> Option<&DayRecord> {
        self.days.get(key)
    }

    pub fn get_date(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.days.get(&day_key(date))
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayRecord)> + '_ {
        self.days.iter().map(|(key, record)| (key.as_str(), record))
    }

    pub fn selected_keys(&self) -> Vec<&str> {
        self.iter().filter(|(_, r)| r.selected).map(|(k, _)| k).collect()
    }

    pub fn selected_count(&self) -> usize {
        self.days.values().filter(|r| r.selected).count()
    }
}
