use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::model::color::{self, Color};
use crate::model::hours::Hours;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Weekday,
    Weekend,
}

impl DayKind {
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        }
    }
}

/// Per-day state held by the store.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub marked: bool,
    pub selected: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_worked: Option<Hours>,
    // Only seeded days know their kind; toggled-in days carry none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<DayKind>,
}

impl DayRecord {
    pub fn seeded(date: NaiveDate) -> Self {
        Self {
            marked: true,
            selected: false,
            hours_worked: None,
            kind: Some(DayKind::of(date)),
        }
    }

    /// Record for a day the user picked outside the seeded range.
    pub fn picked() -> Self {
        Self {
            marked: false,
            selected: true,
            hours_worked: None,
            kind: None,
        }
    }

    pub fn toggled(self) -> Self {
        Self {
            selected: !self.selected,
            ..self
        }
    }

    pub fn with_hours(self, hours: Hours) -> Self {
        Self {
            marked: true,
            hours_worked: Some(hours),
            ..self
        }
    }

    pub fn dot_color(&self) -> Option<Color> {
        color::dot_color_for(self)
    }

    pub fn background_color(&self) -> Color {
        color::background_color_for(self)
    }
}
