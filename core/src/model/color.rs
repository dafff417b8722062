use serde::{Deserialize, Serialize};

use crate::model::day_record::{DayKind, DayRecord};

/// Display colors a day can take. Never stored; always derived from a record.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    LightBlue,
    Green,
    Yellow,
    Red,
}

impl Color {
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::LightBlue => "lightblue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Red => "red",
        }
    }
}

/// Highlight used for every selected day.
pub const SELECTED_COLOR: Color = Color::LightBlue;

/// Cell background: selection wins, then worked hours, then the default.
pub fn background_color_for(record: &DayRecord) -> Color {
    if record.selected {
        SELECTED_COLOR
    } else if record.hours_worked.is_some() {
        Color::Green
    } else {
        Color::Yellow
    }
}

/// Dot under the day number. `None` for days created outside the seeded range
/// that have no hours yet.
pub fn dot_color_for(record: &DayRecord) -> Option<Color> {
    if record.hours_worked.is_some() {
        return Some(Color::Green);
    }
    match record.kind {
        Some(DayKind::Weekend) => Some(Color::Red),
        Some(DayKind::Weekday) => Some(Color::Yellow),
        None => None,
    }
}
