use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "sv")]
    Swedish,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Swedish => "sv",
        }
    }

    /// Picks a language from a system locale tag such as `sv_SE.UTF-8`.
    /// Anything that is not Swedish falls back to English.
    pub fn from_locale_tag(tag: &str) -> Self {
        if tag.trim().to_lowercase().starts_with("sv") {
            Language::Swedish
        } else {
            Language::English
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::English => Language::Swedish,
            Language::Swedish => Language::English,
        }
    }

    pub fn locale(&self) -> &'static LocaleConfig {
        match self {
            Language::English => &EN,
            Language::Swedish => &SV,
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "sv" | "swedish" | "svenska" => Ok(Language::Swedish),
            _ => Err(anyhow!("Unknown language: {}", s)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Names and labels for one language. Day arrays start on Sunday.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleConfig {
    pub month_names: [&'static str; 12],
    pub month_names_short: [&'static str; 12],
    pub day_names: [&'static str; 7],
    pub day_names_short: [&'static str; 7],
    pub today: &'static str,

    pub hours: &'static str,
    pub add_hours: &'static str,
    pub see_hours_worked: &'static str,
    pub choose_language: &'static str,
    pub english: &'static str,
    pub swedish: &'static str,
    pub hours_worked: &'static str,
    pub date: &'static str,
    pub total: &'static str,
    pub error_title: &'static str,
    pub validation_message: &'static str,
    pub cancel: &'static str,
}

impl LocaleConfig {
    /// `month` is 1-based.
    pub fn month_name(&self, month: u32) -> &'static str {
        self.month_names[(month.clamp(1, 12) - 1) as usize]
    }

    pub fn day_name_short(&self, day: Weekday) -> &'static str {
        self.day_names_short[day.num_days_from_sunday() as usize]
    }

    pub fn language_name(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Swedish => self.swedish,
        }
    }

    /// Short day headers for a calendar whose weeks start on Monday.
    pub fn week_header(&self) -> [&'static str; 7] {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .map(|d| self.day_name_short(d))
    }
}

static EN: LocaleConfig = LocaleConfig {
    month_names: [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul.", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    day_names: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    day_names_short: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    today: "Today",
    hours: "Hours",
    add_hours: "Add hours",
    see_hours_worked: "See hours worked",
    choose_language: "Choose language",
    english: "English",
    swedish: "Swedish",
    hours_worked: "Hours worked",
    date: "Date",
    total: "Total",
    error_title: "Error:",
    validation_message: "Please enter a number between 1 and 24.",
    cancel: "Cancel",
};

static SV: LocaleConfig = LocaleConfig {
    month_names: [
        "Januari", "Februari", "Mars", "April", "Maj", "Juni", "Juli", "Augusti", "September",
        "Oktober", "November", "December",
    ],
    month_names_short: [
        "Jan", "Feb", "Mar", "Apr", "Maj", "Jun", "Jul.", "Aug", "Sep", "Okt", "Nov", "Dec",
    ],
    day_names: ["Söndag", "Måndag", "Tisdag", "Onsdag", "Torsdag", "Fredag", "Lördag"],
    day_names_short: ["Sön", "Mån", "Tis", "Ons", "Tor", "Fre", "Lör"],
    today: "Idag",
    hours: "Timmar",
    add_hours: "Lägg till timmar",
    see_hours_worked: "Se arbetade timmar",
    choose_language: "Välj språk",
    english: "Engelska",
    swedish: "Svenska",
    hours_worked: "Arbetade timmar",
    date: "Datum",
    total: "Totalt",
    error_title: "Fel:",
    validation_message: "Ange ett tal mellan 1 och 24.",
    cancel: "Avbryt",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_locale_tag() {
        assert_eq!(Language::from_locale_tag("sv_SE.UTF-8"), Language::Swedish);
        assert_eq!(Language::from_locale_tag("sv-SE"), Language::Swedish);
        assert_eq!(Language::from_locale_tag("SV"), Language::Swedish);
        assert_eq!(Language::from_locale_tag("en_US.UTF-8"), Language::English);
        assert_eq!(Language::from_locale_tag("C"), Language::English);
        assert_eq!(Language::from_locale_tag(""), Language::English);
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("sv".parse::<Language>().unwrap(), Language::Swedish);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert!("de".parse::<Language>().is_err());
        assert_eq!(Language::English.toggled(), Language::Swedish);
    }

    #[test]
    fn test_names() {
        let sv = Language::Swedish.locale();
        assert_eq!(sv.month_name(5), "Maj");
        assert_eq!(sv.day_name_short(Weekday::Sat), "Lör");
        assert_eq!(sv.week_header()[0], "Mån");
        assert_eq!(Language::English.locale().month_name(3), "March");
        assert_eq!(Language::English.locale().week_header()[6], "Sun");
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&Language::Swedish).unwrap(), "\"sv\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::English);
    }
}
