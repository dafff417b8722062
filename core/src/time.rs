use anyhow::{anyhow, Result};
use chrono::{Datelike, Local, Months, NaiveDate, Weekday};

pub const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn day_key(date: NaiveDate) -> String {
    date.format(DAY_KEY_FORMAT).to_string()
}

pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, DAY_KEY_FORMAT).ok()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// A calendar month, e.g. March 2024.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(anyhow!("Invalid month: {}", month));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(today())
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.next().first_day().pred_opt().unwrap_or(NaiveDate::MAX)
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let last = self.last_day();
        self.first_day().iter_days().take_while(move |d| *d <= last)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Key prefix shared by every day of this month (`YYYY-MM-`).
    pub fn key_prefix(&self) -> String {
        format!("{:04}-{:02}-", self.year, self.month)
    }

    /// Rows of a month grid, weeks starting on Monday. Cells outside the month are `None`.
    pub fn weeks(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let mut weeks = Vec::new();
        let mut week = [None; 7];
        for date in self.days() {
            let col = date.weekday().num_days_from_monday() as usize;
            week[col] = Some(date);
            if date.weekday() == Weekday::Sun {
                weeks.push(week);
                week = [None; 7];
            }
        }
        if week.iter().any(Option::is_some) {
            weeks.push(week);
        }
        weeks
    }
}

/// Parses a month argument: `YYYY-MM`, `now`, or a relative offset like `+1m` / `-2m`.
pub fn parse_month(input: &str) -> Result<YearMonth> {
    let input = input.trim();
    let current = YearMonth::current();

    match input.to_lowercase().as_str() {
        "now" | "this" | "" => return Ok(current),
        "next" => return Ok(current.next()),
        "prev" | "last" => return Ok(current.previous()),
        _ => {}
    }

    if let Some(rest) = input.strip_suffix('m') {
        if rest.starts_with('+') || rest.starts_with('-') {
            let count: i32 = rest.parse().map_err(|_| anyhow!("Invalid relative month: {}", input))?;
            let base = current.first_day();
            let shifted = if count >= 0 {
                base.checked_add_months(Months::new(count as u32))
            } else {
                base.checked_sub_months(Months::new(count.unsigned_abs()))
            };
            return shifted
                .map(YearMonth::of)
                .ok_or_else(|| anyhow!("Month out of range: {}", input));
        }
    }

    if let Some((year, month)) = input.split_once('-') {
        let year: i32 = year.parse().map_err(|_| anyhow!("Invalid year in {}", input))?;
        let month: u32 = month.parse().map_err(|_| anyhow!("Invalid month in {}", input))?;
        return YearMonth::new(year, month);
    }

    Err(anyhow!("Could not parse month: {}", input))
}

/// Parses a date given on the command line: `YYYY-MM-DD`, `today`, or `tomorrow`/`yesterday`.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let today = today();
    match input.trim().to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => return today.succ_opt().ok_or_else(|| anyhow!("Date out of range")),
        "yesterday" => return today.pred_opt().ok_or_else(|| anyhow!("Date out of range")),
        _ => {}
    }
    parse_day_key(input.trim()).ok_or_else(|| anyhow!("Could not parse date: {}", input))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_day_key_roundtrip() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(day_key(d), "2024-03-02");
        assert_eq!(parse_day_key("2024-03-02"), Some(d));
        assert_eq!(parse_day_key("2024-02-30"), None);
        assert_eq!(parse_day_key("hello"), None);
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(ym(2024, 2).last_day(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(ym(2023, 2).days().count(), 28);
        assert_eq!(ym(2024, 12).next(), ym(2025, 1));
        assert_eq!(ym(2024, 1).previous(), ym(2023, 12));
        assert_eq!(ym(2024, 3).key_prefix(), "2024-03-");
        assert!(YearMonth::new(2024, 13).is_err());
    }

    #[test]
    fn test_weeks_start_monday() {
        // March 2024 starts on a Friday and ends on a Sunday.
        let weeks = ym(2024, 3).weeks();
        assert_eq!(weeks.len(), 5);
        assert_eq!(weeks[0][4], NaiveDate::from_ymd_opt(2024, 3, 1));
        assert_eq!(weeks[0][0], None);
        assert_eq!(weeks[4][6], NaiveDate::from_ymd_opt(2024, 3, 31));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-03").unwrap(), ym(2024, 3));
        assert_eq!(parse_month("now").unwrap(), YearMonth::current());
        assert_eq!(parse_month("+1m").unwrap(), YearMonth::current().next());
        assert_eq!(parse_month("-1m").unwrap(), YearMonth::current().previous());
        assert!(parse_month("2024-13").is_err());
        assert!(parse_month("march").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-03-02").unwrap(), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(parse_date("today").unwrap(), today());
        assert!(parse_date("2024-3-2x").is_err());
    }
}
