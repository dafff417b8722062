use anyhow::{Context, Result};
use chrono::NaiveDate;
use hourmark_core::{LocaleConfig, MarkedDateStore, MonthSummary, ValidationError, YearMonth};
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Style};
use tracing::debug;

/// Builds a store the way the home view would: select the days, then assign hours.
pub fn build_store(selected: &[NaiveDate], hours: Option<&str>) -> Result<MarkedDateStore> {
    let mut store = MarkedDateStore::initialize();
    for date in selected {
        store = store.toggle_date(*date);
    }
    if let Some(input) = hours {
        store = store.assign_hours(input)?;
        debug!(selected = selected.len(), "applied hours");
    }
    Ok(store)
}

pub fn render_table(summary: &MonthSummary, locale: &LocaleConfig, all_days: bool) -> String {
    let mut builder = Builder::default();
    builder.push_record([locale.date.to_string(), locale.hours_worked.to_string()]);

    for row in &summary.rows {
        if !all_days && row.hours_worked == 0 {
            continue;
        }
        builder.push_record([row.date.format("%Y-%m-%d").to_string(), row.hours_worked.to_string()]);
    }
    builder.push_record([locale.total.to_string(), summary.total_hours.to_string()]);

    let mut table = builder.build();
    table
        .with(Style::modern())
        .modify(Rows::first(), Color::FG_CYAN);
    table.to_string()
}

pub fn render_json(summary: &MonthSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("failed to serialize month summary")
}

pub fn show(month: YearMonth, selected: &[NaiveDate], hours: Option<&str>, json: bool, all_days: bool, locale: &LocaleConfig) -> Result<()> {
    let store = build_store(selected, hours)?;
    let summary = MonthSummary::for_month(&store, month);

    if json {
        println!("{}", render_json(&summary)?);
        return Ok(());
    }

    println!("{} {}", locale.month_name(month.month), month.year);
    println!("{}", render_table(&summary, locale, all_days));
    Ok(())
}

/// The localized message for a rejected `--hours` value; `None` for any other error.
pub fn validation_notice(err: &anyhow::Error, locale: &LocaleConfig) -> Option<String> {
    err.downcast_ref::<ValidationError>()
        .map(|_| format!("{} {}", locale.error_title, locale.validation_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hourmark_core::Language;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_build_store_assigns_selected() {
        let store = build_store(&[d(2024, 3, 2), d(2024, 3, 3)], Some("8")).unwrap();
        let summary = MonthSummary::for_month(&store, YearMonth::new(2024, 3).unwrap());
        assert_eq!(summary.total_hours, 16);
    }

    #[test]
    fn test_build_store_rejects_bad_hours() {
        assert!(build_store(&[d(2024, 3, 2)], Some("25")).is_err());
        assert!(build_store(&[], Some("abc")).is_err());
        assert!(build_store(&[], Some("7")).is_ok());
    }

    #[test]
    fn test_validation_notice_only_for_bad_hours() {
        let locale = Language::English.locale();
        let err = build_store(&[d(2024, 3, 2)], Some("0")).unwrap_err();
        assert_eq!(
            validation_notice(&err, locale).as_deref(),
            Some("Error: Please enter a number between 1 and 24.")
        );

        let other = anyhow::anyhow!("disk on fire");
        assert!(validation_notice(&other, locale).is_none());
    }

    #[test]
    fn test_table_lists_worked_days_and_total() {
        let store = build_store(&[d(2024, 3, 4)], Some("6")).unwrap();
        let summary = MonthSummary::for_month(&store, YearMonth::new(2024, 3).unwrap());
        let table = render_table(&summary, Language::Swedish.locale(), false);
        assert!(table.contains("2024-03-04"));
        assert!(!table.contains("2024-03-05"));
        assert!(table.contains("Totalt"));
        assert!(table.contains("Arbetade timmar"));
    }

    #[test]
    fn test_json_has_totals() {
        let store = build_store(&[d(2024, 3, 4)], Some("6")).unwrap();
        let summary = MonthSummary::for_month(&store, YearMonth::new(2024, 3).unwrap());
        let value: serde_json::Value = serde_json::from_str(&render_json(&summary).unwrap()).unwrap();
        assert_eq!(value["total_hours"], 6);
        assert_eq!(value["rows"][3]["hours_worked"], 6);
    }
}
