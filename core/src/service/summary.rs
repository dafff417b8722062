use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::hours::Hours;
use crate::store::MarkedDateStore;
use crate::time::{parse_day_key, YearMonth};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub date: NaiveDate,
    pub hours_worked: u8, // 0 when nothing was assigned
    pub selected: bool,
}

/// What the details view shows for one month.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthSummary {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<SummaryRow>,
    pub total_hours: u32,
    pub days_worked: usize,
}

impl MonthSummary {
    pub fn for_month(store: &MarkedDateStore, month: YearMonth) -> Self {
        let rows: Vec<SummaryRow> = store
            .project_for_month(month.year, month.month)
            .filter_map(|(key, record)| {
                let date = parse_day_key(key)?;
                Some(SummaryRow {
                    date,
                    hours_worked: record.hours_worked.map(Hours::get).unwrap_or(0),
                    selected: record.selected,
                })
            })
            .collect();

        let total_hours = rows.iter().map(|r| r.hours_worked as u32).sum();
        let days_worked = rows.iter().filter(|r| r.hours_worked > 0).count();

        Self {
            year: month.year,
            month: month.month,
            rows,
            total_hours,
            days_worked,
        }
    }

    pub fn worked_rows(&self) -> impl Iterator<Item = &SummaryRow> {
        self.rows.iter().filter(|r| r.hours_worked > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals() {
        let store = MarkedDateStore::initialize()
            .toggle_selection("2024-03-04")
            .toggle_selection("2024-03-05")
            .assign_hours("8")
            .unwrap()
            .toggle_selection("2024-03-04")
            .toggle_selection("2024-03-05")
            .toggle_selection("2024-03-06")
            .assign_hours("4")
            .unwrap();

        let summary = MonthSummary::for_month(&store, YearMonth::new(2024, 3).unwrap());
        assert_eq!(summary.rows.len(), 31);
        assert_eq!(summary.total_hours, 20);
        assert_eq!(summary.days_worked, 3);
        assert_eq!(summary.rows[0].hours_worked, 0);
        assert_eq!(summary.rows[3].hours_worked, 8);
        assert_eq!(summary.rows[5].hours_worked, 4);
        assert!(summary.rows[5].selected);

        let worked: Vec<u8> = summary.worked_rows().map(|r| r.hours_worked).collect();
        assert_eq!(worked, vec![8, 8, 4]);
    }

    #[test]
    fn test_summary_of_empty_month() {
        let store = MarkedDateStore::initialize();
        let summary = MonthSummary::for_month(&store, YearMonth::new(2040, 1).unwrap());
        assert!(summary.rows.is_empty());
        assert_eq!(summary.total_hours, 0);
    }
}
