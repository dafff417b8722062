use chrono::{Duration, Months, NaiveDate};
use hourmark_core::time::today;
use hourmark_core::{HomeSession, Language, MarkedDateStore, MonthSummary, YearMonth};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// The details view keeps its own copy of the store.
pub struct Details {
    pub store: MarkedDateStore,
    pub month: YearMonth,
}

impl Details {
    pub fn summary(&self) -> MonthSummary {
        MonthSummary::for_month(&self.store, self.month)
    }
}

pub struct App {
    pub session: HomeSession,
    pub cursor: NaiveDate,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub details: Option<Details>,
}

impl App {
    pub fn new(language: Language) -> App {
        App {
            session: HomeSession::new(language),
            cursor: today(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            details: None,
        }
    }

    pub fn visible_month(&self) -> YearMonth {
        YearMonth::of(self.cursor)
    }

    pub fn move_days(&mut self, days: i64) {
        if let Some(date) = self.cursor.checked_add_signed(Duration::days(days)) {
            self.cursor = date;
        }
    }

    pub fn next_month(&mut self) {
        if let Some(date) = self.cursor.checked_add_months(Months::new(1)) {
            self.cursor = date;
        }
    }

    pub fn previous_month(&mut self) {
        if let Some(date) = self.cursor.checked_sub_months(Months::new(1)) {
            self.cursor = date;
        }
    }

    pub fn jump_to_today(&mut self) {
        self.cursor = today();
    }

    pub fn toggle_day(&mut self) {
        self.session.press_day(self.cursor);
    }

    pub fn switch_language(&mut self) {
        let next = self.session.language().toggled();
        self.session.switch_language(next);
    }

    pub fn enter_edit_mode(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.session.hours_input.chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self.byte_index(self.cursor_position);
        self.session.hours_input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index = self.byte_index(self.cursor_position - 1);
            self.session.hours_input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.session.hours_input.chars().count() {
            self.cursor_position += 1;
        }
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.session.hours_input.chars().take(chars).map(|c| c.len_utf8()).sum()
    }

    pub fn submit_hours(&mut self) {
        match self.session.submit_hours() {
            Ok(()) => {
                self.cursor_position = 0;
                self.exit_input_mode();
            }
            Err(e) => debug!(error = %e.detail(), "hours rejected"),
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.session.dismiss_alert();
    }

    pub fn open_details(&mut self) {
        self.details = Some(Details {
            store: self.session.details(),
            month: YearMonth::current(),
        });
    }

    pub fn close_details(&mut self) {
        self.details = None;
    }

    pub fn details_next_month(&mut self) {
        if let Some(details) = self.details.as_mut() {
            details.month = details.month.next();
        }
    }

    pub fn details_previous_month(&mut self) {
        if let Some(details) = self.details.as_mut() {
            details.month = details.month.previous();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_at(date: NaiveDate) -> App {
        let mut app = App::new(Language::English);
        app.cursor = date;
        app
    }

    #[test]
    fn test_toggle_and_submit() {
        let mut app = app_at(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        app.toggle_day();
        app.enter_edit_mode();
        app.input_char('7');
        app.submit_hours();

        assert_eq!(app.input_mode, InputMode::Normal);
        let record = app.session.store().get("2024-03-04").unwrap();
        assert_eq!(record.hours_worked.map(|h| h.get()), Some(7));
    }

    #[test]
    fn test_bad_submit_stays_in_edit_mode_with_alert() {
        let mut app = app_at(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        app.enter_edit_mode();
        app.input_char('9');
        app.input_char('9');
        app.submit_hours();

        assert_eq!(app.input_mode, InputMode::Editing);
        assert!(app.session.is_alert_visible());
        app.dismiss_alert();
        assert!(!app.session.is_alert_visible());
    }

    #[test]
    fn test_input_editing() {
        let mut app = App::new(Language::English);
        app.enter_edit_mode();
        app.input_char('1');
        app.input_char('2');
        app.move_cursor_left();
        app.delete_char();
        assert_eq!(app.session.hours_input, "2");
        app.move_cursor_right();
        app.input_char('4');
        assert_eq!(app.session.hours_input, "24");
    }

    #[test]
    fn test_month_navigation_clamps_day() {
        let mut app = app_at(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
        app.next_month();
        assert_eq!(app.cursor, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        app.move_days(1);
        assert_eq!(app.visible_month(), YearMonth::new(2024, 3).unwrap());
    }

    #[test]
    fn test_details_is_a_snapshot() {
        let mut app = app_at(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        app.open_details();
        app.toggle_day();
        let details = app.details.as_ref().unwrap();
        assert!(!details.store.get("2024-03-04").unwrap().selected);
        app.details_previous_month();
        app.close_details();
        assert!(app.details.is_none());
    }
}
