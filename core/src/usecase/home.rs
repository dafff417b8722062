use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::locale::{Language, LocaleConfig};
use crate::service::summary::MonthSummary;
use crate::store::MarkedDateStore;
use crate::time::YearMonth;

/// State behind the home view: the calendar store, the hours input box, the
/// validation alert, and the active language.
pub struct HomeSession {
    store: MarkedDateStore,
    language: Language,
    pub hours_input: String,
    alert_visible: bool,
}

impl HomeSession {
    pub fn new(language: Language) -> Self {
        info!(language = %language, "starting home session");
        Self {
            store: MarkedDateStore::initialize(),
            language,
            hours_input: String::new(),
            alert_visible: false,
        }
    }

    pub fn store(&self) -> &MarkedDateStore {
        &self.store
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn locale(&self) -> &'static LocaleConfig {
        self.language.locale()
    }

    pub fn is_alert_visible(&self) -> bool {
        self.alert_visible
    }

    pub fn press_day(&mut self, date: NaiveDate) {
        self.store = self.store.toggle_date(date);
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.hours_input = text.into();
    }

    /// Applies the typed hours to the selected days. A rejected input raises
    /// the alert and keeps both the text and the store as they were.
    pub fn submit_hours(&mut self) -> Result<(), ValidationError> {
        match self.store.assign_hours(&self.hours_input) {
            Ok(store) => {
                self.store = store;
                self.hours_input.clear();
                Ok(())
            }
            Err(e) => {
                self.alert_visible = true;
                Err(e)
            }
        }
    }

    pub fn dismiss_alert(&mut self) {
        self.alert_visible = false;
    }

    /// Switching language starts over with a fresh store; pending selections
    /// and assigned hours are dropped.
    pub fn switch_language(&mut self, language: Language) {
        if language == self.language {
            return;
        }
        let discarded = self.store.selected_count();
        if discarded > 0 {
            warn!(discarded, "language switch discards current selection");
        }
        info!(from = %self.language, to = %language, "switching language");
        self.language = language;
        self.store = MarkedDateStore::initialize();
    }

    /// Read-only copy for the details view.
    pub fn details(&self) -> MarkedDateStore {
        self.store.clone()
    }

    pub fn month_summary(&self, month: YearMonth) -> MonthSummary {
        MonthSummary::for_month(&self.store, month)
    }
}
