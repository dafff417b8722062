pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod service;
pub mod store;
pub mod time;
pub mod usecase;

pub use config::Config;
pub use error::ValidationError;
pub use locale::{Language, LocaleConfig};
pub use model::color::{background_color_for, Color, SELECTED_COLOR};
pub use model::day_record::{DayKind, DayRecord};
pub use model::hours::Hours;
pub use service::summary::{MonthSummary, SummaryRow};
pub use store::MarkedDateStore;
pub use time::{day_key, parse_day_key, parse_month, YearMonth};
pub use usecase::home::HomeSession;
