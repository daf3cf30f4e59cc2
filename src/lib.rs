//! ProfitPilot is a bookkeeping dashboard for small businesses.
//!
//! This library provides the record filter, the summary aggregations
//! (totals, budget usage, goal progress, monthly reports), the application
//! settings store and the localized HTML rendering of the dashboard.
//!
//! The filter and aggregation functions are pure: they take an immutable
//! snapshot of records and never mutate or persist anything.

#![warn(missing_docs)]

pub mod csv;
pub mod dashboard;
pub mod filters;
pub mod html;
pub mod i18n;
pub mod logging;
pub mod money;
mod navigation;
pub mod preferences;
pub mod record;
pub mod sample;

pub use dashboard::{
    Budget, BudgetOverview, BudgetPeriod, BudgetStatus, BudgetUsage, CategoryTotal, DashboardView,
    Goal, GoalDirection, GoalKind, GoalOverview, GoalPriority, GoalStatus, GoalUnit, MonthlyTotal,
    Summary, budget_usage, category_breakdown, goal_progress, growth, monthly_totals,
    profit_margin, render_dashboard, summarize,
};
pub use filters::{CategoryFilter, FilterForm, FilterSpec, KindFilter, filter_records, matches};
pub use i18n::{Language, Text};
pub use money::{Amount, Balance};
pub use preferences::{Notifications, Settings, SettingsStore, Theme};
pub use record::{Category, Record, RecordId, RecordKind, RecordStatus};

/// The input that was rejected while building a [FilterSpec] or parsing a
/// value typed in by the user.
///
/// These errors are always recoverable: the caller should report them and ask
/// for corrected input. Invalid input is never coerced to a default value.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// The text could not be parsed as a non-negative amount with at most two
    /// decimal places.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The text could not be parsed as a `YYYY-MM-DD` calendar date.
    #[error("\"{0}\" is not a valid date, expected YYYY-MM-DD")]
    InvalidDate(String),

    /// The text does not name one of the known categories.
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),

    /// The text does not name a record kind.
    #[error("\"{0}\" is not a valid transaction type, expected income or expense")]
    UnknownKind(String),

    /// The text does not name a record status.
    #[error("\"{0}\" is not a valid status, expected completed or pending")]
    UnknownStatus(String),

    /// The text does not name a budget period.
    #[error("\"{0}\" is not a valid budget period, expected week, month, quarter or year")]
    UnknownPeriod(String),

    /// The text does not name a supported language.
    #[error("\"{0}\" is not a supported language, expected en or sw")]
    UnknownLanguage(String),

    /// The text does not name a theme.
    #[error("\"{0}\" is not a valid theme, expected light or dark")]
    UnknownTheme(String),

    /// A filter field could not be parsed.
    ///
    /// The first value is the name of the field in the filter form.
    #[error("invalid value for filter field {0}: {1}")]
    InvalidFilterField(&'static str, Box<ValidationError>),
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// User supplied input was malformed.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record was created with an empty description.
    #[error("record description cannot be empty")]
    EmptyDescription,

    /// A record was created with a category that belongs to the other kind,
    /// e.g. an income record filed under "Rent".
    #[error("category \"{category}\" cannot be used for {kind} records")]
    CategoryKindMismatch {
        /// The category that was rejected.
        category: Category,
        /// The kind of the record.
        kind: RecordKind,
    },

    /// Two records in the same collection share an ID.
    #[error("record ID {0} is used more than once")]
    DuplicateRecordId(RecordId),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file could not be parsed or serialized.
    #[error("could not (de)serialize settings as JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV file could not be read or written.
    ///
    /// The line number is included when the error came from a specific row.
    #[error("CSV error: {0}")]
    Csv(String),

    /// A row in a CSV file contained an invalid record.
    #[error("invalid record on line {line}: {source}")]
    InvalidCsvRecord {
        /// The 1-based line number of the row in the CSV file.
        line: u64,
        /// Why the record was rejected.
        source: Box<Error>,
    },
}

impl From<::csv::Error> for Error {
    fn from(value: ::csv::Error) -> Self {
        Error::Csv(value.to_string())
    }
}
