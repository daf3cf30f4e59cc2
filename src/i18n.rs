//! Interface text in each supported language.
//!
//! All labels shown to the user come from [Language::text], so pages are
//! written once and translated by switching the language in the settings.
//! Category names are data and are not translated.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    ValidationError,
    dashboard::{BudgetStatus, GoalPriority, GoalStatus},
    record::{RecordKind, RecordStatus},
};

/// A language the interface can be shown in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English.
    #[default]
    #[serde(rename = "en")]
    English,
    /// Kiswahili.
    #[serde(rename = "sw")]
    Swahili,
}

/// A piece of interface text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Text {
    Dashboard,
    Transactions,
    Budget,
    Goals,
    Reports,
    TotalIncome,
    TotalExpenses,
    NetAmount,
    Income,
    Expense,
    Completed,
    Pending,
    Description,
    Category,
    Type,
    Date,
    Amount,
    Status,
    ActiveFilters,
    NoTransactions,
    NotApplicable,
    UnderBudget,
    OnTrack,
    Exceeded,
    InProgress,
    AtRisk,
    Progress,
    Target,
    Deadline,
    Priority,
    High,
    Medium,
    Low,
    Spent,
    Remaining,
    Month,
    Profit,
    ProfitMargin,
}

impl Language {
    /// The BCP 47 language tag, used for the `lang` attribute of pages.
    pub fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Swahili => "sw",
        }
    }

    /// The interface text for `key` in this language.
    pub fn text(self, key: Text) -> &'static str {
        match self {
            Self::English => english(key),
            Self::Swahili => swahili(key),
        }
    }

    /// The label for a record kind.
    pub fn kind_label(self, kind: RecordKind) -> &'static str {
        match kind {
            RecordKind::Income => self.text(Text::Income),
            RecordKind::Expense => self.text(Text::Expense),
        }
    }

    /// The label for a record status.
    pub fn status_label(self, status: RecordStatus) -> &'static str {
        match status {
            RecordStatus::Completed => self.text(Text::Completed),
            RecordStatus::Pending => self.text(Text::Pending),
        }
    }

    /// The label for a budget status, with `None` meaning not applicable.
    pub fn budget_status_label(self, status: Option<BudgetStatus>) -> &'static str {
        match status {
            Some(BudgetStatus::UnderBudget) => self.text(Text::UnderBudget),
            Some(BudgetStatus::OnTrack) => self.text(Text::OnTrack),
            Some(BudgetStatus::Exceeded) => self.text(Text::Exceeded),
            None => self.text(Text::NotApplicable),
        }
    }

    /// The label for a goal status.
    pub fn goal_status_label(self, status: GoalStatus) -> &'static str {
        match status {
            GoalStatus::InProgress => self.text(Text::InProgress),
            GoalStatus::OnTrack => self.text(Text::OnTrack),
            GoalStatus::AtRisk => self.text(Text::AtRisk),
            GoalStatus::Completed => self.text(Text::Completed),
        }
    }

    /// The label for a goal priority.
    pub fn priority_label(self, priority: GoalPriority) -> &'static str {
        match priority {
            GoalPriority::High => self.text(Text::High),
            GoalPriority::Medium => self.text(Text::Medium),
            GoalPriority::Low => self.text(Text::Low),
        }
    }
}

fn english(key: Text) -> &'static str {
    match key {
        Text::Dashboard => "Dashboard",
        Text::Transactions => "Transactions",
        Text::Budget => "Budget Planner",
        Text::Goals => "Goals",
        Text::Reports => "Reports",
        Text::TotalIncome => "Total Income",
        Text::TotalExpenses => "Total Expenses",
        Text::NetAmount => "Net Amount",
        Text::Income => "Income",
        Text::Expense => "Expense",
        Text::Completed => "Completed",
        Text::Pending => "Pending",
        Text::Description => "Description",
        Text::Category => "Category",
        Text::Type => "Type",
        Text::Date => "Date",
        Text::Amount => "Amount",
        Text::Status => "Status",
        Text::ActiveFilters => "active",
        Text::NoTransactions => "No transactions found",
        Text::NotApplicable => "N/A",
        Text::UnderBudget => "Under budget",
        Text::OnTrack => "On track",
        Text::Exceeded => "Exceeded",
        Text::InProgress => "In progress",
        Text::AtRisk => "At risk",
        Text::Progress => "Progress",
        Text::Target => "Target",
        Text::Deadline => "Deadline",
        Text::Priority => "Priority",
        Text::High => "High",
        Text::Medium => "Medium",
        Text::Low => "Low",
        Text::Spent => "Spent",
        Text::Remaining => "Remaining",
        Text::Month => "Month",
        Text::Profit => "Profit",
        Text::ProfitMargin => "Profit Margin",
    }
}

fn swahili(key: Text) -> &'static str {
    match key {
        Text::Dashboard => "Dashibodi",
        Text::Transactions => "Miamala",
        Text::Budget => "Mpango wa Bajeti",
        Text::Goals => "Malengo",
        Text::Reports => "Ripoti",
        Text::TotalIncome => "Jumla ya Mapato",
        Text::TotalExpenses => "Jumla ya Matumizi",
        Text::NetAmount => "Kiasi Halisi",
        Text::Income => "Mapato",
        Text::Expense => "Matumizi",
        Text::Completed => "Imekamilika",
        Text::Pending => "Inasubiri",
        Text::Description => "Maelezo",
        Text::Category => "Kundi",
        Text::Type => "Aina",
        Text::Date => "Tarehe",
        Text::Amount => "Kiasi",
        Text::Status => "Hali",
        Text::ActiveFilters => "vinatumika",
        Text::NoTransactions => "Hakuna miamala iliyopatikana",
        Text::NotApplicable => "Haitumiki",
        Text::UnderBudget => "Chini ya bajeti",
        Text::OnTrack => "Iko sawa",
        Text::Exceeded => "Imezidi",
        Text::InProgress => "Inaendelea",
        Text::AtRisk => "Iko hatarini",
        Text::Progress => "Maendeleo",
        Text::Target => "Lengo",
        Text::Deadline => "Tarehe ya mwisho",
        Text::Priority => "Kipaumbele",
        Text::High => "Juu",
        Text::Medium => "Wastani",
        Text::Low => "Chini",
        Text::Spent => "Imetumika",
        Text::Remaining => "Iliyobaki",
        Text::Month => "Mwezi",
        Text::Profit => "Faida",
        Text::ProfitMargin => "Kiwango cha Faida",
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "sw" | "swahili" | "kiswahili" => Ok(Self::Swahili),
            _ => Err(ValidationError::UnknownLanguage(s.to_owned())),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use crate::record::RecordKind;

    use super::{Language, Text};

    #[test]
    fn labels_differ_by_language() {
        assert_eq!(Language::English.text(Text::TotalIncome), "Total Income");
        assert_eq!(Language::Swahili.text(Text::TotalIncome), "Jumla ya Mapato");
        assert_eq!(Language::Swahili.kind_label(RecordKind::Expense), "Matumizi");
    }

    #[test]
    fn not_applicable_is_translated() {
        assert_eq!(Language::English.budget_status_label(None), "N/A");
        assert_eq!(Language::Swahili.budget_status_label(None), "Haitumiki");
    }

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("sw".parse(), Ok(Language::Swahili));
        assert_eq!("Kiswahili".parse(), Ok(Language::Swahili));
        assert_eq!("EN".parse(), Ok(Language::English));
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn serializes_as_language_code() {
        assert_eq!(serde_json::to_string(&Language::Swahili).unwrap(), "\"sw\"");
    }
}
