//! Budgets per category and the budget planner overview.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    ValidationError,
    dashboard::aggregation::{BudgetUsage, budget_usage},
    money::Amount,
    record::{Category, RecordKind},
};

/// Usage at or above this percentage, but not over budget, is "on track".
const ON_TRACK_THRESHOLD: f64 = 80.0;

/// The period a budget applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// A calendar week.
    Week,
    /// A calendar month.
    #[default]
    Month,
    /// A calendar quarter.
    Quarter,
    /// A calendar year.
    Year,
}

impl BudgetPeriod {
    /// The value used for this period on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }
}

impl FromStr for BudgetPeriod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "quarter" => Ok(Self::Quarter),
            "year" => Ok(Self::Year),
            _ => Err(ValidationError::UnknownPeriod(s.to_owned())),
        }
    }
}

impl Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a budget is tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BudgetStatus {
    /// Well within the budget.
    UnderBudget,
    /// Close to the budget, but not over it.
    OnTrack,
    /// More than the budget has been spent (or earned, for income budgets).
    Exceeded,
}

impl BudgetStatus {
    fn from_usage(usage: &BudgetUsage) -> Self {
        if usage.is_over_budget() {
            Self::Exceeded
        } else if usage.raw_percentage() >= ON_TRACK_THRESHOLD {
            Self::OnTrack
        } else {
            Self::UnderBudget
        }
    }
}

/// A spending limit (for expenses) or target (for income) for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    /// The ID of the budget.
    pub id: i64,
    /// The category the budget applies to.
    pub category: Category,
    /// The period the budget applies to.
    pub period: BudgetPeriod,
    /// The budgeted amount.
    pub limit: Amount,
    /// The amount spent or earned so far in the period.
    pub actual: Amount,
}

impl Budget {
    /// Whether this budget is for income or expenses, derived from its category.
    pub fn kind(&self) -> RecordKind {
        self.category.kind()
    }

    /// How much of the budget has been used, or `None` if the limit is zero.
    pub fn usage(&self) -> Option<BudgetUsage> {
        budget_usage(self.actual, self.limit)
    }

    /// How the budget is tracking, or `None` if the limit is zero.
    pub fn status(&self) -> Option<BudgetStatus> {
        self.usage().as_ref().map(BudgetStatus::from_usage)
    }

    /// The amount left before reaching the limit, zero once it is exceeded.
    pub fn remaining(&self) -> Amount {
        Amount::from_minor(
            self.limit
                .minor_units()
                .saturating_sub(self.actual.minor_units()),
        )
    }
}

/// Totals across the budgets for a single period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetOverview {
    /// The sum of all budgeted amounts.
    pub total_limit: Amount,
    /// The sum spent against expense budgets.
    pub total_spent: Amount,
    /// The sum earned against income budgets.
    pub total_earned: Amount,
    /// The number of budgets that are under budget.
    pub under_budget_count: usize,
    /// The number of budgets that are on track.
    pub on_track_count: usize,
    /// The number of budgets that have been exceeded.
    pub exceeded_count: usize,
    /// The number of budgets with a zero limit.
    pub not_applicable_count: usize,
}

impl BudgetOverview {
    /// Summarise the budgets in `budgets` that apply to `period`.
    pub fn new(budgets: &[Budget], period: BudgetPeriod) -> Self {
        budgets
            .iter()
            .filter(|budget| budget.period == period)
            .fold(Self::default(), |mut overview, budget| {
                overview.total_limit = overview.total_limit + budget.limit;

                match budget.kind() {
                    RecordKind::Expense => {
                        overview.total_spent = overview.total_spent + budget.actual
                    }
                    RecordKind::Income => {
                        overview.total_earned = overview.total_earned + budget.actual
                    }
                }

                match budget.status() {
                    Some(BudgetStatus::UnderBudget) => overview.under_budget_count += 1,
                    Some(BudgetStatus::OnTrack) => overview.on_track_count += 1,
                    Some(BudgetStatus::Exceeded) => overview.exceeded_count += 1,
                    None => overview.not_applicable_count += 1,
                }

                overview
            })
    }
}
