//! Dashboard module
//!
//! Provides the summary aggregations, budgets and goals, and the overview
//! page that shows them for a filtered set of records.

mod aggregation;
mod budget;
mod cards;
mod goal;
mod tables;
mod view;

pub use aggregation::{
    BudgetUsage, CategoryTotal, MonthlyTotal, Summary, budget_usage, category_breakdown, growth,
    monthly_totals, profit_margin, summarize,
};
pub use budget::{Budget, BudgetOverview, BudgetPeriod, BudgetStatus};
pub use goal::{
    Goal, GoalDirection, GoalKind, GoalOverview, GoalPriority, GoalStatus, GoalUnit,
    goal_progress,
};
pub use view::{DashboardView, render_dashboard};
