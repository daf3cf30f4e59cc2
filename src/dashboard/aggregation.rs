//! Record aggregation for the summary cards and reports.
//!
//! Provides functions to total records by kind, month and category, and to
//! express amounts as percentages of a budget. Every function here is pure:
//! the same records always produce the same result, regardless of order.

use std::collections::BTreeMap;

use time::Month;

use crate::{
    money::{Amount, Balance},
    record::{Category, Record, RecordKind},
};

/// Totals over a collection of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    /// The sum of all income.
    pub total_income: Amount,
    /// The sum of all expenses.
    pub total_expense: Amount,
    /// Income minus expenses. Negative when the business made a loss.
    pub net: Balance,
}

/// Totals the income and expenses in `records`.
///
/// An empty collection produces an all-zero summary.
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a Record>) -> Summary {
    let (total_income, total_expense) = records.into_iter().fold(
        (Amount::ZERO, Amount::ZERO),
        |(income, expense), record| match record.kind() {
            RecordKind::Income => (income + record.amount(), expense),
            RecordKind::Expense => (income, expense + record.amount()),
        },
    );

    Summary {
        total_income,
        total_expense,
        net: total_income - total_expense,
    }
}

/// How much of a budget has been used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetUsage {
    raw_percentage: f64,
    over_budget: bool,
}

impl BudgetUsage {
    /// The percentage of the budget used, which may be above 100.
    pub fn raw_percentage(&self) -> f64 {
        self.raw_percentage
    }

    /// The percentage of the budget used, capped at 100 for progress bars.
    pub fn capped_percentage(&self) -> f64 {
        self.raw_percentage.min(100.0)
    }

    /// Whether more than the budget was used.
    ///
    /// Using exactly the budget is not over budget.
    pub fn is_over_budget(&self) -> bool {
        self.over_budget
    }
}

/// Calculates how much of `budget` has been used by `spent`.
///
/// Returns `None` when `budget` is zero, since no percentage of a zero budget
/// is meaningful. Callers should display this as "not applicable".
pub fn budget_usage(spent: Amount, budget: Amount) -> Option<BudgetUsage> {
    let raw_percentage = percentage(spent.minor_units() as f64, budget.minor_units() as f64)?;

    Some(BudgetUsage {
        raw_percentage,
        over_budget: spent > budget,
    })
}

/// `numerator` as a percentage of `denominator`, or `None` if `denominator` is zero.
pub(crate) fn percentage(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator * 100.0 / denominator)
    }
}

/// Net profit as a percentage of income.
///
/// Returns `None` when there is no income.
pub fn profit_margin(summary: &Summary) -> Option<f64> {
    percentage(
        summary.net.minor_units() as f64,
        summary.total_income.minor_units() as f64,
    )
}

/// The percentage change from `previous` to `current`.
///
/// The change is relative to the magnitude of `previous`, so going from a loss
/// of 100 to a loss of 50 is +50%. Returns `None` when `previous` is zero.
pub fn growth(previous: impl Into<Balance>, current: impl Into<Balance>) -> Option<f64> {
    let previous = previous.into().minor_units() as f64;
    let current = current.into().minor_units() as f64;

    percentage(current - previous, previous.abs())
}

/// Income, expenses and profit for a single calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyTotal {
    /// The year of the month.
    pub year: i32,
    /// The calendar month.
    pub month: Month,
    /// The sum of income in the month.
    pub income: Amount,
    /// The sum of expenses in the month.
    pub expense: Amount,
    /// Income minus expenses in the month.
    pub profit: Balance,
}

impl MonthlyTotal {
    /// The month as a three-letter abbreviation, e.g. "Jan".
    pub fn label(&self) -> &'static str {
        match self.month {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }
}

/// Aggregates records by calendar month.
///
/// # Returns
/// One entry per month that has at least one record, in chronological order.
pub fn monthly_totals<'a>(records: impl IntoIterator<Item = &'a Record>) -> Vec<MonthlyTotal> {
    let mut records_by_month: BTreeMap<(i32, u8), Vec<&Record>> = BTreeMap::new();

    for record in records {
        let date = record.occurred_on();
        records_by_month
            .entry((date.year(), u8::from(date.month())))
            .or_default()
            .push(record);
    }

    records_by_month
        .into_values()
        .filter_map(|records| {
            let first = records.first()?.occurred_on();
            let summary = summarize(records.iter().copied());

            Some(MonthlyTotal {
                year: first.year(),
                month: first.month(),
                income: summary.total_income,
                expense: summary.total_expense,
                profit: summary.net,
            })
        })
        .collect()
}

/// The total for a single category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// The sum of the category's records.
    pub amount: Amount,
    /// The number of records in the category.
    pub count: usize,
    /// The category's share of the total for its kind, as a percentage.
    ///
    /// `None` if every record of the kind has a zero amount.
    pub share: Option<f64>,
}

/// Groups the records of `kind` by category.
///
/// # Returns
/// One entry per category that has at least one record, largest amount first.
/// Categories with equal amounts are listed in their display order.
pub fn category_breakdown<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    kind: RecordKind,
) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<Category, (Amount, usize)> = BTreeMap::new();

    for record in records.into_iter().filter(|record| record.kind() == kind) {
        let (amount, count) = totals.entry(record.category()).or_default();
        *amount = *amount + record.amount();
        *count += 1;
    }

    let kind_total: Amount = totals.values().map(|(amount, _)| *amount).sum();

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, (amount, count))| CategoryTotal {
            category,
            amount,
            count,
            share: percentage(
                amount.minor_units() as f64,
                kind_total.minor_units() as f64,
            ),
        })
        .collect();

    // The sort is stable, so ties keep the category order from the map.
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown
}

#[cfg(test)]
mod tests {
    use time::{Date, Month, macros::date};

    use crate::{
        money::{Amount, Balance},
        record::{Category, Record, RecordKind},
        sample,
    };

    use super::{
        Summary, budget_usage, category_breakdown, growth, monthly_totals, profit_margin,
        summarize,
    };

    fn create_test_record(id: i64, category: Category, amount: u64, date: Date) -> Record {
        Record::new(
            id,
            category.kind(),
            Amount::from_major(amount),
            category,
            "test record",
            date,
        )
        .unwrap()
    }

    #[test]
    fn summarize_empty_input_is_zero() {
        let records: Vec<Record> = Vec::new();

        assert_eq!(summarize(&records), Summary::default());
        assert_eq!(
            summarize(&records),
            Summary {
                total_income: Amount::ZERO,
                total_expense: Amount::ZERO,
                net: Balance::ZERO,
            }
        );
    }

    #[test]
    fn summarize_totals_by_kind() {
        let records = vec![
            create_test_record(1, Category::Sales, 15_000, date!(2024 - 01 - 10)),
            create_test_record(2, Category::MpesaCharges, 850, date!(2024 - 01 - 09)),
            create_test_record(3, Category::Rent, 12_000, date!(2024 - 01 - 06)),
        ];

        let summary = summarize(&records);

        assert_eq!(summary.total_income, Amount::from_major(15_000));
        assert_eq!(summary.total_expense, Amount::from_major(12_850));
        assert_eq!(summary.net, Balance::from_minor(215_000));
    }

    #[test]
    fn summarize_allows_negative_net() {
        let records = vec![
            create_test_record(1, Category::Sales, 100, date!(2024 - 01 - 10)),
            create_test_record(2, Category::Rent, 300, date!(2024 - 01 - 06)),
        ];

        assert_eq!(summarize(&records).net, Balance::from_minor(-20_000));
    }

    #[test]
    fn summarize_ignores_record_order() {
        let records = sample::records().unwrap();
        let mut reversed = records.clone();
        reversed.reverse();
        let mut rotated = records.clone();
        rotated.rotate_left(3);

        assert_eq!(summarize(&records), summarize(&reversed));
        assert_eq!(summarize(&records), summarize(&rotated));
    }

    #[test]
    fn summarize_is_exact_for_cents() {
        let records: Vec<Record> = (0..1000)
            .map(|id| {
                Record::new(
                    id,
                    RecordKind::Expense,
                    Amount::from_minor(10),
                    Category::MpesaCharges,
                    "fee",
                    date!(2024 - 01 - 01),
                )
                .unwrap()
            })
            .collect();

        assert_eq!(summarize(&records).total_expense, Amount::from_major(100));
    }

    #[test]
    fn budget_usage_under_budget() {
        let usage = budget_usage(Amount::from_major(500), Amount::from_major(1000)).unwrap();

        assert_eq!(usage.capped_percentage(), 50.0);
        assert_eq!(usage.raw_percentage(), 50.0);
        assert!(!usage.is_over_budget());
    }

    #[test]
    fn budget_usage_over_budget() {
        let usage = budget_usage(Amount::from_major(1200), Amount::from_major(1000)).unwrap();

        assert_eq!(usage.capped_percentage(), 100.0);
        assert_eq!(usage.raw_percentage(), 120.0);
        assert!(usage.is_over_budget());
    }

    #[test]
    fn budget_usage_exactly_on_budget_is_not_over() {
        let usage = budget_usage(Amount::from_major(1000), Amount::from_major(1000)).unwrap();

        assert_eq!(usage.capped_percentage(), 100.0);
        assert_eq!(usage.raw_percentage(), 100.0);
        assert!(!usage.is_over_budget());
    }

    #[test]
    fn budget_usage_zero_budget_is_not_applicable() {
        assert_eq!(budget_usage(Amount::ZERO, Amount::ZERO), None);
        assert_eq!(budget_usage(Amount::from_major(5), Amount::ZERO), None);
    }

    #[test]
    fn profit_margin_is_net_over_income() {
        let summary = Summary {
            total_income: Amount::from_major(200),
            total_expense: Amount::from_major(150),
            net: Balance::from_minor(5_000),
        };

        assert_eq!(profit_margin(&summary), Some(25.0));
        assert_eq!(profit_margin(&Summary::default()), None);
    }

    #[test]
    fn growth_is_relative_to_previous_magnitude() {
        assert_eq!(
            growth(Amount::from_major(100), Amount::from_major(150)),
            Some(50.0)
        );
        assert_eq!(
            growth(Amount::from_major(200), Amount::from_major(150)),
            Some(-25.0)
        );
        assert_eq!(
            growth(Balance::from_minor(-10_000), Balance::from_minor(-5_000)),
            Some(50.0)
        );
        assert_eq!(growth(Amount::ZERO, Amount::from_major(150)), None);
    }

    #[test]
    fn monthly_totals_are_chronological() {
        let records = vec![
            create_test_record(1, Category::Sales, 100, date!(2024 - 03 - 15)),
            create_test_record(2, Category::Rent, 50, date!(2024 - 01 - 20)),
            create_test_record(3, Category::Sales, 30, date!(2024 - 01 - 10)),
            create_test_record(4, Category::Sales, 25, date!(2023 - 12 - 31)),
        ];

        let totals = monthly_totals(&records);

        let months: Vec<_> = totals.iter().map(|total| (total.year, total.month)).collect();
        assert_eq!(
            months,
            vec![
                (2023, Month::December),
                (2024, Month::January),
                (2024, Month::March)
            ]
        );

        let january = totals[1];
        assert_eq!(january.income, Amount::from_major(30));
        assert_eq!(january.expense, Amount::from_major(50));
        assert_eq!(january.profit, Balance::from_minor(-2_000));
        assert_eq!(january.label(), "Jan");
    }

    #[test]
    fn monthly_totals_handles_empty_input() {
        let records: Vec<Record> = Vec::new();

        assert!(monthly_totals(&records).is_empty());
    }

    #[test]
    fn category_breakdown_sorts_by_amount() {
        let records = vec![
            create_test_record(1, Category::Rent, 100, date!(2024 - 01 - 15)),
            create_test_record(2, Category::Transport, 50, date!(2024 - 01 - 20)),
            create_test_record(3, Category::Transport, 250, date!(2024 - 02 - 10)),
            create_test_record(4, Category::Sales, 999, date!(2024 - 01 - 10)),
        ];

        let breakdown = category_breakdown(&records, RecordKind::Expense);

        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, Category::Transport);
        assert_eq!(breakdown[0].amount, Amount::from_major(300));
        assert_eq!(breakdown[0].count, 2);
        assert_eq!(breakdown[0].share, Some(75.0));
        assert_eq!(breakdown[1].category, Category::Rent);
        assert_eq!(breakdown[1].share, Some(25.0));
    }

    #[test]
    fn category_breakdown_breaks_ties_by_category_order() {
        let records = vec![
            create_test_record(1, Category::Utilities, 100, date!(2024 - 01 - 15)),
            create_test_record(2, Category::Rent, 100, date!(2024 - 01 - 20)),
        ];

        let breakdown = category_breakdown(&records, RecordKind::Expense);

        assert_eq!(breakdown[0].category, Category::Rent);
        assert_eq!(breakdown[1].category, Category::Utilities);
    }

    #[test]
    fn category_breakdown_share_is_not_applicable_for_zero_total() {
        let records = vec![create_test_record(1, Category::Rent, 0, date!(2024 - 01 - 15))];

        let breakdown = category_breakdown(&records, RecordKind::Expense);

        assert_eq!(breakdown[0].share, None);
        assert_eq!(breakdown[0].count, 1);
    }
}
