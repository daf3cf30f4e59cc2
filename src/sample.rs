//! Demo data for a small Kenyan business.
//!
//! Used when no records file is given on the command line and as fixtures in
//! tests.

use time::{Date, macros::date};

use crate::{
    Error,
    dashboard::{Budget, BudgetPeriod, Goal, GoalKind, GoalPriority, GoalStatus, GoalUnit},
    money::Amount,
    record::{Category, Record, RecordId, RecordStatus},
};

const RECORDS: [(RecordId, Category, u64, &str, Date, RecordStatus); 8] = [
    (1, Category::Sales, 15_000, "Sales - Maize", date!(2024 - 01 - 10), RecordStatus::Completed),
    (2, Category::MpesaCharges, 850, "M-PESA Charges", date!(2024 - 01 - 09), RecordStatus::Completed),
    (3, Category::Transport, 450, "Transport to Market", date!(2024 - 01 - 08), RecordStatus::Completed),
    (4, Category::StockReturns, 2_000, "Stock Return", date!(2024 - 01 - 07), RecordStatus::Pending),
    (5, Category::Rent, 12_000, "Rent Payment", date!(2024 - 01 - 06), RecordStatus::Completed),
    (6, Category::Services, 8_000, "Services - Consulting", date!(2024 - 01 - 05), RecordStatus::Completed),
    (7, Category::Utilities, 3_500, "Utilities - Electricity", date!(2024 - 01 - 04), RecordStatus::Completed),
    (8, Category::Investment, 5_000, "Investment Returns", date!(2024 - 01 - 03), RecordStatus::Completed),
];

/// Eight transactions from the first ten days of January 2024, newest first.
///
/// # Errors
/// Returns the first validation error from [Record::new] if a row is invalid.
pub fn records() -> Result<Vec<Record>, Error> {
    RECORDS
        .into_iter()
        .map(|(id, category, amount, description, date, status)| {
            let record = Record::new(
                id,
                category.kind(),
                Amount::from_major(amount),
                category,
                description,
                date,
            )?;

            Ok(record.with_status(status))
        })
        .collect()
}

/// Monthly budgets, one per category.
pub fn budgets() -> Vec<Budget> {
    [
        (Category::Stock, 350_000, 320_000),
        (Category::Transport, 100_000, 96_000),
        (Category::Utilities, 85_000, 80_000),
        (Category::MpesaCharges, 70_000, 64_000),
        (Category::Rent, 120_000, 120_000),
        (Category::Sales, 500_000, 450_000),
        (Category::Services, 200_000, 180_000),
        (Category::Investment, 100_000, 120_000),
    ]
    .into_iter()
    .zip(1..)
    .map(|((category, limit, actual), id)| Budget {
        id,
        category,
        period: BudgetPeriod::Month,
        limit: Amount::from_major(limit),
        actual: Amount::from_major(actual),
    })
    .collect()
}

/// Six business goals covering every goal kind.
pub fn goals() -> Vec<Goal> {
    vec![
        Goal {
            id: 1,
            title: "Monthly Sales Target".to_owned(),
            description: "Achieve KES 500,000 in monthly sales".to_owned(),
            kind: GoalKind::Income,
            unit: GoalUnit::Currency,
            target: Amount::from_major(500_000).minor_units(),
            current: Amount::from_major(450_000).minor_units(),
            deadline: date!(2024 - 01 - 31),
            priority: GoalPriority::High,
            status: GoalStatus::InProgress,
        },
        Goal {
            id: 2,
            title: "Reduce Transport Costs".to_owned(),
            description: "Cut transportation expenses by 15%".to_owned(),
            kind: GoalKind::Expense,
            unit: GoalUnit::Currency,
            target: Amount::from_major(85_000).minor_units(),
            current: Amount::from_major(96_000).minor_units(),
            deadline: date!(2024 - 02 - 29),
            priority: GoalPriority::Medium,
            status: GoalStatus::AtRisk,
        },
        Goal {
            id: 3,
            title: "Expand to New Markets".to_owned(),
            description: "Enter 3 new market segments".to_owned(),
            kind: GoalKind::Business,
            unit: GoalUnit::Count,
            target: 3,
            current: 1,
            deadline: date!(2024 - 06 - 30),
            priority: GoalPriority::High,
            status: GoalStatus::InProgress,
        },
        Goal {
            id: 4,
            title: "Increase Profit Margin".to_owned(),
            description: "Achieve 25% profit margin".to_owned(),
            kind: GoalKind::Financial,
            unit: GoalUnit::Percent,
            target: 25,
            current: 22,
            deadline: date!(2024 - 03 - 31),
            priority: GoalPriority::High,
            status: GoalStatus::OnTrack,
        },
        Goal {
            id: 5,
            title: "Customer Satisfaction".to_owned(),
            description: "Maintain 95% customer satisfaction rate".to_owned(),
            kind: GoalKind::Quality,
            unit: GoalUnit::Percent,
            target: 95,
            current: 92,
            deadline: date!(2024 - 12 - 31),
            priority: GoalPriority::Medium,
            status: GoalStatus::InProgress,
        },
        Goal {
            id: 6,
            title: "Emergency Fund".to_owned(),
            description: "Build 6-month emergency fund".to_owned(),
            kind: GoalKind::Savings,
            unit: GoalUnit::Currency,
            target: Amount::from_major(3_000_000).minor_units(),
            current: Amount::from_major(1_800_000).minor_units(),
            deadline: date!(2024 - 12 - 31),
            priority: GoalPriority::High,
            status: GoalStatus::OnTrack,
        },
    ]
}
