//! Defines the core data model for income and expense records.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, ValidationError, money::Amount};

/// Identifier for a record.
pub type RecordId = i64;

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    /// Money earned, e.g. sales.
    Income,
    /// Money spent, e.g. rent.
    Expense,
}

impl RecordKind {
    /// The value used for this kind in forms and CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The categories that records of this kind may use, in display order.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Income => &INCOME_CATEGORIES,
            Self::Expense => &EXPENSE_CATEGORIES,
        }
    }
}

impl FromStr for RecordKind {
    type Err = ValidationError;

    /// Parse a kind, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(ValidationError::UnknownKind(s.to_owned())),
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a record has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    /// The money has moved.
    #[default]
    Completed,
    /// The money has not moved yet.
    Pending,
}

impl RecordStatus {
    /// The value used for this status in CSV files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }
}

impl FromStr for RecordStatus {
    type Err = ValidationError;

    /// Parse a status, ignoring case. An empty string is [RecordStatus::Completed].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            _ => Err(ValidationError::UnknownStatus(s.to_owned())),
        }
    }
}

/// The bookkeeping category of a record.
///
/// Income and expense categories are disjoint, see [Category::kind].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Revenue from product sales.
    Sales,
    /// Consulting and service fees.
    Services,
    /// Investment returns and dividends.
    Investment,
    /// Refunds for returned stock.
    #[serde(rename = "Stock Returns")]
    StockReturns,
    /// Income that fits no other category.
    #[serde(rename = "Other Income")]
    OtherIncome,
    /// Inventory and stock purchases.
    Stock,
    /// Office and storage rent.
    Rent,
    /// Transportation and delivery costs.
    Transport,
    /// Electricity, water and internet.
    Utilities,
    /// Mobile money transaction fees.
    #[serde(rename = "M-PESA Charges")]
    MpesaCharges,
    /// Staff wages.
    Salaries,
    /// Expenses that fit no other category.
    Miscellaneous,
}

const INCOME_CATEGORIES: [Category; 5] = [
    Category::Sales,
    Category::Services,
    Category::Investment,
    Category::StockReturns,
    Category::OtherIncome,
];

const EXPENSE_CATEGORIES: [Category; 7] = [
    Category::Stock,
    Category::Rent,
    Category::Transport,
    Category::Utilities,
    Category::MpesaCharges,
    Category::Salaries,
    Category::Miscellaneous,
];

impl Category {
    /// Every category, income categories first.
    pub fn all() -> impl Iterator<Item = Category> {
        INCOME_CATEGORIES.into_iter().chain(EXPENSE_CATEGORIES)
    }

    /// The display name of the category, which is also its form and CSV value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Services => "Services",
            Self::Investment => "Investment",
            Self::StockReturns => "Stock Returns",
            Self::OtherIncome => "Other Income",
            Self::Stock => "Stock",
            Self::Rent => "Rent",
            Self::Transport => "Transport",
            Self::Utilities => "Utilities",
            Self::MpesaCharges => "M-PESA Charges",
            Self::Salaries => "Salaries",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// The kind of record this category belongs to.
    pub fn kind(self) -> RecordKind {
        match self {
            Self::Sales
            | Self::Services
            | Self::Investment
            | Self::StockReturns
            | Self::OtherIncome => RecordKind::Income,
            Self::Stock
            | Self::Rent
            | Self::Transport
            | Self::Utilities
            | Self::MpesaCharges
            | Self::Salaries
            | Self::Miscellaneous => RecordKind::Expense,
        }
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Parse a category from its exact, case-sensitive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .find(|category| category.name() == s)
            .ok_or_else(|| ValidationError::UnknownCategory(s.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A single income or expense entry.
///
/// Records are immutable once created. Use [Record::new] to create one so that
/// the description and category invariants are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    id: RecordId,
    kind: RecordKind,
    amount: Amount,
    category: Category,
    description: String,
    occurred_on: Date,
    status: RecordStatus,
}

impl Record {
    /// Create a record with the default status, [RecordStatus::Completed].
    ///
    /// The description is stored with surrounding whitespace removed.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::EmptyDescription] if `description` is empty or only whitespace,
    /// - or [Error::CategoryKindMismatch] if `category` does not belong to `kind`.
    pub fn new(
        id: RecordId,
        kind: RecordKind,
        amount: Amount,
        category: Category,
        description: &str,
        occurred_on: Date,
    ) -> Result<Self, Error> {
        let description = description.trim();

        if description.is_empty() {
            return Err(Error::EmptyDescription);
        }

        if category.kind() != kind {
            return Err(Error::CategoryKindMismatch { category, kind });
        }

        Ok(Self {
            id,
            kind,
            amount,
            category,
            description: description.to_owned(),
            occurred_on,
            status: RecordStatus::default(),
        })
    }

    /// Set the status of the record.
    pub fn with_status(mut self, status: RecordStatus) -> Self {
        self.status = status;
        self
    }

    /// The ID of the record.
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// Whether the record is income or an expense.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The amount of money earned or spent.
    pub fn amount(&self) -> Amount {
        self.amount
    }

    /// The category of the record.
    pub fn category(&self) -> Category {
        self.category
    }

    /// What the record was for.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// When the money was earned or spent.
    pub fn occurred_on(&self) -> Date {
        self.occurred_on
    }

    /// Whether the record has settled.
    pub fn status(&self) -> RecordStatus {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use time::macros::date;

    use crate::{Error, ValidationError, money::Amount};

    use super::{Category, Record, RecordKind, RecordStatus};

    #[test]
    fn new_record_defaults_to_completed() {
        let record = Record::new(
            1,
            RecordKind::Expense,
            Amount::from_major(450),
            Category::Transport,
            "  Transport to Market ",
            date!(2024 - 01 - 08),
        )
        .unwrap();

        assert_eq!(record.status(), RecordStatus::Completed);
        assert_eq!(record.description(), "Transport to Market");
    }

    #[test]
    fn new_fails_on_empty_description() {
        let result = Record::new(
            1,
            RecordKind::Income,
            Amount::from_major(10),
            Category::Sales,
            "   ",
            date!(2024 - 01 - 08),
        );

        assert!(matches!(result, Err(Error::EmptyDescription)));
    }

    #[test]
    fn new_fails_when_category_belongs_to_other_kind() {
        let result = Record::new(
            1,
            RecordKind::Income,
            Amount::from_major(10),
            Category::Rent,
            "Rent refund",
            date!(2024 - 01 - 08),
        );

        assert!(matches!(
            result,
            Err(Error::CategoryKindMismatch {
                category: Category::Rent,
                kind: RecordKind::Income
            })
        ));
    }

    #[test]
    fn income_and_expense_categories_are_disjoint() {
        let income: HashSet<_> = RecordKind::Income.categories().iter().collect();
        let expense: HashSet<_> = RecordKind::Expense.categories().iter().collect();

        assert!(income.is_disjoint(&expense));
        assert_eq!(income.len() + expense.len(), Category::all().count());

        for category in Category::all() {
            assert!(category.kind().categories().contains(&category));
        }
    }

    #[test]
    fn category_parsing_is_exact() {
        assert_eq!("M-PESA Charges".parse(), Ok(Category::MpesaCharges));
        assert_eq!(
            "rent".parse::<Category>(),
            Err(ValidationError::UnknownCategory("rent".to_owned()))
        );
    }

    #[test]
    fn kind_and_status_parsing_ignore_case() {
        assert_eq!("Income".parse(), Ok(RecordKind::Income));
        assert_eq!(" EXPENSE ".parse(), Ok(RecordKind::Expense));
        assert!("refund".parse::<RecordKind>().is_err());
        assert_eq!("".parse(), Ok(RecordStatus::Completed));
        assert_eq!("Pending".parse(), Ok(RecordStatus::Pending));
        assert!("cancelled".parse::<RecordStatus>().is_err());
    }
}
