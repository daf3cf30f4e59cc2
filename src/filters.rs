//! The record filter used by the transactions page.
//!
//! A [FilterForm] holds the raw text the user typed in. It is validated once
//! into a [FilterSpec], which can then be applied to any number of records
//! with [matches] or [filter_records].

use serde::{Deserialize, Serialize};
use time::{Date, macros::format_description};

use crate::{
    ValidationError,
    money::Amount,
    record::{Category, Record, RecordKind},
};

/// The form value that means "do not constrain this field".
pub const ALL: &str = "all";

/// Raw filter form data, exactly as submitted.
///
/// Every field may be empty. `category` and `kind` may also be [ALL].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterForm {
    /// Text to search for in record descriptions.
    pub keyword: String,
    /// The earliest date to include, formatted as `YYYY-MM-DD`.
    pub date_from: String,
    /// The latest date to include, formatted as `YYYY-MM-DD`.
    pub date_to: String,
    /// The exact category name to include.
    pub category: String,
    /// The record kind to include, "income" or "expense".
    pub kind: String,
    /// The smallest amount to include.
    pub min_amount: String,
    /// The largest amount to include.
    pub max_amount: String,
}

/// Which categories a [FilterSpec] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Accept every category.
    #[default]
    All,
    /// Accept a single category.
    Only(Category),
}

/// Which record kinds a [FilterSpec] accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// Accept income and expenses.
    #[default]
    All,
    /// Accept a single kind.
    Only(RecordKind),
}

/// Validated constraints for narrowing a collection of records.
///
/// A record is included only if it satisfies every constraint. The default
/// filter has no constraints and includes every record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSpec {
    keyword: Option<String>,
    date_from: Option<Date>,
    date_to: Option<Date>,
    category: CategoryFilter,
    kind: KindFilter,
    min_amount: Option<Amount>,
    max_amount: Option<Amount>,
}

impl FilterSpec {
    /// Only include records whose description contains `keyword`, ignoring case.
    ///
    /// A keyword that is empty after trimming whitespace removes the constraint.
    /// Otherwise the keyword is matched as given, surrounding whitespace included.
    pub fn keyword(mut self, keyword: &str) -> Self {
        self.keyword = (!keyword.trim().is_empty()).then(|| keyword.to_lowercase());
        self
    }

    /// Only include records on or after `date`.
    pub fn date_from(mut self, date: Option<Date>) -> Self {
        self.date_from = date;
        self
    }

    /// Only include records on or before `date`.
    pub fn date_to(mut self, date: Option<Date>) -> Self {
        self.date_to = date;
        self
    }

    /// Only include records matching the category filter.
    pub fn category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Only include records matching the kind filter.
    pub fn kind(mut self, kind: KindFilter) -> Self {
        self.kind = kind;
        self
    }

    /// Only include records with an amount of at least `amount`.
    pub fn min_amount(mut self, amount: Option<Amount>) -> Self {
        self.min_amount = amount;
        self
    }

    /// Only include records with an amount of at most `amount`.
    pub fn max_amount(mut self, amount: Option<Amount>) -> Self {
        self.max_amount = amount;
        self
    }

    /// Remove every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The number of constraints currently set, shown as a badge next to the
    /// filter controls.
    pub fn active_filter_count(&self) -> usize {
        [
            self.keyword.is_some(),
            self.date_from.is_some(),
            self.date_to.is_some(),
            self.category != CategoryFilter::All,
            self.kind != KindFilter::All,
            self.min_amount.is_some(),
            self.max_amount.is_some(),
        ]
        .into_iter()
        .filter(|is_active| *is_active)
        .count()
    }

    /// Whether the filter has no constraints.
    pub fn is_empty(&self) -> bool {
        self.active_filter_count() == 0
    }
}

impl TryFrom<&FilterForm> for FilterSpec {
    type Error = ValidationError;

    /// Validate the form.
    ///
    /// # Errors
    ///
    /// Returns [ValidationError::InvalidFilterField] naming the first field
    /// that is not empty and cannot be parsed.
    fn try_from(form: &FilterForm) -> Result<Self, Self::Error> {
        let date_from = parse_optional("date_from", &form.date_from, parse_date)?;
        let date_to = parse_optional("date_to", &form.date_to, parse_date)?;
        let min_amount = parse_optional("min_amount", &form.min_amount, Amount::parse)?;
        let max_amount = parse_optional("max_amount", &form.max_amount, Amount::parse)?;

        let category =
            parse_optional_choice("category", &form.category, str::parse::<Category>)?;
        let category = match category {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        };

        let kind = parse_optional_choice("kind", &form.kind, str::parse::<RecordKind>)?;
        let kind = match kind {
            Some(kind) => KindFilter::Only(kind),
            None => KindFilter::All,
        };

        Ok(FilterSpec::default()
            .keyword(&form.keyword)
            .date_from(date_from)
            .date_to(date_to)
            .category(category)
            .kind(kind)
            .min_amount(min_amount)
            .max_amount(max_amount))
    }
}

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns [ValidationError::InvalidDate] if `text` is not a valid calendar date.
pub fn parse_date(text: &str) -> Result<Date, ValidationError> {
    Date::parse(text.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| ValidationError::InvalidDate(text.to_owned()))
}

fn parse_optional<T>(
    field: &'static str,
    text: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    let text = text.trim();

    if text.is_empty() {
        return Ok(None);
    }

    parse(text)
        .map(Some)
        .map_err(|error| ValidationError::InvalidFilterField(field, Box::new(error)))
}

fn parse_optional_choice<T>(
    field: &'static str,
    text: &str,
    parse: impl Fn(&str) -> Result<T, ValidationError>,
) -> Result<Option<T>, ValidationError> {
    if text.trim() == ALL {
        return Ok(None);
    }

    parse_optional(field, text, parse)
}

/// Whether `record` satisfies every constraint in `spec`.
pub fn matches(record: &Record, spec: &FilterSpec) -> bool {
    let matches_keyword = spec.keyword.as_ref().is_none_or(|keyword| {
        record
            .description()
            .to_lowercase()
            .contains(keyword.as_str())
    });

    let matches_date = spec
        .date_from
        .is_none_or(|from| record.occurred_on() >= from)
        && spec.date_to.is_none_or(|to| record.occurred_on() <= to);

    let matches_category = match spec.category {
        CategoryFilter::All => true,
        CategoryFilter::Only(category) => record.category() == category,
    };

    let matches_kind = match spec.kind {
        KindFilter::All => true,
        KindFilter::Only(kind) => record.kind() == kind,
    };

    let matches_amount = spec
        .min_amount
        .is_none_or(|min| record.amount() >= min)
        && spec.max_amount.is_none_or(|max| record.amount() <= max);

    matches_keyword && matches_date && matches_category && matches_kind && matches_amount
}

/// The records that satisfy `spec`, in their original order.
pub fn filter_records<'a>(records: &'a [Record], spec: &FilterSpec) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| matches(record, spec))
        .collect()
}
