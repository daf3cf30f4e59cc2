//! Shared page layout, styles and display formatting.
//!
//! Amounts stay in exact minor units everywhere else in the crate. They are
//! only turned into display strings here.

use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, PreEscaped, html};
use numfmt::{Formatter, Precision};
use time::{Date, macros::format_description};

use crate::{
    dashboard::GoalUnit,
    i18n::Language,
    money::{Amount, Balance},
    preferences::Theme,
};

/// The currency prefix for all displayed amounts.
pub const CURRENCY_PREFIX: &str = "KES";

// Card styles
pub(crate) const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md";
pub(crate) const CARD_TITLE_STYLE: &str =
    "text-sm font-medium text-gray-600 dark:text-gray-400";

// Table styles
pub(crate) const TABLE_HEADER_STYLE: &str = "text-xs text-gray-700 uppercase \
    bg-gray-50 dark:bg-gray-700 dark:text-gray-400";
pub(crate) const TABLE_ROW_STYLE: &str =
    "bg-white border-b dark:bg-gray-800 dark:border-gray-700";
pub(crate) const TABLE_CELL_STYLE: &str = "px-6 py-4";

// Badge styles
pub(crate) const BADGE_STYLE: &str = "inline-flex items-center px-2.5 py-0.5 \
    text-xs font-semibold rounded-full";
pub(crate) const POSITIVE_TEXT_STYLE: &str = "text-green-600 dark:text-green-400";
pub(crate) const NEGATIVE_TEXT_STYLE: &str = "text-red-600 dark:text-red-400";

// Page container
pub(crate) const PAGE_CONTAINER_STYLE: &str =
    "flex flex-col px-6 py-8 mx-auto max-w-7xl text-gray-900 dark:text-white";

/// Wrap `content` in a complete HTML document.
///
/// The `lang` attribute follows `language` and the `dark` class is set on the
/// root element when `theme` is dark.
pub fn base(title: &str, language: Language, theme: Theme, content: &Markup) -> Markup {
    let root_class = (theme == Theme::Dark).then_some("dark");

    html! {
        (DOCTYPE)
        html lang=(language.code()) class=[root_class]
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - ProfitPilot" }
                style
                {
                    (PreEscaped(r#"
                    .progress-track { width: 100%; height: 0.625rem; border-radius: 9999px; background: #e5e7eb; }
                    .progress-fill { height: 0.625rem; border-radius: 9999px; background: #2563eb; }
                    .progress-fill.over { background: #dc2626; }
                    "#))
                }
            }

            body class="min-h-screen bg-gray-50 dark:bg-gray-900"
            {
                (content)
            }
        }
    }
}

const SCIENTIFIC_NOTATION_THRESHOLD: u64 = 1_000_000_000_000;

/// Format the whole-unit part of an amount with thousands separators.
fn format_whole_units(whole: u64) -> String {
    static FMT: OnceLock<Formatter> = OnceLock::new();

    let fmt = FMT.get_or_init(|| {
        Formatter::new()
            .separator(',')
            .unwrap()
            .precision(Precision::Decimals(0))
    });

    if whole == 0 {
        // Zero is hardcoded as "0" by numfmt, which is what we want here anyway.
        return "0".to_owned();
    }

    // numfmt switches to scientific notation from this value upwards.
    if whole >= SCIENTIFIC_NOTATION_THRESHOLD {
        return format!("{},{:03}", format_whole_units(whole / 1000), whole % 1000);
    }

    fmt.fmt_string(whole)
}

/// Format an amount for display, e.g. "KES 15,000.00".
pub fn format_amount(amount: Amount) -> String {
    let minor = amount.minor_units();
    format!(
        "{CURRENCY_PREFIX} {}.{:02}",
        format_whole_units(minor / 100),
        minor % 100
    )
}

/// Format a signed balance for display, e.g. "-KES 450.00".
pub fn format_currency(balance: Balance) -> String {
    let formatted = format_amount(balance.unsigned_abs());

    if balance.is_negative() {
        format!("-{formatted}")
    } else {
        formatted
    }
}

/// Formats a percentage value rounded to a whole number, avoiding "-0%".
pub fn format_percentage(value: f64) -> String {
    let rounded = value.round();
    if rounded.abs() < 0.5 {
        "0%".to_string()
    } else {
        format!("{:.0}%", rounded)
    }
}

/// Format a date for display, e.g. "Jan 10, 2024".
pub fn format_date(date: Date) -> String {
    date.format(format_description!(
        "[month repr:short] [day padding:none], [year]"
    ))
    .unwrap_or_else(|_| date.to_string())
}

/// Format a goal value according to its unit.
pub fn format_goal_value(unit: GoalUnit, value: u64) -> String {
    match unit {
        GoalUnit::Currency => format_amount(Amount::from_minor(value)),
        GoalUnit::Percent => format!("{value}%"),
        GoalUnit::Count => value.to_string(),
    }
}
