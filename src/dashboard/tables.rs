//! Table views for dashboard data display.
//!
//! Provides HTML tables for the filtered record list and the monthly report.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::{MonthlyTotal, growth},
    html::{
        BADGE_STYLE, NEGATIVE_TEXT_STYLE, POSITIVE_TEXT_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_amount, format_currency, format_date,
        format_percentage,
    },
    i18n::{Language, Text},
    record::{Record, RecordKind, RecordStatus},
};

const ACTIVE_FILTER_BADGE_STYLE: &str =
    "bg-blue-100 text-blue-800 dark:bg-blue-900 dark:text-blue-300";

fn status_badge_style(status: RecordStatus) -> &'static str {
    match status {
        RecordStatus::Completed => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        RecordStatus::Pending => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
        }
    }
}

/// Renders the filtered records with a badge counting the active filters.
///
/// The badge is omitted when no filters are active.
pub(super) fn records_table(
    records: &[&Record],
    active_filters: usize,
    language: Language,
) -> Markup {
    html! {
        section class="mb-8" {
            div class="flex items-baseline gap-3 mb-4" {
                h3 class="text-xl font-semibold" { (language.text(Text::Transactions)) }
                @if active_filters > 0 {
                    span
                        class={(BADGE_STYLE) " " (ACTIVE_FILTER_BADGE_STYLE)}
                        data-active-filters=(active_filters)
                    {
                        (active_filters) " " (language.text(Text::ActiveFilters))
                    }
                }
            }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Date)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Description)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Category)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Type)) }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { (language.text(Text::Amount)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Status)) }
                        }
                    }
                    tbody {
                        @for record in records {
                            (record_row(record, language))
                        }

                        @if records.is_empty() {
                            tr class=(TABLE_ROW_STYLE) {
                                td colspan="6" class={(TABLE_CELL_STYLE) " text-center"} data-empty {
                                    (language.text(Text::NoTransactions))
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn record_row(record: &Record, language: Language) -> Markup {
    let (sign, amount_style) = match record.kind() {
        RecordKind::Income => ("+", POSITIVE_TEXT_STYLE),
        RecordKind::Expense => ("-", NEGATIVE_TEXT_STYLE),
    };

    html! {
        tr class=(TABLE_ROW_STYLE) data-record=(record.id()) {
            td class={(TABLE_CELL_STYLE) " whitespace-nowrap"} { (format_date(record.occurred_on())) }
            td class={(TABLE_CELL_STYLE) " font-medium text-gray-900 dark:text-white"} {
                (record.description())
            }
            td class=(TABLE_CELL_STYLE) { (record.category().name()) }
            td class=(TABLE_CELL_STYLE) { (language.kind_label(record.kind())) }
            td class={(TABLE_CELL_STYLE) " text-right whitespace-nowrap " (amount_style)} {
                (sign) (format_amount(record.amount()))
            }
            td class=(TABLE_CELL_STYLE) {
                span class={(BADGE_STYLE) " " (status_badge_style(record.status()))} {
                    (language.status_label(record.status()))
                }
            }
        }
    }
}

/// Renders income, expenses and profit per month with the change in profit
/// from the previous month.
pub(super) fn monthly_report_table(months: &[MonthlyTotal], language: Language) -> Markup {
    if months.is_empty() {
        return html! {};
    }

    html! {
        section class="mb-8" {
            h3 class="text-xl font-semibold mb-4" { (language.text(Text::Reports)) }

            div class="overflow-x-auto rounded-lg shadow" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Month)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Income)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Expense)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { (language.text(Text::Profit)) }
                            th scope="col" class=(TABLE_CELL_STYLE) { "%" }
                        }
                    }
                    tbody {
                        @for (index, month) in months.iter().enumerate() {
                            @let change = index
                                .checked_sub(1)
                                .and_then(|previous| growth(months[previous].profit, month.profit));

                            tr class=(TABLE_ROW_STYLE) {
                                th scope="row" class={(TABLE_CELL_STYLE) " font-medium"} {
                                    (month.label()) " " (month.year)
                                }
                                td class=(TABLE_CELL_STYLE) { (format_amount(month.income)) }
                                td class=(TABLE_CELL_STYLE) { (format_amount(month.expense)) }
                                td class={
                                    (TABLE_CELL_STYLE) " "
                                    (if month.profit.is_negative() { NEGATIVE_TEXT_STYLE } else { POSITIVE_TEXT_STYLE })
                                } {
                                    (format_currency(month.profit))
                                }
                                td class=(TABLE_CELL_STYLE) data-growth {
                                    @match change {
                                        Some(change) => { (format_percentage(change)) }
                                        None => { (language.text(Text::NotApplicable)) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::{
        dashboard::aggregation::monthly_totals, i18n::Language, record::Record, sample,
    };

    use super::{monthly_report_table, records_table};

    #[test]
    fn records_table_lists_rows_in_input_order() {
        let records = sample::records().unwrap();
        let rows: Vec<&Record> = records.iter().collect();

        let html = Html::parse_fragment(&records_table(&rows, 0, Language::English).into_string());

        let ids: Vec<_> = html
            .select(&Selector::parse("tr[data-record]").unwrap())
            .map(|row| row.value().attr("data-record").unwrap().to_owned())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
        assert!(html.html().contains("-KES 450.00"));
        assert!(html.html().contains("+KES 15,000.00"));
    }

    #[test]
    fn active_filter_badge_is_hidden_without_filters() {
        let html = Html::parse_fragment(&records_table(&[], 0, Language::English).into_string());

        assert!(
            html.select(&Selector::parse("[data-active-filters]").unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn active_filter_badge_shows_count_in_language() {
        let html = Html::parse_fragment(&records_table(&[], 2, Language::Swahili).into_string());

        let badge: String = html
            .select(&Selector::parse("[data-active-filters]").unwrap())
            .next()
            .unwrap()
            .text()
            .collect();
        assert_eq!(badge, "2 vinatumika");
    }

    #[test]
    fn empty_table_shows_placeholder_row() {
        let html = Html::parse_fragment(&records_table(&[], 1, Language::English).into_string());

        let placeholder: String = html
            .select(&Selector::parse("[data-empty]").unwrap())
            .next()
            .unwrap()
            .text()
            .collect();
        assert_eq!(placeholder, "No transactions found");
    }

    #[test]
    fn monthly_report_first_month_has_no_growth() {
        let records = sample::records().unwrap();
        let months = monthly_totals(&records);

        let html =
            Html::parse_fragment(&monthly_report_table(&months, Language::English).into_string());

        let growth: String = html
            .select(&Selector::parse("[data-growth]").unwrap())
            .next()
            .unwrap()
            .text()
            .collect();
        assert_eq!(growth.trim(), "N/A");
        assert!(html.html().contains("Jan 2024"));
    }

    #[test]
    fn monthly_report_is_empty_without_records() {
        assert!(monthly_report_table(&[], Language::English).into_string().is_empty());
    }
}
