//! Card components for the dashboard.
//!
//! Provides:
//! - Summary cards for income, expenses, net amount and profit margin
//! - Budget cards with a progress bar per category
//! - Goal cards with direction-aware progress

use maud::{Markup, html};

use crate::{
    dashboard::{
        aggregation::{Summary, profit_margin},
        budget::{Budget, BudgetStatus},
        goal::Goal,
    },
    html::{
        BADGE_STYLE, CARD_STYLE, CARD_TITLE_STYLE, NEGATIVE_TEXT_STYLE, POSITIVE_TEXT_STYLE,
        format_amount, format_currency, format_date, format_goal_value, format_percentage,
    },
    i18n::{Language, Text},
};

/// Gets the CSS class for a signed amount (green for profit, red for loss).
fn balance_color_class(is_negative: bool) -> &'static str {
    if is_negative {
        NEGATIVE_TEXT_STYLE
    } else {
        POSITIVE_TEXT_STYLE
    }
}

fn budget_status_style(status: Option<BudgetStatus>) -> &'static str {
    match status {
        Some(BudgetStatus::UnderBudget) => {
            "bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-300"
        }
        Some(BudgetStatus::OnTrack) => {
            "bg-yellow-100 text-yellow-800 dark:bg-yellow-900 dark:text-yellow-300"
        }
        Some(BudgetStatus::Exceeded) => "bg-red-100 text-red-800 dark:bg-red-900 dark:text-red-300",
        None => "bg-gray-100 text-gray-800 dark:bg-gray-700 dark:text-gray-300",
    }
}

/// Renders the row of summary cards above the record table.
pub(super) fn summary_cards(summary: &Summary, language: Language) -> Markup {
    let margin = profit_margin(summary);

    html! {
        section class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-4 mb-8" {
            div class=(CARD_STYLE) data-card="income" {
                h3 class=(CARD_TITLE_STYLE) { (language.text(Text::TotalIncome)) }
                p class={"text-2xl font-bold " (POSITIVE_TEXT_STYLE)} {
                    (format_amount(summary.total_income))
                }
            }

            div class=(CARD_STYLE) data-card="expense" {
                h3 class=(CARD_TITLE_STYLE) { (language.text(Text::TotalExpenses)) }
                p class={"text-2xl font-bold " (NEGATIVE_TEXT_STYLE)} {
                    (format_amount(summary.total_expense))
                }
            }

            div class=(CARD_STYLE) data-card="net" {
                h3 class=(CARD_TITLE_STYLE) { (language.text(Text::NetAmount)) }
                p class={"text-2xl font-bold " (balance_color_class(summary.net.is_negative()))} {
                    (format_currency(summary.net))
                }
            }

            div class=(CARD_STYLE) data-card="margin" {
                h3 class=(CARD_TITLE_STYLE) { (language.text(Text::ProfitMargin)) }
                p class="text-2xl font-bold" {
                    @match margin {
                        Some(margin) => { (format_percentage(margin)) }
                        None => { (language.text(Text::NotApplicable)) }
                    }
                }
            }
        }
    }
}

/// Renders a card for a single budget.
///
/// The bar width is capped at 100% while the label shows the raw usage, so an
/// exceeded budget reads e.g. "120%" over a full red bar.
pub(super) fn budget_card(budget: &Budget, language: Language) -> Markup {
    let usage = budget.usage();
    let status = budget.status();

    html! {
        div class=(CARD_STYLE) data-budget=(budget.category.name()) {
            div class="flex justify-between items-baseline mb-2" {
                h4 class="text-lg font-semibold truncate" { (budget.category.name()) }
                span class={(BADGE_STYLE) " " (budget_status_style(status))} {
                    (language.budget_status_label(status))
                }
            }

            div class="text-sm mb-2" {
                (language.text(Text::Spent)) ": " (format_amount(budget.actual))
                " / " (format_amount(budget.limit))
            }

            @match usage {
                Some(usage) => {
                    (progress_bar(usage.capped_percentage(), usage.is_over_budget()))
                    div class="flex justify-between text-sm text-gray-600 dark:text-gray-400" {
                        span data-usage { (format_percentage(usage.raw_percentage())) }
                        span {
                            (language.text(Text::Remaining)) ": " (format_amount(budget.remaining()))
                        }
                    }
                }
                None => {
                    div class="text-sm text-gray-600 dark:text-gray-400" {
                        span data-usage { (language.text(Text::NotApplicable)) }
                    }
                }
            }
        }
    }
}

/// Renders a card for a single goal.
pub(super) fn goal_card(goal: &Goal, language: Language) -> Markup {
    let progress = goal.progress();

    html! {
        div class=(CARD_STYLE) data-goal=(goal.id) {
            div class="flex justify-between items-baseline mb-1" {
                h4 class="text-lg font-semibold truncate" title=(goal.title) { (goal.title) }
                span class=(BADGE_STYLE) { (language.goal_status_label(goal.status)) }
            }
            p class="text-sm text-gray-600 dark:text-gray-400 mb-3" { (goal.description) }

            div class="flex justify-between text-sm mb-2" {
                span { (format_goal_value(goal.unit, goal.current)) }
                span {
                    (language.text(Text::Target)) ": " (format_goal_value(goal.unit, goal.target))
                }
            }

            @if let Some(progress) = progress {
                (progress_bar(progress, false))
            }

            div class="flex justify-between text-sm text-gray-600 dark:text-gray-400" {
                span data-progress {
                    (language.text(Text::Progress)) ": "
                    @match progress {
                        Some(progress) => { (format_percentage(progress)) }
                        None => { (language.text(Text::NotApplicable)) }
                    }
                }
                span { (language.text(Text::Deadline)) ": " (format_date(goal.deadline)) }
            }

            div class="text-xs mt-1" {
                (language.text(Text::Priority)) ": " (language.priority_label(goal.priority))
            }
        }
    }
}

/// Renders a horizontal progress bar.
///
/// `percentage` is clamped to 0-100. The bar is drawn in red when `over_budget`
/// is set.
fn progress_bar(percentage: f64, over_budget: bool) -> Markup {
    let clamped = percentage.clamp(0.0, 100.0);

    // Ensure minimum 3% width so rounded corners are visible
    let display_percentage = if clamped > 0.0 && clamped < 3.0 {
        3.0
    } else {
        clamped
    };

    html! {
        div
            class="progress-track mb-2"
            role="progressbar"
            aria-valuenow=(format!("{clamped:.0}"))
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if clamped > 0.0 {
                div
                    class=(if over_budget { "progress-fill over" } else { "progress-fill" })
                    style=(format!("width: {display_percentage:.1}%"))
                {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        dashboard::{
            aggregation::Summary,
            budget::{Budget, BudgetPeriod},
            goal::{Goal, GoalKind, GoalPriority, GoalStatus, GoalUnit},
        },
        i18n::Language,
        money::{Amount, Balance},
        record::Category,
    };

    use super::{budget_card, goal_card, progress_bar, summary_cards};

    fn create_test_budget(limit: u64, actual: u64) -> Budget {
        Budget {
            id: 1,
            category: Category::Transport,
            period: BudgetPeriod::Month,
            limit: Amount::from_major(limit),
            actual: Amount::from_major(actual),
        }
    }

    fn select_text(html: &Html, selector: &str) -> String {
        html.select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("no element matches {selector}"))
            .text()
            .collect()
    }

    #[test]
    fn progress_bar_has_minimum_width_for_small_percentages() {
        let html = progress_bar(0.5, false).into_string();

        assert!(html.contains("width: 3.0%"));
    }

    #[test]
    fn progress_bar_empty_for_zero_percentage() {
        let html = progress_bar(0.0, false).into_string();

        assert!(html.contains("progressbar"));
        assert!(!html.contains("progress-fill"));
    }

    #[test]
    fn progress_bar_clamps_over_100() {
        let html = progress_bar(150.0, true).into_string();

        assert!(html.contains("width: 100.0%"));
        assert!(html.contains("progress-fill over"));
        assert!(html.contains("aria-valuenow=\"100\""));
    }

    #[test]
    fn exceeded_budget_shows_raw_usage_over_full_bar() {
        let budget = create_test_budget(1000, 1200);

        let html = Html::parse_fragment(&budget_card(&budget, Language::English).into_string());

        assert_eq!(select_text(&html, "[data-usage]"), "120%");
        assert!(
            html.select(&Selector::parse(".progress-fill.over").unwrap())
                .next()
                .is_some()
        );
        assert!(html.html().contains("width: 100.0%"));
        assert!(html.html().contains("Exceeded"));
    }

    #[test]
    fn budget_exactly_on_limit_is_not_drawn_as_over() {
        let budget = create_test_budget(1000, 1000);

        let html = Html::parse_fragment(&budget_card(&budget, Language::English).into_string());

        assert_eq!(select_text(&html, "[data-usage]"), "100%");
        assert!(
            html.select(&Selector::parse(".progress-fill.over").unwrap())
                .next()
                .is_none()
        );
    }

    #[test]
    fn zero_budget_shows_not_applicable() {
        let budget = create_test_budget(0, 50);

        let english = Html::parse_fragment(&budget_card(&budget, Language::English).into_string());
        let swahili = Html::parse_fragment(&budget_card(&budget, Language::Swahili).into_string());

        assert_eq!(select_text(&english, "[data-usage]"), "N/A");
        assert_eq!(select_text(&swahili, "[data-usage]"), "Haitumiki");
        assert!(!english.html().contains("progressbar"));
        assert!(!english.html().contains("NaN"));
    }

    #[test]
    fn summary_cards_show_loss_in_red() {
        let summary = Summary {
            total_income: Amount::from_major(100),
            total_expense: Amount::from_major(300),
            net: Balance::from_minor(-20_000),
        };

        let html = Html::parse_fragment(&summary_cards(&summary, Language::English).into_string());

        assert_eq!(
            select_text(&html, "[data-card=\"net\"] p").trim(),
            "-KES 200.00"
        );
        assert_eq!(
            select_text(&html, "[data-card=\"margin\"] p").trim(),
            "-200%"
        );
    }

    #[test]
    fn summary_cards_without_income_have_no_margin() {
        let html = Html::parse_fragment(
            &summary_cards(&Summary::default(), Language::English).into_string(),
        );

        assert_eq!(select_text(&html, "[data-card=\"margin\"] p").trim(), "N/A");
    }

    #[test]
    fn reduction_goal_above_target_shows_zero_progress() {
        let goal = Goal {
            id: 2,
            title: "Reduce Transport Costs".to_owned(),
            description: "Cut transportation expenses by 15%".to_owned(),
            kind: GoalKind::Expense,
            unit: GoalUnit::Currency,
            target: 8_500_000,
            current: 9_600_000,
            deadline: date!(2024 - 02 - 29),
            priority: GoalPriority::Medium,
            status: GoalStatus::AtRisk,
        };

        let html = Html::parse_fragment(&goal_card(&goal, Language::English).into_string());

        assert_eq!(select_text(&html, "[data-progress]"), "Progress: 0%");
        assert!(html.html().contains("KES 85,000.00"));
        assert!(html.html().contains("Feb 29, 2024"));
    }
}
