//! Dashboard page composition.
//!
//! [DashboardView] holds everything derived from the records for a single
//! filter, and [render_dashboard] lays it out as a complete HTML page in the
//! language and theme from the settings.

use maud::{Markup, html};

use crate::{
    dashboard::{
        aggregation::{MonthlyTotal, Summary, monthly_totals, summarize},
        budget::Budget,
        cards::{budget_card, goal_card, summary_cards},
        goal::Goal,
        tables::{monthly_report_table, records_table},
    },
    filters::{FilterSpec, filter_records},
    html::{PAGE_CONTAINER_STYLE, base},
    i18n::Text,
    navigation::Sidebar,
    preferences::Settings,
    record::Record,
};

/// The data shown on the dashboard for one filter.
#[derive(Debug, Clone)]
pub struct DashboardView<'a> {
    records: Vec<&'a Record>,
    summary: Summary,
    monthly: Vec<MonthlyTotal>,
    active_filters: usize,
    budgets: &'a [Budget],
    goals: &'a [Goal],
}

impl<'a> DashboardView<'a> {
    /// Apply `filter` to `records` and aggregate the matches.
    ///
    /// Budgets and goals are shown as given, they are not filtered.
    pub fn new(
        records: &'a [Record],
        filter: &FilterSpec,
        budgets: &'a [Budget],
        goals: &'a [Goal],
    ) -> Self {
        let records = filter_records(records, filter);
        let summary = summarize(records.iter().copied());
        let monthly = monthly_totals(records.iter().copied());

        Self {
            records,
            summary,
            monthly,
            active_filters: filter.active_filter_count(),
            budgets,
            goals,
        }
    }

    /// The records that matched the filter, in input order.
    pub fn records(&self) -> &[&'a Record] {
        &self.records
    }

    /// Totals over the matching records.
    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Totals per month over the matching records.
    pub fn monthly(&self) -> &[MonthlyTotal] {
        &self.monthly
    }

    /// The number of filter fields that constrain the records.
    pub fn active_filter_count(&self) -> usize {
        self.active_filters
    }
}

/// Render the dashboard page for `view`.
///
/// Labels follow `settings.language`, the `dark` class is set on the root
/// element for the dark theme and the sidebar follows
/// `settings.sidebar_collapsed`.
pub fn render_dashboard(view: &DashboardView, settings: &Settings) -> Markup {
    let language = settings.language;
    let sidebar = Sidebar::new(language, "summary", settings.sidebar_collapsed).into_html();

    let content = html! {
        div class="flex" {
            (sidebar)

            main class={(PAGE_CONTAINER_STYLE) " w-full"} {
                h1 id="summary" class="text-2xl font-bold mb-6" { (language.text(Text::Dashboard)) }

                (summary_cards(&view.summary, language))

                div id="transactions" {
                    (records_table(&view.records, view.active_filters, language))
                }

                @if !view.budgets.is_empty() {
                    section id="budgets" class="mb-8" {
                        h3 class="text-xl font-semibold mb-4" { (language.text(Text::Budget)) }
                        div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4" {
                            @for budget in view.budgets {
                                (budget_card(budget, language))
                            }
                        }
                    }
                }

                @if !view.goals.is_empty() {
                    section id="goals" class="mb-8" {
                        h3 class="text-xl font-semibold mb-4" { (language.text(Text::Goals)) }
                        div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                            @for goal in view.goals {
                                (goal_card(goal, language))
                            }
                        }
                    }
                }

                div id="reports" {
                    (monthly_report_table(&view.monthly, language))
                }
            }
        }
    };

    base(language.text(Text::Dashboard), language, settings.theme, &content)
}
