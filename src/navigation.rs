//! The sidebar that links to each section of the dashboard page.

use maud::{Markup, html};

use crate::i18n::{Language, Text};

/// Anchors of the dashboard sections, in page order.
const SECTIONS: [(&str, Text); 5] = [
    ("summary", Text::Dashboard),
    ("transactions", Text::Transactions),
    ("budgets", Text::Budget),
    ("goals", Text::Goals),
    ("reports", Text::Reports),
];

/// A link in the sidebar.
#[derive(Clone)]
struct Link<'a> {
    anchor: &'a str,
    title: &'a str,
    is_current: bool,
}

impl Link<'_> {
    fn into_html(self, collapsed: bool) -> Markup {
        let style = if self.is_current {
            "flex items-center gap-3 rounded-lg px-3 py-2 bg-blue-50 text-blue-700
            dark:bg-blue-900/30 dark:text-blue-200"
        } else {
            "flex items-center gap-3 rounded-lg px-3 py-2 text-gray-700 hover:bg-gray-100
            dark:text-gray-200 dark:hover:bg-gray-800"
        };
        // Collapsed links keep only the initial letter.
        let initial = self.title.chars().next().unwrap_or_default();

        html! {
            a
                href={"#" (self.anchor)}
                class=(style)
                title=(self.title)
                aria-current=[self.is_current.then_some("page")]
            {
                @if collapsed {
                    span class="w-5 text-center font-semibold" { (initial) }
                } @else {
                    span class="truncate" { (self.title) }
                }
            }
        }
    }
}

/// The dashboard sidebar.
pub(crate) struct Sidebar<'a> {
    links: Vec<Link<'a>>,
    collapsed: bool,
}

impl Sidebar<'_> {
    /// Get the sidebar with labels in `language`.
    ///
    /// The link to `current` is marked as active.
    pub(crate) fn new(language: Language, current: &str, collapsed: bool) -> Sidebar<'_> {
        let links = SECTIONS
            .iter()
            .map(|&(anchor, text)| Link {
                anchor,
                title: language.text(text),
                is_current: anchor == current,
            })
            .collect();

        Sidebar { links, collapsed }
    }

    pub(crate) fn into_html(self) -> Markup {
        let width = if self.collapsed { "w-16" } else { "w-64" };

        html! {
            nav
                class={"shrink-0 min-h-screen border-r border-gray-200 bg-white p-3
                    dark:border-gray-700 dark:bg-gray-900 " (width)}
                data-collapsed=(if self.collapsed { "true" } else { "false" })
            {
                div class="mb-6 px-3 text-xl font-semibold text-gray-900 dark:text-white" {
                    @if self.collapsed { "P" } @else { "ProfitPilot" }
                }

                ul class="space-y-1 font-medium" {
                    @for link in self.links {
                        li { (link.into_html(self.collapsed)) }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use scraper::{Html, Selector};

    use crate::i18n::Language;

    use super::Sidebar;

    #[test]
    fn expanded_sidebar_shows_translated_titles() {
        let html = Sidebar::new(Language::Swahili, "summary", false)
            .into_html()
            .into_string();
        let document = Html::parse_fragment(&html);

        let titles: Vec<String> = document
            .select(&Selector::parse("a span").unwrap())
            .map(|span| span.text().collect())
            .collect();
        assert_eq!(
            titles,
            vec!["Dashibodi", "Miamala", "Mpango wa Bajeti", "Malengo", "Ripoti"]
        );
    }

    #[test]
    fn current_link_is_marked() {
        let html = Sidebar::new(Language::English, "goals", false)
            .into_html()
            .into_string();
        let document = Html::parse_fragment(&html);

        let current: Vec<_> = document
            .select(&Selector::parse("a[aria-current=page]").unwrap())
            .map(|link| link.value().attr("href").unwrap().to_owned())
            .collect();
        assert_eq!(current, vec!["#goals"]);
    }

    #[test]
    fn collapsed_sidebar_shows_initials() {
        let html = Sidebar::new(Language::English, "summary", true)
            .into_html()
            .into_string();

        assert!(html.contains("data-collapsed=\"true\""));
        assert!(html.contains("w-16"));
        assert!(!html.contains(">Transactions<"));
    }
}
