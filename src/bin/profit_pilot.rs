use std::{
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::{Parser, Subcommand};

use profit_pilot::{
    BudgetOverview, BudgetPeriod, DashboardView, Error, FilterForm, FilterSpec, GoalOverview,
    Language, Record, RecordKind, Settings, SettingsStore, Text, Theme, category_breakdown,
    csv::{read_records, write_records},
    filter_records, growth,
    html::{format_amount, format_currency, format_date, format_goal_value, format_percentage},
    logging, monthly_totals, profit_margin, render_dashboard, sample, summarize,
};

/// Bookkeeping reports for a small business.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with the records to report on. Uses built-in sample records
    /// if not given.
    #[arg(long, global = true)]
    records: Option<PathBuf>,

    /// JSON file the settings are read from and saved to.
    #[arg(long, global = true, default_value = "profit_pilot_settings.json")]
    settings: PathBuf,

    #[command(subcommand)]
    command: Command,
}

/// Filters for the records, as they would be typed into the filter form.
#[derive(clap::Args, Debug)]
struct FilterArgs {
    /// Only include records whose description contains this text.
    #[arg(long, default_value = "")]
    keyword: String,

    /// Only include records on or after this date (YYYY-MM-DD).
    #[arg(long = "from", default_value = "")]
    date_from: String,

    /// Only include records on or before this date (YYYY-MM-DD).
    #[arg(long = "to", default_value = "")]
    date_to: String,

    /// Only include records in this category, e.g. "M-PESA Charges".
    #[arg(long, default_value = "all")]
    category: String,

    /// Only include income or expense records.
    #[arg(long, default_value = "all")]
    kind: String,

    /// Only include records of at least this amount.
    #[arg(long, default_value = "")]
    min_amount: String,

    /// Only include records of at most this amount.
    #[arg(long, default_value = "")]
    max_amount: String,
}

impl FilterArgs {
    fn to_spec(&self) -> Result<FilterSpec, Error> {
        let form = FilterForm {
            keyword: self.keyword.clone(),
            date_from: self.date_from.clone(),
            date_to: self.date_to.clone(),
            category: self.category.clone(),
            kind: self.kind.clone(),
            min_amount: self.min_amount.clone(),
            max_amount: self.max_amount.clone(),
        };

        Ok(FilterSpec::try_from(&form)?)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the records that match the filters with their totals.
    Transactions {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show budget usage per category.
    Budgets {
        /// The budget period to show.
        #[arg(long, default_value = "month")]
        period: BudgetPeriod,
    },
    /// Show progress towards each goal.
    Goals,
    /// Show monthly totals, category breakdowns and the profit margin.
    Report {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the records that match the filters as CSV.
    Export {
        #[command(flatten)]
        filter: FilterArgs,

        /// File to write to. Writes to stdout if not given.
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write the dashboard as an HTML page.
    Render {
        #[command(flatten)]
        filter: FilterArgs,

        /// File to write the page to.
        #[arg(long, short)]
        output: PathBuf,
    },
    /// Show the settings, or change them if any option is given.
    Settings {
        /// The colour scheme, light or dark.
        #[arg(long)]
        theme: Option<Theme>,

        /// The interface language, en or sw.
        #[arg(long)]
        language: Option<Language>,

        /// Whether the dashboard sidebar is collapsed.
        #[arg(long)]
        sidebar_collapsed: Option<bool>,

        /// Whether to receive email notifications.
        #[arg(long)]
        email_notifications: Option<bool>,

        /// Whether to receive budget alerts.
        #[arg(long)]
        budget_alerts: Option<bool>,
    },
}

fn main() -> ExitCode {
    logging::init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), Error> {
    let mut store = SettingsStore::load(&args.settings)?;
    let language = store.settings().language;

    match args.command {
        Command::Transactions { filter } => {
            let records = load_records(args.records.as_deref())?;
            print_transactions(&records, &filter.to_spec()?, language);
        }
        Command::Budgets { period } => print_budgets(period, language),
        Command::Goals => print_goals(language),
        Command::Report { filter } => {
            let records = load_records(args.records.as_deref())?;
            let filtered = filter_records(&records, &filter.to_spec()?);
            print_report(&filtered, language);
        }
        Command::Export { filter, output } => {
            let records = load_records(args.records.as_deref())?;
            let filtered = filter_records(&records, &filter.to_spec()?);

            match output {
                Some(path) => {
                    write_records(File::create(&path)?, filtered.iter().copied())?;
                    tracing::info!("Exported {} records to {}", filtered.len(), path.display());
                }
                None => write_records(io::stdout().lock(), filtered.iter().copied())?,
            }
        }
        Command::Render { filter, output } => {
            let records = load_records(args.records.as_deref())?;
            let budgets = sample::budgets();
            let goals = sample::goals();
            let view = DashboardView::new(&records, &filter.to_spec()?, &budgets, &goals);

            fs::write(&output, render_dashboard(&view, store.settings()).into_string())?;
            tracing::info!("Wrote dashboard to {}", output.display());
        }
        Command::Settings {
            theme,
            language,
            sidebar_collapsed,
            email_notifications,
            budget_alerts,
        } => {
            let settings = store.update(|settings| {
                apply_setting(&mut settings.theme, theme);
                apply_setting(&mut settings.language, language);
                apply_setting(&mut settings.sidebar_collapsed, sidebar_collapsed);
                apply_setting(&mut settings.notifications.email, email_notifications);
                apply_setting(&mut settings.notifications.budget_alerts, budget_alerts);
            })?;
            print_settings(settings)?;
        }
    }

    Ok(())
}

fn apply_setting<T>(setting: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *setting = value;
    }
}

fn load_records(path: Option<&Path>) -> Result<Vec<Record>, Error> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .inspect_err(|error| tracing::error!("Could not open {}: {error}", path.display()))?;
            let records = read_records(BufReader::new(file))?;
            tracing::info!("Loaded {} records from {}", records.len(), path.display());
            Ok(records)
        }
        None => {
            tracing::debug!("No records file given, using sample records");
            sample::records()
        }
    }
}

fn print_transactions(records: &[Record], filter: &FilterSpec, language: Language) {
    let filtered = filter_records(records, filter);

    println!(
        "{:<14}{:<28}{:<16}{:<10}{:>18}  {}",
        language.text(Text::Date),
        language.text(Text::Description),
        language.text(Text::Category),
        language.text(Text::Type),
        language.text(Text::Amount),
        language.text(Text::Status),
    );

    for record in &filtered {
        let sign = match record.kind() {
            RecordKind::Income => "+",
            RecordKind::Expense => "-",
        };

        println!(
            "{:<14}{:<28}{:<16}{:<10}{:>18}  {}",
            format_date(record.occurred_on()),
            record.description(),
            record.category().name(),
            language.kind_label(record.kind()),
            format!("{sign}{}", format_amount(record.amount())),
            language.status_label(record.status()),
        );
    }

    if filtered.is_empty() {
        println!("{}", language.text(Text::NoTransactions));
    }

    let summary = summarize(filtered.iter().copied());
    println!();
    println!(
        "{}: {}",
        language.text(Text::TotalIncome),
        format_amount(summary.total_income)
    );
    println!(
        "{}: {}",
        language.text(Text::TotalExpenses),
        format_amount(summary.total_expense)
    );
    println!(
        "{}: {}",
        language.text(Text::NetAmount),
        format_currency(summary.net)
    );

    let active_filters = filter.active_filter_count();
    if active_filters > 0 {
        println!("{active_filters} {}", language.text(Text::ActiveFilters));
    }
}

fn print_budgets(period: BudgetPeriod, language: Language) {
    let budgets = sample::budgets();

    for budget in budgets.iter().filter(|budget| budget.period == period) {
        let usage = match budget.usage() {
            Some(usage) => format_percentage(usage.raw_percentage()),
            None => language.text(Text::NotApplicable).to_owned(),
        };

        println!(
            "{:<16}{:>18} / {:<18}{:>6}  {}",
            budget.category.name(),
            format_amount(budget.actual),
            format_amount(budget.limit),
            usage,
            language.budget_status_label(budget.status()),
        );
    }

    let overview = BudgetOverview::new(&budgets, period);
    println!();
    println!(
        "{}: {} / {}",
        language.text(Text::Spent),
        format_amount(overview.total_spent),
        format_amount(overview.total_limit)
    );
    println!(
        "{}: {}  {}: {}  {}: {}",
        language.text(Text::UnderBudget),
        overview.under_budget_count,
        language.text(Text::OnTrack),
        overview.on_track_count,
        language.text(Text::Exceeded),
        overview.exceeded_count,
    );
}

fn print_goals(language: Language) {
    let goals = sample::goals();

    for goal in &goals {
        let progress = match goal.progress() {
            Some(progress) => format_percentage(progress),
            None => language.text(Text::NotApplicable).to_owned(),
        };

        println!(
            "{:<28}{:>6}  {} / {}  {}  {}",
            goal.title,
            progress,
            format_goal_value(goal.unit, goal.current),
            format_goal_value(goal.unit, goal.target),
            format_date(goal.deadline),
            language.goal_status_label(goal.status),
        );
    }

    let overview = GoalOverview::new(&goals);
    println!();
    if let Some(average) = overview.average_progress {
        println!("{}: {}", language.text(Text::Progress), format_percentage(average));
    }
    println!(
        "{}: {}  {}: {}  {}: {}",
        language.text(Text::Completed),
        overview.completed,
        language.text(Text::OnTrack),
        overview.on_track,
        language.text(Text::AtRisk),
        overview.at_risk,
    );
}

fn print_report(records: &[&Record], language: Language) {
    let months = monthly_totals(records.iter().copied());

    println!(
        "{:<10}{:>18}{:>18}{:>18}{:>8}",
        language.text(Text::Month),
        language.text(Text::Income),
        language.text(Text::Expense),
        language.text(Text::Profit),
        "%"
    );

    let mut previous_profit = None;
    for month in &months {
        let change = previous_profit
            .and_then(|previous| growth(previous, month.profit))
            .map(format_percentage)
            .unwrap_or_else(|| language.text(Text::NotApplicable).to_owned());

        println!(
            "{:<10}{:>18}{:>18}{:>18}{:>8}",
            format!("{} {}", month.label(), month.year),
            format_amount(month.income),
            format_amount(month.expense),
            format_currency(month.profit),
            change,
        );
        previous_profit = Some(month.profit);
    }

    for kind in [RecordKind::Income, RecordKind::Expense] {
        println!();
        println!("{}", language.kind_label(kind));

        for total in category_breakdown(records.iter().copied(), kind) {
            let share = total
                .share
                .map(format_percentage)
                .unwrap_or_else(|| language.text(Text::NotApplicable).to_owned());

            println!(
                "  {:<16}{:>18}{:>6}  ({})",
                total.category.name(),
                format_amount(total.amount),
                share,
                total.count,
            );
        }
    }

    let summary = summarize(records.iter().copied());
    let margin = profit_margin(&summary)
        .map(format_percentage)
        .unwrap_or_else(|| language.text(Text::NotApplicable).to_owned());
    println!();
    println!("{}: {margin}", language.text(Text::ProfitMargin));
}

fn print_settings(settings: &Settings) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(settings)?);
    Ok(())
}
