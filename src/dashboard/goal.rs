//! Business goals and their progress.
//!
//! Progress depends on the goal's direction: accumulation goals (sales,
//! savings) progress as the current value rises towards the target, while
//! reduction goals (cutting an expense) progress as it falls below the target.

use time::Date;

use crate::dashboard::aggregation::percentage;

/// Whether a goal is reached by increasing or decreasing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalDirection {
    /// Progress increases with the current value, e.g. a sales target.
    Accumulate,
    /// Progress increases as the current value falls below the target, e.g.
    /// reducing transport costs.
    Reduce,
}

/// Calculates goal progress as a percentage between 0 and 100.
///
/// - [GoalDirection::Accumulate]: `current / target * 100`.
/// - [GoalDirection::Reduce]: `(target - current) / target * 100`.
///
/// Returns `None` when `target` is zero.
pub fn goal_progress(direction: GoalDirection, current: u64, target: u64) -> Option<f64> {
    let current = current as f64;
    let target = target as f64;

    let raw = match direction {
        GoalDirection::Accumulate => percentage(current, target)?,
        GoalDirection::Reduce => percentage(target - current, target)?,
    };

    Some(raw.clamp(0.0, 100.0))
}

/// What a goal measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalKind {
    /// Earn a target amount, e.g. monthly sales.
    Income,
    /// Bring an expense down to a target amount.
    Expense,
    /// A business milestone such as entering new markets.
    Business,
    /// A financial ratio such as profit margin.
    Financial,
    /// A quality measure such as customer satisfaction.
    Quality,
    /// Save up a target amount.
    Savings,
}

impl GoalKind {
    /// The direction in which progress is made for this kind of goal.
    pub fn direction(self) -> GoalDirection {
        match self {
            Self::Expense => GoalDirection::Reduce,
            Self::Income | Self::Business | Self::Financial | Self::Quality | Self::Savings => {
                GoalDirection::Accumulate
            }
        }
    }
}

/// The unit of a goal's target and current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalUnit {
    /// Money, in minor units.
    Currency,
    /// Whole percentage points.
    Percent,
    /// A plain count.
    Count,
}

/// The state of a goal as set by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GoalStatus {
    /// Work towards the goal has started.
    InProgress,
    /// The goal is expected to be met by the deadline.
    OnTrack,
    /// The goal may not be met by the deadline.
    AtRisk,
    /// The goal has been met.
    Completed,
}

/// How important a goal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GoalPriority {
    /// Nice to have.
    Low,
    /// Important.
    Medium,
    /// Critical to the business.
    High,
}

/// A financial or business objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// The ID of the goal.
    pub id: i64,
    /// A short name for the goal.
    pub title: String,
    /// What the goal is about.
    pub description: String,
    /// What the goal measures, which determines its direction.
    pub kind: GoalKind,
    /// The unit of `target` and `current`.
    pub unit: GoalUnit,
    /// The value to reach.
    pub target: u64,
    /// The value so far.
    pub current: u64,
    /// When the goal should be met by.
    pub deadline: Date,
    /// How important the goal is.
    pub priority: GoalPriority,
    /// The state of the goal.
    pub status: GoalStatus,
}

impl Goal {
    /// The direction in which progress is made for this goal.
    pub fn direction(&self) -> GoalDirection {
        self.kind.direction()
    }

    /// The progress towards the target between 0 and 100, or `None` if the
    /// target is zero.
    pub fn progress(&self) -> Option<f64> {
        goal_progress(self.direction(), self.current, self.target)
    }
}

/// Counts of goals by status.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GoalOverview {
    /// The number of goals.
    pub total: usize,
    /// The number of completed goals.
    pub completed: usize,
    /// The number of goals that are on track.
    pub on_track: usize,
    /// The number of goals that are at risk.
    pub at_risk: usize,
    /// The number of goals that are in progress.
    pub in_progress: usize,
    /// The mean progress of the goals that have a non-zero target.
    pub average_progress: Option<f64>,
}

impl GoalOverview {
    /// Summarise `goals`.
    pub fn new(goals: &[Goal]) -> Self {
        let mut overview = Self {
            total: goals.len(),
            ..Default::default()
        };

        for goal in goals {
            match goal.status {
                GoalStatus::Completed => overview.completed += 1,
                GoalStatus::OnTrack => overview.on_track += 1,
                GoalStatus::AtRisk => overview.at_risk += 1,
                GoalStatus::InProgress => overview.in_progress += 1,
            }
        }

        let progress: Vec<f64> = goals.iter().filter_map(Goal::progress).collect();
        overview.average_progress = (!progress.is_empty())
            .then(|| progress.iter().sum::<f64>() / progress.len() as f64);

        overview
    }
}
