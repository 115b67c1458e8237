//! Impact and urgency dimensions.
//!
//! Both dimension sets are closed: four impact dimensions, three urgency
//! dimensions. Scores live in fixed-field records so every dimension is always
//! present; the enums exist for iteration and per-dimension lookup.

use serde::{Deserialize, Serialize};

/// A per-dimension score. Nominally 0..=3, but stored values are not trusted.
pub type Score = i32;

pub const MIN_SCORE: Score = 0;
pub const MAX_SCORE: Score = 3;

/// Clamp an entered value into the valid per-dimension range.
pub fn clamp_score(value: Score) -> Score {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

pub fn score_in_range(value: Score) -> bool {
    (MIN_SCORE..=MAX_SCORE).contains(&value)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImpactDimension {
    GoalAlignment,
    ConsequenceCost,
    HardToDelegate,
    CompoundingValue,
}

impl ImpactDimension {
    pub const ALL: [ImpactDimension; 4] = [
        ImpactDimension::GoalAlignment,
        ImpactDimension::ConsequenceCost,
        ImpactDimension::HardToDelegate,
        ImpactDimension::CompoundingValue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ImpactDimension::GoalAlignment => "Goal Alignment",
            ImpactDimension::ConsequenceCost => "Consequence Cost",
            ImpactDimension::HardToDelegate => "Hard to Delegate",
            ImpactDimension::CompoundingValue => "Compounding Value",
        }
    }

    /// The question a user answers when scoring this dimension.
    pub fn prompt(self) -> &'static str {
        match self {
            ImpactDimension::GoalAlignment => {
                "Does this directly advance a priority goal this week or month?"
            }
            ImpactDimension::ConsequenceCost => "If I don't do this, how costly is it?",
            ImpactDimension::HardToDelegate => "Does this require me specifically?",
            ImpactDimension::CompoundingValue => {
                "Will this make future work meaningfully easier or higher quality?"
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyDimension {
    DeadlineProximity,
    LatePenalty,
    DependencyPressure,
}

impl UrgencyDimension {
    pub const ALL: [UrgencyDimension; 3] = [
        UrgencyDimension::DeadlineProximity,
        UrgencyDimension::LatePenalty,
        UrgencyDimension::DependencyPressure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            UrgencyDimension::DeadlineProximity => "Deadline Proximity",
            UrgencyDimension::LatePenalty => "Late Penalty",
            UrgencyDimension::DependencyPressure => "Dependency Pressure",
        }
    }

    pub fn prompt(self) -> &'static str {
        match self {
            UrgencyDimension::DeadlineProximity => "Auto-scored from the due date by default.",
            UrgencyDimension::LatePenalty => "If this is late, how bad is the outcome?",
            UrgencyDimension::DependencyPressure => "Are others waiting on me to move forward?",
        }
    }
}

/// The four impact scores of a task.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactScores {
    pub goal_alignment: Score,
    pub consequence_cost: Score,
    pub hard_to_delegate: Score,
    pub compounding_value: Score,
}

impl ImpactScores {
    pub fn new(
        goal_alignment: Score,
        consequence_cost: Score,
        hard_to_delegate: Score,
        compounding_value: Score,
    ) -> Self {
        Self {
            goal_alignment,
            consequence_cost,
            hard_to_delegate,
            compounding_value,
        }
    }

    pub fn get(&self, dim: ImpactDimension) -> Score {
        match dim {
            ImpactDimension::GoalAlignment => self.goal_alignment,
            ImpactDimension::ConsequenceCost => self.consequence_cost,
            ImpactDimension::HardToDelegate => self.hard_to_delegate,
            ImpactDimension::CompoundingValue => self.compounding_value,
        }
    }

    pub fn set(&mut self, dim: ImpactDimension, value: Score) {
        match dim {
            ImpactDimension::GoalAlignment => self.goal_alignment = value,
            ImpactDimension::ConsequenceCost => self.consequence_cost = value,
            ImpactDimension::HardToDelegate => self.hard_to_delegate = value,
            ImpactDimension::CompoundingValue => self.compounding_value = value,
        }
    }

    pub fn values(&self) -> [Score; 4] {
        ImpactDimension::ALL.map(|d| self.get(d))
    }
}

/// Where the deadline-proximity urgency score comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DeadlineProximity {
    /// Recomputed from the due date every time the task is scored.
    #[default]
    Derived,
    /// Entered by the user; the due date is ignored for this score.
    Manual(Score),
}

impl DeadlineProximity {
    pub fn is_manual(&self) -> bool {
        matches!(self, DeadlineProximity::Manual(_))
    }
}

/// The stored urgency scores of a task.
///
/// Deadline proximity is not a plain number here; see [`DeadlineProximity`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UrgencyScores {
    pub deadline_proximity: DeadlineProximity,
    pub late_penalty: Score,
    pub dependency_pressure: Score,
}

impl UrgencyScores {
    pub fn new(
        deadline_proximity: DeadlineProximity,
        late_penalty: Score,
        dependency_pressure: Score,
    ) -> Self {
        Self {
            deadline_proximity,
            late_penalty,
            dependency_pressure,
        }
    }
}

/// Urgency scores with deadline proximity resolved to a number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveUrgency {
    pub deadline_proximity: Score,
    pub late_penalty: Score,
    pub dependency_pressure: Score,
}

impl EffectiveUrgency {
    pub fn get(&self, dim: UrgencyDimension) -> Score {
        match dim {
            UrgencyDimension::DeadlineProximity => self.deadline_proximity,
            UrgencyDimension::LatePenalty => self.late_penalty,
            UrgencyDimension::DependencyPressure => self.dependency_pressure,
        }
    }

    pub fn values(&self) -> [Score; 3] {
        UrgencyDimension::ALL.map(|d| self.get(d))
    }
}
