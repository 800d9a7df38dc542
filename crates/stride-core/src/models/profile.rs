//! User profile model.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Training experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Level::Beginner),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            _ => Err(format!("Invalid level: {s}")),
        }
    }
}

impl Level {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }
}

/// Primary training goal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Strength,
    #[default]
    Hypertrophy,
    Endurance,
    Skill,
}

impl FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(Goal::Strength),
            "hypertrophy" => Ok(Goal::Hypertrophy),
            "endurance" => Ok(Goal::Endurance),
            "skill" => Ok(Goal::Skill),
            _ => Err(format!("Invalid goal: {s}")),
        }
    }
}

impl Goal {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Strength => "strength",
            Goal::Hypertrophy => "hypertrophy",
            Goal::Endurance => "endurance",
            Goal::Skill => "skill",
        }
    }
}

/// The athlete's profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    pub name: String,
    pub level: Level,
    pub goal: Goal,

    /// Equipment the athlete has access to, e.g. "pull-up bar"
    #[serde(default)]
    pub available_equipment: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_days_per_week: Option<u8>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Athlete".to_string(),
            level: Level::default(),
            goal: Goal::default(),
            available_equipment: Vec::new(),
            training_days_per_week: None,
        }
    }
}
