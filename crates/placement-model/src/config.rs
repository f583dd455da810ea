use serde::{Deserialize, Serialize};

/// Default minimum average score for a `Ready` verdict.
pub const DEFAULT_READY_THRESHOLD: f64 = 75.0;

/// Default minimum average score for an `AlmostReady` verdict.
pub const DEFAULT_ALMOST_READY_THRESHOLD: f64 = 60.0;

/// Default minimum per-skill average for a skill to count as proficient.
///
/// Used by role matching and the strength/gap split.
pub const DEFAULT_PROFICIENCY_THRESHOLD: f64 = 70.0;

/// Score thresholds driving every verdict in the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Overall average at or above this is `Ready`.
    pub ready: f64,
    /// Overall average at or above this (but below `ready`) is `AlmostReady`.
    pub almost_ready: f64,
    /// Per-skill average at or above this counts as proficient.
    pub proficiency: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ready: DEFAULT_READY_THRESHOLD,
            almost_ready: DEFAULT_ALMOST_READY_THRESHOLD,
            proficiency: DEFAULT_PROFICIENCY_THRESHOLD,
        }
    }
}

/// A role and the skill columns it requires.
///
/// Skill names are matched case-sensitively against dataset column names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRequirement {
    pub role: String,
    pub skills: Vec<String>,
}

impl RoleRequirement {
    pub fn new(role: impl Into<String>, skills: &[&str]) -> Self {
        Self {
            role: role.into(),
            skills: skills.iter().map(|skill| (*skill).to_string()).collect(),
        }
    }
}

/// Immutable ordered role→required-skills table.
///
/// Declaration order is preserved in recommendation output. The table is
/// passed to the role mapper at construction so tests can substitute
/// alternate tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleTable {
    roles: Vec<RoleRequirement>,
}

impl RoleTable {
    pub fn new(roles: Vec<RoleRequirement>) -> Self {
        Self { roles }
    }

    /// The built-in placement role table.
    pub fn builtin() -> Self {
        Self::new(vec![
            RoleRequirement::new("Junior Data Analyst", &["sql"]),
            RoleRequirement::new("Backend Developer", &["sql", "python", "dsa"]),
            RoleRequirement::new("Data Engineer", &["sql", "python", "etl"]),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoleRequirement> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl Default for RoleTable {
    fn default() -> Self {
        Self::builtin()
    }
}
