//! Role-fit mapping against a fixed role table.

use placement_model::{
    RejectedRole, RoleRecommendation, RoleTable, SkillAverages, Thresholds,
};

/// Maps per-skill averages onto a role table.
///
/// The table is supplied at construction so alternate tables can be used in
/// tests; [`RoleMapper::builtin`] wires in the standard placement roles.
#[derive(Debug, Clone)]
pub struct RoleMapper {
    table: RoleTable,
}

impl RoleMapper {
    pub fn new(table: RoleTable) -> Self {
        Self { table }
    }

    pub fn builtin() -> Self {
        Self::new(RoleTable::builtin())
    }

    pub fn table(&self) -> &RoleTable {
        &self.table
    }

    /// Partition the role table into recommended and rejected roles.
    ///
    /// A required skill is missing when it is absent from the averages or its
    /// average is below the proficiency threshold; an average exactly at the
    /// threshold satisfies the requirement. Skills not present in the skill
    /// set always count as missing. Declaration order is preserved.
    pub fn map(&self, averages: &SkillAverages, thresholds: &Thresholds) -> RoleRecommendation {
        let mut recommended = Vec::new();
        let mut rejected = Vec::new();

        for requirement in self.table.iter() {
            let missing: Vec<String> = requirement
                .skills
                .iter()
                .filter(|skill| {
                    averages
                        .get(skill)
                        .is_none_or(|average| average < thresholds.proficiency)
                })
                .cloned()
                .collect();

            if missing.is_empty() {
                recommended.push(requirement.role.clone());
            } else {
                rejected.push(RejectedRole {
                    role: requirement.role.clone(),
                    missing,
                });
            }
        }

        RoleRecommendation {
            recommended,
            rejected,
        }
    }
}
