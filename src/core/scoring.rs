use crate::core::level::MAX_ORDINAL;
use crate::models::{Candidate, Level, RequirementSet, Skill};
use std::collections::HashMap;

/// Score one candidate skill against one required skill of the same name
///
/// score = 3 - |ordinal(candidate) - ordinal(required)|
///
/// Exact level = 3, one level apart = 2, Beginner vs Expert = 1. The caller
/// is responsible for pairing skills by name.
#[inline]
pub fn score_skill_pair(candidate_skill: &Skill, required_skill: &Skill) -> u32 {
    level_points(candidate_skill.level, required_skill.level)
}

#[inline]
fn level_points(held: Level, required: Level) -> u32 {
    MAX_ORDINAL - held.ordinal().abs_diff(required.ordinal())
}

/// Total score (0..=3 * |required|) of a candidate against a requirement set
///
/// For each required skill the first candidate skill with the same name is
/// used; missing skills contribute nothing.
pub fn score_candidate(candidate: &Candidate, requirements: &RequirementSet) -> u32 {
    requirements
        .required_skills
        .iter()
        .filter_map(|required| {
            candidate
                .skills
                .iter()
                .find(|skill| skill.name == required.name)
                .map(|held| score_skill_pair(held, required))
        })
        .sum()
}

/// Name -> level lookup for one candidate's skills
///
/// Only the first occurrence of a name is kept, so scoring through the index
/// gives the same result as [`score_candidate`].
#[derive(Debug, Default)]
pub struct SkillIndex<'a> {
    levels: HashMap<&'a str, Level>,
}

impl<'a> SkillIndex<'a> {
    pub fn new(skills: &'a [Skill]) -> Self {
        let mut levels = HashMap::with_capacity(skills.len());
        for skill in skills {
            levels.entry(skill.name.as_str()).or_insert(skill.level);
        }
        Self { levels }
    }

    pub fn level_of(&self, name: &str) -> Option<Level> {
        self.levels.get(name).copied()
    }

    pub fn score(&self, requirements: &RequirementSet) -> u32 {
        requirements
            .required_skills
            .iter()
            .filter_map(|required| {
                self.level_of(&required.name)
                    .map(|held| level_points(held, required.level))
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn candidate(skills: Vec<Skill>) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: "Test Employee".to_string(),
            skills,
        }
    }

    fn requirements(skills: Vec<Skill>) -> RequirementSet {
        RequirementSet {
            project_id: Uuid::new_v4(),
            required_skills: skills,
        }
    }

    #[test]
    fn test_pair_exact_level() {
        for level in Level::ALL {
            let skill = Skill::new("SQL", level);
            assert_eq!(score_skill_pair(&skill, &skill), 3);
        }
    }

    #[test]
    fn test_pair_one_level_apart() {
        let beginner = Skill::new("SQL", Level::Beginner);
        let intermediate = Skill::new("SQL", Level::Intermediate);
        let expert = Skill::new("SQL", Level::Expert);

        assert_eq!(score_skill_pair(&beginner, &intermediate), 2);
        assert_eq!(score_skill_pair(&expert, &intermediate), 2);
        assert_eq!(score_skill_pair(&intermediate, &beginner), 2);
    }

    #[test]
    fn test_pair_two_levels_apart() {
        let beginner = Skill::new("SQL", Level::Beginner);
        let expert = Skill::new("SQL", Level::Expert);

        assert_eq!(score_skill_pair(&beginner, &expert), 1);
        assert_eq!(score_skill_pair(&expert, &beginner), 1);
    }

    #[test]
    fn test_candidate_missing_skill_contributes_zero() {
        let c = candidate(vec![Skill::new("Go", Level::Intermediate)]);
        let r = requirements(vec![
            Skill::new("Go", Level::Intermediate),
            Skill::new("Rust", Level::Expert),
        ]);

        assert_eq!(score_candidate(&c, &r), 3);
    }

    #[test]
    fn test_candidate_name_match_is_case_sensitive() {
        let c = candidate(vec![Skill::new("sql", Level::Expert)]);
        let r = requirements(vec![Skill::new("SQL", Level::Expert)]);

        assert_eq!(score_candidate(&c, &r), 0);
    }

    #[test]
    fn test_candidate_first_duplicate_wins() {
        let c = candidate(vec![
            Skill::new("SQL", Level::Beginner),
            Skill::new("SQL", Level::Expert),
        ]);
        let r = requirements(vec![Skill::new("SQL", Level::Expert)]);

        assert_eq!(score_candidate(&c, &r), 1);
        assert_eq!(SkillIndex::new(&c.skills).score(&r), 1);
    }

    #[test]
    fn test_candidate_empty_requirements() {
        let c = candidate(vec![Skill::new("SQL", Level::Expert)]);
        let r = requirements(vec![]);

        assert_eq!(score_candidate(&c, &r), 0);
    }

    #[test]
    fn test_candidate_score_bounded() {
        let c = candidate(vec![
            Skill::new("SQL", Level::Expert),
            Skill::new("Go", Level::Beginner),
            Skill::new("Rust", Level::Intermediate),
        ]);

        for a in Level::ALL {
            for b in Level::ALL {
                let r = requirements(vec![
                    Skill::new("SQL", a),
                    Skill::new("Go", b),
                    Skill::new("Kotlin", a),
                ]);
                let score = score_candidate(&c, &r);
                assert!(score <= 3 * r.required_skills.len() as u32);
                assert_eq!(score, SkillIndex::new(&c.skills).score(&r));
            }
        }
    }

    #[test]
    fn test_index_lookup() {
        let skills = vec![Skill::new("Go", Level::Expert)];
        let index = SkillIndex::new(&skills);

        assert_eq!(index.level_of("Go"), Some(Level::Expert));
        assert_eq!(index.level_of("Rust"), None);
    }
}
