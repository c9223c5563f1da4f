use crate::models::{Candidate, RequirementSet, ScoredCandidate};
use crate::core::scoring::SkillIndex;

/// Default shortlist size
pub const DEFAULT_SHORTLIST_LIMIT: usize = 5;

/// Result of the ranking process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredCandidate>,
    pub total_candidates: usize,
}

/// Ranking engine - scores a candidate pool against one requirement set
///
/// # Pipeline Stages
/// 1. Score every candidate
/// 2. Drop candidates that scored zero
/// 3. Stable sort by score, descending (pool order breaks ties)
/// 4. Truncate to the shortlist limit
#[derive(Debug, Clone)]
pub struct Matcher {
    limit: usize,
}

impl Matcher {
    /// A limit of zero is raised to one; an always-empty shortlist is never useful
    pub fn new(limit: usize) -> Self {
        Self { limit: limit.max(1) }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank candidates for a project
    ///
    /// # Arguments
    /// * `requirements` - The project's resolved requirement set
    /// * `candidates` - Snapshot of the candidate pool
    ///
    /// # Returns
    /// MatchResult holding at most `limit` entries, none with a zero score
    pub fn rank(&self, requirements: &RequirementSet, candidates: Vec<Candidate>) -> MatchResult {
        let total_candidates = candidates.len();

        let mut scored: Vec<ScoredCandidate> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let score = SkillIndex::new(&candidate.skills).score(requirements);
                (score > 0).then_some(ScoredCandidate { candidate, score })
            })
            .collect();

        // sort_by is stable
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored.truncate(self.limit);

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_SHORTLIST_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Skill};
    use uuid::Uuid;

    fn create_candidate(name: &str, skills: &[(&str, Level)]) -> Candidate {
        Candidate {
            id: Uuid::new_v4(),
            name: name.to_string(),
            skills: skills
                .iter()
                .map(|(skill, level)| Skill::new(*skill, *level))
                .collect(),
        }
    }

    fn create_requirements(skills: &[(&str, Level)]) -> RequirementSet {
        RequirementSet {
            project_id: Uuid::new_v4(),
            required_skills: skills
                .iter()
                .map(|(skill, level)| Skill::new(*skill, *level))
                .collect(),
        }
    }

    fn names(result: &MatchResult) -> Vec<&str> {
        result.matches.iter().map(|m| m.candidate.name.as_str()).collect()
    }

    #[test]
    fn test_rank_orders_by_score() {
        let matcher = Matcher::default();
        let requirements = create_requirements(&[("SQL", Level::Expert)]);

        let candidates = vec![
            create_candidate("X", &[("SQL", Level::Beginner)]),
            create_candidate("Y", &[("SQL", Level::Expert)]),
        ];

        let result = matcher.rank(&requirements, candidates);

        assert_eq!(names(&result), vec!["Y", "X"]);
        assert_eq!(result.matches[0].score, 3);
        assert_eq!(result.matches[1].score, 1);
    }

    #[test]
    fn test_zero_scores_excluded() {
        let matcher = Matcher::default();
        let requirements = create_requirements(&[("Go", Level::Intermediate), ("Rust", Level::Expert)]);

        let candidates = vec![
            create_candidate("Gopher", &[("Go", Level::Intermediate)]),
            create_candidate("Designer", &[("Figma", Level::Expert)]),
        ];

        let result = matcher.rank(&requirements, candidates);

        assert_eq!(names(&result), vec!["Gopher"]);
        assert_eq!(result.matches[0].score, 3);
        assert_eq!(result.total_candidates, 2);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let matcher = Matcher::default();
        let requirements = create_requirements(&[("SQL", Level::Intermediate)]);

        let candidates = vec![
            create_candidate("A", &[("SQL", Level::Beginner)]),
            create_candidate("B", &[("SQL", Level::Intermediate)]),
            create_candidate("C", &[("SQL", Level::Expert)]),
            create_candidate("D", &[("SQL", Level::Beginner)]),
        ];

        let result = matcher.rank(&requirements, candidates);

        assert_eq!(names(&result), vec!["B", "A", "C", "D"]);
    }

    #[test]
    fn test_respects_limit() {
        let matcher = Matcher::new(2);
        let requirements = create_requirements(&[("SQL", Level::Expert)]);

        let candidates: Vec<Candidate> = (0..6)
            .map(|i| create_candidate(&i.to_string(), &[("SQL", Level::Expert)]))
            .collect();

        let result = matcher.rank(&requirements, candidates);

        assert_eq!(names(&result), vec!["0", "1"]);
    }

    #[test]
    fn test_zero_limit_clamped_to_one() {
        let matcher = Matcher::new(0);
        let requirements = create_requirements(&[("SQL", Level::Expert)]);
        let candidates = vec![
            create_candidate("A", &[("SQL", Level::Intermediate)]),
            create_candidate("B", &[("SQL", Level::Expert)]),
        ];

        let result = matcher.rank(&requirements, candidates);

        assert_eq!(matcher.limit(), 1);
        assert_eq!(names(&result), vec!["B"]);
    }

    #[test]
    fn test_empty_pool() {
        let matcher = Matcher::default();
        let requirements = create_requirements(&[("SQL", Level::Expert)]);

        let result = matcher.rank(&requirements, vec![]);

        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }

    #[test]
    fn test_empty_requirements_match_nobody() {
        let matcher = Matcher::default();
        let requirements = create_requirements(&[]);

        let candidates = vec![create_candidate("A", &[("SQL", Level::Expert)])];

        assert!(matcher.rank(&requirements, candidates).matches.is_empty());
    }
}
