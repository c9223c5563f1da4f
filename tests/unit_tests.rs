// Unit tests for Skill Match scoring

use skill_match::core::{
    level::ordinal,
    scoring::{score_candidate, score_skill_pair, SkillIndex},
};
use skill_match::models::{Candidate, Level, RequirementSet, Skill};
use uuid::Uuid;

fn candidate(skills: &[(&str, Level)]) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        name: "Test".to_string(),
        skills: skills.iter().map(|(n, l)| Skill::new(*n, *l)).collect(),
    }
}

fn requirements(skills: &[(&str, Level)]) -> RequirementSet {
    RequirementSet {
        project_id: Uuid::new_v4(),
        required_skills: skills.iter().map(|(n, l)| Skill::new(*n, *l)).collect(),
    }
}

#[test]
fn test_pair_score_matches_level_distance() {
    for held in Level::ALL {
        for required in Level::ALL {
            let score = score_skill_pair(&Skill::new("SQL", held), &Skill::new("SQL", required));
            let distance = ordinal(held).abs_diff(ordinal(required));

            match distance {
                0 => assert_eq!(score, 3),
                1 => assert_eq!(score, 2),
                _ => assert_eq!(score, 1),
            }
        }
    }
}

#[test]
fn test_pair_score_is_symmetric() {
    for a in Level::ALL {
        for b in Level::ALL {
            let ab = score_skill_pair(&Skill::new("Go", a), &Skill::new("Go", b));
            let ba = score_skill_pair(&Skill::new("Go", b), &Skill::new("Go", a));
            assert_eq!(ab, ba);
        }
    }
}

#[test]
fn test_candidate_score_sums_pairs() {
    let c = candidate(&[
        ("SQL", Level::Expert),
        ("Go", Level::Beginner),
        ("Docker", Level::Intermediate),
    ]);
    let r = requirements(&[
        ("SQL", Level::Expert),        // 3
        ("Go", Level::Expert),         // 1
        ("Docker", Level::Beginner),   // 2
        ("Kubernetes", Level::Expert), // 0
    ]);

    assert_eq!(score_candidate(&c, &r), 6);
}

#[test]
fn test_extra_candidate_skills_are_not_penalized() {
    let focused = candidate(&[("SQL", Level::Expert)]);
    let broad = candidate(&[
        ("SQL", Level::Expert),
        ("Figma", Level::Expert),
        ("Excel", Level::Beginner),
    ]);
    let r = requirements(&[("SQL", Level::Expert)]);

    assert_eq!(score_candidate(&focused, &r), score_candidate(&broad, &r));
}

#[test]
fn test_duplicate_required_skills_each_count() {
    let c = candidate(&[("SQL", Level::Expert)]);
    let r = requirements(&[("SQL", Level::Expert), ("SQL", Level::Beginner)]);

    assert_eq!(score_candidate(&c, &r), 4);
    assert_eq!(SkillIndex::new(&c.skills).score(&r), 4);
}

#[test]
fn test_score_bounds_hold_for_mixed_pools() {
    let r = requirements(&[
        ("SQL", Level::Expert),
        ("Go", Level::Intermediate),
        ("Rust", Level::Beginner),
    ]);
    let max = 3 * r.required_skills.len() as u32;

    for held in Level::ALL {
        let c = candidate(&[("SQL", held), ("Go", held), ("Rust", held), ("SQL", Level::Beginner)]);
        let score = score_candidate(&c, &r);
        assert!(score <= max, "score {} exceeds {}", score, max);
        assert_eq!(score, SkillIndex::new(&c.skills).score(&r));
    }
}
