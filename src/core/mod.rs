// Core algorithm exports
pub mod level;
pub mod matcher;
pub mod scoring;

pub use level::{ordinal, UnknownLevel};
pub use matcher::{Matcher, MatchResult, DEFAULT_SHORTLIST_LIMIT};
pub use scoring::{score_candidate, score_skill_pair, SkillIndex};
