use crate::models::Level;
use std::str::FromStr;
use thiserror::Error;

/// Highest ordinal on the scale; also the best pairwise score
pub const MAX_ORDINAL: u32 = 3;

/// A level name outside the closed scale
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown skill level: {0}")]
pub struct UnknownLevel(pub String);

/// Ordinal position of a level on the scale (Beginner=1 .. Expert=3)
#[inline]
pub const fn ordinal(level: Level) -> u32 {
    match level {
        Level::Beginner => 1,
        Level::Intermediate => 2,
        Level::Expert => MAX_ORDINAL,
    }
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Expert];

    #[inline]
    pub const fn ordinal(self) -> u32 {
        ordinal(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Expert => "expert",
        }
    }

    /// Parse a level name, accepting the legacy `easy`/`moderate`/`advanced` names.
    ///
    /// Unknown names are rejected rather than defaulted.
    pub fn parse(s: &str) -> Result<Self, UnknownLevel> {
        match s {
            "beginner" | "easy" => Ok(Level::Beginner),
            "intermediate" | "moderate" => Ok(Level::Intermediate),
            "expert" | "advanced" => Ok(Level::Expert),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

impl FromStr for Level {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Level {
    type Error = UnknownLevel;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
