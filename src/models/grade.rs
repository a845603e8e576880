//! Grade scale
//!
//! A fixed ten-point scale. Every grade except F counts as passing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade with its point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
    D,
    E,
    F,
}

impl Grade {
    /// All grades from best to worst
    pub const ALL: [Grade; 7] = [
        Grade::S,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
    ];

    /// Grade points used for GPA weighting
    pub fn points(&self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::E => 5.0,
            Self::F => 0.0,
        }
    }

    /// Single-letter form
    pub fn letter(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }

    /// Map a numeric score onto the scale
    pub fn from_points(points: f64) -> Self {
        if points >= 9.5 {
            Self::S
        } else if points >= 8.5 {
            Self::A
        } else if points >= 7.5 {
            Self::B
        } else if points >= 6.5 {
            Self::C
        } else if points >= 5.5 {
            Self::D
        } else if points >= 4.5 {
            Self::E
        } else {
            Self::F
        }
    }

    pub fn is_passing(&self) -> bool {
        !matches!(self, Self::F)
    }

    /// Parse a letter grade (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.letter().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points() {
        assert_eq!(Grade::S.points(), 10.0);
        assert_eq!(Grade::A.points(), 9.0);
        assert_eq!(Grade::E.points(), 5.0);
        assert_eq!(Grade::F.points(), 0.0);
    }

    #[test]
    fn test_from_points_thresholds() {
        assert_eq!(Grade::from_points(10.0), Grade::S);
        assert_eq!(Grade::from_points(9.5), Grade::S);
        assert_eq!(Grade::from_points(9.49), Grade::A);
        assert_eq!(Grade::from_points(8.5), Grade::A);
        assert_eq!(Grade::from_points(7.5), Grade::B);
        assert_eq!(Grade::from_points(6.5), Grade::C);
        assert_eq!(Grade::from_points(5.5), Grade::D);
        assert_eq!(Grade::from_points(4.5), Grade::E);
        assert_eq!(Grade::from_points(4.49), Grade::F);
        assert_eq!(Grade::from_points(-1.0), Grade::F);
    }

    #[test]
    fn test_passing() {
        assert!(Grade::E.is_passing());
        assert!(!Grade::F.is_passing());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Grade::parse("a"), Some(Grade::A));
        assert_eq!(Grade::parse("S"), Some(Grade::S));
        assert_eq!(Grade::parse("Z"), None);
        assert_eq!(Grade::parse(""), None);
    }
}
