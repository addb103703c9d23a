//! Ordering strategies for prioritized task lists.

use serde::{Deserialize, Serialize};

/// Named ordering policy applied to a scored task list.
///
/// Parsing is lossy on purpose: any string that is not one of the four
/// known literals selects [`Strategy::Smart`], so an unrecognized strategy
/// in a request degrades to the default ordering instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Ascending estimated effort: quick tasks first
    Fastest,
    /// Descending importance
    Impact,
    /// Ascending due date: nearest deadline first
    Deadline,
    /// Descending score
    #[default]
    #[serde(other)]
    Smart,
}

impl Strategy {
    /// Map a raw strategy string to a variant. The match is exact and
    /// case-sensitive; anything else is `Smart`.
    pub fn parse(input: &str) -> Self {
        match input {
            "fastest" => Self::Fastest,
            "impact" => Self::Impact,
            "deadline" => Self::Deadline,
            _ => Self::Smart,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Impact => "impact",
            Self::Deadline => "deadline",
            Self::Smart => "smart",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_literals() {
        assert_eq!(Strategy::parse("fastest"), Strategy::Fastest);
        assert_eq!(Strategy::parse("impact"), Strategy::Impact);
        assert_eq!(Strategy::parse("deadline"), Strategy::Deadline);
        assert_eq!(Strategy::parse("smart"), Strategy::Smart);
    }

    #[test]
    fn test_parse_unknown_falls_back_to_smart() {
        assert_eq!(Strategy::parse(""), Strategy::Smart);
        assert_eq!(Strategy::parse("urgent"), Strategy::Smart);
        // The match is case-sensitive.
        assert_eq!(Strategy::parse("Impact"), Strategy::Smart);
        assert_eq!(Strategy::parse("FASTEST"), Strategy::Smart);
    }

    #[test]
    fn test_default_is_smart() {
        assert_eq!(Strategy::default(), Strategy::Smart);
    }

    #[test]
    fn test_serde_round_trip() {
        for strategy in [
            Strategy::Fastest,
            Strategy::Impact,
            Strategy::Deadline,
            Strategy::Smart,
        ] {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.as_str()));
            let back: Strategy = serde_json::from_str(&json).unwrap();
            assert_eq!(back, strategy);
        }
    }

    #[test]
    fn test_serde_unknown_deserializes_to_smart() {
        let strategy: Strategy = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(strategy, Strategy::Smart);
    }
}
