//! OutcomeType enum - how a decision turned out in hindsight.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Classification recorded at retrospective time.
///
/// Records that have not been retrospected still carry a stored value
/// (`Unclear` by default); use [`super::Decision::settled_outcome`] when
/// only hindsight-confirmed outcomes should count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeType {
    RightCall,
    WrongCall,
    #[default]
    Unclear,
}

impl OutcomeType {
    /// All outcomes in display order.
    pub const ALL: [OutcomeType; 3] = [
        OutcomeType::RightCall,
        OutcomeType::WrongCall,
        OutcomeType::Unclear,
    ];

    /// Wire name, e.g. `right_call`.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeType::RightCall => "right_call",
            OutcomeType::WrongCall => "wrong_call",
            OutcomeType::Unclear => "unclear",
        }
    }
}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutcomeType::RightCall => "Right Call",
            OutcomeType::WrongCall => "Wrong Call",
            OutcomeType::Unclear => "Unclear",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for OutcomeType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutcomeType::ALL
            .into_iter()
            .find(|outcome| outcome.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "outcome",
                    format!("'{}' is not one of right_call, wrong_call, unclear", s),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unclear() {
        assert_eq!(OutcomeType::default(), OutcomeType::Unclear);
    }

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&OutcomeType::RightCall).unwrap(),
            "\"right_call\""
        );
        let parsed: OutcomeType = serde_json::from_str("\"wrong_call\"").unwrap();
        assert_eq!(parsed, OutcomeType::WrongCall);
    }

    #[test]
    fn from_str_matches_wire_names() {
        for outcome in OutcomeType::ALL {
            assert_eq!(outcome.as_str().parse::<OutcomeType>().unwrap(), outcome);
        }
        assert!("maybe".parse::<OutcomeType>().is_err());
    }

    #[test]
    fn displays_human_label() {
        assert_eq!(OutcomeType::RightCall.to_string(), "Right Call");
    }
}
