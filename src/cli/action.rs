//! Mapping of the command token to an action.

use crate::delegate::DelegateKind;

/// What one invocation does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Validate,
    State,
    Analyze,
    Test,
    Status,
    Help,
    /// Any other token, kept verbatim for the error message.
    Unknown(String),
}

impl Action {
    /// Classify a command token. No token means help.
    ///
    /// Matching is exact and case-sensitive.
    pub fn parse(token: Option<&str>) -> Self {
        match token {
            None => Self::Help,
            Some("validate") => Self::Validate,
            Some("state") => Self::State,
            Some("analyze") => Self::Analyze,
            Some("test") => Self::Test,
            Some("status") => Self::Status,
            Some("help" | "--help" | "-h") => Self::Help,
            Some(other) => Self::Unknown(other.to_string()),
        }
    }

    /// The delegate a single-delegate action runs.
    pub fn delegate(&self) -> Option<DelegateKind> {
        match self {
            Self::Validate => Some(DelegateKind::Validate),
            Self::State => Some(DelegateKind::State),
            Self::Analyze => Some(DelegateKind::Analyze),
            Self::Test => Some(DelegateKind::Test),
            _ => None,
        }
    }

    /// Whether this action runs any delegate at all.
    pub fn uses_delegates(&self) -> bool {
        self.delegate().is_some() || matches!(self, Self::Status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tokens() {
        assert_eq!(Action::parse(Some("validate")), Action::Validate);
        assert_eq!(Action::parse(Some("state")), Action::State);
        assert_eq!(Action::parse(Some("analyze")), Action::Analyze);
        assert_eq!(Action::parse(Some("test")), Action::Test);
        assert_eq!(Action::parse(Some("status")), Action::Status);
    }

    #[test]
    fn help_aliases() {
        for token in [None, Some("help"), Some("--help"), Some("-h")] {
            assert_eq!(Action::parse(token), Action::Help);
        }
    }

    #[test]
    fn unknown_is_case_sensitive() {
        assert_eq!(
            Action::parse(Some("Validate")),
            Action::Unknown("Validate".to_string())
        );
        assert_eq!(Action::parse(Some("")), Action::Unknown(String::new()));
    }

    #[test]
    fn delegate_kinds() {
        assert_eq!(Action::Test.delegate(), Some(DelegateKind::Test));
        assert_eq!(Action::Status.delegate(), None);
        assert!(Action::Status.uses_delegates());
        assert!(!Action::Help.uses_delegates());
        assert!(!Action::Unknown("x".into()).uses_delegates());
    }
}
