use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RibbonError};

/// What to do when a junction between two sections leaves lone atoms
/// (atoms with fewer than two neighbours).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoneAtomPolicy {
    /// Keep going silently with the requested value
    #[default]
    Ignore,
    /// Log a warning and keep going with the requested value
    Warn,
    /// Abort the build
    Raise,
}

impl LoneAtomPolicy {
    /// Route a junction error according to the policy.
    ///
    /// Returns `Ok(())` when the build may continue with the offending value.
    pub fn dispatch(self, error: RibbonError) -> Result<()> {
        match self {
            LoneAtomPolicy::Ignore => Ok(()),
            LoneAtomPolicy::Warn => {
                warn!("{error}");
                Ok(())
            }
            LoneAtomPolicy::Raise => Err(error),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LoneAtomPolicy::Ignore => "ignore",
            LoneAtomPolicy::Warn => "warn",
            LoneAtomPolicy::Raise => "raise",
        }
    }
}

impl fmt::Display for LoneAtomPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoneAtomPolicy {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(LoneAtomPolicy::Ignore),
            "warn" => Ok(LoneAtomPolicy::Warn),
            "raise" => Ok(LoneAtomPolicy::Raise),
            _ => Err(RibbonError::invalid_input(format!(
                "invalid value for 'on_lone_atom': {s}. Must be one of {{'ignore', 'warn', 'raise'}}"
            ))),
        }
    }
}

/// Build a junction error naming both sections
pub fn junction_error(
    previous: impl fmt::Display,
    current: impl fmt::Display,
    message: impl Into<String>,
) -> RibbonError {
    RibbonError::Junction {
        previous: previous.to_string(),
        current: current.to_string(),
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RibbonError {
        junction_error("A", "B", "LONE ATOMS: boom")
    }

    #[test]
    fn test_dispatch() {
        assert!(LoneAtomPolicy::Ignore.dispatch(sample()).is_ok());
        assert!(LoneAtomPolicy::Warn.dispatch(sample()).is_ok());
        let err = LoneAtomPolicy::Raise.dispatch(sample()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "error at junction between sections A and B. LONE ATOMS: boom"
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("WARN".parse::<LoneAtomPolicy>().unwrap(), LoneAtomPolicy::Warn);
        assert!("panic".parse::<LoneAtomPolicy>().is_err());
        assert_eq!(LoneAtomPolicy::default(), LoneAtomPolicy::Ignore);
    }
}
