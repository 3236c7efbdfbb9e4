//! Input Mode Value Object
//!
//! Decides what happens when console input cannot be read as the value a
//! prompt asked for.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How malformed or missing console input is handled
///
/// - `Strict`: the read fails with an error and the run aborts (default)
/// - `Lenient`: the reader enters a failed state and every read from then on
///   yields the type's default value, the way a failed input stream does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Strict,
    Lenient,
}

impl FromStr for InputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(InputMode::Strict),
            "lenient" => Ok(InputMode::Lenient),
            other => Err(format!("unknown input mode '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert_eq!(InputMode::default(), InputMode::Strict);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("LENIENT".parse::<InputMode>(), Ok(InputMode::Lenient));
        assert_eq!(" strict ".parse::<InputMode>(), Ok(InputMode::Strict));
        assert!("loose".parse::<InputMode>().is_err());
    }

    #[test]
    fn serde_lowercase() {
        let mode: InputMode = serde_json::from_str(r#""lenient""#).unwrap();
        assert_eq!(mode, InputMode::Lenient);
    }
}
