use crate::core::{Direction, Result, RotationCommand};
use crate::utils::error::DialError;
use regex::Regex;
use std::sync::OnceLock;

static COMMAND_PATTERN: OnceLock<Regex> = OnceLock::new();

fn command_pattern() -> &'static Regex {
    COMMAND_PATTERN.get_or_init(|| {
        Regex::new(r"^([LR])([0-9]+)$").expect("rotation token pattern is a valid regex")
    })
}

/// Parses one raw token into a rotation command.
///
/// Tokens must match `^([LR])([0-9]+)$` exactly; anything else (wrong
/// letter, missing digits, stray whitespace, empty line) comes back as
/// `RotationCommand::Invalid` and is skipped by the dial. The one hard
/// failure is a magnitude too large for u64, which is reported instead of
/// wrapped.
pub fn parse_token(token: &str) -> Result<RotationCommand> {
    let Some(captures) = command_pattern().captures(token) else {
        return Ok(RotationCommand::Invalid);
    };

    let direction = match &captures[1] {
        "R" => Direction::Increase,
        _ => Direction::Decrease,
    };

    let magnitude: u64 = captures[2]
        .parse()
        .map_err(|_| DialError::MagnitudeOverflow {
            token: token.to_string(),
        })?;

    Ok(RotationCommand::Valid {
        direction,
        magnitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tokens() {
        assert_eq!(
            parse_token("R8").unwrap(),
            RotationCommand::Valid {
                direction: Direction::Increase,
                magnitude: 8
            }
        );
        assert_eq!(
            parse_token("L19").unwrap(),
            RotationCommand::Valid {
                direction: Direction::Decrease,
                magnitude: 19
            }
        );
        assert_eq!(
            parse_token("R899").unwrap(),
            RotationCommand::Valid {
                direction: Direction::Increase,
                magnitude: 899
            }
        );
    }

    #[test]
    fn test_parse_zero_magnitude() {
        assert_eq!(
            parse_token("L0").unwrap(),
            RotationCommand::Valid {
                direction: Direction::Decrease,
                magnitude: 0
            }
        );
    }

    #[test]
    fn test_parse_malformed_tokens() {
        assert!(!parse_token("").unwrap().is_valid());
        assert_eq!(parse_token("").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token("X5").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token("L").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token("42").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token("L5x").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token(" R5").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token("r5").unwrap(), RotationCommand::Invalid);
        assert_eq!(parse_token("L-5").unwrap(), RotationCommand::Invalid);
    }

    #[test]
    fn test_parse_magnitude_overflow() {
        // One digit past u64::MAX.
        let token = format!("R{}0", u64::MAX);
        assert!(matches!(
            parse_token(&token),
            Err(DialError::MagnitudeOverflow { .. })
        ));
    }

    #[test]
    fn test_parse_magnitude_at_u64_max() {
        let token = format!("R{}", u64::MAX);
        assert_eq!(
            parse_token(&token).unwrap(),
            RotationCommand::Valid {
                direction: Direction::Increase,
                magnitude: u64::MAX
            }
        );
    }
}
