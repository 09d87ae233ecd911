use crate::convert::error::ConvertError;
use crate::convert::types::Unit;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex pattern for a quantity with a unit name
    /// Matches: number (optional decimal, optional scientific notation) + optional whitespace + unit name
    /// Examples: "12 yard", "2.5 acres", "1e3 sq ft", "-4ft"
    static ref QUANTITY_PATTERN: Regex = Regex::new(
        r"^(?P<value>[-+]?(\d+(\.\d*)?|\.\d+)([eE][-+]?\d+)?)\s*(?P<unit>[a-zA-Z][a-zA-Z ]*)$"
    ).unwrap();
}

/// Check if a string looks like a number followed by a unit name
pub fn looks_like_quantity(s: &str) -> bool {
    QUANTITY_PATTERN.is_match(s.trim())
}

/// Split a quantity such as "12.5 yard" into its value and unit
pub fn parse_quantity(s: &str) -> Result<(f64, Unit), ConvertError> {
    let trimmed = s.trim();
    let caps = QUANTITY_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ConvertError::ParseError(format!("'{}' is not a quantity", trimmed)))?;

    let value = caps["value"]
        .parse::<f64>()
        .map_err(|e| ConvertError::ParseError(format!("{}: {}", &caps["value"], e)))?;
    let unit = caps["unit"].parse::<Unit>()?;

    Ok((value, unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_detection() {
        assert!(looks_like_quantity("12 yard"));
        assert!(looks_like_quantity("2.5 acres"));
        assert!(looks_like_quantity("1e3 sq ft"));
        assert!(looks_like_quantity("-4ft"));
        assert!(looks_like_quantity(".5 ha"));

        assert!(!looks_like_quantity("12"));
        assert!(!looks_like_quantity("yard"));
        assert!(!looks_like_quantity("twelve yards"));
        assert!(!looks_like_quantity(""));
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12 yard"), Ok((12.0, Unit::Yard)));
        assert_eq!(parse_quantity(" 1e3 sq ft "), Ok((1000.0, Unit::SqFeet)));
        assert_eq!(parse_quantity("0.25ac"), Ok((0.25, Unit::Acre)));
    }

    #[test]
    fn test_parse_quantity_errors() {
        assert!(matches!(
            parse_quantity("12"),
            Err(ConvertError::ParseError(_))
        ));
        assert!(matches!(
            parse_quantity("12 furlongs"),
            Err(ConvertError::InvalidUnit(u)) if u == "furlongs"
        ));
    }
}
