use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    ParseError(String),
    InvalidUnit(String),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConvertError::InvalidUnit(msg) => write!(f, "Invalid unit: {}", msg),
        }
    }
}

impl std::error::Error for ConvertError {}
