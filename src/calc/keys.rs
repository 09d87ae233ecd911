use crate::calc::state::{CalculatorState, Operator};
use std::fmt;

/// A single calculator button or keyboard key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit `0`-`9` or the decimal point
    Digit(char),
    Operator(Operator),
    Equals,
    Clear,
    Delete,
}

#[derive(Debug, Clone, PartialEq)]
pub enum KeyError {
    UnknownKey(String),
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::UnknownKey(key) => write!(f, "Unknown calculator key: {:?}", key),
        }
    }
}

impl std::error::Error for KeyError {}

impl Key {
    /// Map a typed character to a key
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Key::Digit(c)),
            '=' | '\n' | '\r' => Some(Key::Equals),
            'c' | 'C' | '\u{1b}' => Some(Key::Clear),
            '\u{8}' | '\u{7f}' | '<' => Some(Key::Delete),
            _ => Operator::from_char(c).map(Key::Operator),
        }
    }

    /// Map a browser `KeyboardEvent.key` value (or a single character) to a key
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        match name {
            "Enter" => Ok(Key::Equals),
            "Escape" | "Clear" => Ok(Key::Clear),
            "Backspace" | "Delete" => Ok(Key::Delete),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => {
                        Key::from_char(c).ok_or_else(|| KeyError::UnknownKey(name.to_string()))
                    }
                    _ => Err(KeyError::UnknownKey(name.to_string())),
                }
            }
        }
    }
}

impl CalculatorState {
    /// Dispatch one key to the matching transition
    pub fn apply(self, key: Key) -> Self {
        match key {
            Key::Digit(d) => self.append_digit(d),
            Key::Operator(op) => self.append_operator(op),
            Key::Equals => self.evaluate(),
            Key::Clear => self.clear(),
            Key::Delete => self.delete_last(),
        }
    }
}

/// Replay a key sequence such as `"2+3+4="` from a fresh state
///
/// Spaces are ignored. The whole sequence is rejected if any character is not
/// a calculator key.
pub fn run_keys(input: &str) -> Result<CalculatorState, KeyError> {
    let keys = input
        .chars()
        .filter(|c| *c != ' ' && *c != '\t')
        .map(|c| Key::from_char(c).ok_or_else(|| KeyError::UnknownKey(c.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(keys
        .into_iter()
        .fold(CalculatorState::new(), |state, key| state.apply(key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit('7')));
        assert_eq!(Key::from_char('.'), Some(Key::Digit('.')));
        assert_eq!(Key::from_char('x'), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('<'), Some(Key::Delete));
        assert_eq!(Key::from_char('%'), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Key::from_name("Enter"), Ok(Key::Equals));
        assert_eq!(Key::from_name("Backspace"), Ok(Key::Delete));
        assert_eq!(Key::from_name("Escape"), Ok(Key::Clear));
        assert_eq!(Key::from_name("÷"), Ok(Key::Operator(Operator::Divide)));
        assert_eq!(
            Key::from_name("Shift"),
            Err(KeyError::UnknownKey("Shift".to_string()))
        );
    }

    #[test]
    fn test_run_keys_rejects_unknown() {
        assert_eq!(
            run_keys("2 % 3"),
            Err(KeyError::UnknownKey("%".to_string()))
        );
    }
}
