use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shown in both the display and the expression after a division by zero
pub const ERROR_MARKER: &str = "Error";

/// Results are rounded to this many decimal places
const RESULT_DECIMALS: i32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Apply the operator, returning None on division by zero
    pub fn apply(&self, lhs: f64, rhs: f64) -> Option<f64> {
        match self {
            Operator::Add => Some(lhs + rhs),
            Operator::Subtract => Some(lhs - rhs),
            Operator::Multiply => Some(lhs * rhs),
            Operator::Divide if rhs == 0.0 => None,
            Operator::Divide => Some(lhs / rhs),
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' | '−' => Some(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => {
                Operator::from_char(c).ok_or_else(|| format!("Unknown operator: {}", trimmed))
            }
            _ => Err(format!("Unknown operator: {}", trimmed)),
        }
    }
}

/// Calculator display and pending operation
///
/// Transitions take the state by value and return the next state, so a host
/// keeps exactly one current value and replaces it after every key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed, or the last result
    pub display: String,
    /// Left-hand side of the pending operation
    pub first_operand: Option<f64>,
    pub operator: Option<Operator>,
    /// Set right after an operator; the next digit starts a new operand
    pub awaiting_second: bool,
    /// Running trace such as `2 + 3 + 4 = 9`
    pub expression: String,
    /// Whether `display` holds an operand the user is typing (and that the
    /// expression already ends with)
    entering: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            first_operand: None,
            operator: None,
            awaiting_second: false,
            expression: String::new(),
            entering: false,
        }
    }

    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// Whether the expression ends in a computed result
    pub fn has_result(&self) -> bool {
        self.expression.contains('=')
    }

    /// Numeric value of the display
    pub fn value(&self) -> f64 {
        self.display.parse::<f64>().unwrap_or(0.0)
    }

    /// Append a digit or decimal point to the current operand
    pub fn append_digit(mut self, digit: char) -> Self {
        if !(digit.is_ascii_digit() || digit == '.') {
            log::warn!("ignoring non-digit input {:?}", digit);
            return self;
        }
        if self.is_error() {
            return self;
        }
        if self.has_result() {
            self = Self::new();
        }

        if !self.entering {
            self.display = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.expression.push_str(&self.display);
            self.entering = true;
            self.awaiting_second = false;
            return self;
        }

        if digit == '.' && self.display.contains('.') {
            return self;
        }

        if self.display == "0" && digit != '.' {
            // Replace a lone leading zero
            self.display.clear();
            self.expression.pop();
        }

        self.display.push(digit);
        self.expression.push(digit);
        self
    }

    /// Store an operator, evaluating any pending operation first
    pub fn append_operator(mut self, op: Operator) -> Self {
        if self.is_error() {
            return self;
        }

        if self.has_result() {
            // Continue from the last result
            self.expression = self.display.clone();
            self.first_operand = Some(self.value());
            return self.push_operator(op);
        }

        if self.awaiting_second {
            if let Some(pending) = self.operator {
                let suffix = format!(" {} ", pending.symbol());
                if self.expression.ends_with(&suffix) {
                    self.expression.truncate(self.expression.len() - suffix.len());
                }
                log::debug!("replacing pending operator {} with {}", pending, op);
                return self.push_operator(op);
            }
        }

        if !self.entering {
            self.expression.push_str(&self.display);
        }
        let operand = self.value();

        match (self.first_operand, self.operator) {
            (Some(lhs), Some(pending)) => match compute(lhs, pending, operand) {
                Some(result) => {
                    self.first_operand = Some(result);
                    self.display = format_result(result);
                }
                None => return self.into_error(),
            },
            (None, _) => self.first_operand = Some(operand),
            (Some(_), None) => {}
        }

        self.push_operator(op)
    }

    /// Evaluate the pending operation, if there is one
    pub fn evaluate(mut self) -> Self {
        if self.is_error() {
            return self;
        }

        let (lhs, op) = match (self.first_operand, self.operator) {
            (Some(lhs), Some(op)) => (lhs, op),
            _ => return self,
        };

        if !self.entering {
            self.expression.push_str(&self.display);
        }
        let rhs = self.value();

        let result = match compute(lhs, op, rhs) {
            Some(result) => result,
            None => return self.into_error(),
        };

        log::debug!("{} {} {} = {}", lhs, op, rhs, result);

        self.display = format_result(result);
        self.expression.push_str(" = ");
        self.expression.push_str(&self.display);
        self.first_operand = None;
        self.operator = None;
        self.awaiting_second = false;
        self.entering = false;
        self
    }

    /// Reset to the initial state
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Remove the last typed character, or clear after a result
    pub fn delete_last(mut self) -> Self {
        if self.has_result() {
            return self.clear();
        }
        if self.is_error() || !self.entering {
            return self;
        }

        self.display.pop();
        self.expression.pop();

        if self.display.is_empty() {
            self.display = "0".to_string();
            self.entering = false;
        }
        self
    }

    fn push_operator(mut self, op: Operator) -> Self {
        self.expression.push(' ');
        self.expression.push(op.symbol());
        self.expression.push(' ');
        self.operator = Some(op);
        self.awaiting_second = true;
        self.entering = false;
        self
    }

    fn into_error(mut self) -> Self {
        log::debug!("calculator entered error state");
        self.display = ERROR_MARKER.to_string();
        self.expression = ERROR_MARKER.to_string();
        self.first_operand = None;
        self.operator = None;
        self.awaiting_second = false;
        self.entering = false;
        self
    }
}

/// Apply `op` and round away floating point noise
///
/// None means the calculator should show the error marker: division by zero,
/// or a result too large to represent.
fn compute(lhs: f64, op: Operator, rhs: f64) -> Option<f64> {
    let raw = op.apply(lhs, rhs)?;
    if !raw.is_finite() {
        return None;
    }
    Some(round_result(raw))
}

fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMALS);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    // Avoid showing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn format_result(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Some(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Some(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Some(6.0));
        assert_eq!(Operator::Divide.apply(3.0, 2.0), Some(1.5));
        assert_eq!(Operator::Divide.apply(3.0, 0.0), None);
    }

    #[test]
    fn test_operator_parse() {
        assert_eq!("+".parse::<Operator>(), Ok(Operator::Add));
        assert_eq!("×".parse::<Operator>(), Ok(Operator::Multiply));
        assert_eq!(" ÷ ".parse::<Operator>(), Ok(Operator::Divide));
        assert!("%".parse::<Operator>().is_err());
        assert!("++".parse::<Operator>().is_err());
    }

    #[test]
    fn test_round_result() {
        assert_eq!(round_result(0.1 + 0.2), 0.3);
        assert_eq!(round_result(1.0 / 3.0), 0.33333333);
        assert_eq!(round_result(-0.000000001), 0.0);
        assert_eq!(round_result(1e305), 1e305);
    }

    #[test]
    fn test_format_result() {
        assert_eq!(format_result(3.0), "3");
        assert_eq!(format_result(-1.5), "-1.5");
        assert_eq!(format_result(0.3), "0.3");
    }

    #[test]
    fn test_initial_state() {
        let state = CalculatorState::new();
        assert_eq!(state.display, "0");
        assert_eq!(state.expression, "");
        assert_eq!(state.first_operand, None);
        assert_eq!(state.operator, None);
        assert!(!state.awaiting_second);
        assert!(!state.is_error());
    }
}
