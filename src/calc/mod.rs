// Four-function calculator driven one key at a time.
// State is an explicit value; every transition consumes it and returns the next one.

pub mod keys;
pub mod state;


pub use keys::{run_keys, Key, KeyError};
pub use state::{CalculatorState, Operator, ERROR_MARKER};
