// WebAssembly bindings for the converter page and the calculator widget
use crate::calc::{CalculatorState, Key, Operator};
use crate::convert::{self, Unit};
use wasm_bindgen::prelude::*;

fn parse_unit(name: &str) -> Result<Unit, JsValue> {
    name.parse::<Unit>()
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub struct ConverterWasm {}

impl Default for ConverterWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ConverterWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert the raw input field value between two units
    /// Returns the formatted value, or "-" when the input is not a number
    #[wasm_bindgen]
    pub fn convert(&self, raw: &str, from_unit: &str, to_unit: &str) -> Result<String, JsValue> {
        let from = parse_unit(from_unit)?;
        let to = parse_unit(to_unit)?;
        Ok(convert::convert(raw, from, to))
    }

    /// Convert the raw input into every result slot
    /// Returns JSON: {"source": ..., "input": ..., "base": ..., "slots": [{"unit", "label", "value", "visible"}]}
    #[wasm_bindgen]
    pub fn convert_all(&self, raw: &str, from_unit: &str) -> Result<String, JsValue> {
        let from = parse_unit(from_unit)?;
        let report = convert::convert_all(raw, from);

        serde_json::to_string(&report)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize report: {}", e)))
    }

    #[wasm_bindgen]
    pub fn format_number(&self, value: f64) -> String {
        convert::format_number(value)
    }

    /// Unit keys in result slot order
    #[wasm_bindgen]
    pub fn units(&self) -> js_sys::Array {
        Unit::DISPLAY_ORDER
            .iter()
            .map(|unit| JsValue::from_str(unit.key()))
            .collect()
    }

    /// Unit keys whose slots should be shown for the given source unit
    #[wasm_bindgen]
    pub fn displayed_units(&self, from_unit: &str) -> Result<js_sys::Array, JsValue> {
        let from = parse_unit(from_unit)?;
        Ok(convert::displayed_units(from)
            .into_iter()
            .map(|unit| JsValue::from_str(unit.key()))
            .collect())
    }
}

/// Calculator widget; owns the state between button presses
#[wasm_bindgen]
pub struct CalculatorWasm {
    state: CalculatorState,
}

impl Default for CalculatorWasm {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorWasm {
    fn transition(&mut self, f: impl FnOnce(CalculatorState) -> CalculatorState) {
        let current = std::mem::take(&mut self.state);
        self.state = f(current);
    }
}

#[wasm_bindgen]
impl CalculatorWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            state: CalculatorState::new(),
        }
    }

    #[wasm_bindgen]
    pub fn append_digit(&mut self, digit: char) {
        self.transition(|s| s.append_digit(digit));
    }

    /// Accepts "+", "-", "*", "/" (and "×", "÷")
    #[wasm_bindgen]
    pub fn append_operator(&mut self, op: &str) -> Result<(), JsValue> {
        let op = op.parse::<Operator>().map_err(|e| JsValue::from_str(&e))?;
        self.transition(|s| s.append_operator(op));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn evaluate(&mut self) {
        self.transition(CalculatorState::evaluate);
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.transition(CalculatorState::clear);
    }

    #[wasm_bindgen]
    pub fn delete_last(&mut self) {
        self.transition(CalculatorState::delete_last);
    }

    /// Handle a button label or `KeyboardEvent.key` value
    #[wasm_bindgen]
    pub fn press(&mut self, key: &str) -> Result<(), JsValue> {
        let key = Key::from_name(key).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.transition(|s| s.apply(key));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn display(&self) -> String {
        self.state.display.clone()
    }

    #[wasm_bindgen]
    pub fn expression(&self) -> String {
        self.state.expression.clone()
    }

    #[wasm_bindgen]
    pub fn is_error(&self) -> bool {
        self.state.is_error()
    }

    /// Full state as JSON
    #[wasm_bindgen]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.state)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize state: {}", e)))
    }
}
