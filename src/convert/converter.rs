use crate::convert::display::is_displayed;
use crate::convert::formatter::format_number;
use crate::convert::types::{Unit, UnitKind};
use serde::{Deserialize, Serialize};

/// Shown in every slot when the input is not a number
pub const PLACEHOLDER: &str = "-";

/// Parse raw input text into a finite number
///
/// Returns None for empty, non-numeric, NaN or infinite input.
pub fn parse_input(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert a value in `unit` to square feet
///
/// Linear values are converted to feet and then squared, so `3 yard` means the
/// area of a 3 yard square.
pub fn to_base(value: f64, unit: Unit) -> f64 {
    let scaled = value * unit.factor();
    match unit.kind() {
        UnitKind::Linear => scaled * scaled,
        UnitKind::Area => scaled,
    }
}

/// Convert square feet to `unit`
///
/// Linear targets give the side length of a square with that area.
pub fn from_base(base: f64, unit: Unit) -> f64 {
    match unit.kind() {
        UnitKind::Linear => base.sqrt() / unit.factor(),
        UnitKind::Area => base / unit.factor(),
    }
}

/// Convert a number between two units
///
/// Linear to linear goes through an area, so the sign is lost: `-5 feet`
/// comes back as `5 feet`.
pub fn convert_value(value: f64, from: Unit, to: Unit) -> f64 {
    from_base(to_base(value, from), to)
}

/// Convert raw input text between two units and format it for display
pub fn convert(raw: &str, from: Unit, to: Unit) -> String {
    match parse_input(raw) {
        Some(value) => format_number(convert_value(value, from, to)),
        None => PLACEHOLDER.to_string(),
    }
}

/// One result slot of a conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionSlot {
    pub unit: Unit,
    pub label: String,
    /// Formatted value, or the placeholder
    pub value: String,
    /// Display policy for this slot given the source unit
    pub visible: bool,
}

/// Every slot computed from one input, in display order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    pub source: Unit,
    /// Parsed input, None when the input was empty or not a number
    pub input: Option<f64>,
    /// Input expressed in square feet
    pub base: Option<f64>,
    pub slots: Vec<ConversionSlot>,
}

impl ConversionReport {
    pub fn visible_slots(&self) -> impl Iterator<Item = &ConversionSlot> {
        self.slots.iter().filter(|slot| slot.visible)
    }

    pub fn slot(&self, unit: Unit) -> Option<&ConversionSlot> {
        self.slots.iter().find(|slot| slot.unit == unit)
    }
}

/// Convert raw input from `source` into every unit
pub fn convert_all(raw: &str, source: Unit) -> ConversionReport {
    let input = parse_input(raw);
    let base = input.map(|value| to_base(value, source));

    match base {
        Some(b) => log::debug!("{:?} {} = {} sqfeet", input, source, b),
        None => log::debug!("input {:?} is not a number, showing placeholders", raw),
    }

    let slots = Unit::DISPLAY_ORDER
        .iter()
        .map(|&unit| ConversionSlot {
            unit,
            label: unit.label().to_string(),
            value: match base {
                Some(b) => format_number(from_base(b, unit)),
                None => PLACEHOLDER.to_string(),
            },
            visible: is_displayed(source, unit),
        })
        .collect();

    ConversionReport {
        source,
        input,
        base,
        slots,
    }
}
