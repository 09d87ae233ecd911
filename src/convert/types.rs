use crate::convert::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Whether a unit measures length or area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// One-dimensional, based on feet
    Linear,
    /// Two-dimensional, based on square feet
    Area,
}

/// A supported measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Inch,
    Feet,
    Yard,
    SqFeet,
    SqYard,
    Ankanam,
    Cent,
    Gunta,
    Acre,
    Hectare,
}

impl Unit {
    /// All units in declaration order
    pub const ALL: [Unit; 10] = [
        Unit::Inch,
        Unit::Feet,
        Unit::Yard,
        Unit::SqFeet,
        Unit::SqYard,
        Unit::Ankanam,
        Unit::Cent,
        Unit::Gunta,
        Unit::Acre,
        Unit::Hectare,
    ];

    /// Order of the result slots on the converter page
    pub const DISPLAY_ORDER: [Unit; 10] = [
        Unit::Inch,
        Unit::Feet,
        Unit::SqFeet,
        Unit::Yard,
        Unit::SqYard,
        Unit::Gunta,
        Unit::Cent,
        Unit::Ankanam,
        Unit::Acre,
        Unit::Hectare,
    ];

    /// Factor to the base unit (feet for linear units, square feet for area units)
    pub fn factor(&self) -> f64 {
        match self {
            Unit::Inch => 1.0 / 12.0,
            Unit::Feet => 1.0,
            Unit::Yard => 3.0,
            Unit::SqFeet => 1.0,
            Unit::SqYard => 9.0,
            Unit::Ankanam => 72.0,
            Unit::Cent => 435.6,
            Unit::Gunta => 1089.0,
            Unit::Acre => 43560.0,
            Unit::Hectare => 107639.1,
        }
    }

    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Inch | Unit::Feet | Unit::Yard => UnitKind::Linear,
            _ => UnitKind::Area,
        }
    }

    pub fn is_linear(&self) -> bool {
        self.kind() == UnitKind::Linear
    }

    /// Canonical key, as used by the unit selector and in JSON
    pub fn key(&self) -> &'static str {
        match self {
            Unit::Inch => "inch",
            Unit::Feet => "feet",
            Unit::Yard => "yard",
            Unit::SqFeet => "sqfeet",
            Unit::SqYard => "sqyard",
            Unit::Ankanam => "ankanam",
            Unit::Cent => "cent",
            Unit::Gunta => "gunta",
            Unit::Acre => "acre",
            Unit::Hectare => "hectare",
        }
    }

    /// Human-readable label for a result slot
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Inch => "Inch",
            Unit::Feet => "Feet",
            Unit::Yard => "Yard",
            Unit::SqFeet => "Square Feet",
            Unit::SqYard => "Square Yard",
            Unit::Ankanam => "Ankanam",
            Unit::Cent => "Cent",
            Unit::Gunta => "Gunta",
            Unit::Acre => "Acre",
            Unit::Hectare => "Hectare",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        match lower.as_str() {
            "inch" | "inches" | "in" => Ok(Unit::Inch),
            "feet" | "foot" | "ft" => Ok(Unit::Feet),
            "yard" | "yards" | "yd" => Ok(Unit::Yard),
            "sqfeet" | "sqft" | "sq ft" | "square feet" => Ok(Unit::SqFeet),
            "sqyard" | "sqyd" | "sq yd" | "square yard" | "square yards" => Ok(Unit::SqYard),
            "ankanam" | "ankanams" => Ok(Unit::Ankanam),
            "cent" | "cents" => Ok(Unit::Cent),
            "gunta" | "guntas" => Ok(Unit::Gunta),
            "acre" | "acres" | "ac" => Ok(Unit::Acre),
            "hectare" | "hectares" | "ha" => Ok(Unit::Hectare),
            _ => Err(ConvertError::InvalidUnit(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_kinds() {
        assert_eq!(Unit::Inch.kind(), UnitKind::Linear);
        assert_eq!(Unit::Feet.kind(), UnitKind::Linear);
        assert_eq!(Unit::Yard.kind(), UnitKind::Linear);
        for unit in &Unit::ALL[3..] {
            assert_eq!(unit.kind(), UnitKind::Area, "{} should be an area unit", unit);
        }
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("ft".parse::<Unit>(), Ok(Unit::Feet));
        assert_eq!(" Sq Ft ".parse::<Unit>(), Ok(Unit::SqFeet));
        assert_eq!("HA".parse::<Unit>(), Ok(Unit::Hectare));
        assert_eq!("acres".parse::<Unit>(), Ok(Unit::Acre));
        assert!(matches!(
            "furlong".parse::<Unit>(),
            Err(ConvertError::InvalidUnit(name)) if name == "furlong"
        ));
    }

    #[test]
    fn test_key_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.key().parse::<Unit>(), Ok(unit));
        }
    }

    #[test]
    fn test_serde_uses_keys() {
        let json = serde_json::to_string(&Unit::SqYard).unwrap();
        assert_eq!(json, "\"sqyard\"");
        let unit: Unit = serde_json::from_str("\"hectare\"").unwrap();
        assert_eq!(unit, Unit::Hectare);
    }

    #[test]
    fn test_display_order_covers_all_units() {
        for unit in Unit::ALL {
            assert!(Unit::DISPLAY_ORDER.contains(&unit));
        }
    }
}
