// Area/length conversion between a fixed set of land measurement units.
// Every conversion is routed through square feet; linear sources are squared.

pub mod converter;
pub mod detector;
pub mod display;
pub mod error;
pub mod formatter;
pub mod types;


pub use converter::{
    convert, convert_all, convert_value, from_base, parse_input, to_base, ConversionReport,
    ConversionSlot, PLACEHOLDER,
};
pub use detector::{looks_like_quantity, parse_quantity};
pub use display::{displayed_units, is_displayed};
pub use error::ConvertError;
pub use formatter::format_number;
pub use types::{Unit, UnitKind};
