use crate::convert::types::Unit;

/// Whether the slot for `target` should be shown when converting from `source`
///
/// A linear source hides the square feet and square yard slots; an area source
/// hides every linear slot. Values are still computed for hidden slots.
pub fn is_displayed(source: Unit, target: Unit) -> bool {
    if source.is_linear() {
        !matches!(target, Unit::SqFeet | Unit::SqYard)
    } else {
        !target.is_linear()
    }
}

/// Units to show for `source`, in slot order
pub fn displayed_units(source: Unit) -> Vec<Unit> {
    Unit::DISPLAY_ORDER
        .iter()
        .copied()
        .filter(|target| is_displayed(source, *target))
        .collect()
}
