use crate::types::{FormatSection, NumberFormat};

/// Select the section for a value and report whether the positive section stands in
/// for a negative value (the caller then prefixes the minus sign)
pub(super) fn select_section(value: f64, format: &NumberFormat) -> (&FormatSection, bool) {
    if value < 0.0 {
        if let Some(section) = &format.negative_section {
            return (section, false);
        }
        return (&format.positive_section, true);
    }

    (&format.positive_section, false)
}
