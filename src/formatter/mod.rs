//! Number formatting module
//!
//! This module renders numbers according to parsed number patterns and locale settings.
//! The main entry points are `format_number` and `format_number_with`.

mod core;
pub(crate) mod digits;
mod sections;

use crate::types::{LocaleSettings, NumberFormat, RoundingMode};

/// Format a number according to the specified pattern, rounding half-up
///
/// # Arguments
/// * `value` - The numeric value to format
/// * `format` - The parsed number pattern
/// * `locale` - Locale settings for formatting
///
/// # Returns
/// * `String` - The formatted number string
///
/// # Examples
/// ```
/// use locale_tools::formatter::format_number;
/// use locale_tools::parser::parse_number_format;
/// use locale_tools::types::LocaleSettings;
///
/// let format = parse_number_format("#,##0.00").unwrap();
/// let result = format_number(1234.56, &format, &LocaleSettings::default());
/// assert_eq!(result, "1,234.56");
/// ```
pub fn format_number(value: f64, format: &NumberFormat, locale: &LocaleSettings) -> String {
    format_number_with(value, format, locale, RoundingMode::HalfUp)
}

/// Format a number according to the specified pattern and rounding mode
pub fn format_number_with(
    value: f64,
    format: &NumberFormat,
    locale: &LocaleSettings,
    rounding: RoundingMode,
) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 {
            format!("{}∞", locale.minus_sign)
        } else {
            "∞".to_string()
        };
    }

    let (section, prefix_minus) = sections::select_section(value, format);
    self::core::format_value(value, section, locale, rounding, prefix_minus)
}
