use crate::formatter::digits::{group_integer, round_to_places};
use crate::types::{FormatSection, FormatToken, LocaleSettings, RoundingMode};

/// Format the absolute value of a finite number using one section
///
/// The numeric body (digit placeholders, decimal point and grouping separators) is
/// rendered once, at the position of the first numeric token. Literals, quoted text
/// and locale symbols are emitted where they appear in the section.
pub(super) fn format_value(
    value: f64,
    section: &FormatSection,
    locale: &LocaleSettings,
    rounding: RoundingMode,
    prefix_minus: bool,
) -> String {
    let layout = section.layout();

    let has_percentage = section
        .tokens
        .iter()
        .any(|t| matches!(t, FormatToken::Percentage));
    let adjusted_value = if has_percentage {
        value.abs() * 100.0
    } else {
        value.abs()
    };

    let rounded = round_to_places(adjusted_value, layout.max_fraction_digits, rounding);

    // Trim optional fractional digits
    let mut fraction = rounded.fraction;
    while fraction.len() > layout.min_fraction_digits && fraction.ends_with('0') {
        fraction.pop();
    }

    // Leading zeros only as far as `0` placeholders ask for them
    let significant = rounded.integer.trim_start_matches('0');
    let mut integer = String::with_capacity(layout.min_integer_digits.max(significant.len()));
    integer.extend(std::iter::repeat_n(
        '0',
        layout.min_integer_digits.saturating_sub(significant.len()),
    ));
    integer.push_str(significant);

    let integer = match layout.primary_grouping {
        Some(primary) => group_integer(
            &integer,
            locale.thousands_separator,
            primary,
            layout.secondary_grouping.unwrap_or(primary),
            locale.min_grouping_digits,
        ),
        None => integer,
    };

    let mut body = String::with_capacity(integer.len() + fraction.len() + 1);
    body.extend(integer.chars().map(|c| locale.glyph(c)));
    if !fraction.is_empty() {
        body.push(locale.decimal_point);
        body.extend(fraction.chars().map(|c| locale.glyph(c)));
    }

    let mut result = String::new();
    if prefix_minus {
        result.push(locale.minus_sign);
    }

    let mut body_emitted = false;
    for token in &section.tokens {
        match token {
            t if t.is_numeric() => {
                if !body_emitted {
                    result.push_str(&body);
                    body_emitted = true;
                }
            }
            FormatToken::Percentage => result.push(locale.percent_sign),
            FormatToken::CurrencySymbol => result.push_str(&locale.currency_symbol),
            FormatToken::LiteralChar(c) => result.push(*c),
            FormatToken::QuotedText(text) => result.push_str(text),
            _ => {}
        }
    }

    result
}
