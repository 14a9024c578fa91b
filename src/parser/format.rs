use winnow::Parser;
use winnow::token::literal;

use crate::error::{Error, Result};
use crate::parser::sections::parse_one_section;
use crate::types::*;

/// Parse a number pattern string
///
/// This is the main public API entry point of this module. It accepts a pattern with a
/// positive section and an optional negative section separated by `;`.
///
/// # Arguments
/// * `input_str` - The pattern string to parse
///
/// # Returns
/// * `Result<NumberFormat>` - The parsed pattern, or [`Error::Pattern`]
///
/// # Examples
/// ```
/// use locale_tools::parser::parse_number_format;
///
/// let format = parse_number_format("#,##0.00").unwrap();
/// assert!(format.negative_section.is_none());
/// ```
pub fn parse_number_format(input_str: &str) -> Result<NumberFormat> {
    let mut input = input_str;

    let make_err = |e, remaining: &str| -> Error {
        Error::Pattern(format!(
            "{e:?} in '{input_str}' at remaining input '{remaining}'"
        ))
    };

    let positive_section = parse_one_section
        .parse_next(&mut input)
        .map_err(|e| make_err(e, input))?;

    let mut negative_section = None;
    if input.starts_with(';') {
        literal(";")
            .parse_next(&mut input)
            .map_err(|e| make_err(e, input))?;
        negative_section = Some(
            parse_one_section
                .parse_next(&mut input)
                .map_err(|e| make_err(e, input))?,
        );
    }

    if !input.is_empty() {
        return Err(Error::Pattern(format!(
            "too many sections or trailing characters in '{input_str}': '{input}'"
        )));
    }

    if !positive_section
        .tokens
        .iter()
        .any(FormatToken::is_digit_placeholder)
    {
        return Err(Error::Pattern(format!(
            "'{input_str}' has no digit placeholder"
        )));
    }

    Ok(NumberFormat {
        positive_section,
        negative_section,
    })
}
