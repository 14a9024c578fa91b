use winnow::combinator::alt;
use winnow::{ModalResult, Parser};

use crate::parser::tokens::*;
use crate::types::*;

/// Parse a single token from the pattern string
pub fn parse_single_token(input: &mut &str) -> ModalResult<FormatToken> {
    let number_symbols = alt((
        parse_digit_or_zero,
        parse_digit_if_needed,
        parse_decimal_point,
        parse_thousands_separator,
    ));

    let locale_symbols = alt((parse_percentage, parse_currency_symbol));

    let textual = alt((
        parse_quoted_text,
        parse_escaped_char_as_literal,
        parse_literal_passthrough,
    ));

    alt((number_symbols, locale_symbols, textual)).parse_next(input)
}
