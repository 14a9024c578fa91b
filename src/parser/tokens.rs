use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::error::ErrMode;
use winnow::token::{any, literal, none_of};
use winnow::{ModalResult, Parser};

use crate::types::*;

// Number placeholders
pub fn parse_digit_or_zero(input: &mut &str) -> ModalResult<FormatToken> {
    literal("0")
        .value(FormatToken::DigitOrZero)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_digit_if_needed(input: &mut &str) -> ModalResult<FormatToken> {
    literal("#")
        .value(FormatToken::DigitIfNeeded)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_decimal_point(input: &mut &str) -> ModalResult<FormatToken> {
    literal(".")
        .value(FormatToken::DecimalPoint)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_thousands_separator(input: &mut &str) -> ModalResult<FormatToken> {
    literal(",")
        .value(FormatToken::ThousandsSeparator)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Symbols substituted from the locale
pub fn parse_percentage(input: &mut &str) -> ModalResult<FormatToken> {
    literal("%")
        .value(FormatToken::Percentage)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_currency_symbol(input: &mut &str) -> ModalResult<FormatToken> {
    literal("¤")
        .value(FormatToken::CurrencySymbol)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

// Text and special character parsers
pub fn parse_escaped_char_as_literal(input: &mut &str) -> ModalResult<FormatToken> {
    preceded('\\', any)
        .map(FormatToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

/// Anything that is not a section separator or the start of a quote is printed as is
pub fn parse_literal_passthrough(input: &mut &str) -> ModalResult<FormatToken> {
    none_of([';', '"'])
        .map(FormatToken::LiteralChar)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}

pub fn parse_quoted_text(input: &mut &str) -> ModalResult<FormatToken> {
    let content_parser = repeat(0.., alt((preceded('\\', any), none_of(['"']))))
        .map(|chars: Vec<char>| chars.into_iter().collect::<String>());

    delimited('"', content_parser, '"')
        .map(FormatToken::QuotedText)
        .parse_next(input)
        .map_err(ErrMode::Backtrack)
}
