use winnow::combinator::repeat;
use winnow::{ModalResult, Parser};

use crate::parser::combinators::parse_single_token;
use crate::types::*;

/// Parse a sequence of tokens
pub fn parse_section_tokens(input: &mut &str) -> ModalResult<Vec<FormatToken>> {
    repeat(0.., parse_single_token).parse_next(input)
}

/// Parse a single pattern section
pub fn parse_one_section(input: &mut &str) -> ModalResult<FormatSection> {
    let mut tokens = parse_section_tokens.parse_next(input)?;

    // A grouping comma after the last digit placeholder has nothing to group
    let last_digit_idx = tokens.iter().rposition(FormatToken::is_digit_placeholder);
    if let Some(last_idx) = last_digit_idx {
        let mut i = tokens.len();
        while i > last_idx + 1 {
            i -= 1;
            if matches!(tokens[i], FormatToken::ThousandsSeparator) {
                tokens.remove(i);
            }
        }
    }

    Ok(FormatSection { tokens })
}
