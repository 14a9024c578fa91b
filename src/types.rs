//! Type definitions for number patterns and locale settings
//!
//! This module defines the parsed representation of number patterns
//! (`#,##0.00`, `¤#,##0.00`, ...) and the per-locale symbols used to render them.

/// Represents a single format token parsed from a pattern string
#[derive(Debug, Clone, PartialEq)]
pub enum FormatToken {
    /// Number placeholder (0) that shows zero if no digit exists
    DigitOrZero,
    /// Number placeholder (#) that shows nothing if no digit exists
    DigitIfNeeded,
    /// Decimal point (.)
    DecimalPoint,
    /// Grouping separator (,)
    ThousandsSeparator,
    /// Percentage symbol (%)
    Percentage,
    /// Currency sign (¤), replaced by the locale's currency symbol
    CurrencySymbol,
    /// Literal character to display directly
    LiteralChar(char),
    /// Quoted text, like "text"
    QuotedText(String),
}

impl FormatToken {
    /// Checks if the token is a digit placeholder
    pub fn is_digit_placeholder(&self) -> bool {
        matches!(self, FormatToken::DigitOrZero | FormatToken::DigitIfNeeded)
    }

    /// Checks if the token belongs to the numeric body of a section
    pub fn is_numeric(&self) -> bool {
        matches!(
            self,
            FormatToken::DigitOrZero
                | FormatToken::DigitIfNeeded
                | FormatToken::DecimalPoint
                | FormatToken::ThousandsSeparator
        )
    }
}

/// Rounding applied when a value has more fractional digits than the pattern allows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Ties round away from zero, as printf-style fixed formatting does
    #[default]
    HalfUp,
    /// Ties round to the even neighbour, as currency formatting does
    HalfEven,
}

/// Represents a section of the pattern string
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormatSection {
    /// Sequence of format tokens
    pub tokens: Vec<FormatToken>,
}

/// Digit layout derived from the placeholders of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DigitLayout {
    /// Number of `0` placeholders before the decimal point
    pub min_integer_digits: usize,
    /// Number of `0` placeholders after the decimal point
    pub min_fraction_digits: usize,
    /// Number of all placeholders after the decimal point
    pub max_fraction_digits: usize,
    /// Size of the group closest to the decimal point, if grouping is used
    pub primary_grouping: Option<usize>,
    /// Size of the remaining groups (Indian-style `#,##,##0` gives 2)
    pub secondary_grouping: Option<usize>,
}

impl FormatSection {
    /// Compute the digit layout of this section
    pub fn layout(&self) -> DigitLayout {
        let mut layout = DigitLayout::default();
        let mut after_decimal = false;
        // Placeholder counts between grouping separators, integer part only
        let mut groups: Vec<usize> = vec![0];
        let mut saw_separator = false;

        for token in &self.tokens {
            match token {
                FormatToken::DecimalPoint => after_decimal = true,
                FormatToken::ThousandsSeparator if !after_decimal => {
                    saw_separator = true;
                    groups.push(0);
                }
                FormatToken::DigitOrZero | FormatToken::DigitIfNeeded => {
                    let is_zero = matches!(token, FormatToken::DigitOrZero);
                    if after_decimal {
                        layout.max_fraction_digits += 1;
                        if is_zero {
                            layout.min_fraction_digits += 1;
                        }
                    } else {
                        if is_zero {
                            layout.min_integer_digits += 1;
                        }
                        if let Some(last) = groups.last_mut() {
                            *last += 1;
                        }
                    }
                }
                _ => {}
            }
        }

        if saw_separator {
            let primary = groups.last().copied().unwrap_or(0);
            if primary > 0 {
                layout.primary_grouping = Some(primary);
                layout.secondary_grouping = match groups.len() {
                    // "#,##,##0": [1, 2, 3] -> secondary is the group before the last
                    n if n >= 3 && groups[n - 2] > 0 => Some(groups[n - 2]),
                    _ => Some(primary),
                };
            }
        }

        layout
    }

    /// Return a copy of this section with the fractional part replaced by
    /// exactly `digits` zero placeholders (no decimal point when `digits` is 0)
    pub fn with_fraction_digits(&self, digits: usize) -> FormatSection {
        let mut tokens = Vec::with_capacity(self.tokens.len() + digits);
        let mut inserted = false;
        let mut in_fraction = false;

        let push_fraction = |tokens: &mut Vec<FormatToken>| {
            if digits > 0 {
                tokens.push(FormatToken::DecimalPoint);
                tokens.extend(std::iter::repeat_n(FormatToken::DigitOrZero, digits));
            }
        };

        for (idx, token) in self.tokens.iter().enumerate() {
            match token {
                FormatToken::DecimalPoint => {
                    in_fraction = true;
                    if !inserted {
                        push_fraction(&mut tokens);
                        inserted = true;
                    }
                }
                t if in_fraction && t.is_digit_placeholder() => {}
                t => {
                    in_fraction = false;
                    tokens.push(t.clone());
                    // No decimal point in the pattern: append after the last integer placeholder
                    if !inserted
                        && t.is_numeric()
                        && !self.tokens[idx + 1..].iter().any(FormatToken::is_numeric)
                    {
                        push_fraction(&mut tokens);
                        inserted = true;
                    }
                }
            }
        }

        FormatSection { tokens }
    }

    /// Return a copy of this section without grouping separators
    pub fn without_grouping(&self) -> FormatSection {
        FormatSection {
            tokens: self
                .tokens
                .iter()
                .filter(|t| !matches!(t, FormatToken::ThousandsSeparator))
                .cloned()
                .collect(),
        }
    }
}

/// Represents a complete number pattern with its sections
#[derive(Debug, Clone, PartialEq)]
pub struct NumberFormat {
    /// Positive section format (required)
    pub positive_section: FormatSection,
    /// Negative section format (optional)
    pub negative_section: Option<FormatSection>,
}

impl NumberFormat {
    /// Apply [`FormatSection::with_fraction_digits`] to every section
    pub fn with_fraction_digits(&self, digits: usize) -> NumberFormat {
        NumberFormat {
            positive_section: self.positive_section.with_fraction_digits(digits),
            negative_section: self
                .negative_section
                .as_ref()
                .map(|s| s.with_fraction_digits(digits)),
        }
    }

    /// Apply [`FormatSection::without_grouping`] to every section
    pub fn without_grouping(&self) -> NumberFormat {
        NumberFormat {
            positive_section: self.positive_section.without_grouping(),
            negative_section: self.negative_section.as_ref().map(|s| s.without_grouping()),
        }
    }
}

/// Latin digit glyphs
pub const LATIN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Symbols and patterns a locale uses to render numbers
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSettings {
    /// Character between the integer and fractional parts
    pub decimal_point: char,
    /// Character between digit groups
    pub thousands_separator: char,
    /// Minimum number of digits in the highest group before grouping is shown
    pub min_grouping_digits: usize,
    /// Glyphs for the digits 0 to 9
    pub digits: [char; 10],
    /// Sign prefixed to negative values without a negative section
    pub minus_sign: char,
    /// Sign rendered for `%`
    pub percent_sign: char,
    /// Symbol rendered for `¤`
    pub currency_symbol: String,
    /// Number of fractional digits of the locale's currency
    pub currency_fraction_digits: usize,
    /// Pattern used for plain decimal numbers
    pub decimal_pattern: String,
    /// Pattern used for currency amounts
    pub currency_pattern: String,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            decimal_point: '.',
            thousands_separator: ',',
            min_grouping_digits: 1,
            digits: LATIN_DIGITS,
            minus_sign: '-',
            percent_sign: '%',
            currency_symbol: "¤".to_string(),
            currency_fraction_digits: 2,
            decimal_pattern: "#,##0.###".to_string(),
            currency_pattern: "¤#,##0.00".to_string(),
        }
    }
}

impl LocaleSettings {
    pub fn with_decimal_point(mut self, c: char) -> Self {
        self.decimal_point = c;
        self
    }

    pub fn with_thousands_separator(mut self, c: char) -> Self {
        self.thousands_separator = c;
        self
    }

    pub fn with_min_grouping_digits(mut self, n: usize) -> Self {
        self.min_grouping_digits = n;
        self
    }

    pub fn with_digits(mut self, digits: [char; 10]) -> Self {
        self.digits = digits;
        self
    }

    pub fn with_currency_symbol(mut self, symbol: String) -> Self {
        self.currency_symbol = symbol;
        self
    }

    pub fn with_currency_fraction_digits(mut self, n: usize) -> Self {
        self.currency_fraction_digits = n;
        self
    }

    pub fn with_currency_pattern(mut self, pattern: String) -> Self {
        self.currency_pattern = pattern;
        self
    }

    /// Map an ASCII digit to this locale's glyph; other characters pass through
    pub fn glyph(&self, ascii_digit: char) -> char {
        ascii_digit
            .to_digit(10)
            .map(|d| self.digits[d as usize])
            .unwrap_or(ascii_digit)
    }
}
