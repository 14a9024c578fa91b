//! Locale format probing
//!
//! This module inspects what a locale-aware number formatter produces for a few
//! fixed sample values, to find out which decimal point and grouping separator a
//! locale uses, whether its numbers have the conventional `1,234.56` shape, and how
//! many fractional digits its currency shows.
//!
//! The formatter sits behind [`NumberFormatter`]; [`TableFormatter`] is the
//! implementation backed by a [`LocaleTable`].

use log::{debug, trace, warn};
use regex::Regex;

use crate::error::{Error, Result};
use crate::formatter::format_number_with;
use crate::locale::{LocaleId, LocaleTable};
use crate::parser::parse_number_format;
use crate::types::RoundingMode;

/// How a value should be formatted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Fixed-point with exactly `fraction_digits` fractional digits
    Fixed {
        fraction_digits: usize,
        grouping: bool,
    },
    /// The locale's currency format
    Currency,
}

/// A locale-aware number formatter
pub trait NumberFormatter {
    /// Format `value` under `locale` in the given style
    fn format(&self, locale: &LocaleId, style: FormatStyle, value: f64) -> Result<String>;
}

impl<F: NumberFormatter + ?Sized> NumberFormatter for &F {
    fn format(&self, locale: &LocaleId, style: FormatStyle, value: f64) -> Result<String> {
        (**self).format(locale, style, value)
    }
}

/// [`NumberFormatter`] backed by the patterns and symbols of a [`LocaleTable`]
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter<'a> {
    table: &'a LocaleTable,
}

impl<'a> TableFormatter<'a> {
    pub fn new(table: &'a LocaleTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a LocaleTable {
        self.table
    }
}

impl Default for TableFormatter<'static> {
    fn default() -> Self {
        Self::new(LocaleTable::builtin())
    }
}

impl NumberFormatter for TableFormatter<'_> {
    fn format(&self, locale: &LocaleId, style: FormatStyle, value: f64) -> Result<String> {
        let mut settings = self.table.settings(locale);

        let (format, rounding) = match style {
            FormatStyle::Fixed {
                fraction_digits,
                grouping,
            } => {
                // Fixed-point grouping separates every full group, whatever the
                // locale's minimum for its own number patterns
                settings.min_grouping_digits = 1;
                let base = parse_number_format(&settings.decimal_pattern)?;
                let base = if grouping {
                    base
                } else {
                    base.without_grouping()
                };
                (base.with_fraction_digits(fraction_digits), RoundingMode::HalfUp)
            }
            FormatStyle::Currency => {
                let base = parse_number_format(&settings.currency_pattern)?;
                (
                    base.with_fraction_digits(settings.currency_fraction_digits),
                    RoundingMode::HalfEven,
                )
            }
        };

        let output = format_number_with(value, &format, &settings, rounding);
        debug!("{locale} {style:?} {value} -> {output:?}");
        Ok(output)
    }
}

/// Everything the probe finds out about one locale
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub locale: LocaleId,
    /// 1234.56 with two fractional digits and grouping
    pub sample: String,
    pub decimal_point: char,
    pub separator: char,
    pub numeric_test: bool,
    pub cent_digits: i32,
    pub has_cents: bool,
}

/// Probes the output of a [`NumberFormatter`]
#[derive(Debug, Clone, Default)]
pub struct LocaleProbe<F = TableFormatter<'static>> {
    formatter: F,
}

impl LocaleProbe {
    /// A probe over the built-in locale table
    pub fn builtin() -> Self {
        Self::new(TableFormatter::default())
    }
}

impl<F: NumberFormatter> LocaleProbe<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// The character the locale uses as decimal point
    ///
    /// Formats 0.1 with one fractional digit and returns the character after the
    /// leading digit. Only meaningful when [`numeric_test`](Self::numeric_test) passes.
    pub fn decimal_point(&self, locale: &LocaleId) -> Result<char> {
        let output = self.formatter.format(locale, fixed(1, false), 0.1)?;
        char_at(output, 1)
    }

    /// The character the locale uses to separate digit groups
    ///
    /// Formats 1234 with grouping and returns the character after the leading digit.
    /// Only meaningful when [`numeric_test`](Self::numeric_test) passes.
    pub fn separator(&self, locale: &LocaleId) -> Result<char> {
        let output = self.formatter.format(locale, fixed(0, true), 1234.0)?;
        char_at(output, 1)
    }

    /// 1234.56 formatted with two fractional digits and grouping
    pub fn sample(&self, locale: &LocaleId) -> Result<String> {
        self.formatter.format(locale, fixed(2, true), 1234.56)
    }

    /// Whether the locale writes 1234.56 as `1<separator>234<decimal point>56`
    ///
    /// False for locales with other digit glyphs or without a grouping separator in
    /// that position; [`decimal_point`](Self::decimal_point) and
    /// [`separator`](Self::separator) cannot be trusted for them.
    pub fn numeric_test(&self, locale: &LocaleId) -> Result<bool> {
        let expression = numeric_expression(self.separator(locale)?, self.decimal_point(locale)?)?;
        Ok(expression.is_match(&self.sample(locale)?))
    }

    /// Number of fractional digits in the locale's currency format
    ///
    /// Formats 1.234 as currency and counts the decimal digits (Unicode `Nd`) in the
    /// output, minus one for the integer digit. Any decimal digit counts, including
    /// one in the currency symbol; superscripts, fractions and numerals do not.
    pub fn cent_digits(&self, locale: &LocaleId) -> Result<i32> {
        let output = self.formatter.format(locale, FormatStyle::Currency, 1.234)?;
        let digits = Regex::new(r"\p{Nd}")?.find_iter(&output).count() as i32;
        Ok(digits - 1)
    }

    /// Whether the locale's currency has a fractional unit
    pub fn has_cents(&self, locale: &LocaleId) -> Result<bool> {
        Ok(self.cent_digits(locale)? > 0)
    }

    /// Run every probe against one locale
    pub fn report(&self, locale: &LocaleId) -> Result<ProbeReport> {
        let cent_digits = self.cent_digits(locale)?;
        Ok(ProbeReport {
            locale: locale.clone(),
            sample: self.sample(locale)?,
            decimal_point: self.decimal_point(locale)?,
            separator: self.separator(locale)?,
            numeric_test: self.numeric_test(locale)?,
            cent_digits,
            has_cents: cent_digits > 0,
        })
    }

    /// Run every probe against each locale, skipping those that fail
    pub fn survey<'l>(&self, locales: impl IntoIterator<Item = &'l LocaleId>) -> Vec<ProbeReport> {
        locales
            .into_iter()
            .filter_map(|locale| match self.report(locale) {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("Skipping {locale}: {e}");
                    None
                }
            })
            .collect()
    }
}

fn fixed(fraction_digits: usize, grouping: bool) -> FormatStyle {
    FormatStyle::Fixed {
        fraction_digits,
        grouping,
    }
}

fn char_at(output: String, position: usize) -> Result<char> {
    let found = output.chars().nth(position);
    found.ok_or(Error::ShortOutput { output, position })
}

/// Build the full-match expression `1[sep]234[dp]56`
pub fn numeric_expression(separator: char, decimal_point: char) -> Result<Regex> {
    let pattern = format!(
        "^1[{}]234[{}]56$",
        regex::escape(&separator.to_string()),
        regex::escape(&decimal_point.to_string())
    );
    trace!("numeric test expression: {pattern}");
    Ok(Regex::new(&pattern)?)
}

/// Decimal point of `locale` using the built-in locale table
pub fn decimal_point(locale: &LocaleId) -> Result<char> {
    LocaleProbe::builtin().decimal_point(locale)
}

/// Grouping separator of `locale` using the built-in locale table
pub fn separator(locale: &LocaleId) -> Result<char> {
    LocaleProbe::builtin().separator(locale)
}

/// Numeric self-test of `locale` using the built-in locale table
pub fn numeric_test(locale: &LocaleId) -> Result<bool> {
    LocaleProbe::builtin().numeric_test(locale)
}

/// Currency fraction digits of `locale` using the built-in locale table
pub fn cent_digits(locale: &LocaleId) -> Result<i32> {
    LocaleProbe::builtin().cent_digits(locale)
}

/// Whether the currency of `locale` has cents, using the built-in locale table
pub fn has_cents(locale: &LocaleId) -> Result<bool> {
    LocaleProbe::builtin().has_cents(locale)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::locale::{EN_US, JA_JP};

    /// Returns canned strings keyed by style
    struct Canned(HashMap<&'static str, &'static str>);

    impl Canned {
        fn new(entries: &[(&'static str, &'static str)]) -> Self {
            Self(entries.iter().copied().collect())
        }
    }

    impl NumberFormatter for Canned {
        fn format(&self, _: &LocaleId, style: FormatStyle, _: f64) -> Result<String> {
            let key = match style {
                FormatStyle::Fixed {
                    fraction_digits: 1, ..
                } => "decimal",
                FormatStyle::Fixed {
                    fraction_digits: 0, ..
                } => "separator",
                FormatStyle::Fixed { .. } => "sample",
                FormatStyle::Currency => "currency",
            };
            self.0
                .get(key)
                .map(|s| s.to_string())
                .ok_or_else(|| Error::Pattern(format!("no canned output for {key}")))
        }
    }

    #[test]
    fn test_extracts_second_character() {
        let probe = LocaleProbe::new(Canned::new(&[("decimal", "0'1"), ("separator", "1_234")]));
        assert_eq!(probe.decimal_point(&EN_US).unwrap(), '\'');
        assert_eq!(probe.separator(&EN_US).unwrap(), '_');
    }

    #[test]
    fn test_numeric_test_with_regex_metacharacters() {
        let probe = LocaleProbe::new(Canned::new(&[
            ("decimal", "0]1"),
            ("separator", "1^234"),
            ("sample", "1^234]56"),
        ]));
        assert!(probe.numeric_test(&EN_US).unwrap());

        let probe = LocaleProbe::new(Canned::new(&[
            ("decimal", "0.1"),
            ("separator", "1,234"),
            ("sample", "1,234.567"),
        ]));
        assert!(!probe.numeric_test(&EN_US).unwrap());
    }

    #[test]
    fn test_cent_digits_counts_all_digits() {
        let probe = LocaleProbe::new(Canned::new(&[("currency", "US$1.23")]));
        assert_eq!(probe.cent_digits(&EN_US).unwrap(), 2);

        // Digits in the symbol are counted too
        let probe = LocaleProbe::new(Canned::new(&[("currency", "X2 1.23")]));
        assert_eq!(probe.cent_digits(&EN_US).unwrap(), 3);

        // Only decimal digits count, not superscripts or numerals
        let probe = LocaleProbe::new(Canned::new(&[("currency", "²1.23")]));
        assert_eq!(probe.cent_digits(&EN_US).unwrap(), 2);
        let probe = LocaleProbe::new(Canned::new(&[("currency", "Ⅻ ½1.23")]));
        assert_eq!(probe.cent_digits(&EN_US).unwrap(), 2);

        // Non-Latin decimal digits do
        let probe = LocaleProbe::new(Canned::new(&[("currency", "١٫٢٣٤")]));
        assert_eq!(probe.cent_digits(&EN_US).unwrap(), 3);

        let probe = LocaleProbe::new(Canned::new(&[("currency", "¤")]));
        assert_eq!(probe.cent_digits(&EN_US).unwrap(), -1);
        assert!(!probe.has_cents(&EN_US).unwrap());
    }

    #[test]
    fn test_short_output_is_an_error() {
        let probe = LocaleProbe::new(Canned::new(&[("decimal", "1")]));
        let err = probe.decimal_point(&JA_JP).unwrap_err();
        assert!(matches!(err, Error::ShortOutput { position: 1, .. }));
    }

    #[test]
    fn test_formatter_errors_propagate() {
        let probe = LocaleProbe::new(Canned::new(&[]));
        assert!(matches!(probe.separator(&EN_US), Err(Error::Pattern(_))));
        assert!(matches!(probe.has_cents(&EN_US), Err(Error::Pattern(_))));
    }

    #[test]
    fn test_table_formatter_styles() {
        let formatter = TableFormatter::default();
        let fixed = |d, g| FormatStyle::Fixed {
            fraction_digits: d,
            grouping: g,
        };
        assert_eq!(formatter.format(&EN_US, fixed(2, true), 1234.56).unwrap(), "1,234.56");
        assert_eq!(formatter.format(&EN_US, fixed(2, false), 1234.56).unwrap(), "1234.56");
        assert_eq!(formatter.format(&EN_US, fixed(0, true), 1234.0).unwrap(), "1,234");
        assert_eq!(formatter.format(&EN_US, FormatStyle::Currency, 1.234).unwrap(), "$1.23");
        assert_eq!(formatter.format(&JA_JP, FormatStyle::Currency, 1.234).unwrap(), "￥1");
    }

    #[test]
    fn test_fixed_grouping_ignores_locale_minimum() {
        let table = LocaleTable::from_toml_str(
            r##"
            [xx]
            decimal = ","
            group = "."
            min_grouping_digits = 2
            currency_pattern = "#,##0.00 ¤"
            "##,
        )
        .unwrap();
        let probe = LocaleProbe::new(TableFormatter::new(&table));
        let xx: LocaleId = "xx".parse().unwrap();

        assert_eq!(probe.formatter().table().settings(&xx).min_grouping_digits, 2);
        assert_eq!(probe.sample(&xx).unwrap(), "1.234,56");
        assert_eq!(probe.separator(&xx).unwrap(), '.');
        assert!(probe.numeric_test(&xx).unwrap());

        // Currency keeps the locale's minimum
        let currency = probe.formatter().format(&xx, FormatStyle::Currency, 1234.0);
        assert_eq!(currency.unwrap(), "1234,00 ¤");
    }

    #[test]
    fn test_survey_skips_failures() {
        let probe = LocaleProbe::new(Canned::new(&[("currency", "$1.23")]));
        assert!(probe.survey([&EN_US, &JA_JP]).is_empty());

        let probe = LocaleProbe::builtin();
        let reports = probe.survey([&EN_US, &JA_JP]);
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].sample, "1,234.56");
        assert!(!reports[1].has_cents);
    }
}
