use locale_tools::types::{LocaleSettings, RoundingMode};
use locale_tools::{format_number, format_number_with, parse_number_format};

fn fmt(value: f64, pattern: &str, locale: &LocaleSettings) -> String {
    let format = parse_number_format(pattern).unwrap();
    format_number(value, &format, locale)
}

#[test]
fn test_basic_format() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(123.456, "0.00", &locale), "123.46");
    assert_eq!(fmt(0.789, "0.00", &locale), "0.79");
}

#[test]
fn test_negative_format() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(123.456, "0.00;-0.00", &locale), "123.46");
    assert_eq!(fmt(-123.456, "0.00;-0.00", &locale), "-123.46");
    assert_eq!(fmt(-123.456, "0.00;(0.00)", &locale), "(123.46)");
}

#[test]
fn test_negative_without_section_uses_minus_sign() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(-1234.5, "#,##0.00", &locale), "-1,234.50");

    let mut swedish = LocaleSettings::default();
    swedish.minus_sign = '−';
    assert_eq!(fmt(-2.0, "0", &swedish), "−2");
}

#[test]
fn test_digit_placeholders() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(123.456, "#0.0#", &locale), "123.46");
    assert_eq!(fmt(123.4, "#0.0#", &locale), "123.4");
    assert_eq!(fmt(0.456, "#0.0#", &locale), "0.46");
    assert_eq!(fmt(0.5, "#.00", &locale), ".50");
    assert_eq!(fmt(42.0, "00000", &locale), "00042");
    assert_eq!(fmt(1234.0, "#,##0.###", &locale), "1,234");
}

#[test]
fn test_percent_format() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(0.12, "0%", &locale), "12%");
    assert_eq!(fmt(0.1234, "0.0%", &locale), "12.3%");
}

#[test]
fn test_large_integers() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(1234567.89, "0.00", &locale), "1234567.89");
    assert_eq!(fmt(12345.0, "0", &locale), "12345");
    assert_eq!(fmt(1e15, "#,##0", &locale), "1,000,000,000,000,000");
}

#[test]
fn test_rounding() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(0.04, "0.0", &locale), "0.0");
    assert_eq!(fmt(0.05, "0.0", &locale), "0.1");
    assert_eq!(fmt(0.95, "0.0", &locale), "1.0");
    assert_eq!(fmt(0.994, "0.00", &locale), "0.99");
    assert_eq!(fmt(0.995, "0.00", &locale), "1.00");
    assert_eq!(fmt(999.5, "#,##0", &locale), "1,000");
}

#[test]
fn test_rounding_modes() {
    let locale = LocaleSettings::default();
    let format = parse_number_format("0.00").unwrap();
    assert_eq!(
        format_number_with(0.125, &format, &locale, RoundingMode::HalfUp),
        "0.13"
    );
    assert_eq!(
        format_number_with(0.125, &format, &locale, RoundingMode::HalfEven),
        "0.12"
    );
    assert_eq!(
        format_number_with(0.135, &format, &locale, RoundingMode::HalfEven),
        "0.14"
    );
}

#[test]
fn test_locale_separators() {
    let german = LocaleSettings::default()
        .with_decimal_point(',')
        .with_thousands_separator('.');
    assert_eq!(fmt(1234567.891, "#,##0.00", &german), "1.234.567,89");
    assert_eq!(fmt(0.1, "0.0", &german), "0,1");
}

#[test]
fn test_indian_grouping() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(1234567.891, "#,##,##0.00", &locale), "12,34,567.89");
    assert_eq!(fmt(1234.56, "#,##,##0.00", &locale), "1,234.56");
}

#[test]
fn test_min_grouping_digits() {
    let spanish = LocaleSettings::default()
        .with_decimal_point(',')
        .with_thousands_separator('.')
        .with_min_grouping_digits(2);
    assert_eq!(fmt(1234.56, "#,##0.00", &spanish), "1234,56");
    assert_eq!(fmt(12345.6, "#,##0.00", &spanish), "12.345,60");
}

#[test]
fn test_digit_glyphs() {
    let arabic = LocaleSettings::default()
        .with_decimal_point('٫')
        .with_thousands_separator('٬')
        .with_digits(['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩']);
    assert_eq!(fmt(1234.56, "#,##0.00", &arabic), "١٬٢٣٤٫٥٦");
    assert_eq!(fmt(0.1, "0.0", &arabic), "٠٫١");
}

#[test]
fn test_non_finite_values() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(f64::NAN, "0.00", &locale), "NaN");
    assert_eq!(fmt(f64::INFINITY, "0.00", &locale), "∞");
    assert_eq!(fmt(f64::NEG_INFINITY, "0.00", &locale), "-∞");
}

#[test]
fn test_quoted_text() {
    let locale = LocaleSettings::default();
    assert_eq!(fmt(5.0, "\"Qty: \"0", &locale), "Qty: 5");
    assert_eq!(fmt(5.0, "0\" units\"", &locale), "5 units");
}
