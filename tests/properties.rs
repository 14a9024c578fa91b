use locale_tools::types::{LocaleSettings, RoundingMode};
use locale_tools::{LocaleProbe, LocaleTable, format_number, format_number_with, parse_number_format};
use proptest::prelude::*;

proptest! {
    #[test]
    fn grouping_only_inserts_separators(value in 0u64..1_000_000_000_000) {
        let locale = LocaleSettings::default();
        let grouped = format_number(value as f64, &parse_number_format("#,##0").unwrap(), &locale);
        let plain = format_number(value as f64, &parse_number_format("0").unwrap(), &locale);
        prop_assert_eq!(grouped.replace(',', ""), plain);
    }

    #[test]
    fn fixed_output_is_within_half_a_unit(value in 0.0f64..1_000_000.0) {
        let locale = LocaleSettings::default();
        let format = parse_number_format("0.00").unwrap();
        for mode in [RoundingMode::HalfUp, RoundingMode::HalfEven] {
            let output = format_number_with(value, &format, &locale, mode);
            let parsed: f64 = output.parse().unwrap();
            prop_assert!((parsed - value).abs() <= 0.005 + 1e-9, "{} -> {}", value, output);
            prop_assert_eq!(output.split('.').nth(1).map(str::len), Some(2));
        }
    }

    #[test]
    fn probes_are_consistent(locale in prop::sample::select(LocaleTable::builtin().available_locales())) {
        let probe = LocaleProbe::builtin();
        let cents = probe.cent_digits(&locale).unwrap();
        prop_assert_eq!(probe.has_cents(&locale).unwrap(), cents > 0);
        prop_assert!((0..=3).contains(&cents));
        prop_assert_eq!(probe.decimal_point(&locale).unwrap(), probe.decimal_point(&locale).unwrap());
    }
}
