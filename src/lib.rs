//! Locale-aware numeric formatting introspection
//!
//! Finds out, for a locale, which character is its decimal point, which is its
//! grouping separator, whether its numbers use ordinary Latin digits in the
//! `1,234.56` shape, and how many fractional digits its currency shows.
//!
//! ```
//! use locale_tools::{EN_US, PT_BR, decimal_point, has_cents, separator};
//!
//! assert_eq!(decimal_point(&PT_BR).unwrap(), ',');
//! assert_eq!(separator(&EN_US).unwrap(), ',');
//! assert!(has_cents(&EN_US).unwrap());
//! ```

pub mod error;
pub mod formatter;
pub mod locale;
pub mod parser;
pub mod probe;
pub mod types;

// Main API exports
pub use error::{Error, Result};
pub use formatter::{format_number, format_number_with};
pub use locale::{EN_US, FR_FR, JA_JP, LocaleId, LocaleTable, PT_BR};
pub use parser::parse_number_format;
pub use probe::{
    FormatStyle, LocaleProbe, NumberFormatter, ProbeReport, TableFormatter, cent_digits,
    decimal_point, has_cents, numeric_test, separator,
};
pub use types::*;
