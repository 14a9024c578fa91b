//! Number pattern parsing module
//!
//! This module is responsible for parsing pattern strings such as `#,##0.00` or
//! `¤ #,##0.00` into the [`NumberFormat`](crate::types::NumberFormat) representation.
//! The main entry point is the `parse_number_format` function.

mod combinators;
mod format;
mod sections;
mod tokens;

pub use format::parse_number_format;
