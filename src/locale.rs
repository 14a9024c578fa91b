//! Locale support for number formatting
//!
//! This module handles locale identifiers and the table of locale-specific
//! settings used to format numbers and currency amounts. The built-in table is
//! embedded from `locale/locale_settings.toml` and parsed once on first use.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

use log::{debug, error};

use crate::error::{Error, Result};
use crate::types::LocaleSettings;

/// Portuguese (Brazil)
pub const PT_BR: LocaleId = LocaleId::from_static("pt", "BR");
/// English (United States)
pub const EN_US: LocaleId = LocaleId::from_static("en", "US");
/// French (France)
pub const FR_FR: LocaleId = LocaleId::from_static("fr", "FR");
/// Japanese (Japan)
pub const JA_JP: LocaleId = LocaleId::from_static("ja", "JP");

/// A locale identifier: language, optional region and optional variant
///
/// Parsed from `ll`, `ll_RR`, `ll-RR` or `ll_RR_VARIANT` and displayed with
/// underscores (`pt_BR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocaleId {
    language: Cow<'static, str>,
    region: Option<Cow<'static, str>>,
    variant: Option<Cow<'static, str>>,
}

impl LocaleId {
    /// Build a language + region identifier from static strings.
    ///
    /// The parts are taken as given; they must already be in canonical case.
    pub const fn from_static(language: &'static str, region: &'static str) -> Self {
        Self {
            language: Cow::Borrowed(language),
            region: Some(Cow::Borrowed(region)),
            variant: None,
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn variant(&self) -> Option<&str> {
        self.variant.as_deref()
    }

    /// BCP 47 style tag (`pt-BR`)
    pub fn to_language_tag(&self) -> String {
        self.parts().collect::<Vec<_>>().join("-")
    }

    /// Table keys from the most general to the most specific
    /// (`ja`, `ja_JP`, `ja_JP_JP`)
    ///
    /// A variant without region keeps its empty region slot, so `no__NY` never
    /// resolves through the `no_NY` entry.
    pub fn lookup_chain(&self) -> Vec<LocaleId> {
        let language = Self {
            language: self.language.clone(),
            region: None,
            variant: None,
        };
        let mut chain = vec![language];
        if self.region.is_some() {
            chain.push(Self {
                variant: None,
                ..self.clone()
            });
        }
        if self.variant.is_some() {
            chain.push(self.clone());
        }
        chain
    }

    fn parts(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.language.as_ref())
            .chain(self.region.as_deref())
            .chain(self.variant.as_deref())
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.language)?;
        if let Some(region) = &self.region {
            write!(f, "_{region}")?;
        }
        if let Some(variant) = &self.variant {
            // A variant without region keeps its slot: `ll__VARIANT`
            if self.region.is_none() {
                write!(f, "_")?;
            }
            write!(f, "_{variant}")?;
        }
        Ok(())
    }
}

impl FromStr for LocaleId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidLocale(s.to_string());
        let mut parts = s.split(['_', '-']);

        let language = parts.next().filter(|l| {
            (2..=3).contains(&l.len()) && l.chars().all(|c| c.is_ascii_alphabetic())
        });
        let language = language.ok_or_else(invalid)?.to_ascii_lowercase();

        let region = match parts.next() {
            None | Some("") => None,
            Some(r) if r.len() == 2 && r.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(r.to_ascii_uppercase())
            }
            Some(r) if r.len() == 3 && r.chars().all(|c| c.is_ascii_digit()) => Some(r.to_string()),
            Some(_) => return Err(invalid()),
        };

        let variant = match parts.next() {
            None => None,
            Some(v)
                if (1..=8).contains(&v.len()) && v.chars().all(|c| c.is_ascii_alphanumeric()) =>
            {
                Some(v.to_string())
            }
            Some(_) => return Err(invalid()),
        };

        if parts.next().is_some() {
            return Err(invalid());
        }

        Ok(Self {
            language: Cow::Owned(language),
            region: region.map(Cow::Owned),
            variant: variant.map(Cow::Owned),
        })
    }
}

/// Settings a single table entry overrides; unset fields inherit from the parent
#[derive(Debug, Clone, Default, PartialEq)]
struct LocaleOverrides {
    decimal_point: Option<char>,
    thousands_separator: Option<char>,
    min_grouping_digits: Option<usize>,
    digits: Option<[char; 10]>,
    minus_sign: Option<char>,
    percent_sign: Option<char>,
    currency_symbol: Option<String>,
    currency_fraction_digits: Option<usize>,
    decimal_pattern: Option<String>,
    currency_pattern: Option<String>,
}

impl LocaleOverrides {
    /// Parse a single locale entry from TOML
    fn from_toml(key: &str, value: &toml::Value) -> Result<Self> {
        let table = value
            .as_table()
            .ok_or_else(|| Error::LocaleData(format!("{key} is not a table")))?;

        let mut overrides = Self::default();
        for (field, value) in table {
            let context = || format!("{key}.{field}");
            match field.as_str() {
                "decimal" => overrides.decimal_point = Some(single_char(value, context)?),
                "group" => overrides.thousands_separator = Some(single_char(value, context)?),
                "minus" => overrides.minus_sign = Some(single_char(value, context)?),
                "percent" => overrides.percent_sign = Some(single_char(value, context)?),
                "min_grouping_digits" => {
                    overrides.min_grouping_digits = Some(non_negative(value, context)?)
                }
                "currency_digits" => {
                    overrides.currency_fraction_digits = Some(non_negative(value, context)?)
                }
                "currency_symbol" => {
                    overrides.currency_symbol = Some(string(value, context)?.to_string())
                }
                "decimal_pattern" => {
                    overrides.decimal_pattern = Some(string(value, context)?.to_string())
                }
                "currency_pattern" => {
                    overrides.currency_pattern = Some(string(value, context)?.to_string())
                }
                "digits" => {
                    let glyphs: Vec<char> = string(value, context)?.chars().collect();
                    let digits: [char; 10] = glyphs.try_into().map_err(|_| {
                        Error::LocaleData(format!("{} must hold exactly ten digits", context()))
                    })?;
                    overrides.digits = Some(digits);
                }
                _ => return Err(Error::LocaleData(format!("unknown field {}", context()))),
            }
        }

        Ok(overrides)
    }

    /// Apply these overrides onto resolved settings
    fn apply(&self, settings: &mut LocaleSettings) {
        if let Some(c) = self.decimal_point {
            settings.decimal_point = c;
        }
        if let Some(c) = self.thousands_separator {
            settings.thousands_separator = c;
        }
        if let Some(n) = self.min_grouping_digits {
            settings.min_grouping_digits = n;
        }
        if let Some(digits) = self.digits {
            settings.digits = digits;
        }
        if let Some(c) = self.minus_sign {
            settings.minus_sign = c;
        }
        if let Some(c) = self.percent_sign {
            settings.percent_sign = c;
        }
        if let Some(symbol) = &self.currency_symbol {
            settings.currency_symbol = symbol.clone();
        }
        if let Some(n) = self.currency_fraction_digits {
            settings.currency_fraction_digits = n;
        }
        if let Some(pattern) = &self.decimal_pattern {
            settings.decimal_pattern = pattern.clone();
        }
        if let Some(pattern) = &self.currency_pattern {
            settings.currency_pattern = pattern.clone();
        }
    }

    /// Overlay `other` onto these overrides, field by field
    fn merge(&mut self, other: LocaleOverrides) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(if other.$field.is_some() {
                    self.$field = other.$field;
                })*
            };
        }
        take!(
            decimal_point,
            thousands_separator,
            min_grouping_digits,
            digits,
            minus_sign,
            percent_sign,
            currency_symbol,
            currency_fraction_digits,
            decimal_pattern,
            currency_pattern
        );
    }
}

fn string<'v>(value: &'v toml::Value, context: impl Fn() -> String) -> Result<&'v str> {
    value
        .as_str()
        .ok_or_else(|| Error::LocaleData(format!("{} must be a string", context())))
}

fn single_char(value: &toml::Value, context: impl Fn() -> String) -> Result<char> {
    let s = string(value, &context)?;
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::LocaleData(format!(
            "{} must be a single character, got {s:?}",
            context()
        ))),
    }
}

fn non_negative(value: &toml::Value, context: impl Fn() -> String) -> Result<usize> {
    value
        .as_integer()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| Error::LocaleData(format!("{} must be a non-negative integer", context())))
}

/// A table of locale settings with layered inheritance
///
/// Entries are keyed by locale (`en`, `en_US`, `ja_JP_JP`) and only carry the
/// fields they change. Resolution starts from `[base]` and applies the entries
/// for the language, then the region, then the variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleTable {
    base: LocaleOverrides,
    entries: BTreeMap<LocaleId, LocaleOverrides>,
}

// Global instance for the embedded locale data
static BUILTIN_TABLE: OnceLock<LocaleTable> = OnceLock::new();

impl LocaleTable {
    /// Get the built-in table embedded in the crate
    pub fn builtin() -> &'static LocaleTable {
        BUILTIN_TABLE.get_or_init(|| {
            let data = include_str!("locale/locale_settings.toml");
            LocaleTable::from_toml_str(data).unwrap_or_else(|e| {
                // Just log the error and continue with base settings only
                error!("Failed to load embedded locale data: {e}");
                LocaleTable::default()
            })
        })
    }

    /// Parse a table from TOML
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let parsed: toml::Table =
            toml::from_str(toml_str).map_err(|e| Error::LocaleData(e.to_string()))?;

        let mut table = Self::default();
        for (key, value) in &parsed {
            let overrides = LocaleOverrides::from_toml(key, value)?;
            if key == "base" {
                table.base = overrides;
            } else {
                let id: LocaleId = key
                    .parse()
                    .map_err(|_| Error::LocaleData(format!("invalid locale key {key:?}")))?;
                table.entries.insert(id, overrides);
            }
        }

        debug!("Parsed locale table with {} entries", table.entries.len());
        Ok(table)
    }

    /// Read and parse a table from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&data)
    }

    /// Overlay another table onto this one; fields set in `other` win
    pub fn merge(&mut self, other: LocaleTable) {
        self.base.merge(other.base);
        for (id, overrides) in other.entries {
            self.entries.entry(id).or_default().merge(overrides);
        }
    }

    /// Whether the table has an entry for exactly this locale
    pub fn contains(&self, locale: &LocaleId) -> bool {
        self.entries.contains_key(locale)
    }

    /// Resolve the settings for a locale, falling back to its parents and the base
    pub fn settings(&self, locale: &LocaleId) -> LocaleSettings {
        let mut settings = LocaleSettings::default();
        self.base.apply(&mut settings);

        let mut matched = false;
        for id in locale.lookup_chain() {
            if let Some(overrides) = self.entries.get(&id) {
                overrides.apply(&mut settings);
                matched = true;
            }
        }

        if !matched {
            debug!("No locale data for {locale}, using base settings");
        }
        settings
    }

    /// List all locales with an entry, sorted
    pub fn available_locales(&self) -> Vec<LocaleId> {
        self.entries.keys().cloned().collect()
    }
}
