//! Decimal digit arithmetic on the shortest representation of an `f64`

use crate::types::RoundingMode;

/// Integer and fractional ASCII digits of a rounded value
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RoundedDigits {
    pub integer: String,
    pub fraction: String,
}

/// Round a non-negative finite value to `places` fractional digits
///
/// Works on the shortest round-trip decimal representation, so `0.995` rounds to
/// `1.00` with [`RoundingMode::HalfUp`] even though its binary value is slightly
/// below the tie.
pub(crate) fn round_to_places(value: f64, places: usize, mode: RoundingMode) -> RoundedDigits {
    // `Display` for f64 never uses exponent notation
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    if frac_part.len() <= places {
        let mut fraction = frac_part.to_string();
        fraction.extend(std::iter::repeat_n('0', places - frac_part.len()));
        return RoundedDigits {
            integer: int_part.to_string(),
            fraction,
        };
    }

    let (kept, dropped) = frac_part.split_at(places);
    let mut all: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();

    let first_dropped = dropped.as_bytes()[0];
    let rest_nonzero = dropped.bytes().skip(1).any(|b| b != b'0');
    let last_kept_odd = all.last().is_some_and(|b| (b - b'0') % 2 == 1);

    let round_up = match mode {
        RoundingMode::HalfUp => first_dropped >= b'5',
        RoundingMode::HalfEven => {
            first_dropped > b'5' || (first_dropped == b'5' && (rest_nonzero || last_kept_odd))
        }
    };

    if round_up {
        let mut carry = true;
        for digit in all.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            all.insert(0, b'1');
        }
    }

    let split = all.len() - places;
    let digits = String::from_utf8_lossy(&all).into_owned();
    let (integer, fraction) = digits.split_at(split);
    RoundedDigits {
        integer: integer.to_string(),
        fraction: fraction.to_string(),
    }
}

/// Insert `separator` into an ASCII integer digit string
///
/// `primary` is the size of the rightmost group, `secondary` the size of every group
/// to its left. Grouping is skipped when the number has fewer than
/// `primary + min_grouping` digits.
pub(crate) fn group_integer(
    digits: &str,
    separator: char,
    primary: usize,
    secondary: usize,
    min_grouping: usize,
) -> String {
    let len = digits.chars().count();
    if primary == 0 || len < primary + min_grouping.max(1) {
        return digits.to_string();
    }

    // Positions (counted from the right) after which a separator goes
    let mut boundaries = Vec::new();
    let mut pos = primary;
    while pos < len {
        boundaries.push(len - pos);
        pos += secondary.max(1);
    }

    let mut result = String::with_capacity(len + boundaries.len() * separator.len_utf8());
    for (i, c) in digits.chars().enumerate() {
        if boundaries.contains(&i) {
            result.push(separator);
        }
        result.push(c);
    }
    result
}
