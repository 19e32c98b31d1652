//! Parsing of textual sequences and targets
//!
//! Integers are parsed by hand so the core stays usable without `std`.
//! Lists accept commas and any ASCII whitespace as separators.

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{BisectError, SearchElement};

/// Parse a decimal integer with an optional leading `+` or `-`
///
/// Values outside the `i128` range are reported as overflow; narrower
/// element types apply their own range check on top.
pub(crate) fn parse_i128(s: &str) -> Result<i128, BisectError> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() {
        return Err(BisectError::InvalidNumber);
    }

    let mut result: i128 = 0;

    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            return Err(BisectError::InvalidNumber);
        }

        let digit = i128::from(byte - b'0');

        // Accumulate toward the sign so i128::MIN stays representable
        result = result
            .checked_mul(10)
            .and_then(|r| {
                if negative {
                    r.checked_sub(digit)
                } else {
                    r.checked_add(digit)
                }
            })
            .ok_or(BisectError::NumberOverflow)?;
    }

    Ok(result)
}

/// Parse a single element, ignoring surrounding whitespace
pub fn parse_integer<T: SearchElement>(s: &str) -> Result<T, BisectError> {
    T::from_decimal(s.trim())
}

/// Split a list such as `"1, 2, 3"` or `"1 2 3"` into value tokens
///
/// Empty tokens produced by repeated separators are skipped.
pub fn split_values(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
}

/// Parse a whole list into a vector, in input order
///
/// An input with no tokens yields an empty sequence.
#[cfg(feature = "alloc")]
pub fn parse_sequence<T: SearchElement>(s: &str) -> Result<Vec<T>, BisectError> {
    split_values(s).map(T::from_decimal).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_i128() {
        assert_eq!(parse_i128("0"), Ok(0));
        assert_eq!(parse_i128("123"), Ok(123));
        assert_eq!(parse_i128("+42"), Ok(42));
        assert_eq!(parse_i128("-42"), Ok(-42));
        assert_eq!(
            parse_i128("-170141183460469231731687303715884105728"),
            Ok(i128::MIN)
        );

        // Invalid cases
        assert_eq!(parse_i128(""), Err(BisectError::InvalidNumber));
        assert_eq!(parse_i128("-"), Err(BisectError::InvalidNumber));
        assert_eq!(parse_i128("abc"), Err(BisectError::InvalidNumber));
        assert_eq!(parse_i128("12a"), Err(BisectError::InvalidNumber));
        assert_eq!(parse_i128("--1"), Err(BisectError::InvalidNumber));
        assert_eq!(parse_i128("1.5"), Err(BisectError::InvalidNumber));
        assert_eq!(
            parse_i128("170141183460469231731687303715884105728"),
            Err(BisectError::NumberOverflow)
        );
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer::<i32>(" 5 "), Ok(5));
        assert_eq!(parse_integer::<u64>("7"), Ok(7));
        assert_eq!(parse_integer::<u32>("-7"), Err(BisectError::NumberOverflow));
        assert_eq!(parse_integer::<i32>(""), Err(BisectError::InvalidNumber));
    }

    #[test]
    fn test_split_values() {
        let tokens: [&str; 4] = {
            let mut it = split_values("1, 2,3\t4");
            core::array::from_fn(|_| it.next().unwrap_or(""))
        };
        assert_eq!(tokens, ["1", "2", "3", "4"]);

        assert_eq!(split_values("").count(), 0);
        assert_eq!(split_values(" ,, \n").count(), 0);
        assert_eq!(split_values("1,,2").count(), 2);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse_sequence::<i32>("1,2,3,4,5,6,7,8"),
            Ok(alloc::vec![1, 2, 3, 4, 5, 6, 7, 8])
        );
        assert_eq!(parse_sequence::<i64>("-3 0 3"), Ok(alloc::vec![-3, 0, 3]));
        assert_eq!(parse_sequence::<i32>(""), Ok(Vec::new()));
        assert_eq!(
            parse_sequence::<i32>("1,two,3"),
            Err(BisectError::InvalidNumber)
        );
    }
}
