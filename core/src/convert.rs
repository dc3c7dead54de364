//! Token-to-value conversion strategies.
//!
//! Options are parameterised by a plain function pointer rather than by a
//! subtype per value type. [`from_str`] is the default for any [`FromStr`]
//! type; it requires the whole token to convert, so `"12abc"` is rejected for
//! an integer target.

use std::fmt::Display;
use std::str::FromStr;

/// Converts one token into a value, or explains why it cannot.
pub type Converter<T> = fn(&str) -> Result<T, String>;

/// Converts via [`FromStr`], consuming the whole token.
///
/// # Examples
///
/// ```
/// use argp_core::convert;
///
/// assert_eq!(convert::from_str::<u32>("42"), Ok(42));
/// assert!(convert::from_str::<u32>("12abc").is_err());
/// assert!(convert::from_str::<f64>("1.5x").is_err());
/// ```
pub fn from_str<T>(token: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse::<T>().map_err(|e| e.to_string())
}

/// Returns the token text unchanged.
pub fn verbatim(token: &str) -> Result<String, String> {
    Ok(token.to_string())
}

/// Parses an unsigned integer written in decimal, `0x` hex, `0o` octal or
/// `0b` binary.
///
/// # Examples
///
/// ```
/// use argp_core::convert;
///
/// assert_eq!(convert::radix_u64("0x1f"), Ok(31));
/// assert_eq!(convert::radix_u64("0b101"), Ok(5));
/// assert_eq!(convert::radix_u64("17"), Ok(17));
/// assert!(convert::radix_u64("0xzz").is_err());
/// ```
pub fn radix_u64(token: &str) -> Result<u64, String> {
    let (digits, radix) = match token.get(..2) {
        Some("0x") | Some("0X") => (&token[2..], 16),
        Some("0o") | Some("0O") => (&token[2..], 8),
        Some("0b") | Some("0B") => (&token[2..], 2),
        _ => (token, 10),
    };
    u64::from_str_radix(digits, radix).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_rejects_trailing_garbage() {
        assert!(from_str::<i64>("12abc").is_err());
        assert!(from_str::<i64>("abc").is_err());
        assert!(from_str::<i64>("").is_err());
        assert_eq!(from_str::<i64>("-7"), Ok(-7));
    }

    #[test]
    fn test_from_str_does_not_trim_whitespace() {
        assert!(from_str::<u8>(" 5").is_err());
    }

    #[test]
    fn test_verbatim_keeps_quotes_and_escapes() {
        assert_eq!(verbatim("'a b'\\n"), Ok("'a b'\\n".to_string()));
    }

    #[test]
    fn test_radix_u64_requires_digits_after_prefix() {
        assert!(radix_u64("0x").is_err());
        assert_eq!(radix_u64("0o17"), Ok(15));
    }
}
