//! Literal expressions and their typed interpretation.

use alloc::string::String;

use crate::errors::Error;

/// A literal value, kept exactly as written in the source text.
///
/// # Example
///
/// ```
/// use metasequoia_ast::{Literal, LiteralValue};
///
/// assert_eq!(Literal::new("-42").as_int().unwrap(), -42);
/// assert_eq!(Literal::new("'abc'").value(), LiteralValue::String("abc".into()));
/// assert!(Literal::new("'abc'").as_int().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "testing", derive(arbitrary::Arbitrary))]
pub struct Literal {
    /// The literal text, including any quotes.
    pub text: String,
}

/// Typed interpretation of a [`Literal`].
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// An optionally signed decimal integer.
    Integer(i64),
    /// `TRUE` or `FALSE`, case-insensitive.
    Boolean(bool),
    /// A decimal number with a fraction or an exponent.
    Float(f64),
    /// `NULL`, case-insensitive.
    Null,
    /// Anything else, with surrounding single quotes removed.
    String(String),
}

fn is_int_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn is_float_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(at) => (&unsigned[..at], Some(&unsigned[at + 1..])),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let mantissa_ok = (!whole.is_empty() || !fraction.is_empty())
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit());
    let exponent_ok = exponent.is_none_or(is_int_literal);
    mantissa_ok && exponent_ok && (mantissa.contains('.') || exponent.is_some())
}

impl Literal {
    /// Creates a literal from its source text.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The literal text, as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parses the literal as an integer.
    ///
    /// # Errors
    ///
    /// * `LiteralConversion` - If the text is not an optionally signed decimal integer fitting in an `i64`.
    pub fn as_int(&self) -> Result<i64, Error> {
        let parsed = if is_int_literal(&self.text) {
            self.text.parse().ok()
        } else {
            None
        };
        parsed.ok_or_else(|| Error::LiteralConversion {
            literal: self.text.clone(),
            target: "integer",
        })
    }

    /// Classifies the literal text and returns its typed value.
    ///
    /// Integers are tried first, then booleans, floats and `NULL`; anything
    /// else is a string.
    #[must_use]
    pub fn value(&self) -> LiteralValue {
        let text = self.text.as_str();
        if let Ok(value) = self.as_int() {
            return LiteralValue::Integer(value);
        }
        if text.eq_ignore_ascii_case("TRUE") {
            return LiteralValue::Boolean(true);
        }
        if text.eq_ignore_ascii_case("FALSE") {
            return LiteralValue::Boolean(false);
        }
        if is_float_literal(text) || is_int_literal(text) {
            if let Ok(value) = text.parse() {
                return LiteralValue::Float(value);
            }
        }
        if text.eq_ignore_ascii_case("NULL") {
            return LiteralValue::Null;
        }
        LiteralValue::String(String::from(text.trim_matches('\'')))
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Literal::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_int() {
        assert_eq!(Literal::new("7").as_int(), Ok(7));
        assert_eq!(Literal::new("+7").as_int(), Ok(7));
        assert_eq!(Literal::new("-0").as_int(), Ok(0));
        assert_eq!(
            Literal::new("1.5").as_int(),
            Err(Error::LiteralConversion {
                literal: "1.5".into(),
                target: "integer"
            })
        );
        assert!(Literal::new("").as_int().is_err());
        assert!(Literal::new("-").as_int().is_err());
    }

    #[test]
    fn test_value_classification() {
        assert_eq!(Literal::new("12").value(), LiteralValue::Integer(12));
        assert_eq!(Literal::new("true").value(), LiteralValue::Boolean(true));
        assert_eq!(Literal::new("FALSE").value(), LiteralValue::Boolean(false));
        assert_eq!(Literal::new("1.25").value(), LiteralValue::Float(1.25));
        assert_eq!(Literal::new("2e3").value(), LiteralValue::Float(2000.0));
        assert_eq!(Literal::new(".5").value(), LiteralValue::Float(0.5));
        assert_eq!(Literal::new("null").value(), LiteralValue::Null);
        assert_eq!(
            Literal::new("'hello'").value(),
            LiteralValue::String("hello".into())
        );
        assert_eq!(
            Literal::new("inf").value(),
            LiteralValue::String("inf".into())
        );
    }

    #[test]
    fn test_integer_overflow_falls_back_to_float() {
        let value = Literal::new("99999999999999999999").value();
        assert!(matches!(value, LiteralValue::Float(_)));
    }
}
