//! The product rule table and the individual checks it is built from.
//!
//! Checks look at the raw JSON value of a single field. `None` means the key was absent.

use chrono::NaiveDate;
use serde_json::Value;

/// One step of a field's rule chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Check {
    /// The value is a JSON string.
    IsString,
    /// The value is present, not `null` and not `""`.
    NotEmpty,
    /// The trimmed string is not empty.
    TrimmedNotEmpty,
    /// The trimmed string has at least this many characters.
    TrimmedMinLength(usize),
    /// The string has at least this many characters.
    MinLength(usize),
    /// An integer strictly greater than zero.
    PositiveInteger,
    /// A JSON number, or a decimal string without exponent.
    Numeric,
    /// A numeric value strictly greater than zero.
    GreaterThanZero,
    /// A real calendar date written exactly as `YYYY-MM-DD`.
    IsoDate,
}

impl Check {
    pub fn passes(self, value: Option<&Value>) -> bool {
        match self {
            Check::IsString => matches!(value, Some(Value::String(_))),
            Check::NotEmpty => !matches!(value, None | Some(Value::Null))
                && value.and_then(Value::as_str) != Some(""),
            Check::TrimmedNotEmpty => value
                .and_then(Value::as_str)
                .is_some_and(|s| !s.trim().is_empty()),
            Check::TrimmedMinLength(min) => value
                .and_then(Value::as_str)
                .is_some_and(|s| s.trim().chars().count() >= min),
            Check::MinLength(min) => value
                .and_then(Value::as_str)
                .is_some_and(|s| s.chars().count() >= min),
            Check::PositiveInteger => value.and_then(as_integer).is_some_and(|n| n > 0),
            Check::Numeric => value.is_some_and(is_numeric),
            Check::GreaterThanZero => value.and_then(as_number).is_some_and(|n| n > 0.0),
            Check::IsoDate => value.and_then(Value::as_str).and_then(parse_date).is_some(),
        }
    }
}

/// A rule step and the message reported when it fails.
#[derive(Debug, Clone, Copy)]
pub struct Step {
    pub check: Check,
    pub msg: &'static str,
}

const fn step(check: Check, msg: &'static str) -> Step {
    Step { check, msg }
}

/// The ordered rule chain of one body field.
#[derive(Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub steps: &'static [Step],
}

const INVALID: &str = "Invalid value";

/// Rules for a product payload, in report order.
pub const PRODUCT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        steps: &[
            step(Check::IsString, "Name is required"),
            step(Check::TrimmedNotEmpty, "Nazwa jest wymagana"),
            step(
                Check::TrimmedMinLength(3),
                "Nazwa musi mieć przynajmniej 3 znaki",
            ),
        ],
    },
    FieldRule {
        field: "category",
        steps: &[
            step(Check::NotEmpty, "Kategoria wymagana"),
            step(Check::IsString, INVALID),
        ],
    },
    FieldRule {
        field: "quantity",
        steps: &[
            step(Check::NotEmpty, "Ilość wymagana"),
            step(Check::PositiveInteger, "Liczba całkowita wymagana"),
        ],
    },
    FieldRule {
        field: "unitPrice",
        steps: &[
            step(Check::NotEmpty, "Cena wymagana"),
            step(Check::Numeric, "Cena musi być liczbą"),
            step(Check::GreaterThanZero, "Cena większa od zera"),
        ],
    },
    FieldRule {
        field: "dateAdded",
        steps: &[
            step(Check::NotEmpty, "Data jest wymagana"),
            step(Check::IsoDate, "Data musi być w formacie YYYY-MM-DD"),
        ],
    },
    FieldRule {
        field: "supplier",
        steps: &[
            step(Check::NotEmpty, "Dostawca jest wymagany"),
            step(Check::IsString, INVALID),
            step(Check::MinLength(3), INVALID),
        ],
    },
];

/// Reads an integer from a JSON number without fraction or from a plain decimal string.
///
/// Strings must not carry leading zeros, whitespace or an exponent.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => {
            let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
            let canonical = digits == "0"
                || (!digits.is_empty()
                    && !digits.starts_with('0')
                    && digits.bytes().all(|b| b.is_ascii_digit()));
            if canonical {
                s.parse().ok()
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Reads a number from a JSON number or a numeric string.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if is_numeric_str(s) => s.parse().ok(),
        _ => None,
    }
}

fn is_numeric(value: &Value) -> bool {
    match value {
        Value::Number(_) => true,
        Value::String(s) => is_numeric_str(s),
        _ => false,
    }
}

/// `[+-]?digits`, `[+-]?digits.digits` or `[+-]?.digits`.
fn is_numeric_str(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => ("", unsigned),
    };
    !frac_part.is_empty()
        && int_part.bytes().all(|b| b.is_ascii_digit())
        && frac_part.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a strict `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_not_empty() {
        assert!(!Check::NotEmpty.passes(None));
        assert!(!Check::NotEmpty.passes(Some(&Value::Null)));
        assert!(!Check::NotEmpty.passes(Some(&json!(""))));
        assert!(Check::NotEmpty.passes(Some(&json!(" "))));
        assert!(Check::NotEmpty.passes(Some(&json!(0))));
        assert!(Check::NotEmpty.passes(Some(&json!(false))));
    }

    #[test]
    fn test_integers() {
        assert_eq!(as_integer(&json!(5)), Some(5));
        assert_eq!(as_integer(&json!(5.0)), Some(5));
        assert_eq!(as_integer(&json!(-3)), Some(-3));
        assert_eq!(as_integer(&json!("12")), Some(12));
        assert_eq!(as_integer(&json!("+7")), Some(7));
        assert_eq!(as_integer(&json!("0")), Some(0));
        assert_eq!(as_integer(&json!(5.5)), None);
        assert_eq!(as_integer(&json!("05")), None);
        assert_eq!(as_integer(&json!("1e3")), None);
        assert_eq!(as_integer(&json!(" 5")), None);
        assert_eq!(as_integer(&json!(true)), None);
    }

    #[test]
    fn test_positive_integer() {
        assert!(Check::PositiveInteger.passes(Some(&json!(1))));
        assert!(!Check::PositiveInteger.passes(Some(&json!(0))));
        assert!(!Check::PositiveInteger.passes(Some(&json!(-1))));
        assert!(!Check::PositiveInteger.passes(Some(&json!("abc"))));
    }

    #[test]
    fn test_numeric_strings() {
        for ok in ["9.99", "10", "+1.5", "-2", ".5", "007"] {
            assert!(is_numeric_str(ok), "{ok} should be numeric");
        }
        for bad in ["", "1.", "1e5", "abc", "1.2.3", " 1", "-"] {
            assert!(!is_numeric_str(bad), "{bad} should not be numeric");
        }
        assert_eq!(as_number(&json!("9.99")), Some(9.99));
        assert_eq!(as_number(&json!(3)), Some(3.0));
        assert_eq!(as_number(&json!([1])), None);
    }

    #[test]
    fn test_dates() {
        assert_eq!(
            parse_date("2024-01-15"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert!(parse_date("2024-02-29").is_some());
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("2024-13-40").is_none());
        assert!(parse_date("2024-1-15").is_none());
        assert!(parse_date("15-01-2024").is_none());
        assert!(parse_date("2024/01/15").is_none());
        assert!(parse_date("+024-01-15").is_none());
    }

    #[test]
    fn test_rule_table_covers_every_field_once() {
        let fields: Vec<&str> = PRODUCT_RULES.iter().map(|rule| rule.field).collect();
        assert_eq!(
            fields,
            ["name", "category", "quantity", "unitPrice", "dateAdded", "supplier"]
        );
    }
}
