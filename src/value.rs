use crate::error::{ConversionError, ParseBoolError};

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts `0`, `f`, `F`,
/// `FALSE`, `false`, `False`. Anything else, including surrounding whitespace, is rejected.
pub fn parse_bool(value: &str) -> Result<bool, ParseBoolError> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseBoolError),
    }
}

/// Parse a decimal float, rejecting text too large in magnitude for `f64`.
///
/// `str::parse` rounds such text to an infinity; here that is an error unless the text spells
/// out `inf` or `infinity` itself.
pub fn parse_float(value: &str) -> Result<f64, ConversionError> {
    let parsed = value.parse::<f64>()?;

    if parsed.is_infinite() && !is_infinity_literal(value) {
        return Err(ConversionError::FloatOutOfRange);
    }

    Ok(parsed)
}

fn is_infinity_literal(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);

    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", true)]
    #[case("t", true)]
    #[case("T", true)]
    #[case("TRUE", true)]
    #[case("true", true)]
    #[case("True", true)]
    #[case("0", false)]
    #[case("f", false)]
    #[case("F", false)]
    #[case("FALSE", false)]
    #[case("false", false)]
    #[case("False", false)]
    fn accepted_literals(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(parse_bool(text), Ok(expected));
    }

    #[rstest]
    #[case("yes")]
    #[case("tRUE")]
    #[case(" true")]
    #[case("2")]
    fn rejected_literals(#[case] text: &str) {
        assert_eq!(parse_bool(text), Err(ParseBoolError));
    }

    #[rstest]
    #[case("1e308", 1e308)]
    #[case("-2.5E-3", -2.5e-3)]
    #[case("inf", f64::INFINITY)]
    #[case("-Infinity", f64::NEG_INFINITY)]
    fn accepted_floats(#[case] text: &str, #[case] expected: f64) {
        assert_eq!(parse_float(text).ok(), Some(expected));
    }

    #[rstest]
    #[case("1e400")]
    #[case("-1e400")]
    fn overflowing_floats(#[case] text: &str) {
        assert!(matches!(
            parse_float(text),
            Err(ConversionError::FloatOutOfRange)
        ));
    }

    #[test]
    fn malformed_float() {
        assert!(matches!(parse_float("1.2.3"), Err(ConversionError::Float(_))));
    }
}
