//! Scalar parsers for the raw field substrings of a two-line element set.
//!
//! Numeric fields may carry leading or embedded space characters because the
//! format right-justifies optional sign characters; every parser here strips
//! spaces before interpreting the residue. Two field families need special
//! reconstruction on top of plain decimal parsing:
//!
//! - **compressed notation** (nddot, bstar): a sign, a 5-digit mantissa with
//!   an implied decimal point immediately after the sign, and a signed
//!   single-digit decimal exponent, with no `.` or `e` in the raw text
//!   (`" 12345-3"` means `0.12345e-3`);
//! - **eccentricity**: bare digits with an implied leading `0.`
//!   (`"1234567"` means `0.1234567`).
//!
//! Each sub-fragment of a compressed field is validated for length and
//! character class before numeric interpretation, so a malformed fragment is
//! rejected with a named error instead of producing a garbage parse.

use crate::elset_errors::ElsetError;
use crate::layout::FieldSpec;

/// Remove every space character, wherever it occurs.
fn strip_spaces(raw: &str) -> String {
    raw.chars().filter(|c| *c != ' ').collect()
}

/// Parse an unsigned integer field (catalog number).
pub(crate) fn parse_catalog_number(spec: FieldSpec, line: &str) -> Result<u32, ElsetError> {
    let raw = spec.extract(line)?;
    raw.trim()
        .parse::<u32>()
        .map_err(|source| ElsetError::InvalidInteger {
            field: spec.field,
            raw: raw.to_string(),
            source,
        })
}

/// Parse a small integer field (two-digit epoch year).
pub(crate) fn parse_integer(spec: FieldSpec, line: &str) -> Result<i32, ElsetError> {
    let raw = spec.extract(line)?;
    raw.trim()
        .parse::<i32>()
        .map_err(|source| ElsetError::InvalidInteger {
            field: spec.field,
            raw: raw.to_string(),
            source,
        })
}

/// Parse a plain signed or unsigned decimal field.
///
/// Arguments
/// ---------
/// * `spec`: the field's line and column range
/// * `line`: the full text of the line the field lives on
///
/// Return
/// ------
/// * the parsed value, or an attributable defect naming the field and the
///   raw text
pub(crate) fn parse_decimal(spec: FieldSpec, line: &str) -> Result<f64, ElsetError> {
    let raw = spec.extract(line)?;
    strip_spaces(raw)
        .parse::<f64>()
        .map_err(|source| ElsetError::InvalidDecimal {
            field: spec.field,
            raw: raw.to_string(),
            source,
        })
}

/// Reconstruct a compressed-notation decimal (nddot, bstar).
///
/// The 8-character fragment is sign (1) + mantissa (5) + signed exponent (2).
/// Each sub-fragment is validated before the value is assembled: the sign
/// must be space, `+` or `-`; the mantissa must be digits after space
/// stripping; the exponent must be an optionally signed digit string.
///
/// Arguments
/// ---------
/// * `spec`: the field's line and column range
/// * `line`: the full text of the line the field lives on
///
/// Return
/// ------
/// * the reconstructed value (`" 12345-3"` → `0.12345e-3`), or a
///   [`ElsetError::MalformedFragment`] defect
pub(crate) fn parse_compressed(spec: FieldSpec, line: &str) -> Result<f64, ElsetError> {
    let raw = spec.extract(line)?;
    let malformed = || ElsetError::MalformedFragment {
        field: spec.field,
        raw: raw.to_string(),
    };

    let sign = raw.get(0..1).ok_or_else(malformed)?;
    let sign = match sign {
        "-" => "-",
        " " | "+" => "",
        _ => return Err(malformed()),
    };

    let mantissa = strip_spaces(raw.get(1..6).ok_or_else(malformed)?);
    if mantissa.is_empty() || !mantissa.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    let exponent = strip_spaces(raw.get(6..8).ok_or_else(malformed)?);
    let exp_digits = exponent
        .strip_prefix(['+', '-'])
        .unwrap_or(exponent.as_str());
    if exp_digits.is_empty() || !exp_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }

    // Sub-fragments are clean, so the spliced decimal cannot fail to parse.
    format!("{sign}0.{mantissa}e{exponent}")
        .parse::<f64>()
        .map_err(|source| ElsetError::InvalidDecimal {
            field: spec.field,
            raw: raw.to_string(),
            source,
        })
}

/// Parse the eccentricity digits, prepending the implied `0.`.
pub(crate) fn parse_eccentricity(spec: FieldSpec, line: &str) -> Result<f64, ElsetError> {
    let raw = spec.extract(line)?;
    let digits = strip_spaces(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ElsetError::MalformedFragment {
            field: spec.field,
            raw: raw.to_string(),
        });
    }
    format!("0.{digits}")
        .parse::<f64>()
        .map_err(|source| ElsetError::InvalidDecimal {
            field: spec.field,
            raw: raw.to_string(),
            source,
        })
}
