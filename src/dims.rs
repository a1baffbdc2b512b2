// Free-form dimension parsing: "3x4", "3 X 4", "3,5x4.2", "3 4".
// Comma is a locale decimal separator; only the first one is normalized.

use crate::error::EstimatorError;
use crate::types::DimensionPair;

/// Parse a free-form dimension string into a width/height pair.
///
/// Normalization: trim, lowercase, first comma becomes a period. When
/// the string contains `x` it splits on every `x`; otherwise on
/// whitespace runs. Tokens beyond the first two are ignored. Values
/// pass through unclamped; zero or negative dimensions are the
/// caller's problem.
pub fn parse_dimensions(input: &str) -> Result<DimensionPair, EstimatorError> {
    let normalized = input.trim().to_lowercase().replacen(',', ".", 1);

    let tokens: Vec<&str> = if normalized.contains('x') {
        normalized.split('x').map(str::trim).collect()
    } else {
        normalized.split_whitespace().collect()
    };

    if tokens.len() < 2 {
        return Err(EstimatorError::BadFormat);
    }

    match (numeric_prefix(tokens[0]), numeric_prefix(tokens[1])) {
        (Some(width), Some(height)) => Ok(DimensionPair::new(width, height)),
        _ => Err(EstimatorError::NotNumeric),
    }
}

/// Leading-numeric-prefix parse: a token that starts with a valid
/// number but has trailing garbage still yields that number ("3.5m" is
/// 3.5); a token with no numeric prefix yields nothing.
fn numeric_prefix(token: &str) -> Option<f64> {
    let bytes = token.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
            mantissa_digits += 1;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // Take an exponent only when it is complete; "3e" stays 3.
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    token[..end].parse::<f64>().ok()
}
