//! Path operand parsing.
//!
//! Operands are base-10 unsigned 64-bit literals: a non-empty run of ASCII
//! digits, nothing else. The parsed value is then reinterpreted as `i64`
//! (two's complement), so `18446744073709551615` becomes `-1`.
//!
//! Path segments arrive percent-encoded; [`decode_operand`] decodes before
//! parsing.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperandError {
    #[error("parsing {0:?}: empty input")]
    Empty(String),

    #[error("parsing {0:?}: invalid syntax")]
    InvalidDigit(String),

    #[error("parsing {0:?}: value out of range")]
    OutOfRange(String),

    #[error("parsing {0:?}: invalid percent-encoding")]
    InvalidEncoding(String),
}

/// Percent-decode a raw path segment, then parse it as an operand.
///
/// # Errors
/// Returns [`OperandError::InvalidEncoding`] when the decoded bytes are not
/// UTF-8, otherwise whatever [`parse_operand`] returns.
pub fn decode_operand(encoded: &str) -> Result<i64, OperandError> {
    let decoded = urlencoding::decode(encoded)
        .map_err(|_| OperandError::InvalidEncoding(encoded.to_owned()))?;
    parse_operand(&decoded)
}

/// Parse a path operand.
///
/// # Errors
/// Returns [`OperandError`] for empty input, any non-digit character
/// (including signs and whitespace), or a value above `u64::MAX`.
pub fn parse_operand(raw: &str) -> Result<i64, OperandError> {
    if raw.is_empty() {
        return Err(OperandError::Empty(raw.to_owned()));
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OperandError::InvalidDigit(raw.to_owned()));
    }
    let value: u64 = raw
        .parse()
        .map_err(|_| OperandError::OutOfRange(raw.to_owned()))?;
    Ok(value.cast_signed())
}
