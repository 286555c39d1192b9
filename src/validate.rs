//! Validation of typed-in names and numbers.
//!
//! Every function takes raw console text and returns either the accepted
//! value or an [`InputError`]. Retry policy lives in [`crate::prompt`].

use crate::error::InputError;
use crate::records::{Record, Records};

/// Trims `input` and rejects it if nothing is left.
pub fn name(input: &str) -> Result<String, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::EmptyName);
    }
    Ok(trimmed.to_string())
}

/// Parses a real number and rejects negatives.
pub fn non_negative(input: &str) -> Result<f64, InputError> {
    let value = number(input)?;
    if value < 0.0 {
        return Err(InputError::Negative { value });
    }
    Ok(value)
}

/// Parses a real number that must be strictly greater than zero.
pub fn positive(input: &str) -> Result<f64, InputError> {
    let value = number(input)?;
    if value <= 0.0 {
        return Err(InputError::NotPositive { value });
    }
    Ok(value)
}

/// Parses a whole count that must be at least one.
pub fn count(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let n: i64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    if n <= 0 {
        return Err(InputError::NotPositive { value: n as f64 });
    }
    Ok(n as usize)
}

fn number(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    // "nan" and "inf" parse as f64 but are never meaningful here
    if !value.is_finite() {
        return Err(InputError::NotANumber {
            input: trimmed.to_string(),
        });
    }
    Ok(value)
}

/// Validates raw `(name, value)` pairs into a single record.
pub fn record(raw_name: &str, raw_value: &str) -> Result<Record, InputError> {
    Ok(Record::new(name(raw_name)?, non_negative(raw_value)?))
}

/// Builds [`Records`] from raw text pairs, stopping at the first invalid one.
///
/// Later duplicates overwrite earlier ones.
pub fn collect<I, N, V>(pairs: I) -> Result<Records, InputError>
where
    I: IntoIterator<Item = (N, V)>,
    N: AsRef<str>,
    V: AsRef<str>,
{
    let mut records = Records::new();
    for (n, v) in pairs {
        let r = record(n.as_ref(), v.as_ref())?;
        records.insert(r.name, r.value);
    }
    Ok(records)
}
