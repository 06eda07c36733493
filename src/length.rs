use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 256;

pub fn validate_length(raw: &str) -> Result<usize> {
    let trimmed = raw.trim();

    match trimmed.parse::<i128>() {
        Ok(value) if value < MIN_LENGTH as i128 => Err(Error::InvalidLength(raw.to_string())),
        Ok(value) if value > MAX_LENGTH as i128 => {
            Err(Error::LengthTooLarge(usize::try_from(value).unwrap_or(usize::MAX)))
        }
        Ok(value) => Ok(value as usize),
        Err(_) if is_unsigned_integer(trimmed) => Err(Error::LengthTooLarge(usize::MAX)),
        Err(_) => Err(Error::InvalidLength(raw.to_string())),
    }
}

pub fn check_length(length: usize) -> Result<usize> {
    if length < MIN_LENGTH {
        return Err(Error::InvalidLength(length.to_string()));
    }
    if length > MAX_LENGTH {
        return Err(Error::LengthTooLarge(length));
    }
    Ok(length)
}

// Overflowing i128 is still "an integer", just a huge one.
fn is_unsigned_integer(s: &str) -> bool {
    let digits = s.strip_prefix('+').unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
