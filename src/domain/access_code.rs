use std::fmt;

pub const ACCESS_CODE_LENGTH: usize = 8;

/// An 8-character student access code. The value is never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessCode(String);

impl AccessCode {
    /// Counts characters as typed. Surrounding spaces are part of the code.
    pub fn parse(raw: &str) -> Result<Self, AccessCodeError> {
        let length = raw.chars().count();
        if length != ACCESS_CODE_LENGTH {
            return Err(AccessCodeError::InvalidLength(length));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessCode([REDACTED])")
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum AccessCodeError {
    #[error("access code must have 8 characters, got {0}")]
    InvalidLength(usize),
}
