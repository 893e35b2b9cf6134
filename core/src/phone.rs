//! Phone number validation.

use crate::error::{TelcoError, TelcoResult};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PHONE_LEN: usize = 11;
pub const PHONE_PREFIX: &str = "03";

/// A validated subscriber number: exactly 11 characters starting with "03".
///
/// Nothing else is checked. Digits are not enforced, so the length and
/// prefix rules are the whole contract.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(input: &str) -> TelcoResult<Self> {
        if input.len() == PHONE_LEN && input.starts_with(PHONE_PREFIX) {
            Ok(Self(input.to_string()))
        } else {
            Err(TelcoError::InvalidPhoneNumber {
                input: input.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = TelcoError;

    fn try_from(value: String) -> TelcoResult<Self> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}
