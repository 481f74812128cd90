//! External representation of errors.
//!
//! The record only carries what every error has: `message`, `errorCode`
//! and, when the [`ReprConfig`] allows it, the text of the captured cause.
//! Subtype payloads are not represented.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::base::Error;
use crate::config::ReprConfig;
use crate::domain::AnyError;
use crate::fault::Fault;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

impl Error {
    pub fn to_record(&self, config: &ReprConfig) -> ErrorRecord {
        ErrorRecord {
            message: self.message().to_string(),
            error_code: self.error_code(),
            cause: if config.include_cause {
                self.cause().map(|fault| format!("{:#}", fault))
            } else {
                None
            },
        }
    }
}

impl AnyError {
    pub fn to_record(&self, config: &ReprConfig) -> ErrorRecord {
        self.as_error().to_record(config)
    }
}

impl From<ErrorRecord> for Error {
    fn from(record: ErrorRecord) -> Self {
        let error = match record.error_code {
            Some(code) => Error::with_code(record.message, code),
            None => Error::new(record.message),
        };
        match record.cause {
            Some(cause) => error.with_cause(Fault::msg(cause)),
            None => error,
        }
    }
}

impl Serialize for Error {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record(&ReprConfig::default()).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Error {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        ErrorRecord::deserialize(deserializer).map(Error::from)
    }
}

impl Serialize for AnyError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_error().serialize(serializer)
    }
}
