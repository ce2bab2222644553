use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("unknown helper `{name}`; expected one of: previous, hasNext")]
    UnknownHelper { name: String },
    #[error("invalid value for environment variable `{key}`; expected {expected}")]
    InvalidValue { key: String, expected: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn unknown_helper(name: &str) -> Self {
        Self::UnknownHelper {
            name: name.to_string(),
        }
    }

    pub fn invalid_value(key: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            expected,
        }
    }
}
