use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Type error: {0}")]
    Type(String),

    #[error("Value error: {0}")]
    Value(String),

    #[error("Key error: {0}")]
    Key(String),

    #[error("{kind} `{name}` not found")]
    NotFound { kind: &'static str, name: String },

    #[error("Failed to read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed data in `{}`: {message}", .path.display())]
    Deserialization { path: PathBuf, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl CatalogError {
    pub fn type_error<S: Into<String>>(msg: S) -> Self {
        Self::Type(msg.into())
    }

    pub fn value_error<S: Into<String>>(msg: S) -> Self {
        Self::Value(msg.into())
    }

    pub fn key_error<S: Into<String>>(msg: S) -> Self {
        Self::Key(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    pub fn not_found<S: Into<String>>(kind: &'static str, name: S) -> Self {
        Self::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn io<P: Into<PathBuf>>(path: P, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means a lookup found no record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = CatalogError::not_found("teacher", "Nobody");
        assert_eq!(err.to_string(), "teacher `Nobody` not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_io_message_names_path() {
        let err = CatalogError::io(
            "data/teachers.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert!(err.to_string().contains("data/teachers.json"));
        assert!(!err.is_not_found());
    }
}
