use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    NotFound,
    Load,
    AlreadyExists,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    path: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            path: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Logical resource path the failure refers to, when one is known.
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(path) = &self.path {
            write!(f, " (resource: {path})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, ErrorKind};
    use std::error::Error as StdError;

    #[test]
    fn display_includes_kind_message_and_path() {
        let error = Error::new(ErrorKind::NotFound)
            .with_message("Resource not found: data/missing.json")
            .with_path("data/missing.json");

        let rendered = error.to_string();
        assert!(rendered.starts_with("NotFound"));
        assert!(rendered.contains("Resource not found: data/missing.json"));
        assert!(rendered.contains("(resource: data/missing.json)"));
    }

    #[test]
    fn source_chain_is_preserved() {
        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "stream error");
        let error = Error::new(ErrorKind::Load)
            .with_message("Error while loading json file: data/players.json")
            .with_source(cause);

        let source = error.source().expect("wrapped cause");
        assert!(source.to_string().contains("stream error"));
    }

    #[test]
    fn bare_error_has_no_path_or_source() {
        let error = Error::new(ErrorKind::AlreadyExists);
        assert_eq!(error.kind(), ErrorKind::AlreadyExists);
        assert!(error.path().is_none());
        assert!(error.source().is_none());
    }
}
