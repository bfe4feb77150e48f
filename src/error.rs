use thiserror::Error;

/// A locale code that does not name one of the site's supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized locale code: {0}")]
pub struct LocaleParseError(pub String);
