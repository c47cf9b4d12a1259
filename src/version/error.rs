use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum VersionError {
    #[error("Could not parse version string: {0}")]
    MalformedVersionString(String),

    #[error("Unknown point release: {0}")]
    MalformedPrereleaseToken(String),

    #[error("Invalid version grammar: {0}")]
    InvalidGrammar(#[from] regex::Error),
}
