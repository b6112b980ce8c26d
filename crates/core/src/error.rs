use thiserror::Error;

/// Failures a caller of the pun engine needs to tell apart.
#[derive(Error, Debug, PartialEq)]
pub enum PunError {
    /// The target word has no pronunciation, so nothing can be compared
    #[error("given word not in dictionary so cannot continue: {0}")]
    UnknownTarget(String),
}
