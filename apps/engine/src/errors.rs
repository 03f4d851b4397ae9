use thiserror::Error;

/// Engine-level error type.
///
/// The analysis pipeline itself has no fallible operations: empty skill
/// sets, unrecognized topic tags, and repositories with no matching
/// languages are all tolerated. Errors exist only at the boundaries —
/// payload shape and taxonomy construction.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Malformed profile payload: {0}")]
    MalformedInput(String),

    #[error("Invalid taxonomy data: {0}")]
    Taxonomy(String),
}
