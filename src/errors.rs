use thiserror::Error;

/// Extraction-internal error taxonomy.
///
/// `NoMatchFound`, `ImplausibleCandidate` and `MalformedInput` are recovered
/// inside the orchestration state machine (the chain advances to the next
/// strategy or drops the single candidate). Only `SchemaUnsatisfiable`
/// corresponds to the terminal failed outcome; even then the caller sees an
/// `ExtractionOutcome`, never this enum.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("strategy produced zero candidates")]
    NoMatchFound,

    #[error("candidate rejected as implausible: {0}")]
    ImplausibleCandidate(String),

    #[error("no richer record set provides field '{field}'")]
    SchemaUnsatisfiable { field: String },

    #[error("malformed input: {0}")]
    MalformedInput(String),
}
