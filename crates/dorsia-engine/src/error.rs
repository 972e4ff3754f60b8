use thiserror::Error;

/// Errors surfaced by engine operations. All are recoverable by the caller;
/// every operation is deterministic, so retrying with unchanged inputs fails
/// identically.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown diagnosis: {0}")]
    UnknownDiagnosis(String),

    #[error("no candidate diagnoses to score")]
    NoCandidates,

    #[error("unknown symptom: {0}")]
    UnknownSymptom(String),
}
