use thiserror::Error;

/// Domain errors surfaced by the pipeline. Data-format problems abort a run
/// before any output is produced; configuration problems are reported when
/// the plan is loaded, not deferred to composition time.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unknown parameter set: {0}")]
    UnknownParameterSet(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}
