//! Error types for Ecotrace

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EcotraceError {
    // Draft promotion errors
    #[error("Invalid amount {input:?}: enter a number greater than zero")]
    InvalidAmount { input: String },

    // Catalog integrity errors
    #[error("Unknown activity {category}/{subtype}: not in the emission catalog")]
    UnknownActivity { category: String, subtype: String },

    // Submission errors
    #[error("Nothing to submit: add at least one activity")]
    EmptyBatch,

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Submission failed: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, EcotraceError>;
