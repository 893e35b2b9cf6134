use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelcoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Corrupt account record {}: line {line}: {reason}", .path.display())]
    Corrupt {
        path:   PathBuf,
        line:   usize,
        reason: String,
    },

    #[error("Invalid phone number.")]
    InvalidPhoneNumber { input: String },

    #[error("Invalid amount.")]
    InvalidAmount { amount: String },

    #[error("Invalid package.")]
    InvalidPackage { choice: String },

    #[error("Insufficient balance.")]
    InsufficientBalance { balance: f64, cost: f64 },

    #[error("No active package.")]
    NoActivePackage,

    #[error("Complaint message is empty.")]
    EmptyComplaint,

    #[error("Complaint message must fit on one line.")]
    MultilineComplaint,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TelcoError {
    /// True for errors caused by what the customer typed.
    /// These are reported on the console and never logged as faults.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            TelcoError::InvalidPhoneNumber { .. }
                | TelcoError::InvalidAmount { .. }
                | TelcoError::InvalidPackage { .. }
                | TelcoError::InsufficientBalance { .. }
                | TelcoError::NoActivePackage
                | TelcoError::EmptyComplaint
                | TelcoError::MultilineComplaint
        )
    }
}

pub type TelcoResult<T> = Result<T, TelcoError>;
