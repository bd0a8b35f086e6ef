//! Split domain errors
//!
//! Every error is a deterministic function of the request: retrying with the
//! same input produces the same error.

use core_kernel::{CoreError, MemberId, MoneyError};
use thiserror::Error;

/// Errors that can occur while computing a split
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Structurally invalid request
    #[error("Invalid input for {field}: {message}")]
    InvalidInput { field: String, message: String },

    /// An item references someone outside the declared party
    #[error("Assigned person {member} not in party list (item '{item}')")]
    UnassignedParty {
        member: MemberId,
        item: String,
        /// Path of the offending assignment, e.g. `items[1].assigned_to`
        field: String,
    },

    /// Output of the receipt extraction service failed shape checks
    #[error("Malformed upstream data in {field}: {message}")]
    MalformedUpstreamData { field: String, message: String },

    /// Arithmetic failure while combining amounts
    #[error("Money error: {0}")]
    Money(#[from] MoneyError),
}

impl SplitError {
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        SplitError::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn malformed(field: impl Into<String>, message: impl Into<String>) -> Self {
        SplitError::MalformedUpstreamData {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Stable snake_case tag for the error kind
    ///
    /// Arithmetic failures are reported as invalid input: they only occur for
    /// amounts no real receipt carries.
    pub fn kind(&self) -> &'static str {
        match self {
            SplitError::InvalidInput { .. } | SplitError::Money(_) => "invalid_input",
            SplitError::UnassignedParty { .. } => "unassigned_party",
            SplitError::MalformedUpstreamData { .. } => "malformed_upstream_data",
        }
    }

    /// The request field the error refers to, when there is one
    pub fn field(&self) -> Option<&str> {
        match self {
            SplitError::InvalidInput { field, .. }
            | SplitError::UnassignedParty { field, .. }
            | SplitError::MalformedUpstreamData { field, .. } => Some(field),
            SplitError::Money(_) => None,
        }
    }
}

impl From<CoreError> for SplitError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(message) => SplitError::invalid_input("member", message),
        }
    }
}
